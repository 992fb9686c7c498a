use crate::credentials::{Credentials, Email};
use crate::service::LoginError;
use crate::ui::login::{
    Focus, LoginIntent, LoginReducer, LoginScreen, LoginScreenModel, LoginViewState,
    ScreenSettings,
};
use crate::ui::mvi::Reducer;
use crate::ui::text::Strings;

/// How an interactive login session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    LoggedIn { email: Email },
    SignUpRequested,
    Cancelled,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Owner of the login screen: holds the authoritative view state and the
/// UI-local focus, and turns screen messages into new states.
pub struct App {
    login: LoginViewState,
    focus: Focus,
    spinner_tick: u8,
    outcome: Option<SessionOutcome>,
    strings: Strings,
    settings: ScreenSettings,
}

impl App {
    pub fn new(strings: Strings, settings: ScreenSettings) -> Self {
        Self {
            login: LoginViewState::default(),
            focus: Focus::default(),
            spinner_tick: 0,
            outcome: None,
            strings,
            settings,
        }
    }

    pub fn with_state(mut self, state: LoginViewState) -> Self {
        self.login = state;
        self.ensure_focus_enabled();
        self
    }

    pub fn state(&self) -> &LoginViewState {
        &self.login
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn spinner_tick(&self) -> u8 {
        self.spinner_tick
    }

    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<&SessionOutcome> {
        self.outcome.as_ref()
    }

    pub fn take_outcome(&mut self) -> Option<SessionOutcome> {
        self.outcome.take()
    }

    pub fn request_quit(&mut self) {
        self.finish(SessionOutcome::Cancelled);
    }

    fn finish(&mut self, outcome: SessionOutcome) {
        if self.outcome.is_none() {
            tracing::info!(?outcome, "login session finished");
            self.outcome = Some(outcome);
        }
    }

    pub fn screen_model(&self) -> LoginScreenModel {
        LoginScreenModel::compose(&self.login, &self.strings)
    }

    /// Screen for `model` with this app's settings, focus and spinner.
    pub fn screen<'m>(&self, model: &'m LoginScreenModel) -> LoginScreen<'m> {
        LoginScreen::new(model, self.settings)
            .focus(Some(self.focus))
            .spinner_tick(self.spinner_tick)
    }

    /// Runs `intent` through the reducer.
    ///
    /// Returns the credentials to submit when the transition entered
    /// `Submitting`.
    pub fn dispatch(&mut self, intent: LoginIntent) -> Option<Credentials> {
        let was_busy = self.login.is_busy();
        let sign_up = matches!(intent, LoginIntent::SignUpClicked) && self.login.button_enabled();

        let from = self.login.name();
        dispatch_mvi!(self, login, LoginReducer, intent);
        tracing::debug!(from, to = self.login.name(), "login state transition");

        if sign_up {
            self.finish(SessionOutcome::SignUpRequested);
        }
        self.ensure_focus_enabled();

        if !was_busy && self.login.is_busy() {
            self.spinner_tick = 0;
            Some(self.login.credentials().clone())
        } else {
            None
        }
    }

    /// Applies the login service's answer. Results that arrive after the
    /// screen left `Submitting` are ignored.
    pub fn on_submission_result(&mut self, result: Result<(), LoginError>) {
        if !self.login.is_busy() {
            tracing::debug!("ignoring stale submission result");
            return;
        }
        match result {
            Ok(()) => {
                let email = self.login.credentials().email.clone();
                self.finish(SessionOutcome::LoggedIn { email });
            }
            Err(err) => {
                tracing::warn!(error = %err, "login submission failed");
                self.dispatch(LoginIntent::SubmissionFailed {
                    message: err.user_message(),
                });
            }
        }
    }

    pub fn on_tick(&mut self) {
        if self.login.is_busy() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }

    pub fn set_focus(&mut self, focus: Focus) {
        if self.screen_model().is_enabled(focus) {
            self.focus = focus;
        }
    }

    pub fn focus_next(&mut self) {
        self.move_focus(Focus::next);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(Focus::prev);
    }

    fn move_focus(&mut self, step: fn(Focus) -> Focus) {
        let model = self.screen_model();
        let mut candidate = step(self.focus);
        for _ in 0..Focus::ORDER.len() {
            if model.is_enabled(candidate) {
                self.focus = candidate;
                return;
            }
            candidate = step(candidate);
        }
    }

    /// Keeps focus where it is while everything is disabled, so it is
    /// restored when the controls come back.
    fn ensure_focus_enabled(&mut self) {
        let model = self.screen_model();
        if model.is_enabled(self.focus) {
            return;
        }
        if let Some(focus) = Focus::ORDER.into_iter().find(|f| model.is_enabled(*f)) {
            self.focus = focus;
        }
    }
}
