use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use toa_login::credentials::Credentials;
use toa_login::service::LoginError;
use toa_login::ui::app::{App, SessionOutcome};
use toa_login::ui::input::{handle_key, handle_paste};
use toa_login::ui::login::{Focus, LoginViewState, ScreenSettings};
use toa_login::ui::text::Strings;

fn app() -> App {
    App::new(Strings::new(), ScreenSettings::default())
}

fn press(app: &mut App, code: KeyCode) -> Option<Credentials> {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_str(app: &mut App, text: &str) {
    for ch in text.chars() {
        assert_eq!(press(app, KeyCode::Char(ch)), None);
    }
}

#[test]
fn every_keystroke_reaches_the_state() {
    let mut app = app();
    type_str(&mut app, "a@b");
    assert_eq!(app.state().credentials().email.as_str(), "a@b");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.state().credentials().email.as_str(), "a@");
}

#[test]
fn full_login_flow_submits_credentials() {
    let mut app = app();
    type_str(&mut app, "a@b.com");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus(), Focus::Password);
    type_str(&mut app, "x");

    let submitted = press(&mut app, KeyCode::Enter);
    assert_eq!(submitted, Some(Credentials::new("a@b.com", "x")));
    assert!(app.state().is_busy());
}

#[test]
fn keys_are_ignored_while_submitting() {
    let mut app = app().with_state(LoginViewState::Submitting {
        credentials: Credentials::new("a@b.com", "x"),
    });
    type_str(&mut app, "zzz");
    assert_eq!(press(&mut app, KeyCode::Enter), None);
    assert_eq!(
        app.state(),
        &LoginViewState::Submitting {
            credentials: Credentials::new("a@b.com", "x"),
        }
    );
}

#[test]
fn login_button_with_empty_fields_shows_field_errors() {
    let mut app = app();
    app.set_focus(Focus::Login);
    assert_eq!(press(&mut app, KeyCode::Char(' ')), None);

    let model = app.screen_model();
    assert_eq!(model.email.error.as_deref(), Some("Please enter an email."));
    assert_eq!(model.password.error.as_deref(), Some("Please enter a password"));
    assert_eq!(model.banner, None);
}

#[test]
fn sign_up_button_ends_session() {
    let mut app = app();
    app.set_focus(Focus::SignUp);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.take_outcome(), Some(SessionOutcome::SignUpRequested));
}

#[test]
fn escape_cancels() {
    let mut app = app();
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.take_outcome(), Some(SessionOutcome::Cancelled));
}

#[test]
fn ctrl_q_cancels() {
    let mut app = app();
    handle_key(
        &mut app,
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
    );
    assert_eq!(app.take_outcome(), Some(SessionOutcome::Cancelled));
}

#[test]
fn tab_cycles_focus() {
    let mut app = app();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Login);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.focus(), Focus::Password);
}

#[test]
fn paste_goes_to_focused_field() {
    let mut app = app();
    handle_paste(&mut app, "a@b.com\n");
    assert_eq!(app.state().credentials().email.as_str(), "a@b.com");

    app.set_focus(Focus::Login);
    handle_paste(&mut app, "ignored");
    assert_eq!(app.state().credentials().password.as_str(), "");
}

#[test]
fn retry_after_failure() {
    let mut app = app();
    type_str(&mut app, "a@b.com");
    press(&mut app, KeyCode::Tab);
    type_str(&mut app, "x");
    assert!(press(&mut app, KeyCode::Enter).is_some());

    app.on_submission_result(Err(LoginError::InvalidCredentials));
    assert_eq!(
        app.screen_model().banner.as_deref(),
        Some("Invalid email or password.")
    );
    assert_eq!(app.focus(), Focus::Password);

    assert_eq!(
        press(&mut app, KeyCode::Enter),
        Some(Credentials::new("a@b.com", "x"))
    );
}
