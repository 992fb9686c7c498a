//! View state of the login screen.

use crate::credentials::Credentials;
use crate::ui::mvi::UiState;
use crate::ui::text::UiText;

static EMPTY_CREDENTIALS: Credentials = Credentials::empty();

/// What the login screen should currently display.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoginViewState {
    /// Nothing entered yet.
    #[default]
    Initial,

    /// Credentials being edited, optionally with per-field errors.
    Active {
        credentials: Credentials,
        email_error: Option<UiText>,
        password_error: Option<UiText>,
    },

    /// Credentials handed to the login service; everything is frozen.
    Submitting { credentials: Credentials },

    /// The last submission failed. Fields stay editable for a retry.
    SubmissionError {
        credentials: Credentials,
        error_message: UiText,
    },
}

impl UiState for LoginViewState {}

impl LoginViewState {
    /// Active state without field errors.
    pub fn active(credentials: Credentials) -> Self {
        Self::Active {
            credentials,
            email_error: None,
            password_error: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        match self {
            Self::Initial => &EMPTY_CREDENTIALS,
            Self::Active { credentials, .. }
            | Self::Submitting { credentials }
            | Self::SubmissionError { credentials, .. } => credentials,
        }
    }

    pub fn input_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn button_enabled(&self) -> bool {
        !self.is_busy()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    pub fn email_error(&self) -> Option<&UiText> {
        match self {
            Self::Active { email_error, .. } => email_error.as_ref(),
            _ => None,
        }
    }

    pub fn password_error(&self) -> Option<&UiText> {
        match self {
            Self::Active { password_error, .. } => password_error.as_ref(),
            _ => None,
        }
    }

    pub fn submission_error(&self) -> Option<&UiText> {
        match self {
            Self::SubmissionError { error_message, .. } => Some(error_message),
            _ => None,
        }
    }

    /// Short variant name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Active { .. } => "active",
            Self::Submitting { .. } => "submitting",
            Self::SubmissionError { .. } => "submission_error",
        }
    }
}
