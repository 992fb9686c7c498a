use crate::ui::mvi::Intent;
use crate::ui::text::UiText;

/// Messages the login screen reports to its owner.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginIntent {
    /// Email field edited. Carries the full new text.
    EmailChanged(String),

    /// Password field edited. Carries the full new text.
    PasswordChanged(String),

    LoginClicked,

    SignUpClicked,

    /// The login service rejected or failed the submission.
    SubmissionFailed { message: UiText },
}

impl Intent for LoginIntent {}
