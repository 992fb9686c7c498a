use crate::credentials::Credentials;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::state::LoginViewState;
use crate::ui::mvi::Reducer;
use crate::ui::text::{StringId, UiText};

pub struct LoginReducer;

impl Reducer for LoginReducer {
    type State = LoginViewState;
    type Intent = LoginIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoginIntent::EmailChanged(email) => {
                if !state.input_enabled() {
                    return state;
                }
                let password_error = state.password_error().cloned();
                LoginViewState::Active {
                    credentials: state.credentials().with_email(email),
                    email_error: None,
                    password_error,
                }
            }
            LoginIntent::PasswordChanged(password) => {
                if !state.input_enabled() {
                    return state;
                }
                let email_error = state.email_error().cloned();
                LoginViewState::Active {
                    credentials: state.credentials().with_password(password),
                    email_error,
                    password_error: None,
                }
            }
            LoginIntent::LoginClicked => {
                if !state.button_enabled() {
                    return state;
                }
                submit(state.credentials().clone())
            }
            // Navigation belongs to the owner; the screen itself is unchanged.
            LoginIntent::SignUpClicked => state,
            LoginIntent::SubmissionFailed { message } => match state {
                LoginViewState::Submitting { credentials } => LoginViewState::SubmissionError {
                    credentials,
                    error_message: message,
                },
                other => other,
            },
        }
    }
}

fn submit(credentials: Credentials) -> LoginViewState {
    let email_error = credentials
        .email
        .is_blank()
        .then_some(UiText::Resource(StringId::EmptyEmail));
    let password_error = credentials
        .password
        .is_blank()
        .then_some(UiText::Resource(StringId::EmptyPassword));

    if email_error.is_some() || password_error.is_some() {
        LoginViewState::Active {
            credentials,
            email_error,
            password_error,
        }
    } else {
        LoginViewState::Submitting { credentials }
    }
}
