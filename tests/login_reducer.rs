use toa_login::credentials::Credentials;
use toa_login::ui::login::{LoginIntent, LoginReducer, LoginViewState};
use toa_login::ui::mvi::Reducer;
use toa_login::ui::text::{StringId, UiText};

fn filled() -> Credentials {
    Credentials::new("a@b.com", "x")
}

fn submitting() -> LoginViewState {
    LoginViewState::Submitting {
        credentials: filled(),
    }
}

#[test]
fn email_change_from_initial_becomes_active() {
    let state = LoginReducer::reduce(
        LoginViewState::Initial,
        LoginIntent::EmailChanged("a@b.com".into()),
    );
    assert_eq!(
        state,
        LoginViewState::active(Credentials::new("a@b.com", ""))
    );
}

#[test]
fn editing_clears_only_that_fields_error() {
    let state = LoginViewState::Active {
        credentials: Credentials::default(),
        email_error: Some(StringId::EmptyEmail.into()),
        password_error: Some(StringId::EmptyPassword.into()),
    };
    let state = LoginReducer::reduce(state, LoginIntent::EmailChanged("a".into()));
    assert_eq!(state.email_error(), None);
    assert_eq!(
        state.password_error(),
        Some(&UiText::Resource(StringId::EmptyPassword))
    );

    let state = LoginReducer::reduce(state, LoginIntent::PasswordChanged("p".into()));
    assert_eq!(state.password_error(), None);
}

#[test]
fn editing_after_submission_error_drops_banner() {
    let state = LoginViewState::SubmissionError {
        credentials: filled(),
        error_message: UiText::plain("Something went wrong."),
    };
    let state = LoginReducer::reduce(state, LoginIntent::PasswordChanged("y".into()));
    assert_eq!(state.submission_error(), None);
    assert_eq!(state.credentials(), &Credentials::new("a@b.com", "y"));
}

#[test]
fn edits_are_ignored_while_submitting() {
    let state = LoginReducer::reduce(submitting(), LoginIntent::EmailChanged("z".into()));
    assert_eq!(state, submitting());
}

#[test]
fn login_with_blank_fields_sets_field_errors() {
    let state = LoginReducer::reduce(LoginViewState::Initial, LoginIntent::LoginClicked);
    assert_eq!(
        state,
        LoginViewState::Active {
            credentials: Credentials::default(),
            email_error: Some(UiText::Resource(StringId::EmptyEmail)),
            password_error: Some(UiText::Resource(StringId::EmptyPassword)),
        }
    );
}

#[test]
fn login_with_blank_password_only_flags_password() {
    let state = LoginReducer::reduce(
        LoginViewState::active(Credentials::new("a@b.com", "  ")),
        LoginIntent::LoginClicked,
    );
    assert_eq!(state.email_error(), None);
    assert!(state.password_error().is_some());
}

#[test]
fn login_with_filled_fields_submits() {
    let state = LoginReducer::reduce(
        LoginViewState::active(filled()),
        LoginIntent::LoginClicked,
    );
    assert_eq!(state, submitting());
}

#[test]
fn retry_from_submission_error_submits_again() {
    let state = LoginViewState::SubmissionError {
        credentials: filled(),
        error_message: UiText::plain("Something went wrong."),
    };
    assert_eq!(
        LoginReducer::reduce(state, LoginIntent::LoginClicked),
        submitting()
    );
}

#[test]
fn submission_failure_moves_to_error() {
    let state = LoginReducer::reduce(
        submitting(),
        LoginIntent::SubmissionFailed {
            message: UiText::plain("Something went wrong."),
        },
    );
    assert_eq!(
        state,
        LoginViewState::SubmissionError {
            credentials: filled(),
            error_message: UiText::plain("Something went wrong."),
        }
    );
}

#[test]
fn submission_failure_outside_submitting_is_noop() {
    let active = LoginViewState::active(filled());
    let state = LoginReducer::reduce(
        active.clone(),
        LoginIntent::SubmissionFailed {
            message: UiText::plain("late"),
        },
    );
    assert_eq!(state, active);
}

#[test]
fn sign_up_leaves_state_unchanged() {
    let active = LoginViewState::active(filled());
    assert_eq!(
        LoginReducer::reduce(active.clone(), LoginIntent::SignUpClicked),
        active
    );
}
