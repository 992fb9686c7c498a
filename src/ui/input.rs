use crate::credentials::Credentials;
use crate::ui::app::App;
use crate::ui::login::{Focus, LoginIntent};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Routes a key press to the focused control.
///
/// Returns the credentials to submit when the key started a submission.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<Credentials> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if is_ctrl_char(key, 'q') || key.code == KeyCode::Esc {
        app.request_quit();
        return None;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return None;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return None;
        }
        _ => {}
    }

    let model = app.screen_model();
    let screen = app.screen(&model);
    let intent = match app.focus() {
        Focus::Email if key.code == KeyCode::Enter => {
            app.set_focus(Focus::Password);
            None
        }
        Focus::Email => screen.email_field().apply_key(key).map(LoginIntent::EmailChanged),
        Focus::Password if key.code == KeyCode::Enter => screen.login_button().activate(),
        Focus::Password => screen
            .password_field()
            .apply_key(key)
            .map(LoginIntent::PasswordChanged),
        Focus::Login if is_activation(key) => screen.login_button().activate(),
        Focus::SignUp if is_activation(key) => screen.sign_up_button().activate(),
        Focus::Login | Focus::SignUp => None,
    };

    intent.and_then(|intent| app.dispatch(intent))
}

/// Bracketed paste goes to the focused field; buttons ignore it.
pub fn handle_paste(app: &mut App, text: &str) -> Option<Credentials> {
    let model = app.screen_model();
    let screen = app.screen(&model);
    let intent = match app.focus() {
        Focus::Email => screen.email_field().apply_paste(text).map(LoginIntent::EmailChanged),
        Focus::Password => screen
            .password_field()
            .apply_paste(text)
            .map(LoginIntent::PasswordChanged),
        Focus::Login | Focus::SignUp => None,
    };

    intent.and_then(|intent| app.dispatch(intent))
}

fn is_activation(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
