use crate::credentials::Credentials;
use crate::service::{LoginError, LoginService};
use crate::ui::app::{App, SessionOutcome};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Runs the login screen until the session ends.
pub fn run(
    mut app: App,
    service: Arc<dyn LoginService>,
    tick_rate: Duration,
) -> io::Result<SessionOutcome> {
    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let submission = match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, &text),
            Ok(AppEvent::Tick) => {
                app.on_tick();
                None
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                tracing::debug!(cols, rows, "terminal resized");
                None
            }
            Ok(AppEvent::Submission(result)) => {
                app.on_submission_result(result);
                None
            }
            Ok(AppEvent::InputError(reason)) => {
                // Returning drops the guard, which restores the terminal.
                return Err(io::Error::other(reason));
            }
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => break,
        };

        if let Some(credentials) = submission {
            if let Err(err) = spawn_submission(Arc::clone(&service), credentials, events.sender()) {
                app.on_submission_result(Err(LoginError::Unavailable {
                    reason: err.to_string(),
                }));
            }
        }
    }

    drop(guard);
    Ok(app.take_outcome().unwrap_or(SessionOutcome::Cancelled))
}

/// Runs the blocking login call off the UI thread and reports back
/// through the event channel.
fn spawn_submission(
    service: Arc<dyn LoginService>,
    credentials: Credentials,
    tx: Sender<AppEvent>,
) -> io::Result<()> {
    tracing::info!(email = %credentials.email, "submitting credentials");
    thread::Builder::new()
        .name("login-submit".to_string())
        .spawn(move || {
            let result = service.log_in(&credentials);
            let _ = tx.send(AppEvent::Submission(result));
        })?;
    Ok(())
}
