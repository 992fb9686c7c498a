use crate::service::LoginError;
use crossterm::event::{self, Event, KeyEvent};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Answer from the login service worker.
    Submission(Result<(), LoginError>),
    /// The input thread stopped; no further keys will arrive.
    InputError(String),
}

pub struct EventHandler {
    rx: Receiver<AppEvent>,
    tx: Sender<AppEvent>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let event_tx = tx.clone();

        thread::spawn(move || {
            pump_events(tick_rate, &event_tx, event::poll, event::read);
        });

        Self { rx, tx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }

    pub fn sender(&self) -> Sender<AppEvent> {
        self.tx.clone()
    }
}

/// Forwards terminal events and ticks until the receiver goes away or the
/// terminal stops answering. A terminal failure is reported as
/// [`AppEvent::InputError`] before returning.
fn pump_events<P, R>(tick_rate: Duration, tx: &Sender<AppEvent>, mut poll: P, mut read: R)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        let ready = match poll(timeout) {
            Ok(ready) => ready,
            Err(err) => {
                tracing::error!(error = %err, "terminal event poll failed");
                let _ = tx.send(AppEvent::InputError(format!("terminal event poll failed: {err}")));
                return;
            }
        };

        if ready {
            let forwarded = match read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!(error = %err, "terminal event read failed");
                    let _ = tx.send(AppEvent::InputError(format!("terminal event read failed: {err}")));
                    return;
                }
            };
            if let Some(app_event) = forwarded {
                if tx.send(app_event).is_err() {
                    return;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
