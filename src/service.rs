//! Collaborator that receives submitted credentials.
//!
//! Real authentication lives outside this crate. [`ScriptedLoginService`]
//! stands in for it with a configured answer and delay so the screen can
//! be exercised end to end without any I/O.

use crate::credentials::Credentials;
use crate::ui::text::{StringId, UiText};
use serde::{Deserialize, Serialize};
use std::thread;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("invalid email or password")]
    InvalidCredentials,

    #[error("login service unavailable: {reason}")]
    Unavailable { reason: String },
}

impl LoginError {
    /// Message shown in the submission error banner.
    pub fn user_message(&self) -> UiText {
        match self {
            LoginError::InvalidCredentials => UiText::Resource(StringId::InvalidCredentials),
            LoginError::Unavailable { .. } => UiText::Resource(StringId::SubmissionFailed),
        }
    }
}

/// Blocking login call. Invoked off the UI thread.
pub trait LoginService: Send + Sync {
    fn log_in(&self, credentials: &Credentials) -> Result<(), LoginError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptedOutcome {
    Succeed,
    Reject,
    #[default]
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct ScriptedLoginService {
    outcome: ScriptedOutcome,
    delay: Duration,
}

impl ScriptedLoginService {
    pub fn new(outcome: ScriptedOutcome, delay: Duration) -> Self {
        Self { outcome, delay }
    }
}

impl LoginService for ScriptedLoginService {
    fn log_in(&self, credentials: &Credentials) -> Result<(), LoginError> {
        tracing::debug!(
            email = %credentials.email,
            outcome = ?self.outcome,
            delay_ms = self.delay.as_millis() as u64,
            "scripted login"
        );
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        match self.outcome {
            ScriptedOutcome::Succeed => Ok(()),
            ScriptedOutcome::Reject => Err(LoginError::InvalidCredentials),
            ScriptedOutcome::Unavailable => Err(LoginError::Unavailable {
                reason: "no login backend configured".to_string(),
            }),
        }
    }
}
