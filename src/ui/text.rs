//! Display text resolved to a concrete string at render time.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Keys of the built-in string table. Config may override any of them
/// under `[strings]` using the snake_case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StringId {
    LogIn,
    SignUp,
    Email,
    Password,
    EmptyEmail,
    EmptyPassword,
    InvalidCredentials,
    SubmissionFailed,
    SigningIn,
    KeyHints,
}

impl StringId {
    pub const ALL: [StringId; 10] = [
        Self::LogIn,
        Self::SignUp,
        Self::Email,
        Self::Password,
        Self::EmptyEmail,
        Self::EmptyPassword,
        Self::InvalidCredentials,
        Self::SubmissionFailed,
        Self::SigningIn,
        Self::KeyHints,
    ];

    /// Name used in the `[strings]` config table.
    pub fn key(self) -> &'static str {
        match self {
            Self::LogIn => "log_in",
            Self::SignUp => "sign_up",
            Self::Email => "email",
            Self::Password => "password",
            Self::EmptyEmail => "empty_email",
            Self::EmptyPassword => "empty_password",
            Self::InvalidCredentials => "invalid_credentials",
            Self::SubmissionFailed => "submission_failed",
            Self::SigningIn => "signing_in",
            Self::KeyHints => "key_hints",
        }
    }

    pub fn default_text(self) -> &'static str {
        match self {
            Self::LogIn => "Log In",
            Self::SignUp => "Sign Up",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::EmptyEmail => "Please enter an email.",
            Self::EmptyPassword => "Please enter a password",
            Self::InvalidCredentials => "Invalid email or password.",
            Self::SubmissionFailed => "Something went wrong.",
            Self::SigningIn => "Signing in...",
            Self::KeyHints => "Tab: Next │ Enter: Select │ Esc: Quit",
        }
    }
}

impl TryFrom<String> for StringId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|id| id.key() == value)
            .ok_or_else(|| format!("unknown string id '{}'", value))
    }
}

impl From<StringId> for String {
    fn from(id: StringId) -> Self {
        id.key().to_string()
    }
}

pub trait TextResolver {
    fn resolve(&self, id: StringId) -> &str;
}

/// String table: built-in defaults plus optional overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Strings {
    overrides: HashMap<StringId, String>,
}

impl Strings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<StringId, String>) -> Self {
        Self { overrides }
    }
}

impl TextResolver for Strings {
    fn resolve(&self, id: StringId) -> &str {
        self.overrides
            .get(&id)
            .map(String::as_str)
            .unwrap_or_else(|| id.default_text())
    }
}

/// A message for display: either literal text or a string table entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiText {
    Plain(String),
    Resource(StringId),
}

impl UiText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    pub fn resolve(&self, resolver: &dyn TextResolver) -> String {
        match self {
            Self::Plain(text) => text.clone(),
            Self::Resource(id) => resolver.resolve(*id).to_string(),
        }
    }
}

impl From<StringId> for UiText {
    fn from(id: StringId) -> Self {
        Self::Resource(id)
    }
}

impl From<&str> for UiText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for UiText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_used_without_overrides() {
        let strings = Strings::new();
        assert_eq!(strings.resolve(StringId::LogIn), "Log In");
    }

    #[test]
    fn override_replaces_default() {
        let strings = Strings::with_overrides(HashMap::from([(
            StringId::SignUp,
            "Create account".to_string(),
        )]));
        assert_eq!(strings.resolve(StringId::SignUp), "Create account");
        assert_eq!(strings.resolve(StringId::LogIn), "Log In");
    }

    #[test]
    fn config_keys_parse() {
        assert_eq!(StringId::try_from("log_in".to_string()), Ok(StringId::LogIn));
        assert!(StringId::try_from("welcome".to_string()).is_err());
    }

    #[test]
    fn plain_text_ignores_resolver() {
        let strings = Strings::new();
        assert_eq!(UiText::plain("boom").resolve(&strings), "boom");
        assert_eq!(
            UiText::from(StringId::SubmissionFailed).resolve(&strings),
            "Something went wrong."
        );
    }
}
