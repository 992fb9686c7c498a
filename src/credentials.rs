//! Credential draft entered on the login screen.

use std::fmt;

/// Email address as typed. No validation happens at construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Email(String);

impl Email {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Password as typed. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Password(String);

impl Password {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub email: Email,
    pub password: Password,
}

impl Credentials {
    pub const fn empty() -> Self {
        Self {
            email: Email(String::new()),
            password: Password(String::new()),
        }
    }

    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Email::new(email),
            password: Password::new(password),
        }
    }

    pub fn with_email(&self, email: impl Into<String>) -> Self {
        Self {
            email: Email::new(email),
            password: self.password.clone(),
        }
    }

    pub fn with_password(&self, password: impl Into<String>) -> Self {
        Self {
            email: self.email.clone(),
            password: Password::new(password),
        }
    }
}
