//! Validation of raw user input.
//!
//! Each submodule owns one rule set: a `validate_*` function returning a
//! [`Verdict`], and a wrapper type that can only be constructed from input
//! passing that rule set.

use std::fmt;

use derive_more::derive::Display;
use thiserror::Error;

mod email;
mod mobile;
mod password;

pub use email::{validate_email, Email};
pub use mobile::{validate_mobile, MobileNumber};
pub use password::{validate_password, Password};

/// The outcome of one validation call: a boolean result and a fixed
/// explanatory message. Every message in the system is a literal, so the
/// type is `Copy` and allocation-free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Verdict {
    valid: bool,
    message: &'static str,
}

impl Verdict {
    pub(crate) fn pass(message: &'static str) -> Self {
        Self {
            valid: true,
            message,
        }
    }

    pub(crate) fn fail(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }

    /// Whether the input satisfied the rule.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The explanatory message, valid or not.
    pub fn message(&self) -> &'static str {
        self.message
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Error returned when constructing a wrapper type from input that fails
/// validation. Displays the failure message of the underlying check.
#[derive(Debug, Clone, Copy, Display, Error)]
pub struct InvalidInput(pub &'static str);

impl InvalidInput {
    pub(crate) fn from_verdict(verdict: Verdict) -> Self {
        Self(verdict.message())
    }
}
