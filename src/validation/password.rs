//! Password strength validation.

use derive_more::derive::Display;

use super::{InvalidInput, Verdict};

/// Characters counting as "special" for the strength rules.
const SPECIAL_CHARS: &[char] = &['@', '$', '!', '%', '*', '?', '&'];

const MIN_LENGTH: usize = 8;

const RULES_MESSAGE: &str = "Invalid password.\n\
    Password must contain:\n\
    - Minimum 8 characters\n\
    - At least one uppercase letter\n\
    - At least one lowercase letter\n\
    - At least one digit\n\
    - At least one special character (@$!%*?&)";

/// Checks password strength.
///
/// A password passes when it is at least 8 characters long, contains at
/// least one lowercase letter, one uppercase letter, one digit and one
/// special character, and uses no character outside letters, digits and
/// the special set.
///
/// The `regex` crate has no lookahead, so the "contains at least one of"
/// rules are explicit scans rather than a single pattern.
pub fn validate_password(password: &str) -> Verdict {
    if password.is_empty() {
        return Verdict::fail("Password cannot be empty");
    }

    let long_enough = password.chars().count() >= MIN_LENGTH;
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    let has_special = password.chars().any(|c| SPECIAL_CHARS.contains(&c));
    let allowed_only = password
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || SPECIAL_CHARS.contains(&c));

    if long_enough && has_lower && has_upper && has_digit && has_special && allowed_only {
        Verdict::pass("Strong password")
    } else {
        Verdict::fail(RULES_MESSAGE)
    }
}

/// Wrapper type for a password that has passed the strength rules.
/// Unlike the other wrappers it is never serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct Password(String);

impl TryFrom<String> for Password {
    type Error = InvalidInput;

    fn try_from(password: String) -> Result<Self, Self::Error> {
        let verdict = validate_password(&password);
        if verdict.is_valid() {
            Ok(Self(password))
        } else {
            Err(InvalidInput::from_verdict(verdict))
        }
    }
}

impl TryFrom<&str> for Password {
    type Error = InvalidInput;

    fn try_from(password: &str) -> Result<Self, Self::Error> {
        Password::try_from(password.to_owned())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
