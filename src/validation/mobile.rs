//! Indian mobile number validation.

use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{InvalidInput, Verdict};

// Exactly 10 digits, first one in 6-9.
static MOBILE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("Failed to compile mobile regex"));

/// Checks an Indian mobile number: exactly 10 digits, starting with 6, 7,
/// 8 or 9.
pub fn validate_mobile(mobile: &str) -> Verdict {
    if mobile.is_empty() {
        return Verdict::fail("Mobile number cannot be empty");
    }

    if MOBILE_REGEX.is_match(mobile) {
        Verdict::pass("Valid Indian mobile number")
    } else {
        Verdict::fail("Invalid mobile number (must be 10 digits & start with 6-9)")
    }
}

/// Wrapper type for a mobile number that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct MobileNumber(String);

impl TryFrom<String> for MobileNumber {
    type Error = InvalidInput;

    fn try_from(mobile: String) -> Result<Self, Self::Error> {
        let verdict = validate_mobile(&mobile);
        if verdict.is_valid() {
            Ok(Self(mobile))
        } else {
            Err(InvalidInput::from_verdict(verdict))
        }
    }
}

impl TryFrom<&str> for MobileNumber {
    type Error = InvalidInput;

    fn try_from(mobile: &str) -> Result<Self, Self::Error> {
        MobileNumber::try_from(mobile.to_owned())
    }
}

impl AsRef<str> for MobileNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
