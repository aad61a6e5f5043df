//! Email address validation.

use derive_more::derive::Display;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{InvalidInput, Verdict};

// Local part, '@', domain labels, then a TLD of two or more letters.
// ^ and $ anchor the match to the whole input, never a substring.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("Failed to compile email regex")
});

/// Checks an email address against the standard format.
///
/// Valid examples: `user@example.com`, `user.name123@gmail.co.in`
pub fn validate_email(email: &str) -> Verdict {
    if email.is_empty() {
        return Verdict::fail("Email cannot be empty");
    }

    if EMAIL_REGEX.is_match(email) {
        Verdict::pass("Valid email address")
    } else {
        Verdict::fail("Invalid email format")
    }
}

/// Wrapper type for an email address that has been validated
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct Email(String);

impl TryFrom<String> for Email {
    type Error = InvalidInput;

    fn try_from(email: String) -> Result<Self, Self::Error> {
        let verdict = validate_email(&email);
        if verdict.is_valid() {
            Ok(Self(email))
        } else {
            Err(InvalidInput::from_verdict(verdict))
        }
    }
}

impl TryFrom<&str> for Email {
    type Error = InvalidInput;

    fn try_from(email: &str) -> Result<Self, Self::Error> {
        Email::try_from(email.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod validate_email_tests {
        use super::*;

        #[test]
        fn test_valid_emails() {
            let valid_cases = vec![
                "user@gmail.com",
                "user.name123@gmail.co.in",
                "first_last@example.org",
                "tagged+inbox@sub.domain.net",
                "UPPER.case%ok@Example.COM",
            ];

            for email in valid_cases {
                assert!(
                    validate_email(email).is_valid(),
                    "Valid email {} was rejected !",
                    email
                );
            }
        }

        #[test]
        fn test_invalid_emails() {
            let invalid_cases = vec![
                "user@",
                "user@gmail",          // no TLD
                "@example.com",        // no local part
                "user@example.c",      // TLD too short
                "user@example.c0m!",   // trailing garbage
                "user name@gmail.com", // space in local part
                "user@gmail.com extra",
            ];

            for email in invalid_cases {
                let verdict = validate_email(email);
                assert!(!verdict.is_valid(), "Invalid email {} was approved !", email);
                assert_eq!(verdict.message(), "Invalid email format");
            }
        }

        #[test]
        fn test_empty_email_has_its_own_message() {
            let verdict = validate_email("");
            assert!(!verdict.is_valid());
            assert_eq!(verdict.message(), "Email cannot be empty");
        }

        #[test]
        fn test_valid_email_message() {
            assert_eq!(validate_email("user@gmail.com").message(), "Valid email address");
        }

        #[test]
        fn test_match_covers_whole_input() {
            // A valid address embedded in a larger string must not match.
            assert!(!validate_email("prefix user@gmail.com").is_valid());
            assert!(!validate_email("user@gmail.com\nuser@gmail.com").is_valid());
        }

        #[test]
        fn test_repeated_calls_agree() {
            let input = "user@gmail.com";
            assert_eq!(validate_email(input), validate_email(input));
        }
    }

    mod email_wrapper_tests {
        use super::*;

        #[test]
        fn test_email_try_from() {
            assert!(Email::try_from("user@gmail.com").is_ok());
            assert!(Email::try_from("user@gmail").is_err());
        }

        #[test]
        fn test_email_error_message() {
            let err = Email::try_from("").unwrap_err();
            assert_eq!(err.to_string(), "Email cannot be empty");
        }

        #[test]
        fn test_email_display_and_as_ref() {
            let email = Email::try_from("user@gmail.com").unwrap();
            assert_eq!(email.to_string(), "user@gmail.com");
            assert_eq!(email.as_ref(), "user@gmail.com");
        }

        #[test]
        fn test_email_serializes_as_plain_string() {
            let email = Email::try_from("user@gmail.com").unwrap();
            assert_eq!(
                serde_json::to_string(&email).unwrap(),
                "\"user@gmail.com\""
            );
        }
    }
}
