//! Regex-based validation of user-supplied credentials.
//!
//! Three independent checks, each taking one string and returning a
//! [`Verdict`] (boolean result plus a human-readable message):
//!
//! - [`validate_email`]: standard email format
//! - [`validate_mobile`]: Indian mobile number (10 digits, starts with 6-9)
//! - [`validate_password`]: password strength rules
//!
//! The checks are pure and never fail: malformed input is a normal return
//! value, not an error. For callers that want a type-level guarantee, the
//! [`Email`], [`MobileNumber`] and [`Password`] wrappers can only be built
//! from strings that pass the corresponding check.

pub mod validation;

pub use validation::{
    validate_email, validate_mobile, validate_password, Email, InvalidInput, MobileNumber,
    Password, Verdict,
};
