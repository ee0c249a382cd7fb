//! # Validation Errors
//!
//! Errors raised by the domain primitive constructors in
//! [`crate::primitives`]. These are user-input problems — recoverable by
//! re-prompting — and each variant carries the offending value so front-ends
//! can display an actionable message without extra lookups.

use thiserror::Error;

/// Validation errors for booking input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A name field is shorter than two characters after trimming.
    #[error("{field} must have at least 2 characters, got {value:?}")]
    NameTooShort {
        /// Which name field failed ("first name" or "last name").
        field: &'static str,
        /// The rejected input, as received.
        value: String,
    },

    /// The email does not match the `local@domain.tld` shape.
    #[error("invalid email address: {0:?} (expected local@domain.tld)")]
    InvalidEmail(String),

    /// The ticket count is zero.
    #[error("ticket count must be greater than 0")]
    ZeroTickets,

    /// The conference capacity is zero.
    #[error("total tickets must be greater than 0")]
    ZeroCapacity,
}
