//! # Attendee Primitives
//!
//! Validated newtypes for the fields of a booking: attendee names, email
//! address, and ticket count. Each type validates format at construction
//! time and stores the normalized form — title case for names, lowercase
//! for emails — so equality checks and exports never deal with mixed casing.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// An attendee's first or last name.
///
/// Must be at least two characters after trimming. Stored title-cased
/// (`"aNN"` becomes `"Ann"`), matching how the name is rendered in listings
/// and the CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttendeeName(String);

impl AttendeeName {
    /// Validate and normalize a raw name.
    ///
    /// `field` names the input slot ("first name" / "last name") and is
    /// carried into the error for display.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NameTooShort`] if the trimmed input has
    /// fewer than two characters.
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.chars().count() < 2 {
            return Err(ValidationError::NameTooShort {
                field,
                value: raw.to_string(),
            });
        }
        Ok(Self(title_case(trimmed)))
    }

    /// The normalized name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AttendeeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// An attendee's email address.
///
/// Validated against the `local@domain.tld` shape: exactly one `@`, no
/// whitespace, non-empty local part, and a domain containing at least one
/// dot with non-empty segments on either side. Stored lowercased, which is
/// what makes email lookups case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and normalize a raw email address.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidEmail`] if the trimmed input does
    /// not match the expected shape.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if !has_email_shape(trimmed) {
            return Err(ValidationError::InvalidEmail(raw.to_string()));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// The normalized (lowercase) address.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A positive number of tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TicketCount(u32);

impl TicketCount {
    /// Validate a raw ticket count.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::ZeroTickets`] if `count` is zero.
    pub fn new(count: u32) -> Result<Self, ValidationError> {
        if count == 0 {
            return Err(ValidationError::ZeroTickets);
        }
        Ok(Self(count))
    }

    /// The raw count.
    pub fn get(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TicketCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lowercase the input and uppercase the first letter of each
/// whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let lower = word.to_lowercase();
            let mut chars = lower.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check the `local@domain.tld` shape: exactly one `@`, no whitespace,
/// and a dotted domain with non-empty segments around the last dot.
fn has_email_shape(s: &str) -> bool {
    if s.is_empty() || s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
