//! # Booking Record
//!
//! One attendee's reservation of one or more tickets. Bookings are immutable
//! once created — cancellation removes the record entirely rather than
//! flagging it.

use serde::{Deserialize, Serialize};

use confbook_core::{AttendeeName, BookingId, EmailAddress, TicketCount, Timestamp};

/// A confirmed reservation held in the ledger.
///
/// Field values are normalized at booking time (title-cased names,
/// lowercased email) and serialize under the stable snapshot field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Ledger-assigned identifier, never reused.
    pub id: BookingId,
    /// Attendee first name, title-cased.
    pub first_name: AttendeeName,
    /// Attendee last name, title-cased.
    pub last_name: AttendeeName,
    /// Attendee email, lowercased.
    pub email: EmailAddress,
    /// Number of tickets reserved.
    pub tickets: TicketCount,
    /// When the booking was created (UTC).
    pub booked_at: Timestamp,
}

impl Booking {
    /// The attendee's full name ("First Last").
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
