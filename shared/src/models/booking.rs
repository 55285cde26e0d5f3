//! Booking Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Booking status — the terminal subset of the order lifecycle shape
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn allowed_next(&self) -> &'static [BookingStatus] {
        match self {
            BookingStatus::Pending => &[BookingStatus::Confirmed, BookingStatus::Cancelled],
            BookingStatus::Confirmed => &[BookingStatus::Cancelled],
            BookingStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(&self, target: BookingStatus) -> bool {
        self.allowed_next().contains(&target)
    }

    pub fn transition_to(
        self,
        target: BookingStatus,
    ) -> Result<BookingStatus, InvalidBookingTransition> {
        if self.can_transition_to(target) {
            Ok(target)
        } else {
            Err(InvalidBookingTransition {
                from: self,
                to: target,
            })
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(()),
        }
    }
}

/// Rejected booking lifecycle edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid booking status transition: {from} -> {to}")]
pub struct InvalidBookingTransition {
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// Table booking entity — independent of the order model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    /// Reservation date (YYYY-MM-DD)
    pub date: String,
    /// Reservation time (HH:MM)
    pub time: String,
    pub guests: i32,
    pub special_requests: Option<String>,
    pub status: BookingStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Create booking payload (public endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub date: String,
    pub time: String,
    pub guests: i32,
    pub special_requests: Option<String>,
}

/// Status update payload (admin endpoint)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingStatusUpdate {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_can_confirm_or_cancel() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
    }

    #[test]
    fn confirmed_can_only_cancel() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn cancelled_is_terminal() {
        let err = BookingStatus::Cancelled
            .transition_to(BookingStatus::Pending)
            .unwrap_err();
        assert_eq!(err.from, BookingStatus::Cancelled);
    }
}
