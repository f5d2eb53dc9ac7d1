//! Reservation models for revenue-service.

use serde::{Deserialize, Serialize};

/// Reservation lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Confirmed,
    CheckedIn,
    CheckedOut,
    Hold,
    Block,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::CheckedIn => "checked_in",
            ReservationStatus::CheckedOut => "checked_out",
            ReservationStatus::Hold => "hold",
            ReservationStatus::Block => "block",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "checked_in" => ReservationStatus::CheckedIn,
            "checked_out" => ReservationStatus::CheckedOut,
            "hold" => ReservationStatus::Hold,
            "block" => ReservationStatus::Block,
            _ => ReservationStatus::Confirmed,
        }
    }

    /// Hold and block reservations occupy inventory without producing revenue.
    pub fn produces_revenue(&self) -> bool {
        !matches!(self, ReservationStatus::Hold | ReservationStatus::Block)
    }
}

/// Kind of booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationKind {
    Guest,
    Group,
    Employee,
}

impl ReservationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationKind::Guest => "guest",
            ReservationKind::Group => "group",
            ReservationKind::Employee => "employee",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "group" => ReservationKind::Group,
            "employee" => ReservationKind::Employee,
            _ => ReservationKind::Guest,
        }
    }
}

/// The slice of the owning reservation the sales scope filter needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationSummary {
    pub id: i64,
    pub status: ReservationStatus,
    pub kind: ReservationKind,
}
