//! Badge event model and related types.
//!
//! A badge event is a single clock-in or clock-out recorded for one
//! employee. Events are immutable once stored.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a badge swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BadgeType {
    /// Clock-in: the start of a work session.
    In,
    /// Clock-out: the end of a work session.
    Out,
}

impl std::fmt::Display for BadgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BadgeType::In => write!(f, "IN"),
            BadgeType::Out => write!(f, "OUT"),
        }
    }
}

/// A badge event as persisted by the event store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeEvent {
    /// Identity assigned by the event store on append.
    pub id: Uuid,
    /// The employee who badged.
    pub employee_id: String,
    /// When the badge happened (local wall-clock time, no timezone).
    pub timestamp: NaiveDateTime,
    /// Whether this was a clock-in or a clock-out.
    #[serde(rename = "type")]
    pub badge_type: BadgeType,
}

impl BadgeEvent {
    /// Returns true for a clock-in.
    pub fn is_in(&self) -> bool {
        self.badge_type == BadgeType::In
    }

    /// Returns true for a clock-out.
    pub fn is_out(&self) -> bool {
        self.badge_type == BadgeType::Out
    }
}

/// A badge event that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBadgeEvent {
    /// The employee who badged.
    pub employee_id: String,
    /// When the badge happened.
    pub timestamp: NaiveDateTime,
    /// Whether this was a clock-in or a clock-out.
    pub badge_type: BadgeType,
}

impl NewBadgeEvent {
    /// Attaches a store-assigned identity, producing the persisted event.
    pub fn with_id(self, id: Uuid) -> BadgeEvent {
        BadgeEvent {
            id,
            employee_id: self.employee_id,
            timestamp: self.timestamp,
            badge_type: self.badge_type,
        }
    }
}
