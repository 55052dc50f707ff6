//! Order lifecycle status and action type.

use super::{ParseActionTypeError, ParseOrderStatusError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order is active and within its expected window.
    Open,
    /// Order has finished and its containers are released.
    Closed,
    /// Order has passed its expected finish date.
    Overdue,
    /// Order is temporarily on hold.
    Suspended,
    /// Order is waiting for input or holds invalid data.
    PendingInvalid,
    /// Overdue order currently being handled.
    InTreatment,
    /// Overdue order whose handling is complete.
    Treated,
}

impl OrderStatus {
    /// Every status, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Open,
        Self::Closed,
        Self::Overdue,
        Self::Suspended,
        Self::PendingInvalid,
        Self::InTreatment,
        Self::Treated,
    ];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Overdue => "overdue",
            Self::Suspended => "suspended",
            Self::PendingInvalid => "pending_invalid",
            Self::InTreatment => "in_treatment",
            Self::Treated => "treated",
        }
    }

    /// Returns the human-readable label used in views and search.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Closed => "Closed",
            Self::Overdue => "Overdue",
            Self::Suspended => "Suspended",
            Self::PendingInvalid => "Pending/Invalid",
            Self::InTreatment => "In treatment",
            Self::Treated => "Treated",
        }
    }

    /// Returns the presentation class for status badges.
    #[must_use]
    pub const fn display_class(self) -> &'static str {
        match self {
            Self::Open => "status-open",
            Self::Closed => "status-closed",
            Self::Overdue => "status-overdue",
            Self::Suspended => "status-warning",
            Self::PendingInvalid => "status-pending",
            Self::InTreatment => "status-in-treatment",
            Self::Treated => "status-treated",
        }
    }

    /// Returns `true` when the status counts towards the open-orders counter.
    #[must_use]
    pub const fn counts_as_open(self) -> bool {
        matches!(self, Self::Open | Self::PendingInvalid)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OrderStatus {
    type Error = ParseOrderStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "overdue" => Ok(Self::Overdue),
            "suspended" => Ok(Self::Suspended),
            "pending_invalid" | "pending/invalid" | "pending" => Ok(Self::PendingInvalid),
            "in_treatment" | "in treatment" => Ok(Self::InTreatment),
            "treated" => Ok(Self::Treated),
            _ => Err(ParseOrderStatusError(value.to_owned())),
        }
    }
}

/// Kind of transport performed by an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// Container is placed at the customer site and later collected.
    Pickup,
    /// Container is dropped off.
    DropOff,
}

impl ActionType {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pickup => "pickup",
            Self::DropOff => "drop_off",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActionType {
    type Error = ParseActionTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pickup" => Ok(Self::Pickup),
            "drop_off" | "drop-off" | "dropoff" => Ok(Self::DropOff),
            _ => Err(ParseActionTypeError(value.to_owned())),
        }
    }
}
