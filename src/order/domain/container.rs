//! Container history entries returned by the system of record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical movement of a container.
///
/// History rows come straight from the remote sheet, so every field is
/// optional and unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerHistoryEntry {
    /// Identifier of the order that moved the container.
    pub order_id: Option<String>,
    /// Document number of that order.
    pub document_number: Option<String>,
    /// Customer served.
    pub customer: Option<String>,
    /// Site address.
    pub address: Option<String>,
    /// Action type as recorded remotely.
    pub action_type: Option<String>,
    /// Date the container left.
    pub started_on: Option<NaiveDate>,
    /// Date the container came back.
    pub finished_on: Option<NaiveDate>,
}
