//! Editable order payload used by add, edit and duplicate flows.

use super::{ActionType, ContainerNumber, Order, OrderDomainError, OrderStatus, parse_container_list};
use chrono::NaiveDate;
use serde::Serialize;

/// User-editable order fields submitted to the remote system of record.
///
/// The draft never carries an identifier or a creation date: both are
/// assigned by the server when the order is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    /// Document number printed on the delivery note.
    pub document_number: String,
    /// Customer name.
    pub customer: String,
    /// Agent handling the order.
    pub agent: String,
    /// Site address.
    pub address: String,
    /// Action type; required before submission.
    pub action_type: Option<ActionType>,
    /// Ordered container list.
    pub containers: Vec<ContainerNumber>,
    /// Expected finish date.
    pub expected_finish_on: Option<NaiveDate>,
    /// Free-form notes.
    pub notes: String,
    /// Lifecycle status to submit.
    pub status: OrderStatus,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            document_number: String::new(),
            customer: String::new(),
            agent: String::new(),
            address: String::new(),
            action_type: None,
            containers: Vec::new(),
            expected_finish_on: None,
            notes: String::new(),
            status: OrderStatus::Open,
        }
    }
}

impl OrderDraft {
    /// Creates an empty draft with status [`OrderStatus::Open`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fills a draft from an existing order for editing.
    #[must_use]
    pub fn from_order(order: &Order) -> Self {
        Self {
            document_number: order.document_number().unwrap_or_default().to_owned(),
            customer: order.customer().unwrap_or_default().to_owned(),
            agent: order.agent().unwrap_or_default().to_owned(),
            address: order.address().unwrap_or_default().to_owned(),
            action_type: Some(order.action_type()),
            containers: order.containers().to_vec(),
            expected_finish_on: order.expected_finish_on(),
            notes: order.notes().unwrap_or_default().to_owned(),
            status: order.status(),
        }
    }

    /// Pre-fills a draft that clones `source` as a brand new order.
    ///
    /// The document number is cleared and the status reset to
    /// [`OrderStatus::Open`]; identifier and dates are left to the server.
    #[must_use]
    pub fn duplicate_of(source: &Order) -> Self {
        Self {
            document_number: String::new(),
            status: OrderStatus::Open,
            ..Self::from_order(source)
        }
    }

    /// Replaces the container list from a delimited text field.
    pub fn set_containers_from_text(&mut self, text: &str) {
        self.containers = parse_container_list(text);
    }

    /// Appends a predefined note as a new `- note` line.
    pub fn append_note(&mut self, note: &str) {
        let line = format!("- {}", note.trim());
        if self.notes.trim().is_empty() {
            self.notes = line;
        } else {
            self.notes.push('\n');
            self.notes.push_str(&line);
        }
    }

    /// Checks that every required field is present.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::MissingFields`] listing each blank
    /// required field.
    pub fn validate(&self) -> Result<(), OrderDomainError> {
        let mut missing = Vec::new();
        if self.customer.trim().is_empty() {
            missing.push("customer");
        }
        if self.document_number.trim().is_empty() {
            missing.push("documentNumber");
        }
        if self.address.trim().is_empty() {
            missing.push("address");
        }
        if self.action_type.is_none() {
            missing.push("actionType");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(OrderDomainError::MissingFields(missing))
        }
    }
}
