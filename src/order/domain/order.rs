//! Order record aggregate.

use super::{ActionType, ContainerNumber, OrderDomainError, OrderId, OrderStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One rental or transport transaction tracked from creation to closure.
///
/// The wire form uses camel-case keys and rejects unknown fields, so a
/// payload carrying unexpected data never reaches the record store.
/// Derived values such as overdue days are computed on demand and never
/// serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Order {
    id: OrderId,
    #[serde(default)]
    document_number: Option<String>,
    #[serde(default)]
    customer: Option<String>,
    #[serde(default)]
    agent: Option<String>,
    #[serde(default)]
    address: Option<String>,
    action_type: ActionType,
    #[serde(default, deserialize_with = "wire::containers")]
    containers: Vec<ContainerNumber>,
    #[serde(default, deserialize_with = "wire::lenient_date")]
    created_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire::lenient_date")]
    expected_finish_on: Option<NaiveDate>,
    #[serde(default, deserialize_with = "wire::lenient_date")]
    finished_on: Option<NaiveDate>,
    #[serde(default)]
    notes: Option<String>,
    status: OrderStatus,
}

impl Order {
    /// Creates an order with the mandatory identity fields.
    #[must_use]
    pub const fn new(id: OrderId, action_type: ActionType, status: OrderStatus) -> Self {
        Self {
            id,
            document_number: None,
            customer: None,
            agent: None,
            address: None,
            action_type,
            containers: Vec::new(),
            created_on: None,
            expected_finish_on: None,
            finished_on: None,
            notes: None,
            status,
        }
    }

    /// Sets the document number.
    #[must_use]
    pub fn with_document_number(mut self, value: impl Into<String>) -> Self {
        self.document_number = Some(value.into());
        self
    }

    /// Sets the customer name.
    #[must_use]
    pub fn with_customer(mut self, value: impl Into<String>) -> Self {
        self.customer = Some(value.into());
        self
    }

    /// Sets the agent name.
    #[must_use]
    pub fn with_agent(mut self, value: impl Into<String>) -> Self {
        self.agent = Some(value.into());
        self
    }

    /// Sets the site address.
    #[must_use]
    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// Sets the ordered container list.
    #[must_use]
    pub fn with_containers(mut self, containers: impl IntoIterator<Item = ContainerNumber>) -> Self {
        self.containers = containers.into_iter().collect();
        self
    }

    /// Sets the creation date.
    #[must_use]
    pub const fn with_created_on(mut self, date: NaiveDate) -> Self {
        self.created_on = Some(date);
        self
    }

    /// Sets the expected finish date.
    #[must_use]
    pub const fn with_expected_finish_on(mut self, date: NaiveDate) -> Self {
        self.expected_finish_on = Some(date);
        self
    }

    /// Sets the actual finish date.
    #[must_use]
    pub const fn with_finished_on(mut self, date: NaiveDate) -> Self {
        self.finished_on = Some(date);
        self
    }

    /// Sets the free-form notes.
    #[must_use]
    pub fn with_notes(mut self, value: impl Into<String>) -> Self {
        self.notes = Some(value.into());
        self
    }

    /// Returns the order identifier.
    #[must_use]
    pub const fn id(&self) -> &OrderId {
        &self.id
    }

    /// Returns the document number, if any.
    #[must_use]
    pub fn document_number(&self) -> Option<&str> {
        self.document_number.as_deref()
    }

    /// Returns the customer name, if any.
    #[must_use]
    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    /// Returns the agent name, if any.
    #[must_use]
    pub fn agent(&self) -> Option<&str> {
        self.agent.as_deref()
    }

    /// Returns the site address, if any.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the action type.
    #[must_use]
    pub const fn action_type(&self) -> ActionType {
        self.action_type
    }

    /// Returns the ordered container list.
    #[must_use]
    pub fn containers(&self) -> &[ContainerNumber] {
        &self.containers
    }

    /// Returns the creation date, if known.
    #[must_use]
    pub const fn created_on(&self) -> Option<NaiveDate> {
        self.created_on
    }

    /// Returns the expected finish date, if set.
    #[must_use]
    pub const fn expected_finish_on(&self) -> Option<NaiveDate> {
        self.expected_finish_on
    }

    /// Returns the actual finish date, if the order has finished.
    #[must_use]
    pub const fn finished_on(&self) -> Option<NaiveDate> {
        self.finished_on
    }

    /// Returns the notes, if any.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns the container list joined for display and search.
    #[must_use]
    pub fn containers_text(&self) -> String {
        self.containers
            .iter()
            .map(ContainerNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Returns the number of whole days the order is overdue on `today`.
    ///
    /// The count is zero unless the status is [`OrderStatus::Overdue`] and an
    /// expected finish date is present.
    #[must_use]
    pub fn overdue_days(&self, today: NaiveDate) -> u32 {
        if self.status != OrderStatus::Overdue {
            return 0;
        }
        self.expected_finish_on.map_or(0, |expected| {
            let elapsed = today.signed_duration_since(expected).num_days();
            u32::try_from(elapsed.max(0)).unwrap_or(u32::MAX)
        })
    }

    /// Returns the signed number of days until the expected finish date.
    #[must_use]
    pub fn days_until_expected_finish(&self, today: NaiveDate) -> Option<i64> {
        self.expected_finish_on
            .map(|expected| expected.signed_duration_since(today).num_days())
    }

    /// Returns `true` when the order keeps its containers in use.
    #[must_use]
    pub fn holds_containers(&self) -> bool {
        self.status != OrderStatus::Closed && self.action_type == ActionType::Pickup
    }

    /// Checks that the order may be closed on `finish`.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::AlreadyClosed`] for closed orders and
    /// [`OrderDomainError::FinishBeforeCreation`] when `finish` precedes the
    /// creation date.
    pub fn ensure_can_close(&self, finish: NaiveDate) -> Result<(), OrderDomainError> {
        if self.status == OrderStatus::Closed {
            return Err(OrderDomainError::AlreadyClosed(self.id.clone()));
        }
        match self.created_on {
            Some(created) if finish < created => Err(OrderDomainError::FinishBeforeCreation {
                order_id: self.id.clone(),
                finish,
                created,
            }),
            _ => Ok(()),
        }
    }
}

mod wire {
    use super::super::{ContainerNumber, parse_container_list};
    use chrono::{DateTime, NaiveDate};
    use serde::{Deserialize, Deserializer, de::Error as _};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawContainers {
        List(Vec<String>),
        Delimited(String),
    }

    /// Accepts either a JSON list or a single delimited string.
    pub(super) fn containers<'de, D>(deserializer: D) -> Result<Vec<ContainerNumber>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawContainers>::deserialize(deserializer)? {
            None => Ok(Vec::new()),
            Some(RawContainers::Delimited(text)) => Ok(parse_container_list(&text)),
            Some(RawContainers::List(items)) => items
                .into_iter()
                .map(ContainerNumber::new)
                .collect::<Result<Vec<_>, _>>()
                .map_err(D::Error::custom),
        }
    }

    /// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, blanks and `null`.
    pub(super) fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
            return Ok(Some(date));
        }
        DateTime::parse_from_rfc3339(trimmed)
            .map(|timestamp| Some(timestamp.date_naive()))
            .map_err(|err| D::Error::custom(format!("invalid date '{trimmed}': {err}")))
    }
}
