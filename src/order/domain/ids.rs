//! Identifier and validated scalar types for the order domain.

use super::OrderDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Delimiter used when several container numbers share one text field.
pub const CONTAINER_DELIMITER: char = ',';

/// Server-assigned identifier of an order record.
///
/// This is the only key used to address an order, both in the record store
/// and in remote requests. Document numbers are plain data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId(String);

impl OrderId {
    /// Creates a validated order identifier.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::EmptyOrderId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, OrderDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OrderDomainError::EmptyOrderId);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrderId {
    type Error = OrderDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<OrderId> for String {
    fn from(value: OrderId) -> Self {
        value.0
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a physical container, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContainerNumber(String);

impl ContainerNumber {
    /// Creates a validated container number.
    ///
    /// # Errors
    ///
    /// Returns [`OrderDomainError::EmptyContainerNumber`] when the value is
    /// blank after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, OrderDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(OrderDomainError::EmptyContainerNumber);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the container number as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ContainerNumber {
    type Error = OrderDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ContainerNumber> for String {
    fn from(value: ContainerNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for ContainerNumber {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ContainerNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a delimited container field into trimmed, non-empty segments.
///
/// Blank segments (for example from a trailing delimiter) are skipped.
pub fn split_delimited(text: &str) -> impl Iterator<Item = &str> {
    text.split(CONTAINER_DELIMITER)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Parses a delimited container field into container numbers.
#[must_use]
pub fn parse_container_list(text: &str) -> Vec<ContainerNumber> {
    split_delimited(text)
        .map(|segment| ContainerNumber(segment.to_owned()))
        .collect()
}
