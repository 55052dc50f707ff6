//! Error types for order domain validation and parsing.

use super::OrderId;
use thiserror::Error;

/// Errors returned while constructing or validating order domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderDomainError {
    /// The order identifier is empty after trimming.
    #[error("order identifier must not be empty")]
    EmptyOrderId,

    /// A container number is empty after trimming.
    #[error("container number must not be empty")]
    EmptyContainerNumber,

    /// One or more required draft fields are missing.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// The order is already closed and cannot be closed again.
    #[error("order {0} is already closed")]
    AlreadyClosed(OrderId),

    /// The requested finish date precedes the order creation date.
    #[error("finish date {finish} precedes creation date {created} for order {order_id}")]
    FinishBeforeCreation {
        /// Order identifier.
        order_id: OrderId,
        /// Requested finish date.
        finish: chrono::NaiveDate,
        /// Recorded creation date.
        created: chrono::NaiveDate,
    },
}

/// Error returned while parsing an order status from wire or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown order status: {0}")]
pub struct ParseOrderStatusError(pub String);

/// Error returned while parsing an action type from wire or user input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown action type: {0}")]
pub struct ParseActionTypeError(pub String);
