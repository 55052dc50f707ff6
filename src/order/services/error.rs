//! Errors surfaced at the order desk boundary.

use crate::order::{
    domain::{OrderDomainError, OrderId},
    ports::{OrderStoreError, Severity},
};
use crate::remote::domain::RemoteError;
use thiserror::Error;

/// Failures of desk operations.
///
/// Validation, lookup and busy-record failures are raised before any remote
/// call. Remote failures leave the record store untouched.
#[derive(Debug, Clone, Error)]
pub enum DeskError {
    /// A local precondition failed.
    #[error("validation failed: {0}")]
    Validation(#[from] OrderDomainError),

    /// The referenced order is not in the record store.
    #[error("order not found: {0}")]
    NotFound(OrderId),

    /// Another change to the same order is still in flight.
    #[error("order {0} is being updated; wait for the current change to finish")]
    RecordBusy(OrderId),

    /// A session operation ran while no edit session was active.
    #[error("no edit session is active")]
    NoEditSession,

    /// The remote call failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The first full load failed for any reason; the dashboard has no data.
    #[error("initial load failed: {0}")]
    InitialLoad(Box<Self>),

    /// The record store failed.
    #[error(transparent)]
    Store(#[from] OrderStoreError),
}

impl DeskError {
    /// Returns the text shown to the user, preferring the server message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote(err) => err
                .server_message()
                .map_or_else(|| err.to_string(), str::to_owned),
            Self::InitialLoad(cause) => format!(
                "Orders could not be loaded and the dashboard is unavailable: {}",
                cause.user_message()
            ),
            Self::Validation(err) => err.to_string(),
            Self::NotFound(_) | Self::RecordBusy(_) | Self::NoEditSession | Self::Store(_) => {
                self.to_string()
            }
        }
    }

    /// Returns the notification severity for this failure.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Validation(_) | Self::NotFound(_) | Self::RecordBusy(_) | Self::NoEditSession => {
                Severity::Warning
            }
            Self::Remote(_) | Self::InitialLoad(_) | Self::Store(_) => Severity::Error,
        }
    }

    pub(super) fn poisoned(err: impl std::fmt::Display) -> Self {
        Self::Store(OrderStoreError::persistence(std::io::Error::other(
            err.to_string(),
        )))
    }
}

/// Result type for desk operations.
pub type DeskResult<T> = Result<T, DeskError>;
