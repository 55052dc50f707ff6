//! Client services for the remote system of record.

mod client;
mod loading;

pub use client::{RemoteResult, ResilientClient};
pub use loading::{InFlightCall, LoadingIndicator};
