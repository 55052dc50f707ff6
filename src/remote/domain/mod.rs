//! Wire protocol of the remote system of record.
//!
//! A single endpoint accepts `{action, id?, data?, ...}` requests and answers
//! with `{status, data?, message?}`. Everything here is pure data.

mod action;
mod config;
mod error;
mod message;

pub use action::RemoteAction;
pub use config::{Endpoint, RetryPolicy};
pub use error::{EndpointError, ParseRemoteActionError, RemoteError};
pub use message::{RemoteRequest, RemoteResponse, ResponseStatus};
