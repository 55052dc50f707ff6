//! Access to the remote system of record.
//!
//! The remote context owns the request/response protocol, the transport
//! port and its adapters, and the resilient client that retries
//! rate-limited calls with exponential backoff:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The client in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
