//! Order records and the operations that change them.
//!
//! The order context owns the record store, the edit session and every
//! state-changing operation: add, edit, close, delete, duplicate, container
//! registration and drag-driven status transitions. Each mutation is
//! validated locally, confirmed by the remote system of record, and only
//! then committed, with the server's record overwriting the stored one.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
