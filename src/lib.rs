//! Containerdesk: order and container tracking for a container logistics
//! business.
//!
//! Orders live in a remote system of record reached through a single
//! request/response endpoint. This crate keeps an in-memory mirror of those
//! records, derives the dashboard views from it, and routes every change
//! through the remote system before committing it locally.
//!
//! # Architecture
//!
//! Each context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (HTTP, in-memory, tracing)
//! - **Services**: Orchestration of domain, ports and derived views
//!
//! # Modules
//!
//! - [`order`]: Order records, edit sessions and server-confirmed mutations
//! - [`remote`]: Request envelope, transports and the rate-limit aware client
//! - [`view`]: Table, board, counters, inventory and deadline derivations

pub mod order;
pub mod remote;
pub mod view;
