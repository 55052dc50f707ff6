//! Port contracts for reaching the remote system of record.

pub mod sleeper;
pub mod transport;

pub use sleeper::Sleeper;
pub use transport::{RemoteTransport, TransportError, TransportResult};
