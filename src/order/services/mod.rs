//! Application services coordinating the record store, the remote client
//! and the derived views.

mod busy;
mod config;
mod desk;
mod error;
mod mutations;
mod requests;
mod transitions;

use busy::BusyRecords;

pub use config::{DeskConfig, NotificationConfig};
pub use desk::OrderDesk;
pub use error::{DeskError, DeskResult};
pub use transitions::TransitionOutcome;
