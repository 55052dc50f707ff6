//! Transport and sleeper adapters.

pub mod http;
mod scripted;
mod sleeper;

pub use http::HttpTransport;
pub use scripted::ScriptedTransport;
pub use sleeper::{RecordingSleeper, TokioSleeper};
