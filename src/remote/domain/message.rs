//! Request and response envelopes of the remote protocol.

use super::RemoteAction;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Request envelope: `{action, id?, data?, ...extra}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRequest {
    action: RemoteAction,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl RemoteRequest {
    /// Creates a request carrying only `action`.
    #[must_use]
    pub fn new(action: RemoteAction) -> Self {
        Self {
            action,
            id: None,
            data: None,
            fields: Map::new(),
        }
    }

    /// Targets the record `id`.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Attaches `payload` as the `data` object.
    ///
    /// # Errors
    ///
    /// Returns the serialisation error when `payload` cannot be encoded.
    pub fn with_data<T: Serialize>(mut self, payload: &T) -> Result<Self, serde_json::Error> {
        self.data = Some(serde_json::to_value(payload)?);
        Ok(self)
    }

    /// Adds an action-specific top-level field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the action.
    #[must_use]
    pub const fn action(&self) -> RemoteAction {
        self.action
    }

    /// Returns the targeted record id, if any.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the `data` payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Returns an action-specific field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// Classification of a response `status` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    /// The action was applied.
    Success,
    /// The server asked the client to slow down.
    TooManyRequests,
    /// Any other status.
    Failed,
}

/// Response envelope: `{status, data?, message?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteResponse {
    status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl RemoteResponse {
    /// Status string for confirmed actions.
    pub const SUCCESS: &'static str = "success";
    /// Status string for rate-limited actions.
    pub const TOO_MANY_REQUESTS: &'static str = "too_many_requests";

    /// Builds a success response carrying `data`.
    #[must_use]
    pub fn success(data: Value) -> Self {
        Self {
            status: Self::SUCCESS.to_owned(),
            data: Some(data),
            message: None,
        }
    }

    /// Builds a success response with no payload.
    #[must_use]
    pub fn empty_success() -> Self {
        Self {
            status: Self::SUCCESS.to_owned(),
            data: None,
            message: None,
        }
    }

    /// Builds a rate-limit response.
    #[must_use]
    pub fn too_many_requests() -> Self {
        Self {
            status: Self::TOO_MANY_REQUESTS.to_owned(),
            data: None,
            message: None,
        }
    }

    /// Builds a failure response carrying the server's message.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_owned(),
            data: None,
            message: Some(message.into()),
        }
    }

    /// Returns the raw status string.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Classifies the status string.
    #[must_use]
    pub fn outcome(&self) -> ResponseStatus {
        match self.status.as_str() {
            Self::SUCCESS => ResponseStatus::Success,
            Self::TOO_MANY_REQUESTS => ResponseStatus::TooManyRequests,
            _ => ResponseStatus::Failed,
        }
    }

    /// Returns the payload, if any.
    #[must_use]
    pub const fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Returns the server message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Consumes the response, returning its payload.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        self.data
    }
}
