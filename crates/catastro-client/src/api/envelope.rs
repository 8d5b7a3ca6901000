//! Backend response envelope
//!
//! The backend wraps every payload in `{status, message, data}`. This layer
//! consumes the convention without enforcing it: the envelope is
//! deserialized as-is and handed to callers untouched.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Success/error flag carried by every envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// The backend's standard response body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct ApiEnvelope<T> {
    pub status: ApiStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Consume the envelope, yielding its payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }

    /// Payload accessor for typed endpoints that require one; a success
    /// envelope without data is a malformed response, not an API error
    pub(crate) fn require_data(self, context: &str) -> Result<T> {
        self.data.ok_or_else(|| Error::Configuration {
            message: format!("response envelope for {} carried no data", context),
            source: None,
        })
    }
}
