//! Error taxonomy for backend communication
//!
//! Every failure that reaches caller code is classified into exactly one of
//! three kinds: the server responded with a non-2xx status (`Api`), the
//! request was sent but no response came back (`Network`), or the request
//! never left the process (`Configuration`). Callers branch on the kind and
//! extract a display-ready message without knowing transport details.

use serde_json::Value;
use thiserror::Error as ThisError;

/// Result type alias for all client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fixed connectivity message used for every network-level failure
pub const CONNECTIVITY_MESSAGE: &str =
    "No se pudo conectar con el servidor. Verifique su conexión a internet.";

/// Fallback message when no usable message can be extracted from an error
pub const FALLBACK_MESSAGE: &str = "Ocurrió un error inesperado.";

/// Classified error for all backend communication
#[derive(Debug, ThisError)]
pub enum Error {
    /// Server reached and responded with a non-2xx status
    #[error("HTTP Error {status}: {message}")]
    Api {
        /// HTTP status code of the response
        status: u16,
        /// Server-provided message, or a generic `HTTP Error {status}`
        message: String,
        /// Raw server error payload, when the body was valid JSON
        data: Option<Value>,
    },

    /// Request was dispatched but no response was received (unreachable
    /// server, connection reset, timeout)
    #[error("{message}")]
    Network {
        /// Fixed human-readable connectivity message
        message: String,
    },

    /// Request never left the process: bad base URL, malformed path, or a
    /// body that could not be serialized. Carries the original error
    /// unwrapped in the source chain.
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

impl Error {
    /// True iff the server responded with a non-2xx status
    pub fn is_api_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// True iff the request was sent but no response was received
    pub fn is_network_error(&self) -> bool {
        matches!(self, Error::Network { .. })
    }

    /// HTTP status code, available only for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server error payload, available only for API errors with a JSON body
    pub fn data(&self) -> Option<&Value> {
        match self {
            Error::Api { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    pub(crate) fn network() -> Self {
        Error::Network {
            message: CONNECTIVITY_MESSAGE.to_string(),
        }
    }

    pub(crate) fn configuration(
        message: impl Into<String>,
        source: impl Into<anyhow::Error>,
    ) -> Self {
        Error::Configuration {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Build an API error from a completed non-2xx response.
    ///
    /// The body is consumed: when it parses as JSON it is kept as `data` and
    /// its top-level `message` field (if any) becomes the error message;
    /// otherwise the message falls back to `HTTP Error {status}`.
    pub(crate) async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let data = serde_json::from_str::<Value>(&body).ok();

        let message = data
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP Error {}", status));

        Error::Api {
            status,
            message,
            data,
        }
    }

    /// Classify a transport-level failure from the HTTP stack.
    ///
    /// Builder errors mean the request was never dispatched and stay
    /// configuration errors with the original error in the source chain;
    /// everything else (connect failure, timeout, broken connection) is a
    /// network error with the fixed connectivity message.
    pub(crate) fn from_transport(error: reqwest::Error) -> Self {
        if error.is_builder() {
            Error::configuration("failed to construct request", error)
        } else {
            Error::network()
        }
    }
}

/// Extract a display-ready message from a classified error.
///
/// API and network errors carry their own message; configuration errors use
/// their description when present and otherwise the fixed fallback string.
pub fn display_message(error: &Error) -> String {
    match error {
        Error::Api { message, .. } | Error::Network { message } => message.clone(),
        Error::Configuration { message, .. } => {
            if message.trim().is_empty() {
                FALLBACK_MESSAGE.to_string()
            } else {
                message.clone()
            }
        }
    }
}

/// Extract a display-ready message from a raw error payload that bypassed
/// classification (e.g. a server body logged or stored as-is).
///
/// Checks the nested `response.data.message` shape first, then a top-level
/// `message`, and falls back to [`FALLBACK_MESSAGE`] when neither yields a
/// usable string.
pub fn message_from_payload(payload: &Value) -> String {
    payload
        .pointer("/response/data/message")
        .or_else(|| payload.get("message"))
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_error() -> Error {
        Error::Api {
            status: 404,
            message: "Not found".to_string(),
            data: Some(json!({"message": "Not found"})),
        }
    }

    #[test]
    fn test_kind_predicates_are_exclusive() {
        let api = api_error();
        assert!(api.is_api_error());
        assert!(!api.is_network_error());

        let network = Error::network();
        assert!(network.is_network_error());
        assert!(!network.is_api_error());

        let config = Error::Configuration {
            message: "bad base URL".to_string(),
            source: None,
        };
        assert!(!config.is_api_error());
        assert!(!config.is_network_error());
    }

    #[test]
    fn test_api_error_accessors() {
        let err = api_error();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.data().unwrap()["message"], "Not found");

        assert_eq!(Error::network().status(), None);
        assert!(Error::network().data().is_none());
    }

    #[test]
    fn test_display_message_priority() {
        assert_eq!(display_message(&api_error()), "Not found");
        assert_eq!(display_message(&Error::network()), CONNECTIVITY_MESSAGE);

        let described = Error::Configuration {
            message: "invalid base URL".to_string(),
            source: None,
        };
        assert_eq!(display_message(&described), "invalid base URL");

        let blank = Error::Configuration {
            message: "  ".to_string(),
            source: None,
        };
        assert_eq!(display_message(&blank), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_message_from_payload_nested_shape() {
        let raw = json!({"response": {"data": {"message": "X"}}});
        assert_eq!(message_from_payload(&raw), "X");
    }

    #[test]
    fn test_message_from_payload_top_level() {
        let raw = json!({"message": "credenciales inválidas"});
        assert_eq!(message_from_payload(&raw), "credenciales inválidas");
    }

    #[test]
    fn test_message_from_payload_nested_wins_over_top_level() {
        let raw = json!({
            "message": "outer",
            "response": {"data": {"message": "inner"}}
        });
        assert_eq!(message_from_payload(&raw), "inner");
    }

    #[test]
    fn test_message_from_payload_fallback() {
        assert_eq!(message_from_payload(&json!({})), FALLBACK_MESSAGE);
        assert_eq!(message_from_payload(&json!({"message": ""})), FALLBACK_MESSAGE);
        assert_eq!(message_from_payload(&json!({"message": 42})), FALLBACK_MESSAGE);
    }

    #[test]
    fn test_configuration_source_is_preserved() {
        let parse_err = url::Url::parse("not a url").unwrap_err();
        let err = Error::configuration("invalid base URL", parse_err);

        let source = std::error::Error::source(&err).expect("source preserved");
        assert!(source.to_string().contains("relative URL"));
    }

    #[test]
    fn test_display_formats() {
        assert_eq!(api_error().to_string(), "HTTP Error 404: Not found");
        assert_eq!(Error::network().to_string(), CONNECTIVITY_MESSAGE);
    }
}
