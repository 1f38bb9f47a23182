//! Error types for the transport and the notes client.

use serde_json::Value;

/// Failure reported by a [`Transport`](crate::Transport).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success status.
    #[error("HTTP {status}")]
    Status { status: u16, body: Option<Value> },
    /// The response body could not be read as JSON.
    #[error("unreadable response body: {0}")]
    Body(String),
}

/// Failure of a [`NotesClient`](crate::NotesClient) operation.
///
/// By the time a caller sees one of these, the user has already been
/// notified.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum NotesError {
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with HTTP {status}")]
    Server {
        status: u16,
        /// `message` or `error` field of the error body, when present.
        message: Option<String>,
    },
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl NotesError {
    /// Message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            NotesError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            NotesError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<TransportError> for NotesError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Network(e) => NotesError::Network(e),
            TransportError::Status { status, body } => NotesError::Server {
                status,
                message: body.as_ref().and_then(server_message),
            },
            TransportError::Body(e) => NotesError::Decode(e),
        }
    }
}

fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_prefers_message_field() {
        let err = NotesError::from(TransportError::Status {
            status: 403,
            body: Some(json!({"message": "Already requested", "error": "other"})),
        });
        assert_eq!(err.server_message(), Some("Already requested"));
        assert_eq!(err.status(), Some(403));
    }

    #[test]
    fn test_server_message_falls_back_to_error_field() {
        let err = NotesError::from(TransportError::Status {
            status: 400,
            body: Some(json!({"success": false, "error": "Title is required"})),
        });
        assert_eq!(err.server_message(), Some("Title is required"));
    }

    #[test]
    fn test_blank_or_missing_server_message() {
        let blank = NotesError::from(TransportError::Status {
            status: 500,
            body: Some(json!({"message": "  "})),
        });
        assert_eq!(blank.server_message(), None);

        let missing = NotesError::from(TransportError::Status {
            status: 502,
            body: None,
        });
        assert_eq!(missing.server_message(), None);
    }

    #[test]
    fn test_network_and_body_errors() {
        assert_eq!(
            NotesError::from(TransportError::Network("refused".into())),
            NotesError::Network("refused".into())
        );
        assert!(matches!(
            NotesError::from(TransportError::Body("eof".into())),
            NotesError::Decode(_)
        ));
    }
}
