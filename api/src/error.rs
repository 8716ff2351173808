//! Error taxonomy for backend calls.

use thiserror::Error;

/// Shown when the backend rejects an upload without saying why.
pub const UPLOAD_FAILED_FALLBACK: &str = "Upload failed";

/// Shown when no usable response came back (network failure or an unexpected body).
pub const UPLOAD_UNREACHABLE_MESSAGE: &str = "Upload failed: the server could not be reached.";

/// Errors that can occur while talking to the analysis backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// File refused before sending; only `.csv` files are uploaded.
    #[error("File must be a CSV file.")]
    UnsupportedFile(String),

    /// No response was received (DNS, connection refused, aborted request, ...).
    #[error("Network error: {0}")]
    Transport(String),

    /// A response arrived but the backend refused the request.
    #[error("Backend rejected request ({status}): {}", .reason.as_deref().unwrap_or("no reason given"))]
    Rejected { status: u16, reason: Option<String> },

    /// A success response whose body does not match the expected shape.
    #[error("Invalid response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Message surfaced to the user when an upload attempt fails with this error.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::UnsupportedFile(_) => self.to_string(),
            ApiError::Rejected {
                reason: Some(reason),
                ..
            } => reason.clone(),
            ApiError::Rejected { reason: None, .. } => UPLOAD_FAILED_FALLBACK.to_string(),
            ApiError::Transport(_) | ApiError::MalformedResponse(_) => {
                UPLOAD_UNREACHABLE_MESSAGE.to_string()
            }
        }
    }
}

/// Pulls the human-readable `error` field out of a failure body, if there is one.
pub(crate) fn rejection_reason(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|reason| reason.as_str())
        .filter(|reason| !reason.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_with_reason_is_shown_verbatim() {
        let error = ApiError::Rejected {
            status: 400,
            reason: Some("missing column Flowrate".into()),
        };
        assert_eq!(error.user_message(), "missing column Flowrate");
    }

    #[test]
    fn rejected_without_reason_uses_fallback() {
        let error = ApiError::Rejected {
            status: 500,
            reason: None,
        };
        assert_eq!(error.user_message(), UPLOAD_FAILED_FALLBACK);
        assert!(error.to_string().contains("no reason given"));
    }

    #[test]
    fn transport_and_malformed_share_generic_message() {
        let transport = ApiError::Transport("connection refused".into());
        let malformed = ApiError::MalformedResponse("missing field `id`".into());
        assert_eq!(transport.user_message(), UPLOAD_UNREACHABLE_MESSAGE);
        assert_eq!(malformed.user_message(), UPLOAD_UNREACHABLE_MESSAGE);
        assert_ne!(transport, malformed);
    }

    #[test]
    fn unsupported_file_message() {
        let error = ApiError::UnsupportedFile("notes.txt".into());
        assert_eq!(error.user_message(), "File must be a CSV file.");
    }

    #[test]
    fn reason_is_kept_byte_for_byte() {
        assert_eq!(
            rejection_reason(r#"{"error": "  missing column Flowrate\n"}"#).as_deref(),
            Some("  missing column Flowrate\n")
        );
        assert_eq!(rejection_reason(r#"{"error": "  "}"#).as_deref(), Some("  "));
    }

    #[test]
    fn reason_extraction() {
        assert_eq!(
            rejection_reason(r#"{"error": "CSV file is empty."}"#).as_deref(),
            Some("CSV file is empty.")
        );
        assert_eq!(rejection_reason(r#"{"detail": "nope"}"#), None);
        assert_eq!(rejection_reason(r#"{"error": 42}"#), None);
        assert_eq!(rejection_reason(r#"{"error": ""}"#), None);
        assert_eq!(rejection_reason(""), None);
        assert_eq!(rejection_reason("<html>502 Bad Gateway</html>"), None);
    }
}
