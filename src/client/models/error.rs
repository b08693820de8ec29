//! API error payload

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::null_as_default;

/// Marker pushed in front of the error list of every 401 response.
pub const UNAUTHORIZED: &str = "Unauthorized";

/// Structured failure returned by the API for non-2xx responses.
///
/// The SDK also builds one for failures that never reached the API (see
/// [`crate::Error::into_error_response`]); those carry no status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Field name to validation messages
    #[serde(default, deserialize_with = "null_as_default")]
    pub validations: BTreeMap<String, Vec<String>>,

    /// General error messages
    #[serde(default, deserialize_with = "null_as_default")]
    pub errors: Vec<String>,

    /// HTTP status code, absent when no response was received
    #[serde(
        default,
        deserialize_with = "lenient_status",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<u16>,
}

/// Read the body's `status` without letting a bogus value sink the payload.
///
/// The HTTP status always replaces it, so anything that is not a valid
/// status code decodes as `None`.
fn lenient_status<'de, D>(deserializer: D) -> Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let status = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(status
        .as_ref()
        .and_then(serde_json::Value::as_u64)
        .and_then(|s| u16::try_from(s).ok()))
}

impl ErrorResponse {
    /// Error with a single general message and no status.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Nothing recorded at all. Callers should treat this as an unknown failure.
    pub fn is_empty(&self) -> bool {
        self.validations.is_empty() && self.errors.is_empty() && self.status.is_none()
    }

    /// Fold a decoded body into this response.
    ///
    /// Body errors go after the ones already present and body validations
    /// replace same-named fields. The status already set from the HTTP
    /// response is kept.
    pub fn merge(&mut self, body: ErrorResponse) {
        self.validations.extend(body.validations);
        self.errors.extend(body.errors);
        if self.status.is_none() {
            self.status = body.status;
        }
    }

    /// Every message as one line each, validations prefixed with their field.
    pub fn messages(&self) -> Vec<String> {
        let mut lines = self.errors.clone();
        for (field, messages) in &self.validations {
            lines.extend(messages.iter().map(|m| format!("{}: {}", field, m.trim())));
        }
        lines
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "API request failed with status {}", status)?,
            None => write!(f, "API request failed")?,
        }

        let messages = self.messages();
        if !messages.is_empty() {
            write!(f, ": {}", messages.join("; "))?;
        }

        Ok(())
    }
}
