use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One form element captured by the page script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub value: String,
    /// The element's `type` attribute (text, password, hidden, ...)
    #[serde(rename = "type")]
    pub field_type: String,
}

/// Encoding declared by the form's `enctype` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enctype {
    UrlEncoded,
    Multipart,
    PlainText,
    /// Anything else the page declared, kept verbatim
    Unknown(String),
}

impl Enctype {
    /// Parse the `enctype` attribute value
    pub fn from_string(s: &str) -> Self {
        match s {
            "application/x-www-form-urlencoded" => Self::UrlEncoded,
            "multipart/form-data" => Self::Multipart,
            "text/plain" => Self::PlainText,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Canonical MIME type, if the encoding is a known one
    pub fn as_mime(&self) -> Option<&str> {
        match self {
            Self::UrlEncoded => Some("application/x-www-form-urlencoded"),
            Self::Multipart => Some("multipart/form-data"),
            Self::PlainText => Some("text/plain"),
            Self::Unknown(_) => None,
        }
    }
}

/// A single intercepted form submission, handed to the observer once
/// and not retained afterwards.
#[derive(Debug, Clone)]
pub struct FormSubmission {
    /// Absolute URL the form targets
    pub url: String,
    /// HTTP method from the form's `method` attribute
    pub method: String,
    /// Body re-encoded according to `enctype`
    pub body: String,
    /// Request headers, keys lowercased
    pub headers: HashMap<String, String>,
    /// JavaScript stack trace captured at submission time
    pub trace: String,
    pub enctype: Enctype,
}

/// Observer invoked on the webview's script-evaluation thread for every
/// intercepted submission.
pub trait OnFormSubmitted: Send + Sync {
    fn on_submitted(&self, submission: &FormSubmission);
}
