use std::collections::HashMap;
use std::sync::Arc;

use crate::encode;
use crate::models::{Enctype, FormField, FormSubmission, OnFormSubmitted};
use crate::{Error, Result};

/// Managed plugin state. Turns raw bridge payloads into structured
/// submission events and hands them to the registered observer.
pub struct FormInspector {
    handler: Option<Arc<dyn OnFormSubmitted>>,
}

impl FormInspector {
    pub fn new(handler: Option<Arc<dyn OnFormSubmitted>>) -> Self {
        Self { handler }
    }

    /// Handle one raw submission payload from the page script
    pub fn record(
        &self,
        url: String,
        method: String,
        fields: &str,
        headers: &str,
        trace: String,
        enctype: Option<String>,
    ) -> Result<()> {
        let fields: Vec<FormField> =
            serde_json::from_str(fields).map_err(Error::InvalidFields)?;
        let raw_headers: HashMap<String, String> =
            serde_json::from_str(headers).map_err(Error::InvalidHeaders)?;

        let enctype = match enctype {
            Some(value) => Enctype::from_string(&value),
            None => Enctype::Unknown(String::new()),
        };

        let body = encode::encode_body(&fields, &enctype);
        let mut headers = encode::normalize_headers(raw_headers);
        if let Some(content_type) = encode::content_type_for(&enctype) {
            headers.insert("content-type".to_string(), content_type);
        }

        let submission = FormSubmission {
            url,
            method,
            body,
            headers,
            trace,
            enctype,
        };

        tracing::info!(
            "Recorded form submission from JavaScript - {} --- {}",
            submission.url,
            submission.body
        );

        if let Some(handler) = &self.handler {
            handler.on_submitted(&submission);
        }
        Ok(())
    }
}
