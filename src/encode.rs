use std::collections::HashMap;
use std::fmt::Write;

use crate::models::{Enctype, FormField};

/// Fixed boundary, WebKit-style so captured bodies look like what the
/// webview itself would have sent
pub const MULTIPART_BOUNDARY: &str = "----WebKitFormBoundaryU7CgQs9WnqlZYKs6";

/// Serialize the captured fields according to the declared encoding.
/// Unknown encodings degrade to an empty body rather than failing the page.
pub fn encode_body(fields: &[FormField], enctype: &Enctype) -> String {
    match enctype {
        Enctype::UrlEncoded => url_encoded_body(fields),
        Enctype::Multipart => multipart_body(fields),
        Enctype::PlainText => plain_text_body(fields),
        Enctype::Unknown(raw) => {
            tracing::error!("Incorrect encoding received from JavaScript: {raw}");
            String::new()
        }
    }
}

/// `content-type` header value matching the encoded body, if any
pub fn content_type_for(enctype: &Enctype) -> Option<String> {
    match enctype {
        Enctype::UrlEncoded | Enctype::PlainText => enctype.as_mime().map(str::to_string),
        Enctype::Multipart => Some(format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}")),
        Enctype::Unknown(_) => None,
    }
}

/// Lowercase every header key; values pass through untouched
pub fn normalize_headers(raw: HashMap<String, String>) -> HashMap<String, String> {
    raw.into_iter().map(|(k, v)| (k.to_lowercase(), v)).collect()
}

fn url_encoded_body(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| format!("{}={}", field.name, urlencoding::encode(&field.value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn multipart_body(fields: &[FormField]) -> String {
    let mut body = String::new();
    for field in fields {
        let _ = write!(
            body,
            "--{MULTIPART_BOUNDARY}\nContent-Disposition: form-data; name=\"{}\"\n\n{}\n",
            field.name, field.value
        );
    }
    let _ = write!(body, "--{MULTIPART_BOUNDARY}--");
    body
}

fn plain_text_body(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|field| format!("{}={}", field.name, field.value))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, value: &str) -> FormField {
        FormField {
            name: name.to_string(),
            value: value.to_string(),
            field_type: "text".to_string(),
        }
    }

    #[test]
    fn test_url_encoded_percent_encodes_values() {
        let body = encode_body(&[field("a", "b c")], &Enctype::UrlEncoded);
        assert_eq!(body, "a=b%20c");
    }

    #[test]
    fn test_url_encoded_joins_with_ampersand() {
        let body = encode_body(
            &[field("user", "bob"), field("pass", "s&cret")],
            &Enctype::UrlEncoded,
        );
        assert_eq!(body, "user=bob&pass=s%26cret");
    }

    #[test]
    fn test_multipart_sections_and_terminator() {
        let body = encode_body(&[field("a", "1"), field("b", "2")], &Enctype::Multipart);

        let opening = format!("--{MULTIPART_BOUNDARY}\n");
        assert_eq!(body.matches(&opening).count(), 2);
        let closing = format!("--{MULTIPART_BOUNDARY}--");
        assert_eq!(body.matches(&closing).count(), 1);
        assert!(body.ends_with(&closing));
        assert!(body.contains("Content-Disposition: form-data; name=\"a\""));
        assert!(body.contains("Content-Disposition: form-data; name=\"b\""));
    }

    #[test]
    fn test_plain_text_leaves_values_alone() {
        let body = encode_body(&[field("a", "b c"), field("d", "e")], &Enctype::PlainText);
        assert_eq!(body, "a=b c\nd=e");
    }

    #[test]
    fn test_unknown_enctype_yields_empty_body() {
        let body = encode_body(&[field("a", "b")], &Enctype::Unknown("bogus".to_string()));
        assert_eq!(body, "");
    }

    #[test]
    fn test_content_type_values() {
        assert_eq!(
            content_type_for(&Enctype::UrlEncoded).as_deref(),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            content_type_for(&Enctype::Multipart).as_deref(),
            Some("multipart/form-data; boundary=----WebKitFormBoundaryU7CgQs9WnqlZYKs6")
        );
        assert_eq!(content_type_for(&Enctype::PlainText).as_deref(), Some("text/plain"));
        assert_eq!(content_type_for(&Enctype::Unknown(String::new())), None);
    }

    #[test]
    fn test_headers_lowercased() {
        let raw = HashMap::from([
            ("Content-Type".to_string(), "text/html".to_string()),
            ("X-CUSTOM".to_string(), "1".to_string()),
        ]);

        let headers = normalize_headers(raw);
        assert_eq!(headers.get("content-type").map(String::as_str), Some("text/html"));
        assert_eq!(headers.get("x-custom").map(String::as_str), Some("1"));
        assert!(!headers.contains_key("Content-Type"));
    }
}
