//! Body payloads and JSON serialization utilities.

use bytes::Bytes;

use crate::Result;

/// Content type declared for a request body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Binary content type (`application/octet-stream`).
    OctetStream,
    /// Plain text content type (`text/plain`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::OctetStream => "application/octet-stream",
            Self::PlainText => "text/plain",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A call-time body value.
///
/// Two encodings exist, matching the two ways generated wrappers supply
/// payloads: a typed value mapped structurally to JSON, or pre-serialized
/// bytes passed through untouched (with the content type still taken from
/// the descriptor).
#[derive(Debug, Clone)]
pub enum Body {
    /// Typed value, encoded as structural JSON at build time.
    Json(serde_json::Value),
    /// Pre-serialized payload, passed through byte for byte.
    Binary(Bytes),
}

impl Body {
    /// Create a JSON body from a serializable value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be represented as JSON.
    pub fn json<T: serde::Serialize>(value: &T) -> Result<Self> {
        serde_json::to_value(value)
            .map(Self::Json)
            .map_err(Into::into)
    }

    /// Create a pass-through body from raw bytes.
    #[must_use]
    pub fn bytes(bytes: impl Into<Bytes>) -> Self {
        Self::Binary(bytes.into())
    }

    /// Encode into wire bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON encoding fails.
    pub fn into_bytes(self) -> Result<Bytes> {
        match self {
            Self::Json(value) => to_json(&value),
            Self::Binary(bytes) => Ok(bytes),
        }
    }
}

/// Serialize a value to JSON bytes.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Example
///
/// ```
/// use restbind_core::to_json;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Widget { name: String }
///
/// let widget = Widget { name: "sprocket".to_string() };
/// let bytes = to_json(&widget).expect("serialize");
/// assert_eq!(bytes.as_ref(), br#"{"name":"sprocket"}"#);
/// ```
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<Bytes> {
    serde_json::to_vec(value)
        .map(Bytes::from)
        .map_err(Into::into)
}

/// Deserialize JSON bytes into a target shape with path-aware errors.
///
/// Uses `serde_path_to_error` so a failed decode names the target type and
/// the path to the offending field (e.g. `property` or `[2]`) when one can
/// be derived; syntax errors carry an empty path. The raw input is preserved
/// on the error for diagnostics.
///
/// # Errors
///
/// Returns [`crate::Error::Decode`] if deserialization fails.
///
/// # Example
///
/// ```
/// use restbind_core::from_json;
///
/// let values: Vec<bool> = from_json(b"[true,false,true]").expect("deserialize");
/// assert_eq!(values, vec![true, false, true]);
/// ```
pub fn from_json<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        crate::Error::decode(
            std::any::type_name::<T>(),
            e.path().to_string(),
            e.inner().to_string(),
            Bytes::copy_from_slice(bytes),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_as_str() {
        assert_eq!(ContentType::Json.as_str(), "application/json");
        assert_eq!(ContentType::OctetStream.as_str(), "application/octet-stream");
        assert_eq!(ContentType::PlainText.as_str(), "text/plain");
    }

    #[test]
    fn content_type_display() {
        assert_eq!(ContentType::Json.to_string(), "application/json");
    }

    #[test]
    fn body_json_encodes_structurally() {
        #[derive(serde::Serialize)]
        struct Widget {
            name: String,
            count: u32,
        }

        let body = Body::json(&Widget {
            name: "sprocket".to_string(),
            count: 3,
        })
        .expect("body");

        let bytes = body.into_bytes().expect("encode");
        assert_eq!(bytes.as_ref(), br#"{"count":3,"name":"sprocket"}"#);
    }

    #[test]
    fn body_binary_passes_through() {
        let raw = Bytes::from_static(b"[true,false]");
        let body = Body::bytes(raw.clone());
        assert_eq!(body.into_bytes().expect("encode"), raw);
    }

    #[test]
    fn from_json_deserialize() {
        #[derive(Debug, PartialEq, serde::Deserialize)]
        struct Widget {
            name: String,
        }

        let widget: Widget = from_json(br#"{"name":"sprocket"}"#).expect("deserialize");
        assert_eq!(
            widget,
            Widget {
                name: "sprocket".to_string()
            }
        );
    }

    #[test]
    fn from_json_syntax_error_names_target() {
        let result: Result<Vec<bool>> = from_json(b"not json");

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("cannot decode"), "unexpected message: {msg}");
        assert!(msg.contains("Vec<bool>"), "unexpected message: {msg}");
        assert_eq!(err.body().expect("body").as_ref(), b"not json");
    }

    #[test]
    fn from_json_missing_field_error_with_path() {
        #[derive(Debug, serde::Deserialize)]
        struct Inner {
            #[allow(dead_code)]
            city: String,
        }

        #[derive(Debug, serde::Deserialize)]
        struct Outer {
            #[allow(dead_code)]
            address: Inner,
        }

        let result: Result<Outer> = from_json(br#"{"address":{}}"#);

        let err = result.expect_err("should fail");
        let msg = err.to_string();
        assert!(msg.contains("address"), "expected path in error: {msg}");
        assert!(msg.contains("city"), "expected field in error: {msg}");
    }
}
