//! Error types for restbind.

use derive_more::{Display, Error, From};

/// Main error type for binding operations.
///
/// The first two variants indicate bugs in the code that produced the
/// descriptor or supplied the arguments; they are raised before any request
/// is handed to the transport. The last wire-facing variants are raised when
/// decoding a response envelope.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// Descriptor is internally inconsistent (a code-generation or
    /// configuration bug, never a caller error).
    #[display("malformed descriptor for '{operation}': {detail}")]
    #[from(skip)]
    MalformedDescriptor {
        /// Operation name from the descriptor.
        operation: &'static str,
        /// What is wrong with the descriptor.
        #[error(not(source))]
        detail: String,
    },

    /// A required binding has no call-time value.
    #[display("missing required argument '{name}' for '{operation}'")]
    #[from(skip)]
    MissingArgument {
        /// Operation name from the descriptor.
        operation: &'static str,
        /// Name of the binding without a value.
        name: &'static str,
    },

    /// The response status is outside the descriptor's expected set.
    #[display("unexpected status {status}")]
    #[from(skip)]
    UnexpectedStatus {
        /// HTTP status code as received.
        status: u16,
        /// Raw response body, unparsed (the error body schema is not
        /// guaranteed to match the success schema).
        #[error(not(source))]
        body: bytes::Bytes,
    },

    /// The response body does not match the declared target shape.
    #[display("cannot decode {target} at '{path}': {message}")]
    #[from(skip)]
    Decode {
        /// Target shape (Rust type name).
        target: &'static str,
        /// Path to the offending field, empty for syntax errors.
        path: String,
        /// Underlying decoder message.
        message: String,
        /// Raw payload that failed to decode, preserved for diagnostics.
        #[error(not(source))]
        body: bytes::Bytes,
    },

    /// Body serialization error.
    #[display("JSON serialization error: {_0}")]
    #[from]
    JsonSerialization(serde_json::Error),

    /// The resolved host + path is not a parseable URL.
    #[display("invalid URL: {_0}")]
    #[from]
    InvalidUrl(url::ParseError),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a malformed-descriptor error.
    #[must_use]
    pub fn malformed(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::MalformedDescriptor {
            operation,
            detail: detail.into(),
        }
    }

    /// Create an unexpected-status error from an envelope's parts.
    #[must_use]
    pub const fn unexpected_status(status: u16, body: bytes::Bytes) -> Self {
        Self::UnexpectedStatus { status, body }
    }

    /// Create a decode error with target shape, location context, and the
    /// offending payload.
    #[must_use]
    pub fn decode(
        target: &'static str,
        path: impl Into<String>,
        message: impl Into<String>,
        body: bytes::Bytes,
    ) -> Self {
        Self::Decode {
            target,
            path: path.into(),
            message: message.into(),
            body,
        }
    }

    /// Returns the HTTP status code if this is an unexpected-status error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if this is an unexpected 4xx status.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    /// Returns `true` if this is an unexpected 5xx status.
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..600).contains(&s))
    }

    /// Returns `true` if this is an unexpected 404 Not Found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns the raw response body if this is an unexpected-status or
    /// decode error.
    #[must_use]
    pub const fn body(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::UnexpectedStatus { body, .. } | Self::Decode { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Try to decode the carried response body as JSON.
    ///
    /// Returns `Some(Ok(value))` if the error carries a body that
    /// deserializes successfully, `Some(Err(error))` if it carries a body
    /// that does not, or `None` for other error kinds.
    ///
    /// # Example
    ///
    /// ```ignore
    /// #[derive(Debug, Deserialize)]
    /// struct ServiceError {
    ///     error: String,
    /// }
    ///
    /// match client.invoke::<Widget>(&GET_WIDGET, args, None, options).await {
    ///     Ok(widget) => println!("{widget:?}"),
    ///     Err(e) => {
    ///         if let Some(Ok(detail)) = e.decode_body::<ServiceError>() {
    ///             eprintln!("service said: {}", detail.error);
    ///         }
    ///     }
    /// }
    /// ```
    pub fn decode_body<T: serde::de::DeserializeOwned>(&self) -> Option<Result<T>> {
        self.body().map(|body| crate::from_json(body))
    }
}
