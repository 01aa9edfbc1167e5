//! Operation descriptors: declarative metadata for one remote call.
//!
//! A descriptor is plain immutable data, normally emitted by a code
//! generator as a `static` and shared read-only across every call to that
//! operation. It replaces annotation-driven proxy dispatch: wrappers hand a
//! descriptor plus arguments to the binder instead of carrying their own
//! request-assembly logic.
//!
//! # Example
//!
//! ```
//! use restbind_core::{Binding, BindingSite, BodySpec, Method, OperationDescriptor};
//!
//! static GET_BOOLEANS: OperationDescriptor = OperationDescriptor {
//!     name: "array_boolean_get",
//!     method: Method::Get,
//!     host: "{endpoint}",
//!     path: "/type/array/boolean",
//!     bindings: &[
//!         Binding::required("endpoint", BindingSite::Host),
//!         Binding::optional("Accept", BindingSite::Header),
//!     ],
//!     body: None,
//!     expected: &[200],
//! };
//!
//! assert!(GET_BOOLEANS.expects(200));
//! assert!(!GET_BOOLEANS.expects(404));
//! ```

use crate::ContentType;

/// Where a bound parameter is substituted into the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSite {
    /// Host template variable (e.g. `{endpoint}` in `{endpoint}/fixed`).
    Host,
    /// Path template placeholder (e.g. `{id}` in `/widgets/{id}`).
    Path,
    /// URL query key.
    Query,
    /// Request header, set verbatim.
    Header,
}

impl std::fmt::Display for BindingSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Path => write!(f, "path"),
            Self::Query => write!(f, "query"),
            Self::Header => write!(f, "header"),
        }
    }
}

/// Maps a logical parameter name to a request substitution site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    /// Logical parameter name; for host/path sites this is the placeholder
    /// token, for query/header sites the wire key.
    pub name: &'static str,
    /// Substitution site.
    pub site: BindingSite,
    /// Whether a call-time value must be present.
    pub required: bool,
}

impl Binding {
    /// A binding whose value must be supplied on every call.
    #[must_use]
    pub const fn required(name: &'static str, site: BindingSite) -> Self {
        Self {
            name,
            site,
            required: true,
        }
    }

    /// A binding that is omitted from the request when no value is supplied.
    #[must_use]
    pub const fn optional(name: &'static str, site: BindingSite) -> Self {
        Self {
            name,
            site,
            required: false,
        }
    }
}

/// Declared request body: content type on the wire.
///
/// Whether the payload arrives as a typed value or pre-serialized bytes is a
/// property of the call-time [`crate::Body`], not of the descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodySpec {
    /// Content type set on the request when a body is present.
    pub content_type: ContentType,
}

impl BodySpec {
    /// JSON body spec (`application/json`).
    #[must_use]
    pub const fn json() -> Self {
        Self {
            content_type: ContentType::Json,
        }
    }

    /// Binary body spec (`application/octet-stream`).
    #[must_use]
    pub const fn octet_stream() -> Self {
        Self {
            content_type: ContentType::OctetStream,
        }
    }
}

/// Immutable definition of one remote HTTP operation.
///
/// Constructed once at client initialization (typically as a `static`) and
/// shared read-only across all calls; the binder never mutates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Operation name, used in diagnostics only.
    pub name: &'static str,
    /// HTTP method.
    pub method: crate::Method,
    /// Host template with `{name}` placeholders, substituted verbatim
    /// (values are URL prefixes like `https://example.test`).
    pub host: &'static str,
    /// Path template with `{name}` placeholders, substituted with
    /// percent-encoded values.
    pub path: &'static str,
    /// Parameter bindings, one per logical parameter.
    pub bindings: &'static [Binding],
    /// Request body declaration, if the operation takes one.
    pub body: Option<BodySpec>,
    /// Expected success status codes; anything else decodes to an
    /// unexpected-status error.
    pub expected: &'static [u16],
}

impl OperationDescriptor {
    /// Whether a status code is in the expected success set.
    #[must_use]
    pub fn expects(&self, status: u16) -> bool {
        self.expected.contains(&status)
    }

    /// Bindings for a given substitution site.
    pub fn bindings_at(&self, site: BindingSite) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(move |b| b.site == site)
    }
}
