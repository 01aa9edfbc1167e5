//! Request building from descriptors and call-time arguments.
//!
//! [`build_request`] is a pure function: descriptor + arguments + optional
//! body in, fully resolved [`Request`] out. It performs no I/O and holds no
//! state, so it is safe to call concurrently from any number of tasks.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::descriptor::{BindingSite, OperationDescriptor};
use crate::{Body, Error, Request, Result};

/// Percent-encoding set for path segment values: encodes everything except
/// unreserved characters and sub-delims, so values containing `/`, `?`, `#`,
/// spaces, or braces cannot escape their segment or fake a placeholder.
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'\\')
    .add(b'%');

/// Named call-time values for an operation's bindings.
///
/// Values are strings: every substitution site (host, path, query, header)
/// is textual on the wire, and formatting typed values is the wrapper's job.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    values: std::collections::HashMap<String, String>,
}

impl Arguments {
    /// Creates an empty argument set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Insert a value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Value for a binding name, if supplied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Whether a value was supplied for a binding name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }
}

/// Per-call overrides applied after binding-derived values.
///
/// The analog of the original request-options bag: extra headers a caller
/// wants on this one call, without widening the descriptor.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    headers: Vec<(String, String)>,
}

impl CallOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an extra header to this call.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Extra headers, in insertion order.
    #[must_use]
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Build a transport-ready [`Request`] from declarative metadata.
///
/// Substitutes every binding into its declared site, encodes the body per
/// the descriptor's body spec, and applies per-call header overrides last.
/// Never performs I/O.
///
/// # Errors
///
/// - [`Error::MissingArgument`] if a required binding has no value (checked
///   before anything is constructed) or a declared body is absent.
/// - [`Error::MalformedDescriptor`] if a `{placeholder}` is left unresolved
///   after substitution, or a body is supplied to a body-less operation.
/// - [`Error::InvalidUrl`] if the resolved host + path does not parse.
pub fn build_request(
    descriptor: &OperationDescriptor,
    args: &Arguments,
    body: Option<Body>,
    options: &CallOptions,
) -> Result<Request> {
    for binding in descriptor.bindings {
        if binding.required && !args.contains(binding.name) {
            return Err(Error::MissingArgument {
                operation: descriptor.name,
                name: binding.name,
            });
        }
    }

    // Host values are URL prefixes, substituted verbatim.
    let mut host = descriptor.host.to_string();
    for binding in descriptor.bindings_at(BindingSite::Host) {
        if let Some(value) = args.get(binding.name) {
            host = host.replace(&format!("{{{}}}", binding.name), value);
        }
    }

    let mut path = descriptor.path.to_string();
    for binding in descriptor.bindings_at(BindingSite::Path) {
        if let Some(value) = args.get(binding.name) {
            let encoded = utf8_percent_encode(value, PATH_SEGMENT_ENCODE_SET).to_string();
            path = path.replace(&format!("{{{}}}", binding.name), &encoded);
        }
    }

    if let Some(token) = unresolved_token(&host) {
        return Err(Error::malformed(
            descriptor.name,
            format!("unresolved host placeholder '{token}'"),
        ));
    }
    if let Some(token) = unresolved_token(&path) {
        return Err(Error::malformed(
            descriptor.name,
            format!("unresolved path placeholder '{token}'"),
        ));
    }

    let url = url::Url::parse(&format!("{host}{path}"))?;
    let mut builder = Request::builder(descriptor.method, url);

    for binding in descriptor.bindings_at(BindingSite::Query) {
        if let Some(value) = args.get(binding.name) {
            builder = builder.query(binding.name, value);
        }
    }

    // Absent optional headers are omitted, never sent empty.
    for binding in descriptor.bindings_at(BindingSite::Header) {
        if let Some(value) = args.get(binding.name) {
            builder = builder.header(binding.name, value);
        }
    }

    builder = match (descriptor.body, body) {
        (Some(spec), Some(body)) => builder
            .header("Content-Type", spec.content_type.as_str())
            .body(body.into_bytes()?),
        (None, None) => builder,
        (Some(_), None) => {
            return Err(Error::MissingArgument {
                operation: descriptor.name,
                name: "body",
            });
        }
        (None, Some(_)) => {
            return Err(Error::malformed(
                descriptor.name,
                "body supplied but no body spec declared",
            ));
        }
    };

    for (name, value) in options.headers() {
        builder = builder.header(name, value);
    }

    Ok(builder.build())
}

/// First `{...}` token remaining in a resolved template, if any.
fn unresolved_token(resolved: &str) -> Option<&str> {
    let start = resolved.find('{')?;
    let rest = resolved.get(start..)?;
    let len = rest.find('}').map_or(rest.len(), |end| end + 1);
    rest.get(..len)
}
