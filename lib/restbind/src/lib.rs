//! Typed HTTP request/response binding layer for generated client SDKs.
//!
//! Generated wrappers describe each remote operation as an immutable
//! [`OperationDescriptor`] and become thin functions: supply the descriptor
//! and arguments, let [`ServiceClient`] build the request, hand it to the
//! [`Transport`] collaborator, and decode the envelope into a
//! [`TypedResult`] or a typed error.
//!
//! # Example
//!
//! ```ignore
//! use restbind::prelude::*;
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
//! let client = ServiceClient::new(transport, "https://example.test");
//! let values: Vec<bool> = client
//!     .invoke(&GET_BOOLEANS, Arguments::new(), None, CallOptions::new())
//!     .await?;
//! ```

mod service_client;
pub mod prelude;

pub use service_client::ServiceClient;

// Re-export core types
pub use restbind_core::{
    Arguments, Binding, BindingSite, Body, BodySpec, CallOptions, ContentType, Error, Method,
    OperationDescriptor, Request, RequestBuilder, Response, Result, Transport, TypedResult,
    build_request, decode_empty, decode_response, from_json, to_json,
};

// Re-export http types for status codes and headers
pub use restbind_core::{StatusCode, header};
