//! Core types for the restbind typed request/response binding layer.
//!
//! Generated client wrappers describe each remote operation as plain data
//! (an [`OperationDescriptor`]) and call into two pure functions:
//! [`build_request`] to compose a transport-ready request from call-time
//! arguments, and [`decode_response`] / [`decode_empty`] to turn a raw
//! envelope into a typed value or a typed error. Everything here is
//! stateless and reentrant; network I/O happens behind [`Transport`].
//!
//! - [`OperationDescriptor`], [`Binding`], [`BodySpec`] - declarative
//!   operation metadata
//! - [`Arguments`], [`CallOptions`], [`Body`] - call-time inputs
//! - [`Request`] and [`RequestBuilder`] - resolved requests
//! - [`Response`] - raw response envelope
//! - [`TypedResult`] - decoded value plus status and headers
//! - [`Error`] and [`Result`] - error handling
//! - [`Transport`] - seam to the external HTTP collaborator
//! - [`StatusCode`] and [`header`] - re-exported from the `http` crate

mod bind;
mod body;
mod descriptor;
mod error;
mod method;
pub mod prelude;
mod request;
mod response;
mod result;
mod transport;

pub use bind::{Arguments, CallOptions, build_request};
pub use body::{Body, ContentType, from_json, to_json};
pub use descriptor::{Binding, BindingSite, BodySpec, OperationDescriptor};
pub use error::{Error, Result};
pub use method::Method;
pub use request::{Request, RequestBuilder};
pub use response::Response;
pub use result::{TypedResult, decode_empty, decode_response};
pub use transport::Transport;

// Re-export http crate types for status codes and headers
pub use http::{StatusCode, header};
