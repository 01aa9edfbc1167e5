//! Transport seam.
//!
//! The binder builds requests and decodes envelopes; actually moving bytes
//! is the transport collaborator's job. Connection pooling, TLS, retries,
//! auth, timeouts, and cancellation all live behind [`Transport`] and are
//! opaque to this crate.

use std::future::Future;

use crate::{Request, Response, Result};

/// External collaborator that performs the network I/O for one request.
///
/// Implementations may run synchronously on the caller's task or hand off
/// to a reactor; the binder only brackets the call with build and decode
/// steps and makes no assumption about the execution model.
///
/// # Example
///
/// ```ignore
/// struct Recorded(Response);
///
/// impl Transport for Recorded {
///     fn send(&self, _request: Request) -> impl Future<Output = Result<Response>> + Send {
///         let response = self.0.clone();
///         async move { Ok(response) }
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be completed; transport
    /// errors are surfaced as-is and never retried by the binder.
    fn send(&self, request: Request) -> impl Future<Output = Result<Response>> + Send;
}
