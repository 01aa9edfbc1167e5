//! Service client: the invocation bracket around a transport.
//!
//! [`ServiceClient`] pairs a [`Transport`] with a service endpoint and
//! exposes the two documented call forms per operation: a full
//! [`TypedResult`]-returning form and a value-only projection of it.

use serde::de::DeserializeOwned;
use tracing::debug;

use restbind_core::{
    Arguments, BindingSite, Body, CallOptions, OperationDescriptor, Result, Transport,
    TypedResult, build_request, decode_empty, decode_response,
};

/// A transport plus the service endpoint it talks to.
///
/// Generated per-operation wrappers hold one of these and call `invoke_*`
/// with their `static` descriptor; the client supplies the endpoint for any
/// host binding the caller left unset, builds the request, brackets the
/// transport call, and decodes the envelope.
///
/// # Example
///
/// ```ignore
/// let client = ServiceClient::new(transport, "https://example.test");
///
/// // Full form: typed value plus status and headers.
/// let result = client
///     .invoke_with_response::<Vec<bool>>(&GET_BOOLEANS, Arguments::new(), None, CallOptions::new())
///     .await?;
///
/// // Value-only form: strict projection of the one above.
/// let values: Vec<bool> = client
///     .invoke(&GET_BOOLEANS, Arguments::new(), None, CallOptions::new())
///     .await?;
/// ```
#[derive(Debug)]
pub struct ServiceClient<C> {
    transport: C,
    endpoint: String,
}

impl<C: Clone> Clone for ServiceClient<C> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}

impl<C> ServiceClient<C> {
    /// Create a client for a service endpoint.
    ///
    /// The endpoint is a URL prefix (e.g. `https://example.test`) substituted
    /// verbatim into host templates; it is kept as supplied, not normalized.
    #[must_use]
    pub fn new(transport: C, endpoint: impl Into<String>) -> Self {
        Self {
            transport,
            endpoint: endpoint.into(),
        }
    }

    /// Service endpoint as supplied.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Reference to the inner transport.
    #[must_use]
    pub fn inner(&self) -> &C {
        &self.transport
    }

    /// Consume the client and return the inner transport.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.transport
    }

    /// Supply the endpoint for host bindings the caller left unset.
    ///
    /// Explicit host arguments always win; this only fills the gap, so a
    /// required host binding is never reported missing when the client
    /// itself knows the endpoint.
    fn fill_host_arguments(&self, descriptor: &OperationDescriptor, mut args: Arguments) -> Arguments {
        for binding in descriptor.bindings_at(BindingSite::Host) {
            if !args.contains(binding.name) {
                args.set(binding.name, self.endpoint.as_str());
            }
        }
        args
    }
}

impl<C: Transport> ServiceClient<C> {
    /// Invoke an operation and return the decoded value with its protocol
    /// metadata.
    ///
    /// # Errors
    ///
    /// Returns binder errors from request building (missing argument,
    /// malformed descriptor), transport errors as-is, and decode errors
    /// (unexpected status, mismatched body shape). Nothing is retried or
    /// swallowed here.
    pub async fn invoke_with_response<R: DeserializeOwned>(
        &self,
        descriptor: &OperationDescriptor,
        args: Arguments,
        body: Option<Body>,
        options: CallOptions,
    ) -> Result<TypedResult<R>> {
        let response = self.send(descriptor, args, body, &options).await?;
        decode_response(descriptor, response)
    }

    /// Invoke an operation and return only the decoded value.
    ///
    /// Strictly a projection of [`Self::invoke_with_response`]: same code
    /// path, same errors, with the protocol metadata dropped at the end.
    ///
    /// # Errors
    ///
    /// Identical to [`Self::invoke_with_response`].
    pub async fn invoke<R: DeserializeOwned>(
        &self,
        descriptor: &OperationDescriptor,
        args: Arguments,
        body: Option<Body>,
        options: CallOptions,
    ) -> Result<R> {
        self.invoke_with_response(descriptor, args, body, options)
            .await
            .map(TypedResult::into_value)
    }

    /// Invoke a no-content operation, keeping the protocol metadata.
    ///
    /// # Errors
    ///
    /// As [`Self::invoke_with_response`], minus decode errors (the body is
    /// discarded for a void target).
    pub async fn invoke_unit_with_response(
        &self,
        descriptor: &OperationDescriptor,
        args: Arguments,
        body: Option<Body>,
        options: CallOptions,
    ) -> Result<TypedResult<()>> {
        let response = self.send(descriptor, args, body, &options).await?;
        decode_empty(descriptor, response)
    }

    /// Invoke a no-content operation.
    ///
    /// Strictly a projection of [`Self::invoke_unit_with_response`].
    ///
    /// # Errors
    ///
    /// Identical to [`Self::invoke_unit_with_response`].
    pub async fn invoke_unit(
        &self,
        descriptor: &OperationDescriptor,
        args: Arguments,
        body: Option<Body>,
        options: CallOptions,
    ) -> Result<()> {
        self.invoke_unit_with_response(descriptor, args, body, options)
            .await
            .map(TypedResult::into_value)
    }

    async fn send(
        &self,
        descriptor: &OperationDescriptor,
        args: Arguments,
        body: Option<Body>,
        options: &CallOptions,
    ) -> Result<restbind_core::Response> {
        let args = self.fill_host_arguments(descriptor, args);
        let request = build_request(descriptor, &args, body, options)?;
        debug!(
            operation = descriptor.name,
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );
        let response = self.transport.send(request).await?;
        debug!(
            operation = descriptor.name,
            status = response.status(),
            "received response"
        );
        Ok(response)
    }
}
