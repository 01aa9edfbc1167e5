//! Typed results: decoded payload plus protocol metadata.
//!
//! [`decode_response`] and [`decode_empty`] are pure functions of an
//! envelope and a descriptor; they never mutate the envelope and never
//! perform I/O. The value-only view is a projection via
//! [`TypedResult::into_value`], not a separate decode path.

use std::collections::HashMap;

use crate::descriptor::OperationDescriptor;
use crate::{Error, Response, Result};

/// Decoded response value plus the envelope's status and headers.
///
/// Keeps protocol metadata available next to the typed payload; callers
/// that only need the value use [`TypedResult::into_value`].
#[derive(Debug, Clone)]
pub struct TypedResult<T> {
    status: u16,
    headers: HashMap<String, String>,
    value: T,
}

impl<T> TypedResult<T> {
    /// HTTP status code of the originating envelope.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Headers of the originating envelope.
    #[must_use]
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Single header value by name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    /// Decoded value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Project to the value, discarding protocol metadata.
    #[must_use]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Consume into (status, headers, value).
    #[must_use]
    pub fn into_parts(self) -> (u16, HashMap<String, String>, T) {
        (self.status, self.headers, self.value)
    }
}

/// Decode an envelope into a typed value against a descriptor.
///
/// # Errors
///
/// - [`Error::UnexpectedStatus`] if the status is outside the descriptor's
///   expected set; carries the code and the raw, unparsed body.
/// - [`Error::Decode`] if the body does not match the target shape, naming
///   the shape and the offending field path when derivable; the raw body is
///   preserved on the error for diagnostics.
pub fn decode_response<T: serde::de::DeserializeOwned>(
    descriptor: &OperationDescriptor,
    response: Response,
) -> Result<TypedResult<T>> {
    let (status, headers, body) = response.into_parts();
    if !descriptor.expects(status) {
        return Err(Error::unexpected_status(status, body));
    }
    let value = crate::from_json(&body)?;
    Ok(TypedResult {
        status,
        headers,
        value,
    })
}

/// Decode an envelope for a no-content operation.
///
/// The body is discarded deterministically: it may be empty or ignorable,
/// and for a void target it is never inspected.
///
/// # Errors
///
/// Returns [`Error::UnexpectedStatus`] if the status is outside the
/// descriptor's expected set.
pub fn decode_empty(
    descriptor: &OperationDescriptor,
    response: Response,
) -> Result<TypedResult<()>> {
    let (status, headers, body) = response.into_parts();
    if !descriptor.expects(status) {
        return Err(Error::unexpected_status(status, body));
    }
    Ok(TypedResult {
        status,
        headers,
        value: (),
    })
}

#[cfg(test)]
mod tests {
    use assert2::let_assert;
    use bytes::Bytes;

    use super::*;
    use crate::descriptor::{Binding, BindingSite, BodySpec};
    use crate::Method;

    static GET_BOOLEANS: OperationDescriptor = OperationDescriptor {
        name: "array_boolean_get",
        method: Method::Get,
        host: "{endpoint}",
        path: "/type/array/boolean",
        bindings: &[Binding::required("endpoint", BindingSite::Host)],
        body: None,
        expected: &[200],
    };

    static PUT_BOOLEANS: OperationDescriptor = OperationDescriptor {
        name: "array_boolean_put",
        method: Method::Put,
        host: "{endpoint}",
        path: "/type/array/boolean",
        bindings: &[Binding::required("endpoint", BindingSite::Host)],
        body: Some(BodySpec::json()),
        expected: &[204],
    };

    fn envelope(status: u16, body: &'static [u8]) -> Response {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), "abc123".to_string());
        Response::new(status, headers, Bytes::from_static(body))
    }

    #[test]
    fn decodes_expected_status_into_target_shape() {
        let result: TypedResult<Vec<bool>> =
            decode_response(&GET_BOOLEANS, envelope(200, b"[true,false,true]"))
                .expect("decode");

        assert_eq!(result.status(), 200);
        assert_eq!(result.header("x-request-id"), Some("abc123"));
        assert_eq!(result.value(), &vec![true, false, true]);
        assert_eq!(result.into_value(), vec![true, false, true]);
    }

    #[test]
    fn unexpected_status_carries_code_and_raw_body() {
        let err = decode_response::<Vec<bool>>(
            &GET_BOOLEANS,
            envelope(404, br#"{"error":"missing"}"#),
        )
        .expect_err("should fail");

        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.body().expect("body").as_ref(),
            br#"{"error":"missing"}"#
        );
    }

    #[test]
    fn unexpected_status_wins_even_with_valid_body() {
        // 201 body would decode fine, but it is not in the expected set.
        let err = decode_response::<Vec<bool>>(&GET_BOOLEANS, envelope(201, b"[true]"))
            .expect_err("should fail");
        assert_eq!(err.status(), Some(201));
    }

    #[test]
    fn mismatched_body_is_a_decode_error() {
        let err = decode_response::<Vec<bool>>(&GET_BOOLEANS, envelope(200, b"[true,2]"))
            .expect_err("should fail");

        let_assert!(Error::Decode { target, path, .. } = err);
        assert!(target.contains("Vec<bool>"), "target: {target}");
        assert!(path.contains("[1]"), "path: {path}");
    }

    #[test]
    fn failed_decode_preserves_raw_body() {
        let err = decode_response::<Vec<bool>>(&GET_BOOLEANS, envelope(200, b"[true,2]"))
            .expect_err("should fail");

        // The offending payload stays available for diagnostics, same as
        // the unexpected-status case.
        assert_eq!(err.body().expect("body").as_ref(), b"[true,2]");
    }

    #[test]
    fn empty_decode_discards_body() {
        let result = decode_empty(&PUT_BOOLEANS, envelope(204, b"")).expect("decode");
        assert_eq!(result.status(), 204);
        assert_eq!(result.value(), &());

        // Ignorable body on a no-content operation is still fine.
        let result = decode_empty(&PUT_BOOLEANS, envelope(204, b"ignored")).expect("decode");
        assert_eq!(result.into_parts().0, 204);
    }

    #[test]
    fn empty_decode_still_checks_status() {
        let err = decode_empty(&PUT_BOOLEANS, envelope(400, br#"{"error":"bad value"}"#))
            .expect_err("should fail");
        assert_eq!(err.status(), Some(400));
        assert_eq!(
            err.body().expect("body").as_ref(),
            br#"{"error":"bad value"}"#
        );
    }
}
