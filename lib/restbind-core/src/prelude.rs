//! Prelude module for convenient imports.
//!
//! ```ignore
//! use restbind_core::prelude::*;
//! ```

pub use crate::{
    Arguments, Binding, BindingSite, Body, BodySpec, CallOptions, ContentType, Error, Method,
    OperationDescriptor, Request, Response, Result, Transport, TypedResult, build_request,
    decode_empty, decode_response, from_json, to_json,
};
