//! Prelude module for convenient imports.
//!
//! ```ignore
//! use restbind::prelude::*;
//! ```

pub use crate::{
    Arguments, Binding, BindingSite, Body, BodySpec, CallOptions, ContentType, Error, Method,
    OperationDescriptor, Request, Response, Result, ServiceClient, Transport, TypedResult,
};
