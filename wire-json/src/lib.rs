/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Generic JSON marshalling and unmarshalling for typed service calls.
//!
//! Instead of hand-writing one serializer per request/response type, every
//! wire type declares a table of [`Field`](shape::Field) descriptors and the
//! engine in [`shape`] walks that table: non-absent fields are written in
//! declaration order, unrecognized response keys are dropped, and a `null`
//! (or any other scalar) where an object was expected produces an absent
//! value rather than an error.

pub mod document;
pub mod error;
pub mod instant;
pub mod serialize;
pub mod shape;

pub use document::{Document, Number};
pub use error::DeserializeError;
pub use instant::Instant;
pub use shape::{
    from_document, parse_body, parse_document, shape_list_or_null, to_document, to_vec, Field,
    Shape,
};
