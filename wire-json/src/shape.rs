/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::document::Document;
use crate::error::DeserializeError;
use crate::serialize::write_document;

/// Describes one field of a wire type: its JSON key plus a getter and setter.
///
/// The getter returns `None` when the field is absent, which is distinct from
/// any present value (an explicit empty string is still emitted). The setter
/// receives the raw document for the key and is responsible for the typed
/// conversion, usually via one of the `Document::*_or_null` helpers.
pub struct Field<T: ?Sized> {
    name: &'static str,
    get: fn(&T) -> Option<Document>,
    set: fn(&mut T, Document) -> Result<(), DeserializeError>,
}

impl<T> Field<T> {
    pub const fn new(
        name: &'static str,
        get: fn(&T) -> Option<Document>,
        set: fn(&mut T, Document) -> Result<(), DeserializeError>,
    ) -> Self {
        Field { name, get, set }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// A type that can cross the wire as a JSON object.
///
/// `fields` returns the descriptor table in declaration order; that order is
/// also the order in which non-absent fields are emitted. Tables are built by
/// a plain function rather than cached in a singleton — the descriptors are
/// stateless, so there is nothing worth sharing.
pub trait Shape: Default {
    fn fields() -> Vec<Field<Self>>
    where
        Self: Sized;
}

/// Marshals `shape` into an object document, one entry per non-absent field.
pub fn to_document<T: Shape>(shape: &T) -> Document {
    let mut entries = Vec::new();
    for field in T::fields() {
        if let Some(value) = (field.get)(shape) {
            entries.push((field.name.to_owned(), value));
        }
    }
    Document::Object(entries)
}

/// Marshals `shape` straight to JSON body bytes.
pub fn to_vec<T: Shape>(shape: &T) -> Vec<u8> {
    let mut json = String::new();
    write_document(&mut json, &to_document(shape));
    json.into_bytes()
}

/// Unmarshals an object document into a `T`.
///
/// A `null` — or any other non-object value — yields `Ok(None)`: servers are
/// allowed to send a scalar where this client expects an object, and that
/// reads as "absent" rather than as an error. Keys with no matching field
/// descriptor are dropped so that wire fields added in the future never break
/// this client. If a key repeats, the last value wins.
pub fn from_document<T: Shape>(document: Document) -> Result<Option<T>, DeserializeError> {
    let entries = match document {
        Document::Object(entries) => entries,
        _ => return Ok(None),
    };
    let fields = T::fields();
    let mut shape = T::default();
    for (key, value) in entries {
        if let Some(field) = fields.iter().find(|field| field.name == key) {
            (field.set)(&mut shape, value)?;
        }
    }
    Ok(Some(shape))
}

/// Unmarshals a list of shapes, dropping `null` elements.
pub fn shape_list_or_null<T: Shape>(
    document: Document,
) -> Result<Option<Vec<T>>, DeserializeError> {
    match document.array_or_null()? {
        None => Ok(None),
        Some(values) => {
            let mut shapes = Vec::with_capacity(values.len());
            for value in values {
                if let Some(shape) = from_document(value)? {
                    shapes.push(shape);
                }
            }
            Ok(Some(shapes))
        }
    }
}

/// Parses raw JSON into an untyped [`Document`].
pub fn parse_document(body: &[u8]) -> Result<Document, DeserializeError> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(Document::from(value))
}

/// Unmarshals a full response body into a `T`.
///
/// An empty body and a `null` body both produce the default (all fields
/// unset) value.
pub fn parse_body<T: Shape>(body: &[u8]) -> Result<T, DeserializeError> {
    if body.is_empty() {
        return Ok(T::default());
    }
    Ok(from_document(parse_document(body)?)?.unwrap_or_default())
}

impl Document {
    /// Marshals a nested shape; equivalent to [`to_document`].
    pub fn from_shape<T: Shape>(shape: &T) -> Document {
        to_document(shape)
    }
}
