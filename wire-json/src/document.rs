/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::DeserializeError;
use crate::instant::Instant;
use std::collections::BTreeMap;

/// An untyped JSON value.
///
/// Unlike `serde_json::Value`, objects are backed by a `Vec` of entries so
/// that the order in which a marshaller inserted them is the order in which
/// they are written out.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Object(Vec<(String, Document)>),
    Array(Vec<Document>),
    Number(Number),
    String(String),
    Bool(bool),
    Null,
}

/// A number type that implements Javascript / JSON semantics, modeled on serde_json:
/// https://docs.serde.rs/src/serde_json/number.rs.html#20-22
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    PosInt(u64),
    NegInt(i64),
    Float(f64),
}

impl Number {
    pub fn to_f64(self) -> f64 {
        match self {
            Number::PosInt(value) => value as f64,
            Number::NegInt(value) => value as f64,
            Number::Float(value) => value,
        }
    }

    pub fn to_i64(self) -> i64 {
        match self {
            Number::PosInt(value) => value as i64,
            Number::NegInt(value) => value,
            Number::Float(value) => value as i64,
        }
    }
}

impl Document {
    /// Short name of the JSON type held by this document, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Object(_) => "object",
            Document::Array(_) => "array",
            Document::Number(_) => "number",
            Document::String(_) => "string",
            Document::Bool(_) => "bool",
            Document::Null => "null",
        }
    }

    fn mismatch(&self, expected: &'static str) -> DeserializeError {
        DeserializeError::UnexpectedType {
            expected,
            found: self.type_name(),
        }
    }

    /// Expects a string or null value. Any other type is an error.
    pub fn string_or_null(self) -> Result<Option<String>, DeserializeError> {
        match self {
            Document::Null => Ok(None),
            Document::String(value) => Ok(Some(value)),
            other => Err(other.mismatch("string")),
        }
    }

    /// Expects a boolean or null value.
    pub fn boolean_or_null(self) -> Result<Option<bool>, DeserializeError> {
        match self {
            Document::Null => Ok(None),
            Document::Bool(value) => Ok(Some(value)),
            other => Err(other.mismatch("bool")),
        }
    }

    /// Expects a number or null value.
    pub fn number_or_null(self) -> Result<Option<Number>, DeserializeError> {
        match self {
            Document::Null => Ok(None),
            Document::Number(value) => Ok(Some(value)),
            other => Err(other.mismatch("number")),
        }
    }

    /// Expects an epoch-seconds timestamp or null value.
    pub fn timestamp_or_null(self) -> Result<Option<Instant>, DeserializeError> {
        Ok(self.number_or_null()?.map(|number| match number {
            Number::PosInt(seconds) => Instant::from_epoch_seconds(seconds as i64),
            Number::NegInt(seconds) => Instant::from_epoch_seconds(seconds),
            Number::Float(seconds) => Instant::from_f64(seconds),
        }))
    }

    /// Expects an array or null value.
    pub fn array_or_null(self) -> Result<Option<Vec<Document>>, DeserializeError> {
        match self {
            Document::Null => Ok(None),
            Document::Array(values) => Ok(Some(values)),
            other => Err(other.mismatch("array")),
        }
    }

    /// Expects an object or null value and returns its entries.
    pub fn object_or_null(self) -> Result<Option<Vec<(String, Document)>>, DeserializeError> {
        match self {
            Document::Null => Ok(None),
            Document::Object(entries) => Ok(Some(entries)),
            other => Err(other.mismatch("object")),
        }
    }

    /// Expects an object of string values (a `map<string, string>` wire shape) or null.
    pub fn string_map_or_null(
        self,
    ) -> Result<Option<BTreeMap<String, String>>, DeserializeError> {
        match self.object_or_null()? {
            None => Ok(None),
            Some(entries) => {
                let mut map = BTreeMap::new();
                for (key, value) in entries {
                    if let Some(value) = value.string_or_null()? {
                        map.insert(key, value);
                    }
                }
                Ok(Some(map))
            }
        }
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Document::String(value.to_owned())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Document::String(value)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Document::Bool(value)
    }
}

impl From<i32> for Document {
    fn from(value: i32) -> Self {
        Document::from(value as i64)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        if value < 0 {
            Document::Number(Number::NegInt(value))
        } else {
            Document::Number(Number::PosInt(value as u64))
        }
    }
}

impl From<u64> for Document {
    fn from(value: u64) -> Self {
        Document::Number(Number::PosInt(value))
    }
}

impl From<f64> for Document {
    fn from(value: f64) -> Self {
        Document::Number(Number::Float(value))
    }
}

impl From<Number> for Document {
    fn from(value: Number) -> Self {
        Document::Number(value)
    }
}

impl From<&Instant> for Document {
    fn from(value: &Instant) -> Self {
        Document::Number(value.to_number())
    }
}

impl From<&BTreeMap<String, String>> for Document {
    fn from(map: &BTreeMap<String, String>) -> Self {
        Document::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), Document::from(value.as_str())))
                .collect(),
        )
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Document::Null,
            serde_json::Value::Bool(value) => Document::Bool(value),
            serde_json::Value::Number(number) => Document::Number(convert_number(&number)),
            serde_json::Value::String(value) => Document::String(value),
            serde_json::Value::Array(values) => {
                Document::Array(values.into_iter().map(Document::from).collect())
            }
            serde_json::Value::Object(entries) => Document::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, Document::from(value)))
                    .collect(),
            ),
        }
    }
}

fn convert_number(number: &serde_json::Number) -> Number {
    if let Some(value) = number.as_u64() {
        Number::PosInt(value)
    } else if let Some(value) = number.as_i64() {
        Number::NegInt(value)
    } else {
        Number::Float(number.as_f64().unwrap_or_default())
    }
}
