/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::document::{Document, Number};
use crate::instant::Instant;

/// Writes a JSON object into a `String`, one keyed value at a time.
pub struct JsonObjectWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonObjectWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('{');
        Self {
            json: output,
            started: false,
        }
    }

    /// Writes a null value with the given `key`.
    pub fn null(&mut self, key: &str) -> &mut Self {
        self.key(key);
        self.json.push_str("null");
        self
    }

    /// Writes the boolean `value` with the given `key`.
    pub fn boolean(&mut self, key: &str, value: bool) -> &mut Self {
        self.key(key);
        self.json.push_str(if value { "true" } else { "false" });
        self
    }

    /// Writes a string `value` with the given `key`.
    pub fn string(&mut self, key: &str, value: &str) -> &mut Self {
        self.key(key);
        append_string(self.json, value);
        self
    }

    /// Writes a number `value` with the given `key`.
    pub fn number(&mut self, key: &str, value: Number) -> &mut Self {
        self.key(key);
        append_number(self.json, value);
        self
    }

    /// Writes a timestamp `value`, in its epoch-seconds form, with the given `key`.
    pub fn timestamp(&mut self, key: &str, value: &Instant) -> &mut Self {
        self.number(key, value.to_number())
    }

    /// Writes an arbitrary `document` with the given `key`.
    pub fn document(&mut self, key: &str, document: &Document) -> &mut Self {
        self.key(key);
        write_document(self.json, document);
        self
    }

    /// Starts an array with the given `key`.
    pub fn start_array(&mut self, key: &str) -> JsonArrayWriter<'_> {
        self.key(key);
        JsonArrayWriter::new(self.json)
    }

    /// Starts a nested object with the given `key`.
    pub fn start_object(&mut self, key: &str) -> JsonObjectWriter<'_> {
        self.key(key);
        JsonObjectWriter::new(self.json)
    }

    /// Finishes the object.
    pub fn finish(self) {
        self.json.push('}');
    }

    fn key(&mut self, key: &str) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
        append_string(self.json, key);
        self.json.push(':');
    }
}

/// Writes a JSON array into a `String`, one value at a time.
pub struct JsonArrayWriter<'a> {
    json: &'a mut String,
    started: bool,
}

impl<'a> JsonArrayWriter<'a> {
    pub fn new(output: &'a mut String) -> Self {
        output.push('[');
        Self {
            json: output,
            started: false,
        }
    }

    pub fn null(&mut self) -> &mut Self {
        self.comma_delimit();
        self.json.push_str("null");
        self
    }

    pub fn boolean(&mut self, value: bool) -> &mut Self {
        self.comma_delimit();
        self.json.push_str(if value { "true" } else { "false" });
        self
    }

    pub fn string(&mut self, value: &str) -> &mut Self {
        self.comma_delimit();
        append_string(self.json, value);
        self
    }

    pub fn number(&mut self, value: Number) -> &mut Self {
        self.comma_delimit();
        append_number(self.json, value);
        self
    }

    pub fn document(&mut self, document: &Document) -> &mut Self {
        self.comma_delimit();
        write_document(self.json, document);
        self
    }

    pub fn start_array(&mut self) -> JsonArrayWriter<'_> {
        self.comma_delimit();
        JsonArrayWriter::new(self.json)
    }

    pub fn start_object(&mut self) -> JsonObjectWriter<'_> {
        self.comma_delimit();
        JsonObjectWriter::new(self.json)
    }

    /// Finishes the array.
    pub fn finish(self) {
        self.json.push(']');
    }

    fn comma_delimit(&mut self) {
        if self.started {
            self.json.push(',');
        }
        self.started = true;
    }
}

/// Writes `document` as JSON text, object entries in the order they appear.
pub fn write_document(json: &mut String, document: &Document) {
    match document {
        Document::Object(entries) => {
            let mut object = JsonObjectWriter::new(json);
            for (key, value) in entries {
                object.document(key, value);
            }
            object.finish();
        }
        Document::Array(values) => {
            let mut array = JsonArrayWriter::new(json);
            for value in values {
                array.document(value);
            }
            array.finish();
        }
        Document::Number(value) => append_number(json, *value),
        Document::String(value) => append_string(json, value),
        Document::Bool(value) => json.push_str(if *value { "true" } else { "false" }),
        Document::Null => json.push_str("null"),
    }
}

fn append_string(json: &mut String, value: &str) {
    json.push('"');
    for character in value.chars() {
        match character {
            '"' => json.push_str("\\\""),
            '\\' => json.push_str("\\\\"),
            '\u{08}' => json.push_str("\\b"),
            '\u{0C}' => json.push_str("\\f"),
            '\n' => json.push_str("\\n"),
            '\r' => json.push_str("\\r"),
            '\t' => json.push_str("\\t"),
            control if (control as u32) < 0x20 => {
                json.push_str(&format!("\\u{:04x}", control as u32));
            }
            other => json.push(other),
        }
    }
    json.push('"');
}

fn append_number(json: &mut String, value: Number) {
    match value {
        Number::PosInt(value) => {
            // itoa::Buffer is a fixed-size stack allocation, so this is cheap
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::NegInt(value) => {
            json.push_str(itoa::Buffer::new().format(value));
        }
        Number::Float(value) => {
            // JSON doesn't support NaN, Infinity, or -Infinity, so we're matching
            // the behavior of the serde_json crate in these cases.
            if value.is_nan() || value.is_infinite() {
                json.push_str("null");
            } else {
                // ryu::Buffer is a fixed-size stack allocation, so this is cheap
                json.push_str(ryu::Buffer::new().format_finite(value));
            }
        }
    }
}
