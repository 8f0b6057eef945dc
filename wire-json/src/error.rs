/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::borrow::Cow;
use thiserror::Error;

/// Failure while unmarshalling a wire payload into a typed value.
///
/// These are local, non-recoverable failures for a single call: the response
/// already arrived, it just doesn't have the shape the caller's types expect.
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// The payload was not valid JSON at all.
    #[error("invalid JSON")]
    InvalidJson(#[from] serde_json::Error),

    /// A value had a different JSON type than the field descriptor expects.
    #[error("expected {expected}, found {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("{0}")]
    Custom(Cow<'static, str>),
}

impl DeserializeError {
    pub fn custom(message: impl Into<Cow<'static, str>>) -> Self {
        DeserializeError::Custom(message.into())
    }
}
