/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use thiserror::Error;
use wire_http::result::BoxError;

/// The request could not be dispatched, or no HTTP response came back.
///
/// Produced only by [`Transport`] implementations; the client passes it
/// through unchanged.
#[derive(Debug, Error)]
#[error("failed to dispatch the request")]
pub struct TransportError {
    #[source]
    source: BoxError,
}

impl TransportError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        TransportError {
            source: source.into(),
        }
    }
}

/// Executes one HTTP request, blocking until the response is fully loaded.
///
/// Timeouts, retries, connection pooling, and request signing all live behind
/// this seam. The client makes exactly one `execute` call per operation
/// invocation. Implementations shared across threads must be safe for
/// concurrent use.
pub trait Transport {
    fn execute(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, TransportError>;
}
