/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use std::borrow::Cow;
use thiserror::Error;

/// Names the operation and service a request belongs to, for logging.
#[derive(Debug, Clone)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }
}

/// A marshalled request paired with the handler that will parse its response.
///
/// The request URI is relative at this point; the client joins it onto the
/// configured endpoint before dispatch.
pub struct Operation<H> {
    request: http::Request<Bytes>,
    response_handler: H,
    metadata: Option<Metadata>,
}

impl<H> Operation<H> {
    /// Wraps a marshalled request, defaulting the content type when the
    /// marshaller did not set one.
    pub fn new(mut request: http::Request<Bytes>, response_handler: H) -> Self {
        if !request.headers().contains_key(CONTENT_TYPE) {
            request
                .headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(crate::JSON_CONTENT_TYPE));
        }
        Operation {
            request,
            response_handler,
            metadata: None,
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    pub fn request(&self) -> &http::Request<Bytes> {
        &self.request
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.metadata.as_ref()
    }

    pub fn into_parts(self) -> (http::Request<Bytes>, H, Option<Metadata>) {
        (self.request, self.response_handler, self.metadata)
    }
}

/// The request could not be constructed; surfaced before anything is sent.
#[derive(Debug, Error)]
#[error("failed to construct a valid HTTP request")]
pub struct BuildError(#[from] http::Error);
