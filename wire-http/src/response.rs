/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::result::BoxError;
use bytes::Bytes;

/// Parses structured data out of a fully loaded HTTP response.
///
/// One implementation exists per operation. The client decides which method
/// to invoke from the response status: success statuses go through
/// `parse_output`, everything else through `parse_error`.
pub trait ParseResponse {
    /// Typed result of a successful call.
    type Output;

    /// Typed service error for a failed call.
    type Error;

    /// Unmarshals the body of a success response.
    ///
    /// An `Err` here means the response arrived but could not be decoded; the
    /// client surfaces it as a response error, never as a service error.
    fn parse_output(&self, response: &http::Response<Bytes>) -> Result<Self::Output, BoxError>;

    /// Produces the typed service error for an error response.
    ///
    /// This must always produce *some* error value — unrecognized or
    /// malformed error payloads map to the service's generic error kind.
    fn parse_error(&self, response: &http::Response<Bytes>) -> Self::Error;
}
