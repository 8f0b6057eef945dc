/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use std::fmt;
use wire_client::error::{classify_error, ErrorUnmarshaller, GenericError};

/// All errors the Amplify service reports.
///
/// Every variant carries the decoded generic error shape; `Unhandled` is the
/// mandatory fallback for codes this client does not know about.
#[derive(Debug, Clone, PartialEq)]
pub enum AmplifyError {
    /// A request contains a malformed or invalid parameter.
    BadRequest(GenericError),
    /// An operation failed because a dependent service threw an exception.
    DependentServiceFailure(GenericError),
    /// The service failed to perform an operation due to an internal issue.
    InternalFailure(GenericError),
    /// A resource could not be created because service quotas were exceeded.
    LimitExceeded(GenericError),
    /// An entity was not found during an operation.
    NotFound(GenericError),
    /// A named resource does not exist.
    ResourceNotFound(GenericError),
    /// The caller is not authorized to perform the operation.
    Unauthorized(GenericError),
    /// The service signaled a failure this client has no specific kind for.
    Unhandled(GenericError),
}

impl AmplifyError {
    /// The generic error shape underneath the typed kind.
    pub fn meta(&self) -> &GenericError {
        match self {
            AmplifyError::BadRequest(meta)
            | AmplifyError::DependentServiceFailure(meta)
            | AmplifyError::InternalFailure(meta)
            | AmplifyError::LimitExceeded(meta)
            | AmplifyError::NotFound(meta)
            | AmplifyError::ResourceNotFound(meta)
            | AmplifyError::Unauthorized(meta)
            | AmplifyError::Unhandled(meta) => meta,
        }
    }
}

impl fmt::Display for AmplifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.meta(), f)
    }
}

impl std::error::Error for AmplifyError {}

/// The registered unmarshaller chain, in priority order. The first code
/// match wins.
const ERRORS: &[ErrorUnmarshaller<AmplifyError>] = &[
    ErrorUnmarshaller::new("BadRequestException", AmplifyError::BadRequest),
    ErrorUnmarshaller::new(
        "DependentServiceFailureException",
        AmplifyError::DependentServiceFailure,
    ),
    ErrorUnmarshaller::new("InternalFailureException", AmplifyError::InternalFailure),
    ErrorUnmarshaller::new("LimitExceededException", AmplifyError::LimitExceeded),
    ErrorUnmarshaller::new("NotFoundException", AmplifyError::NotFound),
    ErrorUnmarshaller::new("ResourceNotFoundException", AmplifyError::ResourceNotFound),
    ErrorUnmarshaller::new("UnauthorizedException", AmplifyError::Unauthorized),
];

pub(crate) fn classify(response: &http::Response<Bytes>) -> AmplifyError {
    classify_error(response, ERRORS, AmplifyError::Unhandled)
}
