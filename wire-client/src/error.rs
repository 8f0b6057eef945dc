/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error response classification.
//!
//! Service error bodies share one wire shape regardless of which error they
//! carry: a discriminator code plus an optional human-readable message. This
//! module extracts that shape into [`GenericError`] and matches the code
//! against a service's registered unmarshaller chain.

use bytes::Bytes;
use http::Response;
use std::fmt;
use wire_json::Document;

const ERROR_TYPE_HEADER: &str = "x-amzn-errortype";
const REQUEST_ID_HEADER: &str = "x-amzn-requestid";

/// An error response decoded without knowledge of the service's error set.
///
/// Every typed service error wraps one of these; the unrecognized-error
/// fallback surfaces it directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenericError {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl GenericError {
    pub fn builder() -> GenericErrorBuilder {
        GenericErrorBuilder::default()
    }

    /// The discriminator code, already sanitized.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl fmt::Display for GenericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(request_id) = &self.request_id {
            fmt.field("request_id", request_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for GenericError {}

#[derive(Debug, Default)]
pub struct GenericErrorBuilder {
    code: Option<String>,
    message: Option<String>,
    request_id: Option<String>,
}

impl GenericErrorBuilder {
    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn build(self) -> GenericError {
        GenericError {
            code: self.code,
            message: self.message,
            request_id: self.request_id,
        }
    }
}

/// Strips the namespace prefix and recovery-hint suffix from an error code.
///
/// Services send codes like `com.amazonaws.amplify#NotFoundException` or
/// `NotFoundException:http://internal/docs`; only the bare name in the middle
/// identifies the error.
fn sanitize_error_code(code: &str) -> &str {
    let code = match code.find('#') {
        Some(idx) => &code[idx + 1..],
        None => code,
    };
    match code.find(':') {
        Some(idx) => &code[..idx],
        None => code,
    }
}

/// Decodes the generic error shape from an error response.
///
/// The code is taken from the body's `__type` or `code` key, falling back to
/// the `x-amzn-ErrorType` header. A malformed or empty body still produces a
/// `GenericError`; classification never fails.
pub fn parse_generic_error(response: &Response<Bytes>) -> GenericError {
    let mut builder = GenericError::builder();

    if let Some(request_id) = header_str(response, REQUEST_ID_HEADER) {
        builder = builder.request_id(request_id);
    }

    let body = wire_json::parse_document(response.body()).unwrap_or(Document::Null);
    let mut code = None;
    if let Some(fields) = body.object_or_null().ok().flatten() {
        for (key, value) in fields {
            match (key.as_str(), value) {
                ("__type", Document::String(value)) | ("code", Document::String(value)) => {
                    code = Some(value);
                }
                ("message", Document::String(value)) | ("Message", Document::String(value)) => {
                    builder = builder.message(value);
                }
                _ => {}
            }
        }
    }
    if code.is_none() {
        code = header_str(response, ERROR_TYPE_HEADER).map(str::to_owned);
    }
    if let Some(code) = code {
        builder = builder.code(sanitize_error_code(&code));
    }
    builder.build()
}

fn header_str<'a>(response: &'a Response<Bytes>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

/// One link in a service's error chain: a code to match and a constructor
/// for the typed error it maps to.
pub struct ErrorUnmarshaller<E> {
    code: &'static str,
    build: fn(GenericError) -> E,
}

impl<E> ErrorUnmarshaller<E> {
    pub const fn new(code: &'static str, build: fn(GenericError) -> E) -> Self {
        ErrorUnmarshaller { code, build }
    }
}

/// Classifies an error response against a chain of unmarshallers.
///
/// The first unmarshaller whose code matches wins, so chain order is the
/// priority order. Responses with no code, an unrecognized code, or an
/// undecodable body all fall through to `unhandled`.
pub fn classify_error<E>(
    response: &Response<Bytes>,
    chain: &[ErrorUnmarshaller<E>],
    unhandled: fn(GenericError) -> E,
) -> E {
    let generic = parse_generic_error(response);
    let matched = generic
        .code()
        .and_then(|code| chain.iter().find(|unmarshaller| unmarshaller.code == code));
    match matched {
        Some(unmarshaller) => (unmarshaller.build)(generic),
        None => unhandled(generic),
    }
}

#[cfg(test)]
mod test {
    use super::{classify_error, parse_generic_error, sanitize_error_code, ErrorUnmarshaller, GenericError};
    use bytes::Bytes;

    fn response(status: u16, body: &str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .body(Bytes::copy_from_slice(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn error_codes_are_sanitized() {
        assert_eq!(
            "NotFoundException",
            sanitize_error_code("com.amazonaws.amplify#NotFoundException")
        );
        assert_eq!(
            "NotFoundException",
            sanitize_error_code("NotFoundException:http://internal/docs")
        );
        assert_eq!(
            "NotFoundException",
            sanitize_error_code("ns#NotFoundException:hint")
        );
        assert_eq!("NotFoundException", sanitize_error_code("NotFoundException"));
    }

    #[test]
    fn code_comes_from_the_body_before_the_header() {
        let response = http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "HeaderException")
            .header("x-amzn-requestid", "req-1")
            .body(Bytes::from_static(
                br#"{"__type":"ns#BodyException","message":"no such app"}"#,
            ))
            .unwrap();
        let generic = parse_generic_error(&response);
        assert_eq!(Some("BodyException"), generic.code());
        assert_eq!(Some("no such app"), generic.message());
        assert_eq!(Some("req-1"), generic.request_id());
    }

    #[test]
    fn header_supplies_the_code_when_the_body_has_none() {
        let response = http::Response::builder()
            .status(404)
            .header("x-amzn-errortype", "NotFoundException")
            .body(Bytes::from_static(br#"{"message":"gone"}"#))
            .unwrap();
        let generic = parse_generic_error(&response);
        assert_eq!(Some("NotFoundException"), generic.code());
        assert_eq!(Some("gone"), generic.message());
    }

    #[test]
    fn malformed_bodies_still_classify() {
        let generic = parse_generic_error(&response(500, "not json at all"));
        assert_eq!(None, generic.code());
        assert_eq!(None, generic.message());
    }

    #[derive(Debug, PartialEq)]
    enum TestError {
        NotFound(GenericError),
        Unhandled(GenericError),
    }

    const CHAIN: &[ErrorUnmarshaller<TestError>] =
        &[ErrorUnmarshaller::new("NotFoundException", TestError::NotFound)];

    #[test]
    fn first_matching_unmarshaller_wins() {
        let err = classify_error(
            &response(404, r#"{"__type":"NotFoundException","message":"gone"}"#),
            CHAIN,
            TestError::Unhandled,
        );
        assert!(matches!(err, TestError::NotFound(_)));
    }

    #[test]
    fn unknown_codes_fall_through_to_unhandled() {
        let err = classify_error(
            &response(400, r#"{"__type":"SomethingElse"}"#),
            CHAIN,
            TestError::Unhandled,
        );
        match err {
            TestError::Unhandled(generic) => assert_eq!(Some("SomethingElse"), generic.code()),
            other => panic!("expected unhandled, got {:?}", other),
        }
    }
}
