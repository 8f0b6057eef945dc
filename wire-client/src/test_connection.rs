/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Transport doubles for testing service clients without a network.

use crate::transport::{Transport, TransportError};
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A recorded exchange: the request the test expected alongside the request
/// the client actually produced.
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<Bytes>,
    pub actual: http::Request<Bytes>,
}

impl ValidateRequest {
    /// Panics unless the actual request matches the expected one.
    ///
    /// Bodies that parse as JSON are compared structurally, so formatting
    /// differences don't fail a test; anything else is compared byte for byte.
    pub fn assert_matches(&self) {
        let (expected, actual) = (&self.expected, &self.actual);
        assert_eq!(expected.method(), actual.method(), "method mismatch");
        assert_eq!(
            expected.uri().path_and_query().map(|pq| pq.as_str()),
            actual.uri().path_and_query().map(|pq| pq.as_str()),
            "path mismatch"
        );
        for (name, value) in expected.headers() {
            match actual.headers().get(name) {
                Some(actual_value) => assert_eq!(
                    value, actual_value,
                    "header `{}` did not match",
                    name
                ),
                None => panic!("expected header `{}` was not set", name),
            }
        }
        assert_bodies_match(expected.body(), actual.body());
    }
}

fn assert_bodies_match(expected: &Bytes, actual: &Bytes) {
    let expected_json = serde_json::from_slice::<serde_json::Value>(expected);
    let actual_json = serde_json::from_slice::<serde_json::Value>(actual);
    match (expected_json, actual_json) {
        (Ok(expected), Ok(actual)) => assert_eq!(expected, actual, "body mismatch"),
        _ => assert_eq!(expected, actual, "body mismatch"),
    }
}

/// A [`Transport`] that replays a scripted sequence of exchanges.
///
/// Each call pops the next `(expected request, canned response)` pair and
/// records what the client actually sent; `assert_requests_match` then
/// validates the whole recording. Cloning shares the script and the
/// recording, so a test can hand one clone to the client and keep the other.
#[derive(Clone)]
pub struct TestConnection {
    events: Arc<Mutex<VecDeque<(http::Request<Bytes>, http::Response<Bytes>)>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

impl TestConnection {
    pub fn new(events: Vec<(http::Request<Bytes>, http::Response<Bytes>)>) -> Self {
        TestConnection {
            events: Arc::new(Mutex::new(events.into())),
            requests: Default::default(),
        }
    }

    pub fn requests_received(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn assert_requests_match(&self) {
        for request in self.requests.lock().unwrap().iter() {
            request.assert_matches();
        }
    }
}

impl Transport for TestConnection {
    fn execute(&self, actual: http::Request<Bytes>) -> Result<http::Response<Bytes>, TransportError> {
        let event = self.events.lock().unwrap().pop_front();
        match event {
            Some((expected, response)) => {
                self.requests
                    .lock()
                    .unwrap()
                    .push(ValidateRequest { expected, actual });
                Ok(response)
            }
            None => Err(TransportError::new("no more scripted responses")),
        }
    }
}

/// A [`Transport`] that captures the single request sent through it.
///
/// Returns the transport and a receiver; after the call, the receiver hands
/// the captured request back to the test. The canned response defaults to an
/// empty `200 OK`.
pub fn capture_request(
    response: Option<http::Response<Bytes>>,
) -> (CaptureRequestConnection, CaptureRequestReceiver) {
    let captured = Arc::new(Mutex::new(None));
    let connection = CaptureRequestConnection {
        captured: captured.clone(),
        response: Arc::new(Mutex::new(Some(response.unwrap_or_else(|| {
            http::Response::builder()
                .status(200)
                .body(Bytes::new())
                .unwrap()
        })))),
    };
    (connection, CaptureRequestReceiver { captured })
}

#[derive(Clone)]
pub struct CaptureRequestConnection {
    captured: Arc<Mutex<Option<http::Request<Bytes>>>>,
    response: Arc<Mutex<Option<http::Response<Bytes>>>>,
}

impl Transport for CaptureRequestConnection {
    fn execute(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, TransportError> {
        *self.captured.lock().unwrap() = Some(request);
        self.response
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| TransportError::new("response already consumed"))
    }
}

pub struct CaptureRequestReceiver {
    captured: Arc<Mutex<Option<http::Request<Bytes>>>>,
}

impl CaptureRequestReceiver {
    /// Panics if no request was sent.
    pub fn expect_request(self) -> http::Request<Bytes> {
        self.captured
            .lock()
            .unwrap()
            .take()
            .expect("no request was captured")
    }
}

#[cfg(test)]
mod test {
    use super::{capture_request, TestConnection};
    use crate::transport::Transport;
    use bytes::Bytes;

    fn request(body: &'static str) -> http::Request<Bytes> {
        http::Request::builder()
            .method("POST")
            .uri("/apps")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn bodies_are_compared_as_json() {
        let connection = TestConnection::new(vec![(
            request(r#"{ "name": "myApp" }"#),
            http::Response::builder().body(Bytes::new()).unwrap(),
        )]);
        connection.execute(request(r#"{"name":"myApp"}"#)).unwrap();
        connection.assert_requests_match();
        assert_eq!(1, connection.requests_received());
    }

    #[test]
    #[should_panic(expected = "body mismatch")]
    fn differing_bodies_fail_validation() {
        let connection = TestConnection::new(vec![(
            request(r#"{"name":"myApp"}"#),
            http::Response::builder().body(Bytes::new()).unwrap(),
        )]);
        connection.execute(request(r#"{"name":"other"}"#)).unwrap();
        connection.assert_requests_match();
    }

    #[test]
    fn exhausted_scripts_are_a_dispatch_error() {
        let connection = TestConnection::new(vec![]);
        assert!(connection.execute(request("{}")).is_err());
    }

    #[test]
    fn captured_requests_are_handed_back() {
        let (connection, receiver) = capture_request(None);
        connection.execute(request(r#"{"name":"myApp"}"#)).unwrap();
        let captured = receiver.expect_request();
        assert_eq!("/apps", captured.uri().path());
    }
}
