/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Blocking client core shared by wire service clients.
//!
//! A [`Client`] owns a [`Transport`](transport::Transport), a credentials
//! provider, and a [`Config`](config::Config). Each call resolves
//! credentials, joins the marshalled request onto the configured endpoint,
//! executes it, and routes the response through the operation's
//! [`ParseResponse`](wire_http::response::ParseResponse) handler. The client
//! holds no per-call state, so one instance can be shared freely across
//! threads.

pub mod auth;
pub mod config;
pub mod error;
#[cfg(feature = "test-util")]
pub mod test_connection;
pub mod transport;

use crate::auth::ProvideCredentials;
use crate::config::Config;
use crate::transport::Transport;
use bytes::Bytes;
use http::Uri;
use wire_http::operation::{BuildError, Operation};
use wire_http::response::ParseResponse;
use wire_http::result::{BoxError, SdkError};

#[derive(Debug)]
pub struct Client<T, P> {
    transport: T,
    credentials_provider: P,
    config: Config,
}

impl<T, P> Client<T, P>
where
    T: Transport,
    P: ProvideCredentials,
{
    pub fn new(transport: T, credentials_provider: P, config: Config) -> Self {
        Client {
            transport,
            credentials_provider,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatches one operation and blocks until its typed result is ready.
    ///
    /// Accepting the marshalling result keeps the failure ordering stable:
    /// credentials are resolved before the marshalling outcome is examined,
    /// so a credentials failure wins when both would fail.
    pub fn call<H>(
        &self,
        operation: Result<Operation<H>, BuildError>,
    ) -> Result<H::Output, SdkError<H::Error>>
    where
        H: ParseResponse,
    {
        let credentials = self
            .credentials_provider
            .credentials()
            .map_err(|err| SdkError::CredentialsFailure(err.into()))?;
        let operation = operation.map_err(|err| SdkError::ConstructionFailure(err.into()))?;
        let (mut request, handler, metadata) = operation.into_parts();
        self.attach_endpoint(&mut request)
            .map_err(SdkError::ConstructionFailure)?;
        request.extensions_mut().insert(credentials);

        if let Some(metadata) = &metadata {
            tracing::debug!(
                operation = metadata.name(),
                service = metadata.service(),
                uri = %request.uri(),
                "dispatching request"
            );
        }

        let response = self
            .transport
            .execute(request)
            .map_err(|err| SdkError::DispatchFailure(err.into()))?;

        if response.status().is_success() {
            match handler.parse_output(&response) {
                Ok(output) => Ok(output),
                Err(err) => Err(SdkError::ResponseError { raw: response, err }),
            }
        } else {
            let err = handler.parse_error(&response);
            Err(SdkError::ServiceError { raw: response, err })
        }
    }

    /// Joins the request's relative URI onto the configured endpoint.
    ///
    /// An endpoint path becomes a prefix of the request path, so endpoints
    /// like `https://host/prefix` keep their base path.
    fn attach_endpoint(&self, request: &mut http::Request<Bytes>) -> Result<(), BoxError> {
        let endpoint = self.config.endpoint();
        let request_path = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str())
            .unwrap_or("/");
        let prefix = endpoint.path().strip_suffix('/').unwrap_or_else(|| endpoint.path());
        let path = if prefix.is_empty() {
            request_path.to_owned()
        } else {
            format!("{}{}", prefix, request_path)
        };
        let mut parts = http::uri::Parts::default();
        parts.scheme = endpoint.scheme().cloned();
        parts.authority = endpoint.authority().cloned();
        parts.path_and_query = Some(path.parse()?);
        *request.uri_mut() = Uri::from_parts(parts)?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::Client;
    use crate::auth::{Credentials, CredentialsError, ProvideCredentials};
    use crate::config::Config;
    use crate::transport::{Transport, TransportError};
    use bytes::Bytes;
    use http::Uri;
    use std::sync::Mutex;
    use wire_http::operation::Operation;
    use wire_http::response::ParseResponse;
    use wire_http::result::{BoxError, SdkError};

    struct StaticResponse {
        status: u16,
        body: &'static str,
        seen_uri: Mutex<Option<Uri>>,
    }

    impl StaticResponse {
        fn new(status: u16, body: &'static str) -> Self {
            StaticResponse {
                status,
                body,
                seen_uri: Mutex::new(None),
            }
        }
    }

    impl Transport for StaticResponse {
        fn execute(
            &self,
            request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, TransportError> {
            assert!(
                request.extensions().get::<Credentials>().is_some(),
                "credentials were not attached"
            );
            *self.seen_uri.lock().unwrap() = Some(request.uri().clone());
            Ok(http::Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))
                .unwrap())
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn execute(
            &self,
            _request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, TransportError> {
            Err(TransportError::new("connection refused"))
        }
    }

    struct NoCredentials;

    impl ProvideCredentials for NoCredentials {
        fn credentials(&self) -> Result<Credentials, CredentialsError> {
            Err(CredentialsError::new("no profile configured"))
        }
    }

    struct EchoStatus;

    impl ParseResponse for EchoStatus {
        type Output = String;
        type Error = String;

        fn parse_output(&self, response: &http::Response<Bytes>) -> Result<String, BoxError> {
            String::from_utf8(response.body().to_vec()).map_err(Into::into)
        }

        fn parse_error(&self, response: &http::Response<Bytes>) -> String {
            format!("status {}", response.status())
        }
    }

    fn operation() -> Operation<EchoStatus> {
        let request = http::Request::builder()
            .method("POST")
            .uri("/apps?maxResults=5")
            .body(Bytes::from_static(b"{}"))
            .unwrap();
        Operation::new(request, EchoStatus)
    }

    fn config() -> Config {
        Config::builder()
            .endpoint(Uri::from_static("https://amplify.us-east-1.amazonaws.com"))
            .build()
            .unwrap()
    }

    fn credentials() -> Credentials {
        Credentials::new("AKID", "secret", None)
    }

    #[test]
    fn success_responses_parse_to_output() {
        let transport = StaticResponse::new(200, r#"{"ok":true}"#);
        let client = Client::new(transport, credentials(), config());
        let output = client.call(Ok(operation())).unwrap();
        assert_eq!(r#"{"ok":true}"#, output);

        let uri = client.transport.seen_uri.lock().unwrap().clone().unwrap();
        assert_eq!(
            "https://amplify.us-east-1.amazonaws.com/apps?maxResults=5",
            uri.to_string()
        );
    }

    #[test]
    fn endpoint_base_paths_are_kept_as_a_prefix() {
        let config = Config::builder()
            .endpoint(Uri::from_static("https://example.com/prefix/"))
            .build()
            .unwrap();
        let client = Client::new(StaticResponse::new(200, "{}"), credentials(), config);
        client.call(Ok(operation())).unwrap();

        let uri = client.transport.seen_uri.lock().unwrap().clone().unwrap();
        assert_eq!(
            "https://example.com/prefix/apps?maxResults=5",
            uri.to_string()
        );
    }

    #[test]
    fn error_statuses_become_service_errors() {
        let client = Client::new(StaticResponse::new(404, "{}"), credentials(), config());
        let err = client.call(Ok(operation())).unwrap_err();
        match err {
            SdkError::ServiceError { raw, err } => {
                assert_eq!(404, raw.status());
                assert_eq!("status 404 Not Found", err);
            }
            other => panic!("expected service error, got {}", other),
        }
    }

    #[test]
    fn transport_failures_become_dispatch_errors() {
        let client = Client::new(FailingTransport, credentials(), config());
        assert!(matches!(
            client.call(Ok(operation())),
            Err(SdkError::DispatchFailure(_))
        ));
    }

    #[test]
    fn credentials_failures_win_over_construction_failures() {
        let client = Client::new(FailingTransport, NoCredentials, config());
        let bad_request = http::Request::builder().uri("\\invalid");
        let bad_operation = bad_request
            .body(Bytes::new())
            .map(|request| Operation::new(request, EchoStatus))
            .map_err(Into::into);
        assert!(matches!(
            client.call(bad_operation),
            Err(SdkError::CredentialsFailure(_))
        ));
    }
}
