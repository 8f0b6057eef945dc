/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use amplify::input::{CreateAppInput, GetAppInput, GetBranchInput};
use amplify::{AmplifyError, Client};
use bytes::Bytes;
use http::Uri;
use std::collections::BTreeMap;
use wire_client::auth::Credentials;
use wire_client::config::Config;
use wire_client::test_connection::{capture_request, TestConnection};
use wire_http::result::SdkError;

fn config() -> Config {
    Config::builder()
        .endpoint(Uri::from_static("https://amplify.us-east-1.amazonaws.com"))
        .region("us-east-1")
        .build()
        .unwrap()
}

fn credentials() -> Credentials {
    Credentials::new("AKID", "secret", None)
}

#[test]
fn create_app_round_trip() {
    let connection = TestConnection::new(vec![(
        http::Request::builder()
            .method("POST")
            .uri("/apps")
            .body(Bytes::from_static(
                br#"{"name":"myApp","tags":{"env":"prod"}}"#,
            ))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"app":{"appId":"d123","name":"myApp"}}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::new(connection.clone(), credentials(), config());

    let mut tags = BTreeMap::new();
    tags.insert("env".to_string(), "prod".to_string());
    let output = client
        .create_app(&CreateAppInput {
            name: Some("myApp".into()),
            tags: Some(tags),
            ..Default::default()
        })
        .expect("create_app should succeed");

    let app = output.app.expect("app should be populated");
    assert_eq!(Some("d123".to_owned()), app.app_id);
    assert_eq!(Some("myApp".to_owned()), app.name);
    assert_eq!(None, app.description);

    connection.assert_requests_match();
}

#[test]
fn requests_carry_the_endpoint_and_content_type() {
    let (connection, receiver) = capture_request(Some(
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"{}"))
            .unwrap(),
    ));
    let client = Client::new(connection, credentials(), config());

    client
        .get_branch(&GetBranchInput {
            app_id: Some("a1".into()),
            branch_name: Some("main".into()),
        })
        .unwrap();

    let request = receiver.expect_request();
    assert_eq!(
        "https://amplify.us-east-1.amazonaws.com/apps/a1/branches/main",
        request.uri().to_string()
    );
    assert_eq!(
        "application/x-amz-json-1.1",
        request.headers().get("content-type").unwrap()
    );
}

#[test]
fn unset_path_parameters_leave_an_empty_segment() {
    let (connection, receiver) = capture_request(None);
    let client = Client::new(connection, credentials(), config());

    client
        .get_branch(&GetBranchInput {
            app_id: Some("a1".into()),
            branch_name: None,
        })
        .unwrap();

    assert_eq!("/apps/a1/branches/", receiver.expect_request().uri().path());
}

#[test]
fn specific_error_kinds_beat_the_generic_fallback() {
    let connection = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("/apps/missing")
            .body(Bytes::new())
            .unwrap(),
        http::Response::builder()
            .status(404)
            .body(Bytes::from_static(
                br#"{"__type":"com.amazonaws.amplify#NotFoundException","message":"no app named missing"}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::new(connection, credentials(), config());

    let err = client
        .get_app(&GetAppInput {
            app_id: Some("missing".into()),
        })
        .unwrap_err();

    assert!(matches!(
        err.as_service_error(),
        Some(AmplifyError::NotFound(_))
    ));
    match err {
        SdkError::ServiceError { raw, err } => {
            assert_eq!(404, raw.status());
            match err {
                AmplifyError::NotFound(meta) => {
                    assert_eq!(Some("no app named missing"), meta.message());
                }
                other => panic!("expected NotFound, got {}", other),
            }
        }
        other => panic!("expected service error, got {}", other),
    }
}

#[test]
fn unknown_response_keys_are_tolerated() {
    let connection = TestConnection::new(vec![(
        http::Request::builder()
            .method("GET")
            .uri("/apps/d123")
            .body(Bytes::new())
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(Bytes::from_static(
                br#"{"app":{"appId":"d123","futureFeature":{"nested":[1,2,3]}},"alsoNew":true}"#,
            ))
            .unwrap(),
    )]);
    let client = Client::new(connection, credentials(), config());

    let output = client
        .get_app(&GetAppInput {
            app_id: Some("d123".into()),
        })
        .unwrap();
    assert_eq!(
        Some("d123".to_owned()),
        output.app.expect("app should be populated").app_id
    );
}

#[test]
fn unrecognized_error_codes_surface_as_unhandled() {
    let connection = TestConnection::new(vec![(
        http::Request::builder()
            .method("DELETE")
            .uri("/apps/d123")
            .body(Bytes::new())
            .unwrap(),
        http::Response::builder()
            .status(500)
            .header("x-amzn-requestid", "req-9")
            .body(Bytes::from_static(br#"{"__type":"BrandNewException"}"#))
            .unwrap(),
    )]);
    let client = Client::new(connection, credentials(), config());

    let err = client
        .delete_app(&amplify::input::DeleteAppInput {
            app_id: Some("d123".into()),
        })
        .unwrap_err();

    match err.into_service_error() {
        Some(AmplifyError::Unhandled(meta)) => {
            assert_eq!(Some("BrandNewException"), meta.code());
            assert_eq!(Some("req-9"), meta.request_id());
        }
        other => panic!("expected Unhandled, got {:?}", other),
    }
}
