/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Typed client for the Amplify service.
//!
//! Every request, result, and nested value type declares a
//! [`Shape`](wire_json::Shape) field table and lets the engine in `wire-json`
//! do the marshalling; each operation builds an
//! [`Operation`](wire_http::operation::Operation) via its input's
//! `make_operation`, and [`Client`] dispatches it through the blocking core
//! in `wire-client`.

pub mod client;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;

pub use client::Client;
pub use error::AmplifyError;

pub const SERVICE_NAME: &str = "amplify";
