/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! HTTP payload types shared by wire service clients: the [`operation::Operation`]
//! envelope produced by marshallers, URI label/query helpers, the
//! [`response::ParseResponse`] seam, and the [`result::SdkError`] taxonomy.

pub mod operation;
pub mod response;
pub mod result;
pub mod uri;

/// Content type stamped on every marshalled request that doesn't set its own.
pub const JSON_CONTENT_TYPE: &str = "application/x-amz-json-1.1";
