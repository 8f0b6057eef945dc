/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Request types, one per operation, each with a `make_operation` that
//! marshals it into a dispatchable [`Operation`].
//!
//! Path parameters (`appId`, `branchName`) ride in the URI only; they never
//! appear in the marshalled body, so their owning inputs either have no
//! `Shape` table or leave them out of it.

use crate::model::CustomRule;
use crate::operation::{CreateApp, CreateBranch, DeleteApp, GetApp, GetBranch, ListApps};
use bytes::Bytes;
use http::Method;
use std::collections::BTreeMap;
use wire_http::operation::{BuildError, Metadata, Operation};
use wire_http::uri;
use wire_json::{to_vec, Document, Field, Shape};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAppInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub repository: Option<String>,
    pub platform: Option<String>,
    pub environment_variables: Option<BTreeMap<String, String>>,
    pub enable_branch_auto_build: Option<bool>,
    pub custom_rules: Option<Vec<CustomRule>>,
    pub tags: Option<BTreeMap<String, String>>,
}

impl Shape for CreateAppInput {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "name",
                |s: &Self| s.name.as_deref().map(Document::from),
                |s, d| {
                    s.name = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "description",
                |s: &Self| s.description.as_deref().map(Document::from),
                |s, d| {
                    s.description = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "repository",
                |s: &Self| s.repository.as_deref().map(Document::from),
                |s, d| {
                    s.repository = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "platform",
                |s: &Self| s.platform.as_deref().map(Document::from),
                |s, d| {
                    s.platform = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "environmentVariables",
                |s: &Self| s.environment_variables.as_ref().map(Document::from),
                |s, d| {
                    s.environment_variables = d.string_map_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "enableBranchAutoBuild",
                |s: &Self| s.enable_branch_auto_build.map(Document::from),
                |s, d| {
                    s.enable_branch_auto_build = d.boolean_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "customRules",
                |s: &Self| {
                    s.custom_rules
                        .as_ref()
                        .map(|rules| Document::Array(rules.iter().map(Document::from_shape).collect()))
                },
                |s, d| {
                    s.custom_rules = wire_json::shape_list_or_null(d)?;
                    Ok(())
                },
            ),
            Field::new(
                "tags",
                |s: &Self| s.tags.as_ref().map(Document::from),
                |s, d| {
                    s.tags = d.string_map_or_null()?;
                    Ok(())
                },
            ),
        ]
    }
}

impl CreateAppInput {
    pub fn make_operation(&self) -> Result<Operation<CreateApp>, BuildError> {
        let request = http::Request::builder()
            .method(Method::POST)
            .uri("/apps")
            .body(Bytes::from(to_vec(self)))?;
        Ok(Operation::new(request, CreateApp)
            .with_metadata(Metadata::new("CreateApp", crate::SERVICE_NAME)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAppInput {
    pub app_id: Option<String>,
}

impl GetAppInput {
    pub fn make_operation(&self) -> Result<Operation<GetApp>, BuildError> {
        let path = uri::expand("/apps/{appId}", &[("appId", self.app_id.as_deref())]);
        let request = http::Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Bytes::new())?;
        Ok(Operation::new(request, GetApp)
            .with_metadata(Metadata::new("GetApp", crate::SERVICE_NAME)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteAppInput {
    pub app_id: Option<String>,
}

impl DeleteAppInput {
    pub fn make_operation(&self) -> Result<Operation<DeleteApp>, BuildError> {
        let path = uri::expand("/apps/{appId}", &[("appId", self.app_id.as_deref())]);
        let request = http::Request::builder()
            .method(Method::DELETE)
            .uri(path)
            .body(Bytes::new())?;
        Ok(Operation::new(request, DeleteApp)
            .with_metadata(Metadata::new("DeleteApp", crate::SERVICE_NAME)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAppsInput {
    pub next_token: Option<String>,
    pub max_results: Option<i32>,
}

impl ListAppsInput {
    pub fn make_operation(&self) -> Result<Operation<ListApps>, BuildError> {
        let max_results = self.max_results.map(|value| value.to_string());
        let path = uri::append_query(
            "/apps".to_owned(),
            &[
                ("nextToken", self.next_token.as_deref()),
                ("maxResults", max_results.as_deref()),
            ],
        );
        let request = http::Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Bytes::new())?;
        Ok(Operation::new(request, ListApps)
            .with_metadata(Metadata::new("ListApps", crate::SERVICE_NAME)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBranchInput {
    /// Path parameter; never marshalled into the body.
    pub app_id: Option<String>,
    pub branch_name: Option<String>,
    pub description: Option<String>,
    pub stage: Option<String>,
    pub display_name: Option<String>,
    pub enable_notification: Option<bool>,
    pub environment_variables: Option<BTreeMap<String, String>>,
    pub ttl: Option<String>,
    pub tags: Option<BTreeMap<String, String>>,
}

impl Shape for CreateBranchInput {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "branchName",
                |s: &Self| s.branch_name.as_deref().map(Document::from),
                |s, d| {
                    s.branch_name = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "description",
                |s: &Self| s.description.as_deref().map(Document::from),
                |s, d| {
                    s.description = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "stage",
                |s: &Self| s.stage.as_deref().map(Document::from),
                |s, d| {
                    s.stage = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "displayName",
                |s: &Self| s.display_name.as_deref().map(Document::from),
                |s, d| {
                    s.display_name = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "enableNotification",
                |s: &Self| s.enable_notification.map(Document::from),
                |s, d| {
                    s.enable_notification = d.boolean_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "environmentVariables",
                |s: &Self| s.environment_variables.as_ref().map(Document::from),
                |s, d| {
                    s.environment_variables = d.string_map_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "ttl",
                |s: &Self| s.ttl.as_deref().map(Document::from),
                |s, d| {
                    s.ttl = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "tags",
                |s: &Self| s.tags.as_ref().map(Document::from),
                |s, d| {
                    s.tags = d.string_map_or_null()?;
                    Ok(())
                },
            ),
        ]
    }
}

impl CreateBranchInput {
    pub fn make_operation(&self) -> Result<Operation<CreateBranch>, BuildError> {
        let path = uri::expand(
            "/apps/{appId}/branches",
            &[("appId", self.app_id.as_deref())],
        );
        let request = http::Request::builder()
            .method(Method::POST)
            .uri(path)
            .body(Bytes::from(to_vec(self)))?;
        Ok(Operation::new(request, CreateBranch)
            .with_metadata(Metadata::new("CreateBranch", crate::SERVICE_NAME)))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBranchInput {
    pub app_id: Option<String>,
    pub branch_name: Option<String>,
}

impl GetBranchInput {
    pub fn make_operation(&self) -> Result<Operation<GetBranch>, BuildError> {
        let path = uri::expand(
            "/apps/{appId}/branches/{branchName}",
            &[
                ("appId", self.app_id.as_deref()),
                ("branchName", self.branch_name.as_deref()),
            ],
        );
        let request = http::Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Bytes::new())?;
        Ok(Operation::new(request, GetBranch)
            .with_metadata(Metadata::new("GetBranch", crate::SERVICE_NAME)))
    }
}
