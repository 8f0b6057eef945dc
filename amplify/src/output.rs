/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Result types, one per operation. Every field is optional on read; wire
//! keys the tables don't list are dropped by the engine.

use crate::model::{App, Branch};
use wire_json::{from_document, shape_list_or_null, Document, Field, Shape};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateAppOutput {
    pub app: Option<App>,
}

impl Shape for CreateAppOutput {
    fn fields() -> Vec<Field<Self>> {
        vec![Field::new(
            "app",
            |s: &Self| s.app.as_ref().map(Document::from_shape),
            |s, d| {
                s.app = from_document(d)?;
                Ok(())
            },
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetAppOutput {
    pub app: Option<App>,
}

impl Shape for GetAppOutput {
    fn fields() -> Vec<Field<Self>> {
        vec![Field::new(
            "app",
            |s: &Self| s.app.as_ref().map(Document::from_shape),
            |s, d| {
                s.app = from_document(d)?;
                Ok(())
            },
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteAppOutput {
    pub app: Option<App>,
}

impl Shape for DeleteAppOutput {
    fn fields() -> Vec<Field<Self>> {
        vec![Field::new(
            "app",
            |s: &Self| s.app.as_ref().map(Document::from_shape),
            |s, d| {
                s.app = from_document(d)?;
                Ok(())
            },
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListAppsOutput {
    pub apps: Option<Vec<App>>,
    pub next_token: Option<String>,
}

impl Shape for ListAppsOutput {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "apps",
                |s: &Self| {
                    s.apps
                        .as_ref()
                        .map(|apps| Document::Array(apps.iter().map(Document::from_shape).collect()))
                },
                |s, d| {
                    s.apps = shape_list_or_null(d)?;
                    Ok(())
                },
            ),
            Field::new(
                "nextToken",
                |s: &Self| s.next_token.as_deref().map(Document::from),
                |s, d| {
                    s.next_token = d.string_or_null()?;
                    Ok(())
                },
            ),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateBranchOutput {
    pub branch: Option<Branch>,
}

impl Shape for CreateBranchOutput {
    fn fields() -> Vec<Field<Self>> {
        vec![Field::new(
            "branch",
            |s: &Self| s.branch.as_ref().map(Document::from_shape),
            |s, d| {
                s.branch = from_document(d)?;
                Ok(())
            },
        )]
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GetBranchOutput {
    pub branch: Option<Branch>,
}

impl Shape for GetBranchOutput {
    fn fields() -> Vec<Field<Self>> {
        vec![Field::new(
            "branch",
            |s: &Self| s.branch.as_ref().map(Document::from_shape),
            |s, d| {
                s.branch = from_document(d)?;
                Ok(())
            },
        )]
    }
}
