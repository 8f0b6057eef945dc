/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Value types shared between requests and results.
//!
//! Each `Shape` impl lists the fields in wire declaration order; that order
//! is also the emission order of the marshalled JSON.

use std::collections::BTreeMap;
use wire_json::{from_document, shape_list_or_null, Document, Field, Instant, Shape};

/// An Amplify app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct App {
    pub app_id: Option<String>,
    pub app_arn: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub repository: Option<String>,
    pub platform: Option<String>,
    pub create_time: Option<Instant>,
    pub update_time: Option<Instant>,
    pub environment_variables: Option<BTreeMap<String, String>>,
    pub default_domain: Option<String>,
    pub enable_branch_auto_build: Option<bool>,
    pub custom_rules: Option<Vec<CustomRule>>,
    pub production_branch: Option<ProductionBranch>,
    pub tags: Option<BTreeMap<String, String>>,
}

impl Shape for App {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "appId",
                |s: &Self| s.app_id.as_deref().map(Document::from),
                |s, d| {
                    s.app_id = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "appArn",
                |s: &Self| s.app_arn.as_deref().map(Document::from),
                |s, d| {
                    s.app_arn = d.string_or_null()?;
                    Ok(())
                },
            ),
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
                "createTime",
                |s: &Self| s.create_time.as_ref().map(Document::from),
                |s, d| {
                    s.create_time = d.timestamp_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "updateTime",
                |s: &Self| s.update_time.as_ref().map(Document::from),
                |s, d| {
                    s.update_time = d.timestamp_or_null()?;
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
                "defaultDomain",
                |s: &Self| s.default_domain.as_deref().map(Document::from),
                |s, d| {
                    s.default_domain = d.string_or_null()?;
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
                    s.custom_rules = shape_list_or_null(d)?;
                    Ok(())
                },
            ),
            Field::new(
                "productionBranch",
                |s: &Self| s.production_branch.as_ref().map(Document::from_shape),
                |s, d| {
                    s.production_branch = from_document(d)?;
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

/// Information about an app's production branch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionBranch {
    pub last_deploy_time: Option<Instant>,
    pub status: Option<String>,
    pub thumbnail_url: Option<String>,
    pub branch_name: Option<String>,
}

impl Shape for ProductionBranch {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "lastDeployTime",
                |s: &Self| s.last_deploy_time.as_ref().map(Document::from),
                |s, d| {
                    s.last_deploy_time = d.timestamp_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "status",
                |s: &Self| s.status.as_deref().map(Document::from),
                |s, d| {
                    s.status = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "thumbnailUrl",
                |s: &Self| s.thumbnail_url.as_deref().map(Document::from),
                |s, d| {
                    s.thumbnail_url = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "branchName",
                |s: &Self| s.branch_name.as_deref().map(Document::from),
                |s, d| {
                    s.branch_name = d.string_or_null()?;
                    Ok(())
                },
            ),
        ]
    }
}

/// A custom rewrite or redirect rule for an app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomRule {
    pub source: Option<String>,
    pub target: Option<String>,
    pub status: Option<String>,
    pub condition: Option<String>,
}

impl Shape for CustomRule {
    fn fields() -> Vec<Field<Self>> {
        vec![
            Field::new(
                "source",
                |s: &Self| s.source.as_deref().map(Document::from),
                |s, d| {
                    s.source = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "target",
                |s: &Self| s.target.as_deref().map(Document::from),
                |s, d| {
                    s.target = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "status",
                |s: &Self| s.status.as_deref().map(Document::from),
                |s, d| {
                    s.status = d.string_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "condition",
                |s: &Self| s.condition.as_deref().map(Document::from),
                |s, d| {
                    s.condition = d.string_or_null()?;
                    Ok(())
                },
            ),
        ]
    }
}

/// A branch of an Amplify app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Branch {
    pub branch_name: Option<String>,
    pub description: Option<String>,
    pub stage: Option<String>,
    pub display_name: Option<String>,
    pub enable_notification: Option<bool>,
    pub create_time: Option<Instant>,
    pub update_time: Option<Instant>,
    pub environment_variables: Option<BTreeMap<String, String>>,
    pub ttl: Option<String>,
    pub tags: Option<BTreeMap<String, String>>,
}

impl Shape for Branch {
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
                "createTime",
                |s: &Self| s.create_time.as_ref().map(Document::from),
                |s, d| {
                    s.create_time = d.timestamp_or_null()?;
                    Ok(())
                },
            ),
            Field::new(
                "updateTime",
                |s: &Self| s.update_time.as_ref().map(Document::from),
                |s, d| {
                    s.update_time = d.timestamp_or_null()?;
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

#[cfg(test)]
mod test {
    use super::App;
    use wire_json::parse_body;

    #[test]
    fn nested_objects_unmarshal_recursively() {
        let app: App = parse_body(
            br#"{
                "appId": "d123",
                "productionBranch": {"branchName": "main", "status": "DEPLOYED"},
                "customRules": [{"source": "/old", "target": "/new", "status": "301"}]
            }"#,
        )
        .unwrap();
        assert_eq!(Some("d123".to_owned()), app.app_id);
        let production = app.production_branch.unwrap();
        assert_eq!(Some("main".to_owned()), production.branch_name);
        let rules = app.custom_rules.unwrap();
        assert_eq!(1, rules.len());
        assert_eq!(Some("/old".to_owned()), rules[0].source);
    }

    #[test]
    fn null_nested_objects_read_as_absent() {
        let app: App = parse_body(br#"{"appId": "d123", "productionBranch": null}"#).unwrap();
        assert_eq!(Some("d123".to_owned()), app.app_id);
        assert_eq!(None, app.production_branch);
    }
}
