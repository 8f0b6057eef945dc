/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything except RFC 3986 unreserved characters gets percent-encoded.
const LABEL: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Substitutes `{label}` placeholders in a URI path template.
///
/// Each label's value is percent-encoded before substitution. An absent
/// value substitutes to the empty string — the path segment stays in place,
/// it is not removed.
pub fn expand(template: &str, labels: &[(&str, Option<&str>)]) -> String {
    let mut path = template.to_owned();
    for (name, value) in labels {
        let encoded = value
            .map(|value| utf8_percent_encode(value, LABEL).to_string())
            .unwrap_or_default();
        path = path.replace(&format!("{{{}}}", name), &encoded);
    }
    path
}

/// Appends percent-encoded query parameters to a path, skipping absent values.
pub fn append_query(path: String, params: &[(&str, Option<&str>)]) -> String {
    let mut uri = path;
    let mut separator = '?';
    for (name, value) in params {
        if let Some(value) = value {
            uri.push(separator);
            separator = '&';
            uri.push_str(&utf8_percent_encode(name, LABEL).to_string());
            uri.push('=');
            uri.push_str(&utf8_percent_encode(value, LABEL).to_string());
        }
    }
    uri
}
