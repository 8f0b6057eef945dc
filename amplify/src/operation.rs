/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! One marker type per operation, each carrying the response-parsing logic
//! for that operation. Success bodies go through the generic shape engine;
//! error responses go through the service error chain.

use crate::error::AmplifyError;
use crate::output::{
    CreateAppOutput, CreateBranchOutput, DeleteAppOutput, GetAppOutput, GetBranchOutput,
    ListAppsOutput,
};
use bytes::Bytes;
use wire_http::response::ParseResponse;
use wire_http::result::BoxError;

macro_rules! operations {
    ($($name:ident => $output:ty,)+) => {
        $(
            #[derive(Debug, Clone, Default)]
            pub struct $name;

            impl ParseResponse for $name {
                type Output = $output;
                type Error = AmplifyError;

                fn parse_output(
                    &self,
                    response: &http::Response<Bytes>,
                ) -> Result<Self::Output, BoxError> {
                    wire_json::parse_body(response.body()).map_err(Into::into)
                }

                fn parse_error(&self, response: &http::Response<Bytes>) -> AmplifyError {
                    crate::error::classify(response)
                }
            }
        )+
    };
}

operations! {
    CreateApp => CreateAppOutput,
    GetApp => GetAppOutput,
    DeleteApp => DeleteAppOutput,
    ListApps => ListAppsOutput,
    CreateBranch => CreateBranchOutput,
    GetBranch => GetBranchOutput,
}

#[cfg(test)]
mod test {
    use super::GetApp;
    use crate::error::AmplifyError;
    use bytes::Bytes;
    use wire_http::response::ParseResponse;

    #[test]
    fn unparseable_success_bodies_are_an_error() {
        let response = http::Response::builder()
            .status(200)
            .body(Bytes::from_static(b"not json"))
            .unwrap();
        assert!(GetApp.parse_output(&response).is_err());
    }

    #[test]
    fn malformed_error_bodies_still_produce_a_typed_error() {
        let response = http::Response::builder()
            .status(500)
            .body(Bytes::from_static(b"<html>bad gateway</html>"))
            .unwrap();
        assert!(matches!(
            GetApp.parse_error(&response),
            AmplifyError::Unhandled(_)
        ));
    }
}
