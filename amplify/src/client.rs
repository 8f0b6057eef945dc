/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::error::AmplifyError;
use crate::input::{
    CreateAppInput, CreateBranchInput, DeleteAppInput, GetAppInput, GetBranchInput, ListAppsInput,
};
use crate::output::{
    CreateAppOutput, CreateBranchOutput, DeleteAppOutput, GetAppOutput, GetBranchOutput,
    ListAppsOutput,
};
use wire_client::auth::ProvideCredentials;
use wire_client::config::Config;
use wire_client::transport::Transport;
use wire_http::result::SdkError;

/// Blocking Amplify client: one method per operation.
///
/// Holds no per-call state, so a single instance can be shared across
/// threads as long as the transport and credentials provider can.
#[derive(Debug)]
pub struct Client<T, P> {
    inner: wire_client::Client<T, P>,
}

impl<T, P> Client<T, P>
where
    T: Transport,
    P: ProvideCredentials,
{
    pub fn new(transport: T, credentials_provider: P, config: Config) -> Self {
        Client {
            inner: wire_client::Client::new(transport, credentials_provider, config),
        }
    }

    pub fn create_app(
        &self,
        input: &CreateAppInput,
    ) -> Result<CreateAppOutput, SdkError<AmplifyError>> {
        self.inner.call(input.make_operation())
    }

    pub fn get_app(&self, input: &GetAppInput) -> Result<GetAppOutput, SdkError<AmplifyError>> {
        self.inner.call(input.make_operation())
    }

    pub fn delete_app(
        &self,
        input: &DeleteAppInput,
    ) -> Result<DeleteAppOutput, SdkError<AmplifyError>> {
        self.inner.call(input.make_operation())
    }

    pub fn list_apps(
        &self,
        input: &ListAppsInput,
    ) -> Result<ListAppsOutput, SdkError<AmplifyError>> {
        self.inner.call(input.make_operation())
    }

    pub fn create_branch(
        &self,
        input: &CreateBranchInput,
    ) -> Result<CreateBranchOutput, SdkError<AmplifyError>> {
        self.inner.call(input.make_operation())
    }

    pub fn get_branch(
        &self,
        input: &GetBranchInput,
    ) -> Result<GetBranchOutput, SdkError<AmplifyError>> {
        self.inner.call(input.make_operation())
    }
}
