/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::Uri;
use thiserror::Error;

/// Client configuration, fixed at construction time.
///
/// The client never mutates this after `build()`; that immutability is what
/// makes a shared client safe to call from multiple threads.
#[derive(Debug, Clone)]
pub struct Config {
    endpoint: Uri,
    region: Option<String>,
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Base endpoint every relative request URI is joined onto.
    pub fn endpoint(&self) -> &Uri {
        &self.endpoint
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

#[derive(Debug, Default)]
pub struct Builder {
    endpoint: Option<Uri>,
    region: Option<String>,
}

impl Builder {
    pub fn endpoint(mut self, endpoint: Uri) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        Ok(Config {
            endpoint: self.endpoint.ok_or(ConfigError::MissingEndpoint)?,
            region: self.region,
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Endpoint resolution is out of scope for this client, so an explicit
    /// endpoint is mandatory.
    #[error("an endpoint must be configured")]
    MissingEndpoint,
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError};
    use http::Uri;

    #[test]
    fn endpoint_is_required() {
        assert!(matches!(
            Config::builder().build(),
            Err(ConfigError::MissingEndpoint)
        ));

        let config = Config::builder()
            .endpoint(Uri::from_static("https://amplify.us-east-1.amazonaws.com"))
            .region("us-east-1")
            .build()
            .unwrap();
        assert_eq!("amplify.us-east-1.amazonaws.com", config.endpoint().host().unwrap());
        assert_eq!(Some("us-east-1"), config.region());
    }
}
