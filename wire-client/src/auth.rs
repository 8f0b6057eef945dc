/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::fmt;
use thiserror::Error;
use wire_http::result::BoxError;

/// An access key id / secret key pair, with an optional session token.
///
/// The client resolves these once per call and attaches them to the outgoing
/// request's extensions; actually signing the request is the transport's
/// concern.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_key_id: String,
    secret_access_key: String,
    session_token: Option<String>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Credentials {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }

    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    pub fn secret_access_key(&self) -> &str {
        &self.secret_access_key
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }
}

// The secret never appears in logs, not even via Debug.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .finish()
    }
}

/// The credential provider could not produce credentials.
#[derive(Debug, Error)]
#[error("failed to resolve credentials")]
pub struct CredentialsError {
    #[source]
    source: BoxError,
}

impl CredentialsError {
    pub fn new(source: impl Into<BoxError>) -> Self {
        CredentialsError {
            source: source.into(),
        }
    }
}

/// Resolves the credentials for one call.
///
/// Implementations shared across threads must be safe for concurrent use;
/// the client invokes this on the calling thread, once per call.
pub trait ProvideCredentials {
    fn credentials(&self) -> Result<Credentials, CredentialsError>;
}

/// Static credentials act as their own provider.
impl ProvideCredentials for Credentials {
    fn credentials(&self) -> Result<Credentials, CredentialsError> {
        Ok(self.clone())
    }
}
