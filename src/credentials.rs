use std::env;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::errors::CredentialsError;

pub const ENV_ACCESS_KEY: &str = "RAPIDQ_ACCESS_KEY";
pub const ENV_ACCESS_SECRET: &str = "RAPIDQ_ACCESS_SECRET";
pub const ENV_SESSION_TOKEN: &str = "RAPIDQ_SESSION_TOKEN";

/// Authentication material attached to outbound requests.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    pub access_key: String,
    pub access_secret: String,
    /// Present only for session-scoped (STS-style) credentials.
    pub session_token: Option<String>,
    /// Instant after which the material is no longer valid. `None` = permanent.
    pub expiration: Option<DateTime<Utc>>,
}

impl Credentials {
    pub fn new(access_key: impl Into<String>, access_secret: impl Into<String>) -> Self {
        Credentials {
            access_key: access_key.into(),
            access_secret: access_secret.into(),
            session_token: None,
            expiration: None,
        }
    }

    pub fn with_session_token(
        access_key: impl Into<String>,
        access_secret: impl Into<String>,
        session_token: impl Into<String>,
    ) -> Self {
        Credentials {
            access_key: access_key.into(),
            access_secret: access_secret.into(),
            session_token: Some(session_token.into()),
            expiration: None,
        }
    }

    pub fn expires_at(mut self, expiration: DateTime<Utc>) -> Self {
        self.expiration = Some(expiration);
        self
    }

    pub fn expired(&self) -> bool {
        match self.expiration {
            Some(expiration) => expiration <= Utc::now(),
            None => false,
        }
    }
}

// Secret material must never end up in logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key", &self.access_key)
            .field("access_secret", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_deref().map(|_| "<redacted>"),
            )
            .field("expiration", &self.expiration)
            .finish()
    }
}

/// Capability to produce current authentication material on demand.
///
/// The client runtime calls this once per request, so implementations are free
/// to rotate or refresh underneath. Handles are shared across the connection
/// and RPC layers via `Arc`, hence the `Send + Sync` bound.
pub trait CredentialsProvider: Send + Sync {
    fn credentials(&self) -> Result<Credentials, CredentialsError>;
}

/// Provider backed by a fixed set of credentials.
pub struct StaticCredentialsProvider {
    credentials: Credentials,
}

impl StaticCredentialsProvider {
    pub fn new(access_key: impl Into<String>, access_secret: impl Into<String>) -> Self {
        StaticCredentialsProvider {
            credentials: Credentials::new(access_key, access_secret),
        }
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        StaticCredentialsProvider { credentials }
    }
}

impl CredentialsProvider for StaticCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, CredentialsError> {
        if self.credentials.expired() {
            return Err(CredentialsError::Expired);
        }
        Ok(self.credentials.clone())
    }
}

/// Provider that reads `RAPIDQ_ACCESS_KEY` / `RAPIDQ_ACCESS_SECRET`
/// (and optionally `RAPIDQ_SESSION_TOKEN`) on every call, so externally
/// rotated values are picked up without restarting the client.
#[derive(Default)]
pub struct EnvCredentialsProvider;

impl EnvCredentialsProvider {
    pub fn new() -> Self {
        EnvCredentialsProvider
    }
}

impl CredentialsProvider for EnvCredentialsProvider {
    fn credentials(&self) -> Result<Credentials, CredentialsError> {
        let access_key = env::var(ENV_ACCESS_KEY)
            .map_err(|_| CredentialsError::MissingEnvironment(ENV_ACCESS_KEY.to_string()))?;
        let access_secret = env::var(ENV_ACCESS_SECRET)
            .map_err(|_| CredentialsError::MissingEnvironment(ENV_ACCESS_SECRET.to_string()))?;
        let session_token = env::var(ENV_SESSION_TOKEN).ok();

        Ok(Credentials {
            access_key,
            access_secret,
            session_token,
            expiration: None,
        })
    }
}
