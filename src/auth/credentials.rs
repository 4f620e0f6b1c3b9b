//! Credential management for bitFlyer API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully. The backing
    /// storage is zeroized when the credentials are dropped.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or environment variables.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

impl<P: CredentialsProvider + ?Sized> CredentialsProvider for Arc<P> {
    fn get_credentials(&self) -> &Credentials {
        (**self).get_credentials()
    }
}

/// Default environment variable holding the API key.
pub const ENV_API_KEY: &str = "BITFLYER_API_KEY";
/// Default environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "BITFLYER_API_SECRET";

/// Credentials read once from environment variables.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Read [`ENV_API_KEY`] and [`ENV_API_SECRET`].
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(ENV_API_KEY, ENV_API_SECRET)
    }

    /// Read credentials from custom variable names.
    ///
    /// Returns `None` when either variable is unset or empty.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let read = |var: &str| std::env::var(var).ok().filter(|v| !v.is_empty());
        let credentials = Credentials::new(read(key_var)?, read(secret_var)?);
        Some(Self { credentials })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
