//! Credential lookup.
//!
//! Credentials can come from two places: a secret store that lives outside the
//! stored configuration (the process environment by default) and the stored
//! configuration itself. A non-empty secret store value always wins.

use std::collections::HashMap;
use std::fmt;

use crate::types::AccessKeys;

pub const ACCESS_KEY_SECRET_NAME: &str = "s3_access_key";
pub const SECRET_KEY_SECRET_NAME: &str = "s3_secret_key";

pub trait SecretStore {
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads secrets from environment variables named after the upper-cased secret name,
/// e.g. `s3_access_key` is read from `S3_ACCESS_KEY`.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    pub const fn new() -> Self {
        Self
    }
}

impl SecretStore for EnvSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name.to_ascii_uppercase()).ok()
    }
}

#[derive(Clone, Default)]
pub struct StaticSecretStore {
    secrets: HashMap<String, String>,
}

impl StaticSecretStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_secret(mut self, name: &str, value: &str) -> Self {
        self.secrets.insert(name.to_string(), value.to_string());
        self
    }
}

impl SecretStore for StaticSecretStore {
    fn get(&self, name: &str) -> Option<String> {
        self.secrets.get(name).cloned()
    }
}

impl fmt::Debug for StaticSecretStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticSecretStore")
            .field("names", &self.secrets.keys().collect::<Vec<_>>())
            .finish()
    }
}

pub fn resolve_secret(primary: Option<&str>, fallback: Option<&str>) -> Option<String> {
    primary
        .filter(|value| !value.is_empty())
        .or(fallback.filter(|value| !value.is_empty()))
        .map(str::to_string)
}

pub fn resolve_access_keys(store: &dyn SecretStore, stored: &AccessKeys) -> AccessKeys {
    let access_key = store.get(ACCESS_KEY_SECRET_NAME);
    let secret_key = store.get(SECRET_KEY_SECRET_NAME);

    AccessKeys::new(
        resolve_secret(access_key.as_deref(), stored.access_key.as_deref()),
        resolve_secret(secret_key.as_deref(), stored.secret_key.as_deref()),
    )
}
