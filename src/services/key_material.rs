//! Resolution of the encryption key and salt from ordered secret sources.

use crate::adapters::{EnvSecretSource, StaticSecretSource};
use crate::domain::KeyMaterial;
use crate::ports::SecretSource;

/// Used only when no source defines an encryption key.
pub const FALLBACK_ENCRYPTION_KEY: &str = "unexpected-missing-encryption-key";
/// Used only when no source defines a salt.
pub const FALLBACK_SALT: &str = "unexpected-missing-salt";

pub const ENCRYPTION_KEY_OVERRIDE_VAR: &str = "TRIGGER_GITHUB_ACTION_ENCRYPTION_KEY";
pub const PLATFORM_ENCRYPTION_KEY_VAR: &str = "LOGGED_IN_KEY";
pub const SALT_OVERRIDE_VAR: &str = "TRIGGER_GITHUB_ACTION_SALT";
pub const PLATFORM_SALT_VAR: &str = "LOGGED_IN_SALT";

/// Where a resolved secret came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecretOrigin {
    Source(String),
    Fallback,
}

/// Ordered list of sources for one secret; the first non-empty value wins.
pub struct SecretChain {
    label: &'static str,
    sources: Vec<Box<dyn SecretSource>>,
    fallback: &'static str,
}

impl SecretChain {
    pub fn new(label: &'static str, fallback: &'static str) -> Self {
        Self { label, sources: Vec::new(), fallback }
    }

    pub fn with_source(mut self, source: impl SecretSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn resolve(&self) -> (String, SecretOrigin) {
        for source in &self.sources {
            if let Some(value) = source.lookup().filter(|v| !v.is_empty()) {
                tracing::debug!(
                    secret = self.label,
                    origin = %source.describe(),
                    "resolved secret"
                );
                return (value, SecretOrigin::Source(source.describe()));
            }
        }

        tracing::warn!(
            secret = self.label,
            "no {} is configured; using the built-in fallback, which provides NO confidentiality for the stored token",
            self.label
        );
        (self.fallback.to_string(), SecretOrigin::Fallback)
    }
}

/// Resolves the key material protecting the stored token.
pub struct KeyMaterialResolver {
    key: SecretChain,
    salt: SecretChain,
}

impl KeyMaterialResolver {
    pub fn new(key: SecretChain, salt: SecretChain) -> Self {
        Self { key, salt }
    }

    /// Override variables first, then the platform-wide secrets.
    pub fn from_env() -> Self {
        Self::new(
            SecretChain::new("encryption key", FALLBACK_ENCRYPTION_KEY)
                .with_source(EnvSecretSource::new(ENCRYPTION_KEY_OVERRIDE_VAR))
                .with_source(EnvSecretSource::new(PLATFORM_ENCRYPTION_KEY_VAR)),
            SecretChain::new("salt", FALLBACK_SALT)
                .with_source(EnvSecretSource::new(SALT_OVERRIDE_VAR))
                .with_source(EnvSecretSource::new(PLATFORM_SALT_VAR)),
        )
    }

    /// Build from values handed over by an embedding application.
    pub fn from_values(
        key_override: Option<String>,
        platform_key: Option<String>,
        salt_override: Option<String>,
        platform_salt: Option<String>,
    ) -> Self {
        Self::new(
            SecretChain::new("encryption key", FALLBACK_ENCRYPTION_KEY)
                .with_source(StaticSecretSource::new("encryption key override", key_override))
                .with_source(StaticSecretSource::new("platform encryption key", platform_key)),
            SecretChain::new("salt", FALLBACK_SALT)
                .with_source(StaticSecretSource::new("salt override", salt_override))
                .with_source(StaticSecretSource::new("platform salt", platform_salt)),
        )
    }

    pub fn resolve(&self) -> KeyMaterial {
        let (key, _) = self.key.resolve();
        let (salt, _) = self.salt.resolve();
        KeyMaterial::new(key, salt)
    }
}
