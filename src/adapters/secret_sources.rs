//! Secret sources backed by the process environment or fixed values.

use crate::ports::SecretSource;

/// Reads a secret from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvSecretSource {
    var: String,
}

impl EnvSecretSource {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SecretSource for EnvSecretSource {
    fn describe(&self) -> String {
        format!("env:{}", self.var)
    }

    fn lookup(&self) -> Option<String> {
        std::env::var(&self.var).ok()
    }
}

/// A secret handed over by the embedding application.
#[derive(Clone)]
pub struct StaticSecretSource {
    label: String,
    value: Option<String>,
}

impl StaticSecretSource {
    pub fn new(label: impl Into<String>, value: Option<String>) -> Self {
        Self { label: label.into(), value }
    }
}

impl std::fmt::Debug for StaticSecretSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticSecretSource")
            .field("label", &self.label)
            .field("defined", &self.value.is_some())
            .finish()
    }
}

impl SecretSource for StaticSecretSource {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn lookup(&self) -> Option<String> {
        self.value.clone()
    }
}
