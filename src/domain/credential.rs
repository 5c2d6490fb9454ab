//! In-memory secrets. Neither type prints its contents through `Debug`.

use std::fmt;

/// Decrypted bearer token, alive only for the duration of one trigger run.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential([REDACTED])")
    }
}

/// Encryption key and salt used to protect the stored token.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial {
    encryption_key: String,
    salt: String,
}

impl KeyMaterial {
    pub fn new(encryption_key: impl Into<String>, salt: impl Into<String>) -> Self {
        Self { encryption_key: encryption_key.into(), salt: salt.into() }
    }

    pub fn encryption_key(&self) -> &str {
        &self.encryption_key
    }

    pub fn salt(&self) -> &str {
        &self.salt
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyMaterial")
            .field("encryption_key", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_secrets() {
        let credential = Credential::new("ghp_secret");
        let material = KeyMaterial::new("key-secret", "salt-secret");

        let rendered = format!("{:?} {:?}", credential, material);
        assert!(!rendered.contains("ghp_secret"));
        assert!(!rendered.contains("key-secret"));
        assert!(!rendered.contains("salt-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
