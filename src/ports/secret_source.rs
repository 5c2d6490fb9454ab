//! Secret source port used when resolving key material.

/// One place a secret may come from (an environment variable, a constant).
pub trait SecretSource {
    /// Human-readable origin, used in log fields. Never the secret itself.
    fn describe(&self) -> String;

    /// The secret, if this source defines one.
    fn lookup(&self) -> Option<String>;
}
