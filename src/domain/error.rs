use std::io;

use thiserror::Error;

/// Library-wide error type for publish-trigger operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Repository URL does not name a GitHub repository.
    #[error(
        "GitHub Repository URL '{0}' is invalid. Expected https://github.com/<owner>/<repo>."
    )]
    InvalidRepositoryUrl(String),

    /// No usable token is stored (absent, or it did not decrypt).
    #[error("GitHub Personal Access Token is not configured")]
    MissingCredential,

    /// Workflow listing answered with something other than 200.
    #[error(
        "GitHub Personal Access Token is invalid (workflow listing returned {status}). Please check your settings and try again."
    )]
    CredentialRejected { status: u16 },

    /// The API could not be reached at all.
    #[error("Failed to reach the GitHub API: {0}")]
    Transport(String),

    /// Decoded body is missing the fields the caller relies on.
    #[error("Unexpected response from the GitHub API: {0}")]
    MalformedResponse(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Whether the failure means the stored settings need operator attention.
    ///
    /// Malformed listing bodies count here: a 200 without `workflows` is
    /// treated like a misconfigured repository rather than an outage.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            AppError::Configuration(_)
                | AppError::InvalidRepositoryUrl(_)
                | AppError::MissingCredential
                | AppError::CredentialRejected { .. }
                | AppError::MalformedResponse(_)
                | AppError::TomlParse(_)
        )
    }
}
