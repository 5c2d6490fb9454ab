//! Settings store port.

use crate::domain::AppError;

/// Option key holding the repository URL.
pub const REPO_URL_KEY: &str = "github_repo_url";

/// Option key holding the encrypted personal access token.
pub const ENCRYPTED_TOKEN_KEY: &str = "github_personal_access_token";

/// Key/value option storage owned by the host platform.
pub trait SettingsStore {
    /// Read an option. Absent options are `None`.
    fn get(&self, key: &str) -> Option<String>;

    /// Write an option.
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;

    /// Read an option, treating absence as an empty string.
    fn get_or_empty(&self, key: &str) -> String {
        self.get(key).unwrap_or_default()
    }
}
