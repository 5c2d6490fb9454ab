//! Store the repository URL and encrypted token.

use crate::app::AppContext;
use crate::domain::{AppError, validate_repository_url};
use crate::ports::{ENCRYPTED_TOKEN_KEY, REPO_URL_KEY, SettingsStore, WorkflowApiFactory};
use crate::services::credential_codec;

/// Result of saving settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigureOutcome {
    /// The saved URL passes strict validation.
    pub repo_url_valid: bool,
    /// A non-empty token was saved.
    pub token_saved: bool,
}

/// Execute the configure command.
///
/// The URL is saved as given even when it fails validation; `validate`
/// reports the problem later.
pub fn execute<S, F>(
    ctx: &mut AppContext<S, F>,
    repo_url: &str,
    token: &str,
) -> Result<ConfigureOutcome, AppError>
where
    S: SettingsStore,
    F: WorkflowApiFactory,
{
    let repo_url = repo_url.trim();
    let token = token.trim();

    let encrypted = credential_codec::encrypt(token, &ctx.key_material());
    ctx.settings_mut().set(REPO_URL_KEY, repo_url)?;
    ctx.settings_mut().set(ENCRYPTED_TOKEN_KEY, &encrypted)?;

    let repo_url_valid = validate_repository_url(repo_url).is_ok();
    tracing::info!(repo_url, repo_url_valid, "settings saved");

    Ok(ConfigureOutcome { repo_url_valid, token_saved: !token.is_empty() })
}
