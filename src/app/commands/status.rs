//! Report what is currently stored.

use crate::app::AppContext;
use crate::ports::{ENCRYPTED_TOKEN_KEY, REPO_URL_KEY, SettingsStore, WorkflowApiFactory};
use crate::services::credential_codec;

/// Stored configuration as shown to the operator; the token itself is never included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub repo_url: Option<String>,
    pub token_configured: bool,
}

pub fn execute<S, F>(ctx: &AppContext<S, F>) -> StatusReport
where
    S: SettingsStore,
    F: WorkflowApiFactory,
{
    let token = credential_codec::decrypt(
        &ctx.settings().get_or_empty(ENCRYPTED_TOKEN_KEY),
        &ctx.key_material(),
    );

    StatusReport {
        repo_url: ctx.settings().get(REPO_URL_KEY).filter(|url| !url.is_empty()),
        token_configured: !token.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{encrypt_for_tests, test_context};

    #[test]
    fn empty_store_reports_nothing_configured() {
        let ctx = test_context(&[]);
        assert_eq!(execute(&ctx), StatusReport { repo_url: None, token_configured: false });
    }

    #[test]
    fn reports_url_and_decryptable_token() {
        let token = encrypt_for_tests("ghp_x");
        let ctx = test_context(&[
            (REPO_URL_KEY, "https://github.com/octo/site"),
            (ENCRYPTED_TOKEN_KEY, token.as_str()),
        ]);

        let report = execute(&ctx);

        assert_eq!(report.repo_url.as_deref(), Some("https://github.com/octo/site"));
        assert!(report.token_configured);
    }

    #[test]
    fn undecryptable_token_is_not_configured() {
        let ctx = test_context(&[(ENCRYPTED_TOKEN_KEY, "garbage")]);
        assert!(!execute(&ctx).token_configured);
    }
}
