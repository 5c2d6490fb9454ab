//! Manual trigger: validate the stored configuration by dispatching every workflow.

use crate::app::AppContext;
use crate::domain::{AppError, DispatchOutcome};
use crate::ports::{ENCRYPTED_TOKEN_KEY, REPO_URL_KEY, SettingsStore, WorkflowApiFactory};

/// Outcome of a manual validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Listing answered 200 with the stored token.
    pub credential_valid: bool,
    /// One entry per workflow, in listing order. Empty for a credential-only check.
    pub outcomes: Vec<DispatchOutcome>,
}

/// Execute the validate command.
///
/// With `check_only`, only the workflow listing is requested. Otherwise every
/// workflow is dispatched; a rejected token is reported rather than returned
/// as an error.
pub fn execute<S, F>(ctx: &AppContext<S, F>, check_only: bool) -> Result<ValidationReport, AppError>
where
    S: SettingsStore,
    F: WorkflowApiFactory,
{
    let repo_url = ctx.settings().get_or_empty(REPO_URL_KEY);
    let encrypted_token = ctx.settings().get_or_empty(ENCRYPTED_TOKEN_KEY);
    let material = ctx.key_material();

    if check_only {
        let credential_valid =
            ctx.service().check_credential(&repo_url, &encrypted_token, &material)?;
        return Ok(ValidationReport { credential_valid, outcomes: Vec::new() });
    }

    match ctx.service().trigger_all(&repo_url, &encrypted_token, &material) {
        Ok(outcomes) => Ok(ValidationReport { credential_valid: true, outcomes }),
        Err(AppError::CredentialRejected { status }) => {
            tracing::warn!(status, "workflow listing rejected the stored token");
            Ok(ValidationReport { credential_valid: false, outcomes: Vec::new() })
        }
        Err(err) => Err(err),
    }
}

/// Render outcomes as a plain-text table of name, id, status, and message.
pub fn render_outcomes(outcomes: &[DispatchOutcome]) -> String {
    const HEADERS: [&str; 4] = ["Workflow Name", "Workflow ID", "Status", "Message"];

    let rows: Vec<[String; 4]> = outcomes
        .iter()
        .map(|o| {
            [
                o.workflow.name.clone(),
                o.workflow.id.to_string(),
                o.status_label().to_string(),
                o.message.replace('\n', " "),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            if i == cells.len() - 1 {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}", cell, width = widths[i]));
            }
        }
        line
    };

    let mut table = format_row(HEADERS);
    table.push('\n');
    for row in &rows {
        let [name, id, status, message] = row;
        table.push_str(&format_row([name, id, status, message].map(String::as_str)));
        table.push('\n');
    }
    table
}
