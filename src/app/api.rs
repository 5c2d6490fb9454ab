//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::Path;

use crate::adapters::{HttpWorkflowApiFactory, TomlSettingsStore};
use crate::app::{
    AppContext,
    commands::{configure, event, status, validate},
};
use crate::services::{KeyMaterialResolver, LifecycleHook, WorkflowTriggerService};

pub use crate::app::commands::configure::ConfigureOutcome;
pub use crate::app::commands::status::StatusReport;
pub use crate::app::commands::validate::{ValidationReport, render_outcomes};
pub use crate::domain::{AppError, ContentStatus, DispatchOutcome, LifecycleEvent};
pub use crate::services::HookOutcome;

/// Create an `AppContext` backed by the settings file at `settings_path`.
fn create_context(
    settings_path: &Path,
) -> Result<AppContext<TomlSettingsStore, HttpWorkflowApiFactory>, AppError> {
    let settings = TomlSettingsStore::open(settings_path)?;
    let service =
        WorkflowTriggerService::new(HttpWorkflowApiFactory, settings.api_config().clone());
    let hook = LifecycleHook::new(service, KeyMaterialResolver::from_env());
    Ok(AppContext::new(settings, hook))
}

/// Encrypt and store the repository URL and access token.
pub fn configure(
    settings_path: &Path,
    repo_url: &str,
    token: &str,
) -> Result<ConfigureOutcome, AppError> {
    let mut ctx = create_context(settings_path)?;
    configure::execute(&mut ctx, repo_url, token)
}

/// Show the stored repository URL and whether a usable token is present.
pub fn status(settings_path: &Path) -> Result<StatusReport, AppError> {
    let ctx = create_context(settings_path)?;
    Ok(status::execute(&ctx))
}

/// Validate the stored configuration, dispatching every workflow unless `check_only`.
pub fn validate(settings_path: &Path, check_only: bool) -> Result<ValidationReport, AppError> {
    let ctx = create_context(settings_path)?;
    validate::execute(&ctx, check_only)
}

/// Handle a content lifecycle event.
///
/// Errors only when the settings file cannot be loaded; trigger failures are
/// logged and reported through [`HookOutcome::Failed`].
pub fn handle_event(
    settings_path: &Path,
    lifecycle_event: &LifecycleEvent,
) -> Result<HookOutcome, AppError> {
    let ctx = create_context(settings_path)?;
    Ok(event::execute(&ctx, lifecycle_event))
}
