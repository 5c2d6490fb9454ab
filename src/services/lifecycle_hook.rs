//! Entry point for content save/delete events.

use crate::domain::{DispatchOutcome, KeyMaterial, LifecycleEvent};
use crate::ports::{ENCRYPTED_TOKEN_KEY, REPO_URL_KEY, SettingsStore, WorkflowApiFactory};
use crate::services::{KeyMaterialResolver, WorkflowTriggerService};

/// What the hook did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    /// The event does not warrant a trigger (draft, revision, autosave).
    Skipped,
    /// Workflows were listed and every dispatch was attempted.
    Triggered(Vec<DispatchOutcome>),
    /// The run aborted; the reason has already been logged.
    Failed { reason: String },
}

/// Reacts to lifecycle events by triggering every workflow.
///
/// Never returns an error: the content save that raised the event must
/// succeed whatever happens to the automation.
pub struct LifecycleHook<F: WorkflowApiFactory> {
    service: WorkflowTriggerService<F>,
    resolver: KeyMaterialResolver,
}

impl<F: WorkflowApiFactory> LifecycleHook<F> {
    pub fn new(service: WorkflowTriggerService<F>, resolver: KeyMaterialResolver) -> Self {
        Self { service, resolver }
    }

    pub fn service(&self) -> &WorkflowTriggerService<F> {
        &self.service
    }

    pub fn key_material(&self) -> KeyMaterial {
        self.resolver.resolve()
    }

    pub fn on_content_event(
        &self,
        event: &LifecycleEvent,
        settings: &impl SettingsStore,
    ) -> HookOutcome {
        if !event.should_trigger() {
            tracing::debug!(
                content_id = event.content_id,
                status = %event.status,
                is_revision = event.is_revision,
                is_autosave = event.is_autosave,
                "event does not trigger workflows"
            );
            return HookOutcome::Skipped;
        }

        let repo_url = settings.get_or_empty(REPO_URL_KEY);
        let encrypted_token = settings.get_or_empty(ENCRYPTED_TOKEN_KEY);
        let material = self.key_material();

        match self.service.trigger_all(&repo_url, &encrypted_token, &material) {
            Ok(outcomes) => {
                let failed = outcomes.iter().filter(|o| !o.succeeded).count();
                tracing::info!(
                    content_id = event.content_id,
                    status = %event.status,
                    dispatched = outcomes.len() - failed,
                    failed,
                    "triggered workflows"
                );
                HookOutcome::Triggered(outcomes)
            }
            Err(err) => {
                tracing::error!(
                    content_id = event.content_id,
                    error = %err,
                    "There was an error when attempting to trigger the GitHub Action. Please configure the plugin settings correctly and try again."
                );
                HookOutcome::Failed { reason: err.to_string() }
            }
        }
    }
}
