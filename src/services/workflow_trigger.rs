//! Decrypt, validate, list, and dispatch: one trigger run.

use crate::domain::{
    ApiConfig, AppError, Credential, DispatchOutcome, KeyMaterial, RepositoryIdentifier,
};
use crate::ports::{WorkflowApi, WorkflowApiFactory};
use crate::services::credential_codec;

/// Orchestrates trigger runs against a [`WorkflowApiFactory`].
///
/// A run moves through `decrypting -> validating -> listing -> dispatching
/// -> done`. It may fail while validating or listing; once dispatching starts
/// every workflow is attempted and each result is recorded.
pub struct WorkflowTriggerService<F: WorkflowApiFactory> {
    factory: F,
    config: ApiConfig,
}

impl<F: WorkflowApiFactory> WorkflowTriggerService<F> {
    pub fn new(factory: F, config: ApiConfig) -> Self {
        Self { factory, config }
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Dispatch every workflow of `repo_url`, returning outcomes in listing order.
    pub fn trigger_all(
        &self,
        repo_url: &str,
        encrypted_token: &str,
        material: &KeyMaterial,
    ) -> Result<Vec<DispatchOutcome>, AppError> {
        let api = self.connect(repo_url, encrypted_token, material)?;

        tracing::debug!(stage = "listing", repo_url, "trigger run");
        let dispatched = api.dispatch_all_workflows()?;

        let outcomes: Vec<DispatchOutcome> = dispatched
            .into_iter()
            .map(|(workflow, response)| {
                let outcome = DispatchOutcome::from_response(workflow, response);
                if outcome.succeeded {
                    tracing::info!(
                        workflow_id = outcome.workflow.id,
                        workflow = %outcome.workflow.name,
                        "workflow dispatched"
                    );
                } else {
                    tracing::warn!(
                        workflow_id = outcome.workflow.id,
                        workflow = %outcome.workflow.name,
                        status = outcome.status_code,
                        message = %outcome.message,
                        "workflow dispatch failed"
                    );
                }
                outcome
            })
            .collect();

        tracing::debug!(stage = "done", dispatched = outcomes.len(), "trigger run");
        Ok(outcomes)
    }

    /// Whether the stored token can list workflows (listing answers 200).
    pub fn check_credential(
        &self,
        repo_url: &str,
        encrypted_token: &str,
        material: &KeyMaterial,
    ) -> Result<bool, AppError> {
        let api = self.connect(repo_url, encrypted_token, material)?;
        let listing = api.list_workflows();
        if listing.is_transport_failure() {
            return Err(AppError::Transport(listing.body));
        }
        Ok(listing.status == 200)
    }

    fn connect(
        &self,
        repo_url: &str,
        encrypted_token: &str,
        material: &KeyMaterial,
    ) -> Result<Box<dyn WorkflowApi>, AppError> {
        tracing::debug!(stage = "decrypting", "trigger run");
        let credential = Credential::new(credential_codec::decrypt(encrypted_token, material));

        tracing::debug!(stage = "validating", repo_url, "trigger run");
        let repository = RepositoryIdentifier::parse(repo_url)?;
        if credential.is_empty() {
            return Err(AppError::MissingCredential);
        }

        tracing::debug!(%repository, "connecting to workflow API");
        self.factory.connect(repo_url, credential, &self.config)
    }
}
