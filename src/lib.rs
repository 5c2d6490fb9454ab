//! publish-trigger: dispatch every GitHub Actions workflow of a repository when
//! content is published or deleted.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    ConfigureOutcome, HookOutcome, StatusReport, ValidationReport, configure, handle_event,
    render_outcomes, status, validate,
};
pub use domain::{
    AppError, ContentStatus, DispatchOutcome, KeyMaterial, LifecycleEvent, RawResponse,
    RepositoryIdentifier, WorkflowDescriptor,
};
pub use services::{KeyMaterialResolver, LifecycleHook, WorkflowTriggerService};
