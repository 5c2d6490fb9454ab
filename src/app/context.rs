use crate::domain::KeyMaterial;
use crate::ports::{SettingsStore, WorkflowApiFactory};
use crate::services::{LifecycleHook, WorkflowTriggerService};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SettingsStore, F: WorkflowApiFactory> {
    settings: S,
    hook: LifecycleHook<F>,
}

impl<S: SettingsStore, F: WorkflowApiFactory> AppContext<S, F> {
    /// Create a new application context.
    pub fn new(settings: S, hook: LifecycleHook<F>) -> Self {
        Self { settings, hook }
    }

    /// Get a reference to the settings store.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Get a mutable reference to the settings store.
    pub fn settings_mut(&mut self) -> &mut S {
        &mut self.settings
    }

    pub fn hook(&self) -> &LifecycleHook<F> {
        &self.hook
    }

    pub fn service(&self) -> &WorkflowTriggerService<F> {
        self.hook.service()
    }

    /// Resolve key material for this invocation.
    pub fn key_material(&self) -> KeyMaterial {
        self.hook.key_material()
    }
}
