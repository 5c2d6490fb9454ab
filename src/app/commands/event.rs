//! Lifecycle event entry point for the host platform.

use crate::app::AppContext;
use crate::domain::LifecycleEvent;
use crate::ports::{SettingsStore, WorkflowApiFactory};
use crate::services::HookOutcome;

/// Execute the event command. Failures are logged by the hook, never returned.
pub fn execute<S, F>(ctx: &AppContext<S, F>, event: &LifecycleEvent) -> HookOutcome
where
    S: SettingsStore,
    F: WorkflowApiFactory,
{
    ctx.hook().on_content_event(event, ctx.settings())
}
