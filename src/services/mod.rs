pub mod credential_codec;
pub mod key_material;
pub mod lifecycle_hook;
pub mod workflow_trigger;

pub use key_material::{KeyMaterialResolver, SecretChain, SecretOrigin};
pub use lifecycle_hook::{HookOutcome, LifecycleHook};
pub use workflow_trigger::WorkflowTriggerService;
