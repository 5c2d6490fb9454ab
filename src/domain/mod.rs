pub mod configuration;
pub mod credential;
pub mod error;
pub mod lifecycle;
pub mod repository;
pub mod workflow;

pub use configuration::ApiConfig;
pub use credential::{Credential, KeyMaterial};
pub use error::AppError;
pub use lifecycle::{ContentStatus, LifecycleEvent};
pub use repository::{RepositoryIdentifier, validate_repository_url};
pub use workflow::{DispatchOutcome, RawResponse, WorkflowDescriptor};
