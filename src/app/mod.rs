pub mod api;
pub mod cli;
pub mod commands;
mod context;
pub mod telemetry;

pub use context::AppContext;
