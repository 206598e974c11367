pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod forge;
pub mod git;
pub mod logging;
pub mod paths;
pub mod pipeline;
pub mod project;
pub mod scaffold;

// Re-export commonly used types
pub use config::{Config, StepPolicy};
pub use error::SeedError;
pub use project::{Mode, ProjectSpec};
