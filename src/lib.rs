// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod extract;
pub mod report;
pub mod tools;

// Re-export commonly used types
pub use crate::config::{ScorecardConfig, TargetSet, TestConfig, ToolConfig};
pub use crate::report::{Report, Section};
pub use crate::tools::ToolRunner;
