//! CLI command implementations.
//!
//! Each submodule handles one subcommand with its configuration and
//! execution logic:
//! - **report**: run the fixed analysis sequence and print the report
//! - **init**: initialize a new scorecard configuration file

pub mod init;
pub mod report;

pub use report::{generate_report, ReportConfig};
