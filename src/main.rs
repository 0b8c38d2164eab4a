use anyhow::Result;
use clap::Parser;
use scorecard::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Report {
            path,
            config,
            output,
            plain,
            verbosity,
        } => {
            init_logging(verbosity);
            let report_config = scorecard::commands::report::ReportConfig {
                path,
                config,
                output,
                plain,
            };
            scorecard::commands::report::run(report_config)
        }
        Commands::Init { force } => {
            init_logging(0);
            scorecard::commands::init::init_config(force)
        }
    }
}

// Verbosity maps onto the log facade: warnings by default, -v for info,
// -vv for debug. RUST_LOG still wins when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
