//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `region_ip_resolver` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Loading configuration from the environment / env file
//! - Reporting every failure on stdout while always exiting with status 0

use anyhow::{Context, Result};
use clap::Parser;

use region_ip_resolver::initialization::init_logger_with;
use region_ip_resolver::{run_resolution, Cli, Config, RunOptions, RunReport};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logger_with(cli.log_level.clone().into(), cli.log_format.clone()) {
        println!("region_ip_resolver: failed to initialize logger: {e}");
    }

    match run(&cli).await {
        Ok(report) => {
            println!(
                "Resolved {} of {} domain{} ({} addresses){}",
                report.resolved,
                report.total_domains,
                if report.total_domains == 1 { "" } else { "s" },
                report.addresses,
                if report.saved {
                    format!(" - saved to {}", report.output.display())
                } else {
                    " - results were not saved".to_string()
                }
            );
        }
        Err(e) => {
            log::error!("{:#}", e);
        }
    }
}

async fn run(cli: &Cli) -> Result<RunReport> {
    let config = Config::load(&cli.env_file).context("Configuration error")?;

    let options = RunOptions {
        output: cli.output.clone(),
        ..RunOptions::default()
    };
    Ok(run_resolution(&config, &options).await)
}
