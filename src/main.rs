use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use crate_version::cli::Cli;
use crate_version::config::LookupConfig;
use crate_version::report;
use crate_version::version::{CrateInfo, LookupError, lookup};
use crate_version::version::registries::CratesIoRegistry;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // usage errors exit with 1, --help and --version with 0
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    crate_version::log::init(cli.verbose)?;

    let config = LookupConfig::resolve(cli.registry);
    debug!("Using registry {}", config.registry_url);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(fetch_latest(&config, &cli.crate_name));

    let info = match result {
        Ok(info) => info,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    if cli.json {
        println!("{}", report::render_json(&info)?);
    } else {
        println!("{}", report::render_text(&info));
    }

    Ok(ExitCode::SUCCESS)
}

async fn fetch_latest(config: &LookupConfig, crate_name: &str) -> Result<CrateInfo, LookupError> {
    let registry = CratesIoRegistry::new(config)?;
    lookup(&registry, crate_name).await
}
