use clap::Parser;
use log::debug;
use std::process::exit;

use trawl_setup::bootstrap::{self, RunOptions};
use trawl_setup::cli::{Cli, Commands};
use trawl_setup::config::SetupConfig;
use trawl_setup::error::SetupError;

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("{:#}", err);

        // Delegated command failures carry the child's exit code.
        let code = err
            .downcast_ref::<SetupError>()
            .map(SetupError::exit_code)
            .unwrap_or(1);
        exit(code);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = SetupConfig::load_or_default(&cli.config)?;
    debug!("config: {:?}", config);

    match &cli.command {
        None => bootstrap::run(&config, &RunOptions::default()),
        Some(Commands::Run {
            skip_build,
            skip_install,
        }) => bootstrap::run(
            &config,
            &RunOptions {
                skip_build: *skip_build,
                skip_install: *skip_install,
            },
        ),
        Some(Commands::Check) => {
            let report = bootstrap::check(&config)?;
            bootstrap::print_report(&config, &report);
            if !report.toolchain_present() {
                exit(1);
            }
            Ok(())
        }
    }
}
