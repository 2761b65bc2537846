//! The bootstrap sequence and the side-effect-free status check.
//!
//! `run` drives the strictly ordered steps: toolchain check, release
//! build, cargo-bin-dir computation, demangler probe, conditional
//! install, completion message. The first failing step aborts the whole
//! run; there are no retries and no partial continuation.

use anyhow::Result;
use log::{debug, info, warn};
use std::path::PathBuf;

use crate::config::SetupConfig;
use crate::error::SetupError;
use crate::toolchain;

/// Skip flags for a bootstrap run.
#[derive(Debug, Default)]
pub struct RunOptions {
    pub skip_build: bool,
    pub skip_install: bool,
}

/// Run the full bootstrap sequence.
pub fn run(config: &SetupConfig, opts: &RunOptions) -> Result<()> {
    let cargo = toolchain::find_on_path(toolchain::CARGO).ok_or_else(|| {
        SetupError::ToolchainMissing {
            tool: config.tool.name.clone(),
        }
    })?;
    debug!("found cargo at {}", cargo.display());

    if let Some(requirement) = &config.toolchain.min_version {
        enforce_min_version(requirement)?;
    }

    if opts.skip_build {
        info!("release build skipped");
    } else {
        println!("building {}", config.tool.name);
        toolchain::build_release()?;
    }

    let cargo_bin = toolchain::cargo_bin_dir()?;
    debug!("cargo bin dir: {}", cargo_bin.display());

    match toolchain::find_demangler(&config.demangler.bin, &cargo_bin)? {
        Some(found) => debug!("found {} at {}", config.demangler.bin, found.display()),
        None if opts.skip_install => {
            info!("{} is missing, install skipped", config.demangler.bin);
        }
        None => {
            println!("didn't find {}, installing it now", config.demangler.bin);
            toolchain::install(&config.demangler.package, config.demangler.version.as_deref())?;
        }
    }

    println!(
        "all done! see {} for further instructions",
        config.tool.docs
    );
    Ok(())
}

/// A configured minimum only gates the run when the installed version
/// can be determined; an unparseable version is reported and passes.
fn enforce_min_version(requirement: &str) -> Result<()> {
    let Some(installed) = toolchain::cargo_version() else {
        warn!("could not determine cargo version, continuing");
        return Ok(());
    };

    if toolchain::version_meets_requirement(&installed, requirement)? {
        Ok(())
    } else {
        Err(SetupError::ToolchainTooOld {
            installed,
            requirement: requirement.to_string(),
        }
        .into())
    }
}

/// Probe results for the `check` subcommand. Probing has no side
/// effects: nothing is built, nothing is installed.
#[derive(Debug)]
pub struct CheckReport {
    pub cargo: Option<PathBuf>,
    pub cargo_version: Option<String>,
    pub cargo_bin_dir: PathBuf,
    pub demangler: Option<PathBuf>,
}

impl CheckReport {
    pub fn toolchain_present(&self) -> bool {
        self.cargo.is_some()
    }
}

/// Probe the toolchain and demangler without building or installing.
pub fn check(config: &SetupConfig) -> Result<CheckReport> {
    let cargo = toolchain::find_on_path(toolchain::CARGO);
    let cargo_version = cargo.as_ref().and_then(|_| toolchain::cargo_version());
    let cargo_bin_dir = toolchain::cargo_bin_dir()?;
    let demangler = toolchain::find_demangler(&config.demangler.bin, &cargo_bin_dir)?;

    Ok(CheckReport {
        cargo,
        cargo_version,
        cargo_bin_dir,
        demangler,
    })
}

/// Print a human-readable status report for `check`.
pub fn print_report(config: &SetupConfig, report: &CheckReport) {
    match (&report.cargo, &report.cargo_version) {
        (Some(path), Some(version)) => {
            println!("✅ cargo {} ({})", version, path.display());
        }
        (Some(path), None) => {
            println!("✅ cargo ({})", path.display());
        }
        (None, _) => {
            println!("❌ cargo (not found on the search path)");
        }
    }

    println!("cargo bin dir: {}", report.cargo_bin_dir.display());

    match &report.demangler {
        Some(path) => println!("✅ {} ({})", config.demangler.bin, path.display()),
        None => println!(
            "❌ {} (not found; a bootstrap run will install {})",
            config.demangler.bin, config.demangler.package
        ),
    }
}
