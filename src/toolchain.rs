//! Toolchain probing, path computation, and delegated commands.
//!
//! Binary resolution is done in-process against an explicit search-path
//! string so the demangler probe can extend the path locally without
//! mutating the process environment.

use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SetupError;

pub const CARGO: &str = "cargo";

/// Resolve `name` against an explicit search-path string.
pub fn find_in_path(search_path: &OsStr, name: &str) -> Option<PathBuf> {
    env::split_paths(search_path)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

/// Resolve `name` on the process search path.
pub fn find_on_path(name: &str) -> Option<PathBuf> {
    let path = env::var_os("PATH")?;
    find_in_path(&path, name)
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Per-user cargo binary directory: `$CARGO_HOME/bin` when CARGO_HOME
/// is set and non-empty, else `<home>/.cargo/bin`. The directory is not
/// checked for existence; it is only appended to the search path.
pub fn cargo_bin_dir() -> Result<PathBuf> {
    cargo_bin_dir_from(env::var_os("CARGO_HOME"), dirs::home_dir())
}

fn cargo_bin_dir_from(cargo_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    match cargo_home {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value).join("bin")),
        _ => {
            let home = home.ok_or(SetupError::HomeDirUnavailable)?;
            Ok(home.join(".cargo").join("bin"))
        }
    }
}

/// Process search path with `extra` appended. The process environment
/// is left untouched.
pub fn extended_path(extra: &Path) -> Result<OsString> {
    let base = env::var_os("PATH").unwrap_or_default();
    let dirs = env::split_paths(&base).chain(std::iter::once(extra.to_path_buf()));
    env::join_paths(dirs).context("search path contains an invalid entry")
}

/// Resolve the demangler, first on the plain search path, then on the
/// search path extended with the cargo bin directory.
pub fn find_demangler(bin: &str, cargo_bin: &Path) -> Result<Option<PathBuf>> {
    if let Some(found) = find_on_path(bin) {
        return Ok(Some(found));
    }
    let extended = extended_path(cargo_bin)?;
    Ok(find_in_path(&extended, bin))
}

/// Run `cargo build --release` against the project in the current
/// directory, blocking until the build exits.
pub fn build_release() -> Result<()> {
    run_cargo(&["build", "--release"])
}

/// Run `cargo install` for the demangler package, with an optional
/// version pin.
pub fn install(package: &str, version: Option<&str>) -> Result<()> {
    let mut args = vec!["install", package];
    if let Some(pin) = version {
        args.push("--version");
        args.push(pin);
    }
    run_cargo(&args)
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let command = format!("{} {}", CARGO, args.join(" "));
    debug!("running: {}", command);

    let status = Command::new(CARGO)
        .args(args)
        .status()
        .with_context(|| format!("Failed to execute: {}", command))?;

    if !status.success() {
        return Err(SetupError::CommandFailed { command, status }.into());
    }

    Ok(())
}

/// Get the toolchain version by running `cargo --version`.
pub fn cargo_version() -> Option<String> {
    let output = Command::new(CARGO).arg("--version").output().ok()?;

    if !output.status.success() {
        return None;
    }

    let version_output = String::from_utf8(output.stdout).ok()?;
    extract_version(&version_output)
}

/// Extract semantic version from version output.
/// Handles formats like:
///   "cargo 1.75.0 (1d8b05cdd 2023-11-20)" -> "1.75.0"
///   "rustfilt v0.2.1" -> "0.2.1"
fn extract_version(output: &str) -> Option<String> {
    let re = regex::Regex::new(r"v?(\d+\.\d+\.\d+)").ok()?;
    re.captures(output)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}

/// Check if installed version meets requirement.
/// Parses requirements like ">=1.70.0" and compares versions.
pub fn version_meets_requirement(installed: &str, requirement: &str) -> Result<bool> {
    let requirement = requirement.trim();

    let (op, required_ver_str) = if let Some(rest) = requirement.strip_prefix(">=") {
        (">=", rest)
    } else if let Some(rest) = requirement.strip_prefix("<=") {
        ("<=", rest)
    } else if let Some(rest) = requirement.strip_prefix('>') {
        (">", rest)
    } else if let Some(rest) = requirement.strip_prefix('<') {
        ("<", rest)
    } else if let Some(rest) = requirement.strip_prefix('=') {
        ("=", rest)
    } else {
        ("=", requirement)
    };

    let installed_ver = semver::Version::parse(installed.trim())
        .with_context(|| format!("Failed to parse installed version: {}", installed))?;

    let required_ver = semver::Version::parse(required_ver_str.trim())
        .with_context(|| format!("Failed to parse required version: {}", required_ver_str))?;

    Ok(match op {
        ">=" => installed_ver >= required_ver,
        "<=" => installed_ver <= required_ver,
        ">" => installed_ver > required_ver,
        "<" => installed_ver < required_ver,
        "=" => installed_ver == required_ver,
        _ => false,
    })
}
