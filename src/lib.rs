//! Bootstrap orchestration for the trawl unsafe-code analyzer.
//!
//! The sequence is strictly linear: verify the cargo toolchain is
//! present, build a release binary of the analyzer, make sure the
//! rustfilt demangler the analyzer post-processes output with is
//! installed, and report completion. Any failing step aborts the run
//! immediately with that step's exit code.

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod error;
pub mod toolchain;
