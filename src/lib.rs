#![warn(missing_docs)]
//! Termux device capabilities as typed Rust calls.
//!
//! Every capability runs one `termux-*` utility through a [`CommandRunner`]
//! and returns its output, decoded into a record when the utility prints JSON.
//! Failures are returned as [`TermuxError`]; see [`diagnostics`] for the
//! report-and-continue flavour.
use anyhow::{Context, Result};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

pub mod api;
pub mod cli;
pub mod command;
pub mod config;
pub mod diagnostics;
pub mod utils;
pub use api::{Termux, TermuxError};
pub use command::{CommandError, CommandRunner, SystemCommandRunner};
pub use config::{AppConfig, Args};
pub use diagnostics::{Diagnostics, LogDiagnostics, OrReport};

/// Setup logging to stderr
/// (Tracing is a bit more involving to set up but will provide much more feature if needed)
pub fn setup_tracing(config: &AppConfig) -> Result<()> {
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let filter_layer = EnvFilter::try_new(&config.verbose).context("Initializing log filter")?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
    Ok(())
}

