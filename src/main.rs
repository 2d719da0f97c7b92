//! Entry point for the flipbook viewer.
//!
//! Loads `conf/config.toml`, sets up logging and the Ctrl+C hook, then hands
//! control to the GUI.

mod app;
mod config;
mod music;

use crate::app::run_app;
use crate::config::load_config;
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

static SIGINT_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Returns `true` once per Ctrl+C press.
pub(crate) fn take_sigint_requested() -> bool {
    SIGINT_REQUESTED.swap(false, Ordering::AcqRel)
}

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        theme = %config.theme,
        music = %config.music_path,
        "Starting flipbook viewer"
    );
    install_sigint_handler();
    run_app(config).context("Failed to start the GUI")?;
    Ok(())
}

fn install_sigint_handler() {
    if let Err(err) = ctrlc::set_handler(|| {
        SIGINT_REQUESTED.store(true, Ordering::Release);
    }) {
        warn!("Failed to install Ctrl+C signal handler: {err}");
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_filter(filter_layer),
        )
        .init();
    warn!("Logging initialized; override level with config.log_level or RUST_LOG");
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    if let Err(err) = handle.modify(|filter| *filter = parsed.clone()) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
