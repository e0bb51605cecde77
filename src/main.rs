//! Entry point for the live resume viewer.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments.
//! - Load user configuration from `conf/config.toml`.
//! - Load the resume document.
//! - Launch the GUI application with the loaded resume and config.

mod app;
mod autoscroll;
mod cache;
mod config;
mod print;
mod resume;
mod reveal;
mod scramble;
mod text_utils;
mod theme;

use crate::app::run_app;
use crate::config::load_config;
use crate::resume::Resume;
use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let resume_path = parse_args()?;
    let config = load_config(Path::new("conf/config.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());
    info!(
        level = %config.log_level,
        reveal_mode = %config.reveal_mode,
        cache = %config.cache_dir,
        "Starting resume viewer"
    );

    let resume = Resume::load(resume_path.as_deref())?;
    info!(
        name = %resume.personal.name,
        jobs = resume.visible_experience().count(),
        "Resume ready"
    );
    run_app(resume, config).context("Failed to start the GUI")?;
    Ok(())
}

/// Optional single argument: a resume TOML file.
fn parse_args() -> Result<Option<PathBuf>> {
    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        return Ok(None);
    };
    if args.next().is_some() {
        return Err(anyhow!("Usage: live-resume [path-to-resume.toml]"));
    }

    let path = PathBuf::from(path);
    if !path.exists() {
        return Err(anyhow!("File not found: {}", path.display()));
    }
    Ok(Some(path))
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
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        warn!(%level, "Failed to update log level from config: {err}");
    } else {
        info!(%level, "Applied log level from config");
    }
}
