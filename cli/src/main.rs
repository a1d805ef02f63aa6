//! watchmute CLI - mute editor watchers around a dependency install.
//!
//! ```text
//! watchmute on   -> back up .vscode/settings.json, merge overrides
//! <install>
//! watchmute off  -> copy the backup over settings.json, delete it
//! ```
//!
//! Status lines go to stdout; diagnostics go through `tracing` on stderr
//! (filter with `RUST_LOG`, default `warn`).

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use watchmute_core::{
    BackupAction, MuteOverrides, RestoreOutcome, SettingsPaths, SettingsToggle, WatchmuteConfig,
};

#[derive(Parser)]
#[command(name = "watchmute")]
#[command(about = "Mute editor file watchers and Git auto-refresh while installing dependencies")]
struct Cli {
    /// `on` applies the overrides, `off` restores the previous settings
    mode: Mode,
    /// Project root containing `.vscode/` (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Also quiet TypeScript server and ESLint task activity
    #[arg(long)]
    extras: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    On,
    Off,
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir().context("Failed to determine current directory")?,
    };
    let paths = SettingsPaths::new(root);

    match cli.mode {
        Mode::On => mute(paths, cli.extras),
        Mode::Off => restore(paths),
    }
}

fn mute(paths: SettingsPaths, force_extras: bool) -> Result<()> {
    let config = WatchmuteConfig::load(&paths.config())?.unwrap_or_default();
    let toggle = SettingsToggle::new(paths, config.overrides(force_extras));

    let outcome = toggle.mute().with_context(|| {
        format!(
            "Failed to mute settings in {}",
            toggle.paths().settings().display()
        )
    })?;
    if outcome.backup == BackupAction::KeptExisting {
        tracing::info!("Settings were already muted; original backup kept");
    }

    println!("Editor watchers & Git auto-refresh muted for install.");
    Ok(())
}

fn restore(paths: SettingsPaths) -> Result<()> {
    let toggle = SettingsToggle::new(paths, MuteOverrides::default());

    let outcome = toggle.restore().with_context(|| {
        format!(
            "Failed to restore settings from {}",
            toggle.paths().backup().display()
        )
    })?;

    match outcome {
        RestoreOutcome::Restored => println!("Editor settings restored."),
        RestoreOutcome::NoBackup => println!("No backup found; left settings as-is."),
    }
    Ok(())
}
