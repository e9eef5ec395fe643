use anyhow::{Context, Result};
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use ball_bouncer::core::config::{ConfigLoadReport, GameConfig, CONFIG_LAYER_PATHS};
use ball_bouncer::interaction::session::config_hot_reload::ConfigReloadSettings;
use ball_bouncer::GamePlugin;

#[derive(Parser, Debug)]
#[command(author, version, about = "Paddle bouncer: keep the ball up, knock the blocks back", long_about = None)]
struct Args {
    /// Load exactly this config file instead of the layered defaults.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let (mut cfg, report) = load_config(&args)?;
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    // Hot reload watches whatever source the config actually came from.
    let reload_settings = match &args.config {
        Some(path) => ConfigReloadSettings::watching(vec![path.clone()]),
        None => ConfigReloadSettings::default(),
    };

    App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .insert_resource(reload_settings)
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: cfg.window.title.clone(),
                    resolution: (cfg.window.width, cfg.window.height).into(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins(GamePlugin)
        .run();
    Ok(())
}

/// An explicit `--config` must parse; the layered default files are
/// best-effort and fall back to built-in values.
fn load_config(args: &Args) -> Result<(GameConfig, ConfigLoadReport)> {
    if let Some(path) = &args.config {
        let cfg = GameConfig::load_from_file(path)
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("loading config {}", path.display()))?;
        let report = ConfigLoadReport {
            layers_used: vec![path.display().to_string()],
            errors: Vec::new(),
        };
        return Ok((cfg, report));
    }
    let (cfg, layers_used, errors) = GameConfig::load_layered(CONFIG_LAYER_PATHS);
    let report = ConfigLoadReport {
        layers_used,
        errors,
    };
    Ok((cfg, report))
}
