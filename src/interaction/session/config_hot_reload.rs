use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

use crate::core::config::{GameConfig, CONFIG_LAYER_PATHS};
use crate::rendering::hud::ScoreHud;

#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: CONFIG_LAYER_PATHS.iter().map(PathBuf::from).collect(),
            interval_secs: 0.5,
        }
    }
}
impl ConfigReloadSettings {
    /// Watch an explicit set of files instead of the default layers
    /// (a `--config` run must keep reloading from that file, not from
    /// the layered defaults it bypassed).
    pub fn watching(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Default::default()
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl Default for ConfigReloadState {
    fn default() -> Self {
        Self {
            last_mod: HashMap::new(),
            timer: Timer::from_seconds(0.5, TimerMode::Repeating),
        }
    }
}

/// Polls the config layers for mtime changes and re-applies the merged
/// config in place. Only parameters that can change mid-session are pushed
/// to live state (window, gravity, HUD font); entity layout keeps whatever
/// it was spawned with.
pub struct ConfigHotReloadPlugin;

impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReloadSettings>()
            .init_resource::<ConfigReloadState>()
            .add_systems(Startup, baseline_layer_mtimes)
            .add_systems(Update, poll_and_reload_config);
    }
}

/// Record the current mtime of every watched layer so the first poll is a
/// baseline, not a reload. Without this the startup poll would re-merge the
/// files on disk and clobber whatever config the CLI put in the resource.
fn baseline_layer_mtimes(settings: Res<ConfigReloadSettings>, mut state: ResMut<ConfigReloadState>) {
    for path in &settings.paths {
        if let Ok(modified) = fs::metadata(path).and_then(|m| m.modified()) {
            state.last_mod.insert(path.clone(), modified);
        }
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
    mut windows: Query<&mut Window>,
    mut rapier_config: Query<&mut RapierConfiguration>,
    mut hud_fonts: Query<&mut TextFont, With<ScoreHud>>,
) {
    if (state.timer.duration().as_secs_f32() - settings.interval_secs).abs() > f32::EPSILON {
        state
            .timer
            .set_duration(std::time::Duration::from_secs_f32(
                settings.interval_secs.max(0.05),
            ));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }

    let mut dirty = false;
    for path in &settings.paths {
        if let Ok(meta) = fs::metadata(path) {
            if let Ok(mod_time) = meta.modified() {
                let entry = state.last_mod.entry(path.clone()).or_insert(UNIX_EPOCH);
                if mod_time > *entry {
                    *entry = mod_time;
                    dirty = true;
                }
            }
        }
    }
    if !dirty {
        return;
    }

    let (new_cfg, _used, errors) = GameConfig::load_layered(settings.paths.iter());
    if !errors.is_empty() {
        for e in errors {
            warn!("CONFIG HOT-RELOAD issue: {e}");
        }
    }
    if *cfg_res == new_cfg {
        return;
    }
    info!("Config hot-reload applied");
    for warning in new_cfg.validate() {
        warn!("CONFIG warning: {warning}");
    }
    *cfg_res = new_cfg.clone();

    if let Ok(mut window) = windows.single_mut() {
        if window.width() != new_cfg.window.width || window.height() != new_cfg.window.height {
            window
                .resolution
                .set(new_cfg.window.width, new_cfg.window.height);
        }
        if window.title != new_cfg.window.title {
            window.title = new_cfg.window.title.clone();
        }
    }
    for mut rapier in &mut rapier_config {
        rapier.gravity = Vect::new(0.0, new_cfg.gravity.y, 0.0);
    }
    for mut font in &mut hud_fonts {
        if font.font_size != new_cfg.hud.font_size {
            font.font_size = new_cfg.hud.font_size;
        }
    }
}
