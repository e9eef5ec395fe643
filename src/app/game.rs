// This file is part of Ball Bouncer.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::config::{ConfigLoadReport, GameConfig};
use crate::core::score::ScorePlugin;
use crate::core::system::system_order::{PostPhysicsAdjustSet, PrePhysicsSet};
use crate::gameplay::arena::ArenaPlugin;
use crate::gameplay::ball::BallPlugin;
use crate::gameplay::enemy::EnemyPlugin;
use crate::gameplay::paddle::PaddlePlugin;
use crate::interaction::pointer::PointerPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::hud::HudPlugin;
use crate::rendering::lighting::LightingPlugin;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PrePhysicsSet, PostPhysicsAdjustSet.after(PrePhysicsSet)),
        )
        .add_plugins((
            CameraPlugin,
            LightingPlugin,
            PhysicsSetupPlugin,
            PointerPlugin,
            ScorePlugin,
            ArenaPlugin,
            BallPlugin,
            PaddlePlugin,
            EnemyPlugin,
            HudPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ))
        .add_systems(Startup, log_config_summary);
    }
}

fn log_config_summary(cfg: Res<GameConfig>, report: Option<Res<ConfigLoadReport>>) {
    if let Some(report) = report {
        for layer in &report.layers_used {
            info!("config layer: {layer}");
        }
        for e in &report.errors {
            warn!("CONFIG issue: {e}");
        }
    }
    for warning in cfg.validate() {
        warn!("CONFIG warning: {warning}");
    }
    info!(
        "arena ready: gravity {:.1}, restitution {:.2}, {} enemy blocks",
        cfg.gravity.y,
        cfg.bounce.restitution,
        cfg.enemies.len()
    );
}
