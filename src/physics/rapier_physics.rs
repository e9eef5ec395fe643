use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::config::GameConfig;

pub struct PhysicsSetupPlugin; // our wrapper to configure Rapier

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::default(),
            RapierDebugRenderPlugin::default().disabled(),
        ))
        .add_systems(Startup, (configure_gravity, apply_debug_render_flag));
    }
}

fn configure_gravity(mut rapier_config: Query<&mut RapierConfiguration>, cfg: Res<GameConfig>) {
    for mut rapier in &mut rapier_config {
        rapier.gravity = Vect::new(0.0, cfg.gravity.y, 0.0);
    }
}

fn apply_debug_render_flag(cfg: Res<GameConfig>, ctx: Option<ResMut<DebugRenderContext>>) {
    if let Some(mut c) = ctx {
        c.enabled = cfg.rapier_debug;
    }
}
