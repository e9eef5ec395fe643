use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::score::Score;
use crate::core::system::system_order::PostPhysicsAdjustSet;

/// Marker component for the score readout node.
#[derive(Component)]
pub struct ScoreHud;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_hud)
            .add_systems(Update, update_score_hud.after(PostPhysicsAdjustSet));
    }
}

fn spawn_score_hud(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Name::new("ScoreHud"),
        Text::new("0"),
        TextFont {
            font_size: cfg.hud.font_size,
            ..Default::default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(cfg.hud.margin_px),
            left: Val::Px(cfg.hud.margin_px),
            ..Default::default()
        },
        ScoreHud,
    ));
}

/// Rewrites the readout only when the score actually changed.
pub fn update_score_hud(score: Res<Score>, mut text_q: Query<&mut Text, With<ScoreHud>>) {
    if !score.is_changed() {
        return;
    }
    let Some(mut text) = text_q.iter_mut().next() else {
        return;
    };
    text.0 = score.value().to_string();
}
