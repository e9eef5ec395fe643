use bevy::prelude::*;

use crate::core::events::{BallLost, EnemyStruck};

/// Running tally of enemy hits. Increments on every enemy contact and
/// collapses back to zero when the ball is lost. Mutation goes through the
/// methods below so no system can write an arbitrary value.
#[derive(Resource, Debug, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Registers the score resource and the gameplay events emitted by the
/// collision handlers.
pub struct ScorePlugin;

impl Plugin for ScorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Score>()
            .add_event::<EnemyStruck>()
            .add_event::<BallLost>();
    }
}
