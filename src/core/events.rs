use bevy::prelude::*;

/// Fired when the ball (or paddle) touches an enemy block. Carries the
/// enemy entity that was struck.
#[derive(Event)]
pub struct EnemyStruck(pub Entity);

/// Fired when the ball falls past the paddle onto the catch plane.
#[derive(Event, Default)]
pub struct BallLost;
