use bevy::prelude::*;

/// Marker component identifying the ball entity (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// Marker for the mouse-driven kinematic paddle.
#[derive(Component)]
pub struct Paddle;

/// Marker for enemy blocks. Any contact teleports them back to the origin
/// and scores a point.
#[derive(Component)]
pub struct Enemy;

/// Marker for the invisible catch plane one viewport-height below the origin.
/// Contact resets the ball and the score.
#[derive(Component)]
pub struct FloorPlane;

/// Marker for static arena surfaces (walls, ceiling). These bounce the ball
/// but never score and never move.
#[derive(Component)]
pub struct Boundary;
