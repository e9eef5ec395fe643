//! Central system ordering labels to make update sequence explicit.
//! Stages (high-level):
//! 1. PrePhysics (pointer sampling / kinematic paddle placement before Rapier)
//! 2. Rapier (handled by plugin)
//! 3. PostPhysicsAdjust (collision reactions: scoring, teleports, resets)
//! 4. Rendering (implicit)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PrePhysicsSet; // input + kinematic placement before physics simulation step

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct PostPhysicsAdjustSet; // reactions after physics
