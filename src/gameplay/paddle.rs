use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::Paddle;
use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;
use crate::interaction::pointer::{sample_pointer, PointerState};
use crate::rendering::camera::{refresh_viewport, seed_viewport, Viewport};

const PADDLE_COLOR: Color = Color::srgb(0.678, 0.847, 0.902); // lightblue

pub struct PaddlePlugin;

impl Plugin for PaddlePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_paddle.after(seed_viewport))
            .add_systems(
                Update,
                drive_paddle
                    .in_set(PrePhysicsSet)
                    .after(sample_pointer)
                    .after(refresh_viewport),
            );
    }
}

fn spawn_paddle(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    viewport: Res<Viewport>,
) {
    let size = Vec3::from(cfg.paddle.size);
    commands.spawn((
        Name::new("Paddle"),
        Paddle,
        Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: PADDLE_COLOR,
            ..default()
        })),
        Transform::from_xyz(0.0, paddle_height(viewport.height, cfg.paddle.lift), 0.0),
        RigidBody::KinematicPositionBased,
        Collider::cuboid(size.x * 0.5, size.y * 0.5, size.z * 0.5),
        Restitution {
            coefficient: cfg.bounce.restitution,
            combine_rule: CoefficientCombineRule::Average,
        },
    ));
}

fn paddle_height(viewport_height: f32, lift: f32) -> f32 {
    -viewport_height * 0.5 + lift
}

/// Kinematic target for the next physics step: slide along the bottom
/// frustum edge with the pointer and tilt with the horizontal offset.
pub fn drive_paddle(
    pointer: Res<PointerState>,
    viewport: Res<Viewport>,
    cfg: Res<GameConfig>,
    mut paddles: Query<&mut Transform, With<Paddle>>,
) {
    for mut tf in &mut paddles {
        tf.translation = Vec3::new(
            pointer.x * viewport.width * 0.5,
            paddle_height(viewport.height, cfg.paddle.lift),
            0.0,
        );
        tf.rotation = Quat::from_rotation_z(pointer.x * cfg.paddle.tilt_scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paddle_rides_above_the_bottom_edge() {
        assert_eq!(paddle_height(18.0, 1.0), -8.0);
        assert_eq!(paddle_height(10.0, 0.0), -5.0);
    }
}
