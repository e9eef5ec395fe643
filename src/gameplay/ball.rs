use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::{Ball, FloorPlane};
use crate::core::config::GameConfig;
use crate::core::events::BallLost;
use crate::core::score::Score;
use crate::core::system::system_order::PostPhysicsAdjustSet;
use crate::rendering::camera::{seed_viewport, Viewport};

pub struct BallPlugin;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ball_and_catch_plane.after(seed_viewport))
            .add_systems(
                Update,
                handle_floor_contacts.in_set(PostPhysicsAdjustSet),
            );
    }
}

fn spawn_ball_and_catch_plane(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    viewport: Res<Viewport>,
) {
    let ball = &cfg.ball;
    let restitution = Restitution {
        coefficient: cfg.bounce.restitution,
        combine_rule: CoefficientCombineRule::Average,
    };
    commands.spawn((
        Name::new("Ball"),
        Ball,
        Mesh3d(meshes.add(Sphere::new(ball.radius).mesh().uv(32, 32))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::WHITE,
            ..default()
        })),
        Transform::from_translation(Vec3::from(ball.spawn)),
        RigidBody::Dynamic,
        Collider::ball(ball.radius),
        ColliderMassProperties::Mass(ball.mass),
        Velocity::zero(),
        restitution,
        ActiveEvents::COLLISION_EVENTS,
    ));
    // Invisible catch plane one viewport-height below the origin.
    commands.spawn((
        Name::new("CatchPlane"),
        FloorPlane,
        Transform::from_xyz(0.0, -viewport.height, 0.0),
        RigidBody::Fixed,
        Collider::halfspace(Vec3::Y).expect("halfspace from unit axis"),
        restitution,
        ActiveEvents::COLLISION_EVENTS,
    ));
}

/// A ball on the catch plane is out of play: put it back on its spawn
/// point, kill its motion and collapse the score.
pub fn handle_floor_contacts(
    mut collisions: EventReader<CollisionEvent>,
    floors: Query<(), With<FloorPlane>>,
    mut balls: Query<(&mut Transform, &mut Velocity), With<Ball>>,
    cfg: Res<GameConfig>,
    mut score: ResMut<Score>,
    mut lost: EventWriter<BallLost>,
) {
    for ev in collisions.read() {
        if let CollisionEvent::Started(a, b, _) = ev {
            let other = if floors.get(*a).is_ok() {
                *b
            } else if floors.get(*b).is_ok() {
                *a
            } else {
                continue;
            };
            if let Ok((mut tf, mut vel)) = balls.get_mut(other) {
                tf.translation = Vec3::from(cfg.ball.spawn);
                *vel = Velocity::zero();
                score.reset();
                lost.write(BallLost);
                info!("ball fell out of the arena; score reset");
            }
        }
    }
}
