use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::Enemy;
use crate::core::config::GameConfig;
use crate::core::events::EnemyStruck;
use crate::core::score::Score;
use crate::core::system::system_order::PostPhysicsAdjustSet;

pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_enemies).add_systems(
            Update,
            handle_enemy_contacts.in_set(PostPhysicsAdjustSet),
        );
    }
}

fn spawn_enemies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
) {
    for (i, def) in cfg.enemies.iter().enumerate() {
        let size = Vec3::from(def.size);
        commands.spawn((
            Name::new(format!("Enemy{i}")),
            Enemy,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: def.color.into(),
                ..default()
            })),
            Transform::from_translation(Vec3::from(def.position)),
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5, size.z * 0.5),
            Restitution {
                coefficient: cfg.bounce.restitution,
                combine_rule: CoefficientCombineRule::Average,
            },
            ActiveEvents::COLLISION_EVENTS,
            // The kinematic paddle must hit blocks too, not just the ball.
            ActiveCollisionTypes::default() | ActiveCollisionTypes::KINEMATIC_STATIC,
        ));
    }
}

/// Any contact knocks the struck block back to the origin and scores a
/// point, no matter what hit it.
pub fn handle_enemy_contacts(
    mut collisions: EventReader<CollisionEvent>,
    mut enemies: Query<&mut Transform, With<Enemy>>,
    mut score: ResMut<Score>,
    mut struck: EventWriter<EnemyStruck>,
) {
    for ev in collisions.read() {
        if let CollisionEvent::Started(a, b, _) = ev {
            for entity in [*a, *b] {
                if let Ok(mut tf) = enemies.get_mut(entity) {
                    tf.translation = Vec3::ZERO;
                    score.increment();
                    struck.write(EnemyStruck(entity));
                    debug!("enemy block struck; score now {}", score.value());
                }
            }
        }
    }
}
