use bevy::prelude::*;

pub struct LightingPlugin;

impl Plugin for LightingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_lighting);
    }
}

/// Soft ambient fill plus two point lights, one in front of the arena and
/// one behind it so the back faces of the translucent walls stay readable.
fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 100.0,
        ..default()
    });
    commands.spawn((
        Name::new("KeyLight"),
        PointLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(10.0, 10.0, 5.0),
    ));
    commands.spawn((
        Name::new("BackLight"),
        PointLight {
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-10.0, -10.0, -5.0),
    ));
}
