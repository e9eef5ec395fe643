use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::core::components::Boundary;
use crate::core::config::GameConfig;
use crate::rendering::camera::{seed_viewport, Viewport};

/// Fixed visual length of the left wall. The other surfaces stretch with
/// the viewport; this one keeps its historical hardcoded extent.
const LEFT_WALL_VISUAL_LENGTH: f32 = 60.0;

/// One static arena surface: position, inward-facing normal and the full
/// extents of its visible plane mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySurface {
    pub name: &'static str,
    pub position: Vec3,
    pub normal: Vec3,
    pub visual_size: Vec2,
}

/// Right wall, left wall and ceiling for a frustum slice of `viewport`
/// (width, height). The catch plane below the arena is owned by the ball
/// module and has no visual.
pub fn boundary_layout(viewport: Vec2) -> [BoundarySurface; 3] {
    [
        BoundarySurface {
            name: "WallRight",
            position: Vec3::new(viewport.x * 0.5, 0.0, 0.0),
            normal: -Vec3::X,
            visual_size: Vec2::new(viewport.y + 2.0, 1.0),
        },
        BoundarySurface {
            name: "WallLeft",
            position: Vec3::new(-viewport.x * 0.5, 0.0, 0.0),
            normal: Vec3::X,
            visual_size: Vec2::new(LEFT_WALL_VISUAL_LENGTH, 1.0),
        },
        BoundarySurface {
            name: "Ceiling",
            position: Vec3::new(0.0, viewport.y * 0.5, 0.0),
            normal: -Vec3::Y,
            visual_size: Vec2::new(viewport.x, 2.0),
        },
    ]
}

pub struct ArenaPlugin;

impl Plugin for ArenaPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_boundaries.after(seed_viewport));
    }
}

fn spawn_boundaries(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    cfg: Res<GameConfig>,
    viewport: Res<Viewport>,
) {
    // One shared translucent material for every surface.
    let surface_material = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.0, 0.0, 0.5),
        alpha_mode: AlphaMode::Blend,
        cull_mode: None,
        ..default()
    });
    let restitution = Restitution {
        coefficient: cfg.bounce.restitution,
        combine_rule: CoefficientCombineRule::Average,
    };
    for surface in boundary_layout(Vec2::new(viewport.width, viewport.height)) {
        commands.spawn((
            Name::new(surface.name),
            Boundary,
            Mesh3d(meshes.add(Plane3d::new(surface.normal, surface.visual_size * 0.5))),
            MeshMaterial3d(surface_material.clone()),
            Transform::from_translation(surface.position),
            RigidBody::Fixed,
            Collider::halfspace(surface.normal).expect("halfspace from unit axis"),
            restitution,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surfaces_sit_on_the_frustum_edges() {
        let layout = boundary_layout(Vec2::new(24.0, 18.0));
        let right = &layout[0];
        assert_eq!(right.position, Vec3::new(12.0, 0.0, 0.0));
        assert_eq!(right.normal, -Vec3::X);
        let left = &layout[1];
        assert_eq!(left.position, Vec3::new(-12.0, 0.0, 0.0));
        let ceiling = &layout[2];
        assert_eq!(ceiling.position, Vec3::new(0.0, 9.0, 0.0));
        assert_eq!(ceiling.normal, -Vec3::Y);
    }

    #[test]
    fn normals_face_the_arena_interior() {
        for surface in boundary_layout(Vec2::new(24.0, 18.0)) {
            let toward_origin = -surface.position;
            assert!(
                toward_origin.dot(surface.normal) > 0.0,
                "{} normal faces outward",
                surface.name
            );
        }
    }

    #[test]
    fn visual_long_axis_lies_along_the_surface() {
        // Bevy's plane builder lays half_size.x along local X and rotates the
        // mesh with the arc from +Y to the normal; the first visual_size
        // component must land on the axis the surface spans.
        for surface in boundary_layout(Vec2::new(24.0, 18.0)) {
            let long_axis = Quat::from_rotation_arc(Vec3::Y, surface.normal) * Vec3::X;
            if surface.normal.x != 0.0 {
                // side walls: vertical extent
                assert!(
                    long_axis.y.abs() > 0.999,
                    "{} long axis {long_axis} not vertical",
                    surface.name
                );
            } else {
                // ceiling: horizontal extent
                assert!(
                    long_axis.x.abs() > 0.999,
                    "{} long axis {long_axis} not horizontal",
                    surface.name
                );
            }
        }
    }

    #[test]
    fn left_wall_visual_does_not_track_the_viewport() {
        let small = boundary_layout(Vec2::new(10.0, 8.0));
        let large = boundary_layout(Vec2::new(40.0, 30.0));
        assert_eq!(small[1].visual_size.x, large[1].visual_size.x);
        assert_eq!(small[1].visual_size.x, 60.0);
        // while the right wall stretches with viewport height
        assert_eq!(small[0].visual_size.x, 10.0);
        assert_eq!(large[0].visual_size.x, 32.0);
    }
}
