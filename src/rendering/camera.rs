use bevy::prelude::*;

use crate::core::config::GameConfig;
use crate::core::system::system_order::PrePhysicsSet;

/// World-space size of the camera frustum slice at the gameplay plane
/// (z = 0). Seeded from config at startup, refreshed from the live window
/// every frame afterwards.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Viewport>()
            .add_systems(Startup, (setup_camera, seed_viewport))
            .add_systems(Update, refresh_viewport.in_set(PrePhysicsSet));
    }
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: cfg.camera.fov_degrees.to_radians(),
            ..default()
        }),
        Transform::from_xyz(0.0, 0.0, cfg.camera.distance),
    ));
}

/// Seed from config so Startup spawners see real dimensions; the projection
/// aspect is not known until the first frame has run.
pub fn seed_viewport(mut viewport: ResMut<Viewport>, cfg: Res<GameConfig>) {
    let aspect = cfg.window.width / cfg.window.height.max(1.0);
    let size = frustum_size_at(
        cfg.camera.fov_degrees.to_radians(),
        aspect,
        cfg.camera.distance,
    );
    *viewport = Viewport {
        width: size.x,
        height: size.y,
    };
}

pub fn refresh_viewport(
    mut viewport: ResMut<Viewport>,
    windows: Query<&Window>,
    camera_q: Query<(&Projection, &Transform), With<Camera3d>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((projection, transform)) = camera_q.single() else {
        return;
    };
    let Projection::Perspective(persp) = projection else {
        return;
    };
    let aspect = window.width() / window.height().max(1.0);
    let size = frustum_size_at(persp.fov, aspect, transform.translation.z);
    *viewport = Viewport {
        width: size.x,
        height: size.y,
    };
}

/// Frustum cross-section (width, height) at `distance` in front of a
/// perspective camera with vertical fov `fov_y` (radians).
pub fn frustum_size_at(fov_y: f32, aspect: f32, distance: f32) -> Vec2 {
    let height = 2.0 * distance * (fov_y * 0.5).tan();
    Vec2::new(height * aspect, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frustum_height_matches_fov() {
        // 50 degree fov at distance 20: height = 2 * 20 * tan(25 deg)
        let size = frustum_size_at(50f32.to_radians(), 16.0 / 9.0, 20.0);
        assert!((size.y - 18.652).abs() < 1e-2, "height {}", size.y);
        assert!((size.x - size.y * 16.0 / 9.0).abs() < 1e-4);
    }

    #[test]
    fn frustum_scales_linearly_with_distance() {
        let near = frustum_size_at(50f32.to_radians(), 1.0, 10.0);
        let far = frustum_size_at(50f32.to_radians(), 1.0, 20.0);
        assert!((far.y / near.y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn seeded_viewport_matches_window_aspect() {
        let cfg = GameConfig::default();
        let aspect = cfg.window.width / cfg.window.height;
        let size = frustum_size_at(
            cfg.camera.fov_degrees.to_radians(),
            aspect,
            cfg.camera.distance,
        );
        assert!((size.x / size.y - aspect).abs() < 1e-4);
    }
}
