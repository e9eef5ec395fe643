use bevy::prelude::*;

use crate::core::system::system_order::PrePhysicsSet;

/// Last sampled pointer position in normalized device coordinates:
/// (-1, -1) bottom-left, (1, 1) top-right. Keeps the previous sample while
/// the cursor is outside the window.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
}

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(Update, sample_pointer.in_set(PrePhysicsSet));
    }
}

/// Cursor positions arrive in logical pixels with a top-left origin; flip Y
/// so up is positive.
pub fn normalize_cursor(cursor: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        (cursor.x / window_size.x) * 2.0 - 1.0,
        1.0 - (cursor.y / window_size.y) * 2.0,
    )
}

pub fn sample_pointer(mut pointer: ResMut<PointerState>, windows: Query<&Window>) {
    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let size = Vec2::new(window.width(), window.height());
    if size.x <= 0.0 || size.y <= 0.0 {
        return;
    }
    let ndc = normalize_cursor(cursor, size);
    pointer.x = ndc.x;
    pointer.y = ndc.y;
}
