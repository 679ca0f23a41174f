use bevy::prelude::*;

use crate::core::system::system_order::InputSet;

/// Pointer location relative to the viewport, [-1, 1] per axis, y up.
/// Holds the last known position when the cursor leaves the window.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct NormalizedPointer(pub Vec2);

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NormalizedPointer>()
            .add_systems(Update, track_pointer.in_set(InputSet));
    }
}

/// Window-space position (top-left origin, logical pixels) to normalized device-like coords.
pub fn normalize_cursor(pos: Vec2, width: f32, height: f32) -> Option<Vec2> {
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        pos.x / width * 2.0 - 1.0,
        1.0 - pos.y / height * 2.0,
    ))
}

/// Unified pointer: prefer the first active touch, else the mouse cursor.
fn track_pointer(
    windows: Query<&Window>,
    touches: Res<Touches>,
    mut pointer: ResMut<NormalizedPointer>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let pos = touches
        .iter()
        .next()
        .map(|t| t.position())
        .or_else(|| window.cursor_position());
    let Some(pos) = pos else {
        return;
    };
    if let Some(ndc) = normalize_cursor(pos, window.width(), window.height()) {
        pointer.set_if_neq(NormalizedPointer(ndc));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        let (w, h) = (800.0, 600.0);
        assert_eq!(normalize_cursor(Vec2::ZERO, w, h), Some(Vec2::new(-1.0, 1.0)));
        assert_eq!(
            normalize_cursor(Vec2::new(800.0, 600.0), w, h),
            Some(Vec2::new(1.0, -1.0))
        );
        assert_eq!(
            normalize_cursor(Vec2::new(400.0, 300.0), w, h),
            Some(Vec2::ZERO)
        );
    }

    #[test]
    fn degenerate_window_yields_none() {
        assert_eq!(normalize_cursor(Vec2::new(10.0, 10.0), 0.0, 600.0), None);
    }
}
