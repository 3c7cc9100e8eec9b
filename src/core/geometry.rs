//! Ring layout: maps an item index to its place on the carousel circle.
//!
//! Everything here is a pure function of `(index, selected, count, axis,
//! radius)`; positions are recomputed on every layout pass and never cached.

use super::axis::Axis;
use super::constants::{
    BASE_Z_INDEX, FOCUS_SCALE, MIN_OPACITY, MIN_SCALE, SELECTED_Z_INDEX, Z_INDEX_SPAN,
};
use glam::Vec3;

/// Resolved placement of one item relative to the viewer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    /// Offset from the ring center, in CSS pixels. `+z` points at the viewer.
    pub translation: Vec3,
    /// Angle from the front of the ring, in `[0, 360)` degrees.
    pub rotation_deg: f32,
}

/// Angular spacing between neighbors, in degrees.
#[inline]
pub fn step_deg(count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        360.0 / count as f32
    }
}

/// Angle of `index` measured from the selected item, in `[0, 360)`.
pub fn relative_angle_deg(index: usize, selected: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let steps = (index % count + count - selected % count) % count;
    steps as f32 * step_deg(count)
}

/// Place `index` on a ring of `radius` so that `selected` faces the viewer.
///
/// With no items this is the identity position; callers render an empty
/// state instead of iterating.
pub fn position(index: usize, selected: usize, count: usize, axis: Axis, radius: f32) -> Position {
    if count == 0 {
        return Position::default();
    }
    let rotation_deg = relative_angle_deg(index, selected, count);
    let translation = (axis.orientation().place)(rotation_deg.to_radians(), radius);
    Position {
        translation,
        rotation_deg,
    }
}

/// Drawn angle of `index`: its fixed slot on the ring plus the accumulated
/// ring rotation. Never folded, so between two navigations every item moves by
/// exactly the steps the ring turned and CSS transitions never wrap.
///
/// Congruent (mod 360) to [`relative_angle_deg`] for the current selection.
pub fn ring_angle_deg(index: usize, count: usize, rotation_deg: f32) -> f32 {
    if count == 0 {
        return 0.0;
    }
    (index % count) as f32 * step_deg(count) + rotation_deg
}

/// Depth of a position normalized over the ring diameter: 1 at the front, 0 at the back.
pub fn depth(position: &Position, radius: f32) -> f32 {
    if radius <= 0.0 {
        return 1.0;
    }
    ((position.translation.z + radius) / (2.0 * radius)).clamp(0.0, 1.0)
}

/// Rendering hints derived from depth. Not authoritative state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visual {
    pub opacity: f32,
    pub scale: f32,
    pub z_index: i32,
}

pub fn visual(position: &Position, radius: f32, is_selected: bool) -> Visual {
    if is_selected {
        return Visual {
            opacity: 1.0,
            scale: FOCUS_SCALE,
            z_index: SELECTED_Z_INDEX,
        };
    }
    let d = depth(position, radius);
    Visual {
        opacity: MIN_OPACITY + (1.0 - MIN_OPACITY) * d,
        scale: MIN_SCALE + (1.0 - MIN_SCALE) * d,
        z_index: BASE_Z_INDEX + (Z_INDEX_SPAN * d).round() as i32,
    }
}
