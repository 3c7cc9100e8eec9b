use super::axis::Axis;
use super::constants::{DRAG_MIN_DISTANCE, DRAG_SENSITIVITY, FRAME_MS};
use glam::Vec2;
use std::time::Duration;

/// Navigation requested by an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIntent {
    Prev,
    Next,
    Goto(usize),
}

/// Client-space rectangle of the rendering surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }
}

// ---------------- Clicks ----------------

/// Split the surface at its midpoint along the axis: the near half steps back,
/// the far half steps forward.
pub fn region_intent(axis: Axis, rect: Rect, point: Vec2) -> NavIntent {
    let o = axis.orientation();
    let extent = (o.extent)(rect.width, rect.height);
    if extent <= 0.0 {
        return NavIntent::Next;
    }
    let along = ((o.primary)(point) - (o.primary)(rect.origin())) / extent;
    if along < 0.5 {
        NavIntent::Prev
    } else {
        NavIntent::Next
    }
}

/// An item hit wins over the region split; the two never both fire.
pub fn resolve_click(axis: Axis, rect: Rect, point: Vec2, hit_item: Option<usize>) -> NavIntent {
    match hit_item {
        Some(i) => NavIntent::Goto(i),
        None => region_intent(axis, rect, point),
    }
}

// ---------------- Keyboard ----------------

/// Arrow-key mapping; only the pair belonging to the axis is consumed.
#[inline]
pub fn key_intent(axis: Axis, key: &str) -> Option<NavIntent> {
    let o = axis.orientation();
    if key == o.prev_key {
        Some(NavIntent::Prev)
    } else if key == o.next_key {
        Some(NavIntent::Next)
    } else {
        None
    }
}

/// Keys that activate a focused item.
#[inline]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

// ---------------- Drag ----------------

#[derive(Clone, Copy, Debug)]
struct DragStart {
    origin: Vec2,
    at: Duration,
}

/// End-of-drag report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragRelease {
    /// Total movement along the axis, in pixels.
    pub displacement: f32,
    /// Average speed in pixels per 60 Hz update.
    pub velocity: f32,
}

impl DragRelease {
    /// Dragging the ring toward the start (left/up) brings the next item in.
    pub fn intent(&self) -> NavIntent {
        if self.displacement < 0.0 {
            NavIntent::Next
        } else {
            NavIntent::Prev
        }
    }
}

/// Pointer drag tracking. Timestamps are event times on any monotonic base.
#[derive(Clone, Debug)]
pub struct DragTracker {
    pub sensitivity: f32,
    pub min_distance: f32,
    start: Option<DragStart>,
}

impl Default for DragTracker {
    fn default() -> Self {
        Self {
            sensitivity: DRAG_SENSITIVITY,
            min_distance: DRAG_MIN_DISTANCE,
            start: None,
        }
    }
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, pos: Vec2, at: Duration) {
        self.start = Some(DragStart { origin: pos, at });
    }

    /// Movement since pointer-down along the axis, scaled by sensitivity.
    /// Nothing is reported until the movement clears the threshold.
    pub fn update(&mut self, pos: Vec2, axis: Axis) -> Option<f32> {
        let start = self.start?;
        let delta = (axis.orientation().primary)(pos - start.origin);
        (delta.abs() > self.min_distance).then_some(delta * self.sensitivity)
    }

    /// Finish the gesture. Sub-threshold movement is a tap and yields `None`.
    pub fn end(&mut self, pos: Vec2, at: Duration, axis: Axis) -> Option<DragRelease> {
        let start = self.start.take()?;
        let displacement = (axis.orientation().primary)(pos - start.origin);
        if displacement.abs() <= self.min_distance {
            return None;
        }
        let elapsed_ms = (at.saturating_sub(start.at).as_secs_f32() * 1000.0).max(1.0);
        let velocity = displacement / elapsed_ms * FRAME_MS;
        log::debug!("[drag] release d={:.1} v={:.2}", displacement, velocity);
        Some(DragRelease {
            displacement,
            velocity,
        })
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}
