//! Responsive ring radius.
//!
//! The candidate radius comes from the container extent along the layout
//! direction (width for a horizontal ring, height for a vertical one) divided
//! by [`RADIUS_DIVISOR`], then clamped to `[floor, configured]`.

use super::axis::Axis;
use super::constants::{FLOOR_RADIUS, RADIUS_DIVISOR};

#[derive(Clone, Debug)]
pub struct RadiusAdapter {
    configured: f32,
    base_floor: f32,
    floor: f32,
    effective: f32,
    observed: Option<(f32, f32, Axis)>,
}

impl RadiusAdapter {
    pub fn new(configured: f32) -> Self {
        Self::with_floor(configured, FLOOR_RADIUS)
    }

    pub fn with_floor(configured: f32, floor: f32) -> Self {
        let configured = configured.max(0.0);
        Self {
            configured,
            base_floor: floor,
            floor: floor.min(configured),
            effective: configured,
            observed: None,
        }
    }

    pub fn effective(&self) -> f32 {
        self.effective
    }

    pub fn configured(&self) -> f32 {
        self.configured
    }

    pub fn floor(&self) -> f32 {
        self.floor
    }

    /// Change the configured maximum and re-clamp against the last observation.
    /// Returns the new radius when it changed.
    pub fn set_configured(&mut self, configured: f32) -> Option<f32> {
        let configured = configured.max(0.0);
        if configured == self.configured {
            return None;
        }
        self.configured = configured;
        self.floor = self.base_floor.min(configured);
        self.recompute()
    }

    /// Record the container size. Only an actual change of width, height or
    /// axis triggers a recompute; the new radius is returned when it moved.
    pub fn observe(&mut self, width: f32, height: f32, axis: Axis) -> Option<f32> {
        let next = (width, height, axis);
        if self.observed == Some(next) {
            return None;
        }
        self.observed = Some(next);
        self.recompute()
    }

    /// Re-read the last observed size along a new axis.
    pub fn set_axis(&mut self, axis: Axis) -> Option<f32> {
        let (width, height, _) = self.observed?;
        self.observe(width, height, axis)
    }

    fn recompute(&mut self) -> Option<f32> {
        let radius = match self.observed {
            Some((w, h, axis)) => clamp_radius(
                (axis.orientation().extent)(w, h) / RADIUS_DIVISOR,
                self.floor,
                self.configured,
            ),
            None => self.configured,
        };
        if radius == self.effective {
            return None;
        }
        log::debug!("[resize] effective radius {:.1} -> {:.1}", self.effective, radius);
        self.effective = radius;
        Some(radius)
    }
}

/// Clamp a candidate into `[floor, max]`; `max` wins if the two cross.
#[inline]
pub fn clamp_radius(candidate: f32, floor: f32, max: f32) -> f32 {
    if !candidate.is_finite() {
        return floor.min(max);
    }
    candidate.max(floor).min(max)
}
