//! Carousel orientation and the per-axis lookup table.
//!
//! Every piece of axis-dependent behavior (ring placement, the CSS rotation
//! function, the key pair, the pointer coordinate used for region clicks and
//! drags) is read from a single [`Orientation`] entry so the geometry, input
//! and renderer layers never branch on the axis themselves.

use super::config::ConfigError;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rotation orientation of the ring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Yaw-style: items laid out left to right, spinning around the vertical axis.
    #[default]
    Horizontal,
    /// Pitch-style: items laid out top to bottom, spinning around the horizontal axis.
    Vertical,
}

/// Axis-specific behavior, one entry per [`Axis`].
#[derive(Clone, Copy, Debug)]
pub struct Orientation {
    /// Ring placement for a relative angle (radians) at the given radius.
    pub place: fn(f32, f32) -> Vec3,
    /// CSS transform function carrying the item's rotation metadata.
    pub rotate_fn: &'static str,
    /// Key that steps to the previous item.
    pub prev_key: &'static str,
    /// Key that steps to the next item.
    pub next_key: &'static str,
    /// Pointer coordinate along the axis (click split, drag delta).
    pub primary: fn(Vec2) -> f32,
    /// Extent of a rectangle along the axis, from `(width, height)`.
    pub extent: fn(f32, f32) -> f32,
    /// Container modifier class.
    pub class: &'static str,
}

// Offsets are written with two decimals; anything that would print as
// "-0.00px" (trig residue such as sin(pi), or -0.0 itself) snaps to zero.
#[inline]
fn snap(v: f32) -> f32 {
    if v.abs() < 0.005 {
        0.0
    } else {
        v
    }
}

fn place_horizontal(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(snap(radius * angle.sin()), 0.0, snap(radius * angle.cos()))
}

fn place_vertical(angle: f32, radius: f32) -> Vec3 {
    Vec3::new(0.0, snap(-radius * angle.sin()), snap(radius * angle.cos()))
}

fn along_x(p: Vec2) -> f32 {
    p.x
}

fn along_y(p: Vec2) -> f32 {
    p.y
}

fn width_of(width: f32, _height: f32) -> f32 {
    width
}

fn height_of(_width: f32, height: f32) -> f32 {
    height
}

static HORIZONTAL: Orientation = Orientation {
    place: place_horizontal,
    rotate_fn: "rotateY",
    prev_key: "ArrowLeft",
    next_key: "ArrowRight",
    primary: along_x,
    extent: width_of,
    class: "horizontal",
};

static VERTICAL: Orientation = Orientation {
    place: place_vertical,
    rotate_fn: "rotateX",
    prev_key: "ArrowUp",
    next_key: "ArrowDown",
    primary: along_y,
    extent: height_of,
    class: "vertical",
};

impl Axis {
    #[inline]
    pub fn orientation(self) -> &'static Orientation {
        match self {
            Axis::Horizontal => &HORIZONTAL,
            Axis::Vertical => &VERTICAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.orientation().class
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = ConfigError;

    /// Accepts the orientation names plus the CSS rotation-axis letters
    /// (`y` spins around the vertical axis, so it lays items out horizontally).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "horizontal" | "y" => Ok(Axis::Horizontal),
            "vertical" | "x" => Ok(Axis::Vertical),
            other => Err(ConfigError::UnknownAxis(other.to_string())),
        }
    }
}
