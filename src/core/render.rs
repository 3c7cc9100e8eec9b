//! Presentation model for one carousel item.
//!
//! Pure string/number computation; the DOM layer only copies these values
//! onto elements.

use super::axis::Axis;
use super::constants::TRANSITION;
use super::geometry::{Position, Visual};
use super::item::CarouselItem;

pub const EMPTY_STATE_TEXT: &str = "No items to display";

#[derive(Clone, Debug, PartialEq)]
pub struct ItemStyle {
    pub transform: String,
    pub opacity: f32,
    pub z_index: i32,
    /// `None` snaps instantly; a transition is only applied while animating.
    pub transition: Option<String>,
    pub selected: bool,
}

impl ItemStyle {
    /// Inline `style` attribute value.
    pub fn css(&self) -> String {
        format!(
            "transform: {}; opacity: {:.3}; z-index: {}; transition: {};",
            self.transform,
            self.opacity,
            self.z_index,
            self.transition.as_deref().unwrap_or("none")
        )
    }

    pub fn class(&self) -> &'static str {
        if self.selected {
            "carousel-item selected"
        } else {
            "carousel-item"
        }
    }
}

pub fn transition_css() -> String {
    format!("all {}ms ease", TRANSITION.as_millis())
}

/// Translate onto the ring, rotate to face outward, then apply depth scale.
///
/// `ring_deg` is the unfolded angle from [`ring_angle_deg`], so consecutive
/// styles of one item differ by the steps the ring actually turned.
///
/// [`ring_angle_deg`]: super::geometry::ring_angle_deg
pub fn transform_css(position: &Position, visual: &Visual, axis: Axis, ring_deg: f32) -> String {
    let t = position.translation;
    format!(
        "translate3d({:.2}px, {:.2}px, {:.2}px) {}({:.2}deg) scale({:.3})",
        t.x,
        t.y,
        t.z,
        axis.orientation().rotate_fn,
        ring_deg + 0.0,
        visual.scale
    )
}

pub fn item_style(
    position: &Position,
    visual: &Visual,
    axis: Axis,
    ring_deg: f32,
    is_selected: bool,
    is_animating: bool,
) -> ItemStyle {
    ItemStyle {
        transform: transform_css(position, visual, axis, ring_deg),
        opacity: visual.opacity,
        z_index: visual.z_index,
        transition: is_animating.then(transition_css),
        selected: is_selected,
    }
}

/// Accessible name, e.g. `Item 3: Python`. Missing titles leave the suffix empty.
pub fn aria_label(index: usize, item: &CarouselItem) -> String {
    format!("Item {}: {}", index + 1, item.title_or_empty())
}

/// Image alt text falls back to the item number.
pub fn image_alt(index: usize, item: &CarouselItem) -> String {
    match item.title.as_deref() {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => format!("Item {}", index + 1),
    }
}

pub fn container_class(axis: Axis, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        format!("carousel-container {}", axis.as_str())
    } else {
        format!("carousel-container {} {}", extra, axis.as_str())
    }
}
