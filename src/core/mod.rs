//! Platform-free carousel logic shared by the web frontend and host tests.

pub mod axis;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod data;
pub mod geometry;
pub mod input;
pub mod item;
pub mod panel;
pub mod radius;
pub mod render;
pub mod rotation;

pub use axis::{Axis, Orientation};
pub use carousel::{Carousel, ItemLayout, SelectCallback};
pub use config::{CarouselConfig, ConfigError, Pinned, ViewportPreset};
pub use geometry::{Position, Visual};
pub use input::{DragRelease, DragTracker, NavIntent, Rect};
pub use item::{CarouselItem, ItemId, SkillLevel};
pub use radius::RadiusAdapter;
pub use rotation::{CarouselEvent, NavOrigin, Phase, RotationMachine};
