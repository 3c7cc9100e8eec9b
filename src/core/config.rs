//! Construction-time carousel configuration.
//!
//! The web frontend reads overrides from `data-*` attributes on the mount
//! element; parsing goes through [`CarouselConfig::from_attributes`] so it can
//! be exercised on the host without a DOM.

use super::axis::Axis;
use super::constants::{
    DEFAULT_AUTO_ROTATE_MS, DEFAULT_RADIUS, LARGE_SCREEN_MIN_WIDTH, LARGE_SCREEN_RADIUS,
    SMALL_SCREEN_RADIUS,
};
use super::item::CarouselItem;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown axis {0:?} (expected horizontal|vertical)")]
    UnknownAxis(String),
    #[error("invalid number for {key}: {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be positive, got {value}")]
    NotPositive { key: &'static str, value: f64 },
    #[error("invalid boolean for {key}: {value:?}")]
    InvalidBool { key: &'static str, value: String },
    #[error("malformed items JSON: {0}")]
    Items(#[from] serde_json::Error),
}

#[derive(Clone, Debug)]
pub struct CarouselConfig {
    /// Order defines the angular layout.
    pub items: Vec<CarouselItem>,
    /// Largest ring radius; the responsive adapter may shrink it.
    pub radius: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed_ms: u32,
    /// Clamped into range when the carousel is built.
    pub initial_index: usize,
    pub axis: Axis,
    /// Extra class for the surrounding container.
    pub class_name: String,
    /// Axis and radius set explicitly by the page; the viewport preset leaves
    /// pinned values alone.
    pub pinned: Pinned,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pinned {
    pub axis: bool,
    pub radius: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            radius: DEFAULT_RADIUS,
            auto_rotate: true,
            auto_rotate_speed_ms: DEFAULT_AUTO_ROTATE_MS,
            initial_index: 0,
            axis: Axis::Horizontal,
            class_name: String::new(),
            pinned: Pinned::default(),
        }
    }
}

impl CarouselConfig {
    pub fn with_items(items: Vec<CarouselItem>) -> Self {
        Self {
            items,
            ..Self::default()
        }
    }

    /// Build a config from attribute lookups (`radius`, `auto-rotate`,
    /// `auto-rotate-speed`, `initial-index`, `axis`, `class`).
    ///
    /// Attributes that fail to parse keep their default and are reported in
    /// the returned error list; nothing here is fatal.
    pub fn from_attributes(
        items: Vec<CarouselItem>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> (Self, Vec<ConfigError>) {
        let mut cfg = Self::with_items(items);
        let mut errors = Vec::new();

        if let Some(v) = lookup("radius") {
            match parse_positive("radius", &v) {
                Ok(r) => {
                    cfg.radius = r as f32;
                    cfg.pinned.radius = true;
                }
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup("auto-rotate") {
            match parse_bool("auto-rotate", &v) {
                Ok(b) => cfg.auto_rotate = b,
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup("auto-rotate-speed") {
            match parse_positive("auto-rotate-speed", &v) {
                Ok(ms) => cfg.auto_rotate_speed_ms = ms.round() as u32,
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup("initial-index") {
            match v.trim().parse::<i64>() {
                Ok(i) => cfg.initial_index = i.max(0) as usize,
                Err(_) => errors.push(ConfigError::InvalidNumber {
                    key: "initial-index",
                    value: v,
                }),
            }
        }
        if let Some(v) = lookup("axis") {
            match v.parse::<Axis>() {
                Ok(a) => {
                    cfg.axis = a;
                    cfg.pinned.axis = true;
                }
                Err(e) => errors.push(e),
            }
        }
        if let Some(v) = lookup("class") {
            cfg.class_name = v.trim().to_string();
        }

        (cfg, errors)
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NotPositive { key, value });
    }
    Ok(value)
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "on" | "yes" => Ok(true),
        "false" | "0" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: raw.to_string(),
        }),
    }
}

/// Axis and radius chosen from the viewport width: wide screens stack the
/// ring vertically beside the details panel, narrow ones spin it sideways.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportPreset {
    pub axis: Axis,
    pub radius: f32,
}

impl ViewportPreset {
    pub fn for_width(viewport_width: f32) -> Self {
        if viewport_width >= LARGE_SCREEN_MIN_WIDTH {
            Self {
                axis: Axis::Vertical,
                radius: LARGE_SCREEN_RADIUS,
            }
        } else {
            Self {
                axis: Axis::Horizontal,
                radius: SMALL_SCREEN_RADIUS,
            }
        }
    }
}
