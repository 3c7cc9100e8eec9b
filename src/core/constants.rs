use std::time::Duration;

// Shared carousel tuning constants used by the core and the web frontend.

// Timing
pub const TRANSITION: Duration = Duration::from_millis(500); // animation lock window
pub const AUTO_ROTATE_QUIET: Duration = Duration::from_millis(2000); // yield to manual input
pub const DEFAULT_AUTO_ROTATE_MS: u32 = 4000;

// Ring layout
pub const DEFAULT_RADIUS: f32 = 250.0;
pub const FLOOR_RADIUS: f32 = 110.0; // smallest ring on tiny viewports
pub const RADIUS_DIVISOR: f32 = 3.0; // container span / divisor = candidate radius

// Depth falloff for non-selected items
pub const MIN_OPACITY: f32 = 0.35;
pub const MIN_SCALE: f32 = 0.7;
pub const FOCUS_SCALE: f32 = 1.12; // selected item, independent of depth
pub const SELECTED_Z_INDEX: i32 = 100;
pub const BASE_Z_INDEX: i32 = 10;
pub const Z_INDEX_SPAN: f32 = 80.0;

// Drag gestures
pub const DRAG_MIN_DISTANCE: f32 = 5.0; // below this a gesture is a click
pub const DRAG_SENSITIVITY: f32 = 1.0;
pub const FRAME_MS: f32 = 16.67; // velocity basis, 60 updates per second

// Viewport preset
pub const LARGE_SCREEN_MIN_WIDTH: f32 = 1024.0;
pub const LARGE_SCREEN_RADIUS: f32 = 250.0;
pub const SMALL_SCREEN_RADIUS: f32 = 140.0;
