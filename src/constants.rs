// DOM hooks and frontend tuning. The page supplies the elements by id.

// Mount points
pub const CAROUSEL_ID: &str = "tech-carousel";
pub const ITEMS_SCRIPT_ID: &str = "carousel-items"; // <script type="application/json">
pub const DETAILS_ID: &str = "tech-details";
pub const GRID_ID: &str = "tech-grid";

// Elements built by the renderer
pub const VIEWPORT_CLASS: &str = "carousel-viewport";
pub const SPINNER_CLASS: &str = "carousel-spinner";
pub const EMPTY_CLASS: &str = "carousel-empty";
pub const CONTROLS_CLASS: &str = "carousel-controls";
pub const GRID_ITEM_SELECTOR: &str = ".tech-grid-item";

// Data attributes read for configuration (prefix + key)
pub const CONFIG_ATTR_PREFIX: &str = "data-";

// While dragging, the ring follows the pointer by this fraction of the offset.
pub const DRAG_FOLLOW: f32 = 0.25;

// Frames longer than this (tab in background) are clamped before ticking.
pub const MAX_FRAME_DT_MS: u64 = 250;
