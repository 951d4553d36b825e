// Default option table and animation tuning shared by the web and native frontends.

// Layout
pub const DEFAULT_CONTAINER: &str = "body"; // selector of the element the surface fills
pub const DEFAULT_CELLSIZE: f64 = 100.0; // grid cell edge, px
pub const DEFAULT_JITTER: f64 = 0.33; // fraction of a cell each vertex may move
pub const DEFAULT_DEPTH: f64 = 20.0; // z range for the default depth transform

// Material
pub const DEFAULT_FILL_OPACITY: f64 = 1.0;
pub const DEFAULT_STROKE_OPACITY: f64 = 1.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;

// Animation
pub const DEFAULT_LIGHT_UP_FRAMES: u32 = 60; // one second at 60 fps

// Limits
pub const MAX_GRID_CELLS: u64 = 1 << 20; // columns × rows in one mesh
