//! Platform-free core of the shaded surface: option resolution, mesh
//! generation and distortion, light resolution, flat shading, and the
//! light-up animation driven by host frame callbacks.

pub mod animator;
pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod distort;
pub mod ease;
pub mod error;
pub mod geometry;
pub mod light;
pub mod mesh;
pub mod scene;
pub mod svg;

pub use animator::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use distort::*;
pub use ease::*;
pub use error::{CallbackError, SurfaceError};
pub use geometry::*;
pub use light::*;
pub use mesh::*;
pub use scene::*;
pub use svg::{SvgRenderer, SVG_NS};
