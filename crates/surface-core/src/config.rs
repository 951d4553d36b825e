//! Option defaults and the merge that produces a resolved [`SurfaceConfig`].

use crate::color::Color;
use crate::constants::*;
use crate::error::{CallbackError, Result, SurfaceError};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

/// Maps a distorted vertex `(x, y)` and the configured depth to a z value.
pub type DepthFn = Rc<dyn Fn(f64, f64, f64) -> std::result::Result<f64, CallbackError>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RendererKind {
    #[default]
    Svg,
    Canvas,
    WebGl,
}

impl RendererKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RendererKind::Svg => "svg",
            RendererKind::Canvas => "canvas",
            RendererKind::WebGl => "webgl",
        }
    }
}

impl FromStr for RendererKind {
    type Err = SurfaceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "svg" => Ok(RendererKind::Svg),
            "canvas" => Ok(RendererKind::Canvas),
            "webgl" => Ok(RendererKind::WebGl),
            other => Err(SurfaceError::Configuration(format!(
                "undefined renderer {other:?}; aborting"
            ))),
        }
    }
}

impl fmt::Display for RendererKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller overrides. Every field is optional; `None` falls back to the
/// default table.
#[derive(Clone, Default)]
pub struct SurfaceOptions {
    pub container: Option<String>,
    pub cellsize: Option<f64>,
    pub jitter: Option<f64>,
    pub depth: Option<f64>,
    pub depth_transform: Option<DepthFn>,
    pub material_ambient: Option<String>,
    pub material_diffuse: Option<String>,
    pub fill_opacity: Option<f64>,
    pub stroke_opacity: Option<f64>,
    pub stroke_width: Option<f64>,
    pub render_with: Option<String>,
}

impl SurfaceOptions {
    /// Merge over [`SurfaceConfig::default`].
    pub fn resolve(self) -> Result<SurfaceConfig> {
        resolve(&SurfaceConfig::default(), self)
    }
}

/// Fully resolved configuration; immutable for the lifetime of a controller.
#[derive(Clone)]
pub struct SurfaceConfig {
    pub container: String,
    pub cellsize: f64,
    pub jitter: f64,
    pub depth: f64,
    pub depth_transform: Option<DepthFn>,
    pub material_ambient: Color,
    pub material_diffuse: Color,
    pub fill_opacity: f64,
    pub stroke_opacity: f64,
    pub stroke_width: f64,
    pub render_with: RendererKind,
    /// `jitter * cellsize`, in pixels.
    pub distortion: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            container: DEFAULT_CONTAINER.to_string(),
            cellsize: DEFAULT_CELLSIZE,
            jitter: DEFAULT_JITTER,
            depth: DEFAULT_DEPTH,
            depth_transform: None,
            material_ambient: Color::WHITE,
            material_diffuse: Color::WHITE,
            fill_opacity: DEFAULT_FILL_OPACITY,
            stroke_opacity: DEFAULT_STROKE_OPACITY,
            stroke_width: DEFAULT_STROKE_WIDTH,
            render_with: RendererKind::Svg,
            distortion: DEFAULT_JITTER * DEFAULT_CELLSIZE,
        }
    }
}

impl fmt::Debug for SurfaceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceConfig")
            .field("container", &self.container)
            .field("cellsize", &self.cellsize)
            .field("jitter", &self.jitter)
            .field("depth", &self.depth)
            .field("depth_transform", &self.depth_transform.is_some())
            .field("material_ambient", &self.material_ambient)
            .field("material_diffuse", &self.material_diffuse)
            .field("fill_opacity", &self.fill_opacity)
            .field("stroke_opacity", &self.stroke_opacity)
            .field("stroke_width", &self.stroke_width)
            .field("render_with", &self.render_with)
            .field("distortion", &self.distortion)
            .finish()
    }
}

/// Take each override when present, else the default, then derive
/// `distortion`.
pub fn resolve(defaults: &SurfaceConfig, overrides: SurfaceOptions) -> Result<SurfaceConfig> {
    let cellsize = overrides.cellsize.unwrap_or(defaults.cellsize);
    if !cellsize.is_finite() || cellsize <= 0.0 {
        return Err(SurfaceError::Configuration(format!(
            "cellsize must be a positive number, got {cellsize}"
        )));
    }
    let jitter = overrides.jitter.unwrap_or(defaults.jitter);
    let render_with = match overrides.render_with.as_deref() {
        Some(kind) => kind.parse()?,
        None => defaults.render_with,
    };
    let material_ambient = match overrides.material_ambient.as_deref() {
        Some(hex) => Color::from_hex(hex)?,
        None => defaults.material_ambient,
    };
    let material_diffuse = match overrides.material_diffuse.as_deref() {
        Some(hex) => Color::from_hex(hex)?,
        None => defaults.material_diffuse,
    };

    Ok(SurfaceConfig {
        container: overrides
            .container
            .unwrap_or_else(|| defaults.container.clone()),
        cellsize,
        jitter,
        depth: overrides.depth.unwrap_or(defaults.depth),
        depth_transform: overrides
            .depth_transform
            .or_else(|| defaults.depth_transform.clone()),
        material_ambient,
        material_diffuse,
        fill_opacity: overrides.fill_opacity.unwrap_or(defaults.fill_opacity),
        stroke_opacity: overrides.stroke_opacity.unwrap_or(defaults.stroke_opacity),
        stroke_width: overrides.stroke_width.unwrap_or(defaults.stroke_width),
        render_with,
        distortion: jitter * cellsize,
    })
}
