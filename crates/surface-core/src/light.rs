//! Light definitions and their runtime counterparts.
//!
//! Coordinates of a [`LightDef`] are either literal numbers or functions of
//! the current surface `(width, height)`. They are resolved at the point of
//! use (every `draw`, and once per light-up run) and never cached.

use crate::color::Color;
use crate::error::{CallbackError, Result};
use glam::DVec3;
use std::fmt;
use std::rc::Rc;

pub type CoordFn = Rc<dyn Fn(f64, f64) -> std::result::Result<f64, CallbackError>>;

#[derive(Clone)]
pub enum Coordinate {
    Literal(f64),
    Computed(CoordFn),
}

impl Coordinate {
    pub fn computed(
        f: impl Fn(f64, f64) -> std::result::Result<f64, CallbackError> + 'static,
    ) -> Self {
        Coordinate::Computed(Rc::new(f))
    }

    #[inline]
    pub fn resolve(&self, width: f64, height: f64) -> std::result::Result<f64, CallbackError> {
        match self {
            Coordinate::Literal(v) => Ok(*v),
            Coordinate::Computed(f) => f(width, height),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(v: f64) -> Self {
        Coordinate::Literal(v)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coordinate::Literal(v) => write!(f, "Literal({v})"),
            Coordinate::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LightPosition {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
}

impl LightPosition {
    pub fn new(x: impl Into<Coordinate>, y: impl Into<Coordinate>, z: impl Into<Coordinate>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn fixed(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z)
    }

    /// Resolve x, y and z independently against the given dimensions.
    pub fn resolve(&self, width: f64, height: f64) -> Result<DVec3> {
        Ok(DVec3::new(
            self.x.resolve(width, height)?,
            self.y.resolve(width, height)?,
            self.z.resolve(width, height)?,
        ))
    }
}

/// Caller-declared light. Order within the definition list is the order of
/// lights in the scene.
#[derive(Clone, Debug)]
pub struct LightDef {
    pub ambient: Color,
    pub diffuse: Color,
    pub position: LightPosition,
    /// Where `light_up` starts from; the origin when absent.
    pub start: Option<LightPosition>,
}

impl LightDef {
    pub fn new(ambient: Color, diffuse: Color, position: LightPosition) -> Self {
        Self {
            ambient,
            diffuse,
            position,
            start: None,
        }
    }

    /// Convenience constructor from hex color strings.
    pub fn from_hex(ambient: &str, diffuse: &str, position: LightPosition) -> Result<Self> {
        Ok(Self::new(
            Color::from_hex(ambient)?,
            Color::from_hex(diffuse)?,
            position,
        ))
    }

    pub fn with_start(mut self, start: LightPosition) -> Self {
        self.start = Some(start);
        self
    }

    /// Start pose for a light-up run.
    pub fn resolve_start(&self, width: f64, height: f64) -> Result<DVec3> {
        match &self.start {
            Some(start) => start.resolve(width, height),
            None => Ok(DVec3::ZERO),
        }
    }
}

/// A light in the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct Light {
    pub ambient: Color,
    pub diffuse: Color,
    /// Live position used for shading.
    pub position: DVec3,
    /// Position resolved by the last `draw`; where light-up runs end.
    pub target: DVec3,
}

impl Light {
    pub fn new(ambient: Color, diffuse: Color) -> Self {
        Self {
            ambient,
            diffuse,
            position: DVec3::ZERO,
            target: DVec3::ZERO,
        }
    }

    #[inline]
    pub fn set_position(&mut self, x: f64, y: f64, z: f64) {
        self.position = DVec3::new(x, y, z);
    }

    /// Move the light and make that its resting target.
    #[inline]
    pub fn place(&mut self, position: DVec3) {
        self.position = position;
        self.target = position;
    }
}

impl From<&LightDef> for Light {
    fn from(def: &LightDef) -> Self {
        Light::new(def.ambient, def.diffuse)
    }
}
