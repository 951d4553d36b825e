//! SVG markup for a shaded scene.
//!
//! Scene coordinates are centred with y up; SVG puts the origin top-left with
//! y down, so points are mapped as `(x + w/2, h/2 - y)`.

use crate::controller::Renderer;
use crate::error::Result;
use crate::scene::Scene;
use std::fmt::Write;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// `<polygon>` elements for every triangle of `scene`, on a `width × height`
/// drawing.
pub fn polygons(scene: &Scene, width: f64, height: f64) -> String {
    let half_w = width * 0.5;
    let half_h = height * 0.5;
    let material = &scene.mesh.material;
    let mut out = String::new();
    for tri in scene.shade() {
        let color = tri.color.to_css();
        out.push_str("<polygon points=\"");
        for (i, p) in tri.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            _ = write!(out, "{},{}", p.x + half_w, half_h - p.y);
        }
        _ = write!(
            out,
            "\" style=\"fill:{color};fill-opacity:{};stroke:{color};stroke-opacity:{};stroke-width:{}\"/>",
            material.fill_opacity, material.stroke_opacity, material.stroke_width
        );
    }
    out
}

/// Standalone SVG document.
pub fn document(scene: &Scene, width: f64, height: f64) -> String {
    format!(
        "<svg xmlns=\"{SVG_NS}\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">{}</svg>\n",
        polygons(scene, width, height)
    )
}

/// Renderer that keeps the markup of the last frame in memory.
#[derive(Clone, Debug, Default)]
pub struct SvgRenderer {
    pub width: f64,
    pub height: f64,
    markup: String,
    frames: u64,
}

impl SvgRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Document rendered by the last `render` call.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Number of `render` calls so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for SvgRenderer {
    fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.width = width;
        self.height = height;
        Ok(())
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        self.markup = document(scene, self.width, self.height);
        self.frames += 1;
        Ok(())
    }
}
