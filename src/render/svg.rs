use super::render_error;
use surface_core::error::Result;
use surface_core::{svg, Renderer, Scene, SVG_NS};
use web_sys as web;

/// `<svg>` element whose content is replaced with fresh polygons each frame.
pub struct SvgDomRenderer {
    element: web::Element,
    width: f64,
    height: f64,
}

impl SvgDomRenderer {
    pub fn new(document: &web::Document) -> Result<Self> {
        let element = document
            .create_element_ns(Some(SVG_NS), "svg")
            .map_err(|e| render_error("create svg", e))?;
        Ok(Self {
            element,
            width: 0.0,
            height: 0.0,
        })
    }

    pub fn element(&self) -> &web::Element {
        &self.element
    }
}

impl Renderer for SvgDomRenderer {
    fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.width = width;
        self.height = height;
        self.element
            .set_attribute("width", &width.to_string())
            .map_err(|e| render_error("svg width", e))?;
        self.element
            .set_attribute("height", &height.to_string())
            .map_err(|e| render_error("svg height", e))
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        self.element
            .set_inner_html(&svg::polygons(scene, self.width, self.height));
        Ok(())
    }
}
