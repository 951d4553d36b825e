use super::render_error;
use surface_core::error::Result;
use surface_core::{Renderer, Scene, SurfaceError};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    context: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasRenderer {
    pub fn new(document: &web::Document) -> Result<Self> {
        let canvas = document
            .create_element("canvas")
            .map_err(|e| render_error("create canvas", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|_| SurfaceError::Render("canvas is not an HtmlCanvasElement".into()))?;
        let context = canvas
            .get_context("2d")
            .map_err(|e| render_error("2d context", e))?
            .ok_or_else(|| SurfaceError::Render("2d context unavailable".into()))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| SurfaceError::Render("unexpected 2d context type".into()))?;
        Ok(Self {
            canvas,
            context,
            width: 0.0,
            height: 0.0,
        })
    }

    pub fn element(&self) -> &web::Element {
        &self.canvas
    }
}

impl Renderer for CanvasRenderer {
    fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.width = width;
        self.height = height;
        self.canvas.set_width(width.max(1.0) as u32);
        self.canvas.set_height(height.max(1.0) as u32);
        Ok(())
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        let ctx = &self.context;
        let half_w = self.width * 0.5;
        let half_h = self.height * 0.5;
        let material = &scene.mesh.material;
        ctx.clear_rect(0.0, 0.0, self.width, self.height);
        ctx.set_line_width(material.stroke_width);
        for tri in scene.shade() {
            let [a, b, c] = tri.points;
            ctx.begin_path();
            ctx.move_to(a.x + half_w, half_h - a.y);
            ctx.line_to(b.x + half_w, half_h - b.y);
            ctx.line_to(c.x + half_w, half_h - c.y);
            ctx.close_path();
            let color = tri.color.to_css();
            ctx.set_global_alpha(material.fill_opacity);
            ctx.set_fill_style_str(&color);
            ctx.fill();
            ctx.set_global_alpha(material.stroke_opacity);
            ctx.set_stroke_style_str(&color);
            ctx.stroke();
        }
        ctx.set_global_alpha(1.0);
        Ok(())
    }
}
