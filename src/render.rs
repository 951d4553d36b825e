use surface_core::error::Result;
use surface_core::{Renderer, RendererKind, Scene, SurfaceError};
use wasm_bindgen::JsValue;
use web_sys as web;

pub mod canvas;
pub mod svg;
pub mod webgl;

pub use canvas::CanvasRenderer;
pub use svg::SvgDomRenderer;
pub use webgl::WebGlRenderer;

#[inline]
pub(crate) fn render_error(context: &str, e: JsValue) -> SurfaceError {
    SurfaceError::Render(format!("{context}: {:?}", e))
}

/// Backend selected by `renderWith`.
pub enum DomRenderer {
    Svg(SvgDomRenderer),
    Canvas(CanvasRenderer),
    WebGl(WebGlRenderer),
}

impl DomRenderer {
    pub fn create(kind: RendererKind, document: &web::Document) -> Result<Self> {
        Ok(match kind {
            RendererKind::Svg => DomRenderer::Svg(SvgDomRenderer::new(document)?),
            RendererKind::Canvas => DomRenderer::Canvas(CanvasRenderer::new(document)?),
            RendererKind::WebGl => DomRenderer::WebGl(WebGlRenderer::new(document)?),
        })
    }

    /// Element to insert into the page.
    pub fn element(&self) -> &web::Element {
        match self {
            DomRenderer::Svg(r) => r.element(),
            DomRenderer::Canvas(r) => r.element(),
            DomRenderer::WebGl(r) => r.element(),
        }
    }
}

impl Renderer for DomRenderer {
    fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        match self {
            DomRenderer::Svg(r) => r.set_size(width, height),
            DomRenderer::Canvas(r) => r.set_size(width, height),
            DomRenderer::WebGl(r) => r.set_size(width, height),
        }
    }

    fn render(&mut self, scene: &Scene) -> Result<()> {
        match self {
            DomRenderer::Svg(r) => r.render(scene),
            DomRenderer::Canvas(r) => r.render(scene),
            DomRenderer::WebGl(r) => r.render(scene),
        }
    }
}
