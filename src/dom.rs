use crate::constants::{CONTAINER_BACKGROUND, WRAPPER_CLASS, WRAPPER_STYLE};
use surface_core::Container;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_error(message: &str) -> wasm_bindgen::JsValue {
    js_sys::Error::new(message).into()
}

/// Resolve the container selector to a live element.
pub fn query_container(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("invalid container selector {selector:?}: {:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("container {selector:?} not found"))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("container {selector:?} is not an HTML element"))
}

/// Absolutely positioned, clipping div that holds the renderer element.
pub fn create_wrapper(document: &web::Document) -> anyhow::Result<web::HtmlElement> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
    _ = el.class_list().add_1(WRAPPER_CLASS);
    el.set_attribute("style", WRAPPER_STYLE)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(el)
}

pub fn paint_container_black(container: &web::HtmlElement) {
    _ = container
        .style()
        .set_property("background-color", CONTAINER_BACKGROUND);
}

/// The wrapper is absolutely positioned, so a static container becomes
/// `relative` to anchor it.
pub fn ensure_positioned(container: &web::HtmlElement) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let position = window
        .get_computed_style(container)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .map(|s| s.get_property_value("position").unwrap_or_default())
        .unwrap_or_default();
    if position == "static" {
        container
            .style()
            .set_property("position", "relative")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    Ok(())
}

/// Pull the renderer element out by `distortion` px on every side so the
/// jittered mesh edges stay hidden behind the wrapper's clip.
pub fn offset_renderer_element(el: &web::Element, distortion: f64) -> anyhow::Result<()> {
    let d = -distortion;
    el.set_attribute(
        "style",
        &format!("position:absolute;top:{d}px;right:{d}px;bottom:{d}px;left:{d}px"),
    )
    .map_err(|e| anyhow::anyhow!("{:?}", e))
}

/// Live container measured through `offsetWidth`/`offsetHeight`.
pub struct DomContainer {
    pub element: web::HtmlElement,
}

impl Container for DomContainer {
    fn size(&self) -> (f64, f64) {
        (
            self.element.offset_width() as f64,
            self.element.offset_height() as f64,
        )
    }
}
