#![cfg(target_arch = "wasm32")]
use crate::dom::DomContainer;
use crate::events::ResizeListener;
use crate::options::ThrownSlot;
use crate::render::DomRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use surface_core::{SurfaceController, SurfaceError};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod options;
mod render;

pub(crate) type Controller = SurfaceController<DomRenderer, DomContainer>;

/// State shared between the JS handle and frame/resize callbacks.
pub(crate) struct Shared {
    pub controller: RefCell<Controller>,
    pub thrown: ThrownSlot,
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shaded-surface loaded");
    Ok(())
}

#[inline]
fn anyhow_to_js(e: anyhow::Error) -> JsValue {
    dom::js_error(&format!("{e:#}"))
}

/// JS handle: `new ShadedSurface(options, lightDefs)`.
#[wasm_bindgen]
pub struct ShadedSurface {
    shared: Rc<Shared>,
    container: web::HtmlElement,
    wrapper: web::HtmlElement,
    resize_listener: Option<ResizeListener>,
}

#[wasm_bindgen]
impl ShadedSurface {
    /// Resolve options, build the renderer and the distorted mesh. Throws on
    /// an unknown `renderWith`, a non-positive `cellsize`, a bad color, or a
    /// container selector that matches nothing.
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue, light_defs: JsValue) -> Result<ShadedSurface, JsValue> {
        let thrown: ThrownSlot = Rc::new(RefCell::new(None));
        let config = options::surface_options(&options, &thrown)?
            .resolve()
            .map_err(|e| options::to_js(e, &thrown))?;
        let light_defs = options::light_defs(&light_defs, &thrown)?;

        let document = dom::window_document().ok_or_else(|| dom::js_error("no document"))?;
        let container = dom::query_container(&document, &config.container).map_err(|e| {
            dom::js_error(&SurfaceError::Configuration(format!("{e:#}")).to_string())
        })?;
        let wrapper = dom::create_wrapper(&document).map_err(anyhow_to_js)?;
        dom::paint_container_black(&container);

        let renderer = DomRenderer::create(config.render_with, &document)
            .map_err(|e| options::to_js(e, &thrown))?;
        let controller = SurfaceController::new(
            config,
            light_defs,
            DomContainer {
                element: container.clone(),
            },
            renderer,
        )
        .map_err(|e| options::to_js(e, &thrown))?;

        Ok(ShadedSurface {
            shared: Rc::new(Shared {
                controller: RefCell::new(controller),
                thrown,
            }),
            container,
            wrapper,
            resize_listener: None,
        })
    }

    fn controller(&self) -> Result<std::cell::RefMut<'_, Controller>, JsValue> {
        self.shared
            .controller
            .try_borrow_mut()
            .map_err(|_| dom::js_error("ShadedSurface is busy"))
    }

    fn to_js(&self, e: SurfaceError) -> JsValue {
        options::to_js(e, &self.shared.thrown)
    }

    /// Insert the surface into its container and start following window
    /// resizes.
    pub fn initialize(&mut self) -> Result<(), JsValue> {
        if self.resize_listener.is_some() {
            log::warn!("[surface] initialize called twice; ignoring");
            return Ok(());
        }
        let (element, distortion) = {
            let controller = self.controller()?;
            (
                controller.renderer().element().clone(),
                controller.config().distortion,
            )
        };
        self.container
            .append_child(&self.wrapper)
            .map_err(|e| anyhow_to_js(anyhow::anyhow!("{:?}", e)))?;
        self.wrapper
            .append_child(&element)
            .map_err(|e| anyhow_to_js(anyhow::anyhow!("{:?}", e)))?;
        dom::ensure_positioned(&self.container).map_err(anyhow_to_js)?;
        dom::offset_renderer_element(&element, distortion).map_err(anyhow_to_js)?;
        self.resize_listener = Some(ResizeListener::register(&self.shared).map_err(anyhow_to_js)?);
        Ok(())
    }

    /// Rebuild the mesh for the container's current size right away.
    pub fn resize(&self) -> Result<(), JsValue> {
        let result = self.controller()?.resize();
        result.map_err(|e| self.to_js(e))
    }

    /// Reposition the lights and render.
    pub fn draw(&self) -> Result<(), JsValue> {
        let result = self.controller()?.draw();
        result.map_err(|e| self.to_js(e))
    }

    /// Paint the surface black.
    pub fn dark(&self) -> Result<(), JsValue> {
        let result = self.controller()?.dark();
        result.map_err(|e| self.to_js(e))
    }

    /// Tween lights from their start positions over `frames` frames
    /// (default 60).
    #[wasm_bindgen(js_name = lightUp)]
    pub fn light_up(&self, frames: JsValue) -> Result<(), JsValue> {
        let frames = if frames.is_undefined() || frames.is_null() {
            None
        } else {
            Some(js_sys::Number::new(&frames).value_of())
        };
        let result = self.controller()?.light_up(frames);
        if let Some(task) = result.map_err(|e| self.to_js(e))? {
            frame::schedule(&self.shared, task);
        }
        Ok(())
    }

    /// Stop animating, drop the resize listener and remove the surface from
    /// the page.
    pub fn destroy(&mut self) -> Result<(), JsValue> {
        self.controller()?.teardown();
        self.resize_listener = None;
        self.wrapper.remove();
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f64 {
        self.shared
            .controller
            .try_borrow()
            .map(|c| c.width())
            .unwrap_or(f64::NAN)
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f64 {
        self.shared
            .controller
            .try_borrow()
            .map(|c| c.height())
            .unwrap_or(f64::NAN)
    }
}
