use crate::constants::RESIZE_EVENT;
use crate::frame;
use crate::Shared;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize listener bound to one surface. Dropping it deregisters the
/// handler.
pub struct ResizeListener {
    window: web::Window,
    closure: Closure<dyn FnMut()>,
}

impl ResizeListener {
    pub fn register(shared: &Rc<Shared>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let weak = Rc::downgrade(shared);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                frame::request_resize(&shared);
            }
        }) as Box<dyn FnMut()>);
        window
            .add_event_listener_with_callback(RESIZE_EVENT, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { window, closure })
    }
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        _ = self
            .window
            .remove_event_listener_with_callback(RESIZE_EVENT, self.closure.as_ref().unchecked_ref());
    }
}
