//! Runs controller frame tasks on `requestAnimationFrame`.
//!
//! Every task gets its own one-shot callback. The callback only holds a weak
//! reference, so a destroyed surface turns pending callbacks into no-ops.

use crate::Shared;
use std::rc::Rc;
use surface_core::FrameTask;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn schedule(shared: &Rc<Shared>, task: FrameTask) {
    let weak = Rc::downgrade(shared);
    let callback = Closure::once_into_js(move || {
        if let Some(shared) = weak.upgrade() {
            run(&shared, task);
        }
    });
    match web::window() {
        Some(w) => {
            if let Err(e) = w.request_animation_frame(callback.unchecked_ref()) {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            }
        }
        None => log::error!("[frame] no window; dropping {:?}", task),
    }
}

fn run(shared: &Rc<Shared>, task: FrameTask) {
    let result = match shared.controller.try_borrow_mut() {
        Ok(mut controller) => controller.run_frame(task),
        Err(_) => {
            // Surface is mid-call (a caller function re-entered it); retry next frame.
            schedule(shared, task);
            return;
        }
    };
    match result {
        Ok(Some(next)) => schedule(shared, next),
        Ok(None) => {}
        Err(e) => {
            let thrown = shared.thrown.borrow_mut().take();
            log::error!("[frame] {:?} failed: {} {:?}", task, e, thrown);
        }
    }
}

/// Debounced resize: at most one rebuild per displayed frame.
pub fn request_resize(shared: &Rc<Shared>) {
    let task = match shared.controller.try_borrow_mut() {
        Ok(mut controller) => controller.request_resize(),
        Err(_) => {
            log::warn!("[resize] surface busy; ignoring notification");
            None
        }
    };
    if let Some(task) = task {
        schedule(shared, task);
    }
}
