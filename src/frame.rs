use crate::canvas::CanvasSurface;
use backdrop_core::{FrameHandle, FrameScheduler, Renderer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type WebRenderer = Renderer<CanvasSurface, RafScheduler>;

/// Holds the rAF callback. Filled after the renderer exists, emptied on teardown.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` driven scheduler.
pub struct RafScheduler {
    window: web::Window,
    tick: TickSlot,
}

impl RafScheduler {
    pub fn new(window: web::Window, tick: TickSlot) -> Self {
        Self { window, tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let tick = self.tick.borrow();
        let callback = tick.as_ref()?;
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::debug!("[backdrop] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Install the per-frame callback. It only holds a weak reference so dropping
/// the mounted backdrop frees the renderer even if a frame is still queued.
pub fn install_tick(tick: &TickSlot, renderer: Weak<RefCell<WebRenderer>>) {
    let clock = Instant::now();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(r) = renderer.upgrade() {
            r.borrow_mut().on_frame(clock.elapsed());
        }
    }) as Box<dyn FnMut()>));
}
