use crate::constants::{FALLBACK_VIEWPORT_HEIGHT, FALLBACK_VIEWPORT_WIDTH};
use backdrop_core::{EnvironmentChange, Size};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

/// DOM event listener that unregisters itself when dropped.
pub struct EventListener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", kind, e))?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

pub fn viewport_size(window: &web::Window) -> Size {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: f64| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(fallback)
    };
    Size::new(
        read(window.inner_width(), FALLBACK_VIEWPORT_WIDTH),
        read(window.inner_height(), FALLBACK_VIEWPORT_HEIGHT),
    )
}

/// CSS box of the canvas' parent, which the canvas is stretched to fill.
pub fn container_size(canvas: &web::HtmlCanvasElement) -> Option<Size> {
    let parent = canvas.parent_element()?;
    let rect = parent.get_bounding_client_rect();
    Some(Size::new(rect.width(), rect.height()))
}

/// Sizing inputs as they stand right now: container box, viewport and DPR.
pub fn measure_inputs(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
) -> (Option<Size>, Size, f64) {
    (
        container_size(canvas),
        viewport_size(window),
        window.device_pixel_ratio(),
    )
}

pub fn current_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) -> EnvironmentChange {
    let (container, viewport, device_pixel_ratio) = measure_inputs(window, canvas);
    EnvironmentChange::Resized {
        container,
        viewport,
        device_pixel_ratio,
    }
}
