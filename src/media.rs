use crate::dom::EventListener;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn query(window: &web::Window, media: &str) -> Option<web::MediaQueryList> {
    window.match_media(media).ok().flatten()
}

/// Current match state, or `None` when media queries are unsupported.
#[inline]
pub fn matches(window: &web::Window, media: &str) -> Option<bool> {
    query(window, media).map(|q| q.matches())
}

/// Live subscription to a media query's `change` event.
pub struct MediaWatch {
    _listener: EventListener,
}

pub fn watch(
    window: &web::Window,
    media: &'static str,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<MediaWatch> {
    let list = query(window, media)?;
    let list_for_event = list.clone();
    let listener = EventListener::new(&list, "change", move |ev: web::Event| {
        let matched = ev
            .dyn_ref::<web::MediaQueryListEvent>()
            .map(|e| e.matches())
            .unwrap_or_else(|| list_for_event.matches());
        log::debug!("[media] {} -> {}", media, matched);
        on_change(matched);
    });
    match listener {
        Ok(l) => Some(MediaWatch { _listener: l }),
        Err(e) => {
            log::debug!("[media] cannot watch {}: {:?}", media, e);
            None
        }
    }
}

/// `ResizeObserver` on one element; disconnects when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array, web::ResizeObserver)>,
}

pub fn observe_resize(
    element: &web::Element,
    mut on_resize: impl FnMut() + 'static,
) -> anyhow::Result<ResizeWatch> {
    let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array, _obs: web::ResizeObserver| {
        on_resize();
    }) as Box<dyn FnMut(js_sys::Array, web::ResizeObserver)>);
    let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("ResizeObserver: {:?}", e))?;
    observer.observe(element);
    Ok(ResizeWatch {
        observer,
        _closure: closure,
    })
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
