//! Wires one canvas to a renderer and the host events it reacts to.
//!
//! Every event source (window resize, container `ResizeObserver`, the
//! reduced-motion media query, theme store changes) emits into one
//! environment signal; the renderer subscribes to that signal once.

use crate::canvas::CanvasSurface;
use crate::constants::REDUCED_MOTION_QUERY;
use crate::dom::{self, EventListener};
use crate::frame::{self, RafScheduler, TickSlot, WebRenderer};
use crate::media::{self, MediaWatch, ResizeWatch};
use crate::theme;
use backdrop_core::{
    BackdropConfig, Environment, EnvironmentChange, Renderer, Signal, SubscriptionId, Variant,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

type EnvSignal = Rc<RefCell<Signal<EnvironmentChange>>>;

pub struct Mounted {
    renderer: Rc<RefCell<WebRenderer>>,
    tick: TickSlot,
    signal: EnvSignal,
    _window_resize: Option<EventListener>,
    _container_resize: Option<ResizeWatch>,
    _motion: Option<MediaWatch>,
    theme_subscription: SubscriptionId,
}

fn emitter(signal: &EnvSignal) -> impl Fn(EnvironmentChange) + 'static {
    let signal = signal.clone();
    move |change| signal.borrow_mut().emit(&change)
}

/// Returns `Ok(None)` when the canvas has no 2D context; that is a silent
/// capability gap, not an error.
pub fn mount(
    canvas: web::HtmlCanvasElement,
    variant: Variant,
    config: BackdropConfig,
) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    _ = canvas.set_attribute("aria-hidden", "true");

    let Some(surface) = CanvasSurface::acquire(&canvas) else {
        log::debug!("[backdrop] 2d context unavailable; not rendering");
        return Ok(None);
    };

    let (container, viewport, device_pixel_ratio) = dom::measure_inputs(&window, &canvas);
    let env = Environment {
        container,
        viewport,
        device_pixel_ratio,
        theme: theme::resolved(),
        reduced_motion: media::matches(&window, REDUCED_MOTION_QUERY).unwrap_or(false),
    };

    let tick: TickSlot = Rc::new(RefCell::new(None));
    let scheduler = RafScheduler::new(window.clone(), tick.clone());
    let renderer = Rc::new(RefCell::new(Renderer::new(
        variant, config, env, surface, scheduler,
    )));
    frame::install_tick(&tick, Rc::downgrade(&renderer));

    let signal: EnvSignal = Rc::new(RefCell::new(Signal::default()));
    {
        let weak = Rc::downgrade(&renderer);
        signal.borrow_mut().subscribe(move |change| {
            if let Some(r) = weak.upgrade() {
                r.borrow_mut().handle(change);
            }
        });
    }

    let window_resize = {
        let emit = emitter(&signal);
        let (w, c) = (window.clone(), canvas.clone());
        EventListener::new(&window, "resize", move |_| emit(dom::current_resize(&w, &c)))
            .map_err(|e| log::debug!("[backdrop] {:?}", e))
            .ok()
    };

    let container_resize = canvas.parent_element().and_then(|parent| {
        let emit = emitter(&signal);
        let (w, c) = (window.clone(), canvas.clone());
        media::observe_resize(&parent, move || emit(dom::current_resize(&w, &c)))
            .map_err(|e| log::debug!("[backdrop] {:?}", e))
            .ok()
    });

    let motion = {
        let emit = emitter(&signal);
        media::watch(&window, REDUCED_MOTION_QUERY, move |reduced| {
            emit(EnvironmentChange::ReducedMotion(reduced))
        })
    };

    let theme_subscription = {
        let emit = emitter(&signal);
        theme::subscribe(move |t| emit(EnvironmentChange::Theme(*t)))
    };

    renderer.borrow_mut().mount();

    Ok(Some(Mounted {
        renderer,
        tick,
        signal,
        _window_resize: window_resize,
        _container_resize: container_resize,
        _motion: motion,
        theme_subscription,
    }))
}

impl Drop for Mounted {
    fn drop(&mut self) {
        // cancel the queued frame before its callback is freed
        self.renderer.borrow_mut().teardown();
        self.tick.borrow_mut().take();
        theme::unsubscribe(self.theme_subscription);
        self.signal.borrow_mut().clear();
    }
}
