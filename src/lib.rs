#![cfg(target_arch = "wasm32")]
use backdrop_core::{BackdropConfig, ThemePreference, Variant, INTRO_SEEN_KEY};
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod frame;
mod media;
mod mount;
mod storage;
mod theme;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("backdrop-web starting");
    theme::init();
    Ok(())
}

/// Handle for a mounted backdrop. Dropping it (or calling `unmount`) stops
/// the frame loop and removes every listener.
#[wasm_bindgen]
pub struct BackdropHandle {
    mounted: Option<mount::Mounted>,
}

#[wasm_bindgen]
impl BackdropHandle {
    pub fn unmount(&mut self) {
        self.mounted = None;
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.mounted.is_some()
    }
}

/// Mount a backdrop on `#canvas_id`. Never throws: a missing canvas or an
/// unsupported environment yields an inactive handle.
#[wasm_bindgen]
pub fn mount_backdrop(
    canvas_id: &str,
    variant: &str,
    enabled: Option<bool>,
    density: Option<f32>,
    link_distance: Option<f32>,
    speed: Option<f32>,
) -> BackdropHandle {
    let variant = Variant::parse(variant).unwrap_or_else(|| {
        log::warn!("[backdrop] unknown variant {:?}, using network", variant);
        Variant::Network
    });
    let config = BackdropConfig::from_overrides(enabled, density, link_distance, speed);
    let mounted = match try_mount(canvas_id, variant, config) {
        Ok(m) => m,
        Err(e) => {
            log::error!("[backdrop] mount error: {:?}", e);
            None
        }
    };
    BackdropHandle { mounted }
}

fn try_mount(
    canvas_id: &str,
    variant: Variant,
    config: BackdropConfig,
) -> anyhow::Result<Option<mount::Mounted>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;
    mount::mount(canvas, variant, config)
}

#[wasm_bindgen]
pub fn theme_get() -> String {
    theme::preference().as_str().to_string()
}

#[wasm_bindgen]
pub fn theme_resolved() -> String {
    theme::resolved().as_str().to_string()
}

/// Accepts "light", "dark" or "system"; anything else is ignored.
#[wasm_bindgen]
pub fn theme_set(preference: &str) {
    match ThemePreference::parse(preference) {
        Some(p) => theme::set(p),
        None => log::warn!("[theme] ignoring unknown preference {:?}", preference),
    }
}

#[wasm_bindgen]
pub fn theme_toggle() -> String {
    theme::toggle().as_str().to_string()
}

/// True until `intro_mark_seen` is called in this browser session.
#[wasm_bindgen]
pub fn intro_should_play() -> bool {
    !storage::session_flags().has_seen(INTRO_SEEN_KEY)
}

#[wasm_bindgen]
pub fn intro_mark_seen() {
    storage::session_flags().mark_seen(INTRO_SEEN_KEY);
}
