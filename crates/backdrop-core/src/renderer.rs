//! Frame renderer state machine for one backdrop canvas.
//!
//! ```text
//! Idle -> Initializing -> Animating       (motion allowed)
//! Idle -> Initializing -> StaticRendered  (reduced motion)
//! Animating | StaticRendered -> Initializing   on any environment change
//! any -> Idle                                  on teardown
//! ```
//!
//! At most one frame request is pending at any time; every pass through
//! `Initializing` cancels the previous one before anything else happens.
//! If the scheduler refuses a request the renderer falls back to
//! `StaticRendered`.

use crate::config::{BackdropConfig, Variant};
use crate::environment::{Environment, EnvironmentChange};
use crate::painter::paint_frame;
use crate::palette::PaletteCache;
use crate::scene::Scene;
use crate::sizing::CanvasMetrics;
use crate::surface::{FrameHandle, FrameScheduler, Surface};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RendererState {
    Idle,
    Initializing,
    Animating,
    StaticRendered,
}

pub struct Renderer<S: Surface, F: FrameScheduler> {
    variant: Variant,
    config: BackdropConfig,
    env: Environment,
    surface: S,
    scheduler: F,
    rng: Box<dyn RngCore>,
    palettes: PaletteCache,
    metrics: Option<CanvasMetrics>,
    scene: Option<Scene>,
    state: RendererState,
    pending: Option<FrameHandle>,
    clock_origin: Option<Duration>,
    rebuilds: u64,
}

impl<S: Surface, F: FrameScheduler> Renderer<S, F> {
    pub fn new(
        variant: Variant,
        config: BackdropConfig,
        env: Environment,
        surface: S,
        scheduler: F,
    ) -> Self {
        Self {
            variant,
            config,
            env,
            surface,
            scheduler,
            rng: Box::new(SmallRng::from_entropy()),
            palettes: PaletteCache::default(),
            metrics: None,
            scene: None,
            state: RendererState::Idle,
            pending: None,
            clock_origin: None,
            rebuilds: 0,
        }
    }

    /// Replace the random source used for scene generation.
    pub fn with_rng(mut self, rng: impl RngCore + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn mount(&mut self) {
        if !self.config.enabled {
            log::debug!("[backdrop] {:?} disabled; staying idle", self.variant);
            return;
        }
        if self.state != RendererState::Idle {
            return;
        }
        log::info!(
            "[backdrop] mounting {:?} theme={} reduced_motion={}",
            self.variant,
            self.env.theme.as_str(),
            self.env.reduced_motion
        );
        self.initialize();
    }

    /// React to a host change. Unmounted renderers only record it.
    pub fn handle(&mut self, change: &EnvironmentChange) {
        if !self.env.apply(change) {
            return;
        }
        if self.state == RendererState::Idle {
            return;
        }
        log::debug!("[backdrop] environment change {:?}", change);
        self.initialize();
    }

    /// Frame callback from the scheduler; `now` is a monotonic timestamp.
    pub fn on_frame(&mut self, now: Duration) {
        if self.state != RendererState::Animating {
            return;
        }
        self.pending = None;
        let origin = *self.clock_origin.get_or_insert(now);
        let t = now.saturating_sub(origin).as_secs_f32();
        if let Some(Scene::Network(network)) = &mut self.scene {
            network.step();
        }
        self.paint(t);
        self.schedule_next();
    }

    pub fn teardown(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }
        if self.state != RendererState::Idle {
            log::info!("[backdrop] teardown {:?}", self.variant);
        }
        self.state = RendererState::Idle;
        self.scene = None;
        self.metrics = None;
        self.clock_origin = None;
    }

    pub fn state(&self) -> RendererState {
        self.state
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    /// Number of scene rebuilds since construction.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    fn initialize(&mut self) {
        self.state = RendererState::Initializing;
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel_frame(handle);
        }

        let metrics = self.env.metrics();
        if self.metrics != Some(metrics) || self.scene.is_none() {
            self.surface.resize(&metrics);
            self.metrics = Some(metrics);
            self.scene = Some(Scene::build(
                self.variant,
                &metrics,
                &self.config,
                self.rng.as_mut(),
            ));
            self.rebuilds += 1;
        }

        if self.env.reduced_motion {
            self.paint(0.0);
            self.state = RendererState::StaticRendered;
        } else {
            self.state = RendererState::Animating;
            if !self.schedule_next() {
                self.paint(0.0);
            }
        }
    }

    /// A refused request ends the animation; the last painted frame stays
    /// up as a static backdrop until the next environment change.
    fn schedule_next(&mut self) -> bool {
        self.pending = self.scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[backdrop] host refused a frame request; rendering static");
            self.state = RendererState::StaticRendered;
            return false;
        }
        true
    }

    fn paint(&mut self, t: f32) {
        let Some(scene) = &self.scene else {
            return;
        };
        let palette = self.palettes.get(self.env.theme);
        paint_frame(&mut self.surface, scene, palette, &self.config, t);
    }
}
