//! Randomised primitive sets for the two backdrop variants.
//!
//! Counts scale with canvas area and are clamped to fixed bounds, which keeps
//! the O(n²) link pass in the network variant at a constant per-frame cost.

pub mod blueprint;
pub mod network;

pub use blueprint::{Axis, BlueprintScene, PulseNode, Trace};
pub use network::{NetworkScene, Particle};

use crate::config::{BackdropConfig, Variant};
use crate::sizing::CanvasMetrics;
use rand::Rng;

/// `clamp(round(area / normalizer * density), min, max)`
pub fn primitive_count(area: f32, normalizer: f32, density: f32, min: usize, max: usize) -> usize {
    let raw = (area / normalizer * density).round();
    if !raw.is_finite() || raw <= 0.0 {
        return min;
    }
    (raw as usize).clamp(min, max)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
    Network(NetworkScene),
    Blueprint(BlueprintScene),
}

impl Scene {
    pub fn build<R: Rng + ?Sized>(
        variant: Variant,
        metrics: &CanvasMetrics,
        config: &BackdropConfig,
        rng: &mut R,
    ) -> Self {
        let scene = match variant {
            Variant::Network => Scene::Network(NetworkScene::build(metrics, config, rng)),
            Variant::Blueprint => Scene::Blueprint(BlueprintScene::build(metrics, config, rng)),
        };
        log::debug!(
            "[backdrop] built {:?} scene with {} primitives for {}x{}",
            variant,
            scene.len(),
            metrics.logical_width,
            metrics.logical_height
        );
        scene
    }

    pub fn len(&self) -> usize {
        match self {
            Scene::Network(n) => n.particles.len(),
            Scene::Blueprint(b) => b.traces.len() + b.nodes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
