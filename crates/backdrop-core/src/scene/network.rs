use crate::config::BackdropConfig;
use crate::constants::{
    NETWORK_AREA_PER_PARTICLE, NETWORK_MAX_PARTICLES, NETWORK_MIN_PARTICLES, PARTICLE_STEP_PX,
};
use crate::scene::primitive_count;
use crate::sizing::CanvasMetrics;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per animated frame (logical px).
    pub vel: Vec2,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetworkScene {
    pub particles: Vec<Particle>,
    pub width: f32,
    pub height: f32,
}

impl NetworkScene {
    pub fn build<R: Rng + ?Sized>(
        metrics: &CanvasMetrics,
        config: &BackdropConfig,
        rng: &mut R,
    ) -> Self {
        let (width, height) = (metrics.logical_width, metrics.logical_height);
        let count = primitive_count(
            metrics.area(),
            NETWORK_AREA_PER_PARTICLE,
            config.density,
            NETWORK_MIN_PARTICLES,
            NETWORK_MAX_PARTICLES,
        );
        let max_step = config.speed * PARTICLE_STEP_PX;
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
                vel: Vec2::new(
                    (rng.gen::<f32>() * 2.0 - 1.0) * max_step,
                    (rng.gen::<f32>() * 2.0 - 1.0) * max_step,
                ),
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    /// Advance every particle one frame, reflecting off the canvas edges.
    pub fn step(&mut self) {
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos += p.vel;
            if p.pos.x < 0.0 || p.pos.x > w {
                p.vel.x = -p.vel.x;
                p.pos.x = p.pos.x.clamp(0.0, w);
            }
            if p.pos.y < 0.0 || p.pos.y > h {
                p.vel.y = -p.vel.y;
                p.pos.y = p.pos.y.clamp(0.0, h);
            }
        }
    }

    /// Visit every particle pair closer than `max_distance`, passing the
    /// normalised closeness in (0, 1].
    pub fn for_each_link(&self, max_distance: f32, mut f: impl FnMut(Vec2, Vec2, f32)) {
        if max_distance <= 0.0 {
            return;
        }
        let max_sq = max_distance * max_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let d_sq = a.pos.distance_squared(b.pos);
                if d_sq < max_sq {
                    f(a.pos, b.pos, 1.0 - d_sq.sqrt() / max_distance);
                }
            }
        }
    }
}
