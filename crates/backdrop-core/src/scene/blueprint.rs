use crate::config::BackdropConfig;
use crate::constants::*;
use crate::scene::primitive_count;
use crate::sizing::CanvasMetrics;
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A highlight sliding along one grid line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trace {
    pub axis: Axis,
    pub line: u32,
    pub speed: f32,
    pub length: f32,
    pub phase: f32,
    pub width: f32,
}

impl Trace {
    /// Offset of the grid line across the axis (y for horizontal traces).
    pub fn line_offset(&self) -> f32 {
        self.line as f32 * GRID_SPACING
    }

    /// Visible `(start, end)` of the highlight along its axis at `t` seconds,
    /// or `None` while it is entirely off-canvas. `extent` is the canvas size
    /// along the axis.
    pub fn segment(&self, t: f32, extent: f32) -> Option<(f32, f32)> {
        let travel = extent + self.length;
        if travel <= 0.0 {
            return None;
        }
        let head = (self.phase + self.speed * t).rem_euclid(travel) - self.length;
        let start = head.max(0.0);
        let end = (head + self.length).min(extent);
        (end > start).then_some((start, end))
    }
}

/// A dot at a grid intersection whose radius breathes with a sine wave.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseNode {
    pub pos: Vec2,
    pub phase: f32,
    pub speed: f32,
    pub size: f32,
}

impl PulseNode {
    pub fn radius(&self, t: f32) -> f32 {
        self.size * (1.0 + PULSE_AMPLITUDE * (t * self.speed + self.phase).sin())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlueprintScene {
    pub traces: Vec<Trace>,
    pub nodes: Vec<PulseNode>,
    pub width: f32,
    pub height: f32,
}

/// Number of grid lines crossing an extent, including the one at 0.
#[inline]
pub fn grid_lines(extent: f32) -> u32 {
    (extent.max(0.0) / GRID_SPACING).floor() as u32 + 1
}

impl BlueprintScene {
    pub fn build<R: Rng + ?Sized>(
        metrics: &CanvasMetrics,
        config: &BackdropConfig,
        rng: &mut R,
    ) -> Self {
        let (width, height) = (metrics.logical_width, metrics.logical_height);
        let motion = config.motion_scale();
        let reach = config.reach_scale();
        let cols = grid_lines(width);
        let rows = grid_lines(height);

        let trace_count = primitive_count(
            metrics.area(),
            BLUEPRINT_AREA_PER_TRACE,
            config.density,
            BLUEPRINT_MIN_TRACES,
            BLUEPRINT_MAX_TRACES,
        );
        let traces = (0..trace_count)
            .map(|_| {
                let axis = if rng.gen_bool(0.5) {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                };
                let (line_count, extent) = match axis {
                    Axis::Horizontal => (rows, width),
                    Axis::Vertical => (cols, height),
                };
                let length = rng.gen_range(TRACE_LENGTH_MIN..TRACE_LENGTH_MAX) * reach;
                Trace {
                    axis,
                    line: rng.gen_range(0..line_count),
                    speed: rng.gen_range(TRACE_SPEED_MIN..TRACE_SPEED_MAX) * motion,
                    length,
                    phase: rng.gen::<f32>() * (extent + length),
                    width: rng.gen_range(TRACE_WIDTH_MIN..TRACE_WIDTH_MAX),
                }
            })
            .collect();

        let node_count = primitive_count(
            metrics.area(),
            BLUEPRINT_AREA_PER_NODE,
            config.density,
            BLUEPRINT_MIN_NODES,
            BLUEPRINT_MAX_NODES,
        );
        let nodes = (0..node_count)
            .map(|_| PulseNode {
                pos: Vec2::new(
                    rng.gen_range(0..cols) as f32 * GRID_SPACING,
                    rng.gen_range(0..rows) as f32 * GRID_SPACING,
                ),
                phase: rng.gen::<f32>() * TAU,
                speed: rng.gen_range(NODE_SPEED_MIN..NODE_SPEED_MAX) * motion,
                size: rng.gen_range(NODE_SIZE_MIN..NODE_SIZE_MAX),
            })
            .collect();

        Self {
            traces,
            nodes,
            width,
            height,
        }
    }
}
