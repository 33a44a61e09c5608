//! Paints one frame of a scene onto a [`Surface`].
//!
//! Painting never mutates the scene; the renderer advances particles before
//! calling in here so a reduced-motion frame is simply a paint at `t = 0`.

use crate::config::BackdropConfig;
use crate::constants::{GRID_LINE_WIDTH, GRID_SPACING, LINK_ALPHA_MAX, LINK_WIDTH, PARTICLE_RADIUS};
use crate::palette::Palette;
use crate::scene::{Axis, BlueprintScene, NetworkScene, Scene};
use crate::surface::Surface;
use glam::Vec2;

pub fn paint_frame<S: Surface + ?Sized>(
    surface: &mut S,
    scene: &Scene,
    palette: &Palette,
    config: &BackdropConfig,
    t: f32,
) {
    let (width, height) = match scene {
        Scene::Network(n) => (n.width, n.height),
        Scene::Blueprint(b) => (b.width, b.height),
    };
    surface.clear(width, height);
    surface.fill_linear_gradient(
        Vec2::ZERO,
        Vec2::new(width, height),
        &palette.wash,
        width,
        height,
    );
    match scene {
        Scene::Network(n) => paint_network(surface, n, palette, config),
        Scene::Blueprint(b) => paint_blueprint(surface, b, palette, t),
    }
}

fn paint_network<S: Surface + ?Sized>(
    surface: &mut S,
    scene: &NetworkScene,
    palette: &Palette,
    config: &BackdropConfig,
) {
    scene.for_each_link(config.link_distance, |a, b, closeness| {
        let color = palette.link.with_alpha(closeness * LINK_ALPHA_MAX);
        surface.stroke_line(a, b, color, LINK_WIDTH);
    });
    for p in &scene.particles {
        surface.fill_circle(p.pos, PARTICLE_RADIUS, palette.particle);
    }
}

fn paint_blueprint<S: Surface + ?Sized>(
    surface: &mut S,
    scene: &BlueprintScene,
    palette: &Palette,
    t: f32,
) {
    let (w, h) = (scene.width, scene.height);

    let mut x = 0.0;
    while x <= w {
        surface.stroke_line(
            Vec2::new(x, 0.0),
            Vec2::new(x, h),
            palette.grid,
            GRID_LINE_WIDTH,
        );
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= h {
        surface.stroke_line(
            Vec2::new(0.0, y),
            Vec2::new(w, y),
            palette.grid,
            GRID_LINE_WIDTH,
        );
        y += GRID_SPACING;
    }

    for trace in &scene.traces {
        let offset = trace.line_offset();
        let (from, to) = match trace.axis {
            Axis::Horizontal => match trace.segment(t, w) {
                Some((s, e)) => (Vec2::new(s, offset), Vec2::new(e, offset)),
                None => continue,
            },
            Axis::Vertical => match trace.segment(t, h) {
                Some((s, e)) => (Vec2::new(offset, s), Vec2::new(offset, e)),
                None => continue,
            },
        };
        surface.stroke_line(from, to, palette.trace, trace.width);
    }

    for node in &scene.nodes {
        surface.fill_circle(node.pos, node.radius(t).max(0.0), palette.node);
    }
}
