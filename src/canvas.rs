use backdrop_core::{CanvasMetrics, ColorStop, Rgba, Surface};
use glam::Vec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// 2D canvas implementation of the backdrop drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// `None` when the environment cannot provide a 2D context; the
    /// backdrop then simply does not render.
    pub fn acquire(canvas: &web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        Some(Self {
            canvas: canvas.clone(),
            ctx,
        })
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, metrics: &CanvasMetrics) {
        // setting the size also resets the context transform
        self.canvas.set_width(metrics.pixel_width);
        self.canvas.set_height(metrics.pixel_height);
        _ = self
            .ctx
            .set_transform(metrics.scale, 0.0, 0.0, metrics.scale, 0.0, 0.0);
        log::debug!(
            "[sizing] canvas {}x{} @{}",
            metrics.pixel_width,
            metrics.pixel_height,
            metrics.scale
        );
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_linear_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        stops: &[ColorStop],
        width: f32,
        height: f32,
    ) {
        let gradient = self
            .ctx
            .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        for stop in stops {
            _ = gradient.add_color_stop(stop.offset, &stop.color.css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, line_width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(line_width as f64);
        self.ctx.stroke();
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill();
    }
}
