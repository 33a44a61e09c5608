// Host-side fakes standing in for the canvas and requestAnimationFrame.

#![allow(dead_code)]

use backdrop_core::{
    CanvasMetrics, ColorStop, Environment, FrameHandle, FrameScheduler, Renderer, Rgba, Size,
    Surface, Theme,
};
use glam::Vec2;
use std::cell::RefCell;
use std::time::Duration;

#[derive(Default)]
pub struct RecordingSurface {
    pub frames: usize,
    pub resizes: Vec<CanvasMetrics>,
    // circles and lines hold only the most recent frame
    pub circles: Vec<(Vec2, f32, Rgba)>,
    pub lines: Vec<(Vec2, Vec2, Rgba)>,
    pub washes: usize,
}

impl Surface for RecordingSurface {
    fn resize(&mut self, metrics: &CanvasMetrics) {
        self.resizes.push(*metrics);
    }

    fn clear(&mut self, _width: f32, _height: f32) {
        self.frames += 1;
        self.circles.clear();
        self.lines.clear();
    }

    fn fill_linear_gradient(
        &mut self,
        _from: Vec2,
        _to: Vec2,
        _stops: &[ColorStop],
        _width: f32,
        _height: f32,
    ) {
        self.washes += 1;
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, _line_width: f32) {
        self.lines.push((from, to, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.circles.push((center, radius, color));
    }
}

#[derive(Default)]
pub struct SchedulerLog {
    next_id: i32,
    pub outstanding: Vec<FrameHandle>,
    pub requested: usize,
    pub cancelled: Vec<FrameHandle>,
    // when set, requests are counted but refused
    pub refuse: bool,
}

/// Records frame requests; tests deliver frames explicitly with [`fire`].
#[derive(Default)]
pub struct ManualScheduler {
    pub log: RefCell<SchedulerLog>,
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let log = self.log.get_mut();
        log.next_id += 1;
        log.requested += 1;
        if log.refuse {
            return None;
        }
        let handle = FrameHandle(log.next_id);
        log.outstanding.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let log = self.log.get_mut();
        log.outstanding.retain(|h| *h != handle);
        log.cancelled.push(handle);
    }
}

pub type TestRenderer = Renderer<RecordingSurface, ManualScheduler>;

/// Deliver the pending frame callback, as the browser would on the next
/// refresh. Returns false when nothing was scheduled.
pub fn fire(renderer: &mut TestRenderer, now_ms: u64) -> bool {
    let Some(handle) = renderer.pending_frame() else {
        return false;
    };
    renderer
        .scheduler()
        .log
        .borrow_mut()
        .outstanding
        .retain(|h| *h != handle);
    renderer.on_frame(Duration::from_millis(now_ms));
    true
}

pub fn requested(renderer: &TestRenderer) -> usize {
    renderer.scheduler().log.borrow().requested
}

pub fn outstanding(renderer: &TestRenderer) -> usize {
    renderer.scheduler().log.borrow().outstanding.len()
}

pub fn environment(width: f64, height: f64, reduced_motion: bool) -> Environment {
    Environment {
        container: Some(Size::new(width, height)),
        viewport: Size::new(1920.0, 1080.0),
        device_pixel_ratio: 1.0,
        theme: Theme::Dark,
        reduced_motion,
    }
}
