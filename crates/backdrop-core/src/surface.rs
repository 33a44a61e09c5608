use crate::palette::{ColorStop, Rgba};
use crate::sizing::CanvasMetrics;
use glam::Vec2;

/// Drawing target for a backdrop. All coordinates are logical pixels; the
/// implementation maps them onto its backing store after [`Surface::resize`].
pub trait Surface {
    /// Resize the backing store and install the logical-to-pixel transform.
    fn resize(&mut self, metrics: &CanvasMetrics);
    fn clear(&mut self, width: f32, height: f32);
    /// Fill the whole `width` x `height` area with a linear gradient.
    fn fill_linear_gradient(
        &mut self,
        from: Vec2,
        to: Vec2,
        stops: &[ColorStop],
        width: f32,
        height: f32,
    );
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, line_width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
}

/// Opaque handle for a requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host primitive that invokes the renderer once per display refresh.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}
