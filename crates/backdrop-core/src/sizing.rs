//! Logical and backing-store canvas dimensions.
//!
//! Drawing happens in logical (CSS) pixels; the backing store is scaled by the
//! device pixel ratio so lines stay crisp on high-density displays.

use crate::constants::MAX_DEVICE_PIXEL_RATIO;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasMetrics {
    pub logical_width: f32,
    pub logical_height: f32,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Transform scale mapping logical units to backing-store pixels.
    pub scale: f64,
}

impl CanvasMetrics {
    pub fn area(&self) -> f32 {
        self.logical_width * self.logical_height
    }
}

/// Compute canvas metrics from the container box, falling back to the
/// viewport when the container is missing or has collapsed to zero.
pub fn measure(container: Option<Size>, viewport: Size, device_pixel_ratio: f64) -> CanvasMetrics {
    let logical = match container {
        Some(c) if c.is_usable() => c,
        _ => {
            log::debug!("[sizing] container unavailable, using viewport {:?}", viewport);
            viewport
        }
    };
    let width = if logical.width.is_finite() {
        logical.width.max(0.0)
    } else {
        0.0
    };
    let height = if logical.height.is_finite() {
        logical.height.max(0.0)
    } else {
        0.0
    };

    let scale = effective_pixel_ratio(device_pixel_ratio);
    CanvasMetrics {
        logical_width: width as f32,
        logical_height: height as f32,
        pixel_width: ((width * scale).floor() as u32).max(1),
        pixel_height: ((height * scale).floor() as u32).max(1),
        scale,
    }
}

#[inline]
pub fn effective_pixel_ratio(device_pixel_ratio: f64) -> f64 {
    if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio.clamp(1.0, MAX_DEVICE_PIXEL_RATIO)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn container_wins_when_measurable() {
        let m = measure(Some(Size::new(800.0, 400.0)), Size::new(1280.0, 720.0), 1.5);
        assert_eq!(m.logical_width, 800.0);
        assert_eq!(m.logical_height, 400.0);
        assert_eq!(m.pixel_width, 1200);
        assert_eq!(m.pixel_height, 600);
        assert_eq!(m.scale, 1.5);
    }

    #[test]
    fn zero_container_falls_back_to_viewport() {
        let viewport = Size::new(1024.0, 768.0);
        let collapsed = measure(Some(Size::new(0.0, 300.0)), viewport, 1.0);
        let missing = measure(None, viewport, 1.0);
        assert_eq!(collapsed, missing);
        assert_eq!(missing.logical_width, 1024.0);
    }

    #[test]
    fn pixel_ratio_is_clamped() {
        assert_eq!(effective_pixel_ratio(3.0), MAX_DEVICE_PIXEL_RATIO);
        assert_eq!(effective_pixel_ratio(0.0), 1.0);
        assert_eq!(effective_pixel_ratio(f64::NAN), 1.0);
        assert_eq!(effective_pixel_ratio(0.5), 1.0);
    }

    #[test]
    fn measuring_twice_is_idempotent() {
        let a = measure(Some(Size::new(333.3, 211.7)), Size::new(1.0, 1.0), 1.25);
        let b = measure(Some(Size::new(333.3, 211.7)), Size::new(1.0, 1.0), 1.25);
        assert_eq!(a, b);
    }

    #[test]
    fn backing_store_is_never_empty() {
        let m = measure(None, Size::new(0.0, 0.0), 2.0);
        assert_eq!((m.pixel_width, m.pixel_height), (1, 1));
    }
}
