//! The host inputs a backdrop reacts to, merged into one change stream.
//!
//! Window resizes, container resize notifications, the colour-scheme and
//! reduced-motion media queries all arrive as [`EnvironmentChange`] values on
//! a single [`crate::signal::Signal`], so the renderer subscribes once.

use crate::sizing::{measure, CanvasMetrics, Size};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    pub container: Option<Size>,
    pub viewport: Size,
    pub device_pixel_ratio: f64,
    pub theme: Theme,
    pub reduced_motion: bool,
}

impl Environment {
    pub fn metrics(&self) -> CanvasMetrics {
        measure(self.container, self.viewport, self.device_pixel_ratio)
    }

    /// Fold a change in; returns whether anything actually differs.
    pub fn apply(&mut self, change: &EnvironmentChange) -> bool {
        let before = *self;
        match *change {
            EnvironmentChange::Resized {
                container,
                viewport,
                device_pixel_ratio,
            } => {
                self.container = container;
                self.viewport = viewport;
                self.device_pixel_ratio = device_pixel_ratio;
            }
            EnvironmentChange::Theme(theme) => self.theme = theme,
            EnvironmentChange::ReducedMotion(reduced) => self.reduced_motion = reduced,
        }
        *self != before
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EnvironmentChange {
    Resized {
        container: Option<Size>,
        viewport: Size,
        device_pixel_ratio: f64,
    },
    Theme(Theme),
    ReducedMotion(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment {
            container: Some(Size::new(640.0, 480.0)),
            viewport: Size::new(1280.0, 720.0),
            device_pixel_ratio: 1.0,
            theme: Theme::Dark,
            reduced_motion: false,
        }
    }

    #[test]
    fn repeated_change_is_not_a_difference() {
        let mut e = env();
        assert!(e.apply(&EnvironmentChange::Theme(Theme::Light)));
        assert!(!e.apply(&EnvironmentChange::Theme(Theme::Light)));
        assert!(e.apply(&EnvironmentChange::ReducedMotion(true)));
    }

    #[test]
    fn resize_updates_metrics() {
        let mut e = env();
        let changed = e.apply(&EnvironmentChange::Resized {
            container: Some(Size::new(320.0, 200.0)),
            viewport: Size::new(1280.0, 720.0),
            device_pixel_ratio: 2.0,
        });
        assert!(changed);
        let m = e.metrics();
        assert_eq!((m.pixel_width, m.pixel_height), (640, 400));
    }
}
