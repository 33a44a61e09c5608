//! Colours for the backdrops, derived purely from the resolved theme.

use crate::theme::Theme;
use smallvec::{smallvec, SmallVec};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS colour string accepted by canvas `fillStyle`/`strokeStyle`.
    pub fn css(&self) -> String {
        format!("rgba({}, {}, {}, {:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Diagonal background wash, top-left to bottom-right.
    pub wash: SmallVec<[ColorStop; 4]>,
    pub grid: Rgba,
    pub link: Rgba,
    pub particle: Rgba,
    pub trace: Rgba,
    pub node: Rgba,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                wash: smallvec![
                    ColorStop {
                        offset: 0.0,
                        color: Rgba::new(59, 130, 246, 0.06),
                    },
                    ColorStop {
                        offset: 1.0,
                        color: Rgba::new(14, 165, 233, 0.02),
                    },
                ],
                grid: Rgba::new(30, 64, 175, 0.08),
                link: Rgba::new(37, 99, 235, 1.0),
                particle: Rgba::new(29, 78, 216, 0.55),
                trace: Rgba::new(2, 132, 199, 0.45),
                node: Rgba::new(37, 99, 235, 0.5),
            },
            Theme::Dark => Self {
                wash: smallvec![
                    ColorStop {
                        offset: 0.0,
                        color: Rgba::new(56, 189, 248, 0.08),
                    },
                    ColorStop {
                        offset: 1.0,
                        color: Rgba::new(99, 102, 241, 0.03),
                    },
                ],
                grid: Rgba::new(148, 163, 184, 0.07),
                link: Rgba::new(125, 211, 252, 1.0),
                particle: Rgba::new(186, 230, 253, 0.7),
                trace: Rgba::new(56, 189, 248, 0.6),
                node: Rgba::new(165, 180, 252, 0.65),
            },
        }
    }
}

/// Memoises the palette for the last theme it was asked for.
#[derive(Debug, Default)]
pub struct PaletteCache {
    cached: Option<(Theme, Palette)>,
}

impl PaletteCache {
    pub fn get(&mut self, theme: Theme) -> &Palette {
        if !matches!(&self.cached, Some((t, _)) if *t == theme) {
            log::debug!("[theme] deriving palette for {}", theme.as_str());
            self.cached = None;
        }
        &self
            .cached
            .get_or_insert_with(|| (theme, Palette::for_theme(theme)))
            .1
    }
}
