//! Platform-independent core of the portfolio canvas backdrops.
//!
//! Nothing here touches the DOM: the web front-end supplies a [`Surface`]
//! and a [`FrameScheduler`], feeds [`EnvironmentChange`]s in, and the
//! [`Renderer`] does the rest. This keeps the whole state machine testable
//! on the host.

pub mod config;
pub mod constants;
pub mod environment;
pub mod painter;
pub mod palette;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod signal;
pub mod sizing;
pub mod storage;
pub mod store;
pub mod surface;
pub mod theme;

pub use config::{BackdropConfig, ConfigError, Variant};
pub use environment::{Environment, EnvironmentChange};
pub use palette::{ColorStop, Palette, PaletteCache, Rgba};
pub use renderer::{Renderer, RendererState};
pub use scene::Scene;
pub use session::{SessionFlags, INTRO_SEEN_KEY};
pub use signal::{Signal, SubscriptionId};
pub use sizing::{measure, CanvasMetrics, Size};
pub use storage::{MemoryStorage, StorageBackend, StorageError};
pub use store::{ThemeStore, THEME_STORAGE_KEY};
pub use surface::{FrameHandle, FrameScheduler, Surface};
pub use theme::{Theme, ThemePreference};
