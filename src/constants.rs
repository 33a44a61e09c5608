// DOM hooks and media queries used by the web front-end.
// Kept free of web-sys types so host-side tests can include!() this file.

// Accessibility preference: animation should be minimised
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// OS colour scheme, consulted while the theme preference is "system"
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// Class toggled on <html> for the resolved theme, plus a data attribute
pub const DARK_THEME_CLASS: &str = "dark";
pub const THEME_DATA_ATTRIBUTE: &str = "data-theme";

// Used when the window cannot report its inner size
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1280.0;
pub const FALLBACK_VIEWPORT_HEIGHT: f64 = 720.0;
