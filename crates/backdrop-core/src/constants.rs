// Scene sizing and animation tuning constants shared by both backdrop variants.

// Device pixel ratio clamp; higher ratios cost fill rate without visible gain
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Particle network: one particle per NETWORK_AREA_PER_PARTICLE logical px² at density 1.0
pub const NETWORK_AREA_PER_PARTICLE: f32 = 12_000.0;
pub const NETWORK_MIN_PARTICLES: usize = 24;
pub const NETWORK_MAX_PARTICLES: usize = 96;
pub const PARTICLE_RADIUS: f32 = 1.6;
// Per-frame displacement at speed 1.0 (logical px)
pub const PARTICLE_STEP_PX: f32 = 1.0;
// Link alpha at zero distance, fading linearly to 0 at the link distance
pub const LINK_ALPHA_MAX: f32 = 0.55;
pub const LINK_WIDTH: f32 = 0.8;

// Blueprint grid
pub const GRID_SPACING: f32 = 48.0;
pub const GRID_LINE_WIDTH: f32 = 0.5;
pub const BLUEPRINT_AREA_PER_TRACE: f32 = 60_000.0;
pub const BLUEPRINT_MIN_TRACES: usize = 6;
pub const BLUEPRINT_MAX_TRACES: usize = 24;
pub const BLUEPRINT_AREA_PER_NODE: f32 = 45_000.0;
pub const BLUEPRINT_MIN_NODES: usize = 8;
pub const BLUEPRINT_MAX_NODES: usize = 32;

// Trace attribute ranges (speed in px/s, length and width in px)
pub const TRACE_SPEED_MIN: f32 = 40.0;
pub const TRACE_SPEED_MAX: f32 = 120.0;
pub const TRACE_LENGTH_MIN: f32 = 60.0;
pub const TRACE_LENGTH_MAX: f32 = 180.0;
pub const TRACE_WIDTH_MIN: f32 = 1.0;
pub const TRACE_WIDTH_MAX: f32 = 1.8;

// Pulse node ranges (speed in rad/s, size in px)
pub const NODE_SPEED_MIN: f32 = 0.8;
pub const NODE_SPEED_MAX: f32 = 2.0;
pub const NODE_SIZE_MIN: f32 = 1.5;
pub const NODE_SIZE_MAX: f32 = 3.5;
pub const PULSE_AMPLITUDE: f32 = 0.35; // fraction of size added at the sine peak
