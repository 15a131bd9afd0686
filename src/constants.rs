// Browser-side rendering constants.

// Multisample count for the color target; the scene is antialiased.
pub const MSAA_SAMPLES: u32 = 4;

// Frames the surface may queue ahead of the display.
pub const MAX_FRAME_LATENCY: u32 = 2;

// Bytes per vertex position (vec3<f32>).
pub const POSITION_STRIDE: u64 = 12;
