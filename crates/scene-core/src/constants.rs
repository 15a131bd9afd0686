// Shared scene tuning constants. `SceneConfig::default()` is built from these.

// Host page
pub const CONTAINER_ID: &str = "three-container";

// Colors (sRGB hex)
pub const BACKGROUND_HEX: u32 = 0x121212;
pub const ACCENT_HEX: u32 = 0x4CAF50; // mesh, edges and point light
pub const AMBIENT_HEX: u32 = 0x404040;

// Camera
pub const CAMERA_FOV_DEGREES: f32 = 75.0; // vertical field of view
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 5.0;

// Geometry
pub const DODECAHEDRON_RADIUS: f32 = 2.0;
pub const EDGE_THRESHOLD_DEGREES: f32 = 1.0; // min dihedral deviation for a visible edge

// Materials
pub const MESH_OPACITY: f32 = 0.2; // translucent backdrop shape
pub const LINE_OPACITY: f32 = 1.0;

// Lights
pub const POINT_LIGHT_INTENSITY: f32 = 20.0;
pub const POINT_LIGHT_DISTANCE: f32 = 100.0; // falloff radius
pub const POINT_LIGHT_POSITION: [f32; 3] = [5.0, 5.0, 5.0];
pub const AMBIENT_INTENSITY: f32 = 5.0;

// Per-frame animation
pub const ROTATION_STEP_X: f32 = 0.003; // radians per frame
pub const ROTATION_STEP_Y: f32 = 0.005; // radians per frame
pub const PARALLAX_SCALE: f32 = 0.5; // mesh/line offset per unit of pointer
pub const LIGHT_SWING_SCALE: f32 = 8.0; // light offset per unit of pointer

// Node names
pub const MESH_NAME: &str = "interactiveMesh";
pub const LINE_NAME: &str = "interactiveLine";
pub const LIGHT_NAME: &str = "interactiveLight";
pub const AMBIENT_NAME: &str = "ambientLight";

// Diagnostics
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;
