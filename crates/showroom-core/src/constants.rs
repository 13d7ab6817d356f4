use glam::Vec3;

// Shared tuning constants for the showroom interaction engine.

// Camera
pub const CAMERA_FOVY_DEGREES: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;
pub const INITIAL_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 5.0, 5.0);
pub const INITIAL_CAMERA_ROTATION: Vec3 = Vec3::ZERO; // Euler XYZ, radians

// Framing
pub const FRAMING_OFFSET: Vec3 = Vec3::new(10.0, 2.0, -1.0); // added to a target's anchor
pub const DEPTH_CLEARANCE_STEP: f32 = 1.0; // extra +Z for deep targets
pub const CAMERA_TRANSITION_SECS: f32 = 1.5;

// Floating idle animation
pub const FLOAT_AMPLITUDE: f32 = 1.0; // world units above baseline
pub const FLOAT_HALF_CYCLE_SECS: f32 = 1.0;

// Overlay
pub const SCENE_SETTLE_DELAY_SECS: f32 = 0.5; // wait after load before showing markers
pub const OCCLUSION_EPSILON: f32 = 1e-4; // tolerance for self-hits on the anchor surface

// Ray casting
pub const RAY_PARALLEL_EPSILON: f32 = 1e-8;
