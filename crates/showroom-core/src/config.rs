use crate::constants::*;
use crate::presentation::UiLayout;
use glam::Vec3;

/// Runtime tuning for the showroom. `Default` uses the values in
/// `constants.rs`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShowroomConfig {
    pub framing_offset: Vec3,
    pub depth_clearance_step: f32,
    pub camera_transition_secs: f32,
    pub float_amplitude: f32,
    pub float_half_cycle_secs: f32,
    pub settle_delay_secs: f32,
    pub initial_camera_position: Vec3,
    pub initial_camera_rotation: Vec3,
    pub layout: UiLayout,
}

impl Default for ShowroomConfig {
    fn default() -> Self {
        Self {
            framing_offset: FRAMING_OFFSET,
            depth_clearance_step: DEPTH_CLEARANCE_STEP,
            camera_transition_secs: CAMERA_TRANSITION_SECS,
            float_amplitude: FLOAT_AMPLITUDE,
            float_half_cycle_secs: FLOAT_HALF_CYCLE_SECS,
            settle_delay_secs: SCENE_SETTLE_DELAY_SECS,
            initial_camera_position: INITIAL_CAMERA_POSITION,
            initial_camera_rotation: INITIAL_CAMERA_ROTATION,
            layout: UiLayout::default(),
        }
    }
}
