use glam::Vec3;

// DOM wiring and scene layout for the showroom page.

// Elements
pub const CANVAS_ID: &str = "app-canvas";
pub const RETURN_BUTTON_ID: &str = "return-button";
pub const MARKER_ID_PREFIX: &str = "point-"; // + marker id
pub const PANEL_ID_PREFIX: &str = "info-"; // + object name
pub const VISIBLE_CLASS: &str = "visible";

// Shelving
pub const SHELF_Y: f32 = 2.2;
pub const SHELF_Z: f32 = 0.9;
pub const SHELF_HALF_EXTENTS: Vec3 = Vec3::new(5.0, 0.1, 0.6);
pub const SHELF_SPACING: f32 = 3.0; // vertical distance between planks
pub const SHELF_COUNT: usize = 2;

// Phones stand on the lower plank, spaced along X
pub const PHONE_Y: f32 = 3.03;
pub const PHONE_Z: f32 = 0.9;
pub const PHONE_SPACING: f32 = 3.0;
pub const PHONE_DEPTH: f32 = 0.04; // half thickness of a phone body
pub const ANCHOR_FORWARD: f32 = 0.1; // anchor sits in front of the screen
