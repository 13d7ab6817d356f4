use crate::camera::Camera;
use crate::constants::OCCLUSION_EPSILON;
use crate::ray::Ray;
use crate::scene::SceneGraph;
use glam::Vec3;

/// Whether any scene geometry lies between the camera and `anchor`.
///
/// The nearest hit must be closer than the anchor itself; a hit at the
/// anchor's distance (its own surface) or beyond leaves it visible. An empty
/// scene never occludes.
pub fn is_occluded(anchor: Vec3, camera: &Camera, scene: &SceneGraph) -> bool {
    let anchor_distance = camera.position.distance(anchor);
    if anchor_distance <= f32::EPSILON {
        return false;
    }
    let ray = Ray::toward(camera.position, anchor);
    match scene.nearest_hit(&ray) {
        Some(hit) => hit.distance < anchor_distance - OCCLUSION_EPSILON,
        None => false,
    }
}
