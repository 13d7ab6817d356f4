use crate::camera::{Camera, Viewport};
use crate::registry::{ObjectId, PickableRegistry};
use crate::scene::SceneGraph;
use glam::Vec2;

/// Resolve a viewport-relative pointer position to the selectable object
/// under it.
///
/// Only the nearest hit counts: a shelf in front of a phone hides the phone
/// from the pointer, and an unregistered leaf resolves to `None`.
pub fn pick(
    pointer: Vec2,
    viewport: Viewport,
    camera: &Camera,
    scene: &SceneGraph,
    registry: &PickableRegistry,
) -> Option<ObjectId> {
    if viewport.is_empty() {
        return None;
    }
    let ndc = viewport.to_ndc(pointer.x, pointer.y);
    let ray = camera.ray_through_ndc(ndc);
    let hit = scene.nearest_hit(&ray)?;
    let picked = registry.resolve(hit.node);
    log::debug!(
        "[pick] ndc=({:.3},{:.3}) node={:?} dist={:.3} -> {:?}",
        ndc.x,
        ndc.y,
        hit.node,
        hit.distance,
        picked
    );
    picked
}
