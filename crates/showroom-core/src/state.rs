use crate::camera::{Camera, Viewport};
use crate::registry::PickableRegistry;
use crate::scene::SceneGraph;
use crate::tween::{AnimationTarget, TargetKey, TweenValue};

/// Everything the picker, scheduler and projector read or animate. Owned by
/// one [`crate::Showroom`] and handed out by reference.
#[derive(Clone, Debug)]
pub struct ShowroomState {
    pub scene: SceneGraph,
    pub camera: Camera,
    pub registry: PickableRegistry,
    pub viewport: Viewport,
}

impl ShowroomState {
    pub fn new(camera: Camera, viewport: Viewport) -> Self {
        let mut camera = camera;
        camera.set_viewport(viewport);
        Self {
            scene: SceneGraph::new(),
            camera,
            registry: PickableRegistry::new(),
            viewport,
        }
    }
}

impl AnimationTarget for ShowroomState {
    fn read(&self, key: TargetKey) -> Option<TweenValue> {
        match key {
            TargetKey::CameraPosition => Some(TweenValue::Vector(self.camera.position)),
            TargetKey::CameraRotation => Some(TweenValue::Vector(self.camera.rotation)),
            TargetKey::ObjectY(id) => {
                let root = self.registry.get(id)?.root;
                self.scene.translation_y(root).map(TweenValue::Scalar)
            }
        }
    }

    fn write(&mut self, key: TargetKey, value: TweenValue) {
        match (key, value) {
            (TargetKey::CameraPosition, TweenValue::Vector(v)) => self.camera.position = v,
            (TargetKey::CameraRotation, TweenValue::Vector(v)) => self.camera.rotation = v,
            (TargetKey::ObjectY(id), TweenValue::Scalar(y)) => {
                if let Some(root) = self.registry.get(id).map(|o| o.root) {
                    self.scene.set_translation_y(root, y);
                }
            }
            (key, value) => log::warn!("[tween] ignoring {:?} written to {}", value, key),
        }
    }
}
