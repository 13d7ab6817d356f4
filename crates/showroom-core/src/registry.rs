//! Pickable registry: resolves renderable leaves to the selectable object
//! that owns them.

use crate::error::{Result, ShowroomError};
use crate::scene::{NodeId, SceneGraph};
use fnv::FnvHashMap;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u16);

impl ObjectId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Framing category of a target. `DepthClearance` targets get extra camera
/// distance along Z when focused.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TargetKind {
    #[default]
    Standard,
    DepthClearance,
}

#[derive(Clone, Debug)]
pub struct SelectableObject {
    pub name: String,
    /// Scene node whose transform is animated; owned by the scene graph.
    pub root: NodeId,
    /// World-space point used for camera framing and overlay tracking.
    pub anchor: Vec3,
    pub kind: TargetKind,
    /// Vertical position captured when floating starts; `None` while idle.
    pub baseline_y: Option<f32>,
}

#[derive(Clone, Debug, Default)]
pub struct PickableRegistry {
    objects: Vec<SelectableObject>,
    leaves: FnvHashMap<NodeId, ObjectId>,
}

impl PickableRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `root` and every shaped node beneath it as one selectable
    /// object.
    pub fn register(
        &mut self,
        scene: &SceneGraph,
        name: &str,
        root: NodeId,
        anchor: Vec3,
        kind: TargetKind,
    ) -> Result<ObjectId> {
        if self.find(name).is_some() {
            return Err(ShowroomError::DuplicateObject(name.to_string()));
        }
        if scene.node(root).is_none() {
            return Err(ShowroomError::UnknownNode(root));
        }
        let leaves: Vec<NodeId> = scene
            .descendants(root)
            .into_iter()
            .filter(|&n| scene.node(n).is_some_and(|node| node.shape.is_some()))
            .collect();
        if let Some((&leaf, &owner)) = leaves
            .iter()
            .find_map(|leaf| self.leaves.get_key_value(leaf))
        {
            return Err(ShowroomError::LeafAlreadyClaimed { leaf, owner });
        }

        let id = ObjectId(self.objects.len() as u16);
        for &leaf in &leaves {
            self.leaves.insert(leaf, id);
        }
        self.objects.push(SelectableObject {
            name: name.to_string(),
            root,
            anchor,
            kind,
            baseline_y: None,
        });
        log::info!(
            "[assets] registered `{}` as {:?} with {} pickable leaves",
            name,
            id,
            leaves.len()
        );
        Ok(id)
    }

    #[inline]
    pub fn resolve(&self, leaf: NodeId) -> Option<ObjectId> {
        self.leaves.get(&leaf).copied()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SelectableObject> {
        self.objects.get(id.index())
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SelectableObject> {
        self.objects.get_mut(id.index())
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .position(|o| o.name == name)
            .map(|i| ObjectId(i as u16))
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SelectableObject)> {
        self.objects
            .iter()
            .enumerate()
            .map(|(i, o)| (ObjectId(i as u16), o))
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves.len()
    }
}
