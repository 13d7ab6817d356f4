//! Minimal scene graph: parented nodes with local transforms and optional
//! ray-testable shapes.
//!
//! Nodes are never removed during a session, so a `NodeId` stays valid for
//! the lifetime of the graph that issued it.

use crate::error::{Result, ShowroomError};
use crate::ray::{ray_aabb, ray_sphere, ray_triangle, Ray};
use glam::{Mat4, Quat, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Box centred on the node origin.
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
    Mesh { triangles: Vec<[Vec3; 3]> },
}

impl Shape {
    /// Intersect a ray already expressed in the node's local space.
    pub fn intersect_local(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        match self {
            Shape::Cuboid { half_extents } => ray_aabb(origin, dir, -*half_extents, *half_extents),
            Shape::Sphere { radius } => ray_sphere(origin, dir, Vec3::ZERO, *radius),
            Shape::Mesh { triangles } => triangles
                .iter()
                .filter_map(|tri| ray_triangle(origin, dir, tri))
                .min_by(|a, b| a.total_cmp(b)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            translation,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    #[inline]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub transform: Transform,
    pub shape: Option<Shape>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl SceneNode {
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// A shaped node crossed by a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub node: NodeId,
    /// World-space distance from the ray origin.
    pub distance: f32,
    pub point: Vec3,
}

pub type HitList = SmallVec<[RayHit; 8]>;

#[derive(Clone, Debug, Default)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
    roots: Vec<NodeId>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, name: &str, transform: Transform, shape: Option<Shape>) -> NodeId {
        let id = self.push(name, transform, shape, None);
        self.roots.push(id);
        id
    }

    pub fn add_child(
        &mut self,
        parent: NodeId,
        name: &str,
        transform: Transform,
        shape: Option<Shape>,
    ) -> Result<NodeId> {
        if self.node(parent).is_none() {
            return Err(ShowroomError::UnknownNode(parent));
        }
        let id = self.push(name, transform, shape, Some(parent));
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn push(
        &mut self,
        name: &str,
        transform: Transform,
        shape: Option<Shape>,
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SceneNode {
            name: name.to_string(),
            transform,
            shape,
            parent,
            children: Vec::new(),
        });
        id
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.index())
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Local-to-world matrix of `id`, composed through every ancestor.
    pub fn world_matrix(&self, id: NodeId) -> Option<Mat4> {
        let mut node = self.node(id)?;
        let mut world = node.transform.matrix();
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.transform.matrix() * world;
        }
        Some(world)
    }

    pub fn world_position(&self, id: NodeId) -> Option<Vec3> {
        self.world_matrix(id).map(|m| m.transform_point3(Vec3::ZERO))
    }

    pub fn translation_y(&self, id: NodeId) -> Option<f32> {
        self.node(id).map(|n| n.transform.translation.y)
    }

    pub fn set_translation_y(&mut self, id: NodeId, y: f32) {
        if let Some(node) = self.node_mut(id) {
            node.transform.translation.y = y;
        }
    }

    /// `id` followed by all of its descendants, depth-first.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            let Some(node) = self.node(next) else {
                continue;
            };
            out.push(next);
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }

    /// Every shaped node crossed by `ray`, nearest first.
    pub fn intersect_ray(&self, ray: &Ray) -> HitList {
        let mut hits = HitList::new();
        if ray.is_degenerate() {
            return hits;
        }
        let mut stack: Vec<(NodeId, Mat4)> =
            self.roots.iter().map(|&r| (r, Mat4::IDENTITY)).collect();
        while let Some((id, parent_world)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            let world = parent_world * node.transform.matrix();
            if let Some(shape) = &node.shape {
                if world.determinant().abs() > f32::EPSILON {
                    let inv = world.inverse();
                    let local_origin = inv.transform_point3(ray.origin);
                    let local_dir = inv.transform_vector3(ray.direction);
                    if let Some(t) = shape.intersect_local(local_origin, local_dir) {
                        hits.push(RayHit {
                            node: id,
                            distance: t,
                            point: ray.at(t),
                        });
                    }
                }
            }
            stack.extend(node.children.iter().map(|&c| (c, world)));
        }
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits
    }

    pub fn nearest_hit(&self, ray: &Ray) -> Option<RayHit> {
        self.intersect_ray(ray).into_iter().next()
    }
}
