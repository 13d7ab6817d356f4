//! Interface to the external asset provider. The core never performs I/O;
//! a host supplies a [`ModelLoader`] and the resolved models are installed
//! into the scene and registry.

use crate::error::Result;
use crate::registry::TargetKind;
use crate::scene::{NodeId, SceneGraph, Shape, Transform};
use glam::Vec3;
use std::future::Future;

/// One node of a loaded model, before it is placed in a scene.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelNode {
    pub name: String,
    pub transform: Transform,
    pub shape: Option<Shape>,
    pub children: Vec<ModelNode>,
}

impl ModelNode {
    pub fn group(name: &str, transform: Transform) -> Self {
        Self {
            name: name.to_string(),
            transform,
            shape: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(name: &str, transform: Transform, shape: Shape) -> Self {
        Self {
            name: name.to_string(),
            transform,
            shape: Some(shape),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: ModelNode) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModelData {
    pub root: ModelNode,
}

/// A selectable target in the showroom catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogEntry {
    pub name: String,
    pub path: String,
    pub placement: Transform,
    pub anchor: Vec3,
    pub kind: TargetKind,
}

pub trait ModelLoader {
    type Load: Future<Output = Result<ModelData>>;

    fn load(&self, path: &str) -> Self::Load;
}

/// Load every catalog entry, reporting each outcome alongside its entry.
pub async fn load_catalog<L: ModelLoader>(
    loader: &L,
    entries: &[CatalogEntry],
) -> Vec<(CatalogEntry, Result<ModelData>)> {
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        let result = loader.load(&entry.path).await;
        if let Err(e) = &result {
            log::error!("[assets] {} failed: {}", entry.name, e);
        }
        out.push((entry.clone(), result));
    }
    out
}

/// Copy a model tree under `parent`, returning the id of its root.
pub fn instantiate(scene: &mut SceneGraph, parent: NodeId, node: &ModelNode) -> Result<NodeId> {
    let id = scene.add_child(parent, &node.name, node.transform, node.shape.clone())?;
    for child in &node.children {
        instantiate(scene, id, child)?;
    }
    Ok(id)
}
