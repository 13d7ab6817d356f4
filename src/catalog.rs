// The showroom's fixed catalog and procedural stand-ins for its models.
//
// Real glTF loading lives outside this crate; `ProxyLoader` resolves every
// catalog path to box/sphere proxies so picking and framing work the same
// way they would against the loaded meshes.

use crate::constants::*;
use glam::Vec3;
use showroom_core::{
    CatalogEntry, ModelData, ModelLoader, ModelNode, Result, Shape, ShowroomError, TargetKind,
    Transform,
};
use std::future::{ready, Ready};

struct PhoneSpec {
    name: &'static str,
    half_width: f32,
    half_height: f32,
    kind: TargetKind,
}

const PHONES: [PhoneSpec; 3] = [
    PhoneSpec {
        name: "smartphone",
        half_width: 0.36,
        half_height: 0.75,
        kind: TargetKind::Standard,
    },
    PhoneSpec {
        name: "samsung",
        half_width: 0.38,
        half_height: 0.8,
        kind: TargetKind::DepthClearance,
    },
    PhoneSpec {
        name: "xiaomi",
        half_width: 0.37,
        half_height: 0.78,
        kind: TargetKind::Standard,
    },
];

pub fn model_path(name: &str) -> String {
    format!("models/{name}/scene.gltf")
}

fn phone_x(index: usize) -> f32 {
    (index as f32 - 1.0) * PHONE_SPACING
}

pub fn phone_entries() -> Vec<CatalogEntry> {
    PHONES
        .iter()
        .enumerate()
        .map(|(i, spec)| {
            let x = phone_x(i);
            CatalogEntry {
                name: spec.name.to_string(),
                path: model_path(spec.name),
                placement: Transform::from_translation(Vec3::new(x, PHONE_Y, PHONE_Z)),
                anchor: Vec3::new(x, PHONE_Y, PHONE_Z + PHONE_DEPTH + ANCHOR_FORWARD),
                kind: spec.kind,
            }
        })
        .collect()
}

fn phone_proxy(spec: &PhoneSpec) -> ModelData {
    let body = Vec3::new(spec.half_width, spec.half_height, PHONE_DEPTH);
    let screen = Vec3::new(spec.half_width * 0.92, spec.half_height * 0.94, 0.005);
    let lens = Vec3::new(
        spec.half_width * 0.55,
        spec.half_height * 0.8,
        -(PHONE_DEPTH + 0.02),
    );
    let root = ModelNode::group(spec.name, Transform::default())
        .with_child(ModelNode::leaf(
            "body",
            Transform::default(),
            Shape::Cuboid { half_extents: body },
        ))
        .with_child(ModelNode::leaf(
            "screen",
            Transform::from_translation(Vec3::new(0.0, 0.0, PHONE_DEPTH)),
            Shape::Cuboid {
                half_extents: screen,
            },
        ))
        .with_child(ModelNode::leaf(
            "camera_lens",
            Transform::from_translation(lens),
            Shape::Sphere { radius: 0.06 },
        ));
    ModelData { root }
}

/// Non-selectable planks the phones stand on.
pub fn shelving() -> Vec<(String, Transform, ModelData)> {
    (0..SHELF_COUNT)
        .map(|i| {
            let name = format!("shelf_{i}");
            let y = SHELF_Y + i as f32 * SHELF_SPACING;
            let plank = ModelNode::leaf(
                "plank",
                Transform::default(),
                Shape::Cuboid {
                    half_extents: SHELF_HALF_EXTENTS,
                },
            );
            (
                name,
                Transform::from_translation(Vec3::new(0.0, y, SHELF_Z)),
                ModelData { root: plank },
            )
        })
        .collect()
}

/// Point markers tracked by the overlay: one above each phone's screen and
/// one behind the middle phone, hidden by its body from the opening pose.
pub fn marker_specs() -> Vec<(String, Vec3)> {
    let mut specs: Vec<(String, Vec3)> = phone_entries()
        .into_iter()
        .map(|e| (format!("{}-screen", e.name), e.anchor + Vec3::Y * 0.3))
        .collect();
    specs.push((
        format!("{}-back", PHONES[1].name),
        Vec3::new(phone_x(1), PHONE_Y, PHONE_Z - PHONE_DEPTH - 0.1),
    ));
    specs
}

pub struct ProxyLoader;

impl ModelLoader for ProxyLoader {
    type Load = Ready<Result<ModelData>>;

    fn load(&self, path: &str) -> Self::Load {
        let found = PHONES.iter().find(|spec| model_path(spec.name) == path);
        ready(match found {
            Some(spec) => Ok(phone_proxy(spec)),
            None => Err(ShowroomError::ModelLoad {
                path: path.to_string(),
                reason: "no proxy for this asset".to_string(),
            }),
        })
    }
}
