// Shared showroom fixture: three phones on a shelf, camera at its authored
// initial pose looking down -Z.

#![allow(dead_code)]

use glam::{Vec2, Vec3};
use showroom_core::*;

pub const EPS: f32 = 1e-4;

pub const VIEWPORT: Viewport = Viewport {
    width: 800.0,
    height: 600.0,
};

pub fn phone_model() -> ModelData {
    ModelData {
        root: ModelNode::group("phone", Transform::default())
            .with_child(ModelNode::leaf(
                "body",
                Transform::default(),
                Shape::Cuboid {
                    half_extents: Vec3::new(0.35, 0.7, 0.05),
                },
            ))
            .with_child(ModelNode::leaf(
                "camera_bump",
                Transform::from_translation(Vec3::new(0.2, 0.5, -0.06)),
                Shape::Sphere { radius: 0.05 },
            )),
    }
}

pub fn shelf_model() -> ModelData {
    ModelData {
        root: ModelNode::leaf(
            "plank",
            Transform::default(),
            Shape::Cuboid {
                half_extents: Vec3::new(4.0, 0.1, 0.5),
            },
        ),
    }
}

pub fn entry(name: &str, x: f32, kind: TargetKind) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        path: format!("models/{name}.glb"),
        placement: Transform::from_translation(Vec3::new(x, 3.03, 0.9)),
        anchor: Vec3::new(x, 3.03, 1.0),
        kind,
    }
}

pub fn catalog() -> Vec<CatalogEntry> {
    vec![
        entry("smartphone", 0.0, TargetKind::Standard),
        entry("samsung", -2.5, TargetKind::DepthClearance),
        entry("xiaomi", 2.5, TargetKind::Standard),
    ]
}

pub fn showroom_with(config: ShowroomConfig, scheduler: Scheduler) -> Showroom {
    let mut showroom = Showroom::with_scheduler(config, VIEWPORT, scheduler);
    for e in catalog() {
        showroom.install_model(&e, &phone_model()).unwrap();
    }
    showroom
        .add_static(
            "shelf",
            Transform::from_translation(Vec3::new(0.0, 2.2, 0.9)),
            &shelf_model(),
        )
        .unwrap();
    showroom
}

pub fn showroom() -> Showroom {
    showroom_with(ShowroomConfig::default(), Scheduler::new())
}

pub fn id(showroom: &Showroom, name: &str) -> ObjectId {
    showroom.find(name).unwrap()
}

/// Pixel position where `point` appears on screen.
pub fn screen_point(showroom: &Showroom, point: Vec3) -> Vec2 {
    let vp = showroom.state().viewport;
    let ndc = showroom.state().camera.project(point);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * vp.width,
        (1.0 - ndc.y) * 0.5 * vp.height,
    )
}

pub fn object_y(showroom: &Showroom, id: ObjectId) -> f32 {
    let root = showroom.state().registry.get(id).unwrap().root;
    showroom.state().scene.translation_y(root).unwrap()
}

pub fn approx_vec(a: Vec3, b: Vec3) -> bool {
    (a - b).abs().max_element() < EPS
}
