use glam::{Quat, Vec3};
use showroom_core::ray::{ray_aabb, ray_sphere, ray_triangle};
use showroom_core::*;

#[test]
fn ray_sphere_hits_front_surface() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_from_inside_reports_exit() {
    let t = ray_sphere(Vec3::new(0.0, 0.0, 5.0), Vec3::X, Vec3::new(0.0, 0.0, 5.0), 3.0).unwrap();
    assert!((t - 3.0).abs() < 1e-5);
}

#[test]
fn ray_sphere_behind_origin_misses() {
    assert!(ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 1.0).is_none());
    assert!(ray_sphere(Vec3::ZERO, Vec3::X, Vec3::new(0.0, 0.0, 5.0), 2.0).is_none());
}

#[test]
fn ray_aabb_entry_distance() {
    let t = ray_aabb(
        Vec3::new(0.0, 0.0, 10.0),
        -Vec3::Z,
        Vec3::splat(-1.0),
        Vec3::splat(1.0),
    )
    .unwrap();
    assert!((t - 9.0).abs() < 1e-5);
}

#[test]
fn ray_aabb_axis_parallel_miss() {
    assert!(ray_aabb(
        Vec3::new(3.0, 0.0, 10.0),
        -Vec3::Z,
        Vec3::splat(-1.0),
        Vec3::splat(1.0)
    )
    .is_none());
}

#[test]
fn ray_triangle_is_double_sided() {
    let tri = [
        Vec3::new(-1.0, -1.0, 0.0),
        Vec3::new(1.0, -1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
    ];
    let front = ray_triangle(Vec3::new(0.0, 0.0, 2.0), -Vec3::Z, &tri).unwrap();
    let back = ray_triangle(Vec3::new(0.0, 0.0, -2.0), Vec3::Z, &tri).unwrap();
    assert!((front - 2.0).abs() < 1e-5);
    assert!((back - 2.0).abs() < 1e-5);
    assert!(ray_triangle(Vec3::new(5.0, 0.0, 2.0), -Vec3::Z, &tri).is_none());
}

#[test]
fn world_matrix_composes_parents() {
    let mut scene = SceneGraph::new();
    let root = scene.add_root(
        "root",
        Transform::from_translation(Vec3::new(1.0, 0.0, 0.0))
            .with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
        None,
    );
    let child = scene
        .add_child(root, "child", Transform::from_translation(Vec3::new(0.0, 0.0, 2.0)), None)
        .unwrap();
    let p = scene.world_position(child).unwrap();
    // +Z rotated a quarter turn about Y becomes +X
    assert!((p - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);
}

#[test]
fn add_child_to_unknown_parent_fails() {
    // an id issued by a larger graph does not exist in a smaller one
    let mut big = SceneGraph::new();
    for _ in 0..3 {
        big.add_root("x", Transform::default(), None);
    }
    let foreign = big.roots()[2];

    let mut scene = SceneGraph::new();
    scene.add_root("root", Transform::default(), None);
    assert!(matches!(
        scene.add_child(foreign, "orphan", Transform::default(), None),
        Err(ShowroomError::UnknownNode(_))
    ));
}

#[test]
fn intersect_ray_sorts_nearest_first_through_hierarchy() {
    let mut scene = SceneGraph::new();
    let group = scene.add_root("group", Transform::from_translation(Vec3::new(0.0, 0.0, -5.0)), None);
    let far = scene
        .add_child(group, "far", Transform::default(), Some(Shape::Sphere { radius: 1.0 }))
        .unwrap();
    let near = scene.add_root(
        "near",
        Transform::from_translation(Vec3::new(0.0, 0.0, -2.0)),
        Some(Shape::Cuboid {
            half_extents: Vec3::splat(0.5),
        }),
    );
    let hits = scene.intersect_ray(&Ray::new(Vec3::ZERO, -Vec3::Z));
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].node, near);
    assert!((hits[0].distance - 1.5).abs() < 1e-5);
    assert_eq!(hits[1].node, far);
    assert!((hits[1].distance - 4.0).abs() < 1e-5);
}

#[test]
fn scaled_nodes_report_world_distances() {
    let mut scene = SceneGraph::new();
    scene.add_root(
        "big",
        Transform::from_translation(Vec3::new(0.0, 0.0, -10.0)).with_scale(Vec3::splat(2.0)),
        Some(Shape::Sphere { radius: 1.0 }),
    );
    let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
    assert!((hit.distance - 8.0).abs() < 1e-4);
    assert!((hit.point - Vec3::new(0.0, 0.0, -8.0)).length() < 1e-4);
}

#[test]
fn degenerate_ray_hits_nothing() {
    let mut scene = SceneGraph::new();
    scene.add_root("s", Transform::default(), Some(Shape::Sphere { radius: 1.0 }));
    assert!(scene.intersect_ray(&Ray::new(Vec3::ZERO, Vec3::ZERO)).is_empty());
}

#[test]
fn mesh_shape_uses_nearest_triangle() {
    let quad_at = |z: f32| {
        [
            [Vec3::new(-1.0, -1.0, z), Vec3::new(1.0, -1.0, z), Vec3::new(0.0, 1.0, z)],
        ]
    };
    let mut triangles = quad_at(-4.0).to_vec();
    triangles.extend_from_slice(&quad_at(-3.0));
    let mut scene = SceneGraph::new();
    scene.add_root("mesh", Transform::default(), Some(Shape::Mesh { triangles }));
    let hit = scene.nearest_hit(&Ray::new(Vec3::ZERO, -Vec3::Z)).unwrap();
    assert!((hit.distance - 3.0).abs() < 1e-5);
}
