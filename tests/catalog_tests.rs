// Host-side tests for the built-in catalog and its proxy loader, driven
// through the core engine the way the web shell drives it.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod catalog {
    include!("../src/catalog.rs");
}

use catalog::*;
use glam::Vec2;
use showroom_core::{
    load_catalog, ModelLoader, SelectionState, Showroom, ShowroomConfig, ShowroomError,
    TargetKind, Viewport,
};
use std::time::Duration;

const VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 720.0,
};

fn loaded_showroom() -> Showroom {
    let mut showroom = Showroom::new(ShowroomConfig::default(), VIEWPORT);
    for (id, anchor) in marker_specs() {
        showroom.add_marker(&id, anchor);
    }
    for (name, placement, model) in shelving() {
        showroom.add_static(&name, placement, &model).unwrap();
    }
    let results = pollster::block_on(load_catalog(&ProxyLoader, &phone_entries()));
    for (entry, result) in results {
        showroom.install_model(&entry, &result.unwrap()).unwrap();
    }
    showroom.on_assets_loaded();
    showroom
}

fn screen_point(showroom: &Showroom, world: glam::Vec3) -> Vec2 {
    let ndc = showroom.state().camera.project(world);
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * VIEWPORT.width,
        (1.0 - ndc.y) * 0.5 * VIEWPORT.height,
    )
}

#[test]
fn every_catalog_path_has_a_proxy() {
    for entry in phone_entries() {
        let model = pollster::block_on(ProxyLoader.load(&entry.path)).unwrap();
        assert_eq!(model.root.name, entry.name);
        assert!(!model.root.children.is_empty());
    }
}

#[test]
fn unknown_path_fails_to_load() {
    let err = pollster::block_on(ProxyLoader.load("models/tablet/scene.gltf")).unwrap_err();
    assert!(matches!(err, ShowroomError::ModelLoad { .. }));
}

#[test]
fn catalog_names_are_unique_and_one_needs_clearance() {
    let entries = phone_entries();
    let mut names: Vec<_> = entries.iter().map(|e| e.name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), entries.len());
    let clearance = entries
        .iter()
        .filter(|e| e.kind == TargetKind::DepthClearance)
        .count();
    assert_eq!(clearance, 1);
}

#[test]
fn every_phone_is_pickable_from_the_opening_pose() {
    let mut showroom = loaded_showroom();
    for entry in phone_entries() {
        let expected = showroom.find(&entry.name).unwrap();
        let at = screen_point(&showroom, entry.anchor);
        assert_eq!(showroom.on_pointer_click(at), Some(expected), "{}", entry.name);
        assert_eq!(showroom.selection(), SelectionState::Focused(expected));
        showroom.reset();
        for _ in 0..20 {
            showroom.tick(Duration::from_millis(100));
        }
    }
}

#[test]
fn clicking_empty_wall_selects_nothing() {
    let mut showroom = loaded_showroom();
    assert_eq!(showroom.on_pointer_click(Vec2::new(5.0, 5.0)), None);
    assert_eq!(showroom.selection(), SelectionState::Idle);
}

#[test]
fn back_marker_starts_hidden_and_screen_markers_show() {
    let mut showroom = loaded_showroom();
    let frame = showroom.tick(Duration::from_millis(600));
    for (id, _) in marker_specs() {
        let visible = frame.marker_visible(&id).unwrap();
        assert_eq!(visible, !id.ends_with("-back"), "{id}");
    }
}

#[test]
fn focused_phone_stays_in_view_with_its_marker() {
    let mut showroom = loaded_showroom();
    let entry = phone_entries()
        .into_iter()
        .find(|e| e.name == "xiaomi")
        .unwrap();
    let at = screen_point(&showroom, entry.anchor);
    let phone = showroom.on_pointer_click(at).unwrap();

    let mut frame = showroom.tick(Duration::from_millis(100));
    for _ in 0..20 {
        frame = showroom.tick(Duration::from_millis(100));
    }
    let camera = &showroom.state().camera;
    assert_eq!(showroom.selected(), Some(phone));
    assert!(camera.is_in_front(entry.anchor));
    assert_eq!(frame.marker_visible("xiaomi-screen"), Some(true));
    assert_eq!(frame.panel_visible("xiaomi"), Some(true));
}

#[test]
fn host_included_sources_have_no_inner_doc_comments() {
    // inner `//!` docs are rejected inside the `mod x { include!(..) }` wrappers
    for src in [
        include_str!("../src/catalog.rs"),
        include_str!("../src/constants.rs"),
        include_str!("../src/input.rs"),
        include_str!("../src/overlay.rs"),
    ] {
        assert!(!src.lines().any(|l| l.trim_start().starts_with("//!")));
    }
}
