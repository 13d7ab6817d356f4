// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::Vec2;
use input::*;

#[test]
fn client_coordinates_become_canvas_local() {
    let local = client_to_local(Vec2::new(420.0, 310.0), Vec2::new(20.0, 10.0));
    assert_eq!(local, Vec2::new(400.0, 300.0));
}

#[test]
fn canvas_origin_maps_to_zero() {
    let origin = Vec2::new(13.5, 7.25);
    assert_eq!(client_to_local(origin, origin), Vec2::ZERO);
}

#[test]
fn viewport_keeps_css_size() {
    let vp = viewport_from_css(800.0, 600.0);
    assert_eq!(vp.width, 800.0);
    assert_eq!(vp.height, 600.0);
    assert!((vp.aspect() - 800.0 / 600.0).abs() < 1e-6);
}

#[test]
fn collapsed_canvas_still_yields_a_usable_viewport() {
    // A hidden canvas reports 0x0; the aspect ratio must stay finite.
    let vp = viewport_from_css(0.0, 0.0);
    assert!(!vp.is_empty());
    assert!(vp.aspect().is_finite());
}

#[test]
fn canvas_centre_is_ndc_origin() {
    let vp = viewport_from_css(1024.0, 768.0);
    let local = client_to_local(Vec2::new(612.0, 484.0), Vec2::new(100.0, 100.0));
    let ndc = vp.to_ndc(local.x, local.y);
    assert!(ndc.length() < 1e-6, "ndc = {ndc:?}");
}
