// Host-side tests for the DOM overlay's pure helpers.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod overlay {
    include!("../src/overlay.rs");
}

use constants::*;
use glam::Vec2;
use overlay::*;

#[test]
fn marker_and_panel_ids_use_their_prefixes() {
    assert_eq!(marker_element_id("0"), format!("{MARKER_ID_PREFIX}0"));
    assert_eq!(panel_element_id("samsung"), format!("{PANEL_ID_PREFIX}samsung"));
}

#[test]
fn translate_is_relative_to_centre() {
    assert_eq!(
        translate_css(Vec2::new(120.0, -45.5)),
        "translateX(120.00px) translateY(-45.50px)"
    );
    assert_eq!(
        translate_css(Vec2::ZERO),
        "translateX(0.00px) translateY(0.00px)"
    );
}
