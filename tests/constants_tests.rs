// Host-side tests for constants and their layout relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_prefixes_are_distinct() {
    assert!(!MARKER_ID_PREFIX.is_empty());
    assert!(!PANEL_ID_PREFIX.is_empty());
    assert_ne!(MARKER_ID_PREFIX, PANEL_ID_PREFIX);
    assert!(!MARKER_ID_PREFIX.starts_with(PANEL_ID_PREFIX));
    assert!(!PANEL_ID_PREFIX.starts_with(MARKER_ID_PREFIX));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn phones_stand_between_planks() {
    let lower_top = SHELF_Y + SHELF_HALF_EXTENTS.y;
    let upper_bottom = SHELF_Y + SHELF_SPACING - SHELF_HALF_EXTENTS.y;
    assert!(PHONE_Y > lower_top);
    assert!(PHONE_Y < upper_bottom);
    assert!(SHELF_COUNT >= 1);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn phone_row_fits_on_a_plank() {
    // Three phones centred on the plank, the outer ones one spacing away.
    assert!(PHONE_SPACING + 0.5 < SHELF_HALF_EXTENTS.x);
    assert!((PHONE_Z - SHELF_Z).abs() < SHELF_HALF_EXTENTS.z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn anchors_sit_in_front_of_the_screen() {
    assert!(ANCHOR_FORWARD > 0.0);
    assert!(PHONE_DEPTH > 0.0);
}
