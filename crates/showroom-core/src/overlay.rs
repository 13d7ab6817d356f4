//! Per-frame projection of tracked anchors into screen space, with
//! visibility driven by occlusion.

use crate::camera::{Camera, Viewport};
use crate::occlusion::is_occluded;
use crate::scene::SceneGraph;
use glam::{Vec2, Vec3};
use std::time::Duration;

/// Opens a fixed settle delay after asset loading completes, so markers do
/// not pop in before textures and shadows have uploaded.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ReadinessGate {
    remaining: Option<f32>,
    ready: bool,
}

impl ReadinessGate {
    pub fn signal_loaded(&mut self, settle_secs: f32) {
        if self.ready || self.remaining.is_some() {
            return;
        }
        self.remaining = Some(settle_secs.max(0.0));
    }

    pub fn advance(&mut self, dt: Duration) {
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= dt.as_secs_f32();
            if *remaining <= 0.0 {
                self.remaining = None;
                self.ready = true;
                log::info!("[overlay] scene settled; markers live");
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OverlayMarker {
    pub id: String,
    pub anchor: Vec3,
    /// Pixel offset from the viewport centre, Y down.
    pub offset: Vec2,
    pub visible: bool,
}

/// Snapshot of one marker for the presentation layer.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkerView {
    pub id: String,
    pub offset: Vec2,
    pub visible: bool,
}

#[derive(Clone, Debug, Default)]
pub struct OverlayProjector {
    markers: Vec<OverlayMarker>,
    gate: ReadinessGate,
}

impl OverlayProjector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_marker(&mut self, id: &str, anchor: Vec3) {
        self.markers.push(OverlayMarker {
            id: id.to_string(),
            anchor,
            offset: Vec2::ZERO,
            visible: false,
        });
    }

    pub fn markers(&self) -> &[OverlayMarker] {
        &self.markers
    }

    pub fn signal_loaded(&mut self, settle_secs: f32) {
        self.gate.signal_loaded(settle_secs);
    }

    pub fn is_ready(&self) -> bool {
        self.gate.is_ready()
    }

    /// Reposition every marker and recompute its visibility for this frame.
    /// Before the scene is ready, or while `enabled` is false, every marker
    /// is hidden.
    pub fn update(
        &mut self,
        dt: Duration,
        camera: &Camera,
        viewport: Viewport,
        scene: &SceneGraph,
        enabled: bool,
    ) {
        self.gate.advance(dt);
        if !self.gate.is_ready() {
            return;
        }
        for marker in &mut self.markers {
            let ndc = camera.project(marker.anchor);
            marker.offset = viewport.ndc_to_center_offset(ndc.truncate());
            marker.visible = enabled
                && camera.is_in_front(marker.anchor)
                && !is_occluded(marker.anchor, camera, scene);
        }
    }

    pub fn views(&self) -> Vec<MarkerView> {
        self.markers
            .iter()
            .map(|m| MarkerView {
                id: m.id.clone(),
                offset: m.offset,
                visible: m.visible,
            })
            .collect()
    }
}
