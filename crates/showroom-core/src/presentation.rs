//! Declarative UI visibility state. The core only flips these flags; a
//! presentation layer decides how they are drawn.

use crate::overlay::MarkerView;
use crate::registry::ObjectId;
use fnv::FnvHashMap;

/// Which of the two overlay variants the showroom drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UiLayout {
    /// One info panel per object; point markers are left alone on focus.
    #[default]
    InfoPanels,
    /// A single shared set of point markers, hidden while an object is focused.
    PointMarkers,
}

#[derive(Clone, Debug)]
pub struct Presentation {
    panels: FnvHashMap<ObjectId, bool>,
    points_enabled: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            panels: FnvHashMap::default(),
            points_enabled: true,
        }
    }
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn panel_visible(&self, id: ObjectId) -> bool {
        self.panels.get(&id).copied().unwrap_or(false)
    }

    pub fn show_only_panel(&mut self, id: ObjectId) {
        for visible in self.panels.values_mut() {
            *visible = false;
        }
        self.panels.insert(id, true);
    }

    pub fn hide_panel(&mut self, id: ObjectId) {
        self.panels.insert(id, false);
    }

    pub fn hide_all_panels(&mut self) {
        for visible in self.panels.values_mut() {
            *visible = false;
        }
    }

    pub fn points_enabled(&self) -> bool {
        self.points_enabled
    }

    pub fn set_points_enabled(&mut self, enabled: bool) {
        self.points_enabled = enabled;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PanelView {
    pub object: ObjectId,
    pub name: String,
    pub visible: bool,
}

/// What the presentation layer should show after one tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameOutput {
    pub markers: Vec<MarkerView>,
    pub panels: Vec<PanelView>,
}

impl FrameOutput {
    pub fn marker_visible(&self, id: &str) -> Option<bool> {
        self.markers.iter().find(|m| m.id == id).map(|m| m.visible)
    }

    pub fn panel_visible(&self, name: &str) -> Option<bool> {
        self.panels.iter().find(|p| p.name == name).map(|p| p.visible)
    }
}

/// Renders a [`FrameOutput`] onto some UI toolkit.
pub trait Presenter {
    fn present(&mut self, frame: &FrameOutput);
}
