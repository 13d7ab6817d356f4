// Mirrors a frame's marker and panel views onto their DOM elements.

use crate::constants::{MARKER_ID_PREFIX, PANEL_ID_PREFIX, VISIBLE_CLASS};
use fnv::FnvHashMap;
use glam::Vec2;
use showroom_core::{FrameOutput, Presenter};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn marker_element_id(marker: &str) -> String {
    format!("{MARKER_ID_PREFIX}{marker}")
}

pub fn panel_element_id(object: &str) -> String {
    format!("{PANEL_ID_PREFIX}{object}")
}

/// CSS transform placing a marker at `offset` pixels from the viewport centre.
pub fn translate_css(offset: Vec2) -> String {
    format!("translateX({:.2}px) translateY({:.2}px)", offset.x, offset.y)
}

pub struct DomPresenter {
    document: web::Document,
    // Missing elements are cached as None so they are looked up once.
    elements: FnvHashMap<String, Option<web::HtmlElement>>,
}

impl DomPresenter {
    pub fn new(document: web::Document) -> Self {
        Self {
            document,
            elements: FnvHashMap::default(),
        }
    }

    fn element(&mut self, id: String) -> Option<&web::HtmlElement> {
        let document = &self.document;
        self.elements
            .entry(id)
            .or_insert_with_key(|id| {
                let found = document
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok());
                if found.is_none() {
                    log::warn!("[overlay] element #{} not found", id);
                }
                found
            })
            .as_ref()
    }
}

impl Presenter for DomPresenter {
    fn present(&mut self, frame: &FrameOutput) {
        for marker in &frame.markers {
            if let Some(el) = self.element(marker_element_id(&marker.id)) {
                let _ = el
                    .style()
                    .set_property("transform", &translate_css(marker.offset));
                let _ = el.class_list().toggle_with_force(VISIBLE_CLASS, marker.visible);
            }
        }
        for panel in &frame.panels {
            if let Some(el) = self.element(panel_element_id(&panel.name)) {
                let _ = el.class_list().toggle_with_force(VISIBLE_CLASS, panel.visible);
            }
        }
    }
}
