use crate::camera::{Camera, Viewport};
use crate::config::ShowroomConfig;
use crate::error::{Result, ShowroomError};
use crate::loader::{instantiate, CatalogEntry, ModelData};
use crate::overlay::OverlayProjector;
use crate::picker::pick;
use crate::presentation::{FrameOutput, PanelView, Presentation};
use crate::registry::ObjectId;
use crate::scene::{NodeId, Transform};
use crate::selection::{SelectionMachine, SelectionState};
use crate::state::ShowroomState;
use crate::tween::{Scheduler, TargetKey};
use glam::{Vec2, Vec3};
use std::time::Duration;

/// Controller owning the whole interaction engine. Hosts feed it pointer
/// clicks, the reset action and frame ticks; it answers with a
/// [`FrameOutput`] each frame.
#[derive(Debug)]
pub struct Showroom {
    state: ShowroomState,
    scheduler: Scheduler,
    selection: SelectionMachine,
    overlay: OverlayProjector,
    presentation: Presentation,
    config: ShowroomConfig,
}

impl Showroom {
    pub fn new(config: ShowroomConfig, viewport: Viewport) -> Self {
        Self::with_scheduler(config, viewport, Scheduler::new())
    }

    pub fn with_scheduler(config: ShowroomConfig, viewport: Viewport, scheduler: Scheduler) -> Self {
        let camera = Camera::new(
            config.initial_camera_position,
            config.initial_camera_rotation,
            viewport.aspect(),
        );
        Self {
            state: ShowroomState::new(camera, viewport),
            scheduler,
            selection: SelectionMachine::new(config),
            overlay: OverlayProjector::new(),
            presentation: Presentation::new(),
            config,
        }
    }

    pub fn state(&self) -> &ShowroomState {
        &self.state
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut Scheduler {
        &mut self.scheduler
    }

    pub fn overlay(&self) -> &OverlayProjector {
        &self.overlay
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn config(&self) -> &ShowroomConfig {
        &self.config
    }

    pub fn selection(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selection.selected()
    }

    pub fn find(&self, name: &str) -> Option<ObjectId> {
        self.state.registry.find(name)
    }

    /// Objects with a live float transition.
    pub fn floating_objects(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self
            .scheduler
            .active_keys()
            .filter_map(|key| match key {
                TargetKey::ObjectY(id) => Some(id),
                _ => None,
            })
            .collect();
        ids.sort();
        ids
    }

    pub fn add_marker(&mut self, id: &str, anchor: Vec3) {
        self.overlay.add_marker(id, anchor);
    }

    /// Place non-selectable geometry (shelving, walls) in the scene.
    pub fn add_static(&mut self, name: &str, placement: Transform, model: &ModelData) -> Result<NodeId> {
        let root = self.state.scene.add_root(name, placement, None);
        instantiate(&mut self.state.scene, root, &model.root)?;
        Ok(root)
    }

    /// Place a loaded catalog model and register it as one selectable object.
    pub fn install_model(&mut self, entry: &CatalogEntry, model: &ModelData) -> Result<ObjectId> {
        if self.state.registry.find(&entry.name).is_some() {
            return Err(ShowroomError::DuplicateObject(entry.name.clone()));
        }
        let root = self.add_static(&entry.name, entry.placement, model)?;
        let ShowroomState {
            scene, registry, ..
        } = &mut self.state;
        registry.register(scene, &entry.name, root, entry.anchor, entry.kind)
    }

    /// All catalog models are in; start the overlay settle countdown.
    pub fn on_assets_loaded(&mut self) {
        log::info!(
            "[assets] loaded {} objects ({} pickable leaves)",
            self.state.registry.len(),
            self.state.registry.leaf_count()
        );
        self.overlay.signal_loaded(self.config.settle_delay_secs);
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.state.viewport = viewport;
        self.state.camera.set_viewport(viewport);
    }

    /// Handle a click at a viewport-relative pointer position. Returns the
    /// object hit, if any.
    pub fn on_pointer_click(&mut self, pointer: Vec2) -> Option<ObjectId> {
        let picked = pick(
            pointer,
            self.state.viewport,
            &self.state.camera,
            &self.state.scene,
            &self.state.registry,
        );
        self.on_pick(picked);
        picked
    }

    pub fn on_pick(&mut self, picked: Option<ObjectId>) {
        self.selection.on_pick(
            picked,
            &mut self.state,
            &mut self.scheduler,
            &mut self.presentation,
        );
    }

    /// The "return" control.
    pub fn reset(&mut self) {
        self.selection
            .reset(&mut self.state, &mut self.scheduler, &mut self.presentation);
    }

    /// Advance transitions, then refresh overlay markers.
    pub fn tick(&mut self, dt: Duration) -> FrameOutput {
        self.scheduler.advance(dt, &mut self.state);
        self.overlay.update(
            dt,
            &self.state.camera,
            self.state.viewport,
            &self.state.scene,
            self.presentation.points_enabled(),
        );
        FrameOutput {
            markers: self.overlay.views(),
            panels: self
                .state
                .registry
                .iter()
                .map(|(id, obj)| PanelView {
                    object: id,
                    name: obj.name.clone(),
                    visible: self.presentation.panel_visible(id),
                })
                .collect(),
        }
    }
}
