//! Selection state machine: turns pick results and the "return" action into
//! camera moves, float animations and panel visibility.
//!
//! At most one object floats at a time, and it is always the focused one.

use crate::config::ShowroomConfig;
use crate::presentation::{Presentation, UiLayout};
use crate::registry::{ObjectId, TargetKind};
use crate::state::ShowroomState;
use crate::tween::{AnimationTarget, Easing, Scheduler, TargetKey, TweenSpec, TweenValue};
use glam::Vec3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Idle,
    Focused(ObjectId),
}

/// Camera position that frames a target anchored at `anchor`.
pub fn framing_position(anchor: Vec3, kind: TargetKind, offset: Vec3, depth_step: f32) -> Vec3 {
    let mut target = anchor + offset;
    if kind == TargetKind::DepthClearance {
        target.z += depth_step;
    }
    target
}

#[derive(Clone, Debug)]
pub struct SelectionMachine {
    state: SelectionState,
    config: ShowroomConfig,
}

impl SelectionMachine {
    pub fn new(config: ShowroomConfig) -> Self {
        Self {
            state: SelectionState::Idle,
            config,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn selected(&self) -> Option<ObjectId> {
        match self.state {
            SelectionState::Idle => None,
            SelectionState::Focused(id) => Some(id),
        }
    }

    pub fn on_pick(
        &mut self,
        pick: Option<ObjectId>,
        world: &mut ShowroomState,
        scheduler: &mut Scheduler,
        ui: &mut Presentation,
    ) {
        match (self.state, pick) {
            (_, None) => {
                log::debug!("[select] miss; selection unchanged");
            }
            (SelectionState::Idle, Some(obj)) => {
                self.focus(obj, world, scheduler, ui);
            }
            (SelectionState::Focused(current), Some(obj)) if current == obj => {
                self.release(current, world, scheduler);
                ui.hide_panel(current);
                log::info!("[select] deselect {:?}", current);
            }
            (SelectionState::Focused(current), Some(obj)) => {
                self.release(current, world, scheduler);
                self.focus(obj, world, scheduler, ui);
            }
        }
    }

    /// Return to the authored initial view with nothing selected.
    pub fn reset(
        &mut self,
        world: &mut ShowroomState,
        scheduler: &mut Scheduler,
        ui: &mut Presentation,
    ) {
        if let SelectionState::Focused(current) = self.state {
            self.release(current, world, scheduler);
        }
        world.camera.release_look_target();
        let spec = TweenSpec::once(self.config.camera_transition_secs, Easing::EaseOut);
        scheduler.animate(
            TargetKey::CameraPosition,
            TweenValue::Vector(world.camera.position),
            TweenValue::Vector(self.config.initial_camera_position),
            spec,
        );
        scheduler.animate(
            TargetKey::CameraRotation,
            TweenValue::Vector(world.camera.rotation),
            TweenValue::Vector(self.config.initial_camera_rotation),
            spec,
        );
        ui.hide_all_panels();
        ui.set_points_enabled(true);
        log::info!("[select] reset to initial view");
    }

    fn focus(
        &mut self,
        obj: ObjectId,
        world: &mut ShowroomState,
        scheduler: &mut Scheduler,
        ui: &mut Presentation,
    ) {
        let Some(TweenValue::Scalar(baseline)) = world.read(TargetKey::ObjectY(obj)) else {
            log::warn!("[select] {:?} is not loaded yet; ignoring pick", obj);
            return;
        };
        let Some(object) = world.registry.get_mut(obj) else {
            return;
        };
        object.baseline_y = Some(baseline);
        let anchor = object.anchor;
        let camera_target = framing_position(
            anchor,
            object.kind,
            self.config.framing_offset,
            self.config.depth_clearance_step,
        );
        log::info!("[select] focus `{}` ({:?})", object.name, obj);

        world.camera.look_at(anchor);
        scheduler.animate(
            TargetKey::CameraPosition,
            TweenValue::Vector(world.camera.position),
            TweenValue::Vector(camera_target),
            TweenSpec::once(self.config.camera_transition_secs, Easing::EaseOut),
        );
        scheduler.animate(
            TargetKey::ObjectY(obj),
            TweenValue::Scalar(baseline),
            TweenValue::Scalar(baseline + self.config.float_amplitude),
            TweenSpec::yoyo(self.config.float_half_cycle_secs, Easing::EaseInOut),
        );

        ui.show_only_panel(obj);
        if self.config.layout == UiLayout::PointMarkers {
            ui.set_points_enabled(false);
        }
        self.state = SelectionState::Focused(obj);
    }

    /// Stop floating `obj` and put it back at its baseline.
    fn release(&mut self, obj: ObjectId, world: &mut ShowroomState, scheduler: &mut Scheduler) {
        let baseline = world
            .registry
            .get_mut(obj)
            .and_then(|o| o.baseline_y.take());
        match baseline {
            Some(y) => scheduler.assign(TargetKey::ObjectY(obj), TweenValue::Scalar(y), world),
            None => {
                scheduler.cancel(TargetKey::ObjectY(obj));
            }
        }
        self.state = SelectionState::Idle;
    }
}
