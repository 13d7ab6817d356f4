//! Interaction and choreography engine for an interactive 3D product
//! showroom: ray picking, keyed camera/object transitions, a single-slot
//! selection state machine and occlusion-aware overlay markers.
//!
//! Platform-free; a host shell feeds it pointer clicks and frame ticks.

pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod occlusion;
pub mod overlay;
pub mod picker;
pub mod presentation;
pub mod ray;
pub mod registry;
pub mod scene;
pub mod selection;
pub mod showroom;
pub mod state;
pub mod tween;

pub use camera::{Camera, Viewport};
pub use config::ShowroomConfig;
pub use error::{Result, ShowroomError};
pub use loader::{load_catalog, CatalogEntry, ModelData, ModelLoader, ModelNode};
pub use occlusion::is_occluded;
pub use overlay::{MarkerView, OverlayMarker, OverlayProjector, ReadinessGate};
pub use picker::pick;
pub use presentation::{FrameOutput, PanelView, Presentation, Presenter, UiLayout};
pub use ray::Ray;
pub use registry::{ObjectId, PickableRegistry, SelectableObject, TargetKind};
pub use scene::{NodeId, RayHit, SceneGraph, Shape, Transform};
pub use selection::{framing_position, SelectionMachine, SelectionState};
pub use showroom::Showroom;
pub use state::ShowroomState;
pub use tween::{
    AnimationTarget, Easing, JournalEntry, RepeatMode, Scheduler, TargetKey, TweenHandle,
    TweenSpec, TweenValue,
};
