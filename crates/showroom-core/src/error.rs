use crate::registry::ObjectId;
use crate::scene::NodeId;

/// Failures that can occur while building the scene or populating the
/// pickable registry. Interaction paths (pick, tick, reset) never fail.
#[derive(Debug, thiserror::Error)]
pub enum ShowroomError {
    #[error("scene node {0:?} does not exist")]
    UnknownNode(NodeId),
    #[error("a selectable object named `{0}` is already registered")]
    DuplicateObject(String),
    #[error("leaf {leaf:?} already resolves to object {owner:?}")]
    LeafAlreadyClaimed { leaf: NodeId, owner: ObjectId },
    #[error("model `{path}` failed to load: {reason}")]
    ModelLoad { path: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ShowroomError>;
