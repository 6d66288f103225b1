use crate::api::types::BodyId;

/// Errors raised while building or addressing the orrery.
/// Nothing here is fatal to a running frame loop.
#[derive(Debug, thiserror::Error)]
pub enum OrreryError {
    #[error("manifest parse error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("duplicate body name `{0}`")]
    DuplicateName(String),

    #[error("satellite `{satellite}` references unknown parent `{parent}`")]
    UnknownParent { satellite: String, parent: String },

    #[error("`{name}` has invalid {field}: {value}")]
    InvalidValue {
        name: String,
        field: &'static str,
        value: f64,
    },

    #[error("unknown body {0:?}")]
    UnknownBody(BodyId),

    #[error("body `{name}` ({id:?}) has no scene node")]
    MissingSceneNode { id: BodyId, name: String },
}
