use glam::Vec3;
use crate::api::types::{BodyId, BodyKind};

/// Render-facing transform of one scene object.
/// The motion model is the only writer of `pos` and `rotation`; the
/// renderer and the pointer layer only read them.
#[derive(Debug, Clone)]
pub struct SceneNode {
    /// Same id as the motion state driving this node.
    pub id: BodyId,
    /// Display name, used for lookups and tooltips.
    pub tag: String,
    pub kind: BodyKind,
    /// Hidden nodes are skipped by the render buffer.
    pub visible: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Euler rotation (x, y, z) in radians.
    pub rotation: Vec3,
    /// Uniform visual radius in world units.
    pub scale: f32,
}

impl SceneNode {
    /// Create a visible node at the origin.
    pub fn new(id: BodyId, kind: BodyKind) -> Self {
        Self {
            id,
            tag: String::new(),
            kind,
            visible: true,
            pos: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
