//! Renderer seam.
//!
//! The core never draws. Each frame it hands a `FrameSnapshot` to whatever
//! implements `Renderer`: the wasm bridge packs it into a float buffer for
//! a JS renderer, tests record it.

use super::camera::CameraUniform;
use super::instance::RenderInstance;
use crate::api::types::{BodyId, OrreryEvent};

/// Everything a renderer needs for one frame. Read-only.
#[derive(Debug, Clone, Copy)]
pub struct FrameSnapshot<'a> {
    /// Frames ticked since start.
    pub frame: u64,
    pub instances: &'a [RenderInstance],
    pub camera: CameraUniform,
    pub hovered: Option<BodyId>,
    pub paused: bool,
    /// Events raised this frame, oldest first.
    pub events: &'a [OrreryEvent],
}

/// A consumer of frame snapshots.
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot<'_>);

    /// Viewport changed, in device pixels.
    fn resize(&mut self, _width: u32, _height: u32) {}
}
