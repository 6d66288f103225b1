use crate::components::node::SceneNode;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from scene nodes.
/// Hidden nodes are skipped. At most `max` instances are written; returns
/// how many visible nodes did not fit.
pub fn build_render_buffer<'a>(
    nodes: impl Iterator<Item = &'a SceneNode>,
    buffer: &mut RenderBuffer,
    max: usize,
) -> usize {
    buffer.clear();
    let mut dropped = 0;

    for node in nodes.filter(|n| n.visible) {
        if buffer.instances.len() >= max {
            dropped += 1;
            continue;
        }
        buffer.push(RenderInstance {
            x: node.pos.x,
            y: node.pos.y,
            z: node.pos.z,
            rot_x: node.rotation.x,
            rot_y: node.rotation.y,
            rot_z: node.rotation.z,
            scale: node.scale,
            kind: node.kind.wire_code(),
        });
    }

    dropped
}
