use bytemuck::{Pod, Zeroable};

/// Per-object render data handed to the external renderer.
/// Wire format: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Position in world space.
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Euler rotation in radians.
    pub rot_x: f32,
    pub rot_y: f32,
    pub rot_z: f32,
    /// Visual radius in world units.
    pub scale: f32,
    /// `BodyKind::wire_code`.
    pub kind: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Instances for one frame, in scene order.
pub struct RenderBuffer {
    pub instances: Vec<RenderInstance>,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instance data as a flat float slice.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_instance_is_8_floats() {
        assert_eq!(std::mem::size_of::<RenderInstance>(), 32);
        assert_eq!(RenderInstance::FLOATS, 8);
    }

    #[test]
    fn floats_follow_field_order() {
        let mut buf = RenderBuffer::new();
        buf.push(RenderInstance { x: 1.0, y: 2.0, z: 3.0, scale: 7.0, kind: 1.0, ..Default::default() });
        assert_eq!(buf.instance_count(), 1);
        assert_eq!(buf.as_floats(), &[1.0, 2.0, 3.0, 0.0, 0.0, 0.0, 7.0, 1.0]);
    }
}
