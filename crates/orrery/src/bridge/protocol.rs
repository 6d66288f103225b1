//! Frame buffer layout shared with the JS renderer.
//!
//! Layout (all values in f32 / 4 bytes):
//! ```text
//! [Header: 8 floats]
//! [Camera: 20 floats (view-projection 4x4, column-major, then eye xyzw)]
//! [Instances: max_instances × 8 floats]
//! [Events: max_events × 4 floats]
//! ```
//!
//! Capacities are written into the header every frame.
//! JS reads them from the header to compute offsets.

use crate::api::config::OrreryConfig;
use crate::api::types::{NO_BODY, WireEvent};
use crate::renderer::camera::CameraUniform;
use crate::renderer::instance::RenderInstance;
use crate::renderer::traits::FrameSnapshot;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
/// The frame counter is stored as f32 and stops counting exactly past
/// 2^24 frames (about 77 hours at 60 fps). JS should only watch it change.
pub const HEADER_FRAME_COUNTER: usize = 0;
pub const HEADER_PROTOCOL_VERSION: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_EVENTS: usize = 4;
pub const HEADER_EVENT_COUNT: usize = 5;
pub const HEADER_HOVERED: usize = 6;
pub const HEADER_PAUSED: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per render instance (wire format, never changes).
pub const INSTANCE_FLOATS: usize = RenderInstance::FLOATS;

/// Floats per event: kind, a, b, c (wire format, never changes).
pub const EVENT_FLOATS: usize = WireEvent::FLOATS;

/// Floats in the camera section.
pub const CAMERA_FLOATS: usize = CameraUniform::FLOATS;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    pub max_instances: usize,
    pub max_events: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_data_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(max_instances: usize, max_events: usize) -> Self {
        let camera_data_offset = HEADER_FLOATS;
        let instance_data_offset = camera_data_offset + CAMERA_FLOATS;
        let event_data_offset = instance_data_offset + max_instances * INSTANCE_FLOATS;
        let buffer_total_floats = event_data_offset + max_events * EVENT_FLOATS;

        Self {
            max_instances,
            max_events,
            camera_data_offset,
            instance_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    pub fn from_config(config: &OrreryConfig) -> Self {
        Self::new(config.max_instances, config.max_events)
    }

    /// Pack one frame into `out`. Instances and events beyond capacity are
    /// dropped; the header counts what was written.
    /// Returns false, writing nothing, when `out` is too small.
    pub fn write_frame(&self, out: &mut [f32], frame: &FrameSnapshot<'_>) -> bool {
        if out.len() < self.buffer_total_floats {
            return false;
        }

        let instance_count = frame.instances.len().min(self.max_instances);
        let event_count = frame.events.len().min(self.max_events);

        out[HEADER_FRAME_COUNTER] = frame.frame as f32;
        out[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
        out[HEADER_MAX_INSTANCES] = self.max_instances as f32;
        out[HEADER_INSTANCE_COUNT] = instance_count as f32;
        out[HEADER_MAX_EVENTS] = self.max_events as f32;
        out[HEADER_EVENT_COUNT] = event_count as f32;
        out[HEADER_HOVERED] = frame.hovered.map(|id| id.0 as f32).unwrap_or(NO_BODY);
        out[HEADER_PAUSED] = if frame.paused { 1.0 } else { 0.0 };

        let camera: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&frame.camera));
        out[self.camera_data_offset..self.camera_data_offset + CAMERA_FLOATS].copy_from_slice(camera);

        let instances: &[f32] = bytemuck::cast_slice(&frame.instances[..instance_count]);
        out[self.instance_data_offset..self.instance_data_offset + instances.len()]
            .copy_from_slice(instances);

        for (i, event) in frame.events[..event_count].iter().enumerate() {
            let wire = WireEvent::from(*event);
            let at = self.event_data_offset + i * EVENT_FLOATS;
            out[at..at + EVENT_FLOATS].copy_from_slice(bytemuck::cast_slice(std::slice::from_ref(&wire)));
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{BodyId, EVENT_HOVER, EVENT_PAUSE, OrreryEvent};

    fn snapshot<'a>(
        instances: &'a [RenderInstance],
        events: &'a [OrreryEvent],
    ) -> FrameSnapshot<'a> {
        FrameSnapshot {
            frame: 42,
            instances,
            camera: CameraUniform { view_proj: [[1.0; 4]; 4], eye: [0.0, 50.0, 100.0, 1.0] },
            hovered: Some(BodyId(3)),
            paused: true,
            events,
        }
    }

    #[test]
    fn default_layout_sizes() {
        let layout = ProtocolLayout::from_config(&OrreryConfig::default());
        assert_eq!(layout.camera_data_offset, 8);
        assert_eq!(layout.instance_data_offset, 28);
        assert_eq!(layout.event_data_offset, 28 + 512 * 8);
        assert_eq!(layout.buffer_total_floats, 28 + 512 * 8 + 32 * 4);
        assert_eq!(layout.buffer_total_bytes, layout.buffer_total_floats * 4);
    }

    #[test]
    fn writes_header_camera_instances_events() {
        let layout = ProtocolLayout::new(4, 2);
        let mut out = vec![0.0; layout.buffer_total_floats];
        let instances = [RenderInstance { x: 5.0, kind: 1.0, ..Default::default() }];
        let events = [
            OrreryEvent::PauseChanged(true),
            OrreryEvent::HoverChanged { body: Some(BodyId(3)), x: 10.0, y: 20.0 },
        ];
        assert!(layout.write_frame(&mut out, &snapshot(&instances, &events)));

        assert_eq!(out[HEADER_FRAME_COUNTER], 42.0);
        assert_eq!(out[HEADER_INSTANCE_COUNT], 1.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 2.0);
        assert_eq!(out[HEADER_HOVERED], 3.0);
        assert_eq!(out[HEADER_PAUSED], 1.0);
        assert_eq!(out[layout.camera_data_offset + 17], 50.0);
        assert_eq!(out[layout.instance_data_offset], 5.0);
        assert_eq!(out[layout.instance_data_offset + 7], 1.0);

        let e = layout.event_data_offset;
        assert_eq!(&out[e..e + 2], &[EVENT_PAUSE, 1.0]);
        assert_eq!(&out[e + 4..e + 8], &[EVENT_HOVER, 3.0, 10.0, 20.0]);
    }

    #[test]
    fn overflow_is_truncated() {
        let layout = ProtocolLayout::new(1, 1);
        let mut out = vec![0.0; layout.buffer_total_floats];
        let instances = [RenderInstance::default(); 3];
        let events = [OrreryEvent::PauseChanged(false); 2];
        assert!(layout.write_frame(&mut out, &snapshot(&instances, &events)));
        assert_eq!(out[HEADER_INSTANCE_COUNT], 1.0);
        assert_eq!(out[HEADER_EVENT_COUNT], 1.0);
    }

    #[test]
    fn frame_counter_loses_precision_past_2_pow_24() {
        let layout = ProtocolLayout::new(1, 1);
        let mut out = vec![0.0; layout.buffer_total_floats];
        let mut frame = snapshot(&[], &[]);
        frame.frame = (1 << 24) + 1;
        layout.write_frame(&mut out, &frame);
        assert_eq!(out[HEADER_FRAME_COUNTER], 16_777_216.0);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let layout = ProtocolLayout::new(4, 2);
        let mut out = vec![0.0; 10];
        assert!(!layout.write_frame(&mut out, &snapshot(&[], &[])));
        assert!(out.iter().all(|v| *v == 0.0));
    }
}
