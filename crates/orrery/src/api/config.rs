use glam::Vec3;

use crate::extensions::easing::Easing;

/// Tunable constants for the motion core, camera and buffers.
/// The per-body table lives in the `SystemManifest`; this covers everything else.
#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Angular rate (rad/s) of the reference body at multiplier 1.0 (default: 0.2).
    pub base_orbit_rate: f64,
    /// Lowest accepted speed multiplier (default: 0.0).
    pub multiplier_min: f64,
    /// Highest accepted speed multiplier (default: 3.0).
    pub multiplier_max: f64,
    /// Multiplier changes smaller than this are not re-anchored (default: 0.01).
    pub multiplier_epsilon: f64,
    /// Seconds for a focus-on-body transition (default: 2.0).
    pub focus_duration: f64,
    /// Seconds for a return-to-home transition (default: 1.5).
    pub home_duration: f64,
    /// Seconds spent at a focused body before returning home (default: 3.0).
    pub dwell_time: f64,
    /// Floor applied to every transition duration (default: 1ms).
    pub min_transition_duration: f64,
    /// Curve for focus and return-home flights (default: cubic out).
    pub camera_easing: Easing,
    /// Camera offset from a focused body's position.
    pub focus_offset: Vec3,
    /// Camera rest position. The camera looks at the origin from here.
    pub home_position: Vec3,
    /// Frame deltas above this are capped, in seconds (default: 0.1).
    pub max_frame_dt: f64,
    /// Vertical field of view in degrees (default: 75).
    pub fov_y_degrees: f32,
    pub near: f32,
    pub far: f32,
    /// Initial viewport size in device pixels.
    pub viewport_width: f32,
    pub viewport_height: f32,
    /// Radians of camera orbit per pixel dragged (default: 0.01).
    pub orbit_sensitivity: f32,
    /// Keeps the orbiting camera this far (radians) from the poles.
    pub polar_margin: f32,
    /// Fractional distance change per zoom step (default: 0.1).
    pub zoom_step: f32,
    pub min_camera_distance: f32,
    pub max_camera_distance: f32,
    /// Pixels the pointer must travel while pressed before a drag starts.
    pub drag_threshold: f32,
    /// Maximum render instances per frame (default: 512).
    pub max_instances: usize,
    /// Maximum events per frame (default: 32).
    pub max_events: usize,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            base_orbit_rate: 0.2,
            multiplier_min: 0.0,
            multiplier_max: 3.0,
            multiplier_epsilon: 0.01,
            focus_duration: 2.0,
            home_duration: 1.5,
            dwell_time: 3.0,
            min_transition_duration: 0.001,
            camera_easing: Easing::CubicOut,
            focus_offset: Vec3::new(0.0, 10.0, 15.0),
            home_position: Vec3::new(0.0, 50.0, 100.0),
            max_frame_dt: 0.1,
            fov_y_degrees: 75.0,
            near: 0.1,
            far: 10_000.0,
            viewport_width: 1280.0,
            viewport_height: 720.0,
            orbit_sensitivity: 0.01,
            polar_margin: 0.1,
            zoom_step: 0.1,
            min_camera_distance: 20.0,
            max_camera_distance: 500.0,
            drag_threshold: 4.0,
            max_instances: 512,
            max_events: 32,
        }
    }
}
