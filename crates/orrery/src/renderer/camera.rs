use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec3};

use crate::api::config::OrreryConfig;

/// A half-line in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    /// Distance along the ray to the first intersection with a sphere.
    /// A ray starting inside the sphere hits at its exit point.
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let b = oc.dot(self.dir);
        let c = oc.length_squared() - radius * radius;
        let disc = b * b - c;
        if disc < 0.0 {
            return None;
        }
        let root = disc.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        if far >= 0.0 { Some(far) } else { None }
    }
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// Eye position; `w` is always 1.
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

/// Perspective camera in world space.
/// Owned by the frame loop; moved by the camera director and by manual
/// orbit/zoom while the director is idle.
#[derive(Debug, Clone)]
pub struct Camera3D {
    pub position: Vec3,
    /// Point the camera looks at.
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
    /// Viewport size in device pixels.
    pub viewport: Vec2,
}

impl Camera3D {
    /// Camera at the configured home position, looking at the origin.
    pub fn from_config(config: &OrreryConfig) -> Self {
        Self {
            position: config.home_position,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: config.fov_y_degrees.to_radians(),
            near: config.near,
            far: config.far,
            viewport: Vec2::new(config.viewport_width, config.viewport_height),
        }
    }

    pub fn aspect(&self) -> f32 {
        if self.viewport.y > 0.0 {
            self.viewport.x / self.viewport.y
        } else {
            1.0
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect(), self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_projection().to_cols_array_2d(),
            eye: self.position.extend(1.0).to_array(),
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Resize the viewport (e.g. on window resize). Zero sizes are ignored.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.viewport = Vec2::new(width, height);
        }
    }

    /// Device pixels (origin top-left) to NDC (origin center, Y up).
    pub fn screen_to_ndc(&self, screen: Vec2) -> Vec2 {
        Vec2::new(
            screen.x / self.viewport.x * 2.0 - 1.0,
            -(screen.y / self.viewport.y) * 2.0 + 1.0,
        )
    }

    pub fn ndc_to_screen(&self, ndc: Vec2) -> Vec2 {
        Vec2::new(
            (ndc.x + 1.0) * 0.5 * self.viewport.x,
            (1.0 - ndc.y) * 0.5 * self.viewport.y,
        )
    }

    /// Ray from the eye through a point in NDC.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let forward = (self.target - self.position).normalize_or_zero();
        let right = forward.cross(self.up).normalize_or_zero();
        let up = right.cross(forward);
        let half_h = (self.fov_y * 0.5).tan();
        let half_w = half_h * self.aspect();
        Ray::new(
            self.position,
            forward + right * (ndc.x * half_w) + up * (ndc.y * half_h),
        )
    }

    pub fn ray_from_screen(&self, screen: Vec2) -> Ray {
        self.ray_from_ndc(self.screen_to_ndc(screen))
    }

    /// World point to device pixels. `None` when behind the camera.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(self.ndc_to_screen(Vec2::new(ndc.x, ndc.y)))
    }

    /// Rotate the camera on its sphere around `pivot`.
    /// Azimuth is measured from +Z toward +X; the polar angle from +Y.
    /// The polar angle stays within `[margin, π - margin]`.
    pub fn orbit_around(&mut self, pivot: Vec3, d_theta: f32, d_phi: f32, margin: f32) {
        let offset = self.position - pivot;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }
        let theta = offset.x.atan2(offset.z) + d_theta;
        let phi = (offset.y / radius).clamp(-1.0, 1.0).acos() + d_phi;
        let phi = phi.clamp(margin, std::f32::consts::PI - margin);

        self.position = pivot
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
        self.target = pivot;
    }

    /// Scale the distance to `pivot` by `factor`, clamped to `[min, max]`.
    pub fn dolly(&mut self, pivot: Vec3, factor: f32, min: f32, max: f32) {
        let offset = (self.position - pivot) * factor;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }
        let clamped = distance.clamp(min, max);
        self.position = pivot + offset * (clamped / distance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> Camera3D {
        Camera3D::from_config(&OrreryConfig::default())
    }

    #[test]
    fn sphere_hit_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-5);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 2.0).is_none());
        // Sphere behind the ray origin
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 2.0).is_none());
    }

    #[test]
    fn ndc_round_trip_corners() {
        let cam = camera();
        assert_eq!(cam.screen_to_ndc(Vec2::ZERO), Vec2::new(-1.0, 1.0));
        assert_eq!(cam.screen_to_ndc(Vec2::new(1280.0, 720.0)), Vec2::new(1.0, -1.0));
        assert_eq!(cam.ndc_to_screen(Vec2::ZERO), Vec2::new(640.0, 360.0));
    }

    #[test]
    fn center_ray_points_at_target() {
        let cam = camera();
        let ray = cam.ray_from_ndc(Vec2::ZERO);
        let expected = (cam.target - cam.position).normalize();
        assert!((ray.dir - expected).length() < 1e-4);
        assert_eq!(ray.origin, cam.position);
    }

    #[test]
    fn project_target_lands_at_center() {
        let cam = camera();
        let screen = cam.project(Vec3::ZERO).unwrap();
        assert!((screen - Vec2::new(640.0, 360.0)).length() < 1e-2);
        // Behind the camera
        assert!(cam.project(Vec3::new(0.0, 100.0, 200.0)).is_none());
    }

    #[test]
    fn orbit_keeps_radius_and_clamps_pole() {
        let mut cam = camera();
        let radius = cam.position.length();
        cam.orbit_around(Vec3::ZERO, 0.5, 0.0, 0.1);
        assert!((cam.position.length() - radius).abs() < 1e-3);

        cam.orbit_around(Vec3::ZERO, 0.0, -10.0, 0.1);
        let phi = (cam.position.y / cam.position.length()).acos();
        assert!((phi - 0.1).abs() < 1e-4);
    }

    #[test]
    fn orbit_azimuth_from_home() {
        let mut cam = camera();
        // Home (0, 50, 100) has azimuth 0
        cam.orbit_around(Vec3::ZERO, std::f32::consts::FRAC_PI_2, 0.0, 0.1);
        assert!((cam.position.x - 100.0).abs() < 1e-2);
        assert!(cam.position.z.abs() < 1e-3);
        assert!((cam.position.y - 50.0).abs() < 1e-3);
    }

    #[test]
    fn dolly_clamps_distance() {
        let mut cam = camera();
        cam.dolly(Vec3::ZERO, 0.01, 20.0, 500.0);
        assert!((cam.position.length() - 20.0).abs() < 1e-3);
        cam.dolly(Vec3::ZERO, 100.0, 20.0, 500.0);
        assert!((cam.position.length() - 500.0).abs() < 1e-2);
    }

    #[test]
    fn uniform_is_20_floats() {
        assert_eq!(std::mem::size_of::<CameraUniform>(), CameraUniform::FLOATS * 4);
        let u = camera().uniform();
        assert_eq!(u.eye, [0.0, 50.0, 100.0, 1.0]);
    }
}
