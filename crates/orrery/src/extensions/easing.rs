// extensions/easing.rs
//
// Easing curves for camera transitions.
// No dependencies on Scene or the motion model, just math.

use glam::Vec3;

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Constant velocity (no easing).
    Linear,
    /// Fast start, slow end.
    #[default]
    CubicOut,
}

impl Easing {
    /// Apply the easing function to a normalized time value `t`.
    /// Input is clamped to [0, 1]; every curve maps 0 → 0 and 1 → 1.
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Interpolate Vec3 with easing.
#[inline]
pub fn ease_vec3(a: Vec3, b: Vec3, t: f32, easing: Easing) -> Vec3 {
    a.lerp(b, easing.apply(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::CubicOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at 1");
        }
    }

    #[test]
    fn cubic_out_midpoint() {
        // 1 - (1 - 0.5)^3 = 0.875
        assert!((Easing::CubicOut.apply(0.5) - 0.875).abs() < 1e-6);
    }

    #[test]
    fn input_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(-2.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(3.0), 1.0);
    }

    #[test]
    fn ease_vec3_interpolates() {
        let v = ease_vec3(Vec3::ZERO, Vec3::new(10.0, 0.0, -10.0), 0.5, Easing::Linear);
        assert!((v - Vec3::new(5.0, 0.0, -5.0)).length() < 1e-6);
    }
}
