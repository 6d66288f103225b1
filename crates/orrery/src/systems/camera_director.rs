//! Camera state machine.
//!
//! Drives eased focus and return-to-home transitions, and decides when the
//! user may orbit or zoom by hand. Only one transition exists at a time; a
//! new one replaces the old, never edits it. All timing is wall-clock
//! seconds from the frame loop's clock.

use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::BodyId;
use crate::core::scene::Scene;
use crate::extensions::easing::{Easing, ease_vec3};
use crate::renderer::camera::Camera3D;

/// What the camera looks at while a transition runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Aim {
    /// Follow a body's live position.
    Body(BodyId),
    /// Look at the world origin.
    Origin,
}

/// An eased move of the camera position from one point to another.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraTransition {
    pub start_position: Vec3,
    pub target_position: Vec3,
    pub start_time: f64,
    /// Seconds. Never below the configured minimum.
    pub duration: f64,
    pub easing: Easing,
    pub aim: Aim,
}

impl CameraTransition {
    pub fn new(
        start_position: Vec3,
        target_position: Vec3,
        start_time: f64,
        duration: f64,
        min_duration: f64,
        aim: Aim,
    ) -> Self {
        let floor = min_duration.max(f64::EPSILON);
        let duration = if duration.is_finite() { duration.max(floor) } else { floor };
        Self {
            start_position,
            target_position,
            start_time,
            duration,
            easing: Easing::CubicOut,
            aim,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in [0, 1].
    pub fn progress(&self, now: f64) -> f64 {
        ((now - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_complete(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }

    /// Camera position at `now`. Exactly the target once complete.
    pub fn position_at(&self, now: f64) -> Vec3 {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.target_position;
        }
        ease_vec3(self.start_position, self.target_position, p as f32, self.easing)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CameraState {
    /// No transition; manual orbit and zoom are allowed.
    Free,
    /// Moving toward a body.
    TransitioningToTarget { body: BodyId, transition: CameraTransition },
    /// Parked at a body until `return_at`.
    Dwelling { body: BodyId, return_at: f64 },
    /// Moving back to the home position.
    TransitioningToHome { transition: CameraTransition },
}

/// `CameraState` without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraPhase {
    Free,
    TransitioningToTarget,
    Dwelling,
    TransitioningToHome,
}

impl CameraState {
    pub fn phase(&self) -> CameraPhase {
        match self {
            CameraState::Free => CameraPhase::Free,
            CameraState::TransitioningToTarget { .. } => CameraPhase::TransitioningToTarget,
            CameraState::Dwelling { .. } => CameraPhase::Dwelling,
            CameraState::TransitioningToHome { .. } => CameraPhase::TransitioningToHome,
        }
    }
}

pub struct CameraDirector {
    state: CameraState,
    focus_offset: Vec3,
    home_position: Vec3,
    focus_duration: f64,
    home_duration: f64,
    dwell_time: f64,
    min_duration: f64,
    easing: Easing,
    orbit_sensitivity: f32,
    polar_margin: f32,
    zoom_step: f32,
    min_distance: f32,
    max_distance: f32,
}

impl CameraDirector {
    pub fn new(config: &OrreryConfig) -> Self {
        Self {
            state: CameraState::Free,
            focus_offset: config.focus_offset,
            home_position: config.home_position,
            focus_duration: config.focus_duration,
            home_duration: config.home_duration,
            dwell_time: config.dwell_time,
            min_duration: config.min_transition_duration,
            easing: config.camera_easing,
            orbit_sensitivity: config.orbit_sensitivity,
            polar_margin: config.polar_margin,
            zoom_step: config.zoom_step,
            min_distance: config.min_camera_distance,
            max_distance: config.max_camera_distance,
        }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    pub fn phase(&self) -> CameraPhase {
        self.state.phase()
    }

    pub fn is_free(&self) -> bool {
        matches!(self.state, CameraState::Free)
    }

    /// The body being approached or dwelt at.
    pub fn focused_body(&self) -> Option<BodyId> {
        match &self.state {
            CameraState::TransitioningToTarget { body, .. } | CameraState::Dwelling { body, .. } => {
                Some(*body)
            }
            _ => None,
        }
    }

    /// The running transition, if any.
    pub fn transition(&self) -> Option<&CameraTransition> {
        match &self.state {
            CameraState::TransitioningToTarget { transition, .. }
            | CameraState::TransitioningToHome { transition } => Some(transition),
            _ => None,
        }
    }

    /// Start flying toward a body. Only accepted while free.
    pub fn focus(&mut self, body: BodyId, body_pos: Vec3, camera: &Camera3D, now: f64) -> bool {
        if !self.is_free() {
            log::debug!("focus on {:?} ignored in {:?}", body, self.phase());
            return false;
        }
        let transition = CameraTransition::new(
            camera.position,
            body_pos + self.focus_offset,
            now,
            self.focus_duration,
            self.min_duration,
            Aim::Body(body),
        )
        .with_easing(self.easing);
        log::debug!("camera focusing {:?}", body);
        self.state = CameraState::TransitioningToTarget { body, transition };
        true
    }

    /// Start flying home, replacing any focus or dwell.
    /// No-op when already free or already heading home.
    pub fn reset(&mut self, camera: &Camera3D, now: f64) -> bool {
        match self.state {
            CameraState::Free | CameraState::TransitioningToHome { .. } => false,
            _ => {
                self.start_home(camera.position, now);
                true
            }
        }
    }

    fn start_home(&mut self, from: Vec3, now: f64) {
        let transition = CameraTransition::new(
            from,
            self.home_position,
            now,
            self.home_duration,
            self.min_duration,
            Aim::Origin,
        )
        .with_easing(self.easing);
        log::debug!("camera returning home");
        self.state = CameraState::TransitioningToHome { transition };
    }

    /// Advance the state machine and move the camera.
    /// Returns the new phase when the state changed this tick.
    pub fn tick(&mut self, now: f64, camera: &mut Camera3D, scene: &Scene) -> Option<CameraPhase> {
        let before = self.phase();

        match &self.state {
            CameraState::Free => {}
            CameraState::TransitioningToTarget { body, transition } => {
                let body = *body;
                camera.position = transition.position_at(now);
                aim(camera, transition.aim, scene);
                if transition.is_complete(now) {
                    self.state = CameraState::Dwelling { body, return_at: now + self.dwell_time };
                }
            }
            CameraState::Dwelling { body, return_at } => {
                let return_at = *return_at;
                aim(camera, Aim::Body(*body), scene);
                if now >= return_at {
                    self.start_home(camera.position, now);
                }
            }
            CameraState::TransitioningToHome { transition } => {
                camera.position = transition.position_at(now);
                aim(camera, transition.aim, scene);
                if transition.is_complete(now) {
                    self.state = CameraState::Free;
                }
            }
        }

        let after = self.phase();
        (after != before).then_some(after)
    }

    /// Drag-to-orbit around the origin. Ignored unless free.
    pub fn orbit(&self, dx: f32, dy: f32, camera: &mut Camera3D) -> bool {
        if !self.is_free() {
            return false;
        }
        camera.orbit_around(
            Vec3::ZERO,
            -dx * self.orbit_sensitivity,
            dy * self.orbit_sensitivity,
            self.polar_margin,
        );
        true
    }

    /// Step the distance to the origin. Positive `direction` moves away.
    /// Ignored unless free.
    pub fn zoom(&self, direction: f32, camera: &mut Camera3D) -> bool {
        if !self.is_free() || direction == 0.0 || !direction.is_finite() {
            return false;
        }
        let factor = 1.0 + direction.signum() * self.zoom_step;
        camera.dolly(Vec3::ZERO, factor, self.min_distance, self.max_distance);
        camera.look_at(Vec3::ZERO);
        true
    }
}

fn aim(camera: &mut Camera3D, aim: Aim, scene: &Scene) {
    match aim {
        Aim::Origin => camera.look_at(Vec3::ZERO),
        Aim::Body(id) => {
            // A vanished body keeps the previous look target
            if let Some(node) = scene.get(id) {
                camera.look_at(node.pos);
            }
        }
    }
}
