//! Orbital and rotational state for every moving object.
//!
//! Body angles come from a closed-form expression of elapsed time instead of
//! per-frame accumulation, so a body's position depends only on the clock
//! and its phase offset. Changing a speed multiplier re-anchors that offset
//! so the body continues from where it is drawn.
//!
//! Angles are f64 throughout. Only node transforms are narrowed to f32.

use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

use glam::{DVec3, Vec3};

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, BodyKind};
use crate::core::scene::Scene;
use crate::error::OrreryError;

/// Self-rotation of satellites, rad/s.
const SATELLITE_SPIN: f64 = 0.5;
/// Debris orbits at this fraction of its nominal speed.
const DEBRIS_ORBIT_SCALE: f64 = 0.05;
/// Debris spin ratios for the x, y and z axes.
const DEBRIS_SPIN_RATIOS: [f64; 3] = [1.0, 0.7, 0.5];

/// Wrap an angle into `[-π, π)`.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to exactly TAU
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// A primary orbiting body, or the star as a body with no orbit.
#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub name: String,
    pub kind: BodyKind,
    /// Orbit radius. Zero for the star.
    pub orbit_radius: f64,
    /// Nominal orbital speed at multiplier 1.0, in manifest units.
    pub base_angular_rate: f64,
    /// Self-rotation, rad/s at multiplier 1.0.
    pub rotation_rate: f64,
    /// Visual radius; also the hit-test radius.
    pub size: f32,
    relative_rate: f64,
    angle_offset: f64,
    start_time: Option<f64>,
    speed_multiplier: f64,
    last_applied_multiplier: f64,
    angle: f64,
    spin: f64,
    position: DVec3,
}

impl Body {
    pub fn new(
        id: BodyId,
        name: impl Into<String>,
        orbit_radius: f64,
        base_angular_rate: f64,
        rotation_rate: f64,
        size: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            kind: BodyKind::Planet,
            orbit_radius,
            base_angular_rate,
            rotation_rate,
            size,
            relative_rate: 0.0,
            angle_offset: 0.0,
            start_time: None,
            speed_multiplier: 1.0,
            last_applied_multiplier: 1.0,
            angle: 0.0,
            spin: 0.0,
            position: DVec3::new(orbit_radius, 0.0, 0.0),
        }
    }

    /// The central body: no orbit, spins in place.
    pub fn star(id: BodyId, name: impl Into<String>, rotation_rate: f64, size: f32) -> Self {
        let mut body = Self::new(id, name, 0.0, 0.0, rotation_rate, size);
        body.kind = BodyKind::Star;
        body
    }

    /// Initial orbital phase in radians.
    pub fn with_phase(mut self, phase: f64) -> Self {
        self.angle_offset = wrap_angle(phase);
        self.angle = self.angle_offset;
        self.position = orbit_point(self.orbit_radius, self.angle);
        self
    }

    /// Bodies with a zero radius have no meaningful orbital angle.
    pub fn is_orbiting(&self) -> bool {
        self.orbit_radius > 0.0
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.speed_multiplier
    }

    /// Multiplier currently used by the angle expression.
    pub fn last_applied_multiplier(&self) -> f64 {
        self.last_applied_multiplier
    }

    pub fn angle_offset(&self) -> f64 {
        self.angle_offset
    }

    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    /// Orbital angle from the last update, wrapped.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Position from the last update.
    pub fn position(&self) -> DVec3 {
        self.position
    }

    /// Self-rotation about Y from the last update, wrapped.
    pub fn spin(&self) -> f64 {
        self.spin
    }

    /// Angle the closed-form expression gives at `elapsed` for `multiplier`.
    fn phase_at(&self, elapsed: f64, multiplier: f64, base_orbit_rate: f64) -> f64 {
        let start = self.start_time.unwrap_or(elapsed);
        (elapsed - start) * base_orbit_rate * self.relative_rate * multiplier + self.angle_offset
    }
}

/// A body orbiting another body.
#[derive(Debug, Clone)]
pub struct Satellite {
    pub id: BodyId,
    pub name: String,
    /// Parent body, resolved by lookup each update.
    pub parent: BodyId,
    pub distance: f64,
    /// Angular speed, rad/s.
    pub speed: f64,
    pub size: f32,
    angle: f64,
    spin: f64,
    position: DVec3,
}

impl Satellite {
    pub fn new(
        id: BodyId,
        name: impl Into<String>,
        parent: BodyId,
        distance: f64,
        speed: f64,
        size: f32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            parent,
            distance,
            speed,
            size,
            angle: 0.0,
            spin: 0.0,
            position: DVec3::ZERO,
        }
    }

    pub fn with_phase(mut self, phase: f64) -> Self {
        self.angle = wrap_angle(phase);
        self
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }
}

/// A belt fragment. Orbits the center slowly and tumbles.
#[derive(Debug, Clone)]
pub struct Debris {
    pub id: BodyId,
    pub distance: f64,
    /// Fixed offset from the orbital plane.
    pub height: f64,
    pub speed: f64,
    /// Base tumble rate, rad/s.
    pub spin_rate: f64,
    angle: f64,
    rotation: DVec3,
}

impl Debris {
    pub fn new(id: BodyId, distance: f64, height: f64, speed: f64, spin_rate: f64, angle: f64) -> Self {
        Self {
            id,
            distance,
            height,
            speed,
            spin_rate,
            angle: wrap_angle(angle),
            rotation: DVec3::ZERO,
        }
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> DVec3 {
        let flat = orbit_point(self.distance, self.angle);
        DVec3::new(flat.x, self.height, flat.z)
    }
}

/// A configuration fault found during an update.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFault {
    pub id: BodyId,
    pub name: String,
}

impl From<SceneFault> for OrreryError {
    fn from(fault: SceneFault) -> Self {
        OrreryError::MissingSceneNode { id: fault.id, name: fault.name }
    }
}

/// A sphere the pointer layer can hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickTarget {
    pub id: BodyId,
    pub center: Vec3,
    pub radius: f32,
    /// Clicking it may start a focus transition.
    pub focusable: bool,
}

/// Owns all body, satellite and debris state.
/// The only writer of node transforms in the scene.
pub struct MotionModel {
    bodies: Vec<Body>,
    satellites: Vec<Satellite>,
    debris: Vec<Debris>,
    base_orbit_rate: f64,
    reference_rate: f64,
    multiplier_min: f64,
    multiplier_max: f64,
    epsilon: f64,
    reported: HashSet<BodyId>,
    faults: Vec<SceneFault>,
}

impl MotionModel {
    pub fn new(config: &OrreryConfig, reference_rate: f64) -> Self {
        let reference_rate = if reference_rate.is_finite() && reference_rate > 0.0 {
            reference_rate
        } else {
            1.0
        };
        Self {
            bodies: Vec::new(),
            satellites: Vec::new(),
            debris: Vec::new(),
            base_orbit_rate: config.base_orbit_rate,
            reference_rate,
            multiplier_min: config.multiplier_min,
            multiplier_max: config.multiplier_max,
            epsilon: config.multiplier_epsilon,
            reported: HashSet::new(),
            faults: Vec::new(),
        }
    }

    pub fn add_body(&mut self, mut body: Body) {
        body.relative_rate = body.base_angular_rate / self.reference_rate;
        self.bodies.push(body);
    }

    /// Add a satellite. Its parent must already be present.
    pub fn add_satellite(&mut self, satellite: Satellite) -> Result<(), OrreryError> {
        if self.body(satellite.parent).is_none() {
            return Err(OrreryError::UnknownBody(satellite.parent));
        }
        self.satellites.push(satellite);
        Ok(())
    }

    pub fn add_debris(&mut self, debris: Debris) {
        self.debris.push(debris);
    }

    /// Remove a body together with its satellites.
    /// Returns every removed id, so the caller can drop the scene nodes.
    pub fn remove_body(&mut self, id: BodyId) -> Vec<BodyId> {
        let mut removed = Vec::new();
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            self.bodies.remove(idx);
            removed.push(id);
            self.satellites.retain(|s| {
                if s.parent == id {
                    removed.push(s.id);
                    false
                } else {
                    true
                }
            });
        } else if let Some(idx) = self.satellites.iter().position(|s| s.id == id) {
            self.satellites.remove(idx);
            removed.push(id);
        } else if let Some(idx) = self.debris.iter().position(|d| d.id == id) {
            self.debris.remove(idx);
            removed.push(id);
        }
        for gone in &removed {
            self.reported.remove(gone);
        }
        removed
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    pub fn body_by_name(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name == name)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn satellites(&self) -> &[Satellite] {
        &self.satellites
    }

    pub fn debris(&self) -> &[Debris] {
        &self.debris
    }

    /// Set a body's speed multiplier, clamped into the configured range.
    /// Returns the value actually stored. Non-finite requests are ignored.
    pub fn set_speed_multiplier(&mut self, id: BodyId, value: f64) -> Result<f64, OrreryError> {
        let (min, max) = (self.multiplier_min, self.multiplier_max);
        let body = self
            .bodies
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(OrreryError::UnknownBody(id))?;
        if !value.is_finite() {
            log::warn!("ignoring non-finite speed multiplier for {}", body.name);
            return Ok(body.speed_multiplier);
        }
        body.speed_multiplier = value.clamp(min, max);
        Ok(body.speed_multiplier)
    }

    /// Advance everything by one tick and write the node transforms.
    /// `elapsed` is the motion clock; `dt` is this tick's share of it.
    pub fn update(&mut self, elapsed: f64, dt: f64, scene: &mut Scene) {
        let base = self.base_orbit_rate;
        let epsilon = self.epsilon;

        for i in 0..self.bodies.len() {
            let body = &mut self.bodies[i];
            let Some(node) = scene.get_mut(body.id) else {
                let fault = SceneFault { id: body.id, name: body.name.clone() };
                self.report(fault);
                continue;
            };

            if body.start_time.is_none() {
                body.start_time = Some(elapsed);
            }

            if (body.speed_multiplier - body.last_applied_multiplier).abs() > epsilon {
                let multiplier = body.speed_multiplier;
                if body.is_orbiting() {
                    let current = body.position.z.atan2(body.position.x);
                    let predicted = body.phase_at(elapsed, multiplier, base);
                    body.angle_offset =
                        wrap_angle(body.angle_offset + wrap_angle(current - predicted));
                }
                log::debug!(
                    "{} multiplier {:.2} -> {:.2}",
                    body.name,
                    body.last_applied_multiplier,
                    multiplier
                );
                body.last_applied_multiplier = multiplier;
            }

            body.angle = wrap_angle(body.phase_at(elapsed, body.last_applied_multiplier, base));
            body.position = orbit_point(body.orbit_radius, body.angle);
            body.spin = wrap_angle(body.spin + dt * body.rotation_rate * body.last_applied_multiplier);

            node.pos = body.position.as_vec3();
            node.rotation.y = body.spin as f32;
        }

        for i in 0..self.satellites.len() {
            let parent_pos = match self.body(self.satellites[i].parent) {
                Some(parent) => parent.position,
                None => continue,
            };
            let sat = &mut self.satellites[i];
            let Some(node) = scene.get_mut(sat.id) else {
                let fault = SceneFault { id: sat.id, name: sat.name.clone() };
                self.report(fault);
                continue;
            };
            sat.angle = wrap_angle(sat.angle + dt * sat.speed);
            sat.position = parent_pos + orbit_point(sat.distance, sat.angle);
            sat.spin = wrap_angle(sat.spin + dt * SATELLITE_SPIN);

            node.pos = sat.position.as_vec3();
            node.rotation.y = sat.spin as f32;
        }

        for i in 0..self.debris.len() {
            let rock = &mut self.debris[i];
            let Some(node) = scene.get_mut(rock.id) else {
                let fault = SceneFault { id: rock.id, name: format!("debris {}", rock.id.0) };
                self.report(fault);
                continue;
            };
            rock.angle = wrap_angle(rock.angle + dt * rock.speed * DEBRIS_ORBIT_SCALE);
            let spin = dt * rock.spin_rate;
            rock.rotation = DVec3::new(
                wrap_angle(rock.rotation.x + spin * DEBRIS_SPIN_RATIOS[0]),
                wrap_angle(rock.rotation.y + spin * DEBRIS_SPIN_RATIOS[1]),
                wrap_angle(rock.rotation.z + spin * DEBRIS_SPIN_RATIOS[2]),
            );

            node.pos = rock.position().as_vec3();
            node.rotation = rock.rotation.as_vec3();
        }
    }

    /// Take the faults found since the last drain.
    pub fn drain_faults(&mut self) -> Vec<SceneFault> {
        std::mem::take(&mut self.faults)
    }

    /// Hit-test spheres for the star and the orbiting bodies.
    /// Positions come from the scene so picking matches what is drawn.
    pub fn pick_targets(&self, scene: &Scene) -> Vec<PickTarget> {
        self.bodies
            .iter()
            .filter_map(|body| {
                let node = scene.get(body.id)?;
                if !node.visible {
                    return None;
                }
                Some(PickTarget {
                    id: body.id,
                    center: node.pos,
                    radius: body.size,
                    focusable: body.is_orbiting(),
                })
            })
            .collect()
    }

    fn report(&mut self, fault: SceneFault) {
        if self.reported.insert(fault.id) {
            log::error!("{}", OrreryError::from(fault.clone()));
            self.faults.push(fault);
        }
    }
}

fn orbit_point(radius: f64, angle: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::node::SceneNode;

    const EARTH: BodyId = BodyId(3);

    fn earth_model() -> (MotionModel, Scene) {
        let config = OrreryConfig::default();
        let mut motion = MotionModel::new(&config, 4.74);
        motion.add_body(Body::new(EARTH, "Earth", 25.0, 2.98, 1.0, 1.0));
        let mut scene = Scene::new();
        scene.spawn(SceneNode::new(EARTH, BodyKind::Planet).with_tag("Earth"));
        (motion, scene)
    }

    fn run(motion: &mut MotionModel, scene: &mut Scene, from: f64, to: f64, dt: f64) -> f64 {
        let mut t = from;
        while t + dt <= to + 1e-9 {
            t += dt;
            motion.update(t, dt, scene);
        }
        t
    }

    #[test]
    fn wrap_angle_range() {
        assert_eq!(wrap_angle(0.0), 0.0);
        assert!((wrap_angle(3.0 * PI) + PI).abs() < 1e-12);
        assert!((wrap_angle(-PI) + PI).abs() < 1e-12);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-12);
        for i in -100..100 {
            let w = wrap_angle(i as f64 * 0.37);
            assert!((-PI..PI).contains(&w), "w = {w}");
        }
        assert_eq!(wrap_angle(f64::NAN), 0.0);
    }

    #[test]
    fn earth_after_ten_seconds() {
        let (mut motion, mut scene) = earth_model();
        motion.update(0.0, 0.0, &mut scene);
        motion.update(10.0, 0.1, &mut scene);

        let expected = wrap_angle(10.0 * 0.2 * (2.98 / 4.74));
        let earth = motion.body(EARTH).unwrap();
        assert!((earth.angle() - expected).abs() < 1e-12);

        let pos = earth.position();
        assert!((pos.x - 25.0 * expected.cos()).abs() < 1e-9);
        assert_eq!(pos.y, 0.0);
        assert!((pos.z - 25.0 * expected.sin()).abs() < 1e-9);

        let node = scene.get(EARTH).unwrap();
        assert!((node.pos.x - pos.x as f32).abs() < 1e-4);
        assert!((node.pos.z - pos.z as f32).abs() < 1e-4);
    }

    #[test]
    fn multiplier_change_keeps_position() {
        let (mut motion, mut scene) = earth_model();
        motion.update(0.0, 0.0, &mut scene);
        motion.update(5.0, 0.1, &mut scene);
        let before = motion.body(EARTH).unwrap().position();

        motion.set_speed_multiplier(EARTH, 2.0).unwrap();
        motion.update(5.0, 0.0, &mut scene);
        let after = motion.body(EARTH).unwrap().position();
        assert!((before - after).length() < 1e-9, "jump of {}", (before - after).length());
        assert_eq!(motion.body(EARTH).unwrap().last_applied_multiplier(), 2.0);

        // Now advancing at double rate
        let a0 = motion.body(EARTH).unwrap().angle();
        motion.update(6.0, 1.0, &mut scene);
        let a1 = motion.body(EARTH).unwrap().angle();
        let step = wrap_angle(a1 - a0);
        assert!((step - 2.0 * 0.2 * (2.98 / 4.74)).abs() < 1e-9);
    }

    #[test]
    fn small_frame_steps_stay_continuous_across_changes() {
        let (mut motion, mut scene) = earth_model();
        let dt = 1.0 / 60.0;
        let mut t = 0.0;
        motion.update(t, 0.0, &mut scene);
        let mut prev = motion.body(EARTH).unwrap().position();
        let max_step = 25.0 * 3.0 * 0.2 * (2.98 / 4.74) * dt * 1.01;
        for (i, value) in [0.5, 3.0, 0.0, 1.7, 2.2].into_iter().enumerate() {
            motion.set_speed_multiplier(EARTH, value).unwrap();
            for _ in 0..(30 + i * 7) {
                t += dt;
                motion.update(t, dt, &mut scene);
                let pos = motion.body(EARTH).unwrap().position();
                assert!((pos - prev).length() <= max_step, "jump at t={t}");
                prev = pos;
            }
        }
    }

    #[test]
    fn angle_sequence_is_deterministic() {
        let (mut a, mut scene_a) = earth_model();
        let (mut b, mut scene_b) = earth_model();
        a.set_speed_multiplier(EARTH, 1.5).unwrap();
        b.set_speed_multiplier(EARTH, 1.5).unwrap();
        for step in 0..200 {
            let t = step as f64 / 60.0;
            a.update(t, 1.0 / 60.0, &mut scene_a);
            b.update(t, 1.0 / 60.0, &mut scene_b);
            assert_eq!(a.body(EARTH).unwrap().angle(), b.body(EARTH).unwrap().angle());
        }
    }

    #[test]
    fn sub_epsilon_changes_are_deferred() {
        let (mut motion, mut scene) = earth_model();
        motion.update(0.0, 0.0, &mut scene);
        motion.set_speed_multiplier(EARTH, 1.005).unwrap();
        motion.update(1.0, 1.0, &mut scene);
        assert_eq!(motion.body(EARTH).unwrap().last_applied_multiplier(), 1.0);
    }

    #[test]
    fn multiplier_is_clamped() {
        let (mut motion, _) = earth_model();
        assert_eq!(motion.set_speed_multiplier(EARTH, 9.0).unwrap(), 3.0);
        assert_eq!(motion.set_speed_multiplier(EARTH, -2.0).unwrap(), 0.0);
        assert_eq!(motion.set_speed_multiplier(EARTH, f64::NAN).unwrap(), 0.0);
        assert!(matches!(
            motion.set_speed_multiplier(BodyId(99), 1.0),
            Err(OrreryError::UnknownBody(BodyId(99)))
        ));
    }

    #[test]
    fn zero_multiplier_freezes_orbit_but_not_clock() {
        let (mut motion, mut scene) = earth_model();
        motion.update(0.0, 0.0, &mut scene);
        motion.update(2.0, 2.0, &mut scene);
        motion.set_speed_multiplier(EARTH, 0.0).unwrap();
        motion.update(2.0, 0.0, &mut scene);
        let frozen = motion.body(EARTH).unwrap().position();
        run(&mut motion, &mut scene, 2.0, 4.0, 0.5);
        assert!((motion.body(EARTH).unwrap().position() - frozen).length() < 1e-9);
    }

    #[test]
    fn tiny_multiplier_change_moves_neither_orbit_nor_spin() {
        let (mut motion, mut scene) = earth_model();
        motion.set_speed_multiplier(EARTH, 0.0).unwrap();
        motion.update(0.0, 0.0, &mut scene);
        let (angle, spin) = (motion.body(EARTH).unwrap().angle(), motion.body(EARTH).unwrap().spin());

        motion.set_speed_multiplier(EARTH, 0.009).unwrap();
        run(&mut motion, &mut scene, 0.0, 100.0, 0.5);
        let earth = motion.body(EARTH).unwrap();
        assert_eq!(earth.last_applied_multiplier(), 0.0);
        assert!((earth.angle() - angle).abs() < 1e-12);
        assert!((earth.spin() - spin).abs() < 1e-12);
    }

    #[test]
    fn star_spins_without_orbit() {
        let config = OrreryConfig::default();
        let mut motion = MotionModel::new(&config, 4.74);
        let sun = BodyId(0);
        motion.add_body(Body::star(sun, "Sun", 0.5, 3.0));
        let mut scene = Scene::new();
        scene.spawn(SceneNode::new(sun, BodyKind::Star));
        motion.set_speed_multiplier(sun, 2.0).unwrap();
        motion.update(0.0, 0.0, &mut scene);
        motion.update(1.0, 1.0, &mut scene);
        let star = motion.body(sun).unwrap();
        assert_eq!(star.position(), DVec3::ZERO);
        assert!((scene.get(sun).unwrap().rotation.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn missing_node_reported_once() {
        let config = OrreryConfig::default();
        let mut motion = MotionModel::new(&config, 4.74);
        motion.add_body(Body::new(BodyId(7), "Ghost", 10.0, 1.0, 1.0, 1.0));
        let mut scene = Scene::new();
        motion.update(0.0, 0.0, &mut scene);
        motion.update(0.1, 0.1, &mut scene);
        let faults = motion.drain_faults();
        assert_eq!(faults, vec![SceneFault { id: BodyId(7), name: "Ghost".to_string() }]);

        motion.update(0.2, 0.1, &mut scene);
        assert!(motion.drain_faults().is_empty());
        assert!(motion.body(BodyId(7)).unwrap().start_time().is_none());
    }

    #[test]
    fn satellite_follows_parent() {
        let (mut motion, mut scene) = earth_model();
        let moon = BodyId(20);
        motion
            .add_satellite(Satellite::new(moon, "Moon", EARTH, 4.0, 0.5, 0.27))
            .unwrap();
        scene.spawn(SceneNode::new(moon, BodyKind::Satellite));

        run(&mut motion, &mut scene, 0.0, 3.0, 0.1);
        let earth = motion.body(EARTH).unwrap().position();
        let sat = &motion.satellites()[0];
        assert!(((sat.position() - earth).length() - 4.0).abs() < 1e-9);
        assert!((sat.angle() - wrap_angle(3.0 * 0.5)).abs() < 1e-6);
    }

    #[test]
    fn satellite_requires_parent() {
        let (mut motion, _) = earth_model();
        let err = motion
            .add_satellite(Satellite::new(BodyId(21), "Lost", BodyId(99), 4.0, 0.5, 0.2))
            .unwrap_err();
        assert!(matches!(err, OrreryError::UnknownBody(BodyId(99))));
    }

    #[test]
    fn removing_body_removes_satellites() {
        let (mut motion, _) = earth_model();
        motion
            .add_satellite(Satellite::new(BodyId(20), "Moon", EARTH, 4.0, 0.5, 0.27))
            .unwrap();
        let removed = motion.remove_body(EARTH);
        assert_eq!(removed, vec![EARTH, BodyId(20)]);
        assert!(motion.bodies().is_empty());
        assert!(motion.satellites().is_empty());
    }

    #[test]
    fn debris_keeps_height_and_radius() {
        let config = OrreryConfig::default();
        let mut motion = MotionModel::new(&config, 4.74);
        let id = BodyId(50);
        motion.add_debris(Debris::new(id, 40.0, 0.3, 0.2, 0.05, 1.0));
        let mut scene = Scene::new();
        scene.spawn(SceneNode::new(id, BodyKind::Debris));
        motion.update(1.0, 1.0, &mut scene);

        let rock = &motion.debris()[0];
        assert!((rock.angle() - (1.0 + 0.2 * 0.05)).abs() < 1e-12);
        let node = scene.get(id).unwrap();
        assert!((node.pos.y - 0.3).abs() < 1e-6);
        assert!((Vec3::new(node.pos.x, 0.0, node.pos.z).length() - 40.0).abs() < 1e-3);
        assert!((node.rotation.y - 0.035).abs() < 1e-6);
    }

    #[test]
    fn pick_targets_exclude_satellites_and_debris() {
        let (mut motion, mut scene) = earth_model();
        motion.add_body(Body::star(BodyId(0), "Sun", 0.5, 3.0));
        scene.spawn(SceneNode::new(BodyId(0), BodyKind::Star));
        motion
            .add_satellite(Satellite::new(BodyId(20), "Moon", EARTH, 4.0, 0.5, 0.27))
            .unwrap();
        scene.spawn(SceneNode::new(BodyId(20), BodyKind::Satellite));
        motion.update(0.0, 0.0, &mut scene);

        let targets = motion.pick_targets(&scene);
        assert_eq!(targets.len(), 2);
        let sun = targets.iter().find(|t| t.id == BodyId(0)).unwrap();
        assert!(!sun.focusable);
        let earth = targets.iter().find(|t| t.id == EARTH).unwrap();
        assert!(earth.focusable);
        assert_eq!(earth.radius, 1.0);
    }
}
