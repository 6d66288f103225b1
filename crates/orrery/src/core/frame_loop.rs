use glam::Vec3;

use crate::api::config::OrreryConfig;
use crate::api::types::{BodyId, BodyKind, OrreryEvent};
use crate::assets::manifest::SystemManifest;
use crate::components::node::SceneNode;
use crate::core::rng::Rng;
use crate::core::scene::Scene;
use crate::core::time::Clock;
use crate::error::OrreryError;
use crate::input::queue::{Command, CommandQueue};
use crate::renderer::camera::Camera3D;
use crate::renderer::instance::RenderBuffer;
use crate::renderer::traits::{FrameSnapshot, Renderer};
use crate::systems::camera_director::CameraDirector;
use crate::systems::motion::{Body, Debris, MotionModel, Satellite};
use crate::systems::pointer::{PointerInteraction, PointerRequest};
use crate::systems::render::build_render_buffer;

/// The whole orrery: scene, motion, camera and pointer, advanced one frame
/// at a time by the host.
///
/// Per tick: advance the clock, apply queued commands, update motion
/// (unless paused), tick the camera director, refresh hover, then rebuild
/// the render buffer.
pub struct Orrery {
    config: OrreryConfig,
    /// Wall clock. Drives camera transitions.
    clock: Clock,
    /// Runs only while unpaused. Drives orbits.
    motion_clock: Clock,
    paused: bool,
    frame: u64,
    scene: Scene,
    motion: MotionModel,
    director: CameraDirector,
    camera: Camera3D,
    pointer: PointerInteraction,
    commands: CommandQueue,
    events: Vec<OrreryEvent>,
    /// Missing-node reports waiting for room in the event list.
    pending_faults: Vec<BodyId>,
    last_focus: Option<BodyId>,
    /// Viewport size the renderer has not been told about yet.
    pending_resize: Option<(u32, u32)>,
    render_buffer: RenderBuffer,
    overflow_warned: bool,
}

impl Orrery {
    /// Build the scene and motion state described by `manifest`.
    pub fn new(config: OrreryConfig, manifest: &SystemManifest) -> Result<Self, OrreryError> {
        manifest.validate()?;

        let mut scene = Scene::with_capacity(manifest.node_count());
        let mut motion = MotionModel::new(&config, manifest.reference_rate());
        let mut rng = Rng::new(manifest.seed);
        let mut next_id = 0u32;
        let mut alloc = || {
            let id = BodyId(next_id);
            next_id += 1;
            id
        };

        let star = &manifest.star;
        let star_id = alloc();
        motion.add_body(Body::star(star_id, star.name.clone(), star.rotation_speed, star.size));
        scene.spawn(
            SceneNode::new(star_id, BodyKind::Star)
                .with_tag(star.name.clone())
                .with_scale(star.size),
        );

        let mut body_ids = Vec::with_capacity(manifest.bodies.len());
        for desc in &manifest.bodies {
            let id = alloc();
            let random = rng.angle();
            let body = Body::new(
                id,
                desc.name.clone(),
                desc.distance,
                desc.speed,
                desc.rotation_speed,
                desc.size,
            )
            .with_phase(desc.phase.unwrap_or(random));
            scene.spawn(
                SceneNode::new(id, BodyKind::Planet)
                    .with_tag(desc.name.clone())
                    .with_pos(body.position().as_vec3())
                    .with_scale(desc.size),
            );
            motion.add_body(body);
            body_ids.push((desc.name.as_str(), id));
        }

        for desc in &manifest.satellites {
            let id = alloc();
            let random = rng.angle();
            let parent = body_ids
                .iter()
                .find(|(name, _)| *name == desc.parent)
                .map(|(_, id)| *id)
                .ok_or_else(|| OrreryError::UnknownParent {
                    satellite: desc.name.clone(),
                    parent: desc.parent.clone(),
                })?;
            let satellite = Satellite::new(id, desc.name.clone(), parent, desc.distance, desc.speed, desc.size)
                .with_phase(desc.phase.unwrap_or(random));
            let parent_pos = motion.body(parent).map(|b| b.position()).unwrap_or_default();
            let offset = Vec3::new(
                (desc.distance * satellite.angle().cos()) as f32,
                0.0,
                (desc.distance * satellite.angle().sin()) as f32,
            );
            scene.spawn(
                SceneNode::new(id, BodyKind::Satellite)
                    .with_tag(desc.name.clone())
                    .with_pos(parent_pos.as_vec3() + offset)
                    .with_scale(desc.size),
            );
            motion.add_satellite(satellite)?;
        }

        if let Some(belt) = &manifest.belt {
            let half_height = belt.height * 0.5;
            for _ in 0..belt.count {
                let id = alloc();
                let distance = rng.range(belt.inner_radius, belt.outer_radius);
                let angle = rng.angle();
                let height = rng.range(-half_height, half_height);
                let speed = rng.range(belt.min_speed, belt.max_speed);
                let spin = rng.range(belt.min_spin, belt.max_spin);
                let size = rng.range(belt.min_size as f64, belt.max_size as f64) as f32;
                let debris = Debris::new(id, distance, height, speed, spin, angle);
                scene.spawn(
                    SceneNode::new(id, BodyKind::Debris)
                        .with_pos(debris.position().as_vec3())
                        .with_scale(size),
                );
                motion.add_debris(debris);
            }
        }

        log::info!(
            "orrery ready: {} bodies, {} satellites, {} debris",
            motion.bodies().len(),
            motion.satellites().len(),
            motion.debris().len()
        );

        Ok(Self {
            clock: Clock::new(config.max_frame_dt),
            motion_clock: Clock::new(config.max_frame_dt),
            paused: false,
            frame: 0,
            scene,
            motion,
            director: CameraDirector::new(&config),
            camera: Camera3D::from_config(&config),
            pointer: PointerInteraction::new(config.drag_threshold),
            commands: CommandQueue::new(),
            events: Vec::with_capacity(config.max_events),
            pending_faults: Vec::new(),
            last_focus: None,
            pending_resize: None,
            render_buffer: RenderBuffer::new(),
            overflow_warned: false,
            config,
        })
    }

    /// The built-in solar system with default settings.
    pub fn with_solar_system() -> Result<Self, OrreryError> {
        Self::new(OrreryConfig::default(), &SystemManifest::solar_system()?)
    }

    /// Queue a command for the next tick.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Advance one frame. `frame_dt` is the host's delta in seconds.
    pub fn tick(&mut self, frame_dt: f64) {
        self.events.clear();
        self.frame += 1;
        let dt = self.clock.advance(frame_dt);
        let now = self.clock.elapsed();

        for command in self.commands.drain() {
            self.apply(command, now);
        }

        if !self.paused {
            self.motion_clock.advance(dt);
            self.motion.update(self.motion_clock.elapsed(), self.motion_clock.delta(), &mut self.scene);
        }
        self.pending_faults.extend(self.motion.drain_faults().into_iter().map(|f| f.id));

        self.director.tick(now, &mut self.camera, &self.scene);
        self.sync_focus();

        let targets = self.motion.pick_targets(&self.scene);
        if let Some(event) = self.pointer.refresh(&self.camera, &targets) {
            self.events.push(event);
        }

        // Faults go last and only into free slots; the rest wait a frame
        let room = self.config.max_events.saturating_sub(self.events.len());
        let n = room.min(self.pending_faults.len());
        self.events.extend(self.pending_faults.drain(..n).map(OrreryEvent::MissingSceneNode));

        let dropped = build_render_buffer(
            self.scene.iter(),
            &mut self.render_buffer,
            self.config.max_instances,
        );
        if dropped > 0 && !self.overflow_warned {
            log::warn!("{} nodes exceed max_instances ({})", dropped, self.config.max_instances);
            self.overflow_warned = true;
        }
    }

    fn apply(&mut self, command: Command, now: f64) {
        match command {
            Command::SetPaused(paused) => self.set_paused(paused),
            Command::TogglePause => self.set_paused(!self.paused),
            Command::SetSpeedMultiplier { body, value } => {
                if let Err(e) = self.motion.set_speed_multiplier(body, value) {
                    log::warn!("speed multiplier ignored: {e}");
                }
            }
            Command::RequestFocus(id) => self.focus(id, now),
            Command::RequestReset => {
                self.director.reset(&self.camera, now);
            }
            Command::PointerMove { x, y } => {
                if let Some(delta) = self.pointer.pointer_move(x, y) {
                    self.director.orbit(delta.x, delta.y, &mut self.camera);
                }
            }
            Command::PointerDown { x, y } => self.pointer.pointer_down(x, y),
            Command::PointerUp { x, y } => self.pointer.pointer_up(x, y),
            Command::PointerClick { x, y } => {
                let targets = self.motion.pick_targets(&self.scene);
                let free = self.director.is_free();
                match self.pointer.click(x, y, &self.camera, &targets, free) {
                    Some(PointerRequest::Focus(id)) => self.focus(id, now),
                    Some(PointerRequest::Reset) => {
                        self.director.reset(&self.camera, now);
                    }
                    None => {}
                }
            }
            Command::PointerLeave => self.pointer.pointer_leave(),
            Command::Zoom { direction } => {
                self.director.zoom(direction, &mut self.camera);
            }
            Command::Resize { width, height } => {
                self.camera.resize(width, height);
                let viewport = self.camera.viewport;
                self.pending_resize = Some((viewport.x as u32, viewport.y as u32));
            }
        }
        self.sync_focus();
    }

    fn set_paused(&mut self, paused: bool) {
        if self.paused == paused {
            return;
        }
        self.paused = paused;
        log::info!("motion {}", if paused { "paused" } else { "resumed" });
        self.events.push(OrreryEvent::PauseChanged(paused));
    }

    fn focus(&mut self, id: BodyId, now: f64) {
        let orbiting = self.motion.body(id).map(|b| b.is_orbiting()).unwrap_or(false);
        match self.scene.get(id) {
            Some(node) if orbiting => {
                self.director.focus(id, node.pos, &self.camera, now);
            }
            _ => log::warn!("cannot focus {:?}", id),
        }
    }

    fn sync_focus(&mut self) {
        let focus = self.director.focused_body();
        if focus != self.last_focus {
            self.last_focus = focus;
            self.events.push(OrreryEvent::FocusChanged(focus));
        }
    }

    /// Remove a body, its satellites, and their scene nodes.
    pub fn remove_body(&mut self, id: BodyId) -> Vec<BodyId> {
        let removed = self.motion.remove_body(id);
        for gone in &removed {
            self.scene.despawn(*gone);
        }
        removed
    }

    /// Read-only view of the current frame.
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            frame: self.frame,
            instances: &self.render_buffer.instances,
            camera: self.camera.uniform(),
            hovered: self.pointer.hovered(),
            paused: self.paused,
            events: &self.events,
        }
    }

    /// Hand the current frame to `renderer`, after any viewport change
    /// queued since the last draw.
    pub fn draw(&mut self, renderer: &mut impl Renderer) {
        if let Some((width, height)) = self.pending_resize.take() {
            renderer.resize(width, height);
        }
        renderer.draw(&self.snapshot());
    }

    /// Tick, then hand the frame to `renderer`.
    pub fn tick_and_draw(&mut self, frame_dt: f64, renderer: &mut impl Renderer) {
        self.tick(frame_dt);
        self.draw(renderer);
    }

    // -- Accessors --

    pub fn config(&self) -> &OrreryConfig {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Host-owned scene surgery. Nodes removed here are reported as
    /// missing on the next unpaused tick.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    pub fn motion(&self) -> &MotionModel {
        &self.motion
    }

    pub fn director(&self) -> &CameraDirector {
        &self.director
    }

    pub fn camera(&self) -> &Camera3D {
        &self.camera
    }

    pub fn hovered(&self) -> Option<BodyId> {
        self.pointer.hovered()
    }

    /// Events raised by the last tick.
    pub fn events(&self) -> &[OrreryEvent] {
        &self.events
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Wall-clock seconds.
    pub fn elapsed(&self) -> f64 {
        self.clock.elapsed()
    }

    /// Seconds of unpaused motion.
    pub fn motion_elapsed(&self) -> f64 {
        self.motion_clock.elapsed()
    }

    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.scene.find_by_tag(name).map(|n| n.id)
    }
}
