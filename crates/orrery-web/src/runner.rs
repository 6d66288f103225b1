use orrery::{
    BodyId, BodyKind, Command, FrameSnapshot, Orrery, OrreryConfig, OrreryError,
    ProtocolLayout, Renderer, SystemManifest,
};

/// Packs each frame snapshot into one flat float buffer.
/// JS reads it in place through `frame_ptr`.
pub struct FramePacker {
    layout: ProtocolLayout,
    buffer: Vec<f32>,
}

impl FramePacker {
    pub fn new(layout: ProtocolLayout) -> Self {
        let buffer = vec![0.0; layout.buffer_total_floats];
        Self { layout, buffer }
    }

    pub fn layout(&self) -> &ProtocolLayout {
        &self.layout
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.buffer
    }
}

impl Renderer for FramePacker {
    fn draw(&mut self, frame: &FrameSnapshot<'_>) {
        self.layout.write_frame(&mut self.buffer, frame);
    }
}

/// Owns the orrery and its frame buffer for the wasm exports.
///
/// wasm-bindgen cannot export a struct holding borrowed state, so `lib.rs`
/// keeps one runner in a `thread_local!` and forwards free functions here.
pub struct OrreryRunner {
    orrery: Orrery,
    packer: FramePacker,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig, manifest: &SystemManifest) -> Result<Self, OrreryError> {
        let layout = ProtocolLayout::from_config(&config);
        let orrery = Orrery::new(config, manifest)?;
        Ok(Self {
            orrery,
            packer: FramePacker::new(layout),
        })
    }

    /// Runner over the built-in solar system.
    pub fn solar_system() -> Result<Self, OrreryError> {
        Self::new(OrreryConfig::default(), &SystemManifest::solar_system()?)
    }

    pub fn from_manifest_json(json: &str) -> Result<Self, OrreryError> {
        Self::new(OrreryConfig::default(), &SystemManifest::from_json(json)?)
    }

    /// Queue a UI command for the next tick.
    pub fn push(&mut self, command: Command) {
        self.orrery.push(command);
    }

    /// Run one frame and repack the frame buffer.
    pub fn tick(&mut self, dt: f32) {
        self.orrery.tick_and_draw(dt as f64, &mut self.packer);
    }

    pub fn orrery(&self) -> &Orrery {
        &self.orrery
    }

    // ---- Pointer accessors for buffer reads ----

    pub fn frame_ptr(&self) -> *const f32 {
        self.packer.as_slice().as_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.packer.as_slice().len() as u32
    }

    // ---- Capacity accessors ----

    pub fn max_instances(&self) -> u32 {
        self.packer.layout().max_instances as u32
    }

    pub fn max_events(&self) -> u32 {
        self.packer.layout().max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.packer.layout().buffer_total_floats as u32
    }

    /// Names of the star and orbiting bodies, indexed by body id.
    /// Satellites and debris are left out; the UI has no control for them.
    pub fn body_names(&self) -> Vec<(u32, String)> {
        self.orrery
            .scene()
            .iter()
            .filter(|n| matches!(n.kind, BodyKind::Star | BodyKind::Planet))
            .map(|n| (n.id.0, n.tag.clone()))
            .collect()
    }

    pub fn body_id(&self, name: &str) -> Option<BodyId> {
        self.orrery.body_id(name)
    }
}
