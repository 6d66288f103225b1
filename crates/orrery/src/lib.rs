pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;
pub mod error;

// Re-export key types at crate root for convenience
pub use api::config::OrreryConfig;
pub use api::types::{BodyId, BodyKind, OrreryEvent, WireEvent};
pub use error::OrreryError;
pub use components::node::SceneNode;
pub use crate::core::scene::Scene;
pub use crate::core::time::Clock;
pub use crate::core::frame_loop::Orrery;
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::camera::{Camera3D, CameraUniform, Ray};
pub use renderer::traits::{FrameSnapshot, Renderer};
pub use input::queue::{Command, CommandQueue};
pub use assets::manifest::SystemManifest;
pub use bridge::protocol::ProtocolLayout;
pub use systems::motion::{Body, Satellite, Debris, MotionModel, PickTarget, SceneFault, wrap_angle};
pub use systems::camera_director::{CameraDirector, CameraState, CameraPhase, CameraTransition, Aim};
pub use systems::pointer::{PointerInteraction, PointerRequest, Hit, pick};

// Extensions: helpers decoupled from the scene
pub use extensions::{Easing, ease_vec3};
