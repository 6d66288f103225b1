// extensions/mod.rs
//
// Optional helpers decoupled from the scene and the motion model.

pub mod easing;

pub use easing::{Easing, ease_vec3};
