pub mod time;
pub mod rng;
pub mod scene;
pub mod frame_loop;
