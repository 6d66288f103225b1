pub mod motion;
pub mod camera_director;
pub mod pointer;
pub mod render;
