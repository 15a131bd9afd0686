pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod pointer;
pub mod renderer;
pub mod scene;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use color::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use frame::*;
pub use geometry::*;
pub use pointer::*;
pub use renderer::*;
pub use scene::*;
