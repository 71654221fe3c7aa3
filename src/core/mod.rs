pub mod camera;
pub mod config;
pub mod constants;
pub mod error;
pub mod points;
pub mod render_loop;
pub mod simulation;
pub mod state;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use points::*;
pub use render_loop::*;
pub use simulation::*;
pub use state::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
