pub mod errors;
pub mod film;
pub mod geometry;
pub mod math;
pub mod parsing;
pub mod renderer;
pub mod scene;

pub use errors::{RenderError, Result};
pub use film::Film;
pub use renderer::{render, RenderSettings};
pub use scene::{example_scene, Falloff, Scene};
