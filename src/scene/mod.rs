//! Scene descriptions: parameters, generation, validation and the
//! deterministic cube layout used when generation fails.

mod fallback;
mod generate;
mod model;
mod params;
mod prompts;
mod validate;


pub use fallback::cubes_layout;
pub use generate::{ProblemContext, generate_scene_config};
pub use model::{SceneConfig, Shape};
pub use params::CubeParams;
