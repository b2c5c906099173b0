pub mod engine;
pub mod fitness;
pub mod options;
pub mod population;

pub use engine::Engine;
pub use fitness::FitnessFunction;
pub use options::{EngineOptions, EngineOptionsBuilder, RotationOptions};
pub use population::Population;
