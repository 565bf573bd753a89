pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, BodyStore, NVec2, Rgba, StoreError};
pub use simulation::forces::{InteractionSet, NewtonianGravity, PairInteraction};
pub use simulation::boundary::{resolve_boundary, BoundaryHit};
pub use simulation::integrator::euler_integrator;
pub use simulation::creator::{Creator, CreatorState};
pub use simulation::input::{ButtonState, FrameInput};
pub use simulation::viewport::Viewport;
pub use simulation::scenario::Scenario;
pub use simulation::frame::{run_frame, FrameReport};

pub use configuration::config::{EngineConfig, ParametersConfig, PaletteConfig, BodyConfig, ScenarioConfig, ConfigError};

pub use visualization::canvas::{Canvas, DrawCmd, DrawList};
pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::{bench_step, bench_step_curve};
