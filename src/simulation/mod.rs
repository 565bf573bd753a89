pub mod states;
pub mod params;
pub mod engine;
pub mod viewport;
pub mod forces;
pub mod boundary;
pub mod integrator;
pub mod input;
pub mod creator;
pub mod scenario;
pub mod frame;
