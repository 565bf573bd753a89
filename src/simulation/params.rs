//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - gravitational constant (already scaled by the target frame rate),
//! - frame delta clamp,
//! - boundary dampening and launch divisor,
//! - mass coefficient and cursor radius bounds,
//! - preview stroke thicknesses and store capacity

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f32, // gravitational constant per frame
    pub max_delta: f32, // upper bound on the frame delta, seconds
    pub collision_dampen: f32, // fraction of velocity kept after an edge bounce
    pub launch_factor: f32, // drag displacement / launch_factor = launch velocity
    pub mass_coefficient: f32, // m = k * r^3
    pub cursor_radius_min: f32,
    pub cursor_radius_max: f32,
    pub scroll_step: f32, // cursor radius change per wheel line
    pub ring_thickness: f32, // normalized
    pub line_thickness: f32, // normalized
    pub capacity: usize, // max bodies in the store
}

impl Parameters {
    pub fn clamp_cursor_radius(&self, radius: f32) -> f32 {
        radius.clamp(self.cursor_radius_min, self.cursor_radius_max)
    }

    pub fn clamp_delta(&self, delta: f32) -> f32 {
        delta.clamp(0.0, self.max_delta)
    }
}
