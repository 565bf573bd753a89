//! Explicit Euler stepping of the body store
//!
//! One pass per frame. For body `i` in index order:
//! 1. pair terms against every later body `j > i`
//! 2. boundary resolve (velocity bounce + positional clamp)
//! 3. `x += v`
//!
//! Body `i` is already moved by the time later bodies are processed, which
//! is what the interactive toy has always done; it is not a symmetric
//! update and is not meant to be.

use super::boundary::resolve_boundary;
use super::forces::InteractionSet;
use super::params::Parameters;
use super::states::BodyStore;

/// Advance every body by one frame of length `dt` inside a viewport whose
/// normalized width is `aspect`.
/// Returns the number of bodies that touched an edge
pub fn euler_integrator(bodies: &mut BodyStore, forces: &InteractionSet, params: &Parameters, dt: f32, aspect: f32) -> usize {
    let bodies = bodies.as_mut_slice();
    let n = bodies.len();
    if n == 0 { // no bodies, return
        return 0;
    }

    let mut bounced = 0;
    for i in 0..n {
        forces.apply_later(dt, bodies, i);

        let bi = &mut bodies[i];
        if resolve_boundary(bi, aspect, params.collision_dampen).any() {
            bounced += 1;
        }

        // Velocity is per frame, so no dt here
        bi.x += bi.v;
    }

    bounced
}
