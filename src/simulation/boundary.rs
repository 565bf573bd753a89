//! Body vs. viewport edge collisions
//!
//! Positional clamp plus an inelastic bounce: the offending velocity
//! component is negated and scaled by the dampening factor. The x axis is
//! checked before the y axis, and each axis is resolved on its own, so a
//! corner hit dampens both components in the same step.

use crate::simulation::states::Body;

/// Edges touched during one resolver step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundaryHit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BoundaryHit {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// Clamp `body` into `[r, aspect - r] x [r, 1 - r]` and bounce it off
/// whichever edges it crossed
pub fn resolve_boundary(body: &mut Body, aspect: f32, dampen: f32) -> BoundaryHit {
    let mut hit = BoundaryHit::default();
    let r = body.radius;

    if body.x.x - r < 0.0 {
        body.x.x = r;
        body.v.x *= -dampen;
        hit.left = true;
    } else if body.x.x + r > aspect {
        body.x.x = aspect - r;
        body.v.x *= -dampen;
        hit.right = true;
    }

    if body.x.y - r < 0.0 {
        body.x.y = r;
        body.v.y *= -dampen;
        hit.top = true;
    } else if body.x.y + r > 1.0 {
        body.x.y = 1.0 - r;
        body.v.y *= -dampen;
        hit.bottom = true;
    }

    hit
}
