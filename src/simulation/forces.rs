//! Pairwise force contributors
//!
//! Each term implements [`PairInteraction`] and applies equal and opposite
//! velocity changes to the two bodies it is given. Terms are collected in an
//! [`InteractionSet`] which the integrator runs for every unordered pair.

use crate::simulation::states::Body;

/// Collection of pair terms (gravity, drag, etc.)
/// Terms are applied in insertion order to each pair
pub struct InteractionSet {
    terms: Vec<Box<dyn PairInteraction + Send + Sync>>,
}

impl InteractionSet {
    /// Create an empty interaction set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a pair term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: PairInteraction + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Apply every term to the pair `(a, b)` over a frame of length `dt`
    pub fn apply_pair(&self, dt: f32, a: &mut Body, b: &mut Body) {
        for term in &self.terms {
            term.interact(dt, a, b);
        }
    }

    /// Apply every term between body `i` and each later body `j > i`
    pub fn apply_later(&self, dt: f32, bodies: &mut [Body], i: usize) {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];
        for bj in tail.iter_mut() {
            self.apply_pair(dt, bi, bj);
        }
    }

    /// Whole force pass on its own: every unordered pair `(i, j)`, `i < j`.
    /// Velocities only; positions are left alone. The integrator runs the
    /// same `apply_later` calls but interleaves boundary and position
    /// updates between them
    pub fn accumulate(&self, dt: f32, bodies: &mut [Body]) {
        for i in 0..bodies.len() {
            self.apply_later(dt, bodies, i);
        }
    }
}

impl Default for InteractionSet {
    fn default() -> Self {
        Self::new()
    }
}

/// A symmetric interaction between two bodies.
/// Implementations mutate the velocities of both bodies; returns `false`
/// when the pair was skipped
pub trait PairInteraction {
    fn interact(&self, dt: f32, a: &mut Body, b: &mut Body) -> bool;
}

/// Newtonian gravity with a soft-collision cutoff.
///
/// Pairs closer than the mean of their radii feel no force at all. This is
/// what keeps overlapping bodies from picking up huge velocities, and it
/// also rules out the zero-distance division.
pub struct NewtonianGravity {
    pub g: f32, // gravitational constant, already divided by the target frame rate
}

impl NewtonianGravity {
    /// `true` when the pair is inside the cutoff and must be skipped
    pub fn within_cutoff(a: &Body, b: &Body, dist: f32) -> bool {
        dist < (a.radius + b.radius) / 2.0 || dist <= 0.0
    }
}

impl PairInteraction for NewtonianGravity {
    fn interact(&self, dt: f32, a: &mut Body, b: &mut Body) -> bool {
        // r points from b to a
        let r = a.x - b.x;
        let dist = r.norm();

        if Self::within_cutoff(a, b, dist) {
            return false;
        }

        // Negative magnitude: a is pulled along -r (towards b)
        let force = -dt * self.g * a.m * b.m / (dist * dist);
        let f = r * (force / dist);

        a.v += f / a.m;
        b.v -= f / b.m;
        true
    }
}
