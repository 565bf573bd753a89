//! Core state types for the simulation.
//!
//! Defines the 2D body and the store that owns them:
//! - `Body` using `NVec2` positions/velocities in normalized units
//! - `BodyStore` the bounded, append-only sequence of bodies
//!
//! Velocities are measured in normalized units per frame, not per second.

use std::fmt;

use nalgebra::Vector2;
use serde::Deserialize;

pub type NVec2 = Vector2<f32>;

/// 8-bit RGBA colour, deserialized from `[r, g, b, a]`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "[u8; 4]")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Opaque colour from a `0xRRGGBB` literal
    pub const fn hex(rgb: u32) -> Self {
        Self {
            r: ((rgb & 0xff0000) >> 16) as u8,
            g: ((rgb & 0x00ff00) >> 8) as u8,
            b: (rgb & 0x0000ff) as u8,
            a: 0xff,
        }
    }
}

impl From<[u8; 4]> for Rgba {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub m: f32, // mass
    pub radius: f32, // radius (collision + drawing)
    pub color: Rgba,
}

impl Body {
    /// Build a body whose mass follows from its radius: `m = k * r^3`
    pub fn from_radius(x: NVec2, v: NVec2, radius: f32, mass_coefficient: f32, color: Rgba) -> Self {
        Self {
            x,
            v,
            m: mass_for_radius(radius, mass_coefficient),
            radius,
            color,
        }
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }
}

pub fn mass_for_radius(radius: f32, mass_coefficient: f32) -> f32 {
    mass_coefficient * radius * radius * radius
}

/// Raised when the store cannot take another body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    Full { capacity: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Full { capacity } => write!(f, "body store full ({capacity} bodies)"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Ordered collection of bodies with a fixed upper bound.
///
/// Bodies are only ever appended or cleared all at once; index order is the
/// order of creation and is the order the integrator walks them in.
#[derive(Debug, Clone)]
pub struct BodyStore {
    bodies: Vec<Body>,
    capacity: usize,
}

impl BodyStore {
    /// Create an empty store, reserving room for `capacity` bodies up front
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a body, returning its index
    pub fn push(&mut self, body: Body) -> Result<usize, StoreError> {
        if self.bodies.len() >= self.capacity {
            return Err(StoreError::Full { capacity: self.capacity });
        }
        self.bodies.push(body);
        Ok(self.bodies.len() - 1)
    }

    /// Drop every body; the allocation is kept for reuse
    pub fn clear(&mut self) {
        self.bodies.clear();
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Body> {
        self.bodies.iter()
    }

    pub fn as_mut_slice(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Sum of `m * v` over all bodies
    pub fn total_momentum(&self) -> NVec2 {
        self.bodies.iter().map(Body::momentum).fold(NVec2::zeros(), |acc, p| acc + p)
    }
}

impl<'a> IntoIterator for &'a BodyStore {
    type Item = &'a Body;
    type IntoIter = std::slice::Iter<'a, Body>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}
