//! Configuration types for loading scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – window title, size, and target frame rate
//! - [`ParametersConfig`] – physical constants and interaction tuning
//! - [`PaletteConfig`]    – colours
//! - [`BodyConfig`]       – optional bodies present at startup
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every section and every field has a default, so an empty file is a
//! valid scenario.
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   title: "flingsim"
//!   width: 1280
//!   height: 720
//!   target_fps: 60
//!
//! parameters:
//!   gravity: 3.0e-8          # divided by target_fps at startup
//!   max_delta: 0.1           # frame delta clamp, seconds
//!   collision_dampen: 0.3
//!   launch_factor: 100.0
//!   mass_coefficient: 1.0e9  # m = k * r^3
//!   cursor_radius: 0.03
//!   cursor_radius_min: 0.01
//!   cursor_radius_max: 0.1
//!   scroll_step: 0.01
//!   ring_thickness: 0.004
//!   line_thickness: 0.004
//!   capacity: 4096
//!
//! palette:
//!   background: [192, 192, 192, 255]
//!   body: [0, 0, 0, 255]
//!
//! bodies:
//!   - x: [0.6, 0.5]
//!     v: [0.0, 0.0]
//!     radius: 0.05
//! ```
//!
//! Positions and radii are in normalized units (screen height = 1),
//! velocities in normalized units per frame.

use std::fmt;

use serde::Deserialize;

use crate::simulation::states::Rgba;

/// Window and frame settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub title: String,
    pub width: u32, // initial window width in pixels
    pub height: u32, // initial window height in pixels
    pub target_fps: u32, // the frame rate `gravity` is tuned against
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "flingsim".to_string(),
            width: 1280,
            height: 720,
            target_fps: 60,
        }
    }
}

/// Physical constants and interaction tuning
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: f32, // gravitational constant before frame-rate scaling
    pub max_delta: f32, // frame delta clamp, seconds
    pub collision_dampen: f32, // velocity kept (and reversed) on an edge bounce
    pub launch_factor: f32, // divisor turning a drag into a velocity
    pub mass_coefficient: f32, // k in m = k * r^3
    pub cursor_radius: f32, // starting cursor radius
    pub cursor_radius_min: f32,
    pub cursor_radius_max: f32,
    pub scroll_step: f32, // cursor radius change per wheel line
    pub ring_thickness: f32, // preview ring stroke, normalized
    pub line_thickness: f32, // drag line stroke, normalized
    pub capacity: usize, // max number of bodies
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: 3.0e-8,
            max_delta: 0.1,
            collision_dampen: 0.3,
            launch_factor: 100.0,
            mass_coefficient: 1.0e9,
            cursor_radius: 0.03,
            cursor_radius_min: 0.01,
            cursor_radius_max: 0.1,
            scroll_step: 0.01,
            ring_thickness: 0.004,
            line_thickness: 0.004,
            capacity: 4096,
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(default)]
pub struct PaletteConfig {
    pub background: Rgba,
    pub body: Rgba,
    pub creator_inactive: Rgba,
    pub creator_active: Rgba,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            background: Rgba::hex(0xc0c0c0), // light grey
            body: Rgba::hex(0x000000),
            creator_inactive: Rgba::hex(0x00008b), // dark blue
            creator_active: Rgba::hex(0x555555),
        }
    }
}

/// A body present when the scenario starts; mass is derived from `radius`
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f32; 2], // normalized position
    #[serde(default)]
    pub v: [f32; 2], // normalized units per frame
    pub radius: f32,
    #[serde(default)]
    pub color: Option<Rgba>, // falls back to the palette body colour
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub palette: PaletteConfig,
    pub bodies: Vec<BodyConfig>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A value that has to be strictly positive (or non-negative) is not
    NotPositive { field: &'static str, value: f64 },
    /// `cursor_radius_min` is above `cursor_radius_max`
    CursorBounds { min: f32, max: f32 },
    /// More startup bodies than the store can hold
    TooManyBodies { count: usize, capacity: usize },
    /// Startup body with a non-positive radius
    BodyRadius { index: usize, radius: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NotPositive { field, value } => {
                write!(f, "`{field}` must be positive, got {value}")
            }
            ConfigError::CursorBounds { min, max } => {
                write!(f, "cursor_radius_min ({min}) is larger than cursor_radius_max ({max})")
            }
            ConfigError::TooManyBodies { count, capacity } => {
                write!(f, "{count} startup bodies exceed the store capacity of {capacity}")
            }
            ConfigError::BodyRadius { index, radius } => {
                write!(f, "body {index} has non-positive radius {radius}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

impl ScenarioConfig {
    /// Parse a scenario from YAML text
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let e = &self.engine;
        positive("engine.width", e.width as f64)?;
        positive("engine.height", e.height as f64)?;
        positive("engine.target_fps", e.target_fps as f64)?;

        let p = &self.parameters;
        positive("parameters.gravity", p.gravity as f64)?;
        positive("parameters.max_delta", p.max_delta as f64)?;
        positive("parameters.launch_factor", p.launch_factor as f64)?;
        positive("parameters.mass_coefficient", p.mass_coefficient as f64)?;
        positive("parameters.cursor_radius_min", p.cursor_radius_min as f64)?;
        positive("parameters.cursor_radius_max", p.cursor_radius_max as f64)?;
        positive("parameters.scroll_step", p.scroll_step as f64)?;
        positive("parameters.capacity", p.capacity as f64)?;
        if !(p.collision_dampen >= 0.0) {
            return Err(ConfigError::NotPositive { field: "parameters.collision_dampen", value: p.collision_dampen as f64 });
        }
        if !(p.cursor_radius_min <= p.cursor_radius_max) {
            return Err(ConfigError::CursorBounds { min: p.cursor_radius_min, max: p.cursor_radius_max });
        }

        if self.bodies.len() > p.capacity {
            return Err(ConfigError::TooManyBodies { count: self.bodies.len(), capacity: p.capacity });
        }
        for (index, b) in self.bodies.iter().enumerate() {
            if !(b.radius > 0.0) {
                return Err(ConfigError::BodyRadius { index, radius: b.radius });
            }
        }

        Ok(())
    }
}
