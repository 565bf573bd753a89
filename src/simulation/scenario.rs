//! Build the simulation context from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime
//! `Scenario` containing:
//! - window settings (`Engine`) and colours (`Palette`)
//! - numerical parameters (`Parameters`)
//! - the body store, seeded with any startup bodies
//! - the creator and the active pair terms (`InteractionSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and driven one frame
//! at a time by [`crate::simulation::frame::run_frame`].

use bevy::prelude::Resource;

use crate::configuration::config::{BodyConfig, ConfigError, ScenarioConfig};
use crate::simulation::creator::Creator;
use crate::simulation::engine::{Engine, Palette};
use crate::simulation::forces::{InteractionSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyStore, NVec2};
use crate::simulation::viewport::Viewport;

/// Bevy resource holding all simulation state for one window
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub palette: Palette,
    pub parameters: Parameters,
    pub viewport: Viewport,
    pub delta: f32, // clamped delta of the last frame, seconds
    pub cursor_radius: f32, // normalized
    pub pointer: NVec2, // normalized
    pub bodies: BodyStore,
    pub creator: Creator,
    pub forces: InteractionSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;

        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            title: e_cfg.title,
            width: e_cfg.width,
            height: e_cfg.height,
            target_fps: e_cfg.target_fps,
        };

        // Parameters (runtime) from ParametersConfig; G is per frame at the target rate
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.gravity / engine.target_fps as f32,
            max_delta: p_cfg.max_delta,
            collision_dampen: p_cfg.collision_dampen,
            launch_factor: p_cfg.launch_factor,
            mass_coefficient: p_cfg.mass_coefficient,
            cursor_radius_min: p_cfg.cursor_radius_min,
            cursor_radius_max: p_cfg.cursor_radius_max,
            scroll_step: p_cfg.scroll_step,
            ring_thickness: p_cfg.ring_thickness,
            line_thickness: p_cfg.line_thickness,
            capacity: p_cfg.capacity,
        };

        let c_cfg = cfg.palette;
        let palette = Palette {
            background: c_cfg.background,
            body: c_cfg.body,
            creator_inactive: c_cfg.creator_inactive,
            creator_active: c_cfg.creator_active,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, mass from radius
        let mut bodies = BodyStore::with_capacity(parameters.capacity);
        for bc in &cfg.bodies {
            let body = body_from_config(bc, &parameters, &palette);
            bodies.push(body).map_err(|_| ConfigError::TooManyBodies {
                count: cfg.bodies.len(),
                capacity: parameters.capacity,
            })?;
        }

        // Forces: construct an InteractionSet and register Newtonian gravity
        let forces = InteractionSet::new().with(NewtonianGravity { g: parameters.g });

        let cursor_radius = parameters.clamp_cursor_radius(p_cfg.cursor_radius);
        let mut creator = Creator::new(palette.body);
        creator.resize(cursor_radius, parameters.mass_coefficient);

        Ok(Self {
            viewport: Viewport::new(engine.width as f32, engine.height as f32),
            engine,
            palette,
            parameters,
            delta: 0.0,
            cursor_radius,
            pointer: NVec2::zeros(),
            bodies,
            creator,
            forces,
        })
    }
}

fn body_from_config(bc: &BodyConfig, parameters: &Parameters, palette: &Palette) -> Body {
    Body::from_radius(
        NVec2::new(bc.x[0], bc.x[1]),
        NVec2::new(bc.v[0], bc.v[1]),
        bc.radius,
        parameters.mass_coefficient,
        bc.color.unwrap_or(palette.body),
    )
}
