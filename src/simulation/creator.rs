//! Pointer-driven body creation
//!
//! Two states:
//! - `Idle`: a preview ring follows the pointer. A spawn click drops a
//!   motionless body at the pointer; pressing the drag button stages one.
//! - `Dragging`: the staged body is pinned where the drag began and the
//!   displacement to the pointer is tracked while the button is held.
//!   Releasing launches it with `velocity = displacement / launch_factor`.
//!
//! The staged body's radius and mass follow the cursor radius every frame,
//! so scrolling mid-drag resizes the body about to be launched.

use bevy::log::{debug, warn};

use super::input::FrameInput;
use super::params::Parameters;
use super::states::{mass_for_radius, Body, BodyStore, NVec2, Rgba, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreatorState {
    #[default]
    Idle,
    Dragging,
}

/// What one creator update did to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CreatorOutcome {
    pub spawned: usize,
    pub rejected: Option<StoreError>,
    pub cleared: bool,
}

#[derive(Debug, Clone)]
pub struct Creator {
    pub state: CreatorState,
    pub body: Body, // staged body, velocity filled in at launch
    pub displacement: NVec2, // pointer - staged position
}

impl Creator {
    pub fn new(color: Rgba) -> Self {
        Self {
            state: CreatorState::Idle,
            body: Body {
                x: NVec2::zeros(),
                v: NVec2::zeros(),
                m: 0.0,
                radius: 0.0,
                color,
            },
            displacement: NVec2::zeros(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.state == CreatorState::Dragging
    }

    /// Refresh the staged body's size from the cursor radius
    pub fn resize(&mut self, cursor_radius: f32, mass_coefficient: f32) {
        self.body.radius = cursor_radius;
        self.body.m = mass_for_radius(cursor_radius, mass_coefficient);
    }

    /// `Idle -> Dragging`, pinning the staged body at `pointer`
    pub fn begin_drag(&mut self, pointer: NVec2) {
        self.state = CreatorState::Dragging;
        self.body.x = pointer;
        self.displacement = NVec2::zeros();
    }

    pub fn drag_to(&mut self, pointer: NVec2) {
        self.displacement = pointer - self.body.x;
    }

    /// `Dragging -> Idle`, returning the body ready to be stored
    pub fn launch(&mut self, launch_factor: f32) -> Body {
        self.state = CreatorState::Idle;
        self.body.v = self.displacement / launch_factor;
        self.body
    }

    /// `Dragging -> Idle` without producing a body
    pub fn cancel(&mut self) {
        self.state = CreatorState::Idle;
        self.displacement = NVec2::zeros();
    }

    /// A motionless copy of the staged body at `pointer`
    pub fn spawn_at(&self, pointer: NVec2) -> Body {
        Body {
            x: pointer,
            v: NVec2::zeros(),
            ..self.body
        }
    }

    /// Run this frame's transitions. `pointer` is normalized and
    /// `cursor_radius` already clamped
    pub fn update(&mut self, input: &FrameInput, pointer: NVec2, cursor_radius: f32, params: &Parameters, bodies: &mut BodyStore) -> CreatorOutcome {
        let mut outcome = CreatorOutcome::default();

        self.resize(cursor_radius, params.mass_coefficient);

        if input.reset_pressed {
            bodies.clear();
            outcome.cleared = true;
        }

        match self.state {
            CreatorState::Idle => {
                if input.drag.pressed {
                    self.begin_drag(pointer);
                    debug!("creator: staged body at ({:.3}, {:.3})", pointer.x, pointer.y);
                } else if input.spawn_pressed {
                    let body = self.spawn_at(pointer);
                    store(bodies, body, &mut outcome);
                }
            }
            CreatorState::Dragging => {
                if input.cancel_pressed {
                    self.cancel();
                    debug!("creator: drag cancelled");
                } else if input.drag.down {
                    self.drag_to(pointer);
                } else {
                    let body = self.launch(params.launch_factor);
                    store(bodies, body, &mut outcome);
                }
            }
        }

        outcome
    }
}

fn store(bodies: &mut BodyStore, body: Body, outcome: &mut CreatorOutcome) {
    match bodies.push(body) {
        Ok(_) => outcome.spawned += 1,
        Err(e) => {
            warn!("creator: {e}, body dropped");
            outcome.rejected = Some(e);
        }
    }
}
