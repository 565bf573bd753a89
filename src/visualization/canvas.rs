//! Draw-primitive contract between the simulation and whatever renders it
//!
//! All coordinates are screen pixels, origin top-left, y pointing down.
//! [`DrawList`] records the calls so a renderer can replay them later (the
//! Bevy viewer does exactly that) and tests can inspect them.

use bevy::prelude::Resource;

use crate::simulation::states::{NVec2, Rgba};

pub trait Canvas {
    /// Start of one tick's drawing
    fn frame_begin(&mut self) {}

    /// End of one tick's drawing
    fn frame_end(&mut self) {}

    fn draw_filled_circle(&mut self, center: NVec2, radius: f32, color: Rgba);

    fn draw_ring(&mut self, center: NVec2, inner_radius: f32, outer_radius: f32, color: Rgba);

    fn draw_line(&mut self, p0: NVec2, p1: NVec2, thickness: f32, color: Rgba);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCmd {
    FilledCircle { center: NVec2, radius: f32, color: Rgba },
    Ring { center: NVec2, inner_radius: f32, outer_radius: f32, color: Rgba },
    Line { p0: NVec2, p1: NVec2, thickness: f32, color: Rgba },
}

/// Canvas that keeps the draw calls of the most recent frame
#[derive(Resource, Debug, Default, Clone)]
pub struct DrawList {
    pub cmds: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (NVec2, f32, Rgba)> + '_ {
        self.cmds.iter().filter_map(|cmd| match *cmd {
            DrawCmd::FilledCircle { center, radius, color } => Some((center, radius, color)),
            _ => None,
        })
    }

    /// Largest ring/line stroke of the frame, if any
    pub fn max_stroke(&self) -> Option<f32> {
        self.cmds
            .iter()
            .filter_map(|cmd| match *cmd {
                DrawCmd::Ring { inner_radius, outer_radius, .. } => Some(outer_radius - inner_radius),
                DrawCmd::Line { thickness, .. } => Some(thickness),
                DrawCmd::FilledCircle { .. } => None,
            })
            .reduce(f32::max)
    }
}

impl Canvas for DrawList {
    fn frame_begin(&mut self) {
        self.cmds.clear();
    }

    fn draw_filled_circle(&mut self, center: NVec2, radius: f32, color: Rgba) {
        self.cmds.push(DrawCmd::FilledCircle { center, radius, color });
    }

    fn draw_ring(&mut self, center: NVec2, inner_radius: f32, outer_radius: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Ring { center, inner_radius, outer_radius, color });
    }

    fn draw_line(&mut self, p0: NVec2, p1: NVec2, thickness: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Line { p0, p1, thickness, color });
    }
}
