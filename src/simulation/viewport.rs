//! Screen <-> normalized coordinate conversion
//!
//! Normalized space divides by the viewport height only, so y spans [0, 1]
//! and x spans [0, aspect]. Resizing the window changes the visible
//! horizontal extent but never the simulated dynamics.

use super::states::NVec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32, // pixels
    pub height: f32, // pixels
}

impl Viewport {
    /// Heights below one pixel (minimized windows) are clamped to one
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(1.0),
        }
    }

    /// Pixels per normalized unit
    pub fn scale(&self) -> f32 {
        self.height
    }

    /// Horizontal extent of normalized space
    pub fn aspect(&self) -> f32 {
        self.width / self.scale()
    }

    pub fn to_normalized(&self, p: NVec2) -> NVec2 {
        p / self.scale()
    }

    pub fn to_screen(&self, u: NVec2) -> NVec2 {
        u * self.scale()
    }

    /// Length variant of [`Viewport::to_screen`]
    pub fn length_to_screen(&self, n: f32) -> f32 {
        n * self.scale()
    }
}
