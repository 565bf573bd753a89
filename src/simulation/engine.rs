//! High-level runtime window settings
//!
//! Window title, initial size, and the frame rate the gravitational
//! constant is tuned against

use crate::simulation::states::Rgba;

#[derive(Debug, Clone)]
pub struct Engine {
    pub title: String,
    pub width: u32, // initial window width, pixels
    pub height: u32, // initial window height, pixels
    pub target_fps: u32, // G is divided by this
}

/// Colours used by the viewer and the creator preview
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Rgba,
    pub body: Rgba,
    pub creator_inactive: Rgba,
    pub creator_active: Rgba,
}
