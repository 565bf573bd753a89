//! Per-frame input snapshot handed to the orchestrator by the viewer

use super::states::NVec2;
use super::viewport::Viewport;

/// Edge and level state of one button for the current frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub pressed: bool, // went down this frame
    pub down: bool, // held
}

impl ButtonState {
    pub fn idle() -> Self {
        Self::default()
    }

    /// Pressed this frame and still held
    pub fn press() -> Self {
        Self { pressed: true, down: true }
    }

    pub fn hold() -> Self {
        Self { pressed: false, down: true }
    }

    /// Let go: no longer held
    pub fn release() -> Self {
        Self { pressed: false, down: false }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FrameInput {
    pub delta: f32, // seconds since the previous frame
    pub viewport: Viewport,
    pub pointer: NVec2, // screen pixels, origin top-left
    pub scroll: f32, // wheel lines, positive grows the cursor
    pub drag: ButtonState, // stage + fling
    pub spawn_pressed: bool, // instant zero-velocity spawn
    pub reset_pressed: bool, // clear all bodies
    pub cancel_pressed: bool, // abandon the current drag
}

impl FrameInput {
    /// A frame with no buttons, no scroll, and the pointer at the origin
    pub fn quiet(delta: f32, viewport: Viewport) -> Self {
        Self {
            delta,
            viewport,
            pointer: NVec2::zeros(),
            scroll: 0.0,
            drag: ButtonState::idle(),
            spawn_pressed: false,
            reset_pressed: false,
            cancel_pressed: false,
        }
    }

    pub fn with_pointer(mut self, pointer: NVec2) -> Self {
        self.pointer = pointer;
        self
    }
}
