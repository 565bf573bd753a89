//! One simulation + render tick
//!
//! Order per frame:
//! 1. clamp the delta, take the viewport
//! 2. pointer to normalized space
//! 3. scroll into the cursor radius, clamp
//! 4. creator transitions (reset, stage, drag, launch, spawn, cancel)
//! 5. integrate: gravity vs. later bodies, boundary, `x += v`
//! 6. draw bodies
//! 7. draw the creator preview

use crate::simulation::creator::CreatorOutcome;
use crate::simulation::input::FrameInput;
use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::StoreError;
use crate::visualization::canvas::Canvas;

/// Summary of what a frame changed, for logging and tests
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub spawned: usize,
    pub rejected: Option<StoreError>,
    pub cleared: bool,
    pub bounced: usize,
}

pub fn run_frame(scenario: &mut Scenario, input: &FrameInput, canvas: &mut impl Canvas) -> FrameReport {
    // (1)
    scenario.delta = scenario.parameters.clamp_delta(input.delta);
    scenario.viewport = input.viewport;

    // (2)
    scenario.pointer = scenario.viewport.to_normalized(input.pointer);

    // (3) clamp every frame, scroll would accumulate otherwise
    let raw = scenario.cursor_radius + input.scroll * scenario.parameters.scroll_step;
    scenario.cursor_radius = scenario.parameters.clamp_cursor_radius(raw);

    // (4)
    let CreatorOutcome { spawned, rejected, cleared } = scenario.creator.update(
        input,
        scenario.pointer,
        scenario.cursor_radius,
        &scenario.parameters,
        &mut scenario.bodies,
    );

    // (5)
    let bounced = euler_integrator(
        &mut scenario.bodies,
        &scenario.forces,
        &scenario.parameters,
        scenario.delta,
        scenario.viewport.aspect(),
    );

    // (6) + (7)
    canvas.frame_begin();
    draw_bodies(scenario, canvas);
    draw_creator(scenario, canvas);
    canvas.frame_end();

    FrameReport { spawned, rejected, cleared, bounced }
}

pub fn draw_bodies(scenario: &Scenario, canvas: &mut impl Canvas) {
    let vp = &scenario.viewport;
    for body in &scenario.bodies {
        canvas.draw_filled_circle(vp.to_screen(body.x), vp.length_to_screen(body.radius), body.color);
    }
}

/// Ring at the pointer while idle; drag line plus staged body while dragging
pub fn draw_creator(scenario: &Scenario, canvas: &mut impl Canvas) {
    let vp = &scenario.viewport;
    let params = &scenario.parameters;
    let creator = &scenario.creator;

    let inner = vp.length_to_screen(scenario.cursor_radius);
    if !creator.is_active() {
        let outer = inner + vp.length_to_screen(params.ring_thickness);
        canvas.draw_ring(vp.to_screen(scenario.pointer), inner, outer, scenario.palette.creator_inactive);
        return;
    }

    let start = vp.to_screen(creator.body.x);
    let end = vp.to_screen(creator.body.x + creator.displacement);
    canvas.draw_line(start, end, vp.length_to_screen(params.line_thickness), scenario.palette.creator_active);
    canvas.draw_filled_circle(start, vp.length_to_screen(creator.body.radius), scenario.palette.creator_active);
}
