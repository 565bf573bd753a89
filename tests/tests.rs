use flingsim::simulation::states::{Body, BodyStore, NVec2, Rgba, StoreError};
use flingsim::simulation::forces::{InteractionSet, NewtonianGravity, PairInteraction};
use flingsim::simulation::boundary::resolve_boundary;
use flingsim::simulation::integrator::euler_integrator;
use flingsim::simulation::creator::CreatorState;
use flingsim::simulation::input::{ButtonState, FrameInput};
use flingsim::simulation::viewport::Viewport;
use flingsim::simulation::scenario::Scenario;
use flingsim::simulation::frame::run_frame;
use flingsim::configuration::config::{ConfigError, ScenarioConfig};
use flingsim::visualization::canvas::{DrawCmd, DrawList};

const K: f32 = 1.0e9;
const DT: f32 = 1.0 / 60.0;

/// Motionless body whose mass follows from its radius
pub fn body_at(x: f32, y: f32, radius: f32) -> Body {
    Body::from_radius(NVec2::new(x, y), NVec2::zeros(), radius, K, Rgba::hex(0x000000))
}

/// Gravity term with the default constant (3e-8 at 60 fps)
pub fn gravity() -> NewtonianGravity {
    NewtonianGravity { g: 3.0e-8 / 60.0 }
}

/// Scenario built from the default config (1280x720 engine window)
pub fn test_scenario() -> Scenario {
    Scenario::build_scenario(ScenarioConfig::default()).unwrap()
}

/// 1600x1000 viewport, so 1 normalized unit = 1000 px
pub fn viewport() -> Viewport {
    Viewport::new(1600.0, 1000.0)
}

/// Quiet frame with the pointer at a screen position
pub fn frame_at(px: f32, py: f32) -> FrameInput {
    FrameInput::quiet(DT, viewport()).with_pointer(NVec2::new(px, py))
}

fn close(a: f32, b: f32, tol: f32) -> bool {
    (a - b).abs() <= tol
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let mut store = BodyStore::with_capacity(2);
    store.push(body_at(0.5, 0.5, 0.02)).unwrap();
    store.push(body_at(0.8, 0.5, 0.04)).unwrap();
    let before = store.total_momentum();

    let [a, b] = store.as_mut_slice() else { panic!("expected two bodies") };
    assert!(gravity().interact(DT, a, b));

    let after = store.total_momentum();
    assert!(store.iter().all(|b| b.v.norm() > 0.0), "no force applied");
    assert!((after - before).norm() < 1e-6, "Net momentum changed: {:?}", after - before);
}

#[test]
fn gravity_momentum_conserved_with_initial_velocity() {
    let mut a = body_at(0.4, 0.3, 0.03);
    let mut b = body_at(0.9, 0.7, 0.05);
    a.v = NVec2::new(0.002, -0.001);
    b.v = NVec2::new(-0.0005, 0.0015);
    let before = a.momentum() + b.momentum();

    gravity().interact(DT, &mut a, &mut b);

    let after = a.momentum() + b.momentum();
    assert!((after - before).norm() <= 1e-5 * before.norm().max(1.0), "Net momentum changed: {:?}", after - before);
}

#[test]
fn gravity_points_toward_other_body() {
    let mut a = body_at(0.5, 0.5, 0.02);
    let mut b = body_at(0.9, 0.5, 0.02);

    gravity().interact(DT, &mut a, &mut b);

    assert!(a.v.x > 0.0, "a is not pulled towards b");
    assert!(b.v.x < 0.0, "b is not pulled towards a");
    assert_eq!(a.v.y, 0.0);
    assert_eq!(b.v.y, 0.0);
}

#[test]
fn gravity_inverse_square_law() {
    let mut a_r = body_at(0.5, 0.5, 0.02);
    let mut b_r = body_at(0.7, 0.5, 0.02);
    let mut a_2r = body_at(0.5, 0.5, 0.02);
    let mut b_2r = body_at(0.9, 0.5, 0.02);

    gravity().interact(DT, &mut a_r, &mut b_r);
    gravity().interact(DT, &mut a_2r, &mut b_2r);

    let ratio = a_r.v.norm() / a_2r.v.norm();
    assert!((ratio - 4.0).abs() < 1e-3, "Expected ~4x, got {}", ratio);
}

#[test]
fn gravity_soft_collision_cutoff() {
    // cutoff is (0.05 + 0.05) / 2 = 0.05, bodies are 0.01 apart
    let mut a = body_at(0.5, 0.5, 0.05);
    let mut b = body_at(0.51, 0.5, 0.05);
    a.m = 1.0e12;
    b.m = 1.0e12;
    a.v = NVec2::new(0.001, 0.0);

    let applied = gravity().interact(DT, &mut a, &mut b);

    assert!(!applied);
    assert_eq!(a.v, NVec2::new(0.001, 0.0));
    assert_eq!(b.v, NVec2::zeros());
}

#[test]
fn gravity_zero_distance_is_finite() {
    let mut a = body_at(0.5, 0.5, 0.0);
    let mut b = body_at(0.5, 0.5, 0.0);
    a.m = 1.0;
    b.m = 1.0;

    gravity().interact(DT, &mut a, &mut b);

    assert!(a.v.iter().all(|c| c.is_finite()));
    assert!(b.v.iter().all(|c| c.is_finite()));
    assert_eq!(a.v, NVec2::zeros());
}

#[test]
fn interaction_set_accumulates_all_pairs() {
    let mut store = BodyStore::with_capacity(3);
    for x in [0.2, 0.5, 0.8] {
        store.push(body_at(x, 0.5, 0.02)).unwrap();
    }
    let forces = InteractionSet::new().with(gravity());

    forces.accumulate(DT, store.as_mut_slice());

    // outer bodies pulled inwards, middle one balanced
    let vx: Vec<f32> = store.iter().map(|b| b.v.x).collect();
    assert!(vx[0] > 0.0);
    assert!(vx[2] < 0.0);
    assert!(vx[1].abs() < 1e-9);

    assert!(store.total_momentum().norm() < 1e-6);
}

// ==================================================================================
// Boundary tests
// ==================================================================================

#[test]
fn boundary_leaves_interior_body_alone() {
    let mut body = body_at(0.5, 0.5, 0.05);
    body.v = NVec2::new(0.01, -0.02);
    let before = body;

    let hit = resolve_boundary(&mut body, 16.0 / 9.0, 0.3);

    assert!(!hit.any());
    assert_eq!(body, before);
}

#[test]
fn boundary_dampened_bounce_bottom() {
    let mut body = body_at(0.5, 0.99, 0.05);
    body.v = NVec2::new(0.0, 0.02);

    let hit = resolve_boundary(&mut body, 16.0 / 9.0, 0.3);

    assert!(hit.bottom);
    assert!(close(body.x.y, 0.95, 1e-6), "y = {}", body.x.y);
    assert_eq!(body.v.x, 0.0);
    assert!(close(body.v.y, -0.3 * 0.02, 1e-7), "vy = {}", body.v.y);
}

#[test]
fn boundary_right_edge_uses_aspect() {
    let aspect = 16.0 / 9.0;
    let mut body = body_at(aspect - 0.01, 0.5, 0.05);
    body.v = NVec2::new(0.01, 0.0);

    let hit = resolve_boundary(&mut body, aspect, 0.3);

    assert!(hit.right && !hit.left);
    assert!(close(body.x.x, aspect - 0.05, 1e-6));
    assert!(close(body.v.x, -0.003, 1e-7));
}

#[test]
fn boundary_corner_dampens_both_axes() {
    let mut body = body_at(-0.1, 1.2, 0.05);
    body.v = NVec2::new(-0.01, 0.02);

    let hit = resolve_boundary(&mut body, 16.0 / 9.0, 0.3);

    assert!(hit.left && hit.bottom);
    assert!(close(body.x.x, 0.05, 1e-6));
    assert!(close(body.x.y, 0.95, 1e-6));
    assert!(close(body.v.x, 0.003, 1e-7));
    assert!(close(body.v.y, -0.006, 1e-7));
}

// ==================================================================================
// Normalizer tests
// ==================================================================================

#[test]
fn normalization_round_trip() {
    let points = [(0.0, 0.0), (1.0, 1.0), (640.0, 360.0), (1919.5, 1079.25), (3840.0, 12.0)];
    let heights = [1.0, 360.0, 720.0, 1080.0, 2160.0];

    for &h in &heights {
        let vp = Viewport::new(h * 16.0 / 9.0, h);
        for &(x, y) in &points {
            let p = NVec2::new(x, y);
            let back = vp.to_screen(vp.to_normalized(p));
            assert!((back - p).norm() <= 1e-3, "round trip of {:?} at h = {} gave {:?}", p, h, back);
        }
    }
}

#[test]
fn normalization_is_height_relative() {
    let vp = Viewport::new(1600.0, 900.0);

    assert!(close(vp.aspect(), 16.0 / 9.0, 1e-6));
    let u = vp.to_normalized(NVec2::new(1600.0, 900.0));
    assert!(close(u.x, 16.0 / 9.0, 1e-6));
    assert!(close(u.y, 1.0, 1e-6));
}

#[test]
fn degenerate_viewport_does_not_divide_by_zero() {
    let vp = Viewport::new(800.0, 0.0);
    let u = vp.to_normalized(NVec2::new(10.0, 10.0));

    assert!(u.iter().all(|c| c.is_finite()));
}

// ==================================================================================
// Store tests
// ==================================================================================

#[test]
fn store_reports_full() {
    let mut store = BodyStore::with_capacity(2);

    assert_eq!(store.push(body_at(0.1, 0.1, 0.01)), Ok(0));
    assert_eq!(store.push(body_at(0.2, 0.2, 0.01)), Ok(1));
    assert_eq!(store.push(body_at(0.3, 0.3, 0.01)), Err(StoreError::Full { capacity: 2 }));
    assert_eq!(store.len(), 2);
}

#[test]
fn store_clear_then_push() {
    let mut store = BodyStore::with_capacity(8);
    for i in 0..5 {
        store.push(body_at(0.1 * i as f32, 0.5, 0.01)).unwrap();
    }

    store.clear();
    assert!(store.is_empty());

    store.push(body_at(0.5, 0.5, 0.01)).unwrap();
    assert_eq!(store.len(), 1);
}

#[test]
fn mass_follows_radius_cubed() {
    let body = body_at(0.5, 0.5, 0.05);
    assert!(close(body.m / 125_000.0, 1.0, 1e-4), "m = {}", body.m);
}

// ==================================================================================
// Integrator tests
// ==================================================================================

#[test]
fn euler_moves_by_velocity_per_frame() {
    let scenario = test_scenario();
    let mut store = BodyStore::with_capacity(4);
    let mut body = body_at(0.5, 0.5, 0.02);
    body.v = NVec2::new(0.01, -0.005);
    store.push(body).unwrap();

    let bounced = euler_integrator(&mut store, &scenario.forces, &scenario.parameters, DT, 1.6);

    assert_eq!(bounced, 0);
    let b = store.get(0).unwrap();
    assert!(close(b.x.x, 0.51, 1e-6));
    assert!(close(b.x.y, 0.495, 1e-6));
}

#[test]
fn euler_integrator_resolves_boundary_before_moving() {
    // overlaps the bottom edge and is still heading down
    let scenario = test_scenario();
    let mut store = BodyStore::with_capacity(1);
    let mut body = body_at(0.5, 0.99, 0.05);
    body.v = NVec2::new(0.0, 0.02);
    store.push(body).unwrap();

    let bounced = euler_integrator(&mut store, &scenario.forces, &scenario.parameters, DT, 1.6);

    // clamped to 0.95, bounced to -0.3 * 0.02, then moved by the new velocity.
    // Moving first would leave it sitting on the clamp at 0.95
    assert_eq!(bounced, 1);
    let b = store.get(0).unwrap();
    assert!(close(b.v.y, -0.006, 1e-7), "v.y = {}", b.v.y);
    assert!(close(b.x.y, 0.944, 1e-6), "y = {}", b.x.y);
    assert!(close(b.x.x, 0.5, 1e-6));
}

#[test]
fn euler_integrator_keeps_bodies_in_bounds_over_time() {
    let scenario = test_scenario();
    let mut store = BodyStore::with_capacity(4);
    let mut a = body_at(0.3, 0.5, 0.05);
    a.v = NVec2::new(-0.05, 0.03);
    let mut b = body_at(1.2, 0.4, 0.03);
    b.v = NVec2::new(0.04, -0.06);
    store.push(a).unwrap();
    store.push(b).unwrap();

    let aspect = 1.6;
    for _ in 0..600 {
        euler_integrator(&mut store, &scenario.forces, &scenario.parameters, DT, aspect);
    }

    for body in &store {
        assert!(body.x.iter().all(|c| c.is_finite()));
        // one frame of drift past the clamp at most
        let slack = body.v.norm() + 1e-6;
        assert!(body.x.x >= body.radius - slack && body.x.x <= aspect - body.radius + slack);
        assert!(body.x.y >= body.radius - slack && body.x.y <= 1.0 - body.radius + slack);
    }
}

// ==================================================================================
// Creator / frame tests
// ==================================================================================

#[test]
fn creator_launch_scenario() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();
    scenario.cursor_radius = 0.05;
    let launch_factor = scenario.parameters.launch_factor;

    // begin drag at (0.5, 0.5)
    let mut input = frame_at(500.0, 500.0);
    input.drag = ButtonState::press();
    run_frame(&mut scenario, &input, &mut canvas);
    assert_eq!(scenario.creator.state, CreatorState::Dragging);
    assert!(scenario.bodies.is_empty());

    // drag to (0.6, 0.5)
    let mut input = frame_at(600.0, 500.0);
    input.drag = ButtonState::hold();
    run_frame(&mut scenario, &input, &mut canvas);
    assert!(close(scenario.creator.displacement.x, 0.1, 1e-6));
    assert!(close(scenario.creator.displacement.y, 0.0, 1e-6));
    assert!(canvas.cmds.iter().any(|c| matches!(c, DrawCmd::Line { .. })));

    // release
    let mut input = frame_at(600.0, 500.0);
    input.drag = ButtonState::release();
    let report = run_frame(&mut scenario, &input, &mut canvas);

    assert_eq!(report.spawned, 1);
    assert_eq!(scenario.bodies.len(), 1);
    assert_eq!(scenario.creator.state, CreatorState::Idle);

    let body = scenario.bodies.get(0).unwrap();
    // already integrated once: x moved by one frame of velocity
    assert!(close(body.x.x, 0.5 + 0.1 / launch_factor, 1e-5));
    assert!(close(body.x.y, 0.5, 1e-5));
    assert!(close(body.v.x, 0.1 / launch_factor, 1e-6));
    assert!(close(body.v.y, 0.0, 1e-6));
    assert!(close(body.m / (K * 0.05 * 0.05 * 0.05), 1.0, 1e-4));
    assert!(close(body.radius, 0.05, 1e-7));
}

#[test]
fn creator_instant_spawn_is_motionless() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();

    let mut input = frame_at(300.0, 400.0);
    input.spawn_pressed = true;
    let report = run_frame(&mut scenario, &input, &mut canvas);

    assert_eq!(report.spawned, 1);
    let body = scenario.bodies.get(0).unwrap();
    assert_eq!(body.v, NVec2::zeros());
    assert!(close(body.x.x, 0.3, 1e-6));
    assert!(close(body.x.y, 0.4, 1e-6));
    assert!(close(body.radius, scenario.cursor_radius, 1e-7));
    assert_eq!(scenario.creator.state, CreatorState::Idle);
}

#[test]
fn creator_cancel_drops_staged_body() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();

    let mut input = frame_at(500.0, 500.0);
    input.drag = ButtonState::press();
    run_frame(&mut scenario, &input, &mut canvas);

    let mut input = frame_at(700.0, 500.0);
    input.drag = ButtonState::hold();
    input.cancel_pressed = true;
    run_frame(&mut scenario, &input, &mut canvas);
    assert_eq!(scenario.creator.state, CreatorState::Idle);

    let mut input = frame_at(700.0, 500.0);
    input.drag = ButtonState::release();
    let report = run_frame(&mut scenario, &input, &mut canvas);

    assert_eq!(report.spawned, 0);
    assert!(scenario.bodies.is_empty());
}

#[test]
fn creator_scroll_resizes_staged_body() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();
    scenario.cursor_radius = 0.03;

    let mut input = frame_at(500.0, 500.0);
    input.drag = ButtonState::press();
    run_frame(&mut scenario, &input, &mut canvas);

    let mut input = frame_at(500.0, 500.0);
    input.drag = ButtonState::hold();
    input.scroll = 2.0;
    run_frame(&mut scenario, &input, &mut canvas);

    assert!(close(scenario.creator.body.radius, 0.05, 1e-6));
    assert!(close(scenario.creator.body.m / (K * 0.05 * 0.05 * 0.05), 1.0, 1e-4));
}

#[test]
fn reset_scenario() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();
    for i in 0..5 {
        scenario.bodies.push(body_at(0.2 + 0.2 * i as f32, 0.5, 0.02)).unwrap();
    }

    let mut input = frame_at(500.0, 500.0);
    input.reset_pressed = true;
    let report = run_frame(&mut scenario, &input, &mut canvas);
    assert!(report.cleared);
    assert_eq!(scenario.bodies.len(), 0);

    let mut input = frame_at(500.0, 500.0);
    input.spawn_pressed = true;
    run_frame(&mut scenario, &input, &mut canvas);
    assert_eq!(scenario.bodies.len(), 1);
}

#[test]
fn edge_bounce_is_reported() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();

    // cursor radius 0.03 around y = 0.99 crosses the bottom edge
    let mut input = frame_at(800.0, 990.0);
    input.spawn_pressed = true;
    let report = run_frame(&mut scenario, &input, &mut canvas);
    assert_eq!(report.spawned, 1);
    assert_eq!(report.bounced, 1);
    let body = scenario.bodies.get(0).unwrap();
    assert!(close(body.x.y, 0.97, 1e-6), "y = {}", body.x.y);
}

#[test]
fn full_store_is_reported() {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.capacity = 2;
    let mut scenario = Scenario::build_scenario(cfg).unwrap();
    let mut canvas = DrawList::new();

    let mut reports = Vec::new();
    for i in 0..3 {
        let mut input = frame_at(200.0 + 300.0 * i as f32, 500.0);
        input.spawn_pressed = true;
        reports.push(run_frame(&mut scenario, &input, &mut canvas));
    }

    assert_eq!(reports[0].rejected, None);
    assert_eq!(reports[1].rejected, None);
    assert_eq!(reports[2].rejected, Some(StoreError::Full { capacity: 2 }));
    assert_eq!(reports[2].spawned, 0);
    assert_eq!(scenario.bodies.len(), 2);
}

#[test]
fn cursor_radius_clamped_every_frame() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();
    let (min, max, step) = (
        scenario.parameters.cursor_radius_min,
        scenario.parameters.cursor_radius_max,
        scenario.parameters.scroll_step,
    );

    let mut input = frame_at(500.0, 500.0);
    input.scroll = 1000.0;
    run_frame(&mut scenario, &input, &mut canvas);
    assert_eq!(scenario.cursor_radius, max);

    // one notch down moves off the bound straight away
    input.scroll = -1.0;
    run_frame(&mut scenario, &input, &mut canvas);
    assert!(close(scenario.cursor_radius, max - step, 1e-6));

    input.scroll = -1000.0;
    run_frame(&mut scenario, &input, &mut canvas);
    assert_eq!(scenario.cursor_radius, min);
}

#[test]
fn frame_delta_is_clamped() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();

    let mut input = frame_at(500.0, 500.0);
    input.delta = 5.0;
    run_frame(&mut scenario, &input, &mut canvas);

    assert_eq!(scenario.delta, scenario.parameters.max_delta);
}

#[test]
fn frame_draws_bodies_and_preview_ring() {
    let mut scenario = test_scenario();
    let mut canvas = DrawList::new();
    scenario.bodies.push(body_at(0.3, 0.5, 0.02)).unwrap();
    scenario.bodies.push(body_at(1.2, 0.5, 0.04)).unwrap();

    run_frame(&mut scenario, &frame_at(800.0, 200.0), &mut canvas);

    let circles: Vec<_> = canvas.filled_circles().collect();
    assert_eq!(circles.len(), 2);
    assert!(close(circles[0].1, 20.0, 1e-3));
    assert!(close(circles[1].1, 40.0, 1e-3));
    assert_eq!(circles[0].2, scenario.palette.body);

    let rings: Vec<_> = canvas.cmds.iter().filter(|c| matches!(c, DrawCmd::Ring { .. })).collect();
    assert_eq!(rings.len(), 1);
    if let DrawCmd::Ring { center, inner_radius, outer_radius, color } = *rings[0] {
        assert!(close(center.x, 800.0, 1e-3) && close(center.y, 200.0, 1e-3));
        assert!(close(inner_radius, scenario.cursor_radius * 1000.0, 1e-3));
        assert!(close(outer_radius - inner_radius, scenario.parameters.ring_thickness * 1000.0, 1e-3));
        assert_eq!(color, scenario.palette.creator_inactive);
    }

    // a second frame replaces, not appends
    run_frame(&mut scenario, &frame_at(800.0, 200.0), &mut canvas);
    assert_eq!(canvas.cmds.len(), 3);
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn config_partial_yaml_uses_defaults() {
    let yaml = r#"
engine:
  title: "test"
parameters:
  launch_factor: 300.0
bodies:
  - x: [0.5, 0.5]
    radius: 0.05
    color: [255, 0, 0, 255]
  - x: [1.0, 0.25]
    v: [0.001, 0.0]
    radius: 0.02
"#;
    let cfg = ScenarioConfig::from_yaml(yaml).unwrap();

    assert_eq!(cfg.engine.title, "test");
    assert_eq!(cfg.engine.target_fps, 60);
    assert_eq!(cfg.parameters.launch_factor, 300.0);
    assert_eq!(cfg.parameters.collision_dampen, 0.3);
    assert_eq!(cfg.bodies.len(), 2);
    assert_eq!(cfg.bodies[0].v, [0.0, 0.0]);
    assert_eq!(cfg.bodies[0].color, Some(Rgba { r: 255, g: 0, b: 0, a: 255 }));

    let scenario = Scenario::build_scenario(cfg).unwrap();
    assert_eq!(scenario.bodies.len(), 2);
    assert!(close(scenario.parameters.g, 3.0e-8 / 60.0, 1e-15));
    assert_eq!(scenario.bodies.get(1).unwrap().color, scenario.palette.body);
}

#[test]
fn config_rejects_inverted_cursor_bounds() {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.cursor_radius_min = 0.2;
    cfg.parameters.cursor_radius_max = 0.1;

    assert_eq!(cfg.validate(), Err(ConfigError::CursorBounds { min: 0.2, max: 0.1 }));
}

#[test]
fn config_rejects_nan_values() {
    let cfg = ScenarioConfig::from_yaml("parameters:\n  cursor_radius_max: .nan\n").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { field: "parameters.cursor_radius_max", .. })));
    assert!(Scenario::build_scenario(cfg).is_err());

    let cfg = ScenarioConfig::from_yaml("parameters:\n  collision_dampen: .nan\n").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::NotPositive { field: "parameters.collision_dampen", .. })));

    let cfg = ScenarioConfig::from_yaml("parameters:\n  cursor_radius_min: 0.05\n  cursor_radius_max: 0.04\n").unwrap();
    assert!(matches!(cfg.validate(), Err(ConfigError::CursorBounds { .. })));
}

#[test]
fn config_rejects_too_many_bodies() {
    let yaml = r#"
parameters:
  capacity: 1
bodies:
  - { x: [0.5, 0.5], radius: 0.05 }
  - { x: [0.8, 0.5], radius: 0.05 }
"#;
    let cfg = ScenarioConfig::from_yaml(yaml).unwrap();

    assert!(matches!(Scenario::build_scenario(cfg), Err(ConfigError::TooManyBodies { count: 2, capacity: 1 })));
}

#[test]
fn config_rejects_zero_radius_body() {
    let yaml = "bodies:\n  - { x: [0.5, 0.5], radius: 0.0 }\n";
    let cfg = ScenarioConfig::from_yaml(yaml).unwrap();

    assert!(matches!(cfg.validate(), Err(ConfigError::BodyRadius { index: 0, .. })));
}

#[test]
fn shipped_scenarios_load() {
    let dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["default.yaml", "binary.yaml"] {
        let text = std::fs::read_to_string(dir.join(name)).unwrap();
        let cfg = ScenarioConfig::from_yaml(&text).unwrap();
        assert!(Scenario::build_scenario(cfg).is_ok(), "{name} failed to build");
    }
}
