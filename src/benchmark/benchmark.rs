use std::time::Instant;

use crate::configuration::config::{ConfigError, ScenarioConfig};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, NVec2};

/// Aspect ratio of the benchmark viewport (16:9)
const ASPECT: f32 = 16.0 / 9.0;

/// Helper to build a scenario holding `n` bodies spread over the viewport
fn make_scenario(n: usize) -> Result<Scenario, ConfigError> {
    let mut cfg = ScenarioConfig::default();
    cfg.parameters.capacity = n.max(1);
    let mut scenario = Scenario::build_scenario(cfg)?;

    let radius = scenario.parameters.cursor_radius_min;
    for i in 0..n {
        let i_f = i as f32;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            (0.5 + 0.45 * (i_f * 0.37).sin()) * ASPECT,
            0.5 + 0.45 * (i_f * 0.13).cos(),
        );
        let body = Body::from_radius(x, NVec2::zeros(), radius, scenario.parameters.mass_coefficient, scenario.palette.body);
        if scenario.bodies.push(body).is_err() {
            break;
        }
    }

    Ok(scenario)
}

/// Milliseconds per physics pass, averaged over `steps`
fn time_steps(scenario: &mut Scenario, steps: usize) -> f64 {
    let dt = 1.0 / scenario.engine.target_fps as f32;
    let t0 = Instant::now();
    for _ in 0..steps {
        euler_integrator(&mut scenario.bodies, &scenario.forces, &scenario.parameters, dt, ASPECT);
    }
    t0.elapsed().as_secs_f64() * 1000.0 / steps as f64
}

/// Time the per-frame physics pass for a few store sizes
pub fn bench_step() -> Result<(), ConfigError> {
    let ns = [100, 200, 400, 800, 1600, 3200];
    let steps = 20;

    for n in ns {
        let mut scenario = make_scenario(n)?;

        // Warm up
        time_steps(&mut scenario, 1);

        let ms = time_steps(&mut scenario, steps);
        let budget = 1000.0 / scenario.engine.target_fps as f64;
        println!("N = {n:5}, step = {ms:8.4} ms ({:5.1}% of frame)", 100.0 * ms / budget);
    }

    Ok(())
}

/// Same measurement over a dense range of N, as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() -> Result<(), ConfigError> {
    println!("N,step_ms");

    for n in (100..=4000).step_by(100) {
        // Small n: average over more steps to smooth noise
        let steps = if n <= 1000 { 20 } else { 5 };
        let mut scenario = make_scenario(n)?;
        let ms = time_steps(&mut scenario, steps);
        println!("{},{:.6}", n, ms);
    }

    Ok(())
}
