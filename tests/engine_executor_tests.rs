#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use descent_rs::internals::algorithms::stopping::StopCondition;
use descent_rs::internals::engine::executor::{DescentConfig, DescentExecutor};
use descent_rs::prelude::{Objective, Quadratic, QuadraticSurface};

fn config(step_size: f64, max_iterations: usize, stop: StopCondition<f64>) -> DescentConfig<f64> {
    DescentConfig {
        step_size,
        max_iterations,
        stop,
        record_costs: true,
    }
}

// ============================================================================
// Basic Loop Semantics
// ============================================================================

#[test]
fn test_first_point_is_start_second_is_one_update() {
    // f(x) = 0.5x^2, f'(x) = x, from 2.5 with step 0.3
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(0.3, 8, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    assert_eq!(trajectory.position(0), &[2.5]);
    assert_relative_eq!(trajectory.cost(0).unwrap(), 3.125);
    // 2.5 - 0.3 * 2.5 = 1.75, exactly representable
    assert_eq!(trajectory.position(1), &[1.75]);
}

#[test]
fn test_halts_at_cap_or_inside_radius() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(0.3, 8, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    let final_norm = trajectory.final_position()[0].abs();
    assert!(trajectory.updates() == 8 || final_norm < 0.1);
    // With these numbers the 8th iterate is 2.5 * 0.7^8, about 0.144, so
    // the cap is what stops the run.
    assert_eq!(trajectory.updates(), 8);
    assert!(!trajectory.converged());
}

#[test]
fn test_converges_inside_radius_given_room() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(0.3, 100, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    assert!(trajectory.converged());
    assert!(trajectory.final_position()[0].abs() < 0.1);
    // 2.5 * 0.7^k drops below 0.1 at k = 10.
    assert_eq!(trajectory.updates(), 10);
}

#[test]
fn test_post_cap_recheck_sets_converged_flag() {
    // Cap lands exactly on the first iterate inside the radius.
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(0.3, 10, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    assert_eq!(trajectory.updates(), 10);
    assert!(trajectory.converged());
    assert!(trajectory.final_position()[0].abs() < 0.1);
}

// ============================================================================
// Boundary Cases
// ============================================================================

#[test]
fn test_single_update_yields_two_points() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(0.3, 1, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    assert_eq!(trajectory.len(), 2);
    assert_eq!(trajectory.updates(), 1);
}

#[test]
fn test_start_already_inside_radius_yields_single_point() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(0.3, 1, StopCondition::NearOrigin(10.0));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    assert_eq!(trajectory.len(), 1);
    assert_eq!(trajectory.updates(), 0);
    assert!(trajectory.converged());
    assert_eq!(trajectory.position(0), &[2.5]);
}

// ============================================================================
// Determinism and Valid Outcomes
// ============================================================================

#[test]
fn test_identical_inputs_produce_identical_trajectories() {
    let cost = QuadraticSurface::new(0.3, 0.5, 0.8, 1.0);
    let cfg = config(0.4, 15, StopCondition::NearOrigin(0.1));

    let first = DescentExecutor::run_objective(&cfg, &cost, &[2.0, 2.0]);
    let second = DescentExecutor::run_objective(&cfg, &cost, &[2.0, 2.0]);

    assert_eq!(first, second);
}

#[test]
fn test_monotonic_cost_decrease_below_stability_threshold() {
    // f(x) = 0.5x^2 has gradient Lipschitz constant L = 1; any step
    // below 2/L = 2 must not increase the cost.
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(1.9, 50, StopCondition::Never);

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    let costs = trajectory.costs().unwrap();
    for pair in costs.windows(2) {
        assert!(pair[1] <= pair[0]);
    }
}

#[test]
fn test_divergent_step_size_is_a_valid_outcome() {
    // Step 3.0 > 2/L: each update multiplies the iterate by -2.
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let cfg = config(3.0, 20, StopCondition::Never);

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[1.0]);

    assert_eq!(trajectory.updates(), 20);
    assert!(!trajectory.converged());
    let final_norm = trajectory.final_position()[0].abs();
    assert!(final_norm > 1e5);
    assert!(final_norm.is_finite());
}

// ============================================================================
// 2D and Gradient-Only Runs
// ============================================================================

#[test]
fn test_second_point_2d() {
    // (2, 2) - 0.4 * (2.8, 3.6) = (0.88, 0.56)
    let cost = QuadraticSurface::new(0.3, 0.5, 0.8, 1.0);
    let cfg = config(0.4, 15, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.0, 2.0]);

    assert_eq!(trajectory.dimensions(), 2);
    assert_relative_eq!(trajectory.position(1)[0], 0.88, epsilon = 1e-12);
    assert_relative_eq!(trajectory.position(1)[1], 0.56, epsilon = 1e-12);
    assert_relative_eq!(trajectory.cost(0).unwrap(), 7.4, epsilon = 1e-12);
}

#[test]
fn test_gradient_only_run_records_no_costs() {
    let cfg = config(0.3, 8, StopCondition::NearOrigin(0.1));

    let trajectory = DescentExecutor::run_gradient(
        &cfg,
        |x: &[f64], g: &mut [f64]| g[0] = x[0],
        &[2.5],
    );

    assert!(trajectory.costs().is_none());
    assert!(trajectory.cost(0).is_none());
    assert_eq!(trajectory.position(1), &[1.75]);
}

#[test]
fn test_record_costs_disabled() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let mut cfg = config(0.3, 8, StopCondition::Never);
    cfg.record_costs = false;

    let trajectory = DescentExecutor::run_objective(&cfg, &cost, &[2.5]);

    assert!(trajectory.costs().is_none());
    assert_eq!(trajectory.updates(), 8);
}

#[test]
fn test_gradient_matches_objective_path() {
    // The closure route and the trait route must visit identical points.
    let cost = QuadraticSurface::new(0.3, 0.5, 0.8, 1.0);
    let cfg = config(0.4, 15, StopCondition::NearOrigin(0.1));

    let via_objective = DescentExecutor::run_objective(&cfg, &cost, &[2.0, 2.0]);
    let via_gradient = DescentExecutor::run_gradient(
        &cfg,
        |x: &[f64], g: &mut [f64]| cost.gradient_into(x, g),
        &[2.0, 2.0],
    );

    assert_eq!(via_objective.positions(), via_gradient.positions());
}
