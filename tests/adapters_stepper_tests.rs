use approx::assert_relative_eq;
use descent_rs::prelude::*;

// ============================================================================
// Session Lifecycle Tests
// ============================================================================

#[test]
fn test_session_starts_at_the_start_position() {
    let cost = Quadratic::new(0.5, 0.0, 1.0);
    let session = Descent::new()
        .step_size(0.3)
        .max_iterations(8)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.5])
        .unwrap();

    assert_eq!(session.position(), &[2.5]);
    assert_eq!(session.iteration(), 0);
    assert!(!session.is_finished());
    assert_relative_eq!(session.cost(), 4.125);
}

#[test]
fn test_advance_yields_one_point_per_update() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let mut session = Descent::new()
        .step_size(0.3)
        .max_iterations(3)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.5])
        .unwrap();

    let first = session.advance().unwrap();
    assert_eq!(first.iteration, 1);
    assert_eq!(first.position, &[1.75]);
    assert!(first.cost.is_some());

    assert!(session.advance().is_some());
    assert!(session.advance().is_some());

    // Cap reached: the session is exhausted.
    assert!(session.advance().is_none());
    assert!(session.is_finished());
    assert!(!session.converged());
    assert_eq!(session.iteration(), 3);

    // Finished sessions stay finished.
    assert!(session.advance().is_none());
}

#[test]
fn test_session_finishes_converged_inside_radius() {
    let cost = Quadratic::new(0.5_f64, 0.0, 0.0);
    let mut session = Descent::new()
        .step_size(0.3)
        .max_iterations(100)
        .convergence_radius(0.1)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.5])
        .unwrap();

    while session.advance().is_some() {}

    assert!(session.is_finished());
    assert!(session.converged());
    assert!(session.position()[0].abs() < 0.1);
    assert_eq!(session.iteration(), 10);
}

#[test]
fn test_start_inside_radius_finishes_without_yielding() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let mut session = Descent::new()
        .step_size(0.3)
        .max_iterations(8)
        .convergence_radius(10.0)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.5])
        .unwrap();

    assert!(session.advance().is_none());
    assert!(session.is_finished());
    assert!(session.converged());
    assert_eq!(session.iteration(), 0);
    assert_eq!(session.position(), &[2.5]);
}

#[test]
fn test_record_costs_disabled_yields_bare_points() {
    let cost = Quadratic::new(0.5, 0.0, 0.0);
    let mut session = Descent::new()
        .step_size(0.3)
        .max_iterations(2)
        .record_costs(false)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.5])
        .unwrap();

    let point = session.advance().unwrap();
    assert!(point.cost.is_none());
}

// ============================================================================
// Batch Parity Tests
// ============================================================================

#[test]
fn test_stepwise_visits_the_same_positions_as_batch() {
    let cost = QuadraticSurface::new(0.3, 0.5, 0.8, 1.0);

    let batch = Descent::new()
        .step_size(0.4)
        .max_iterations(15)
        .convergence_radius(0.1)
        .adapter(Batch)
        .build()
        .unwrap()
        .minimize(&cost, &[2.0, 2.0])
        .unwrap();

    let mut session = Descent::new()
        .step_size(0.4)
        .max_iterations(15)
        .convergence_radius(0.1)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.0, 2.0])
        .unwrap();

    let mut visited = vec![session.position().to_vec()];
    while let Some(point) = session.advance() {
        visited.push(point.position.to_vec());
    }

    assert_eq!(visited.len(), batch.len());
    for (i, position) in visited.iter().enumerate() {
        assert_eq!(position.as_slice(), batch.position(i));
    }
    assert_eq!(session.converged(), batch.converged());
    assert_eq!(session.iteration(), batch.updates());
}

#[test]
fn test_stepwise_costs_match_batch_costs() {
    let cost = Quadratic::new(0.5, 2.0, 1.0);

    let batch = Descent::new()
        .step_size(0.3)
        .max_iterations(12)
        .adapter(Batch)
        .build()
        .unwrap()
        .minimize(&cost, &[2.5])
        .unwrap();

    let mut session = Descent::new()
        .step_size(0.3)
        .max_iterations(12)
        .adapter(Stepwise)
        .build()
        .unwrap()
        .session(cost, &[2.5])
        .unwrap();

    let mut costs = vec![session.cost()];
    while let Some(point) = session.advance() {
        costs.push(point.cost.unwrap());
    }

    assert_eq!(costs.as_slice(), batch.costs().unwrap());
}
