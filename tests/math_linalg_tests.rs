#![cfg(feature = "dev")]

use approx::assert_relative_eq;
use descent_rs::internals::math::linalg::FloatLinalg;

// ============================================================================
// Normal Equations Tests
// ============================================================================

#[test]
fn test_solve_normal_2x2_f64() {
    // Line y = 2 + 1.5x over x = 0, 1, 2, 3:
    //   X'X = [[4, 6], [6, 14]], X'y = [17, 33]
    let xt_x = [4.0, 6.0, 6.0, 14.0];
    let xt_y = [17.0, 33.0];

    let beta = f64::solve_normal(&xt_x, &xt_y, 2).unwrap();
    assert_eq!(beta.len(), 2);
    assert_relative_eq!(beta[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(beta[1], 1.5, epsilon = 1e-10);
}

#[test]
fn test_solve_normal_2x2_f32() {
    let xt_x = [4.0_f32, 6.0, 6.0, 14.0];
    let xt_y = [17.0_f32, 33.0];

    let beta = f32::solve_normal(&xt_x, &xt_y, 2).unwrap();
    assert_relative_eq!(beta[0], 2.0, epsilon = 1e-4);
    assert_relative_eq!(beta[1], 1.5, epsilon = 1e-4);
}

#[test]
fn test_solve_normal_identity() {
    let xt_x = [1.0, 0.0, 0.0, 1.0];
    let xt_y = [3.25, -7.5];

    let beta = f64::solve_normal(&xt_x, &xt_y, 2).unwrap();
    assert_relative_eq!(beta[0], 3.25);
    assert_relative_eq!(beta[1], -7.5);
}

#[test]
fn test_solve_normal_rank_deficient_falls_back_finite() {
    // All predictors equal: X'X is singular; the SVD fallback still
    // produces a finite least-norm solution.
    let xt_x = [2.0, 2.0, 2.0, 2.0];
    let xt_y = [4.0, 4.0];

    if let Some(beta) = f64::solve_normal(&xt_x, &xt_y, 2) {
        assert!(beta.iter().all(|b| b.is_finite()));
    }
}
