#![cfg(feature = "dev")]

use descent_rs::internals::primitives::errors::DescentError;

#[test]
fn test_descent_error_display() {
    // EmptyStart
    let err = DescentError::EmptyStart;
    assert_eq!(format!("{}", err), "Start position is empty");

    // InvalidStepSize
    let err = DescentError::InvalidStepSize(-0.1);
    assert_eq!(
        format!("{}", err),
        "Invalid step_size: -0.1 (must be > 0 and finite)"
    );

    // InvalidStepSize (zero)
    let err = DescentError::InvalidStepSize(0.0);
    assert_eq!(
        format!("{}", err),
        "Invalid step_size: 0 (must be > 0 and finite)"
    );

    // InvalidMaxIterations
    let err = DescentError::InvalidMaxIterations(0);
    assert_eq!(
        format!("{}", err),
        "Invalid max_iterations: 0 (must be at least 1)"
    );

    // InvalidRadius
    let err = DescentError::InvalidRadius(-1.0);
    assert_eq!(
        format!("{}", err),
        "Invalid convergence_radius: -1 (must be >= 0 and finite)"
    );

    // InvalidNumericValue
    let err = DescentError::InvalidNumericValue("start[0]=NaN".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: start[0]=NaN");

    // MismatchedInputs
    let err = DescentError::MismatchedInputs {
        x_len: 10,
        y_len: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Length mismatch: x has 10 points, y has 5"
    );

    // MismatchedDimensions
    let err = DescentError::MismatchedDimensions {
        expected: 2,
        got: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Dimension mismatch: expected 2 components, got 3"
    );

    // DuplicateParameter
    let err = DescentError::DuplicateParameter { parameter: "foo" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'foo' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_descent_error_properties() {
    let err1 = DescentError::EmptyStart;
    let err2 = err1.clone();
    assert_eq!(err1, err2);
    assert_ne!(err1, DescentError::InvalidMaxIterations(0));
    assert_ne!(
        DescentError::InvalidStepSize(0.0),
        DescentError::InvalidStepSize(-0.5)
    );
}

#[cfg(feature = "std")]
#[test]
fn test_descent_error_is_std_error() {
    fn assert_error<T: std::error::Error>() {}
    assert_error::<DescentError>();
}
