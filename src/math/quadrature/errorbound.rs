use crate::math::curve::curve::Curve;
use crate::math::quadrature::quadratureerror::{
    QuadratureError,
    QuadratureResult
};
use crate::math::quadrature::trapezoidalrule::check_interval;

/// Worst-case truncation error of the composite trapezoidal rule:
///
///   (b - a)³ / (12n²) · max|f″(x)| over [a, b]
///
/// `second_derivative` is f″ itself and `critical_points` are the roots of
/// f‴, derived ahead of time by the caller. |f″| is sampled at both endpoints
/// and at every critical point falling inside [a, b]; since f″ is smooth its
/// extremum on a closed interval can occur nowhere else. The routine does not
/// derive critical points and is only as tight as the set it is given.
pub fn trapezoidal_error_bound(
    second_derivative: &dyn Curve,
    critical_points: &[f64],
    a: f64,
    b: f64,
    n: u32,
) -> QuadratureResult<f64> {
    check_interval(a, b)?;
    if n == 0 {
        return Err(QuadratureError::InvalidSubdivisions);
    }

    let mut max_abs = second_derivative.value(a).abs().max(second_derivative.value(b).abs());
    for &x in critical_points {
        if a <= x && x <= b {
            max_abs = max_abs.max(second_derivative.value(x).abs());
        }
    }

    let width = b - a;
    Ok(width.powi(3) / (12.0 * (n as f64).powi(2)) * max_abs)
}
