use crate::math::curve::curve::Curve;
use crate::math::quadrature::quadratureerror::{
    QuadratureError,
    QuadratureResult
};

/// Composite trapezoidal rule over [a, b] with n equal subdivisions.
///
/// With h = (b - a)/n the approximation is
///
///   h·[ (f(a) + f(b))/2 + Σ_{i=1}^{n-1} f(a + i·h) ]
///
/// which converges as O(h²) for integrands with bounded second derivative.
pub fn trapezoidal_rule(curve: &dyn Curve, a: f64, b: f64, n: u32) -> QuadratureResult<f64> {
    check_interval(a, b)?;
    if n == 0 {
        return Err(QuadratureError::InvalidSubdivisions);
    }

    let h = (b - a) / (n as f64);
    let mut sum = (curve.value(a) + curve.value(b)) / 2.0;
    for i in 1..n {
        sum += curve.value(a + (i as f64) * h);
    }

    Ok(h * sum)
}

pub(super) fn check_interval(a: f64, b: f64) -> QuadratureResult<()> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(QuadratureError::InvalidInterval { a, b });
    }
    Ok(())
}
