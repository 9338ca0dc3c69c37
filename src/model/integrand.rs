use crate::math::curve::curve::CurveIntegration;
use crate::math::curve::monomialpolynomial::MonomialPolynomial;

/// The fixed integrand under study, f(x) = 3x⁵ - 8x⁴, bundled with the
/// analytic pieces the trapezoidal error bound needs: its second derivative
/// f″(x) = 60x³ - 96x² and the roots of f‴.
///
/// The critical points are derived by hand for this polynomial only:
/// f‴(x) = 180x² - 192x = 12x(15x - 16), so f″ can only attain its extremum
/// at x = 0, x = 16/15, or at an interval endpoint. Reusing this type for a
/// different polynomial requires re-deriving that set.
pub struct Integrand {
    curve: MonomialPolynomial,
    second_derivative: MonomialPolynomial,
    critical_points: Vec<f64>,
}

impl Integrand {
    pub fn quintic() -> Integrand {
        let curve = MonomialPolynomial::new(vec![0.0, 0.0, 0.0, 0.0, -8.0, 3.0]).unwrap();
        let second_derivative = curve.differentiate().differentiate();

        Integrand {
            curve,
            second_derivative,
            critical_points: vec![0.0, 16.0 / 15.0],
        }
    }

    pub fn curve(&self) -> &MonomialPolynomial {
        &self.curve
    }

    pub fn second_derivative(&self) -> &MonomialPolynomial {
        &self.second_derivative
    }

    pub fn critical_points(&self) -> &[f64] {
        &self.critical_points
    }

    /// F(b) - F(a) with F(x) = x⁶/2 - (8/5)x⁵, exact to floating point.
    pub fn exact_integral(&self, a: f64, b: f64) -> f64 {
        self.curve.integral(a, b)
    }
}
