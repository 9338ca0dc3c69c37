use crate::math::curve::curve::{
    Curve,
    CurveIntegration
};

// ─────────────────────────────────────────────────────────────────────────────
// MonomialPolynomial - dense power basis
// ─────────────────────────────────────────────────────────────────────────────
//
// Coefficients [a_0, a_1, ..., a_n] represent Σ a_k·x^k.
//
//   - value():      Horner evaluation, O(n)
//   - derivative(): analytic, Horner on the derived coefficients
//   - integral():   term-wise antiderivative Σ a_k·x^(k+1)/(k+1)

pub struct MonomialPolynomial {
    coefs: Vec<f64>,
}

impl MonomialPolynomial {
    /// Builds a polynomial from power-basis coefficients.
    ///
    /// Trailing zero coefficients are dropped so degree() reflects the
    /// leading nonzero term. An empty coefficient list yields `None`.
    pub fn new(mut coefs: Vec<f64>) -> Option<MonomialPolynomial> {
        if coefs.is_empty() {
            return None;
        }

        while coefs.len() > 1 && *coefs.last().unwrap() == 0.0 {
            coefs.pop();
        }

        Some(MonomialPolynomial { coefs })
    }

    pub fn degree(&self) -> usize {
        self.coefs.len() - 1
    }

    pub fn coefs(&self) -> &[f64] {
        &self.coefs
    }

    /// Derivative polynomial: d/dx Σ a_k·x^k = Σ k·a_k·x^(k-1).
    pub fn differentiate(&self) -> MonomialPolynomial {
        if self.coefs.len() == 1 {
            return MonomialPolynomial { coefs: vec![0.0] };
        }

        let derived: Vec<f64> = self
            .coefs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(k, a)| (k as f64) * a)
            .collect();

        MonomialPolynomial { coefs: derived }
    }

    /// Horner evaluation of Σ c_k·x^k.
    fn horner(coefs: &[f64], x: f64) -> f64 {
        let mut result = 0.0;
        for c in coefs.iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// ∫_a^b Σ a_k·x^k dx = Σ a_k·[x^(k+1)/(k+1)]_a^b
    fn integral_monomial(&self, a: f64, b: f64) -> f64 {
        let mut result = 0.0;
        for (k, c) in self.coefs.iter().enumerate() {
            let power = (k + 1) as f64;
            result += c * (b.powi((k + 1) as i32) - a.powi((k + 1) as i32)) / power;
        }

        result
    }
}

impl Curve for MonomialPolynomial {
    fn value(&self, x: f64) -> f64 {
        Self::horner(&self.coefs, x)
    }

    fn derivative(&self, x: f64) -> f64 {
        self.differentiate().value(x)
    }
}

impl CurveIntegration for MonomialPolynomial {
    fn integral(&self, a: f64, b: f64) -> f64 {
        // 符號慣例：∫_a^b = -∫_b^a
        if (a - b).abs() < f64::EPSILON {
            return 0.0;
        }

        if a > b {
            -self.integral_monomial(b, a)
        } else {
            self.integral_monomial(a, b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner_matches_direct_evaluation() {
        // 3x^5 - 8x^4 at a few points
        let p = MonomialPolynomial::new(vec![0.0, 0.0, 0.0, 0.0, -8.0, 3.0]).unwrap();

        for &x in &[-2.0f64, -1.0, 0.0, 1.0, 4.0, 16.0] {
            let direct = 3.0 * x.powi(5) - 8.0 * x.powi(4);
            assert!((p.value(x) - direct).abs() < 1e-6 * direct.abs().max(1.0));
        }
    }

    #[test]
    fn test_differentiate_twice() {
        // (3x^5 - 8x^4)'' = 60x^3 - 96x^2
        let p = MonomialPolynomial::new(vec![0.0, 0.0, 0.0, 0.0, -8.0, 3.0]).unwrap();
        let p2 = p.differentiate().differentiate();

        assert_eq!(p2.degree(), 3);
        assert_eq!(p2.coefs(), &[0.0, 0.0, -96.0, 60.0]);
    }

    #[test]
    fn test_derivative_of_constant_is_zero() {
        let p = MonomialPolynomial::new(vec![7.0]).unwrap();
        let dp = p.differentiate();

        assert_eq!(dp.degree(), 0);
        assert_eq!(dp.value(3.0), 0.0);
    }

    #[test]
    fn test_integral_quadratic() {
        // ∫_0^1 x^2 dx = 1/3
        let p = MonomialPolynomial::new(vec![0.0, 0.0, 1.0]).unwrap();
        assert!((p.integral(0.0, 1.0) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_integral_sign_convention() {
        let p = MonomialPolynomial::new(vec![0.0, 2.0]).unwrap();

        assert!((p.integral(0.0, 2.0) - 4.0).abs() < 1e-12);
        assert!((p.integral(2.0, 0.0) + 4.0).abs() < 1e-12);
        assert_eq!(p.integral(2.0, 2.0), 0.0);
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        let p = MonomialPolynomial::new(vec![1.0, 2.0, 0.0, 0.0]).unwrap();
        assert_eq!(p.degree(), 1);
    }

    #[test]
    fn test_empty_coefs_rejected() {
        assert!(MonomialPolynomial::new(vec![]).is_none());
    }
}
