
use numquad::math::quadrature::errorbound::trapezoidal_error_bound;
use numquad::math::quadrature::trapezoidalrule::trapezoidal_rule;
use numquad::model::integrand::Integrand;

const LOWER_BOUND: f64 = 4.0;
const UPPER_BOUND: f64 = 16.0;

fn main() {

    let integrand = Integrand::quintic();

    let exact_area = integrand.exact_integral(LOWER_BOUND, UPPER_BOUND);
    println!(
        "Exact Area of f(x) from {} to {}: {:.6}\n",
        LOWER_BOUND, UPPER_BOUND, exact_area
    );

    for n in [10u32, 100] {
        let approx_area = trapezoidal_rule(integrand.curve(), LOWER_BOUND, UPPER_BOUND, n).unwrap();
        println!("Approximation using Trapezoidal Rule (n={}): {:.6}", n, approx_area);

        let true_error = (exact_area - approx_area).abs();
        println!("True Error for Trapezoidal Rule (n={}): {:.6}\n", n, true_error);

        let error_bound = trapezoidal_error_bound(
            integrand.second_derivative(),
            integrand.critical_points(),
            LOWER_BOUND,
            UPPER_BOUND,
            n,
        ).unwrap();
        println!("Maximum Error Bound for Trapezoidal Rule (n={}): {:.6}", n, error_bound);
        println!(
            "(The true error {:.6} should be less than or equal to the error bound {:.6})\n",
            true_error, error_bound
        );
    }
}
