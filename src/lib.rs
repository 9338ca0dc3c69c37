pub mod math {
    pub mod curve {
        pub mod curve;
        pub mod monomialpolynomial;
    }

    pub mod quadrature {
        pub mod quadratureerror;
        pub mod trapezoidalrule;
        pub mod errorbound;
    }
}

pub mod model {
    pub mod integrand;
}
