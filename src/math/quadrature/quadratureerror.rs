use thiserror::Error;

pub type QuadratureResult<T> = Result<T, QuadratureError>;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadratureError {
    #[error("invalid interval [{a}, {b}]: bounds must be finite with a < b")]
    InvalidInterval { a: f64, b: f64 },

    #[error("subdivision count must be at least 1")]
    InvalidSubdivisions,
}
