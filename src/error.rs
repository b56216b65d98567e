use thiserror::Error;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FractionError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("attempted to divide by zero")]
    DivideByZero
}

pub type Result<T> = std::result::Result<T, FractionError>;

pub(crate) const ZERO_DENOMINATOR: FractionError = FractionError::InvalidArgument("denominator cannot be zero");
pub(crate) const NOT_FINITE: FractionError = FractionError::InvalidArgument("component overflow");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ZERO_DENOMINATOR.to_string(), "invalid argument: denominator cannot be zero");
        assert_eq!(FractionError::DivideByZero.to_string(), "attempted to divide by zero");
    }
}
