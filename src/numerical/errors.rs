use crate::symbolic::parse_expr::ParseError;
use std::fmt;

/// Error types for the solver front end and the calculus utilities
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    EmptyPolynomial,
    ZeroPolynomial,
    Parse(ParseError),
    InvalidConfig(String),
    Logger(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SolverError::EmptyPolynomial => write!(f, "Polynomial has no coefficients"),
            SolverError::ZeroPolynomial => {
                write!(f, "All coefficients are zero: every number is a root")
            }
            SolverError::Parse(e) => write!(f, "Parse error: {}", e),
            SolverError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            SolverError::Logger(msg) => write!(f, "Logger initialisation failed: {}", msg),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ParseError> for SolverError {
    fn from(e: ParseError) -> Self {
        SolverError::Parse(e)
    }
}
