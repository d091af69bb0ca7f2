use std::{
    error::Error,
    fmt::{Display, Formatter},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    InvalidByteLength {
        type_name: &'static str,
        expected: usize,
        found: usize,
    },
}

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            MathError::InvalidByteLength {
                type_name,
                expected,
                found,
            } => write!(
                f,
                "Invalid byte length for {}: expected {}, found {}",
                type_name, expected, found
            ),
        }
    }
}

impl Error for MathError {}

pub type MathResult<T> = Result<T, MathError>;
