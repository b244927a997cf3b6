use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid argument: null collection (parameter '{param}')")]
    NullArgument { param: &'static str },

    #[error("Invalid argument: empty collection (parameter '{param}')")]
    EmptyArgument { param: &'static str },

    #[error("Invalid argument: {value} is out of range (parameter '{param}')")]
    OutOfRange { param: &'static str, value: u32 },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl CoreError {
    /// ## Summary
    /// Returns the name of the parameter that was rejected, when known.
    #[must_use]
    pub const fn param(&self) -> Option<&'static str> {
        match self {
            Self::NullArgument { param }
            | Self::EmptyArgument { param }
            | Self::OutOfRange { param, .. } => Some(param),
            Self::InvalidArgument(_) => None,
        }
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
