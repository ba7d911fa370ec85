//! Error types

/// Errors raised while building or mutating frames, layouts and styles.
///
/// Validation always happens before mutation, so a receiver that returned
/// an error is left exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A required argument was missing or had the wrong shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A name that is not one of the legal values of an enumeration.
    #[error("{owner}: '{value}' is not a valid {kind}")]
    InvalidEnum {
        /// Entity that rejected the value.
        owner: String,
        /// Name of the enumeration.
        kind: &'static str,
        /// The rejected value.
        value: String,
    },
}

impl Error {
    /// Creates a new invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a new invalid enum error reported by the enumeration itself.
    pub fn invalid_enum(kind: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidEnum {
            owner: kind.to_string(),
            kind,
            value: value.into(),
        }
    }

    /// Re-attributes an invalid enum error to `owner`.
    pub fn within(self, owner: impl Into<String>) -> Self {
        match self {
            Self::InvalidEnum { kind, value, .. } => Self::InvalidEnum {
                owner: owner.into(),
                kind,
                value,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
