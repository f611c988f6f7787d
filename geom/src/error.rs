//! Errors raised by constructors, setters and pools.
//!
//! Geometry functions never fail. Only malformed input to a constructor or a validating setter does, and it does so before anything
//! has been written.

/// The result type for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, GeomError>;

/// A geometry error.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A value was of the right type, but outside of its domain (e.g. an unknown enumerated value or an exhausted pool).
    #[error("domain error: {0}")]
    Domain(String),

    /// A value was of the wrong type (e.g. a constructor argument with an unexpected tag).
    #[error("type error: {0}")]
    Type(String),
}

impl GeomError {
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }

    pub fn type_error(msg: impl Into<String>) -> Self {
        Self::Type(msg.into())
    }
}
