use thiserror::Error;

/// Error type for every fallible operation in this crate. Lookups that can
/// simply miss return `Option` instead; an error always means the caller
/// handed us something structurally wrong.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HexError {
    /// Cube components have to cancel out. Anything else is not a position
    /// on the hex lattice.
    #[error("invalid cube coordinates ({x}, {y}, {z}): components must sum to zero")]
    InvalidCoordinates { x: i32, y: i32, z: i32 },

    /// Same constraint as [`HexError::InvalidCoordinates`], checked with a
    /// rounding tolerance because the components are floats.
    #[error(
        "invalid fractional cube coordinates ({x}, {y}, {z}): components must sum to zero"
    )]
    InvalidFractionalCoordinates { x: f64, y: f64, z: f64 },

    /// A parameter was out of range for the requested operation, e.g. a
    /// negative search radius or a non-positive shape dimension.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}
