//! Result and Error types for the crate.
use miette::Diagnostic;
use thiserror::Error;

/// Result containing an error variant from this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Region error variants.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Two region lists that are compared pairwise differ in length.
    #[error("Region lists are not of the same size: {first} != {second}")]
    #[diagnostic(help("every region in the first list needs exactly one counterpart"))]
    LengthMismatch { first: usize, second: usize },

    /// A flat mask buffer does not match the requested dimensions.
    #[error("Mask buffer of length {len} does not match a {width}x{height} mask")]
    InvalidMask {
        width: usize,
        height: usize,
        len: usize,
    },

    /// IO error, this wraps a [std::io::Error]
    #[error(transparent)]
    IO(#[from] std::io::Error),

    /// Deserialize error, this wraps a [toml::de::Error]
    #[error(transparent)]
    Deserialize(#[from] toml::de::Error),
}
