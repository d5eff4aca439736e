use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be at least 1x1")]
    InvalidDimensions,
    #[error("Mine density must be at least 1, density 0 leaves no safe cell")]
    InvalidDensity,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout does not match the configured board size")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
