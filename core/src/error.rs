use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell position out of range")]
    OutOfRange,
    #[error("Not enough items to sample from")]
    NotEnoughItems,
}

pub type Result<T> = core::result::Result<T, GameError>;
