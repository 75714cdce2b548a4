//! Error types for the simulation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("a universe needs to be at least 1x1, got size {0}")]
    InvalidSize(i64),

    #[error("a {0}x{0} universe has more cells than can be addressed")]
    SizeTooLarge(usize),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid value {value:?} for {key}")]
    Config { key: &'static str, value: String },

    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
