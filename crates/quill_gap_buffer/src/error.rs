use thiserror::Error;

use crate::buffer::Kind;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("index {index} out of range for buffer of length {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("expected a {expected} sequence, found {found}")]
    KindMismatch { expected: Kind, found: Kind },
}
