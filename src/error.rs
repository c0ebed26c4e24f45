use thiserror::Error;

/// Errors returned by bounded index sets.
///
/// Both variants are deterministic functions of the caller's arguments;
/// retrying with the same argument gives the same outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("index {index} out of range for set of capacity {capacity}")]
    OutOfRange { index: usize, capacity: usize },

    #[error("capacity {capacity} exceeds the storage maximum of {max}")]
    CapacityTooLarge { capacity: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
