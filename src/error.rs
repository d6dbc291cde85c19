use thiserror::Error;

/// Failures reported by the pass-through container operations.
///
/// Equality and hashing never fail; only mutating or copying the
/// underlying container can.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("container is read-only")]
    ReadOnly,
    #[error("destination has room for {available} elements, {needed} required")]
    InsufficientSpace { needed: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, CollectionError>;
