//! Error types for littlewood-core.

use thiserror::Error;

/// Result type for littlewood-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the core safety checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A fixed-width backend cannot represent the intermediates of a pair.
    #[error("{backend} cannot evaluate {pair}: needs {required_bits} bits, has {capacity_bits}")]
    Overflow {
        backend: &'static str,
        required_bits: u64,
        capacity_bits: u64,
        pair: String,
    },
}
