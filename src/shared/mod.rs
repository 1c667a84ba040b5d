/// Shared error types used across all layers.
pub mod error;

pub use error::{CpeError, EnrichmentError, NvdError};
