//! Result type alias for Trellis operations

use crate::domain::errors::TrellisError;

/// Result type used throughout Trellis
pub type Result<T> = std::result::Result<T, TrellisError>;
