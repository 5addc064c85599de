/// Type alias for Result with anyhow::Error as the error type.
/// Every fallible operation in the crate returns this so errors can be
/// enriched with context on the way up to `main`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
