/// Compliance domain - pure business logic for inventory compliance reporting
///
/// Nothing in this module performs I/O. Data fetched by the outbound ports
/// arrives as domain values and leaves as aggregated domain values.
pub mod domain;
pub mod policies;
pub mod services;
