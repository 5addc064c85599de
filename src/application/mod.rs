/// Application layer - Use cases, DTOs and run-scoped services
///
/// This layer contains the application logic that orchestrates
/// domain services and coordinates with infrastructure through ports.
pub mod dto;
pub mod services;
pub mod use_cases;
