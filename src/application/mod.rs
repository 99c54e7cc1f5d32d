/// Application layer - Use cases, state and DTOs
///
/// This layer orchestrates the inventory services and talks to
/// infrastructure only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod state;
pub mod use_cases;
