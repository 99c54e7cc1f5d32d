/// Inventory domain layer - pure models and view logic with no I/O
pub mod domain;
pub mod services;
