// Pet API module.
// Provides the HTTP client and types for the pet record service.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::PetApiClient;
pub use types::*;
