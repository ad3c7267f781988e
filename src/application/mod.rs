// src/application/mod.rs
//
// Application Layer
//
// - Boundary between an API surface and the services
// - Translates between DTOs and domain entities

pub mod dto;
pub mod error_handling;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use state::AppState;
