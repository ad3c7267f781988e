// src/services/mod.rs
//
// Service layer
//
// - Translates API-facing DTOs to domain values and back
// - Rejects malformed input before any repository call
// - Holds repositories behind trait objects

pub mod movie_service;
pub mod star_service;

pub use movie_service::{MovieService, DEFAULT_MIN_DIRECTED, DEFAULT_PAGE_SIZE};
pub use star_service::{StarService, DEFAULT_MIN_ROLES};
