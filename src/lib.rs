// src/lib.rs
// moviedb - Movie catalog data-access and schema layers
//
// Architecture:
// - Domain: entities, creation shapes and invariants
// - Persistence: SQLite behind an r2d2 pool, one repository per concern
// - Services: DTO <-> domain translation, validation at the boundary
// - Explicit: "not found" is None, storage failures are errors

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    validate_movie,
    validate_new_movie,
    validate_new_star,
    validate_star,
    ActorStats,
    BirthYearStats,
    DirectorStats,
    // Movie
    Movie,
    MovieDetail,
    // Statistics
    MovieYearStats,
    NewMovie,
    NewStar,
    // Star
    Star,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Configuration & Database
// ============================================================================

pub use config::DatabaseConfig;
pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{MovieService, StarService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};
