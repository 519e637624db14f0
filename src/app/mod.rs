//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Routes, Preferences, Messages)
//! - `controllers/` - Orchestration (Navigator)
//! - `error.rs` - Error types
//! - `state.rs` - Main application coordinator

pub mod controllers;
pub mod domain;
pub mod error;
pub mod state;

// Re-exports for convenient external access
pub use controllers::nav::Navigator;
pub use domain::{Message, PrefFlag, Preferences, Route, RouteTable};
pub use error::{AppError, Result};
pub use state::AppState;
