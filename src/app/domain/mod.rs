//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Route and RouteTable
//! - Session preferences
//! - Message types for the event system

pub mod messages;
pub mod preferences;
pub mod routes;

pub use messages::Message;
pub use preferences::{PrefFlag, Preferences};
pub use routes::{Route, RouteTable};
