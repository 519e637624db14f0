//! TickDown - a minimalist countdown timer.
//!
//! This crate hosts the application shell: route-based page navigation
//! and the session preference store. See [`app`] for the domain and
//! coordination layers and [`ui`] for widget construction.

pub mod app;
pub mod ui;
