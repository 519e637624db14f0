//! UI layer - window construction and page widgets.

pub mod main_window;
pub mod nav_bar;
pub mod pages;
