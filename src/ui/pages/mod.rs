//! Page widgets, one per route.
//!
//! Pages are plain widget groups built once at startup inside the content
//! scroll region; the navigator decides which one is visible. Their
//! content is deliberately thin - the shell treats pages as opaque
//! renderables and only ever shows, hides and scrolls them.

pub mod contact;
pub mod settings;
pub mod timer;

use fltk::{
    enums::{Align, Color},
    frame::Frame,
    prelude::*,
};

use crate::ui::nav_bar::NAV_BAR_HEIGHT;

/// Width pages lay their content out against (window width minus the
/// scrollbar gutter).
pub const PAGE_WIDTH: i32 = 400;

/// Y coordinate where page content starts
pub const PAGE_TOP: i32 = NAV_BAR_HEIGHT;

/// Section heading in the style shared by all pages
pub(crate) fn heading(y: i32, label: &str) -> Frame {
    let mut frame = Frame::default()
        .with_pos(15, y)
        .with_size(PAGE_WIDTH - 30, 30)
        .with_label(label);
    frame.set_label_size(20);
    frame.set_align(Align::Left | Align::Inside);
    frame
}

/// Dimmed caption text under a heading or control block
pub(crate) fn caption(y: i32, h: i32, label: &str) -> Frame {
    let mut frame = Frame::default()
        .with_pos(15, y)
        .with_size(PAGE_WIDTH - 30, h)
        .with_label(label);
    frame.set_label_size(11);
    frame.set_label_color(Color::from_rgb(100, 100, 100));
    frame.set_align(Align::Left | Align::Inside | Align::Wrap);
    frame
}
