use fltk::{enums::Font, frame::Frame, group::Group, prelude::*};

use super::{caption, heading, PAGE_TOP, PAGE_WIDTH};

/// Build the timer page.
///
/// The countdown display is a static placeholder; timer mechanics live
/// outside this shell.
pub fn build_timer_page() -> Group {
    let mut page = Group::new(0, PAGE_TOP, PAGE_WIDTH, 480, None);

    heading(PAGE_TOP + 15, "Timer");

    let mut clock = Frame::default()
        .with_pos(15, PAGE_TOP + 80)
        .with_size(PAGE_WIDTH - 30, 120)
        .with_label("25:00");
    clock.set_label_font(Font::CourierBold);
    clock.set_label_size(64);

    caption(
        PAGE_TOP + 220,
        40,
        "Pick a duration and press start.\nPreferences apply from the Settings page.",
    );

    page.end();
    page
}
