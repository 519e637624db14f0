use fltk::{app::Sender, button::CheckButton, group::Group, prelude::*};

use super::{caption, heading, PAGE_TOP, PAGE_WIDTH};
use crate::app::domain::messages::Message;
use crate::app::domain::preferences::{PrefFlag, Preferences};

/// Build the settings page: one checkbox per preference flag.
///
/// Checkboxes are initialized from the store and apply immediately; each
/// toggle sends a [`Message::SetPreference`] for the dispatch loop.
pub fn build_settings_page(current: &Preferences, sender: &Sender<Message>) -> Group {
    let mut page = Group::new(0, PAGE_TOP, PAGE_WIDTH, 620, None);

    heading(PAGE_TOP + 15, "Settings");

    let mut y = PAGE_TOP + 70;
    for &flag in PrefFlag::all() {
        let mut check = CheckButton::default()
            .with_pos(30, y)
            .with_size(PAGE_WIDTH - 60, 25)
            .with_label(flag.display_name());
        check.set_value(current.get(flag));

        let sender = sender.clone();
        check.set_callback(move |c| sender.send(Message::SetPreference(flag, c.value())));
        y += 35;
    }

    caption(
        y + 10,
        35,
        "Changes apply immediately and last for this session.\nNothing is saved to disk.",
    );

    page.end();
    page
}
