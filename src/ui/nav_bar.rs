use fltk::{
    app::Sender,
    button::Button,
    enums::{Color, FrameType},
    group::Flex,
    prelude::*,
};

use crate::app::domain::messages::Message;

pub const NAV_BAR_HEIGHT: i32 = 36;

/// (route name, path) pairs the bar links to, in display order.
/// Must stay in step with the route table registered in main.
pub const NAV_ITEMS: [(&str, &str); 3] = [
    ("timer", "/"),
    ("settings", "/settings"),
    ("contact", "/contact"),
];

/// Horizontal bar with one link button per page.
///
/// Each button sends [`Message::Navigate`] with its path; the button for
/// the current route is highlighted via [`set_active`](NavBar::set_active).
pub struct NavBar {
    pub widget: Flex,
    buttons: Vec<(&'static str, Button)>,
}

impl NavBar {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut widget = Flex::default().with_size(0, NAV_BAR_HEIGHT);
        widget.set_type(fltk::group::FlexType::Row);
        widget.set_margin(4);
        widget.set_spacing(4);

        let mut buttons = Vec::new();
        for (name, path) in NAV_ITEMS {
            let mut button = Button::default().with_label(&display_label(name));
            button.set_frame(FrameType::FlatBox);
            button.clear_visible_focus();

            let sender = sender.clone();
            button.set_callback(move |_| sender.send(Message::Navigate(path)));
            buttons.push((name, button));
        }

        widget.end();

        Self { widget, buttons }
    }

    /// Highlight the button for route `name`, clearing the previous one
    pub fn set_active(&mut self, name: &str) {
        for (route_name, button) in &mut self.buttons {
            if *route_name == name {
                button.set_color(Color::from_rgb(210, 225, 245));
            } else {
                button.set_color(Color::BackGround);
            }
            button.redraw();
        }
    }
}

/// Human-facing label for a route name: first letter upper-cased
pub fn display_label(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(display_label("timer"), "Timer");
        assert_eq!(display_label("settings"), "Settings");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn test_nav_items_cover_all_pages() {
        let names: Vec<&str> = NAV_ITEMS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["timer", "settings", "contact"]);
    }
}
