use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    app::Sender,
    group::{Flex, Group, Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use super::nav_bar::{NavBar, NAV_BAR_HEIGHT};
use super::pages;
use crate::app::domain::messages::Message;
use crate::app::domain::preferences::Preferences;

pub const WINDOW_WIDTH: i32 = 420;
pub const WINDOW_HEIGHT: i32 = 560;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub nav_bar: NavBar,
    pub scroll: Scroll,
    pub timer_page: Group,
    pub settings_page: Group,
    pub contact_page: Group,
}

/// Build the main window: nav bar on top, scrollable content area below,
/// with all three pages constructed inside the scroll region.
pub fn build_main_window(
    sender: &Sender<Message>,
    preferences: &Rc<RefCell<Preferences>>,
) -> MainWidgets {
    let mut wind = Window::new(100, 100, WINDOW_WIDTH, WINDOW_HEIGHT, "\u{23f1} TickDown");
    wind.set_xclass("TickDown");

    let mut flex = Flex::new(0, 0, WINDOW_WIDTH, WINDOW_HEIGHT, None);
    flex.set_type(fltk::group::FlexType::Column);

    let nav_bar = NavBar::new(sender);
    flex.fixed(&nav_bar.widget, NAV_BAR_HEIGHT);

    let mut scroll = Scroll::default();
    scroll.set_type(ScrollType::Vertical);

    let timer_page = pages::timer::build_timer_page();
    let settings_page = pages::settings::build_settings_page(&preferences.borrow(), sender);
    let contact_page = pages::contact::build_contact_page(sender);

    scroll.end();

    flex.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        nav_bar,
        scroll,
        timer_page,
        settings_page,
        contact_page,
    }
}
