use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    group::{Flex, Group, Scroll},
    prelude::*,
    window::Window,
};
use log::debug;

use super::controllers::nav::Navigator;
use super::domain::preferences::{PrefFlag, Preferences};
use super::error::Result;
use crate::ui::nav_bar::{NavBar, display_label};

/// Main application coordinator.
///
/// Owns the top-level widgets, the navigator and the shared preference
/// store; the dispatch loop in main calls into it for every message.
pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub nav_bar: NavBar,
    pub scroll: Scroll,
    pub preferences: Rc<RefCell<Preferences>>,
    pub navigator: Navigator<Group>,
}

impl AppState {
    pub fn new(
        window: Window,
        flex: Flex,
        nav_bar: NavBar,
        scroll: Scroll,
        preferences: Rc<RefCell<Preferences>>,
        navigator: Navigator<Group>,
    ) -> Self {
        Self {
            window,
            flex,
            nav_bar,
            scroll,
            preferences,
            navigator,
        }
    }

    /// Navigate to `path` and bring its page on screen.
    ///
    /// The navigator resolves the path (redirecting unknown ones) and
    /// resets the content scroll; this method swaps page visibility and
    /// refreshes the nav bar highlight and window title.
    pub fn show_route(&mut self, path: &str) {
        let (name, mut view) = {
            let route = self.navigator.navigate(path);
            (route.name, route.view.clone())
        };

        // One page visible at a time
        for route in self.navigator.table().routes() {
            route.view.clone().hide();
        }
        view.show();

        self.nav_bar.set_active(name);
        self.update_window_title(name);
        self.scroll.redraw();
        debug!("navigated to \"{}\"", name);
    }

    /// Overwrite one preference flag
    pub fn set_preference(&mut self, flag: PrefFlag, value: bool) {
        self.preferences.borrow_mut().set(flag, value);
        debug!("preference {:?} set to {}", flag, value);
    }

    /// Open `url` in the system browser
    pub fn open_link(&self, url: &str) -> Result<()> {
        open::that(url)?;
        Ok(())
    }

    /// Update the window title based on the current page
    fn update_window_title(&mut self, name: &str) {
        self.window
            .set_label(&format!("{} - \u{23f1} TickDown", display_label(name)));
    }
}
