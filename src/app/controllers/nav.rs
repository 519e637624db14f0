use log::warn;

use crate::app::domain::routes::{Route, RouteTable};

/// Drives navigation over a [`RouteTable`].
///
/// The navigator owns the table, remembers the current route, and fires
/// the `on_navigate` callback after every navigation. The shell installs
/// a callback that resets the content scroll to the top, so each page is
/// entered at its beginning no matter where the previous one was left.
pub struct Navigator<V> {
    table: RouteTable<V>,
    current: usize,
    on_navigate: Box<dyn FnMut()>,
}

impl<V> Navigator<V> {
    /// Create a navigator positioned on the table's default route.
    ///
    /// No navigation has happened yet: `on_navigate` does not fire until
    /// the first [`navigate`](Self::navigate) call.
    pub fn new(table: RouteTable<V>, on_navigate: impl FnMut() + 'static) -> Self {
        Self {
            table,
            current: 0,
            on_navigate: Box::new(on_navigate),
        }
    }

    /// Resolve `path` and make its route current.
    ///
    /// Unknown paths redirect to the default route instead of failing, so
    /// navigation is total. The redirect is itself a navigation: the
    /// `on_navigate` callback fires either way.
    pub fn navigate(&mut self, path: &str) -> &Route<V> {
        self.current = match self.table.index_of(path) {
            Ok(index) => index,
            Err(err) => {
                warn!(
                    "{}; redirecting to \"{}\"",
                    err,
                    self.table.default_route().path
                );
                0
            }
        };
        (self.on_navigate)();
        &self.table.routes()[self.current]
    }

    /// The route most recently navigated to
    pub fn current(&self) -> &Route<V> {
        &self.table.routes()[self.current]
    }

    /// The table this navigator drives
    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn table() -> RouteTable<&'static str> {
        RouteTable::new(vec![
            Route { path: "/", name: "timer", view: "timer view" },
            Route { path: "/settings", name: "settings", view: "settings view" },
            Route { path: "/contact", name: "contact", view: "contact view" },
        ])
        .unwrap()
    }

    fn navigator() -> (Navigator<&'static str>, Rc<Cell<usize>>) {
        let resets = Rc::new(Cell::new(0));
        let counter = resets.clone();
        let nav = Navigator::new(table(), move || counter.set(counter.get() + 1));
        (nav, resets)
    }

    #[test]
    fn test_navigate_selects_matching_view() {
        let (mut nav, _) = navigator();
        assert_eq!(nav.navigate("/").view, "timer view");
        assert_eq!(nav.navigate("/settings").view, "settings view");
        assert_eq!(nav.navigate("/contact").view, "contact view");
        assert_eq!(nav.current().name, "contact");
    }

    #[test]
    fn test_scroll_reset_fires_on_every_navigation() {
        let (mut nav, resets) = navigator();
        assert_eq!(resets.get(), 0);

        nav.navigate("/settings");
        nav.navigate("/contact");
        // Re-entering the current route still counts as a navigation
        nav.navigate("/contact");
        assert_eq!(resets.get(), 3);
    }

    #[test]
    fn test_unknown_path_redirects_to_default() {
        let (mut nav, resets) = navigator();
        nav.navigate("/contact");

        let route = nav.navigate("/missing");
        assert_eq!(route.name, "timer");
        assert_eq!(nav.current().path, "/");
        // The redirect landed somewhere, so the scroll reset fired too
        assert_eq!(resets.get(), 2);
    }

    #[test]
    fn test_starts_on_default_route_without_firing() {
        let (nav, resets) = navigator();
        assert_eq!(nav.current().name, "timer");
        assert_eq!(resets.get(), 0);
    }
}
