use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, dialog, prelude::*};
use log::{info, warn};

use tick_down::app::controllers::nav::Navigator;
use tick_down::app::domain::messages::Message;
use tick_down::app::domain::preferences::Preferences;
use tick_down::app::domain::routes::{Route, RouteTable};
use tick_down::app::state::AppState;
use tick_down::ui::main_window::build_main_window;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("TickDown {} starting", env!("CARGO_PKG_VERSION"));

    let fltk_app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    // One preference store for the whole session, handed to every consumer
    let preferences = Rc::new(RefCell::new(Preferences::default()));

    let widgets = build_main_window(&sender, &preferences);

    // The navigable surface: every path the app responds to
    let routes = RouteTable::new(vec![
        Route { path: "/", name: "timer", view: widgets.timer_page.clone() },
        Route { path: "/settings", name: "settings", view: widgets.settings_page.clone() },
        Route { path: "/contact", name: "contact", view: widgets.contact_page.clone() },
    ])
    .expect("route registration is static and unique");

    // Every navigation re-enters its page at the top
    let mut content = widgets.scroll.clone();
    let navigator = Navigator::new(routes, move || content.scroll_to(0, 0));

    let mut state = AppState::new(
        widgets.wind,
        widgets.flex,
        widgets.nav_bar,
        widgets.scroll,
        preferences,
        navigator,
    );

    state.show_route("/");

    state.window.end();
    state.window.show();

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::Navigate(path) => state.show_route(path),
                Message::SetPreference(flag, value) => state.set_preference(flag, value),
                Message::OpenLink(url) => {
                    if let Err(e) = state.open_link(url) {
                        warn!("failed to open \"{}\": {}", url, e);
                        dialog::alert_default(&format!("Could not open {}: {}", url, e));
                    }
                }
            }
        }
    }
}
