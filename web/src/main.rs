use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::views::{Dashboard, EditActivity, Home, Reports};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/reports")]
    Reports {},
    #[route("/activity")]
    EditActivity {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Shared theme lives in ui/; inlined so web carries no duplicate copy.

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_dashboard(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Dashboard {},
        "{label}"
    })
}
fn nav_reports(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Reports {},
        "{label}"
    })
}
fn nav_activity(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::EditActivity {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    {
        ui::i18n::init();
        // Register localized navigation builder
        register_nav(NavBuilder {
            home: nav_home,
            dashboard: nav_dashboard,
            reports: nav_reports,
            activity: nav_activity,
        });
    }

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Style { "{THEME_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
