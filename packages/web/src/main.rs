use dioxus::prelude::*;
use dioxus::router::Navigator;

use session::{ConsoleConfig, PathNavigator, RoutesConfig};
use ui::{NoticeList, Notices, SessionProvider, SharedNavigator};
use views::{Bookings, Inmates, Login, NotFound, ProtectedShell, Root};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(ConsoleRoot)]
        #[route("/auth/login?:from")]
        Login { from: String },
        #[layout(ProtectedShell)]
            #[route("/")]
            Root {},
            #[route("/inmates")]
            Inmates {},
            #[route("/booking")]
            Bookings {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const CONSOLE_TOML: &str = include_str!("../../../console.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(tracing::Level::INFO) {
        eprintln!("Failed to initialize logging: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Inmate Console" }
        document::Link { rel: "stylesheet", href: ui::CONSOLE_CSS }

        Router::<Route> {}
    }
}

/// Navigator that resolves configured paths against [`Route`] and replaces
/// the current history entry, so "back" never returns to a redirect.
fn router_navigator(routes: RoutesConfig, nav: Navigator) -> PathNavigator<impl Fn(&str)> {
    PathNavigator::new(routes, move |path: &str| match path.parse::<Route>() {
        Ok(route) => {
            nav.replace(route);
        }
        Err(_) => tracing::warn!("No route matches {path}"),
    })
}

/// Outermost layout: owns configuration, notices and the session.
#[component]
fn ConsoleRoot() -> Element {
    let config = use_hook(|| ConsoleConfig::from_toml_or_default(CONSOLE_TOML));
    let nav = use_navigator();
    let navigator = use_hook(|| SharedNavigator::new(router_navigator(config.routes.clone(), nav)));
    use_context_provider(|| Signal::new(Notices::default()));

    rsx! {
        SessionProvider {
            config: config,
            navigator: navigator,
            Outlet::<Route> {}
            NoticeList {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_path_falls_through_to_not_found() {
        assert_eq!(
            "/nope/deeper".parse::<Route>().ok(),
            Some(Route::NotFound {
                segments: vec!["nope".to_string(), "deeper".to_string()],
            })
        );
    }

    #[test]
    fn test_catch_all_leaves_console_routes_alone() {
        assert_eq!("/".parse::<Route>().ok(), Some(Route::Root {}));
        assert_eq!("/inmates".parse::<Route>().ok(), Some(Route::Inmates {}));
        assert_eq!("/booking".parse::<Route>().ok(), Some(Route::Bookings {}));
    }

    #[test]
    fn test_configured_routes_resolve() {
        let routes = ConsoleConfig::from_toml_or_default(CONSOLE_TOML).routes;
        assert_eq!(
            routes.default_protected.parse::<Route>().ok(),
            Some(Route::Inmates {})
        );
        assert!(matches!(
            routes.login_location(Some("/booking")).parse::<Route>(),
            Ok(Route::Login { .. })
        ));
    }
}
