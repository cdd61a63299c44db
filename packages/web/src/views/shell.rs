use dioxus::prelude::*;
use session::Navigator as _;
use ui::{use_session, Navbar, ProtectedRoute};

use crate::Route;

/// Layout of every protected route: guard, navbar, page content.
#[component]
pub fn ProtectedShell() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ProtectedRoute {
            current_path: route.to_string(),
            Navbar {
                title: "Dashboard",
                Link { to: Route::Bookings {}, active_class: "active", "Bookings" }
                Link { to: Route::Inmates {}, active_class: "active", "Inmates" }
            }
            main {
                class: "shell-main",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the configured landing route
#[component]
pub fn Root() -> Element {
    let session = use_session();
    session.navigator().go_to_default_protected_route();
    rsx! {}
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "login-container",
            div {
                class: "login-card",
                h1 { class: "login-title", "Page not found" }
                p { class: "login-subtitle", "Nothing lives at /{path}." }
                Link { class: "btn btn-primary", to: Route::Root {}, "Back to the console" }
            }
        }
    }
}
