use dioxus::prelude::*;

use crate::auth::{use_session, LogoutButton};
use crate::icons::FaUserShield;
use crate::Icon;

/// Top bar of the protected shell: title, navigation links (`children`), the
/// signed-in operator and a logout button.
#[component]
pub fn Navbar(#[props(default = "Dashboard".to_string())] title: String, children: Element) -> Element {
    let session = use_session();
    let operator = session.user().map(|user| user.display_name().to_string());

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-left",
                h1 { class: "navbar-title", "{title}" }
                div { class: "navbar-links", {children} }
            }
            div {
                class: "navbar-right",
                if let Some(operator) = operator {
                    span {
                        class: "navbar-operator",
                        Icon { icon: FaUserShield, width: 14, height: 14 }
                        "{operator}"
                    }
                }
                LogoutButton { class: "btn btn-destructive" }
            }
        }
    }
}
