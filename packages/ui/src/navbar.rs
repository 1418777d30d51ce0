use dioxus::prelude::*;
use store::Session;

use crate::auth::LogoutButton;
use crate::icons::{FaBars, FaCircleUser};
use crate::Icon;

/// Top bar: menu toggle, console name and the signed-in user.
#[component]
pub fn Navbar(title: String, session: Option<Session>, on_toggle_menu: EventHandler<()>) -> Element {
    rsx! {
        header {
            class: "navbar",
            button {
                class: "navbar-menu-toggle",
                title: "Toggle menu",
                onclick: move |_| on_toggle_menu.call(()),
                Icon { icon: FaBars, width: 16, height: 16 }
            }
            span { class: "navbar-title", "{title}" }
            div { class: "navbar-spacer" }
            if let Some(ref s) = session {
                div {
                    class: "navbar-user",
                    Icon { icon: FaCircleUser, width: 16, height: 16 }
                    span { class: "navbar-user-name", "{s.display_name()}" }
                    span { class: "navbar-user-role", "{s.role}" }
                }
                LogoutButton { class: "navbar-logout" }
            }
        }
    }
}
