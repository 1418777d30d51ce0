use dioxus::prelude::*;

use crate::{use_auth, use_config, AppSidebar, Navbar};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Navbar, role-filtered sidebar and the page content.
///
/// Route-agnostic: the platform crate passes the current path and performs
/// navigation in `on_navigate`.
#[component]
pub fn AppShell(active_path: String, on_navigate: EventHandler<String>, children: Element) -> Element {
    let auth = use_auth();
    let config = use_config();
    let mut menu_open = use_signal(|| false);

    rsx! {
        document::Stylesheet { href: VIEWS_CSS }

        div {
            class: "app-shell",
            Navbar {
                title: config.app.name.clone(),
                session: auth().session,
                on_toggle_menu: move |_| menu_open.toggle(),
            }
            div {
                class: "app-body",
                AppSidebar {
                    role: auth().role(),
                    active_path: active_path,
                    open: menu_open(),
                    on_navigate: move |path: String| {
                        menu_open.set(false);
                        on_navigate.call(path);
                    },
                }
                main {
                    class: "app-content",
                    {children}
                }
            }
        }
    }
}
