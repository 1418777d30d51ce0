use dioxus::prelude::*;
use store::Role;

use crate::guard::{EVERYONE, GRADING_ROLES, SUBMISSION_ROLES, VIOLATION_ROLES};
use crate::icons::{FaClipboardList, FaFileLines, FaGauge, FaStarHalfStroke, FaTriangleExclamation};
use crate::Icon;

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// One entry of the navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub roles: &'static [Role],
}

pub fn menu_items() -> [MenuItem; 5] {
    [
        MenuItem { label: "Dashboard", path: "/", roles: EVERYONE },
        MenuItem { label: "Exams", path: "/exams", roles: EVERYONE },
        MenuItem { label: "Submissions", path: "/submissions", roles: SUBMISSION_ROLES },
        MenuItem { label: "Grading", path: "/grading", roles: GRADING_ROLES },
        MenuItem { label: "Violations", path: "/violations", roles: VIOLATION_ROLES },
    ]
}

/// The menu entries `role` may open. Nothing when signed out.
pub fn visible_menu_items(role: Option<Role>) -> Vec<MenuItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    menu_items()
        .into_iter()
        .filter(|item| item.roles.contains(&role))
        .collect()
}

fn menu_icon(path: &str) -> Element {
    match path {
        "/" => rsx! { Icon { icon: FaGauge, width: 14, height: 14 } },
        "/exams" => rsx! { Icon { icon: FaClipboardList, width: 14, height: 14 } },
        "/submissions" => rsx! { Icon { icon: FaFileLines, width: 14, height: 14 } },
        "/grading" => rsx! { Icon { icon: FaStarHalfStroke, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaTriangleExclamation, width: 14, height: 14 } },
    }
}

#[component]
pub fn AppSidebar(
    role: Option<Role>,
    active_path: String,
    open: bool,
    on_navigate: EventHandler<String>,
) -> Element {
    let items = visible_menu_items(role);

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: if open { "sidebar open" } else { "sidebar" },

            div {
                class: "sidebar-brand",
                span { class: "sidebar-brand-title", "CMS" }
                span { class: "sidebar-brand-caption", "Course Management System" }
            }

            ul {
                class: "sidebar-menu",
                for item in items {
                    li {
                        key: "{item.path}",
                        class: if active_path == item.path { "sidebar-item active" } else { "sidebar-item" },
                        onclick: move |_| on_navigate.call(item.path.to_string()),
                        {menu_icon(item.path)}
                        span { "{item.label}" }
                    }
                }
            }
        }
    }
}
