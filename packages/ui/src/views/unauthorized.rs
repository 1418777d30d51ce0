use dioxus::prelude::*;

use crate::icons::{FaBan, FaCompass};
use crate::Icon;

/// Shown in place of a page the current role may not open.
#[component]
pub fn UnauthorizedView() -> Element {
    rsx! {
        div {
            class: "status-page",
            Icon { icon: FaBan, width: 48, height: 48 }
            h1 { "Access Denied" }
            p { "You do not have permission to view this page." }
            a { class: "btn btn-primary", href: "/", "Back to Dashboard" }
        }
    }
}

#[component]
pub fn NotFoundView() -> Element {
    rsx! {
        div {
            class: "status-page",
            Icon { icon: FaCompass, width: 48, height: 48 }
            h1 { "404" }
            p { "Page not found" }
            a { class: "btn btn-primary", href: "/", "Back to Dashboard" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_pages_link_home() {
        let mut dom = VirtualDom::new(UnauthorizedView);
        dom.rebuild_in_place();
        let denied = dioxus_ssr::render(&dom);
        assert!(denied.contains("Access Denied"));
        assert!(denied.contains("href=\"/\""));

        let mut dom = VirtualDom::new(NotFoundView);
        dom.rebuild_in_place();
        let missing = dioxus_ssr::render(&dom);
        assert!(missing.contains("Page not found"));
    }
}
