use dioxus::prelude::*;

use crate::icons::{FaCircleExclamation, FaInbox, FaXmark};
use crate::Icon;

#[component]
pub fn PageHeader(title: String, #[props(default)] subtitle: String) -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { class: "page-title", "{title}" }
            if !subtitle.is_empty() {
                p { class: "page-subtitle", "{subtitle}" }
            }
        }
    }
}

/// Dismissible error message shown at the top of a page.
#[component]
pub fn ErrorBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "error-banner",
            role: "alert",
            Icon { icon: FaCircleExclamation, width: 14, height: 14 }
            span { class: "error-banner-message", "{message}" }
            button {
                class: "error-banner-close",
                title: "Dismiss",
                onclick: move |_| on_dismiss.call(()),
                Icon { icon: FaXmark, width: 12, height: 12 }
            }
        }
    }
}

/// Shown instead of a table when there is nothing to list.
#[component]
pub fn EmptyState(message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            Icon { icon: FaInbox, width: 24, height: 24 }
            p { "{message}" }
        }
    }
}

#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div { class: "loading-state", "{message}" }
    }
}
