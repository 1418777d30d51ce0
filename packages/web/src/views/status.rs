use dioxus::prelude::*;
use ui::views::{NotFoundView, UnauthorizedView};

#[component]
pub fn Unauthorized() -> Element {
    rsx! { UnauthorizedView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "No route matched");
    rsx! { NotFoundView {} }
}
