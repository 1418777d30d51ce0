use dioxus::prelude::*;
use ui::views::AppShell;

use crate::Route;

/// Sidebar path of the current route, so the matching menu entry is active.
fn menu_path(route: &Route) -> &'static str {
    match route {
        Route::Dashboard {} => "/",
        Route::Exams { .. } => "/exams",
        Route::Submissions { .. } => "/submissions",
        Route::Grading {} => "/grading",
        Route::Violations {} => "/violations",
        _ => "",
    }
}

#[component]
pub fn AppLayout() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    rsx! {
        AppShell {
            active_path: menu_path(&route),
            on_navigate: move |path: String| {
                nav.push(path);
            },
            Outlet::<Route> {}
        }
    }
}
