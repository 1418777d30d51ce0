use dioxus::prelude::*;
use ui::use_auth;
use ui::views::RegisterView;

use crate::Route;

#[component]
pub fn Register() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if auth().is_authenticated() {
        nav.replace(Route::Dashboard {});
    }

    rsx! {
        RegisterView {
            on_success: move |_| {
                nav.replace(Route::Dashboard {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
