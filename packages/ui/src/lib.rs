//! This crate contains all shared UI for the exam console.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod backend;
pub use backend::{make_backend, make_storage, use_backend, ConsoleBackend, PlatformStore};

pub mod views;

pub const CONSOLE_CSS: Asset = asset!("/assets/styling/console.css");

mod navbar;
pub use navbar::Navbar;

mod auth;
pub use auth::{use_auth, use_config, AuthProvider, AuthState, LogoutButton};

mod notifications;
pub use notifications::{notify, set_modal, use_notifications, NotificationProvider, ToastStack};

pub mod guard;
pub use guard::{check_access, Access, Protected, RoleGate};

mod sidebar;
pub use sidebar::{menu_items, visible_menu_items, AppSidebar, MenuItem};
