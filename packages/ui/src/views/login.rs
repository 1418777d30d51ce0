use api::LoginRequest;
use dioxus::prelude::*;
use store::NotificationKind;

use crate::components::{Button, Input, Label};
use crate::{notify, use_auth, use_backend, use_notifications, AuthState};

/// Sign-in form. `on_success` runs after the session is stored.
#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut auth = use_auth();
    let mut notifications = use_notifications();
    let mut key_login = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if key_login().trim().is_empty() || password().is_empty() {
            error.set(Some("Enter your username or email and password".to_string()));
            return;
        }
        let request = LoginRequest {
            key_login: key_login().trim().to_string(),
            password: password(),
        };
        let backend = backend.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            notifications.write().set_loading(true);
            match backend.login(&request).await {
                Ok(session) => {
                    auth.set(AuthState::signed_in(session));
                    notify(&mut notifications, NotificationKind::Success, "Login successful!");
                    on_success.call(());
                }
                Err(e) => {
                    let message = e.to_string();
                    notify(&mut notifications, NotificationKind::Error, &message);
                    error.set(Some(message));
                }
            }
            notifications.write().set_loading(false);
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Sign In" }
                p { class: "auth-subtitle", "Course Management System" }

                if let Some(message) = error() {
                    p { class: "form-error", role: "alert", "{message}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        Label { html_for: "login-key", "Email or Username" }
                        Input {
                            id: "login-key",
                            value: key_login(),
                            required: true,
                            oninput: move |evt: FormEvent| key_login.set(evt.value()),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            input_type: "password",
                            value: password(),
                            required: true,
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button {
                        class: "w-full",
                        submit: true,
                        disabled: submitting(),
                        if submitting() { "Signing in..." } else { "Sign In" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_register.call(());
                        },
                        "Register here"
                    }
                }
            }
        }
    }
}
