use api::RegisterRequest;
use dioxus::prelude::*;
use store::{NotificationKind, Role};

use crate::components::{Button, Input, Label};
use crate::{notify, use_auth, use_backend, use_notifications, AuthState};

/// Raw values of the registration form.
#[derive(Clone, Debug, PartialEq)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::Student,
        }
    }
}

impl RegisterForm {
    /// Check the form locally. Nothing is sent when this fails.
    pub fn validate(&self) -> Result<RegisterRequest, String> {
        if self.full_name.trim().is_empty() {
            return Err("Full name is required".to_string());
        }
        if !self.email.contains('@') {
            return Err("Enter a valid email address".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match".to_string());
        }
        Ok(RegisterRequest {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            password: self.password.clone(),
            role: self.role,
        })
    }
}

#[component]
pub fn RegisterView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let backend = use_backend();
    let mut auth = use_auth();
    let mut notifications = use_notifications();
    let mut form = use_signal(RegisterForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        let backend = backend.clone();
        spawn(async move {
            error.set(None);
            submitting.set(true);
            notifications.write().set_loading(true);
            match backend.register(&request).await {
                Ok(session) => {
                    auth.set(AuthState::signed_in(session));
                    notify(&mut notifications, NotificationKind::Success, "Registration successful!");
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

    let role = form.read().role;

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { class: "auth-title", "Create Account" }
                p { class: "auth-subtitle", "Register for Course Management System" }

                if let Some(message) = error() {
                    p { class: "form-error", role: "alert", "{message}" }
                }

                form {
                    class: "auth-form",
                    onsubmit: handle_submit,
                    div {
                        class: "form-field",
                        Label { html_for: "register-name", "Full Name" }
                        Input {
                            id: "register-name",
                            value: form.read().full_name.clone(),
                            oninput: move |evt: FormEvent| form.write().full_name = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "register-email", "Email" }
                        Input {
                            id: "register-email",
                            input_type: "email",
                            value: form.read().email.clone(),
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "register-phone", "Phone Number" }
                        Input {
                            id: "register-phone",
                            input_type: "tel",
                            value: form.read().phone_number.clone(),
                            oninput: move |evt: FormEvent| form.write().phone_number = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            input_type: "password",
                            value: form.read().password.clone(),
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "register-confirm", "Confirm Password" }
                        Input {
                            id: "register-confirm",
                            input_type: "password",
                            value: form.read().confirm_password.clone(),
                            oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "register-role", "Role" }
                        select {
                            id: "register-role",
                            class: "form-input",
                            onchange: move |evt: FormEvent| {
                                if let Some(role) = evt
                                    .value()
                                    .parse::<u8>()
                                    .ok()
                                    .and_then(|code| Role::try_from(code).ok())
                                {
                                    form.write().role = role;
                                }
                            },
                            for option_role in Role::ALL {
                                option {
                                    key: "{option_role.code()}",
                                    value: "{option_role.code()}",
                                    selected: option_role == role,
                                    "{option_role}"
                                }
                            }
                        }
                    }
                    Button {
                        class: "w-full",
                        submit: true,
                        disabled: submitting(),
                        if submitting() { "Creating account..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_login.call(());
                        },
                        "Sign in"
                    }
                }
            }
        }
    }
}
