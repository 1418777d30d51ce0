//! Academic-integrity violations. Verification is applied to the row before
//! the backend confirms it and rolled back if the call fails.

use api::ViolationFilter;
use dioxus::prelude::*;
use store::models::format_timestamp;
use store::{NotificationKind, Violation};

use super::common::{EmptyState, ErrorBanner, LoadingState, PageHeader};
use super::ModalOverlay;
use crate::components::{Button, ButtonVariant, Chip, ChipTone, Label, Textarea};
use crate::{notify, set_modal, use_backend, use_notifications};

const VERIFY_MODAL: &str = "verify-violation";

const FILTERS: [(ViolationFilter, &str); 3] = [
    (ViolationFilter::All, "All"),
    (ViolationFilter::Pending, "Pending"),
    (ViolationFilter::Verified, "Verified"),
];

/// Set the `verified` flag of violation `id`, returning its previous value.
pub fn set_verified(list: &mut [Violation], id: i64, verified: bool) -> Option<bool> {
    let violation = list.iter_mut().find(|v| v.id == id)?;
    Some(std::mem::replace(&mut violation.verified, verified))
}

#[component]
pub fn ViolationsView() -> Element {
    let backend = use_backend();
    let mut notifications = use_notifications();
    let mut filter = use_signal(ViolationFilter::default);
    let mut violations = use_signal(Vec::<Violation>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| Option::<Violation>::None);
    let mut notes = use_signal(String::new);

    let loader_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = loader_backend.clone();
        let current = filter();
        async move {
            loading.set(true);
            match backend.violations(current).await {
                Ok(list) => violations.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    use_drop(move || {
        if let Ok(mut state) = notifications.try_write() {
            state.toggle_modal(VERIFY_MODAL, Some(false));
        }
    });

    let handle_confirm = move |_| {
        let Some(violation) = selected() else {
            return;
        };
        selected.set(None);
        set_modal(&mut notifications, VERIFY_MODAL, false);
        if !notes().trim().is_empty() {
            tracing::info!(violation = violation.id, notes = %notes(), "Verification notes");
        }
        notes.set(String::new());

        let Some(previous) = set_verified(&mut violations.write(), violation.id, true) else {
            return;
        };
        let backend = backend.clone();
        spawn(async move {
            match backend.verify_violation(violation.id, true).await {
                Ok(updated) => {
                    if let Some(slot) = violations.write().iter_mut().find(|v| v.id == updated.id) {
                        *slot = updated;
                    }
                    notify(&mut notifications, NotificationKind::Success, "Violation verified");
                }
                Err(e) => {
                    set_verified(&mut violations.write(), violation.id, previous);
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let mut close_dialog = move || {
        selected.set(None);
        set_modal(&mut notifications, VERIFY_MODAL, false);
        notes.set(String::new());
    };

    let verifying = if notifications.read().is_modal_open(VERIFY_MODAL) {
        selected()
    } else {
        None
    };

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Violations", subtitle: "Academic violations" }

            if let Some(message) = error() {
                ErrorBanner { message: message, on_dismiss: move |_| error.set(None) }
            }

            div {
                class: "filter-tabs",
                for (value, label) in FILTERS {
                    button {
                        key: "{label}",
                        class: if filter() == value { "filter-tab active" } else { "filter-tab" },
                        onclick: move |_| filter.set(value),
                        "{label}"
                    }
                }
            }

            if loading() {
                LoadingState {}
            } else if violations.read().is_empty() {
                EmptyState { message: "No violations" }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Submission" }
                            th { "Type" }
                            th { "Description" }
                            th { "Reported" }
                            th { "Verified" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for violation in violations() {
                            tr {
                                key: "{violation.id}",
                                td { "#{violation.submission_id}" }
                                td { "{violation.kind}" }
                                td { {violation.description.clone().unwrap_or_default()} }
                                td { {format_timestamp(&violation.created_at)} }
                                td {
                                    if violation.verified {
                                        Chip { label: "Verified", tone: ChipTone::Success }
                                    } else {
                                        Chip { label: "Pending", tone: ChipTone::Warning }
                                    }
                                }
                                td {
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        disabled: violation.verified,
                                        onclick: {
                                            let violation = violation.clone();
                                            move |_| {
                                                selected.set(Some(violation.clone()));
                                                set_modal(&mut notifications, VERIFY_MODAL, true);
                                            }
                                        },
                                        if violation.verified { "Verified" } else { "Verify" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(violation) = verifying {
            ModalOverlay {
                title: "Verify Violation",
                on_close: move |_| close_dialog(),
                div {
                    class: "dialog-form",
                    p { strong { "Submission: " } "#{violation.submission_id}" }
                    p { strong { "Type: " } "{violation.kind}" }
                    if let Some(description) = violation.description.clone() {
                        p { strong { "Description: " } "{description}" }
                    }
                    div {
                        class: "form-field",
                        Label { html_for: "verify-notes", "Verification Notes" }
                        Textarea {
                            id: "verify-notes",
                            placeholder: "Enter your verification notes...",
                            value: notes(),
                            oninput: move |evt: FormEvent| notes.set(evt.value()),
                        }
                    }
                    div {
                        class: "dialog-actions",
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| close_dialog(),
                            "Cancel"
                        }
                        Button { onclick: handle_confirm, "Verify" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn violation(id: i64, verified: bool) -> Violation {
        Violation {
            id,
            submission_id: 10 + id,
            kind: "Plagiarism".to_string(),
            description: None,
            verified,
            created_at: "2024-11-20T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_optimistic_verify_and_revert() {
        let mut list = vec![violation(1, false), violation(2, false)];

        let previous = set_verified(&mut list, 2, true);
        assert_eq!(previous, Some(false));
        assert!(list[1].verified);

        set_verified(&mut list, 2, previous.unwrap());
        assert!(!list[1].verified);
        assert!(!list[0].verified);
    }

    #[test]
    fn test_unknown_violation_is_untouched() {
        let mut list = vec![violation(1, true)];
        assert_eq!(set_verified(&mut list, 7, false), None);
        assert!(list[0].verified);
    }
}
