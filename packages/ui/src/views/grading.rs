//! Examiner grading: pick an ungraded submission, read the rubric, rate it.

use api::GradeRequest;
use dioxus::prelude::*;
use store::models::format_timestamp;
use store::{Exam, NotificationKind, Rubric, Submission};

use super::common::{EmptyState, ErrorBanner, LoadingState, PageHeader};
use super::dashboard::exam_title;
use crate::components::{Button, ButtonVariant, Label, Textarea};
use crate::icons::FaStar;
use crate::{notify, use_backend, use_notifications, Icon};

pub const MAX_RATING: u8 = 5;

/// Score sent to the backend for a star rating: 20 points per star, so
/// five stars is 100. Ratings above five count as five.
pub fn score_from_rating(rating: u8) -> u32 {
    u32::from(rating.min(MAX_RATING)) * 20
}

#[component]
pub fn GradingView() -> Element {
    let backend = use_backend();
    let mut notifications = use_notifications();
    let mut queue = use_signal(Vec::<Submission>::new);
    let mut exams = use_signal(Vec::<Exam>::new);
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut rating = use_signal(|| 0u8);
    let mut comments = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let queue_backend = backend.clone();
    let _loader = use_resource(move || {
        let backend = queue_backend.clone();
        async move {
            let (submission_list, exam_list) = futures::join!(
                backend.submissions(None),
                backend.exams(Default::default())
            );
            match (submission_list, exam_list) {
                (Ok(s), Ok(e)) => {
                    queue.set(s.into_iter().filter(|s| !s.is_graded()).collect());
                    exams.set(e);
                }
                (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    let current = use_memo(move || {
        let id = selected()?;
        queue.read().iter().find(|s| s.id == id).cloned()
    });

    let rubric_backend = backend.clone();
    let rubrics = use_resource(move || {
        let backend = rubric_backend.clone();
        let exam_id = current().map(|s| s.exam_id);
        async move {
            let Some(exam_id) = exam_id else {
                return Vec::new();
            };
            backend.rubrics(exam_id).await.unwrap_or_else(|e| {
                tracing::warn!("No rubric for exam {}: {}", exam_id, e);
                Vec::new()
            })
        }
    });

    let mut reset_form = move || {
        selected.set(None);
        rating.set(0);
        comments.set(String::new());
    };

    let handle_submit = move |_| {
        let Some(submission) = current() else {
            return;
        };
        let backend = backend.clone();
        let score = score_from_rating(rating());
        spawn(async move {
            submitting.set(true);
            match backend
                .grade_submission(submission.id, GradeRequest { total_score: score })
                .await
            {
                Ok(_) => {
                    tracing::info!(submission = submission.id, score, "Submission graded");
                    queue.write().retain(|s| s.id != submission.id);
                    reset_form();
                    notify(&mut notifications, NotificationKind::Success, "Grade submitted");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
            submitting.set(false);
        });
    };

    let rubric_list: Vec<Rubric> = rubrics().unwrap_or_default();
    let score = score_from_rating(rating());

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Grading" }

            if let Some(message) = error() {
                ErrorBanner { message: message, on_dismiss: move |_| error.set(None) }
            }

            if loading() {
                LoadingState {}
            } else if queue.read().is_empty() {
                EmptyState { message: "Nothing left to grade" }
            } else {
                div {
                    class: "grading-layout",
                    ul {
                        class: "grading-queue card",
                        for submission in queue() {
                            li {
                                key: "{submission.id}",
                                class: if selected() == Some(submission.id) { "queue-item active" } else { "queue-item" },
                                onclick: move |_| {
                                    selected.set(Some(submission.id));
                                    rating.set(0);
                                },
                                span { class: "queue-student", "{submission.student_id}" }
                                span { class: "queue-exam", {exam_title(&exams.read(), submission.exam_id)} }
                                span { class: "queue-date", {format_timestamp(&submission.submitted_at)} }
                            }
                        }
                    }

                    if let Some(submission) = current() {
                        section {
                            class: "card grading-form",
                            h2 { class: "card-title", "Grade Submission" }
                            p {
                                class: "muted",
                                "Student: {submission.student_id} | Exam: "
                                {exam_title(&exams.read(), submission.exam_id)}
                            }

                            for rubric in rubric_list {
                                div {
                                    key: "{rubric.id}",
                                    class: "rubric",
                                    h3 { "{rubric.name}" }
                                    ul {
                                        for criterion in rubric.criteria.iter() {
                                            li {
                                                key: "{criterion.id}",
                                                "{criterion.criterion_name} (max {criterion.max_score})"
                                            }
                                        }
                                    }
                                }
                            }

                            div {
                                class: "form-field",
                                Label { "Rating" }
                                StarRating {
                                    value: rating(),
                                    on_change: move |value| rating.set(value),
                                }
                                span { class: "muted", "Score: {score}" }
                            }
                            div {
                                class: "form-field",
                                Label { html_for: "grading-comments", "Comments" }
                                Textarea {
                                    id: "grading-comments",
                                    rows: 4,
                                    placeholder: "Enter feedback for the student...",
                                    value: comments(),
                                    oninput: move |evt: FormEvent| comments.set(evt.value()),
                                }
                            }
                            div {
                                class: "dialog-actions",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| reset_form(),
                                    "Cancel"
                                }
                                Button {
                                    disabled: submitting(),
                                    onclick: handle_submit,
                                    if submitting() { "Submitting..." } else { "Submit Grade" }
                                }
                            }
                        }
                    } else {
                        EmptyState { message: "Select a submission to grade" }
                    }
                }
            }
        }
    }
}

#[component]
fn StarRating(value: u8, on_change: EventHandler<u8>) -> Element {
    rsx! {
        div {
            class: "star-rating",
            for star in 1..=MAX_RATING {
                button {
                    key: "{star}",
                    r#type: "button",
                    class: if star <= value { "star filled" } else { "star" },
                    title: "{star}",
                    // Clicking the current rating clears it.
                    onclick: move |_| on_change.call(if star == value { 0 } else { star }),
                    Icon { icon: FaStar, width: 20, height: 20 }
                }
            }
        }
    }
}
