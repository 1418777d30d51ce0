//! Landing page: headline numbers, recent submissions and quick actions.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use store::models::{format_timestamp, parse_timestamp};
use store::{Exam, Submission};

use super::common::{EmptyState, ErrorBanner, LoadingState, PageHeader};
use crate::components::{Button, ButtonVariant, Chip, ChipTone};
use crate::{use_auth, use_backend, visible_menu_items};

const RECENT_SUBMISSIONS: usize = 5;

/// Headline numbers shown on the dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_exams: usize,
    pub pending_submissions: usize,
    pub completed_grading: usize,
    pub upcoming_exams: usize,
}

impl DashboardStats {
    pub fn compute(exams: &[Exam], submissions: &[Submission], now: DateTime<Utc>) -> Self {
        Self {
            total_exams: exams.len(),
            pending_submissions: submissions.iter().filter(|s| s.is_pending()).count(),
            completed_grading: submissions.iter().filter(|s| s.is_graded()).count(),
            upcoming_exams: exams.iter().filter(|e| e.starts_after(now)).count(),
        }
    }
}

/// Chip color for a submission status.
pub fn status_tone(status: &str) -> ChipTone {
    match status.to_lowercase().as_str() {
        "submitted" | "pending" => ChipTone::Info,
        "graded" | "completed" => ChipTone::Success,
        s if s.contains("review") => ChipTone::Warning,
        _ => ChipTone::Neutral,
    }
}

/// The latest `limit` submissions, newest first.
pub fn recent_submissions(submissions: &[Submission], limit: usize) -> Vec<Submission> {
    let mut sorted = submissions.to_vec();
    sorted.sort_by_key(|s| std::cmp::Reverse(parse_timestamp(&s.submitted_at)));
    sorted.truncate(limit);
    sorted
}

#[component]
pub fn DashboardView(on_navigate: EventHandler<String>) -> Element {
    let backend = use_backend();
    let auth = use_auth();
    let mut exams = use_signal(Vec::<Exam>::new);
    let mut submissions = use_signal(Vec::<Submission>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let backend = backend.clone();
        async move {
            loading.set(true);
            error.set(None);
            let (exam_list, submission_list) = futures::join!(
                backend.exams(Default::default()),
                backend.submissions(None)
            );
            match (exam_list, submission_list) {
                (Ok(e), Ok(s)) => {
                    exams.set(e);
                    submissions.set(s);
                }
                (Err(e), _) | (_, Err(e)) => {
                    tracing::warn!("Dashboard load failed: {}", e);
                    error.set(Some(e.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let stats = DashboardStats::compute(&exams.read(), &submissions.read(), Utc::now());
    let recent = recent_submissions(&submissions.read(), RECENT_SUBMISSIONS);
    let actions: Vec<_> = visible_menu_items(auth().role())
        .into_iter()
        .filter(|item| item.path != "/")
        .collect();
    let greeting = auth()
        .session
        .map(|s| format!("Welcome back, {}", s.display_name()))
        .unwrap_or_default();

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Dashboard", subtitle: greeting }

            if let Some(message) = error() {
                ErrorBanner { message: message, on_dismiss: move |_| error.set(None) }
            }

            if loading() {
                LoadingState {}
            } else {
                div {
                    class: "stat-grid",
                    StatCard { title: "Total Exams", value: stats.total_exams }
                    StatCard { title: "Pending Submissions", value: stats.pending_submissions }
                    StatCard { title: "Completed Grading", value: stats.completed_grading }
                    StatCard { title: "Upcoming Exams", value: stats.upcoming_exams }
                }

                div {
                    class: "dashboard-columns",
                    section {
                        class: "card",
                        h2 { class: "card-title", "Quick Actions" }
                        div {
                            class: "quick-actions",
                            for item in actions {
                                Button {
                                    key: "{item.path}",
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| on_navigate.call(item.path.to_string()),
                                    "{item.label}"
                                }
                            }
                        }
                    }

                    section {
                        class: "card card-wide",
                        h2 { class: "card-title", "Recent Submissions" }
                        if recent.is_empty() {
                            EmptyState { message: "No submissions yet" }
                        } else {
                            table {
                                class: "data-table",
                                thead {
                                    tr {
                                        th { "Student" }
                                        th { "Exam" }
                                        th { "Submitted" }
                                        th { "Status" }
                                        th { "Score" }
                                    }
                                }
                                tbody {
                                    for submission in recent {
                                        tr {
                                            key: "{submission.id}",
                                            td { "{submission.student_id}" }
                                            td { {exam_title(&exams.read(), submission.exam_id)} }
                                            td { {format_timestamp(&submission.submitted_at)} }
                                            td {
                                                Chip {
                                                    label: submission.status.clone(),
                                                    tone: status_tone(&submission.status),
                                                }
                                            }
                                            td { {format_score(submission.total_score)} }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(title: String, value: usize) -> Element {
    rsx! {
        div {
            class: "stat-card",
            span { class: "stat-title", "{title}" }
            span { class: "stat-value", "{value}" }
        }
    }
}

/// Title of `exam_id`, or its id when the exam is not loaded.
pub fn exam_title(exams: &[Exam], exam_id: i64) -> String {
    exams
        .iter()
        .find(|e| e.id == exam_id)
        .map(|e| e.title.clone())
        .unwrap_or_else(|| format!("Exam #{exam_id}"))
}

pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(score) => format!("{score}"),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn exam(id: i64, start: &str) -> Exam {
        Exam {
            id,
            subject_id: 1,
            semester_id: 1,
            title: format!("Exam {id}"),
            status: "Active".to_string(),
            start_time: start.to_string(),
            end_time: start.to_string(),
        }
    }

    fn submission(id: i64, status: &str, submitted_at: &str) -> Submission {
        Submission {
            id,
            exam_id: 1,
            student_id: format!("s-{id}"),
            submitted_at: submitted_at.to_string(),
            assigned_examiner_id: None,
            total_score: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_stats_count_statuses_case_insensitively() {
        let now = Utc.with_ymd_and_hms(2024, 11, 20, 12, 0, 0).unwrap();
        let exams = vec![
            exam(1, "2024-11-01T09:00:00Z"),
            exam(2, "2024-12-01T09:00:00Z"),
            exam(3, "not a date"),
        ];
        let submissions = vec![
            submission(1, "Submitted", "2024-11-20"),
            submission(2, "PENDING", "2024-11-20"),
            submission(3, "graded", "2024-11-20"),
            submission(4, "Completed", "2024-11-20"),
            submission(5, "UnderReview", "2024-11-20"),
        ];

        let stats = DashboardStats::compute(&exams, &submissions, now);
        assert_eq!(
            stats,
            DashboardStats {
                total_exams: 3,
                pending_submissions: 2,
                completed_grading: 2,
                upcoming_exams: 1,
            }
        );
    }

    #[test]
    fn test_status_tone() {
        assert_eq!(status_tone("Submitted"), ChipTone::Info);
        assert_eq!(status_tone("graded"), ChipTone::Success);
        assert_eq!(status_tone("In Review"), ChipTone::Warning);
        assert_eq!(status_tone("Draft"), ChipTone::Neutral);
        assert_eq!(status_tone("Ungraded"), ChipTone::Neutral);
        assert_eq!(status_tone("resubmitted"), ChipTone::Neutral);
    }

    #[test]
    fn test_recent_submissions_are_latest_five() {
        let submissions: Vec<_> = (1..=7)
            .map(|d| submission(d, "submitted", &format!("2024-11-0{d}T10:00:00Z")))
            .collect();
        let recent = recent_submissions(&submissions, RECENT_SUBMISSIONS);
        let ids: Vec<_> = recent.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_exam_title_fallback() {
        let exams = vec![exam(1, "2024-11-01")];
        assert_eq!(exam_title(&exams, 1), "Exam 1");
        assert_eq!(exam_title(&exams, 9), "Exam #9");
        assert_eq!(format_score(None), "-");
        assert_eq!(format_score(Some(95.0)), "95");
    }
}
