//! Console pages, each behind the roles allowed to open it.

use api::ExamFilter;
use dioxus::prelude::*;
use ui::guard::{EVERYONE, GRADING_ROLES, SUBMISSION_ROLES, VIOLATION_ROLES};
use ui::views::{DashboardView, ExamsView, GradingView, SubmissionsView, ViolationsView};
use ui::Protected;

use super::query_id;
use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();

    rsx! {
        Protected {
            roles: EVERYONE.to_vec(),
            DashboardView {
                on_navigate: move |path: String| {
                    nav.push(path);
                },
            }
        }
    }
}

#[component]
pub fn Exams(semester: String, subject: String) -> Element {
    let nav = use_navigator();

    let on_filter = move |filter: ExamFilter| {
        nav.replace(Route::Exams {
            semester: filter.semester_id.map(|id| id.to_string()).unwrap_or_default(),
            subject: filter.subject_id.map(|id| id.to_string()).unwrap_or_default(),
        });
    };

    rsx! {
        Protected {
            roles: EVERYONE.to_vec(),
            ExamsView {
                semester_id: query_id(&semester),
                subject_id: query_id(&subject),
                on_filter: on_filter,
            }
        }
    }
}

#[component]
pub fn Submissions(exam: String) -> Element {
    rsx! {
        Protected {
            roles: SUBMISSION_ROLES.to_vec(),
            SubmissionsView { exam_id: query_id(&exam) }
        }
    }
}

#[component]
pub fn Grading() -> Element {
    rsx! {
        Protected {
            roles: GRADING_ROLES.to_vec(),
            GradingView {}
        }
    }
}

#[component]
pub fn Violations() -> Element {
    rsx! {
        Protected {
            roles: VIOLATION_ROLES.to_vec(),
            ViolationsView {}
        }
    }
}
