use dioxus::prelude::*;
use store::models::format_timestamp;
use store::{Exam, Examiner, NotificationKind, Role, Submission};

use super::common::{EmptyState, ErrorBanner, LoadingState, PageHeader};
use super::dashboard::{exam_title, format_score, status_tone};
use crate::components::Chip;
use crate::{notify, use_auth, use_backend, use_notifications};

/// Replace the submission with the same id, keeping its position.
pub fn replace_submission(list: &mut [Submission], updated: Submission) {
    if let Some(slot) = list.iter_mut().find(|s| s.id == updated.id) {
        *slot = updated;
    }
}

#[component]
pub fn SubmissionsView(#[props(default)] exam_id: Option<i64>) -> Element {
    let backend = use_backend();
    let auth = use_auth();
    let mut notifications = use_notifications();
    let mut submissions = use_signal(Vec::<Submission>::new);
    let mut exams = use_signal(Vec::<Exam>::new);
    let mut examiners = use_signal(Vec::<Examiner>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let is_admin = auth().role() == Some(Role::Admin);

    let loader_backend = backend.clone();
    // Reloads when the `?exam=` query changes under the same page.
    let _loader = use_resource(use_reactive!(|(exam_id,)| {
        let backend = loader_backend.clone();
        async move {
            loading.set(true);
            let (submission_list, exam_list) = futures::join!(
                backend.submissions(exam_id),
                backend.exams(Default::default())
            );
            match (submission_list, exam_list) {
                (Ok(s), Ok(e)) => {
                    submissions.set(s);
                    exams.set(e);
                }
                (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
            }
            if is_admin {
                match backend.examiners().await {
                    Ok(list) => examiners.set(list),
                    Err(e) => error.set(Some(e.to_string())),
                }
            }
            loading.set(false);
        }
    }));

    let handle_assign = move |(submission_id, examiner_id): (i64, i64)| {
        let backend = backend.clone();
        spawn(async move {
            match backend.assign_submission(submission_id, examiner_id).await {
                Ok(updated) => {
                    replace_submission(&mut submissions.write(), updated);
                    notify(&mut notifications, NotificationKind::Success, "Examiner assigned");
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "page",
            PageHeader { title: "Submissions", subtitle: "Student submissions" }

            if let Some(message) = error() {
                ErrorBanner { message: message, on_dismiss: move |_| error.set(None) }
            }

            if loading() {
                LoadingState {}
            } else {
                SubmissionsTable {
                    submissions: submissions(),
                    exams: exams(),
                    examiners: examiners(),
                    can_assign: is_admin,
                    on_assign: handle_assign,
                }
            }
        }
    }
}

/// The submission list. An empty list renders a message, not an empty table.
#[component]
pub fn SubmissionsTable(
    submissions: Vec<Submission>,
    exams: Vec<Exam>,
    examiners: Vec<Examiner>,
    #[props(default)] can_assign: bool,
    on_assign: Option<EventHandler<(i64, i64)>>,
) -> Element {
    if submissions.is_empty() {
        return rsx! {
            EmptyState { message: "No submissions" }
        };
    }

    rsx! {
        table {
            class: "data-table",
            thead {
                tr {
                    th { "Student" }
                    th { "Exam" }
                    th { "Submitted" }
                    th { "Status" }
                    th { "Score" }
                    th { "Examiner" }
                }
            }
            tbody {
                for submission in submissions {
                    tr {
                        key: "{submission.id}",
                        td { "{submission.student_id}" }
                        td { {exam_title(&exams, submission.exam_id)} }
                        td { {format_timestamp(&submission.submitted_at)} }
                        td {
                            Chip { label: submission.status.clone(), tone: status_tone(&submission.status) }
                        }
                        td { {format_score(submission.total_score)} }
                        td {
                            if can_assign {
                                select {
                                    class: "form-input form-input-compact",
                                    onchange: move |evt: FormEvent| {
                                        if let (Ok(examiner_id), Some(handler)) = (evt.value().parse::<i64>(), on_assign) {
                                            handler.call((submission.id, examiner_id));
                                        }
                                    },
                                    option {
                                        value: "",
                                        selected: submission.assigned_examiner_id.is_none(),
                                        "Unassigned"
                                    }
                                    for examiner in examiners.iter() {
                                        option {
                                            key: "{examiner.id}",
                                            value: "{examiner.id}",
                                            selected: submission.assigned_examiner_id == Some(examiner.id),
                                            "{examiner.full_name}"
                                        }
                                    }
                                }
                            } else {
                                {examiner_name(&examiners, submission.assigned_examiner_id)}
                            }
                        }
                    }
                }
            }
        }
    }
}

fn examiner_name(examiners: &[Examiner], id: Option<i64>) -> String {
    match id {
        None => "-".to_string(),
        Some(id) => examiners
            .iter()
            .find(|e| e.id == id)
            .map(|e| e.full_name.clone())
            .unwrap_or_else(|| format!("Examiner #{id}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: i64, status: &str) -> Submission {
        Submission {
            id,
            exam_id: 1,
            student_id: format!("student-{id}"),
            submitted_at: "2024-11-20T10:00:00Z".to_string(),
            assigned_examiner_id: None,
            total_score: None,
            status: status.to_string(),
        }
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_empty_list_renders_message() {
        let html = render(|| {
            rsx! {
                SubmissionsTable { submissions: vec![], exams: vec![], examiners: vec![] }
            }
        });
        assert!(html.contains("No submissions"));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_rows_render() {
        let html = render(|| {
            rsx! {
                SubmissionsTable {
                    submissions: vec![submission(1, "Submitted"), submission(2, "Graded")],
                    exams: vec![],
                    examiners: vec![],
                }
            }
        });
        assert!(html.contains("<table"));
        assert!(html.contains("student-1"));
        assert!(html.contains("student-2"));
        assert!(!html.contains("No submissions"));
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut list = vec![submission(1, "Submitted"), submission(2, "Submitted")];
        let mut updated = submission(2, "Submitted");
        updated.assigned_examiner_id = Some(4);
        replace_submission(&mut list, updated);
        assert_eq!(list[1].assigned_examiner_id, Some(4));
        assert_eq!(list[0].assigned_examiner_id, None);
        assert_eq!(examiner_name(&[], Some(4)), "Examiner #4");
    }
}
