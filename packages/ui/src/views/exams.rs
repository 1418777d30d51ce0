//! Exam catalogue with semester/subject filters and the admin create dialog.

use api::ExamFilter;
use chrono::NaiveDateTime;
use dioxus::prelude::*;
use store::models::format_timestamp;
use store::{Exam, NewExam, NotificationKind, Role, Semester, Subject};

use super::common::{EmptyState, ErrorBanner, LoadingState, PageHeader};
use super::ModalOverlay;
use crate::components::{Button, ButtonVariant, Chip, ChipTone, Input, Label};
use crate::{notify, set_modal, use_auth, use_backend, use_notifications};

/// An exam with its semester and subject resolved to names.
#[derive(Clone, Debug, PartialEq)]
pub struct ExamRow {
    pub id: i64,
    pub title: String,
    pub semester: String,
    pub subject: String,
    pub start: String,
    pub end: String,
    pub status: String,
}

pub fn exam_rows(exams: &[Exam], semesters: &[Semester], subjects: &[Subject]) -> Vec<ExamRow> {
    exams
        .iter()
        .map(|exam| ExamRow {
            id: exam.id,
            title: exam.title.clone(),
            semester: semesters
                .iter()
                .find(|s| s.id == exam.semester_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| exam.semester_id.to_string()),
            subject: subjects
                .iter()
                .find(|s| s.id == exam.subject_id)
                .map(|s| format!("{} - {}", s.code, s.name))
                .unwrap_or_else(|| exam.subject_id.to_string()),
            start: format_timestamp(&exam.start_time),
            end: format_timestamp(&exam.end_time),
            status: exam.status.clone(),
        })
        .collect()
}

pub fn exam_status_tone(status: &str) -> ChipTone {
    if status.eq_ignore_ascii_case("active") {
        ChipTone::Success
    } else {
        ChipTone::Neutral
    }
}

/// Raw values of the create-exam form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExamForm {
    pub title: String,
    pub semester_id: String,
    pub subject_id: String,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
}

impl ExamForm {
    /// Check the form and build the request body.
    pub fn validate(&self) -> Result<NewExam, String> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".to_string());
        }
        let semester_id = self
            .semester_id
            .parse()
            .map_err(|_| "Choose a semester".to_string())?;
        let subject_id = self
            .subject_id
            .parse()
            .map_err(|_| "Choose a subject".to_string())?;
        let start = parse_local(&self.start_time).ok_or("Start time is required")?;
        let end = parse_local(&self.end_time).ok_or("End time is required")?;
        if end <= start {
            return Err("End time must be after the start time".to_string());
        }
        let status = match self.status.trim() {
            "" => "Scheduled".to_string(),
            s => s.to_string(),
        };

        Ok(NewExam {
            subject_id,
            semester_id,
            title: title.to_string(),
            status,
            start_time: start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end_time: end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        })
    }
}

/// Parse a `datetime-local` input value, with or without seconds.
fn parse_local(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

const CREATE_EXAM_MODAL: &str = "create-exam";

/// The exam filter, seeded from the query and kept in step with it when
/// back/forward navigation changes the query without remounting the page.
fn use_synced_filter(semester_id: Option<i64>, subject_id: Option<i64>) -> Signal<ExamFilter> {
    let mut filter = use_signal(|| ExamFilter {
        semester_id,
        subject_id,
    });
    use_effect(use_reactive!(|(semester_id, subject_id)| {
        let next = ExamFilter {
            semester_id,
            subject_id,
        };
        if *filter.peek() != next {
            filter.set(next);
        }
    }));
    filter
}

#[component]
pub fn ExamsView(
    semester_id: Option<i64>,
    subject_id: Option<i64>,
    on_filter: EventHandler<ExamFilter>,
) -> Element {
    let backend = use_backend();
    let auth = use_auth();
    let mut notifications = use_notifications();
    let mut filter = use_synced_filter(semester_id, subject_id);
    use_drop(move || {
        if let Ok(mut state) = notifications.try_write() {
            state.toggle_modal(CREATE_EXAM_MODAL, Some(false));
        }
    });
    let mut exams = use_signal(Vec::<Exam>::new);
    let mut semesters = use_signal(Vec::<Semester>::new);
    let mut subjects = use_signal(Vec::<Subject>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let lookup_backend = backend.clone();
    let _lookups = use_resource(move || {
        let backend = lookup_backend.clone();
        async move {
            let (semester_list, subject_list) =
                futures::join!(backend.semesters(), backend.subjects());
            match (semester_list, subject_list) {
                (Ok(sem), Ok(sub)) => {
                    semesters.set(sem);
                    subjects.set(sub);
                }
                (Err(e), _) | (_, Err(e)) => error.set(Some(e.to_string())),
            }
        }
    });

    let exam_backend = backend.clone();
    let _exams = use_resource(move || {
        let backend = exam_backend.clone();
        let current = filter();
        async move {
            loading.set(true);
            match backend.exams(current).await {
                Ok(list) => exams.set(list),
                Err(e) => error.set(Some(e.to_string())),
            }
            loading.set(false);
        }
    });

    let mut set_filter = move |next: ExamFilter| {
        filter.set(next);
        on_filter.call(next);
    };

    let handle_create = move |exam: NewExam| {
        let backend = backend.clone();
        spawn(async move {
            match backend.create_exam(&exam).await {
                Ok(created) => {
                    let current = filter();
                    let visible = current.semester_id.is_none_or(|id| id == created.semester_id)
                        && current.subject_id.is_none_or(|id| id == created.subject_id);
                    if visible {
                        exams.write().push(created);
                    }
                    set_modal(&mut notifications, CREATE_EXAM_MODAL, false);
                    notify(&mut notifications, NotificationKind::Success, "Exam created");
                }
                Err(e) => notify(&mut notifications, NotificationKind::Error, &e.to_string()),
            }
        });
    };

    let is_admin = auth().role() == Some(Role::Admin);
    let rows = exam_rows(&exams.read(), &semesters.read(), &subjects.read());
    let current = filter();
    let show_create = notifications.read().is_modal_open(CREATE_EXAM_MODAL);

    rsx! {
        div {
            class: "page",
            div {
                class: "page-toolbar",
                PageHeader { title: "Exams" }
                if is_admin {
                    Button {
                        onclick: move |_| set_modal(&mut notifications, CREATE_EXAM_MODAL, true),
                        "New Exam"
                    }
                }
            }

            if let Some(message) = error() {
                ErrorBanner { message: message, on_dismiss: move |_| error.set(None) }
            }

            div {
                class: "filter-bar",
                select {
                    class: "form-input",
                    onchange: move |evt: FormEvent| {
                        set_filter(ExamFilter {
                            semester_id: evt.value().parse().ok(),
                            ..filter()
                        })
                    },
                    option { value: "", selected: current.semester_id.is_none(), "All semesters" }
                    for semester in semesters() {
                        option {
                            key: "{semester.id}",
                            value: "{semester.id}",
                            selected: current.semester_id == Some(semester.id),
                            "{semester.name}"
                        }
                    }
                }
                select {
                    class: "form-input",
                    onchange: move |evt: FormEvent| {
                        set_filter(ExamFilter {
                            subject_id: evt.value().parse().ok(),
                            ..filter()
                        })
                    },
                    option { value: "", selected: current.subject_id.is_none(), "All subjects" }
                    for subject in subjects() {
                        option {
                            key: "{subject.id}",
                            value: "{subject.id}",
                            selected: current.subject_id == Some(subject.id),
                            "{subject.code} - {subject.name}"
                        }
                    }
                }
            }

            if loading() {
                LoadingState {}
            } else if rows.is_empty() {
                EmptyState { message: "No exams found" }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Semester" }
                            th { "Subject" }
                            th { "Start" }
                            th { "End" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for row in rows {
                            tr {
                                key: "{row.id}",
                                td { "{row.title}" }
                                td { "{row.semester}" }
                                td { "{row.subject}" }
                                td { "{row.start}" }
                                td { "{row.end}" }
                                td {
                                    Chip { tone: exam_status_tone(&row.status), label: row.status.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }

        if show_create {
            ModalOverlay {
                title: "New Exam",
                on_close: move |_| set_modal(&mut notifications, CREATE_EXAM_MODAL, false),
                NewExamDialog {
                    semesters: semesters(),
                    subjects: subjects(),
                    on_create: handle_create,
                    on_cancel: move |_| set_modal(&mut notifications, CREATE_EXAM_MODAL, false),
                }
            }
        }
    }
}

#[component]
fn NewExamDialog(
    semesters: Vec<Semester>,
    subjects: Vec<Subject>,
    on_create: EventHandler<NewExam>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut form = use_signal(ExamForm::default);
    let mut form_error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        match form.read().validate() {
            Ok(exam) => {
                form_error.set(None);
                on_create.call(exam);
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    rsx! {
        form {
            class: "dialog-form",
            onsubmit: handle_submit,

            if let Some(message) = form_error() {
                p { class: "form-error", "{message}" }
            }

            div {
                class: "form-field",
                Label { html_for: "exam-title", "Title" }
                Input {
                    id: "exam-title",
                    value: form.read().title.clone(),
                    placeholder: "Mathematics Final",
                    oninput: move |evt: FormEvent| form.write().title = evt.value(),
                }
            }
            div {
                class: "form-field",
                Label { html_for: "exam-semester", "Semester" }
                select {
                    id: "exam-semester",
                    class: "form-input",
                    onchange: move |evt: FormEvent| form.write().semester_id = evt.value(),
                    option { value: "", "Select a semester" }
                    for semester in semesters {
                        option { key: "{semester.id}", value: "{semester.id}", "{semester.name}" }
                    }
                }
            }
            div {
                class: "form-field",
                Label { html_for: "exam-subject", "Subject" }
                select {
                    id: "exam-subject",
                    class: "form-input",
                    onchange: move |evt: FormEvent| form.write().subject_id = evt.value(),
                    option { value: "", "Select a subject" }
                    for subject in subjects {
                        option { key: "{subject.id}", value: "{subject.id}", "{subject.code} - {subject.name}" }
                    }
                }
            }
            div {
                class: "form-field",
                Label { html_for: "exam-status", "Status" }
                Input {
                    id: "exam-status",
                    value: form.read().status.clone(),
                    placeholder: "Scheduled",
                    oninput: move |evt: FormEvent| form.write().status = evt.value(),
                }
            }
            div {
                class: "form-row",
                div {
                    class: "form-field",
                    Label { html_for: "exam-start", "Start" }
                    Input {
                        id: "exam-start",
                        input_type: "datetime-local",
                        value: form.read().start_time.clone(),
                        oninput: move |evt: FormEvent| form.write().start_time = evt.value(),
                    }
                }
                div {
                    class: "form-field",
                    Label { html_for: "exam-end", "End" }
                    Input {
                        id: "exam-end",
                        input_type: "datetime-local",
                        value: form.read().end_time.clone(),
                        oninput: move |evt: FormEvent| form.write().end_time = evt.value(),
                    }
                }
            }

            div {
                class: "dialog-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button { submit: true, "Create" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> ExamForm {
        ExamForm {
            title: "  Mathematics Final ".to_string(),
            semester_id: "2".to_string(),
            subject_id: "5".to_string(),
            status: String::new(),
            start_time: "2024-12-10T09:00".to_string(),
            end_time: "2024-12-10T11:30".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_request() {
        let exam = form().validate().unwrap();
        assert_eq!(exam.title, "Mathematics Final");
        assert_eq!(exam.semester_id, 2);
        assert_eq!(exam.subject_id, 5);
        assert_eq!(exam.status, "Scheduled");
        assert_eq!(exam.start_time, "2024-12-10T09:00:00");
        assert_eq!(exam.end_time, "2024-12-10T11:30:00");
    }

    #[component]
    fn SemesterLabel(semester_id: Option<i64>) -> Element {
        let filter = use_synced_filter(semester_id, None);
        let id = filter().semester_id.unwrap_or_default();
        rsx! { p { "semester {id}" } }
    }

    fn back_navigation_app() -> Element {
        let mut semester = use_signal(|| Some(1));
        use_effect(move || {
            if *semester.peek() == Some(1) {
                semester.set(Some(2));
            }
        });
        rsx! { SemesterLabel { semester_id: semester() } }
    }

    #[tokio::test]
    async fn test_filter_follows_query_change() {
        let mut dom = VirtualDom::new(back_navigation_app);
        dom.rebuild_in_place();
        assert!(dioxus_ssr::render(&dom).contains("semester 1"));

        for _ in 0..10 {
            let _ = tokio::time::timeout(std::time::Duration::from_millis(50), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
        }
        assert!(dioxus_ssr::render(&dom).contains("semester 2"));
    }

    #[test]
    fn test_form_errors() {
        let mut f = form();
        f.title = " ".to_string();
        assert_eq!(f.validate().unwrap_err(), "Title is required");

        let mut f = form();
        f.subject_id = String::new();
        assert_eq!(f.validate().unwrap_err(), "Choose a subject");

        let mut f = form();
        f.end_time = "2024-12-10T08:00".to_string();
        assert_eq!(f.validate().unwrap_err(), "End time must be after the start time");
    }

    #[test]
    fn test_rows_resolve_names() {
        let exams = vec![Exam {
            id: 1,
            subject_id: 5,
            semester_id: 9,
            title: "Physics Midterm".to_string(),
            status: "Active".to_string(),
            start_time: "2024-11-20T09:00:00Z".to_string(),
            end_time: "2024-11-20T11:00:00Z".to_string(),
        }];
        let subjects = vec![Subject {
            id: 5,
            code: "PHY101".to_string(),
            name: "Physics".to_string(),
        }];

        let rows = exam_rows(&exams, &[], &subjects);
        assert_eq!(rows[0].subject, "PHY101 - Physics");
        assert_eq!(rows[0].semester, "9");
        assert_eq!(rows[0].start, "2024-11-20 09:00");
        assert_eq!(exam_status_tone(&rows[0].status), ChipTone::Success);
        assert_eq!(exam_status_tone("Closed"), ChipTone::Neutral);
    }
}
