//! Semesters, subjects and exams on the course backend.

use serde::{Deserialize, Serialize};
use store::{Exam, KeyValueStore, NewExam, Semester, Subject};

use crate::backend::{query_string, Backend};
use crate::error::ApiError;
use crate::transport::Transport;

/// Optional filters for the exam list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ExamFilter {
    pub semester_id: Option<i64>,
    pub subject_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSemester {
    pub name: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewSubject {
    pub code: String,
    pub name: String,
}

impl<T: Transport, S: KeyValueStore> Backend<T, S> {
    pub async fn semesters(&self) -> Result<Vec<Semester>, ApiError> {
        self.course
            .get("/api/semesters")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch semesters: {}", e))
    }

    pub async fn semester(&self, id: i64) -> Result<Semester, ApiError> {
        self.course
            .get(&format!("/api/semesters/{id}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch semester {}: {}", id, e))
    }

    pub async fn create_semester(&self, semester: &NewSemester) -> Result<Semester, ApiError> {
        self.course
            .post("/api/semesters", semester)
            .await
            .inspect_err(|e| tracing::error!("Failed to create semester: {}", e))
    }

    pub async fn subjects(&self) -> Result<Vec<Subject>, ApiError> {
        self.course
            .get("/api/subjects")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch subjects: {}", e))
    }

    pub async fn subject(&self, id: i64) -> Result<Subject, ApiError> {
        self.course
            .get(&format!("/api/subjects/{id}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch subject {}: {}", id, e))
    }

    pub async fn create_subject(&self, subject: &NewSubject) -> Result<Subject, ApiError> {
        self.course
            .post("/api/subjects", subject)
            .await
            .inspect_err(|e| tracing::error!("Failed to create subject: {}", e))
    }

    pub async fn exams(&self, filter: ExamFilter) -> Result<Vec<Exam>, ApiError> {
        let query = query_string(&[
            ("semesterId", filter.semester_id.map(|id| id.to_string())),
            ("subjectId", filter.subject_id.map(|id| id.to_string())),
        ]);
        self.course
            .get(&format!("/api/exams{query}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch exams: {}", e))
    }

    pub async fn exam(&self, id: i64) -> Result<Exam, ApiError> {
        self.course
            .get(&format!("/api/exams/{id}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch exam {}: {}", id, e))
    }

    pub async fn create_exam(&self, exam: &NewExam) -> Result<Exam, ApiError> {
        self.course
            .post("/api/exams", exam)
            .await
            .inspect_err(|e| tracing::error!("Failed to create exam: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::{HttpResponse, Method};
    use serde_json::json;
    use store::{ConsoleConfig, MemoryStore};

    const EXAM: &str = r#"{"id":1,"subjectId":2,"semesterId":3,"title":"Mathematics Final","status":"Active","startTime":"2024-11-20T09:00:00Z","endTime":"2024-11-20T11:00:00Z"}"#;

    fn backend(transport: MockTransport) -> Backend<MockTransport, MemoryStore> {
        Backend::new(&ConsoleConfig::default(), MemoryStore::new(), transport)
    }

    #[tokio::test]
    async fn test_exams_with_filters() {
        let transport = MockTransport::ok("[]");
        let backend = backend(transport.clone());

        backend.exams(ExamFilter::default()).await.unwrap();
        assert_eq!(transport.last().url, "http://localhost:5000/course/api/exams");

        backend
            .exams(ExamFilter {
                semester_id: Some(3),
                subject_id: Some(2),
            })
            .await
            .unwrap();
        assert_eq!(
            transport.last().url,
            "http://localhost:5000/course/api/exams?semesterId=3&subjectId=2"
        );
    }

    #[tokio::test]
    async fn test_exam_decodes() {
        let backend = backend(MockTransport::ok(EXAM));
        let exam = backend.exam(1).await.unwrap();
        assert_eq!(exam.title, "Mathematics Final");
        assert_eq!(exam.semester_id, 3);
    }

    #[tokio::test]
    async fn test_create_exam_posts_payload() {
        let transport = MockTransport::ok(EXAM);
        let backend = backend(transport.clone());
        backend
            .create_exam(&NewExam {
                subject_id: 2,
                semester_id: 3,
                title: "Mathematics Final".to_string(),
                status: "Active".to_string(),
                start_time: "2024-11-20T09:00:00Z".to_string(),
                end_time: "2024-11-20T11:00:00Z".to_string(),
            })
            .await
            .unwrap();

        let sent = transport.last();
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.body.unwrap()["subjectId"], json!(2));
    }

    #[tokio::test]
    async fn test_catalogue_paths() {
        let transport = MockTransport::ok("[]");
        let backend = backend(transport.clone());
        backend.semesters().await.unwrap();
        assert!(transport.last().url.ends_with("/course/api/semesters"));
        backend.subjects().await.unwrap();
        assert!(transport.last().url.ends_with("/course/api/subjects"));
    }

    #[tokio::test]
    async fn test_semester_and_subject_management() {
        let transport = MockTransport::new(|req| {
            let body = if req.url.contains("semesters") {
                r#"{"id":3,"name":"Fall 2024","startDate":"2024-09-01","endDate":"2024-12-20"}"#
            } else {
                r#"{"id":2,"code":"MATH101","name":"Calculus"}"#
            };
            HttpResponse::new(200, body)
        });
        let backend = backend(transport.clone());

        let semester = backend.semester(3).await.unwrap();
        assert_eq!(semester.name, "Fall 2024");
        assert!(transport.last().url.ends_with("/api/semesters/3"));

        backend
            .create_semester(&NewSemester {
                name: "Fall 2024".to_string(),
                start_date: "2024-09-01".to_string(),
                end_date: "2024-12-20".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(transport.last().body.unwrap()["startDate"], json!("2024-09-01"));

        let subject = backend.subject(2).await.unwrap();
        assert_eq!(subject.code, "MATH101");

        backend
            .create_subject(&NewSubject {
                code: "MATH101".to_string(),
                name: "Calculus".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(transport.last().method, Method::POST);
        assert!(transport.last().url.ends_with("/api/subjects"));
    }
}
