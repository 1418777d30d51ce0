//! Examiners and submissions on the course backend.

use serde::{Deserialize, Serialize};
use store::{Examiner, KeyValueStore, Submission};

use crate::backend::{query_string, Backend};
use crate::error::ApiError;
use crate::transport::Transport;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExaminer {
    pub full_name: String,
    pub email: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    pub total_score: u32,
}

impl<T: Transport, S: KeyValueStore> Backend<T, S> {
    pub async fn examiners(&self) -> Result<Vec<Examiner>, ApiError> {
        self.course
            .get("/api/examiners")
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch examiners: {}", e))
    }

    pub async fn create_examiner(&self, examiner: &NewExaminer) -> Result<Examiner, ApiError> {
        self.course
            .post("/api/examiners", examiner)
            .await
            .inspect_err(|e| tracing::error!("Failed to create examiner: {}", e))
    }

    /// All submissions, or only those of `exam_id`.
    pub async fn submissions(&self, exam_id: Option<i64>) -> Result<Vec<Submission>, ApiError> {
        let query = query_string(&[("examId", exam_id.map(|id| id.to_string()))]);
        self.course
            .get(&format!("/api/submissions{query}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch submissions: {}", e))
    }

    pub async fn assign_submission(
        &self,
        submission_id: i64,
        examiner_id: i64,
    ) -> Result<Submission, ApiError> {
        self.course
            .patch_empty(&format!(
                "/api/submissions/{submission_id}/assign/{examiner_id}"
            ))
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to assign submission {}: {}", submission_id, e)
            })
    }

    pub async fn grade_submission(
        &self,
        submission_id: i64,
        grade: GradeRequest,
    ) -> Result<Submission, ApiError> {
        self.course
            .patch(&format!("/api/submissions/{submission_id}/grade"), &grade)
            .await
            .inspect_err(|e| {
                tracing::error!("Failed to grade submission {}: {}", submission_id, e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockTransport;
    use crate::transport::Method;
    use serde_json::json;
    use store::{ConsoleConfig, MemoryStore};

    const SUBMISSION: &str = r#"{"id":5,"examId":1,"studentId":"s-9","submittedAt":"2024-11-20T10:00:00Z","assignedExaminerId":4,"totalScore":80,"status":"Graded"}"#;

    fn backend(transport: MockTransport) -> Backend<MockTransport, MemoryStore> {
        Backend::new(&ConsoleConfig::default(), MemoryStore::new(), transport)
    }

    #[tokio::test]
    async fn test_grade_sends_total_score() {
        let transport = MockTransport::ok(SUBMISSION);
        let backend = backend(transport.clone());

        let graded = backend
            .grade_submission(5, GradeRequest { total_score: 80 })
            .await
            .unwrap();
        assert_eq!(graded.total_score, Some(80.0));

        let sent = transport.last();
        assert_eq!(sent.method, Method::PATCH);
        assert!(sent.url.ends_with("/course/api/submissions/5/grade"));
        assert_eq!(sent.body, Some(json!({ "totalScore": 80 })));
    }

    #[tokio::test]
    async fn test_assign_has_no_body() {
        let transport = MockTransport::ok(SUBMISSION);
        let backend = backend(transport.clone());

        let assigned = backend.assign_submission(5, 4).await.unwrap();
        assert_eq!(assigned.assigned_examiner_id, Some(4));

        let sent = transport.last();
        assert_eq!(sent.method, Method::PATCH);
        assert!(sent.url.ends_with("/api/submissions/5/assign/4"));
        assert!(sent.body.is_none());
    }

    #[tokio::test]
    async fn test_submissions_filter_by_exam() {
        let transport = MockTransport::ok("[]");
        let backend = backend(transport.clone());

        assert!(backend.submissions(None).await.unwrap().is_empty());
        assert!(transport.last().url.ends_with("/api/submissions"));
        backend.submissions(Some(1)).await.unwrap();
        assert!(transport.last().url.ends_with("/api/submissions?examId=1"));
    }

    #[tokio::test]
    async fn test_examiners() {
        let transport = MockTransport::new(|req| {
            let body = if req.method == Method::GET {
                r#"[{"id":4,"fullName":"Grace Hopper","email":"grace@uni.edu"}]"#
            } else {
                r#"{"id":5,"fullName":"Alan Turing","email":"alan@uni.edu"}"#
            };
            crate::transport::HttpResponse::new(200, body)
        });
        let backend = backend(transport.clone());

        let examiners = backend.examiners().await.unwrap();
        assert_eq!(examiners[0].full_name, "Grace Hopper");

        let created = backend
            .create_examiner(&NewExaminer {
                full_name: "Alan Turing".to_string(),
                email: "alan@uni.edu".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 5);
        assert_eq!(transport.last().body.unwrap()["fullName"], json!("Alan Turing"));
    }
}
