//! Grading rubrics on the course backend.

use store::models::{NewRubric, Rubric};
use store::KeyValueStore;

use crate::backend::Backend;
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport, S: KeyValueStore> Backend<T, S> {
    pub async fn rubrics(&self, exam_id: i64) -> Result<Vec<Rubric>, ApiError> {
        self.course
            .get(&format!("/api/rubrics/{exam_id}"))
            .await
            .inspect_err(|e| tracing::error!("Failed to fetch rubrics for exam {}: {}", exam_id, e))
    }

    pub async fn create_rubric(&self, rubric: &NewRubric) -> Result<Rubric, ApiError> {
        self.course
            .post("/api/rubrics", rubric)
            .await
            .inspect_err(|e| tracing::error!("Failed to create rubric: {}", e))
    }
}
