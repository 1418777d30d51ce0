//! # API crate: HTTP access to the IAM and course backends
//!
//! Every remote call the console makes goes through this crate. The UI holds
//! a single [`Backend`] and calls its methods; the backends own all business
//! rules and this crate only moves JSON.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | The [`Transport`] trait and its `reqwest` implementation |
//! | [`credentials`] | Shared tokens, single-flight refresh, logout signal |
//! | [`client`] | [`ApiClient`]: bearer attachment, refresh-and-replay-once on 401 |
//! | [`backend`] | [`Backend`]: the IAM and course clients over one set of credentials |
//! | [`services`] | Typed calls per resource, added to [`Backend`] as methods |
//! | [`error`] | [`ApiError`] |
//!
//! ## Calls exposed on [`Backend`]
//!
//! - **Auth** (IAM): `login`, `register`, `logout`
//! - **Catalogue**: `semesters`, `semester`, `create_semester`, `subjects`,
//!   `subject`, `create_subject`, `exams`, `exam`, `create_exam`
//! - **Submissions**: `examiners`, `create_examiner`, `submissions`,
//!   `assign_submission`, `grade_submission`
//! - **Violations**: `violations`, `report_violation`, `verify_violation`
//! - **Rubrics**: `rubrics`, `create_rubric`

pub mod backend;
pub mod client;
pub mod credentials;
pub mod error;
pub mod services;
pub mod transport;

#[cfg(test)]
mod testing;

pub use backend::Backend;
pub use client::ApiClient;
pub use credentials::{Credentials, SessionEvent};
pub use error::ApiError;
pub use services::auth::{LoginRequest, RegisterRequest};
pub use services::courses::{ExamFilter, NewSemester, NewSubject};
pub use services::submissions::{GradeRequest, NewExaminer};
pub use services::violations::ViolationFilter;
pub use transport::{HttpRequest, HttpResponse, Method, ReqwestTransport, Transport};
