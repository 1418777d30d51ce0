mod layout;
pub use layout::AppLayout;

mod pages;
pub use pages::{Dashboard, Exams, Grading, Submissions, Violations};

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod status;
pub use status::{NotFound, Unauthorized};

/// Parse an optional numeric query parameter; empty or malformed is absent.
pub(crate) fn query_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}
