mod common;
pub use common::{EmptyState, ErrorBanner, LoadingState, PageHeader};

mod modal_overlay;
pub use modal_overlay::ModalOverlay;

pub mod dashboard;
pub use dashboard::DashboardView;

pub mod exams;
pub use exams::ExamsView;

pub mod submissions;
pub use submissions::{SubmissionsTable, SubmissionsView};

pub mod grading;
pub use grading::GradingView;

pub mod violations;
pub use violations::ViolationsView;

mod login;
pub use login::LoginView;

pub mod register;
pub use register::RegisterView;

mod unauthorized;
pub use unauthorized::{NotFoundView, UnauthorizedView};

mod app_shell;
pub use app_shell::AppShell;
