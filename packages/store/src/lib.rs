//! Client-side state for the exam console: domain models, persisted tokens
//! and session, UI notifications and configuration.

pub mod config;
pub mod models;
pub mod notifications;
pub mod session;
pub mod storage;
pub mod tokens;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStore;

pub use config::{ApiConfig, ConsoleConfig, StorageConfig};
pub use models::{
    AuthResponse, AuthUser, Exam, Examiner, NewExam, Role, Rubric, Semester, Session, Subject,
    Submission, Violation,
};
pub use notifications::{Notification, NotificationKind, Notifications};
pub use session::SessionStore;
pub use storage::KeyValueStore;
pub use tokens::TokenStore;
