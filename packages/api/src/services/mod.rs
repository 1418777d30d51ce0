//! Service calls, one module per backend resource. Each adds methods to
//! [`crate::Backend`].

pub mod auth;
pub mod courses;
pub mod rubrics;
pub mod submissions;
pub mod violations;
