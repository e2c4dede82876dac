//! Commands Layer
//!
//! HTTP handlers that bridge the UI to the repository.

mod auth_cmd;
mod health_cmd;
mod task_cmd;

pub use auth_cmd::*;
pub use health_cmd::*;
pub use task_cmd::*;
