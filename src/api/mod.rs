//! HTTP API module.
//!
//! axum-based server exposing the liveness, agent list, task list, and task
//! creation routes consumed by the web front-end.

mod server;

pub use server::{run_server, start_server};
