//! Core types for the agent collaboration API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Node id of the agent new tasks are assigned to by default.
pub const DEFAULT_ASSIGNEE_NODE_ID: &str = "dango-3";

/// Provenance tag for tasks created through the HTTP API.
pub const CREATED_BY_WEB: &str = "human (web)";

/// Provenance tag for tasks recorded from the chat-bot integration.
pub const CREATED_BY_TELEGRAM: &str = "human (telegram)";

/// Maximum number of rows returned by the task list endpoint.
pub const RECENT_TASKS_LIMIT: u32 = 10;

/// A named worker entity, created out-of-band and read-only here.
/// `name` and `status` are opaque descriptive fields passed through to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    pub id: String,
    pub node_id: String,
    pub name: Option<String>,
    pub status: Option<String>,
}

/// A unit-of-work record. `id` and `created_at` are generated by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: String,
    pub assigned_to: Option<String>,
    pub created_by: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new task. `assigned_to` serializes as an explicit
/// null when assignee resolution found no matching agent.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub title: String,
    pub status: String,
    pub assigned_to: Option<String>,
    pub created_by: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_serializes_null_assignee() {
        let task = NewTask {
            title: "Test".to_string(),
            status: "pending".to_string(),
            assigned_to: None,
            created_by: CREATED_BY_WEB,
        };

        let json = serde_json::to_value(&task).unwrap();

        assert_eq!(json["title"], "Test");
        assert_eq!(json["assigned_to"], serde_json::Value::Null);
        assert_eq!(json["created_by"], "human (web)");
    }

    #[test]
    fn task_deserializes_store_row() {
        let row = serde_json::json!({
            "id": "8f14e45f-ceea-4672-950c-0c9c41355a2a",
            "title": "Wire up the dashboard",
            "status": "pending",
            "assigned_to": null,
            "created_by": "human (web)",
            "created_at": "2026-01-05T09:30:00.123456+00:00"
        });

        let task: Task = serde_json::from_value(row).unwrap();

        assert_eq!(task.title, "Wire up the dashboard");
        assert!(task.assigned_to.is_none());
        assert_eq!(task.created_by.as_deref(), Some("human (web)"));
    }
}
