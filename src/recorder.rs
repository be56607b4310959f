//! One-shot task recording triggered from the chat-bot integration, plus
//! the connectivity probe used to verify credentials.

use crate::cli::RecordArgs;
use crate::config::{ConfigError, Settings};
use crate::error::StoreError;
use crate::store::SupabaseStore;
use crate::types::{CREATED_BY_TELEGRAM, DEFAULT_ASSIGNEE_NODE_ID, NewTask, Task};
use thiserror::Error;
use tracing::debug;

/// Failure modes of one `record` or `check` invocation.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Record one task row on behalf of the chat-bot trigger.
///
/// Configuration is validated before any database call is attempted. Agent
/// resolution happens first; when the default assignee does not exist the
/// task is still written with a null assignee. Lookup and insert are two
/// independent calls, so a failed insert leaves nothing to unwind.
pub async fn record_task(args: &RecordArgs) -> Result<Vec<Task>, RecordError> {
    let settings = Settings::load_recorder()?;
    let store = SupabaseStore::new(&settings)?;

    let assigned_to = store.find_agent_id(DEFAULT_ASSIGNEE_NODE_ID).await?;
    debug!(assigned_to = ?assigned_to, "Resolved default assignee");

    let task = NewTask {
        title: args.title.clone(),
        status: args.status.clone(),
        assigned_to,
        created_by: CREATED_BY_TELEGRAM,
    };

    Ok(store.insert_task(&task).await?)
}

/// Verify that the configured credentials can reach the store.
///
/// Returns the number of visible agents. No part of the credential is ever
/// echoed back.
pub async fn check_connection() -> Result<usize, RecordError> {
    let settings = Settings::load()?;
    let store = SupabaseStore::new(&settings)?;

    let agents = store.list_agents().await?;
    Ok(agents.len())
}
