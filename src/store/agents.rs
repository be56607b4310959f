//! Agent reads.

use super::SupabaseStore;
use crate::error::StoreError;
use crate::types::Agent;
use reqwest::Method;
use serde::Deserialize;

/// Projection for assignee resolution; only the row id is fetched.
#[derive(Deserialize)]
struct AgentIdRow {
    id: String,
}

impl SupabaseStore {
    /// Fetch every agent row.
    pub async fn list_agents(&self) -> Result<Vec<Agent>, StoreError> {
        let req = self.request(Method::GET, "agents")?.query(&[("select", "*")]);
        let res = self.send(req).await?;
        Ok(res.json().await?)
    }

    /// Resolve an agent's row id by its stable node id.
    ///
    /// Returns `None` when no agent carries the node id. Task creation
    /// continues with a null assignee in that case; only transport and
    /// store errors propagate.
    pub async fn find_agent_id(&self, node_id: &str) -> Result<Option<String>, StoreError> {
        let filter = format!("eq.{node_id}");
        let req = self
            .request(Method::GET, "agents")?
            .query(&[("select", "id"), ("node_id", filter.as_str())]);
        let res = self.send(req).await?;

        let rows: Vec<AgentIdRow> = res.json().await?;
        Ok(rows.into_iter().next().map(|row| row.id))
    }
}
