//! Task reads and inserts.

use super::SupabaseStore;
use crate::error::StoreError;
use crate::types::{NewTask, Task};
use reqwest::Method;

impl SupabaseStore {
    /// Fetch the most recent tasks, newest first.
    pub async fn recent_tasks(&self, limit: u32) -> Result<Vec<Task>, StoreError> {
        let limit = limit.to_string();
        let req = self.request(Method::GET, "tasks")?.query(&[
            ("select", "*"),
            ("order", "created_at.desc"),
            ("limit", limit.as_str()),
        ]);
        let res = self.send(req).await?;
        Ok(res.json().await?)
    }

    /// Insert one task row and return the stored representation.
    ///
    /// Not idempotent: repeated identical inserts create duplicate rows.
    pub async fn insert_task(&self, task: &NewTask) -> Result<Vec<Task>, StoreError> {
        let req = self
            .request(Method::POST, "tasks")?
            .header("Prefer", "return=representation")
            .json(task);
        let res = self.send(req).await?;
        Ok(res.json().await?)
    }
}
