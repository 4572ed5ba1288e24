use std::sync::{Arc, Mutex};

use notion_store::{RecordUpdate, VideoRecord, VideoStore};

#[derive(Clone, Default)]
pub struct MockVideoStore {
    pub records: Vec<VideoRecord>,
    pub updates: Arc<Mutex<Vec<(String, RecordUpdate)>>>,
    pub fail_query_with: Option<String>,
    pub fail_update_for: Option<String>,
}

impl MockVideoStore {
    pub fn with_records(records: Vec<VideoRecord>) -> Self {
        Self {
            records,
            ..Default::default()
        }
    }

    pub fn failing_query(msg: &str) -> Self {
        Self {
            fail_query_with: Some(msg.to_string()),
            ..Default::default()
        }
    }

    /// Makes `update_record` fail for the given page id only.
    pub fn failing_update_for(mut self, page_id: &str) -> Self {
        self.fail_update_for = Some(page_id.to_string());
        self
    }
}

impl VideoStore for MockVideoStore {
    async fn query_pending(&self, _database_id: &str) -> anyhow::Result<Vec<VideoRecord>> {
        if let Some(ref msg) = self.fail_query_with {
            anyhow::bail!("{}", msg);
        }
        Ok(self.records.clone())
    }

    async fn update_record(&self, page_id: &str, update: &RecordUpdate) -> anyhow::Result<()> {
        if self.fail_update_for.as_deref() == Some(page_id) {
            anyhow::bail!("Notion update returned 500 for {}", page_id);
        }
        self.updates
            .lock()
            .unwrap()
            .push((page_id.to_string(), update.clone()));
        Ok(())
    }
}
