use std::future::Future;

pub mod notion;

use crate::domain::VideoRecord;

/// Fields written back onto a record's page once processing succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordUpdate {
    pub title: String,
    pub summary: String,
    pub main_points: Vec<String>,
}

pub trait VideoStore {
    /// Returns the records in `database_id` that still need processing,
    /// in the store's native order.
    fn query_pending(
        &self,
        database_id: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<VideoRecord>>> + Send;

    fn update_record(
        &self,
        page_id: &str,
        update: &RecordUpdate,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

impl<T: VideoStore + Send + Sync> VideoStore for &T {
    async fn query_pending(&self, database_id: &str) -> anyhow::Result<Vec<VideoRecord>> {
        (**self).query_pending(database_id).await
    }

    async fn update_record(&self, page_id: &str, update: &RecordUpdate) -> anyhow::Result<()> {
        (**self).update_record(page_id, update).await
    }
}
