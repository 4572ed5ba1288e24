pub mod builder;

use anyhow::Context;
use itertools::{Either, Itertools};
use notion_store::{RecordStatus, RecordUpdate, VideoRecord, VideoStore};

use crate::{error::Error, parser, yt::TranscriptFetcher, Summarizer};

/// Aggregate outcome of one full pass over the pending records.
#[derive(Debug, Default)]
pub struct RunResult {
    /// Page ids of records that were fully processed and persisted.
    pub completed: Vec<String>,
    /// Records that failed at some stage, with the stage's error.
    pub failed: Vec<RecordFailure>,
}

impl RunResult {
    pub fn processed(&self) -> usize {
        self.completed.len() + self.failed.len()
    }
}

#[derive(Debug)]
pub struct RecordFailure {
    pub page_id: String,
    pub url: String,
    pub video_id: Option<String>,
    pub error: Error,
}

/// The core video summarization pipeline.
///
/// Coordinates the three collaborators per record and isolates failures:
/// an error in any stage marks that record failed and moves on, so a bad
/// record never blocks the rest of the batch. The run itself only fails
/// when the initial store query fails.
#[derive(Debug)]
pub struct VideoSummaryProcessor<N, T, S>
where
    N: VideoStore + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    store: N,
    transcripts: T,
    summarizer: S,
}

impl<N, T, S> VideoSummaryProcessor<N, T, S>
where
    N: VideoStore + Send + Sync + 'static,
    T: TranscriptFetcher + Send + Sync + 'static,
    S: Summarizer + Send + Sync + 'static,
{
    /// Processes every pending record in `database_id` sequentially.
    #[tracing::instrument(skip(self))]
    pub async fn process(&self, database_id: &str) -> anyhow::Result<RunResult> {
        let records = self
            .store
            .query_pending(database_id)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, "Failed to query pending records"))
            .context("Failed to query pending records")?;

        if records.is_empty() {
            tracing::info!("No pending records to process at this time");
            return Ok(RunResult::default());
        }
        tracing::info!(count = records.len(), "Processing pending records");

        let mut outcomes = Vec::with_capacity(records.len());
        for mut record in records {
            match self.process_record(&mut record).await {
                Ok(()) => {
                    tracing::info!(
                        page_id = %record.page_id,
                        video_id = record.video_id.as_deref().unwrap_or_default(),
                        "Record completed"
                    );
                    outcomes.push(Ok(record));
                }
                Err(e) => {
                    tracing::warn!(
                        page_id = %record.page_id,
                        url = %record.url,
                        error = %e,
                        "Record failed, continuing with the rest of the batch"
                    );
                    record.fail(e.to_string());
                    outcomes.push(Err((record, e)));
                }
            }
        }

        let (completed, failed) = outcomes.into_iter().partition_map(|outcome| match outcome {
            Ok(record) => Either::Left(record.page_id),
            Err((record, error)) => Either::Right(RecordFailure {
                page_id: record.page_id,
                url: record.url,
                video_id: record.video_id,
                error,
            }),
        });

        Ok(RunResult { completed, failed })
    }

    /// Runs one record through all pipeline stages, advancing its status
    /// as each stage completes.
    async fn process_record(&self, record: &mut VideoRecord) -> Result<(), Error> {
        let video_id = parser::extract_video_id(&record.url)?;
        record.video_id = Some(video_id.clone());

        let fetched = self.transcripts.fetch(&video_id).await?;
        // keep a title the store already had over the scraped one
        let title = record.title.clone().unwrap_or(fetched.title);
        let text = fetched.text;
        record.title = Some(title.clone());
        record.transcript = Some(text.clone());
        record.advance(RecordStatus::TranscriptFetched);

        let summary = self
            .summarizer
            .summarize(&text)
            .await
            .map_err(|e| Error::Summarize(format!("{e:?}")))?;
        let main_points = self
            .summarizer
            .extract_points(&text)
            .await
            .map_err(|e| Error::Summarize(format!("{e:?}")))?;
        record.summary = Some(summary.clone());
        record.main_points = Some(main_points.clone());
        record.advance(RecordStatus::Summarized);

        let update = RecordUpdate {
            title,
            summary,
            main_points,
        };
        self.store
            .update_record(&record.page_id, &update)
            .await
            .map_err(Error::Persist)?;
        record.advance(RecordStatus::Completed);

        Ok(())
    }
}
