/// Processing state of a [`VideoRecord`] within a single run.
///
/// Records move strictly forward: `Pending` → `TranscriptFetched` →
/// `Summarized` → `Completed`, with `Failed` reachable from any
/// non-terminal state. A terminal record never transitions again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordStatus {
    #[default]
    Pending,
    TranscriptFetched,
    Summarized,
    Completed,
    Failed,
}

impl RecordStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, RecordStatus::Completed | RecordStatus::Failed)
    }

    /// Whether `next` is the immediate successor of `self` on the happy
    /// path. `Failed` is handled by [`VideoRecord::fail`], not here.
    pub fn can_advance_to(self, next: RecordStatus) -> bool {
        matches!(
            (self, next),
            (RecordStatus::Pending, RecordStatus::TranscriptFetched)
                | (RecordStatus::TranscriptFetched, RecordStatus::Summarized)
                | (RecordStatus::Summarized, RecordStatus::Completed)
        )
    }
}

/// One Notion database row representing a YouTube video to process.
///
/// Created when read from a database query, mutated in place as pipeline
/// stages complete, and discarded once results are persisted (or a terminal
/// failure is recorded).
#[derive(Debug, Clone, Default)]
pub struct VideoRecord {
    pub page_id: String,
    pub url: String,
    pub video_id: Option<String>,
    pub title: Option<String>,
    pub transcript: Option<String>,
    pub summary: Option<String>,
    pub main_points: Option<Vec<String>>,
    pub status: RecordStatus,
    pub error: Option<String>,
}

impl VideoRecord {
    pub fn new(page_id: impl Into<String>, url: impl Into<String>) -> Self {
        VideoRecord {
            page_id: page_id.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    /// Moves the record to the next happy-path status.
    ///
    /// Transitions must not skip a status; this is checked in debug builds.
    pub fn advance(&mut self, next: RecordStatus) {
        debug_assert!(
            self.status.can_advance_to(next),
            "invalid status transition {:?} -> {:?} for page {}",
            self.status,
            next,
            self.page_id
        );
        self.status = next;
    }

    /// Marks the record as terminally failed with a diagnostic message.
    pub fn fail(&mut self, message: impl Into<String>) {
        debug_assert!(
            !self.status.is_terminal(),
            "cannot fail terminal record {}",
            self.page_id
        );
        self.status = RecordStatus::Failed;
        self.error = Some(message.into());
    }
}
