//! # Notion Store
//!
//! This crate provides the Notion-facing half of the pipeline: the
//! `VideoRecord` domain model and a narrow store contract for querying
//! pending video pages out of a Notion database and writing generated
//! summaries back onto them.
//!
//! The crate uses reqwest against the Notion REST API and provides an
//! abstraction layer so the pipeline can be exercised without network access.

mod domain;
mod store;

pub use domain::{RecordStatus, VideoRecord};
pub use store::notion::NotionStore;
pub use store::{RecordUpdate, VideoStore};
