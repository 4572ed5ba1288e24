pub mod store;
pub mod summarizer;
pub mod transcript;
