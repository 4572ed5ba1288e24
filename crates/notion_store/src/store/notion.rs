use anyhow::Context;
use itertools::Itertools;
use serde_json::{json, Value};

use crate::{
    domain::VideoRecord,
    store::{RecordUpdate, VideoStore},
};

const DEFAULT_BASE_URL: &str = "https://api.notion.com";
const NOTION_VERSION: &str = "2022-06-28";

const PROP_URL: &str = "URL";
const PROP_TITLE: &str = "Title";
const PROP_SUMMARY: &str = "Summary";
const PROP_MAIN_POINTS: &str = "Main points";

/// Notion caps a single rich-text content block at 2000 characters.
const RICH_TEXT_LIMIT: usize = 2000;

/// Store backed by the Notion REST API.
///
/// Queries select pages that carry a URL but no summary yet, so a completed
/// record drops out of the pending set on the next run.
pub struct NotionStore {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl NotionStore {
    pub fn new(token: impl Into<String>) -> Self {
        NotionStore {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: DEFAULT_BASE_URL.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    async fn query_page(&self, database_id: &str, cursor: Option<&str>) -> anyhow::Result<Value> {
        let mut body = json!({
            "filter": {
                "and": [
                    { "property": PROP_URL, "url": { "is_not_empty": true } },
                    { "property": PROP_SUMMARY, "rich_text": { "is_empty": true } }
                ]
            }
        });
        if let Some(cursor) = cursor {
            body["start_cursor"] = json!(cursor);
        }

        let resp = self
            .client
            .post(format!(
                "{}/v1/databases/{database_id}/query",
                self.base_url
            ))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach Notion"))
            .context("Failed to reach Notion")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            anyhow::bail!("Notion query returned {status}: {message}");
        }

        resp.json::<Value>()
            .await
            .context("Failed to decode Notion query response")
    }
}

impl VideoStore for NotionStore {
    #[tracing::instrument(skip(self))]
    async fn query_pending(&self, database_id: &str) -> anyhow::Result<Vec<VideoRecord>> {
        let mut records = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let page = self.query_page(database_id, cursor.as_deref()).await?;

            if let Some(results) = page["results"].as_array() {
                for result in results {
                    match record_from_page(result) {
                        Some(record) => records.push(record),
                        None => {
                            tracing::debug!(
                                page_id = result["id"].as_str().unwrap_or("<unknown>"),
                                "Skipping page without a usable URL property"
                            );
                        }
                    }
                }
            }

            match (page["has_more"].as_bool(), page["next_cursor"].as_str()) {
                (Some(true), Some(next)) => cursor = Some(next.to_string()),
                _ => break,
            }
        }

        tracing::debug!(count = records.len(), "Fetched pending records");
        Ok(records)
    }

    #[tracing::instrument(skip(self, update))]
    async fn update_record(&self, page_id: &str, update: &RecordUpdate) -> anyhow::Result<()> {
        let body = json!({
            "properties": {
                (PROP_TITLE): {
                    "title": [ { "text": { "content": clip(&update.title) } } ]
                },
                (PROP_SUMMARY): {
                    "rich_text": [ { "text": { "content": clip(&update.summary) } } ]
                },
                (PROP_MAIN_POINTS): {
                    "rich_text": [ { "text": { "content": clip(&render_main_points(&update.main_points)) } } ]
                }
            }
        });

        let resp = self
            .client
            .patch(format!("{}/v1/pages/{page_id}", self.base_url))
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to reach Notion"))
            .context("Failed to reach Notion")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().await.unwrap_or_default();
            anyhow::bail!("Notion update returned {status}: {message}");
        }

        Ok(())
    }
}

fn record_from_page(page: &Value) -> Option<VideoRecord> {
    let page_id = page["id"].as_str()?;
    let url = page["properties"][PROP_URL]["url"]
        .as_str()
        .filter(|url| !url.is_empty())?;

    let mut record = VideoRecord::new(page_id, url);
    record.title = plain_text(&page["properties"][PROP_TITLE]["title"]);
    Some(record)
}

/// Concatenates the plain text of a rich-text array property.
fn plain_text(value: &Value) -> Option<String> {
    let text = value
        .as_array()?
        .iter()
        .filter_map(|item| item["plain_text"].as_str())
        .join("");
    (!text.is_empty()).then_some(text)
}

fn render_main_points(points: &[String]) -> String {
    points.iter().map(|point| format!("- {point}")).join("\n")
}

fn clip(text: &str) -> &str {
    match text.char_indices().nth(RICH_TEXT_LIMIT) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
