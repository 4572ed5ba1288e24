//! # YouTube parsing
//!
//! Pure parsing concerns of the pipeline: pulling video ids out of the URL
//! forms YouTube hands around, extracting the `ytInitialPlayerResponse`
//! blob and the `og:title` tag from a watch page, and flattening a
//! timedtext caption document into plain transcript text.

use std::{ops::Deref, sync::LazyLock};

use regex::Regex;
use serde::de::DeserializeOwned;

use crate::error::Error;

static VIDEO_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
        https?://
        (?:
            (?:[A-Za-z0-9-]+\.)*youtube\.com/
            (?:watch\?(?:[^\s\#]*&)*v=|embed/|shorts/)
          | youtu\.be/
        )
        ([0-9A-Za-z_-]{11})
        (?:[^0-9A-Za-z_-]|$)
        ",
    )
    .unwrap()
});

static PLAYER_RESPONSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<script[^>]*>\s*var\s+ytInitialPlayerResponse\s*=\s*(\{.*?\});").unwrap()
});

static OG_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<meta\s+property="og:title"\s+content="([^"]*)""#).unwrap());

static TIMEDTEXT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<text[^>]*>(.*?)</text>").unwrap());

/// Extracts the 11-character video id from a YouTube URL.
///
/// Supports the canonical `youtube.com/watch?v=` form, the short
/// `youtu.be/` form, and `embed/`/`shorts/` paths, with any extraneous
/// query parameters around the id. Every input either yields an id or
/// [`Error::InvalidUrl`].
pub fn extract_video_id(url: &str) -> Result<String, Error> {
    VIDEO_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|id| id.as_str().to_string())
        .ok_or_else(|| Error::InvalidUrl(url.to_string()))
}

/// Raw HTML of a YouTube watch page.
pub struct WatchPage(String);

impl Deref for WatchPage {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for WatchPage {
    fn from(value: String) -> Self {
        WatchPage(value)
    }
}

impl WatchPage {
    pub fn new(html: String) -> Self {
        WatchPage(html)
    }

    /// Deserializes the `ytInitialPlayerResponse` object embedded in the
    /// page's script tags.
    pub fn player_response<T>(&self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        PLAYER_RESPONSE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .and_then(|m| serde_json::from_str(m.as_str()).ok())
            .ok_or(Error::Parse(
                "ytInitialPlayerResponse from the page's script tag",
            ))
    }

    /// The video title from the `og:title` meta tag, when present.
    pub fn og_title(&self) -> Option<String> {
        OG_TITLE_RE
            .captures(self)
            .and_then(|cap| cap.get(1))
            .map(|m| decode_entities(m.as_str()))
    }
}

/// Flattens a timedtext caption document into transcript text, with the
/// individual snippets joined by single spaces.
pub fn parse_timedtext(xml: &str) -> String {
    let snippets = TIMEDTEXT_RE
        .captures_iter(xml)
        .filter_map(|cap| cap.get(1))
        .map(|m| decode_entities(m.as_str().trim()))
        .filter(|snippet| !snippet.is_empty())
        .collect::<Vec<_>>();

    snippets.join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}
