use reqwest::Client;
use serde::Deserialize;

use crate::Summarizer;

/// Client for any OpenAI-compatible chat completions endpoint (OpenAI
/// itself, or an Ollama server's `/v1` surface).
pub struct OpenAIClient {
    client: Client,
    model: String,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum OpenAIError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },
    #[error("completion response contained no content")]
    EmptyCompletion,
}

impl OpenAIClient {
    const SUMMARIZE_PROMPT: &str = include_str!("./prompts/summarize_0.txt");
    const MAIN_POINTS_PROMPT: &str = include_str!("./prompts/main_points_0.txt");
    const TEMPERATURE: f64 = 0.1;

    pub fn new(model: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            model: model.into(),
            base_url: api_base.into(),
            api_key: None,
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Model identifiers may carry a LiteLLM-style `ollama/` provider
    /// prefix; the wire format wants the bare name.
    fn model_name(&self) -> &str {
        self.model.strip_prefix("ollama/").unwrap_or(&self.model)
    }

    pub async fn send_completion_request(
        &self,
        system_prompt: &str,
        user_content: impl Into<String>,
    ) -> Result<CompletionResponse, OpenAIError> {
        let body = serde_json::json!({
            "model": self.model_name(),
            "temperature": Self::TEMPERATURE,
            "stream": false,
            "messages": [
                {
                    "role": "system",
                    "content": system_prompt
                },
                {
                    "role": "user",
                    "content": user_content.into()
                }
            ]
        });

        let mut request = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&body);
        if let Some(ref api_key) = self.api_key {
            request = request.bearer_auth(api_key);
        }

        let resp = request
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(OpenAIError::Api { status, message });
        }

        Ok(resp.json::<CompletionResponse>().await?)
    }

    async fn completion_content(
        &self,
        system_prompt: &str,
        user_content: String,
    ) -> Result<String, OpenAIError> {
        let response = self
            .send_completion_request(system_prompt, user_content)
            .await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(OpenAIError::EmptyCompletion)
    }
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub index: u32,
    pub message: CompletionMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionMessage {
    pub role: String,
    pub content: Option<String>,
}

impl Summarizer for OpenAIClient {
    type Error = OpenAIError;

    async fn summarize(&self, transcript: &str) -> Result<String, Self::Error> {
        let transcript = clip_to_char_budget(transcript, Self::TRANSCRIPT_CHAR_BUDGET);
        let user_content = format!(
            "Summarize the following video transcript in 3-5 sentences. \
             Write a single clear paragraph. \
             Do not add any information that is not explicitly stated in the transcript. \
             Ensure the response is no longer than 2000 characters, including spaces.\n\n\
             {transcript}"
        );

        self.completion_content(Self::SUMMARIZE_PROMPT, user_content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize transcript"))
    }

    async fn extract_points(&self, transcript: &str) -> Result<Vec<String>, Self::Error> {
        let transcript = clip_to_char_budget(transcript, Self::TRANSCRIPT_CHAR_BUDGET);
        let user_content = format!(
            "From the following transcript, extract the key points as concise bullet points. \
             Do not include explanations, introductions, or conclusions. \
             Do not add any information not explicitly stated in the transcript. \
             Ensure the response is no longer than 2000 characters, including spaces.\n\n\
             {transcript}"
        );

        let content = self
            .completion_content(Self::MAIN_POINTS_PROMPT, user_content)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to extract main points"))?;

        Ok(parse_bullet_points(&content))
    }
}

/// Splits a bullet-list completion into individual points, stripping
/// `-`/`*`/`•` markers and `1.`-style numbering.
pub fn parse_bullet_points(content: &str) -> Vec<String> {
    content
        .lines()
        .map(strip_bullet_marker)
        .filter(|line| !line.is_empty())
        .map(ToString::to_string)
        .collect()
}

fn strip_bullet_marker(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))
        .or_else(|| line.strip_prefix('•'))
    {
        return rest.trim_start();
    }

    let digits = line.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        if let Some(rest) = line[digits..]
            .strip_prefix('.')
            .or_else(|| line[digits..].strip_prefix(')'))
        {
            return rest.trim_start();
        }
    }

    line
}

fn clip_to_char_budget(text: &str, budget: usize) -> &str {
    match text.char_indices().nth(budget) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
