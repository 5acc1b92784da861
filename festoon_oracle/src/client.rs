// Copyright 2025 the Festoon Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The generative-text client behind the oracle form.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reply substituted when the service answers but produces no text.
const EMPTY_REPLY_FALLBACK: &str = "The stars are cloudy today... try asking again later.";

/// Reply substituted when the request fails outright.
const FAILURE_FALLBACK: &str =
    "Adulthood is about handling errors gracefully. (System Error: Please try again).";

/// A source of short wisdom replies.
///
/// Implementations must always produce a human-readable string — recovering
/// from their own failures with a substitute message — so callers need no
/// error branch. See the [crate docs](crate).
pub trait WisdomSource {
    /// Produces a short reply for the given topic.
    fn request_wisdom(&self, topic: &str) -> String;
}

/// Configuration for [`GeminiClient`].
#[derive(Clone, Debug)]
pub struct OracleConfig {
    /// API key sent with each request.
    pub api_key: String,
    /// Model identifier appended to the endpoint.
    pub model: String,
    /// Service base URL, without a trailing slash.
    pub endpoint: String,
}

impl OracleConfig {
    /// Service base the real page talks to.
    pub const DEFAULT_ENDPOINT: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    /// Model the page uses: fast and cheap, thinking disabled, since the
    /// replies are two sentences of fluff.
    pub const DEFAULT_MODEL: &'static str = "gemini-3-flash-preview";

    /// Creates a config with the default endpoint and model.
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: Self::DEFAULT_MODEL.into(),
            endpoint: Self::DEFAULT_ENDPOINT.into(),
        }
    }

    /// Reads the API key from the `API_KEY` environment variable, falling
    /// back to an empty key (the request will fail and the client will
    /// answer with its apology).
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(env::var("API_KEY").unwrap_or_default())
    }
}

/// [`WisdomSource`] backed by a `generateContent`-style REST service.
///
/// The client owns its HTTP agent (connection reuse across questions) and
/// never surfaces an error: any transport, status, or decode failure
/// resolves to a fixed apology string.
pub struct GeminiClient {
    config: OracleConfig,
    agent: ureq::Agent,
}

impl GeminiClient {
    /// Creates a client from the given config.
    #[must_use]
    pub fn new(config: OracleConfig) -> Self {
        Self {
            config,
            agent: ureq::Agent::new_with_defaults(),
        }
    }

    /// Builds the prompt sent for a topic.
    #[must_use]
    pub fn prompt_for(topic: &str) -> String {
        format!(
            "You are a wise, funny, and slightly sassy Oracle of Adulthood. \
             A user who just turned 18 is asking for advice about: \"{topic}\".\n\n\
             Provide a short, memorable piece of advice (max 2 sentences). \
             Mix wisdom with a touch of humor. Keep it lighthearted but meaningful."
        )
    }

    fn generate(&self, topic: &str) -> Result<String, RequestError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Self::prompt_for(topic),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };

        let mut response = self
            .agent
            .post(url.as_str())
            .header("x-goog-api-key", self.config.api_key.as_str())
            .send_json(&request)?;
        let body: GenerateResponse = response.body_mut().read_json()?;
        extract_reply(body).ok_or(RequestError::EmptyReply)
    }
}

impl fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.config.model)
            .field("endpoint", &self.config.endpoint)
            .finish_non_exhaustive()
    }
}

impl WisdomSource for GeminiClient {
    fn request_wisdom(&self, topic: &str) -> String {
        match self.generate(topic) {
            Ok(reply) => reply,
            Err(RequestError::EmptyReply) => EMPTY_REPLY_FALLBACK.into(),
            Err(RequestError::Http(_)) => FAILURE_FALLBACK.into(),
        }
    }
}

/// Why a single request produced no usable reply. Never escapes the client;
/// [`WisdomSource::request_wisdom`] maps it to a fallback string.
#[derive(Debug)]
enum RequestError {
    /// Transport, status, or decode failure.
    Http(ureq::Error),
    /// The service answered without any candidate text.
    EmptyReply,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(err) => write!(f, "wisdom request failed: {err}"),
            Self::EmptyReply => write!(f, "wisdom reply contained no text"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(err) => Some(err),
            Self::EmptyReply => None,
        }
    }
}

impl From<ureq::Error> for RequestError {
    fn from(err: ureq::Error) -> Self {
        Self::Http(err)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    thinking_config: ThinkingConfig,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ThinkingConfig {
    thinking_budget: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Pulls the first non-empty candidate text out of a response.
fn extract_reply(response: GenerateResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .filter_map(|candidate| candidate.content)
        .flat_map(|content| content.parts)
        .map(|part| part.text)
        .find(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_topic() {
        let prompt = GeminiClient::prompt_for("taxes");
        assert!(prompt.contains("advice about: \"taxes\""));
        assert!(prompt.contains("max 2 sentences"));
    }

    #[test]
    fn extract_reply_takes_first_candidate_text() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "Floss nightly." } ] } },
                    { "content": { "parts": [ { "text": "Second opinion." } ] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_reply(body).as_deref(), Some("Floss nightly."));
    }

    #[test]
    fn extract_reply_skips_blank_parts() {
        let body: GenerateResponse = serde_json::from_str(
            r#"{
                "candidates": [
                    { "content": { "parts": [ { "text": "  " }, { "text": "Real advice." } ] } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(extract_reply(body).as_deref(), Some("Real advice."));
    }

    #[test]
    fn extract_reply_handles_missing_candidates() {
        let body: GenerateResponse = serde_json::from_str("{}").unwrap();
        assert!(extract_reply(body).is_none());

        let body: GenerateResponse =
            serde_json::from_str(r#"{ "candidates": [ { "content": null } ] }"#).unwrap();
        assert!(extract_reply(body).is_none());
    }

    #[test]
    fn request_serializes_with_camel_case_config() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hi".into(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.8,
                thinking_config: ThinkingConfig { thinking_budget: 0 },
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["generationConfig"]["temperature"], 0.8);
        assert_eq!(json["generationConfig"]["thinkingConfig"]["thinkingBudget"], 0);
        assert_eq!(json["contents"][0]["parts"][0]["text"], "hi");
    }

    #[test]
    fn default_config_points_at_the_service() {
        let config = OracleConfig::new("key");
        assert_eq!(config.model, "gemini-3-flash-preview");
        assert!(config.endpoint.starts_with("https://"));
    }
}
