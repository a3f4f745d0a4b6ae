//! Generative-content adapter
//!
//! Builds the image and text generation payloads, issues them through the
//! retrying helper, and parses the responses into display state. The wire
//! schema is strongly typed; an absent field maps to the documented fallback
//! rather than a runtime type error.
//!
//! No caching and no dedup: identical prompts regenerate on every visit.

use crate::config::Config;
use crate::error::GenAiError;
use crate::model::gen::{AdvisorReply, GeneratedImage};
use crate::services::retry::{Backoff, CancelToken};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Substituted when the text response is missing the candidate field
pub const FALLBACK_ANSWER: &str = "I couldn't get that answer. Try again.";

/// Shown in the transcript when the request sequence exhausts its retries
pub const CONNECTION_FAILURE_NOTICE: &str = "Trouble connecting. Please ask again.";

/// System instruction for the foundry assistant
pub const FOUNDRY_SYSTEM_PROMPT: &str = "You are a simplified technical consultant for the \
    V-Process foundry. Answer using clear, plain English. Explain common defects like film \
    tearing or mould collapse simply. Be precise but accessible.";

/// System instruction for the ML advisor; demands the structured JSON reply
pub const ADVISOR_SYSTEM_PROMPT: &str = "You are an ML teaching assistant. Given a problem \
    description, recommend one classic algorithm. Reply with a single JSON object with the \
    fields \"type\" (problem type), \"algorithm\" (the recommendation) and \"reasoning\" \
    (one short paragraph). No prose outside the JSON.";

// ─────────────────────────────────────────────────────────────────────────────
// Wire schema
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ImageRequest<'a> {
    instances: ImageInstances<'a>,
    parameters: ImageParameters,
}

#[derive(Serialize)]
struct ImageInstances<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
struct ImageParameters {
    #[serde(rename = "sampleCount")]
    sample_count: u32,
}

#[derive(Deserialize)]
struct ImageResponse {
    #[serde(default)]
    predictions: Vec<ImagePrediction>,
}

#[derive(Deserialize)]
struct ImagePrediction {
    #[serde(rename = "bytesBase64Encoded")]
    bytes_base64_encoded: Option<String>,
}

#[derive(Serialize)]
struct TextRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

impl<'a> Content<'a> {
    fn text(text: &'a str) -> Self {
        Self {
            parts: vec![Part { text }],
        }
    }
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
}

#[derive(Deserialize)]
struct TextResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Extract `candidates[0].content.parts[0].text`, or None if any hop is absent
pub fn parse_text_reply(body: &str) -> Option<String> {
    let response: TextResponse = serde_json::from_str(body).ok()?;
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()?
        .text
}

/// Decode `predictions[0].bytesBase64Encoded` into raw picture bytes
pub fn parse_image_payload(body: &str) -> Result<Vec<u8>, GenAiError> {
    let response: ImageResponse =
        serde_json::from_str(body).map_err(|_| GenAiError::ParseFailed("predictions"))?;
    let encoded = response
        .predictions
        .into_iter()
        .next()
        .and_then(|p| p.bytes_base64_encoded)
        .ok_or(GenAiError::ParseFailed("predictions[0].bytesBase64Encoded"))?;
    BASE64
        .decode(encoded.as_bytes())
        .map_err(|_| GenAiError::ParseFailed("bytesBase64Encoded"))
}

/// Models often wrap the requested JSON object in a markdown code fence
static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").unwrap());

/// Strip a surrounding markdown code fence, if any
pub fn strip_code_fences(text: &str) -> &str {
    match CODE_FENCE.captures(text) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(text),
        None => text.trim(),
    }
}

/// Parse the advisor's structured reply out of the candidate text
pub fn parse_advisor_reply(candidate_text: &str) -> Result<AdvisorReply, GenAiError> {
    serde_json::from_str(strip_code_fences(candidate_text))
        .map_err(|_| GenAiError::ParseFailed("type/algorithm/reasoning"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Client
// ─────────────────────────────────────────────────────────────────────────────

/// Blocking client for the generative endpoints. Cloned into worker threads;
/// the underlying connection pool is shared.
#[derive(Clone)]
pub struct GenAiClient {
    http: reqwest::blocking::Client,
    backoff: Backoff,
    api_base: String,
    api_key: String,
    image_model: String,
    text_model: String,
    visual_dir: PathBuf,
}

impl GenAiClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        // No per-request timeout: the retry helper's bounded attempt count is
        // the only limit on a generation sequence.
        let http = reqwest::blocking::Client::builder().timeout(None).build()?;
        Ok(Self {
            http,
            backoff: Backoff::default(),
            api_base: config.api_base.clone(),
            api_key: config.resolved_api_key(),
            image_model: config.image_model.clone(),
            text_model: config.text_model.clone(),
            visual_dir: config.visual_dir(),
        })
    }

    /// Endpoint URL; the credential rides as a query parameter
    fn endpoint(&self, model: &str, verb: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}?key={}",
            self.api_base, model, verb, self.api_key
        )
    }

    /// POST the body through the retry helper and return the success body.
    /// A non-success status and a transport error are treated identically.
    fn post_with_retry<B: Serialize>(
        &self,
        model: &str,
        verb: &str,
        body: &B,
        cancel: &CancelToken,
    ) -> Result<String, GenAiError> {
        let url = self.endpoint(model, verb);
        self.backoff.run(cancel, |attempt| {
            debug!(model, verb, attempt, "generation request");
            let response = self
                .http
                .post(&url)
                .json(body)
                .send()
                .map_err(|e| e.without_url().to_string())?;
            let status = response.status();
            if !status.is_success() {
                return Err(format!("status {}", status));
            }
            response.text().map_err(|e| e.without_url().to_string())
        })
    }

    /// Generate one image for the prompt, decode it, and write it beneath the
    /// visuals cache directory
    pub fn generate_image(
        &self,
        prompt: &str,
        cancel: &CancelToken,
    ) -> Result<GeneratedImage, GenAiError> {
        let request = ImageRequest {
            instances: ImageInstances { prompt },
            parameters: ImageParameters { sample_count: 1 },
        };
        let body = self.post_with_retry(&self.image_model, "predict", &request, cancel)?;
        let bytes = parse_image_payload(&body)?;

        let path = self.visual_path();
        if let Err(err) = std::fs::create_dir_all(&self.visual_dir)
            .and_then(|_| std::fs::write(&path, &bytes))
        {
            warn!(error = %err, "could not write generated visual");
            return Err(GenAiError::StoreFailed(format!(
                "{}: {}",
                path.display(),
                err
            )));
        }

        Ok(GeneratedImage {
            prompt: prompt.to_string(),
            bytes_len: bytes.len(),
            path,
        })
    }

    /// Generate a chat reply. A response missing the candidate field is
    /// substituted with the fixed fallback string instead of surfacing an
    /// error; only retry exhaustion reaches the caller as one.
    pub fn generate_chat_reply(
        &self,
        prompt: &str,
        system: &str,
        cancel: &CancelToken,
    ) -> Result<String, GenAiError> {
        let request = TextRequest {
            contents: vec![Content::text(prompt)],
            system_instruction: Content::text(system),
            generation_config: None,
        };
        let body = self.post_with_retry(&self.text_model, "generateContent", &request, cancel)?;
        Ok(parse_text_reply(&body).unwrap_or_else(|| {
            warn!("text response missing candidate field, substituting fallback");
            FALLBACK_ANSWER.to_string()
        }))
    }

    /// Ask for a structured algorithm recommendation
    pub fn recommend_algorithm(
        &self,
        question: &str,
        cancel: &CancelToken,
    ) -> Result<AdvisorReply, GenAiError> {
        let request = TextRequest {
            contents: vec![Content::text(question)],
            system_instruction: Content::text(ADVISOR_SYSTEM_PROMPT),
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json",
            }),
        };
        let body = self.post_with_retry(&self.text_model, "generateContent", &request, cancel)?;
        let candidate =
            parse_text_reply(&body).ok_or(GenAiError::ParseFailed("candidates[0]"))?;
        parse_advisor_reply(&candidate)
    }

    fn visual_path(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        self.visual_dir.join(format!("visual-{}.png", stamp))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_reply_extracts_candidate() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Check the film."}]}}]}"#;
        assert_eq!(parse_text_reply(body).as_deref(), Some("Check the film."));
    }

    #[test]
    fn test_parse_text_reply_absent_field_is_none() {
        assert_eq!(parse_text_reply(r#"{"candidates":[]}"#), None);
        assert_eq!(parse_text_reply(r#"{"candidates":[{"content":null}]}"#), None);
        assert_eq!(
            parse_text_reply(r#"{"candidates":[{"content":{"parts":[]}}]}"#),
            None
        );
        assert_eq!(parse_text_reply("not json"), None);
    }

    #[test]
    fn test_parse_image_payload_decodes_base64() {
        // "hello" in standard base64
        let body = r#"{"predictions":[{"bytesBase64Encoded":"aGVsbG8="}]}"#;
        assert_eq!(parse_image_payload(body).unwrap(), b"hello");
    }

    #[test]
    fn test_parse_image_payload_missing_prediction_fails() {
        let err = parse_image_payload(r#"{"predictions":[]}"#).unwrap_err();
        assert!(matches!(err, GenAiError::ParseFailed(_)));

        let err = parse_image_payload(r#"{"predictions":[{}]}"#).unwrap_err();
        assert!(matches!(err, GenAiError::ParseFailed(_)));
    }

    #[test]
    fn test_strip_code_fences() {
        assert_eq!(
            strip_code_fences("```json\n{\"a\":1}\n```"),
            "{\"a\":1}"
        );
        assert_eq!(strip_code_fences("```\n{\"a\":1}\n```"), "{\"a\":1}");
        assert_eq!(strip_code_fences("  {\"a\":1}  "), "{\"a\":1}");
    }

    #[test]
    fn test_parse_advisor_reply_round_trip() {
        let text = "```json\n{\"type\":\"classification\",\"algorithm\":\"Logistic \
                    Regression\",\"reasoning\":\"Binary outcome with a single score.\"}\n```";
        let reply = parse_advisor_reply(text).unwrap();
        assert_eq!(reply.problem_type, "classification");
        assert_eq!(reply.algorithm, "Logistic Regression");
    }

    #[test]
    fn test_parse_advisor_reply_garbage_is_parse_failed() {
        assert!(matches!(
            parse_advisor_reply("sorry, I cannot help"),
            Err(GenAiError::ParseFailed(_))
        ));
    }
}
