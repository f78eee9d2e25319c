//! Gemini-backed translator over the `generateContent` REST surface.

use std::time::Duration;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::{json, Value};

use crate::config::TranslatorConfig;
use crate::schema::{MatchRecord, QueryPlan, Validate};

use super::prompts::{self, DB_QUERY_PROMPT, MATCH_ANALYSIS_PROMPT};
use super::{Translator, TranslatorError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Translator backed by a Gemini-style model endpoint.
///
/// Stateless request/response: each call posts a prompt (plus inline
/// PNG parts for extraction), demands a JSON response constrained to the
/// target schema, and validates whatever comes back. There is no retry
/// here; a flaky model surfaces as an error to the caller.
pub struct GeminiTranslator {
    http: reqwest::Client,
    config: TranslatorConfig,
}

impl GeminiTranslator {
    pub fn new(config: TranslatorConfig) -> Result<Self, TranslatorError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| TranslatorError::Unreachable(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    /// Assemble the parts array: prompt text, then one inline PNG per image.
    fn contents(prompt: &str, images: &[&[u8]]) -> Value {
        let mut parts = vec![json!({ "text": prompt })];
        for image in images {
            parts.push(json!({
                "inline_data": {
                    "mime_type": "image/png",
                    "data": STANDARD.encode(image),
                }
            }));
        }
        json!([{ "parts": parts }])
    }

    /// Post a generation request and pull the JSON text out of the first
    /// candidate.
    async fn generate(&self, contents: Value, response_schema: Value) -> Result<Value, TranslatorError> {
        let body = json!({
            "contents": contents,
            "generationConfig": {
                "response_mime_type": "application/json",
                "response_schema": response_schema,
            },
        });

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| TranslatorError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(TranslatorError::Unreachable(format!(
                "model endpoint answered {}: {}",
                status, detail
            )));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| TranslatorError::BadResponse(e.to_string()))?;
        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                TranslatorError::BadResponse("response carried no candidate text".into())
            })?;
        serde_json::from_str(text)
            .map_err(|e| TranslatorError::BadResponse(format!("candidate text is not JSON: {}", e)))
    }
}

#[async_trait]
impl Translator for GeminiTranslator {
    async fn extract_match(
        &self,
        image_one: &[u8],
        image_two: Option<&[u8]>,
    ) -> Result<MatchRecord, TranslatorError> {
        let mut images = vec![image_one];
        if let Some(second) = image_two {
            images.push(second);
        }
        log::debug!("requesting match extraction over {} image(s)", images.len());

        let payload = self
            .generate(
                Self::contents(MATCH_ANALYSIS_PROMPT, &images),
                prompts::match_record_schema(),
            )
            .await?;
        let record = MatchRecord::from_value(payload)?;
        record.validate()?;
        Ok(record)
    }

    async fn translate_query(&self, question: &str) -> Result<QueryPlan, TranslatorError> {
        log::debug!("translating query: {}", question);
        let prompt = format!("{}\n\nQuestion: {}", DB_QUERY_PROMPT, question);
        let payload = self
            .generate(Self::contents(&prompt, &[]), prompts::query_plan_schema())
            .await?;
        // from_value runs the allow-list check before the plan escapes.
        Ok(QueryPlan::from_value(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_carry_prompt_then_images() {
        let contents = GeminiTranslator::contents(MATCH_ANALYSIS_PROMPT, &[b"one", b"two"]);
        let parts = contents[0]["parts"].as_array().unwrap();
        assert_eq!(parts.len(), 3);
        assert!(parts[0]["text"].as_str().unwrap().contains("highlighted player"));
        assert_eq!(parts[1]["inline_data"]["mime_type"], "image/png");
        assert_eq!(parts[1]["inline_data"]["data"], STANDARD.encode(b"one"));
    }

    #[test]
    fn endpoint_joins_base_url_and_model() {
        let translator = GeminiTranslator::new(TranslatorConfig {
            api_key: "k".into(),
            model: "gemini-2.5-flash".into(),
            base_url: "https://example.test/".into(),
        })
        .unwrap();
        assert_eq!(
            translator.endpoint(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
