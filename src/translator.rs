use std::time::Duration;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::TranslationConfig;
use crate::error::TranslateError;

/// Blocking text translation capability.
pub trait Translate {
    fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError>;
}

/// Client for the public Google translate endpoint.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    source_lang: String,
}

impl GoogleTranslator {
    pub fn new(config: &TranslationConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            source_lang: config.source_lang.clone(),
        })
    }
}

impl Translate for GoogleTranslator {
    fn translate(&self, text: &str, target_lang: &str) -> Result<String, TranslateError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_lang.as_str()),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().unwrap_or_default();
            return Err(TranslateError::Status { status, body });
        }

        let body: Value = response.json()?;
        parse_segments(&body)
    }
}

/// `[[["Hello","안녕",...], ...], ...]` -> "Hello..."
fn parse_segments(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| TranslateError::MalformedResponse(body.to_string()))?;

    let mut out = String::new();
    for segment in segments {
        // Trailing transliteration segments carry null in the first slot.
        if let Some(fragment) = segment.get(0).and_then(Value::as_str) {
            out.push_str(fragment);
        }
    }

    if out.is_empty() && !segments.is_empty() {
        return Err(TranslateError::MalformedResponse(body.to_string()));
    }
    Ok(out)
}
