use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::config::TranslatorSettings;
use crate::error::ApiError;

const API_VERSION: &str = "3.0";

/// Fresh correlation token for one outbound call. Generated per call and
/// never reused or stored.
pub fn trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Request body item the provider expects for every text operation.
#[derive(Debug, Serialize)]
struct TextItem {
    text: String,
}

/// A language/confidence pair as the provider reports it. Appears both in
/// provider payloads and unchanged in our normalized output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedLanguage {
    pub language: String,
    pub score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateItem {
    detected_language: Option<DetectedLanguage>,
    #[serde(default)]
    translations: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct DetectItem {
    language: String,
    score: f64,
    #[serde(default)]
    alternatives: Vec<DetectedLanguage>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BreakSentenceItem {
    detected_language: Option<Value>,
    #[serde(default)]
    sent_len: Vec<u64>,
}

#[derive(Debug, Deserialize)]
struct DictionaryItem {
    translations: Option<Vec<Value>>,
}

/// Normalized translate result: detected language of the input plus the
/// provider's translations, flattened to a single-element array.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<DetectedLanguage>,
    pub translations: Vec<Value>,
}

/// Normalized detect result. `alternatives` is omitted from the JSON output
/// when the provider sent none.
#[derive(Debug, PartialEq, Serialize)]
pub struct Detection {
    pub language: String,
    pub score: f64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub alternatives: Vec<DetectedLanguage>,
}

/// Normalized break-sentence result with human-readable, 1-indexed
/// per-sentence length labels.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceBreakdown {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detected_language: Option<Value>,
    pub sent_len: Vec<String>,
}

/// Client for the upstream translation provider. One instance is shared by
/// all requests; each call builds a fresh outbound request with the auth
/// headers and a new trace id.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    client: Client,
    endpoint: String,
    subscription_key: String,
    location: String,
}

impl ProviderClient {
    pub fn new(settings: &TranslatorSettings) -> Self {
        Self {
            client: Client::new(),
            endpoint: settings.endpoint.trim_end_matches('/').to_string(),
            subscription_key: settings.subscription_key.clone(),
            location: settings.location.clone(),
        }
    }

    /// List supported language codes for a scope (translation,
    /// transliteration or dictionary). Passed through unchanged.
    pub async fn language_codes(&self, scope: &str) -> Result<Value, ApiError> {
        self.request(Method::GET, "/languages", &[("scope", scope)], None)
            .await
    }

    /// Translate text into `to`, with profanity marking enabled and source
    /// language detection left to the provider.
    pub async fn translate(&self, text: &str, to: &str) -> Result<Vec<TranslationResult>, ApiError> {
        let raw = self
            .request(
                Method::POST,
                "/translate",
                &[("to", to), ("profanityAction", "Marked")],
                Some(text),
            )
            .await?;
        Ok(normalize_translations(decode(raw)?))
    }

    /// Detect the language of `text`.
    pub async fn detect(&self, text: &str) -> Result<Vec<Detection>, ApiError> {
        let raw = self.request(Method::POST, "/detect", &[], Some(text)).await?;
        Ok(normalize_detections(decode(raw)?))
    }

    /// Find sentence boundaries in `text`.
    pub async fn break_sentence(&self, text: &str) -> Result<Vec<SentenceBreakdown>, ApiError> {
        let raw = self
            .request(Method::POST, "/breaksentence", &[], Some(text))
            .await?;
        Ok(normalize_sentence_breaks(decode(raw)?))
    }

    /// Convert `text` from one script to another. Passed through unchanged.
    pub async fn transliterate(
        &self,
        text: &str,
        language: &str,
        from_script: &str,
        to_script: &str,
    ) -> Result<Value, ApiError> {
        self.request(
            Method::POST,
            "/transliterate",
            &[
                ("language", language),
                ("fromScript", from_script),
                ("toScript", to_script),
            ],
            Some(text),
        )
        .await
    }

    /// Dictionary lookup: alternate translations of `text` from one language
    /// to another. Returns the translations of the first result item.
    pub async fn alternate_translations(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Vec<Value>, ApiError> {
        let raw = self
            .request(
                Method::POST,
                "/dictionary/lookup",
                &[("from", from), ("to", to)],
                Some(text),
            )
            .await?;
        first_dictionary_translations(decode(raw)?)
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        text: Option<&str>,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.endpoint, path);
        let mut request = self
            .client
            .request(method, &url)
            .header("Ocp-Apim-Subscription-Key", &self.subscription_key)
            .header("Ocp-Apim-Subscription-Region", &self.location)
            .header("Content-Type", "application/json")
            .header("X-ClientTraceId", trace_id())
            .query(&[("api-version", API_VERSION)])
            .query(query);

        if let Some(text) = text {
            request = request.json(&[TextItem {
                text: text.to_string(),
            }]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Upstream(format!(
                "request failed with status code {}: {}",
                status.as_u16(),
                body.trim()
            )));
        }

        response.json().await.map_err(|e| ApiError::Shape(e.to_string()))
    }
}

fn decode<T: DeserializeOwned>(raw: Value) -> Result<T, ApiError> {
    serde_json::from_value(raw).map_err(|e| ApiError::Shape(e.to_string()))
}

fn normalize_translations(items: Vec<TranslateItem>) -> Vec<TranslationResult> {
    items
        .into_iter()
        .take(1)
        .map(|item| TranslationResult {
            detected_language: item.detected_language,
            translations: item.translations,
        })
        .collect()
}

fn normalize_detections(items: Vec<DetectItem>) -> Vec<Detection> {
    items
        .into_iter()
        .map(|item| Detection {
            language: item.language,
            score: item.score,
            alternatives: item.alternatives,
        })
        .collect()
}

fn normalize_sentence_breaks(items: Vec<BreakSentenceItem>) -> Vec<SentenceBreakdown> {
    items
        .into_iter()
        .map(|item| SentenceBreakdown {
            detected_language: item.detected_language,
            sent_len: item
                .sent_len
                .iter()
                .enumerate()
                .map(|(i, len)| format!("Sentence {} : {}", i + 1, len))
                .collect(),
        })
        .collect()
}

fn first_dictionary_translations(items: Vec<DictionaryItem>) -> Result<Vec<Value>, ApiError> {
    items
        .into_iter()
        .next()
        .and_then(|item| item.translations)
        .ok_or_else(|| ApiError::Shape("dictionary lookup returned no translations".to_string()))
}
