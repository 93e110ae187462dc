use std::time::Duration;

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::backend::NutritionBackend;
use crate::error::{HealthError, Result};
use crate::models::{CalculationResult, FormRecord, SmartSuggestionsRequest};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Blocking JSON client for the calculator backend.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// POST a JSON body and decode the response.
    fn post_json<T: DeserializeOwned>(&self, path: &str, body: &impl Serialize) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let value: serde_json::Value = self.client.post(&url).json(body).send()?.json()?;
        decode_body(value)
    }
}

/// Decode a response body.
///
/// The backend reports application failures as an `error` field in an
/// otherwise-200 body; that is mapped to `HealthError::Backend` carrying the
/// backend's message.
fn decode_body<T: DeserializeOwned>(value: serde_json::Value) -> Result<T> {
    if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
        return Err(HealthError::Backend(message.to_string()));
    }

    Ok(serde_json::from_value(value)?)
}

#[derive(Debug, Deserialize)]
struct SuggestionsResponse {
    suggestions: String,
}

impl NutritionBackend for HttpBackend {
    fn calculate(&self, form: &FormRecord) -> Result<CalculationResult> {
        self.post_json("/calculate", form)
    }

    fn smart_suggestions(&self, request: &SmartSuggestionsRequest) -> Result<String> {
        let response: SuggestionsResponse = self.post_json("/smart_suggestions", request)?;
        Ok(response.suggestions)
    }
}
