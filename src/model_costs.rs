//! Model-cost dataset assembler
//!
//! Fetches the LiteLLM model pricing/context-window document and flattens it
//! into the record list consumed by the frontend build. The upstream document
//! is a single JSON object mapping model names to metadata objects; its
//! schema is treated as opaque and passed through verbatim.

use reqwest::Client;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Upstream pricing document. Pinned to the main branch on purpose: the
/// dataset tracks whatever LiteLLM currently publishes.
pub const PRICES_URL: &str =
    "https://raw.githubusercontent.com/BerriAI/litellm/refs/heads/main/model_prices_and_context_window.json";

/// HTTP client wrapper for fetching the pricing document
pub struct PricingFetcher {
    client: Client,
    url: String,
}

impl PricingFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    /// Fetch and parse the pricing document.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The network request fails or the response status is not 2xx
    /// - The body is not valid JSON
    /// - The top level of the document is not an object
    pub async fn fetch(&self) -> Result<Map<String, Value>, AppError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text)?;
        match body {
            Value::Object(catalog) => Ok(catalog),
            other => Err(AppError::MalformedSource(format!(
                "expected a top-level object, got {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flatten the model-name -> metadata mapping into a record list, in source
/// key order. Each record is the metadata object with an added `id` field
/// holding the model name; a metadata-supplied `id` is discarded (the key
/// wins). The first entry is always dropped: the upstream document leads
/// with a `sample_spec` placeholder, not real pricing.
pub fn flatten_catalog(catalog: Map<String, Value>) -> Vec<Map<String, Value>> {
    catalog
        .into_iter()
        .skip(1)
        .map(|(name, entry)| {
            let mut record = Map::new();
            record.insert("id".to_string(), Value::String(name));
            if let Value::Object(fields) = entry {
                for (field, value) in fields {
                    if field != "id" {
                        record.insert(field, value);
                    }
                }
            }
            record
        })
        .collect()
}

/// Fetch the pricing document from `url` and assemble the dataset.
pub async fn assemble(url: &str) -> Result<Vec<Map<String, Value>>, AppError> {
    let catalog = PricingFetcher::new(url).fetch().await?;
    Ok(flatten_catalog(catalog))
}
