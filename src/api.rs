//! Request handling around the summarizer.
//!
//! Turns a JSON request body into a [`Summary`] or an [`ApiError`] carrying an
//! HTTP-style status code. The body may be a JSON object or a JSON string whose
//! content is itself a JSON object.

use crate::config::Config;
use crate::summarizer::{Summarizer, DEFAULT_SENTENCES};
use crate::summary::Summary;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::{info, warn};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("No data provided")]
    NoData,
    #[error("Invalid JSON string")]
    InvalidJsonString,
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Invalid num_sentences: {0}")]
    InvalidSentenceCount(String),
    #[error("Invalid {0}: expected a string")]
    NotAString(&'static str),
    #[error("No text provided")]
    NoText,
    #[error("Invalid API Key")]
    InvalidApiKey,
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidApiKey => 403,
            ApiError::Internal(_) => 500,
            _ => 400,
        }
    }
}

/// A parsed summarization request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub text: Option<String>,
    pub num_sentences: Option<i64>,
    pub api_key: String,
}

impl SummarizeRequest {
    /// Parse a raw request body
    pub fn from_body(body: &str) -> Result<Self, ApiError> {
        if body.trim().is_empty() {
            return Err(ApiError::NoData);
        }
        Self::from_value(serde_json::from_str(body)?)
    }

    /// Parse an already-decoded JSON payload
    pub fn from_value(value: Value) -> Result<Self, ApiError> {
        let object = match value {
            Value::Null => return Err(ApiError::NoData),
            Value::Object(object) => object,
            Value::String(encoded) => match serde_json::from_str(&encoded) {
                Ok(Value::Object(object)) => object,
                Ok(_) => return Err(ApiError::NotAnObject),
                Err(_) => return Err(ApiError::InvalidJsonString),
            },
            _ => return Err(ApiError::NotAnObject),
        };
        Self::from_object(&object)
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ApiError> {
        let text = match object.get("text") {
            None | Some(Value::Null) => None,
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => return Err(ApiError::NotAString("text")),
        };

        let num_sentences = match object.get("num_sentences") {
            None | Some(Value::Null) => None,
            Some(value) => Some(parse_sentence_count(value)?),
        };

        let api_key = match object.get("api_key") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(key)) => key.clone(),
            Some(_) => return Err(ApiError::NotAString("api_key")),
        };

        Ok(Self {
            text,
            num_sentences,
            api_key,
        })
    }
}

/// Accepts integers, floats (truncated toward zero) and integer strings.
fn parse_sentence_count(value: &Value) -> Result<i64, ApiError> {
    let invalid = || ApiError::InvalidSentenceCount(value.to_string());
    match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                return Ok(n);
            }
            match number.as_f64() {
                Some(f) if f.is_finite() => Ok(f.trunc() as i64),
                _ => Err(invalid()),
            }
        }
        Value::String(s) => s.trim().parse::<i64>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Status code and JSON body of a handled request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: Value,
}

/// Validates, authenticates and summarizes requests.
#[derive(Debug, Clone)]
pub struct RequestHandler<'s> {
    summarizer: Summarizer<'s>,
    api_key: Option<String>,
    default_text: Option<String>,
    default_sentences: i64,
}

impl<'s> RequestHandler<'s> {
    pub fn new(summarizer: Summarizer<'s>) -> Self {
        Self {
            summarizer,
            api_key: None,
            default_text: None,
            default_sentences: DEFAULT_SENTENCES,
        }
    }

    /// Handler configured from `config`
    pub fn from_config(summarizer: Summarizer<'s>, config: &Config) -> Self {
        let handler = Self::new(summarizer)
            .with_default_sentences(config.summarizer.default_sentences);
        let handler = match config.api_key() {
            Some(key) => handler.with_api_key(key),
            None => {
                warn!("no API key configured; accepting all requests");
                handler
            }
        };
        match &config.api.default_text {
            Some(text) => handler.with_default_text(text),
            None => handler,
        }
    }

    /// Require `key` on requests that supply a non-empty key
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.api_key = (!key.is_empty()).then_some(key);
        self
    }

    pub fn with_default_text(mut self, text: impl Into<String>) -> Self {
        self.default_text = Some(text.into());
        self
    }

    pub fn with_default_sentences(mut self, n: i64) -> Self {
        self.default_sentences = n;
        self
    }

    /// Handle a raw request body, mapping every outcome to a response
    pub fn handle(&self, body: &str) -> Response {
        let result = SummarizeRequest::from_body(body)
            .and_then(|request| self.summarize(&request))
            .and_then(|summary| {
                serde_json::to_value(&summary).map_err(|e| ApiError::Internal(e.to_string()))
            });

        match result {
            Ok(body) => Response { status: 200, body },
            Err(error) => {
                info!(status = error.status(), %error, "request rejected");
                Response {
                    status: error.status(),
                    body: json!({ "error": error.to_string() }),
                }
            }
        }
    }

    /// Authenticate and summarize a parsed request.
    ///
    /// An empty supplied key is accepted; a non-empty one must match the
    /// configured key.
    pub fn summarize(&self, request: &SummarizeRequest) -> Result<Summary, ApiError> {
        let num_sentences = request.num_sentences.unwrap_or(self.default_sentences);

        if let Some(expected) = &self.api_key {
            if !request.api_key.is_empty() && request.api_key != *expected {
                return Err(ApiError::InvalidApiKey);
            }
        }

        let text = request
            .text
            .as_deref()
            .or(self.default_text.as_deref())
            .unwrap_or("");
        if text.is_empty() {
            return Err(ApiError::NoText);
        }

        Ok(Summary::create(&self.summarizer, text, num_sentences))
    }
}
