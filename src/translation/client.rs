use futures_util::FutureExt;
use futures_util::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;

use super::sign::{generate_salt, sign};
use crate::config::Credentials;

/// Baidu general translation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://fanyi-api.baidu.com/api/trans/vip/translate";

/// One value to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub text: String,
    /// Source language code, `auto` to let the provider detect it.
    pub from: String,
    pub to: String,
}

/// Why a single translation call failed.
#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    /// The response carried no `trans_result`.
    #[error("Provider returned no translation (error_code {code}): {message}")]
    Provider { code: String, message: String },

    #[error("Failed to reach translation endpoint")]
    Transport(#[from] reqwest::Error),

    #[error("Translation endpoint returned HTTP {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Translation endpoint returned malformed JSON")]
    MalformedResponse(#[source] serde_json::Error),

    #[error("Invalid translation endpoint '{endpoint}': {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}

impl TranslateError {
    /// Returns `true` when the provider answered but refused to translate.
    pub const fn is_provider(&self) -> bool {
        matches!(self, Self::Provider { .. })
    }
}

/// Something that turns one text into its translation.
pub trait Translator: Send + Sync {
    fn translate<'a>(
        &'a self,
        request: &'a TranslationRequest,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<String, TranslateError>>;
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    trans_result: Option<Vec<TransResult>>,
    #[serde(default)]
    error_code: Option<serde_json::Value>,
    #[serde(default)]
    error_msg: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransResult {
    dst: String,
}

/// Client for the Baidu translation REST API.
#[derive(Debug, Clone)]
pub struct BaiduClient {
    client: Client,
    endpoint: String,
}

impl BaiduClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(
        &self,
        request: &TranslationRequest,
        credentials: &Credentials,
    ) -> Result<String, TranslateError> {
        let salt = generate_salt();
        let signature = sign(
            &credentials.app_id,
            &request.text,
            salt,
            &credentials.app_key,
        );
        let salt = salt.to_string();

        let params = [
            ("appid", credentials.app_id.as_str()),
            ("q", request.text.as_str()),
            ("from", request.from.as_str()),
            ("to", request.to.as_str()),
            ("salt", salt.as_str()),
            ("sign", signature.as_str()),
        ];

        let url = Url::parse_with_params(&self.endpoint, &params).map_err(|e| {
            TranslateError::InvalidEndpoint {
                endpoint: self.endpoint.clone(),
                message: e.to_string(),
            }
        })?;

        tracing::debug!(
            from = %request.from,
            to = %request.to,
            chars = request.text.chars().count(),
            "sending translation request"
        );

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TranslateError::Status { status, body });
        }

        parse_response(&body)
    }
}

impl Default for BaiduClient {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for BaiduClient {
    fn translate<'a>(
        &'a self,
        request: &'a TranslationRequest,
        credentials: &'a Credentials,
    ) -> BoxFuture<'a, Result<String, TranslateError>> {
        self.send(request, credentials).boxed()
    }
}

/// Extracts the translated text from a response body.
///
/// Segments are joined with `\n`; the result has no trailing newline.
fn parse_response(body: &str) -> Result<String, TranslateError> {
    let response: TranslateResponse =
        serde_json::from_str(body).map_err(TranslateError::MalformedResponse)?;

    let Some(segments) = response.trans_result else {
        let code = match response.error_code {
            Some(serde_json::Value::String(s)) => s,
            Some(other) => other.to_string(),
            None => "unknown".to_string(),
        };
        let message = response
            .error_msg
            .unwrap_or_else(|| "response has no trans_result".to_string());
        return Err(TranslateError::Provider { code, message });
    };

    Ok(segments
        .into_iter()
        .map(|s| s.dst)
        .collect::<Vec<_>>()
        .join("\n"))
}
