//! HTTP API Wrappers
//!
//! Frontend bindings to the task API, organized by domain.

mod auth;
mod task;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::JsCast;

pub use auth::*;
pub use task::*;

const API_META: &str = "taskboard-api";

/// Failures of a request, as the UI reports them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    #[error("unauthorized")]
    Unauthorized,
    #[error("invalid request: {0}")]
    Validation(String),
    #[error("server error ({0})")]
    Server(u16),
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Locale key of the user-facing message.
    pub fn message_key(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "errors.network",
            ClientError::NotFound => "errors.notFound",
            ClientError::Unauthorized => "errors.unauthorized",
            ClientError::Validation(_) => "errors.validation",
            ClientError::Server(_) | ClientError::Decode(_) => "errors.server",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            ClientError::Decode(error.to_string())
        } else {
            ClientError::Network(error.to_string())
        }
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

/// API origin: `<meta name="taskboard-api" content="...">`, else the page origin.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let from_meta = window
        .document()
        .and_then(|doc| doc.query_selector(&format!("meta[name=\"{API_META}\"]")).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlMetaElement>().ok())
        .map(|meta| meta.content())
        .filter(|content| !content.trim().is_empty());
    let base = from_meta.or_else(|| window.location().origin().ok()).unwrap_or_default();
    base.trim_end_matches('/').to_string()
}

fn url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let code = status.as_u16();
    let error = match code {
        400 => {
            let body = response.json::<ErrorBody>().await.ok();
            ClientError::Validation(body.map(|b| b.message).unwrap_or_default())
        }
        401 => ClientError::Unauthorized,
        404 => ClientError::NotFound,
        _ => ClientError::Server(code),
    };
    web_sys::console::warn_1(&format!("[API] HTTP {code}: {error}").into());
    Err(error)
}

async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
    let response = check(response).await?;
    Ok(response.json::<T>().await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_has_a_locale_message() {
        let errors = [
            ClientError::Network("offline".into()),
            ClientError::NotFound,
            ClientError::Unauthorized,
            ClientError::Validation(String::new()),
            ClientError::Server(500),
            ClientError::Decode("eof".into()),
        ];
        for error in errors {
            let key = error.message_key();
            assert_ne!(taskboard_core::translate(taskboard_core::Locale::En, key), key);
        }
    }
}
