//! Client error types

use menu_core::{ErrorPayload, FormErrors};
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    /// Non-2xx answer. The body is kept when it was a JSON object.
    #[error("{}", http_message(.status, .body))]
    Http {
        status: StatusCode,
        body: Option<ErrorPayload>,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Errors to show on a form: the backend's field errors when it sent
    /// any, otherwise this error's message at form level.
    pub fn form_errors(&self) -> FormErrors {
        match self {
            ClientError::Http {
                body: Some(body), ..
            } => FormErrors::from_payload(body),
            other => FormErrors::from_message(other.to_string()),
        }
    }

    /// One-line alert text: the backend's `message` when present, else `fallback`.
    pub fn alert_message<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ClientError::Http {
                body: Some(body), ..
            } => body.message.as_deref().unwrap_or(fallback),
            _ => fallback,
        }
    }
}

fn http_message(status: &StatusCode, body: &Option<ErrorPayload>) -> String {
    body.as_ref()
        .and_then(ErrorPayload::summary)
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
