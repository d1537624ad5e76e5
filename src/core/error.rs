use thiserror::Error;

/// Failures of a single tool invocation. Every variant is rendered as tool
/// text at the handler boundary; none reach the protocol layer.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("APIFY_API_KEY not configured. Add it to wrangler.jsonc vars.")]
    Configuration,

    #[error("Apify API error ({status}): {status_text}{}", body_suffix(.body))]
    Upstream {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("{0}")]
    Transport(reqwest::Error),

    #[error("Malformed response from Apify: {0}")]
    MalformedResponse(String),
}

// Request URLs carry the API token as a query parameter.
impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Transport(err.without_url())
    }
}

fn body_suffix(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(" - {}", body)
    }
}

/// Rejected tool arguments, reported before any network call.
#[derive(Error, Debug, PartialEq)]
pub enum ParamError {
    #[error("missing required '{0}' argument")]
    Missing(&'static str),

    #[error("'{field}' must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("'{field}' must be one of: {allowed}, got '{value}'")]
    NotAllowed {
        field: &'static str,
        value: String,
        allowed: String,
    },
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
