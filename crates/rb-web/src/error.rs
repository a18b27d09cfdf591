use thiserror::Error;

/// Everything that can stop a redirect button from sending the browser on.
#[derive(Debug, Error)]
pub enum RedirectError {
    /// The base URL was empty or only whitespace.
    #[error("redirect url is missing")]
    MissingUrl,

    #[error("invalid element props: {0}")]
    InvalidProps(#[from] serde_json::Error),

    /// No browsing context to navigate (server render, tests).
    #[error("no browser window available")]
    NoWindow,

    #[error("navigation failed: {0}")]
    Navigation(String),
}
