//! Site config: the messages (and their redirect buttons) the home page renders.
//!
//! Read once at startup from `$RB_CONFIG` (default `./data/redirects.toml`):
//!
//! ```toml
//! [site]
//! title = "Account"
//!
//! [[messages]]
//! content = "You need to login to Snowflake to use the Snowflake Agent"
//! button_text = "Go to Snowflake Login"
//! url = "https://example.com/snowflake_login/"
//! email = "ana@example.com"
//! variant = "default"
//! ```

use anyhow::{Context, Result};
use leptos::logging::{log, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

use crate::element::RedirectButtonProps;

pub const CONFIG_ENV: &str = "RB_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./data/redirects.toml";
const DEFAULT_TITLE: &str = "Redirects";

static SITE: OnceLock<SiteConfig> = OnceLock::new();

// ── TOML shape ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    site: SiteSection,
    #[serde(default)]
    messages: Vec<RedirectMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct SiteSection {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

// ── Public config ─────────────────────────────────────────────────────────────

/// A notice line and the button that resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectMessage {
    pub content: String,
    #[serde(flatten)]
    pub button: RedirectButtonProps,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub title: String,
    pub description: Option<String>,
    pub messages: Vec<RedirectMessage>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: None,
            messages: vec![RedirectMessage {
                content: "Sign in to continue.".to_string(),
                button: RedirectButtonProps {
                    button_text: "Go to login".to_string(),
                    url: "/login".to_string(),
                    email: None,
                    variant: Default::default(),
                },
            }],
        }
    }
}

impl SiteConfig {
    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to load config: {}", path.display()))
    }

    /// Resolve the config path from `$RB_CONFIG`; a missing file means the built-in default.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let path = Path::new(&path);
        if !path.exists() {
            log!("[config] {} not found, using built-in messages", path.display());
            return Ok(Self::default());
        }
        let config = Self::load(path)?;
        log!("[config] Loaded {} message(s) from {}", config.messages.len(), path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let file: FileConfig = toml::from_str(content).context("Failed to parse TOML")?;

        // Every button must be able to build its destination up front
        for (i, message) in file.messages.iter().enumerate() {
            message
                .button
                .target()
                .href()
                .with_context(|| format!("message {} ({:?})", i + 1, message.content))?;
        }

        Ok(Self {
            title: file.site.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: file.site.description,
            messages: file.messages,
        })
    }
}

/// Install the process-wide config. Only the first install takes effect.
pub fn install(config: SiteConfig) {
    if SITE.set(config).is_err() {
        warn!("[config] Site config already installed, ignoring the new one");
    }
}

/// The installed config, or the built-in default when nothing was installed.
pub fn site() -> &'static SiteConfig {
    SITE.get_or_init(SiteConfig::default)
}
