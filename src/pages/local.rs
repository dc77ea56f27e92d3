//! Page source backed by JSON files with built-in fallbacks

use super::{builtin, PagePayload, PageSource};
use crate::router::View;
use crate::schema::SchemaError;
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Environment variable overriding the schema directory
pub const SCHEMA_DIR_ENV: &str = "FORMDEMO_SCHEMA_DIR";

/// Loads `<schema_dir>/form1.json` and `form2.json` when present,
/// otherwise serves the built-in demo payloads
pub struct LocalPageSource {
    schema_dir: Option<PathBuf>,
}

impl LocalPageSource {
    pub fn new(schema_dir: Option<PathBuf>) -> Self {
        Self { schema_dir }
    }

    /// Build from the environment, falling back to the configured directory
    pub fn from_env(configured: Option<PathBuf>) -> Self {
        let schema_dir = std::env::var_os(SCHEMA_DIR_ENV)
            .map(PathBuf::from)
            .or(configured);
        Self::new(schema_dir)
    }

    pub fn schema_dir(&self) -> Option<&Path> {
        self.schema_dir.as_deref()
    }

    fn file_name(view: View) -> Option<&'static str> {
        match view {
            View::DemoForm1 => Some("form1.json"),
            View::DemoForm2 => Some("form2.json"),
            View::Home | View::NotFound => None,
        }
    }

    fn builtin(view: View) -> Option<PagePayload> {
        match view {
            View::DemoForm1 => Some(builtin::contact_form()),
            View::DemoForm2 => Some(builtin::preferences_form()),
            View::Home | View::NotFound => None,
        }
    }
}

/// Parse a page file and validate its schema
pub fn parse_page(json: &str) -> Result<PagePayload, SchemaError> {
    let payload: PagePayload = serde_json::from_str(json)?;
    payload.config.validate()?;
    Ok(payload)
}

#[async_trait]
impl PageSource for LocalPageSource {
    async fn fetch_page(&self, view: View) -> Result<PagePayload> {
        let file_name =
            Self::file_name(view).ok_or_else(|| anyhow!("{} has no form", view.title()))?;

        if let Some(dir) = &self.schema_dir {
            let path = dir.join(file_name);
            if tokio::fs::try_exists(&path).await.unwrap_or(false) {
                tracing::info!("Loading page schema from {}", path.display());
                let content = tokio::fs::read_to_string(&path)
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                return parse_page(&content)
                    .with_context(|| format!("Invalid page file {}", path.display()));
            }
            tracing::debug!("{} not found, using built-in page", path.display());
        }

        Self::builtin(view).ok_or_else(|| anyhow!("{} has no form", view.title()))
    }
}
