//! Trait abstraction for page payload loading to enable mocking in tests

use super::PagePayload;
use crate::router::View;
use anyhow::Result;
use async_trait::async_trait;

/// Source of the schema and initial data a form page mounts with
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch the payload for a form view
    async fn fetch_page(&self, view: View) -> Result<PagePayload>;
}
