//! Page payloads for the form views
//!
//! A form page mounts by fetching a [`PagePayload`] from a [`PageSource`]
//! and loading its schema and data into the store.

mod builtin;
mod local;
mod traits;

use crate::schema::{FormConfig, FormData};
use serde::{Deserialize, Serialize};

pub use builtin::{contact_form, preferences_form};
pub use local::LocalPageSource;
pub use traits::PageSource;

#[cfg(test)]
pub use traits::MockPageSource;

/// Schema and initial data for one form page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PagePayload {
    pub config: FormConfig,
    #[serde(default)]
    pub data: FormData,
}
