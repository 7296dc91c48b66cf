//! Input record for annotation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A classified ad as handed to the annotator.
///
/// Only `body` is analysed; `title` and `metadata` travel along for callers
/// that keep them with the ad.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub body: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

impl Ad {
    #[must_use]
    pub fn from_body(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
