//! Common types used throughout wp-query

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Content Kind
// ============================================================================

/// Kind of content item served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    #[default]
    Post,
    Page,
}

impl ContentKind {
    /// REST resource path segment for this kind
    pub fn resource(self) -> &'static str {
        match self {
            ContentKind::Post => "posts",
            ContentKind::Page => "pages",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.resource())
    }
}
