//! Context callback and event types

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Callback invoked when a rendered relation link is clicked
pub type ClickHandler = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

/// Callback turning an ISO-8601 timestamp into display text
pub type DateFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Which kind of relation a click targeted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClickKind {
    Author,
    Category,
    Tag,
}

/// Values of the clicked relation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickValues {
    pub id: u64,
    pub name: String,
    pub link: String,
}

/// Event handed to the click handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// Relation kind
    #[serde(rename = "type")]
    pub kind: ClickKind,
    /// Relation values
    pub values: ClickValues,
}

impl ClickEvent {
    /// Create a click event
    pub fn new(
        kind: ClickKind,
        id: u64,
        name: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            values: ClickValues {
                id,
                name: name.into(),
                link: link.into(),
            },
        }
    }
}
