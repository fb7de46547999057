//! Context module
//!
//! Immutable request configuration shared by every downstream component:
//! API base, path namespace, and the optional click and date callbacks.
//!
//! # Overview
//!
//! A [`ContextConfig`] is constructed once per session and passed by
//! reference (or cloned cheaply) into query and resolver calls. No
//! operation mutates it after construction.

mod config;
mod types;

pub use config::{chrono_formatter, ContextConfig, ContextConfigBuilder, DEFAULT_NAMESPACE};
pub use types::{ClickEvent, ClickHandler, ClickKind, ClickValues, DateFormatter};
