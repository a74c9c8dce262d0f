//! Shared types used across resolution and rendering.
//!
//! These types appear in the serialized page model (`granary-site resolve`)
//! and are consumed by the HTML renderer, so their JSON shape is part of the
//! CLI's output.

use serde::Serialize;

/// Per-render locale.
///
/// The default context has an empty language: URLs carry no locale segment
/// and the page is written to the output root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    pub language: String,
}

impl RenderContext {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }

    /// Output directory prefix for this context (`""` or `"fr/"`).
    pub fn path_prefix(&self) -> String {
        if self.language.is_empty() {
            String::new()
        } else {
            format!("{}/", self.language)
        }
    }
}

/// A resolved hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Open in a new tab (`target="_blank"`).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub new_tab: bool,
}
