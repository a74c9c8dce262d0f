//! Shared test fixtures for the granary-site test suite.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let config = sample_config();
//! let page = resolve_home_page(&config, &RenderContext::default());
//! assert_eq!(grid_ids(&page), vec!["learn", "try", "description"]);
//! ```

use crate::config::{SiteConfig, SplashLink, UserEntry};
use crate::page::{Block, HomePage};

/// A user entry whose caption and image derive from its link.
pub fn user(info_link: &str, pinned: bool) -> UserEntry {
    UserEntry {
        info_link: info_link.to_string(),
        image: format!("/img/{}.png", info_link.trim_start_matches("https://")),
        caption: format!("User {info_link}"),
        pinned,
    }
}

/// A fully populated config: sub-path base URL, docs segment, one extra
/// language, one splash link, and three users (two pinned).
pub fn sample_config() -> SiteConfig {
    SiteConfig {
        title: "Granary".to_string(),
        tagline: "A machine learning model management tool".to_string(),
        base_url: "/granary/".to_string(),
        docs_url: "docs".to_string(),
        languages: vec!["fr".to_string()],
        splash_links: vec![SplashLink {
            label: "Get Started".to_string(),
            doc: "getting-started.html".to_string(),
            new_tab: false,
        }],
        users: vec![
            user("https://www.azavea.com", true),
            user("https://example.com", false),
            user("https://example.org", true),
        ],
        ..SiteConfig::default()
    }
}

/// Anchor ids of the grid blocks, in page order.
pub fn grid_ids(page: &HomePage) -> Vec<&str> {
    page.blocks
        .iter()
        .filter_map(|block| match block {
            Block::Grid(grid) => grid.id.as_deref(),
            _ => None,
        })
        .collect()
}
