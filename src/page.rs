//! Page resolution: site config + render context → page model.
//!
//! The page model is the node tree the HTML renderer walks. Every URL in it
//! is already resolved and every block is already selected, so rendering is
//! pure presentation. The model serializes to JSON for `granary-site resolve`.

use crate::blocks::{Background, BlockKind, ContentBlock, ImageAlign, home_blocks};
use crate::config::{SiteConfig, UserEntry};
use crate::showcase::{Showcase, resolve_showcase};
use crate::types::{Link, RenderContext};
use crate::urls::UrlResolver;
use serde::Serialize;

/// The resolved homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub title: String,
    pub language: String,
    pub blocks: Vec<Block>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showcase: Option<Showcase>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Splash(Splash),
    FeatureCallout { title: String },
    Grid(GridBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Splash {
    pub logo: String,
    pub logo_alt: String,
    pub tagline: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub background: Background,
    pub title: String,
    /// Markdown source.
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub image_align: ImageAlign,
}

/// The "more users" page: every configured user, pinned or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsersPage {
    pub title: String,
    pub language: String,
    pub heading: String,
    pub intro: String,
    pub users: Vec<UserEntry>,
    pub home: Link,
}

/// Resolve the homepage for one render context.
pub fn resolve_home_page(config: &SiteConfig, context: &RenderContext) -> HomePage {
    let urls = UrlResolver::new(config, context);
    let blocks = home_blocks()
        .iter()
        .map(|block| resolve_block(block, config, &urls))
        .collect();

    HomePage {
        title: config.title.clone(),
        language: context.language.clone(),
        blocks,
        showcase: resolve_showcase(config, &urls),
    }
}

fn resolve_block(block: &ContentBlock, config: &SiteConfig, urls: &UrlResolver<'_>) -> Block {
    match block.kind {
        BlockKind::Splash => Block::Splash(Splash {
            logo: block.image.map(|path| urls.asset(path)).unwrap_or_default(),
            logo_alt: format!("{} logo", config.title),
            tagline: config.tagline.clone(),
            links: config
                .splash_links
                .iter()
                .map(|link| Link {
                    label: link.label.clone(),
                    href: urls.doc(&link.doc),
                    new_tab: link.new_tab,
                })
                .collect(),
        }),
        BlockKind::FeatureCallout => Block::FeatureCallout {
            title: block.title.to_string(),
        },
        BlockKind::Grid => Block::Grid(GridBlock {
            id: block.id.map(str::to_string),
            background: block.background,
            title: block.title.to_string(),
            body: block.body.to_string(),
            image: block.image.map(|path| urls.asset(path)),
            image_align: block.image_align,
        }),
    }
}

/// Resolve the users page, or `None` when no users are configured.
pub fn resolve_users_page(config: &SiteConfig, context: &RenderContext) -> Option<UsersPage> {
    if config.users.is_empty() {
        return None;
    }
    let urls = UrlResolver::new(config, context);

    Some(UsersPage {
        title: format!("{} Users", config.title),
        language: context.language.clone(),
        heading: format!("Who is Using {}?", config.title),
        intro: format!("{} is used by all these people", config.title),
        users: config.users.clone(),
        home: Link {
            label: format!("Back to {}", config.title),
            href: urls.page(""),
            new_tab: false,
        },
    })
}
