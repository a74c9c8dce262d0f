//! The homepage's fixed content block table.
//!
//! The homepage is the same sequence of blocks on every build: splash,
//! feature callout, then three image-and-copy grid blocks. Order is not
//! configurable. Splash text comes from [`SiteConfig`](crate::config::SiteConfig)
//! at resolution time; everything else is static copy.
//!
//! Image paths are relative to `base_url` and resolved with
//! [`UrlResolver::asset`](crate::urls::UrlResolver::asset). Grid bodies are
//! markdown.

use serde::Serialize;

/// Which side of the copy an image sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageAlign {
    Left,
    Right,
}

impl ImageAlign {
    pub fn css_class(self) -> &'static str {
        match self {
            ImageAlign::Left => "imageAlignLeft",
            ImageAlign::Right => "imageAlignRight",
        }
    }
}

/// Section background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Background {
    #[serde(rename = "none")]
    Plain,
    Light,
    Dark,
}

impl Background {
    pub fn css_class(self) -> Option<&'static str> {
        match self {
            Background::Plain => None,
            Background::Light => Some("lightBackground"),
            Background::Dark => Some("darkBackground"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Splash,
    FeatureCallout,
    Grid,
}

/// One entry of the block table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock {
    pub kind: BlockKind,
    /// Anchor id for in-page links (`#try`).
    pub id: Option<&'static str>,
    pub title: &'static str,
    pub body: &'static str,
    pub image: Option<&'static str>,
    pub image_align: ImageAlign,
    pub background: Background,
}

pub const SPLASH_LOGO: &str = "img/granary-logo.png";

pub const HOME_BLOCKS: [ContentBlock; 5] = [
    ContentBlock {
        kind: BlockKind::Splash,
        id: None,
        title: "",
        body: "",
        image: Some(SPLASH_LOGO),
        image_align: ImageAlign::Left,
        background: Background::Plain,
    },
    ContentBlock {
        kind: BlockKind::FeatureCallout,
        id: None,
        title: "",
        body: "",
        image: None,
        image_align: ImageAlign::Left,
        background: Background::Plain,
    },
    ContentBlock {
        kind: BlockKind::Grid,
        id: Some("learn"),
        title: "Focus on your data, not your infrastructure",
        body: "Configure your AWS resources once, then let Granary keep track of them. \
               Granary associates models with specific execution environments so you \
               don't have to remember what runs where. Coming soon:\n\n\
               - AWS Lambda executor\n\
               - HTTP executor",
        image: Some("img/undraw_feeling_proud_qne1.svg"),
        image_align: ImageAlign::Right,
        background: Background::Light,
    },
    ContentBlock {
        kind: BlockKind::Grid,
        id: Some("try"),
        title: "Keep track of your predictions and their results",
        body: "Associating data with the model run that produced it can be hard. \
               With Granary tracking the arguments, outputs, and infrastructure for \
               your tasks, you won't have to guess which configuration produced which \
               results.",
        image: Some("img/undraw_predictive_analytics_kf9n.svg"),
        image_align: ImageAlign::Left,
        background: Background::Plain,
    },
    ContentBlock {
        kind: BlockKind::Grid,
        id: Some("description"),
        title: "Stop kicking off doomed models",
        body: "Granary puts some guardrails in front of your interaction with Batch so \
               you don't fall in to common mistakes, like mis-formatted arguments, \
               missing arguments, and bad string values for important AWS resources.",
        image: Some("img/undraw_done_checking_ty9a.svg"),
        image_align: ImageAlign::Right,
        background: Background::Dark,
    },
];

/// The homepage blocks, in render order.
pub fn home_blocks() -> &'static [ContentBlock] {
    &HOME_BLOCKS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_order_is_fixed() {
        let kinds: Vec<BlockKind> = home_blocks().iter().map(|b| b.kind).collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Splash,
                BlockKind::FeatureCallout,
                BlockKind::Grid,
                BlockKind::Grid,
                BlockKind::Grid,
            ]
        );
        let ids: Vec<Option<&str>> = home_blocks().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![None, None, Some("learn"), Some("try"), Some("description")]);
    }

    #[test]
    fn repeated_calls_return_identical_table() {
        assert_eq!(home_blocks(), home_blocks());
        assert_eq!(home_blocks().len(), 5);
    }

    #[test]
    fn grid_blocks_have_copy_and_images() {
        for block in home_blocks().iter().filter(|b| b.kind == BlockKind::Grid) {
            assert!(!block.title.is_empty());
            assert!(!block.body.is_empty());
            assert!(block.image.is_some_and(|i| i.starts_with("img/")));
        }
    }

    #[test]
    fn learn_how_body_is_a_markdown_list() {
        let learn = home_blocks()
            .iter()
            .find(|b| b.id == Some("learn"))
            .unwrap();
        assert!(learn.body.contains("\n\n- AWS Lambda executor\n- HTTP executor"));
    }

    #[test]
    fn css_classes() {
        assert_eq!(ImageAlign::Left.css_class(), "imageAlignLeft");
        assert_eq!(ImageAlign::Right.css_class(), "imageAlignRight");
        assert_eq!(Background::Plain.css_class(), None);
        assert_eq!(Background::Dark.css_class(), Some("darkBackground"));
    }

    #[test]
    fn background_serializes_as_none_light_dark() {
        let names: Vec<String> = [Background::Plain, Background::Light, Background::Dark]
            .iter()
            .map(|b| serde_json::to_string(b).unwrap())
            .collect();
        assert_eq!(names, vec![r#""none""#, r#""light""#, r#""dark""#]);
    }
}
