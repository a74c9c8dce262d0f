//! HTML site generation.
//!
//! Renders the resolved page models to HTML and writes them to the output
//! directory, one set per render context.
//!
//! ## Output Structure
//!
//! ```text
//! build/
//! ├── index.html          # Default homepage
//! ├── users.html          # Only when users are configured
//! ├── img/                # Copied from the static directory
//! │   └── granary-logo.png
//! └── fr/                 # One directory per configured language
//!     ├── index.html
//!     └── users.html
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating, so
//! config-supplied text (captions, taglines) is escaped automatically. Grid
//! block bodies are markdown, converted with pulldown-cmark. The stylesheet is
//! embedded at compile time and inlined with the brand colors prepended.

use crate::blocks::ImageAlign;
use crate::config::{self, SiteConfig};
use crate::page::{
    Block, GridBlock, HomePage, Splash, UsersPage, resolve_home_page, resolve_users_page,
};
use crate::showcase::{Showcase, USERS_PAGE};
use crate::types::{Link, RenderContext};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Static directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Static path error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Home,
    Users,
}

/// A page written during generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub kind: PageKind,
    /// Empty for the default context.
    pub language: String,
    /// Path relative to the output directory.
    pub path: PathBuf,
}

/// Summary of a generate run, consumed by CLI output.
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub pages: Vec<GeneratedPage>,
    pub assets_copied: usize,
}

/// The default context followed by one context per configured language.
pub fn render_contexts(config: &SiteConfig) -> Vec<RenderContext> {
    std::iter::once(RenderContext::default())
        .chain(config.languages.iter().map(RenderContext::new))
        .collect()
}

pub fn generate(
    config: &SiteConfig,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let css = format!(
        "{}\n\n{}",
        config::generate_color_css(&config.colors),
        CSS_STATIC
    );

    fs::create_dir_all(output_dir)?;

    let mut report = GenerateReport {
        assets_copied: copy_static_dir(&source_dir.join(&config.static_dir), output_dir)?,
        ..GenerateReport::default()
    };

    for context in render_contexts(config) {
        let prefix = PathBuf::from(context.path_prefix());

        let home = resolve_home_page(config, &context);
        let path = prefix.join("index.html");
        write_page(output_dir, &path, render_home_page(&home, &css))?;
        report.pages.push(GeneratedPage {
            kind: PageKind::Home,
            language: context.language.clone(),
            path,
        });

        if let Some(users) = resolve_users_page(config, &context) {
            let path = prefix.join(USERS_PAGE);
            write_page(output_dir, &path, render_users_page(&users, &css))?;
            report.pages.push(GeneratedPage {
                kind: PageKind::Users,
                language: context.language.clone(),
                path,
            });
        }
    }

    tracing::info!(
        pages = report.pages.len(),
        assets = report.assets_copied,
        output = %output_dir.display(),
        "Site generated"
    );
    Ok(report)
}

fn write_page(output_dir: &Path, relative: &Path, markup: Markup) -> Result<(), GenerateError> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, markup.into_string())?;
    tracing::debug!(path = %path.display(), "Wrote page");
    Ok(())
}

/// Copy the static directory into the output root. A missing directory is not an error.
fn copy_static_dir(src: &Path, dst: &Path) -> Result<usize, GenerateError> {
    if !src.is_dir() {
        tracing::debug!(path = %src.display(), "No static directory, skipping asset copy");
        return Ok(0);
    }

    let mut copied = 0;
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let target = dst.join(entry.path().strip_prefix(src)?);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

// ============================================================================
// HTML Components
// ============================================================================

fn html_lang(language: &str) -> &str {
    if language.is_empty() { "en" } else { language }
}

/// Renders the base HTML document structure
fn base_document(title: &str, language: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(html_lang(language)) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn button(link: &Link) -> Markup {
    html! {
        a.button
            href=(link.href)
            target=[link.new_tab.then_some("_blank")]
            rel=[link.new_tab.then_some("noopener")]
        {
            (link.label)
        }
    }
}

fn markdown(source: &str) -> Markup {
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, Parser::new(source));
    PreEscaped(body_html)
}

fn render_splash(splash: &Splash) -> Markup {
    html! {
        div.homeContainer {
            div.homeSplashFade {
                div.wrapper.homeWrapper {
                    div.inner {
                        img src=(splash.logo) alt=(splash.logo_alt) width="30%";
                        h2.projectTitle {
                            small { (splash.tagline) }
                        }
                        @if !splash.links.is_empty() {
                            div.section.promoSection {
                                div.promoRow {
                                    div.pluginRowBlock {
                                        @for link in &splash.links {
                                            div.pluginWrapper.buttonWrapper { (button(link)) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn render_feature_callout(title: &str) -> Markup {
    html! {
        div.productShowcaseSection.paddingBottom style="text-align: center" {
            h2 { (title) }
        }
    }
}

fn render_grid_block(grid: &GridBlock) -> Markup {
    let section_class = match grid.background.css_class() {
        Some(background) => format!("container paddingTop paddingBottom {background}"),
        None => "container paddingTop paddingBottom".to_string(),
    };
    let image = html! {
        @if let Some(src) = &grid.image {
            div.blockImage {
                img src=(src) alt=(grid.title);
            }
        }
    };

    html! {
        div class=(section_class) id=[grid.id.as_deref()] {
            div.wrapper {
                div.gridBlock {
                    div class={ "blockElement " (grid.image_align.css_class()) } {
                        @if grid.image_align == ImageAlign::Left {
                            (image)
                        }
                        div.blockContent {
                            h2 { (grid.title) }
                            (markdown(&grid.body))
                        }
                        @if grid.image_align == ImageAlign::Right {
                            (image)
                        }
                    }
                }
            }
        }
    }
}

fn render_block(block: &Block) -> Markup {
    match block {
        Block::Splash(splash) => render_splash(splash),
        Block::FeatureCallout { title } => render_feature_callout(title),
        Block::Grid(grid) => render_grid_block(grid),
    }
}

/// Renders the pinned-user showcase section
fn render_showcase(showcase: &Showcase) -> Markup {
    html! {
        div.productShowcaseSection.paddingBottom {
            h2 { (showcase.heading) }
            p { (showcase.intro) }
            div.logos {
                @for user in &showcase.users {
                    a href=(user.info_link) {
                        img src=(user.image) alt=(user.caption) title=(user.caption);
                    }
                }
            }
            div.more-users {
                (button(&showcase.more_users))
            }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the homepage: splash, then the remaining blocks and the showcase
/// inside the main container.
pub fn render_home_page(page: &HomePage, css: &str) -> Markup {
    let (splash, main): (Vec<&Block>, Vec<&Block>) = page
        .blocks
        .iter()
        .partition(|block| matches!(block, Block::Splash(_)));

    let content = html! {
        @for block in splash {
            (render_block(block))
        }
        div.mainContainer {
            @for block in main {
                (render_block(block))
            }
            @if let Some(showcase) = &page.showcase {
                (render_showcase(showcase))
            }
        }
    };

    base_document(&page.title, &page.language, css, content)
}

/// Renders the users page listing every configured user
pub fn render_users_page(page: &UsersPage, css: &str) -> Markup {
    let content = html! {
        div.mainContainer {
            div.wrapper {
                div.showcaseSection {
                    div.prose {
                        h1 { (page.heading) }
                        p { (page.intro) }
                    }
                    div.logos {
                        @for user in &page.users {
                            a href=(user.info_link) class=[user.pinned.then_some("pinned")] {
                                img src=(user.image) alt=(user.caption) title=(user.caption);
                            }
                        }
                    }
                    p { (button(&page.home)) }
                }
            }
        }
    };

    base_document(&page.title, &page.language, css, content)
}

// ============================================================================
// Tests
// ============================================================================
