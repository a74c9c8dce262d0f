//! # Granary Site
//!
//! Generator for the Granary documentation website's homepage: a splash with
//! logo and tagline, a fixed run of marketing blocks, and an optional
//! "Who is Using This?" showcase of pinned adopters.
//!
//! # Architecture: Resolve, Then Render
//!
//! ```text
//! 1. Resolve   config.toml + language  →  HomePage   (URLs resolved, blocks selected)
//! 2. Render    HomePage                →  index.html (maud)
//! ```
//!
//! Resolution is a pure function of [`config::SiteConfig`] and
//! [`types::RenderContext`]. Its output is a plain serializable tree, so the
//! interesting rules (URL joining, block order, showcase filtering) are tested
//! without parsing HTML, and `granary-site resolve` can print the tree as JSON.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, validation, stock config, color CSS |
//! | [`urls`] | Doc, page, and asset URL resolution |
//! | [`blocks`] | The fixed homepage block table |
//! | [`showcase`] | Pinned-user filter and showcase section |
//! | [`page`] | Config + context → `HomePage` / `UsersPage` |
//! | [`generate`] | Page models → HTML files, static asset copy |
//! | [`types`] | Shared types (`RenderContext`, `Link`) |
//! | [`output`] | CLI output formatting |

pub mod blocks;
pub mod config;
pub mod generate;
pub mod output;
pub mod page;
pub mod showcase;
pub mod types;
pub mod urls;

#[cfg(test)]
pub(crate) mod test_helpers;
