//! URL resolution for generated links.
//!
//! Every link on the homepage is built by concatenating path segments onto
//! `base_url`. Optional segments (`docs_url`, the language) contribute their
//! own trailing slash only when non-empty, so an absent segment never leaves
//! behind a doubled or missing separator:
//!
//! ```text
//! base_url  docs_url  language  doc          →  URL
//! /site/    ""        ""        x.html       →  /site/x.html
//! /site/    docs      ""        x.html       →  /site/docs/x.html
//! /site/    docs      en        x.html       →  /site/docs/en/x.html
//! ```
//!
//! Concatenation is only safe when `base_url` ends with `/` and the optional
//! segments have no surrounding slashes; [`crate::config::SiteConfig::validate`]
//! enforces that at load time.

use crate::config::SiteConfig;
use crate::types::RenderContext;

/// Resolve a documentation URL: `base_url` + `docs_url/` + `language/` + `doc`.
pub fn doc_url(base_url: &str, docs_url: &str, language: &str, doc: &str) -> String {
    let mut url = String::with_capacity(
        base_url.len() + docs_url.len() + language.len() + doc.len() + 2,
    );
    url.push_str(base_url);
    push_segment(&mut url, docs_url);
    push_segment(&mut url, language);
    url.push_str(doc);
    url
}

/// Resolve a site page URL: `base_url` + `language/` + `page`.
pub fn page_url(base_url: &str, language: &str, page: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + language.len() + page.len() + 1);
    url.push_str(base_url);
    push_segment(&mut url, language);
    url.push_str(page);
    url
}

/// Resolve a static asset URL. Assets are shared across languages.
pub fn asset_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

fn push_segment(url: &mut String, segment: &str) {
    if !segment.is_empty() {
        url.push_str(segment);
        url.push('/');
    }
}

/// Binds the URL segments of one render: site config plus render context.
#[derive(Debug, Clone, Copy)]
pub struct UrlResolver<'a> {
    base_url: &'a str,
    docs_url: &'a str,
    language: &'a str,
}

impl<'a> UrlResolver<'a> {
    pub fn new(config: &'a SiteConfig, context: &'a RenderContext) -> Self {
        Self {
            base_url: &config.base_url,
            docs_url: &config.docs_url,
            language: &context.language,
        }
    }

    pub fn doc(&self, doc: &str) -> String {
        doc_url(self.base_url, self.docs_url, self.language, doc)
    }

    pub fn page(&self, page: &str) -> String {
        page_url(self.base_url, self.language, page)
    }

    pub fn asset(&self, path: &str) -> String {
        asset_url(self.base_url, path)
    }
}
