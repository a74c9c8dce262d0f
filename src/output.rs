//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! ## Check
//!
//! ```text
//! Site
//!     Title: Granary
//!     Base URL: /granary/
//!     Docs URL: docs
//!
//! Languages
//!     (default)
//!     fr
//!
//! Splash links
//!     001 Get Started → /granary/docs/getting-started.html
//!
//! Users (3, 2 pinned)
//!     001 Azavea (pinned)
//!         https://www.azavea.com
//! ```
//!
//! ## Generate
//!
//! ```text
//! Home → index.html
//! Users → users.html
//! Home [fr] → fr/index.html
//! Users [fr] → fr/users.html
//!
//! Generated 2 homepages, 2 users pages, 4 static files
//! ```

use crate::config::SiteConfig;
use crate::generate::{GenerateReport, PageKind};
use crate::showcase::pinned_users;
use crate::types::RenderContext;
use crate::urls::UrlResolver;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

// ============================================================================
// check
// ============================================================================

/// Format a summary of a loaded config.
pub fn format_check_output(config: &SiteConfig) -> Vec<String> {
    let mut lines = vec![
        "Site".to_string(),
        format!("{}Title: {}", indent(1), config.title),
        format!("{}Base URL: {}", indent(1), config.base_url),
    ];
    if !config.docs_url.is_empty() {
        lines.push(format!("{}Docs URL: {}", indent(1), config.docs_url));
    }

    lines.push(String::new());
    lines.push("Languages".to_string());
    lines.push(format!("{}(default)", indent(1)));
    for language in &config.languages {
        lines.push(format!("{}{}", indent(1), language));
    }

    if !config.splash_links.is_empty() {
        let context = RenderContext::default();
        let urls = UrlResolver::new(config, &context);
        lines.push(String::new());
        lines.push("Splash links".to_string());
        for (i, link) in config.splash_links.iter().enumerate() {
            lines.push(format!(
                "{}{} {} \u{2192} {}",
                indent(1),
                format_index(i + 1),
                link.label,
                urls.doc(&link.doc)
            ));
        }
    }

    lines.push(String::new());
    if config.users.is_empty() {
        lines.push("Users (none, showcase hidden)".to_string());
    } else {
        let pinned = pinned_users(&config.users).count();
        lines.push(format!("Users ({}, {} pinned)", config.users.len(), pinned));
        for (i, user) in config.users.iter().enumerate() {
            let marker = if user.pinned { " (pinned)" } else { "" };
            lines.push(format!(
                "{}{} {}{}",
                indent(1),
                format_index(i + 1),
                user.caption,
                marker
            ));
            lines.push(format!("{}{}", indent(2), user.info_link));
        }
    }

    lines
}

/// Print config summary to stdout.
pub fn print_check_output(config: &SiteConfig) {
    for line in format_check_output(config) {
        println!("{}", line);
    }
}

// ============================================================================
// generate
// ============================================================================

/// Format the list of generated pages with a trailing summary line.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = Vec::new();
    let mut homepages = 0;
    let mut users_pages = 0;

    for page in &report.pages {
        let label = match page.kind {
            PageKind::Home => {
                homepages += 1;
                "Home"
            }
            PageKind::Users => {
                users_pages += 1;
                "Users"
            }
        };
        let language = if page.language.is_empty() {
            String::new()
        } else {
            format!(" [{}]", page.language)
        };
        lines.push(format!(
            "{}{} \u{2192} {}",
            label,
            language,
            page.path.display()
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Generated {}, {}, {}",
        plural(homepages, "homepage", "homepages"),
        plural(users_pages, "users page", "users pages"),
        plural(report.assets_copied, "static file", "static files"),
    ));
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
