//! Site configuration module.
//!
//! Handles loading and validating the website's `config.toml`. Every field
//! has a default, so a missing file yields a working (if bare) homepage.
//!
//! ## Config File Location
//!
//! ```text
//! website/
//! ├── config.toml     # Site config (optional)
//! └── static/         # Copied verbatim to the output root
//!     └── img/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! title = "Granary"
//! tagline = "A machine learning model management tool"
//! base_url = "/"             # Must start and end with "/"
//! docs_url = "docs"          # Empty for docs at the site root
//! languages = ["fr"]         # Extra locales; the default page is always built
//! static_dir = "static"
//!
//! [colors]
//! primary = "#30475e"
//! secondary = "#5c7c99"
//!
//! [[splash_links]]
//! label = "Get Started"
//! doc = "getting-started.html"
//!
//! [[users]]
//! caption = "Azavea"
//! image = "/img/azavea.png"
//! info_link = "https://www.azavea.com"
//! pinned = true
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site/product name.
    pub title: String,
    /// Short descriptive text shown under the logo.
    pub tagline: String,
    /// Root path prefix for every generated link.
    pub base_url: String,
    /// Subpath segment for documentation. Empty means docs live at the root.
    pub docs_url: String,
    /// Additional locales. The default (unlocalized) homepage is always rendered.
    pub languages: Vec<String>,
    /// Directory (relative to the source root) copied to the output root.
    pub static_dir: String,
    /// Brand colors, injected as CSS custom properties.
    pub colors: ColorConfig,
    /// Promo buttons shown in the splash, each pointing at a doc.
    pub splash_links: Vec<SplashLink>,
    /// Adopters; pinned entries appear in the homepage showcase.
    pub users: Vec<UserEntry>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Granary".to_string(),
            tagline: String::new(),
            base_url: "/".to_string(),
            docs_url: String::new(),
            languages: Vec::new(),
            static_dir: "static".to_string(),
            colors: ColorConfig::default(),
            splash_links: Vec::new(),
            users: Vec::new(),
        }
    }
}

/// A user of the project, listed in the showcase and on the users page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserEntry {
    /// External URL; also the entry's identity, so it must be unique.
    pub info_link: String,
    /// Logo URL.
    pub image: String,
    /// Display text, used as the image's alt and title.
    pub caption: String,
    /// Whether the entry appears on the homepage.
    #[serde(default)]
    pub pinned: bool,
}

/// A splash button linking to a documentation page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SplashLink {
    pub label: String,
    /// Document name relative to the docs root, e.g. `"getting-started.html"`.
    pub doc: String,
    #[serde(default)]
    pub new_tab: bool,
}

/// Brand colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Header background, buttons, links.
    pub primary: String,
    /// Dark block backgrounds and hover states.
    pub secondary: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#30475e".to_string(),
            secondary: "#5c7c99".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate the preconditions URL resolution relies on.
    ///
    /// URLs are built by plain concatenation, so `base_url` must carry its own
    /// leading and trailing slash, and `docs_url`/languages must carry none.
    /// Languages also name output directories and are limited to locale codes.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with('/')
            || !self.base_url.ends_with('/')
            || (self.base_url != "/" && self.base_url.contains("//"))
        {
            return Err(ConfigError::Validation(format!(
                "base_url must start and end with a single '/' and contain no empty segments, got {:?}",
                self.base_url
            )));
        }
        if !self.docs_url.is_empty() && !is_bare_segment(&self.docs_url) {
            return Err(ConfigError::Validation(format!(
                "docs_url must not start or end with '/' or contain empty segments, got {:?}",
                self.docs_url
            )));
        }

        let mut seen_languages = HashSet::new();
        for language in &self.languages {
            validate_language(language)?;
            if !seen_languages.insert(language.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "language {:?} is listed twice",
                    language
                )));
            }
        }

        for link in &self.splash_links {
            if link.doc.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "splash link {:?} has an empty doc",
                    link.label
                )));
            }
        }

        let mut seen_users = HashSet::new();
        for user in &self.users {
            if user.info_link.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "user {:?} has an empty info_link",
                    user.caption
                )));
            }
            if !seen_users.insert(user.info_link.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "users.info_link must be unique, {:?} appears more than once",
                    user.info_link
                )));
            }
        }

        Ok(())
    }
}

/// Check a language code: ASCII letters, digits, `-` and `_` only (`fr`, `pt-BR`).
///
/// Shared by config validation and the `resolve --language` flag.
pub fn validate_language(language: &str) -> Result<(), ConfigError> {
    let is_locale = !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if is_locale {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "language must be a locale code like \"fr\" or \"pt-BR\", got {:?}",
            language
        )))
    }
}

/// A relative path with no leading, trailing, or doubled `/`.
fn is_bare_segment(segment: &str) -> bool {
    segment.split('/').all(|part| !part.is_empty())
}

// =============================================================================
// Config loading
// =============================================================================

/// Load config from `config.toml` in the given directory.
///
/// A missing file yields the defaults. Unknown keys are rejected and the
/// result is validated.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        tracing::debug!(path = %config_path.display(), "Loading site config");
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        tracing::debug!(path = %config_path.display(), "No site config, using defaults");
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Granary Site Configuration
# ==========================
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Site/product name, used in page titles and the "More ... Users" button.
title = "Granary"

# Short descriptive text shown under the logo.
tagline = ""

# Root path prefix for every generated link. Must start and end with "/".
base_url = "/"

# Subpath for documentation pages, without slashes. Empty = docs at base_url.
docs_url = ""

# Extra locales to render under <output>/<lang>/.
# The default homepage is always rendered at the output root.
languages = []

# Directory (relative to this file) copied verbatim to the output root.
static_dir = "static"

# ---------------------------------------------------------------------------
# Brand colors
# ---------------------------------------------------------------------------
[colors]
primary = "#30475e"
secondary = "#5c7c99"

# ---------------------------------------------------------------------------
# Splash buttons (optional, repeatable)
# ---------------------------------------------------------------------------
# [[splash_links]]
# label = "Get Started"
# doc = "getting-started.html"   # resolved under base_url/docs_url/lang/
# new_tab = false

# ---------------------------------------------------------------------------
# Users (optional, repeatable). Pinned users appear on the homepage;
# every user appears on users.html. info_link must be unique.
# ---------------------------------------------------------------------------
# [[users]]
# caption = "Azavea"
# image = "/img/azavea.png"
# info_link = "https://www.azavea.com"
# pinned = true
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-primary: {primary};
    --color-secondary: {secondary};
}}"#,
        primary = colors.primary,
        secondary = colors.secondary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::user;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Granary");
        assert_eq!(config.base_url, "/");
        assert_eq!(config.docs_url, "");
        assert_eq!(config.static_dir, "static");
        assert!(config.users.is_empty());
        assert!(config.languages.is_empty());
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
tagline = "Model management"
base_url = "/granary/"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.tagline, "Model management");
        assert_eq!(config.base_url, "/granary/");
        // Defaults preserved
        assert_eq!(config.title, "Granary");
        assert_eq!(config.colors.primary, "#30475e");
    }

    #[test]
    fn parse_users_and_splash_links() {
        let toml = r#"
[[splash_links]]
label = "Get Started"
doc = "getting-started.html"

[[users]]
caption = "Azavea"
image = "/img/azavea.png"
info_link = "https://www.azavea.com"
pinned = true

[[users]]
caption = "Someone"
image = "/img/someone.png"
info_link = "https://example.com"
"#;
        let config: SiteConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.splash_links.len(), 1);
        assert!(!config.splash_links[0].new_tab);
        assert_eq!(config.users.len(), 2);
        assert!(config.users[0].pinned);
        // pinned defaults to false
        assert!(!config.users[1].pinned);
    }

    #[test]
    fn missing_users_is_empty() {
        let config: SiteConfig = toml::from_str(r#"title = "X""#).unwrap();
        assert!(config.users.is_empty());
    }

    // =========================================================================
    // Unknown key rejection
    // =========================================================================

    #[test]
    fn unknown_key_rejected() {
        let result: Result<SiteConfig, _> = toml::from_str(r#"baseUrl = "/""#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("unknown field"));
    }

    #[test]
    fn unknown_user_key_rejected() {
        let toml = r#"
[[users]]
caption = "A"
image = "a.png"
info_link = "https://a"
pined = true
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn user_missing_required_field_rejected() {
        let toml = r#"
[[users]]
caption = "A"
image = "a.png"
"#;
        let result: Result<SiteConfig, _> = toml::from_str(toml);
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn validate_default_config_passes() {
        assert!(SiteConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_base_url_needs_both_slashes() {
        let mut config = SiteConfig::default();
        config.base_url = "/site".to_string();
        assert!(config.validate().is_err());

        config.base_url = "site/".to_string();
        assert!(config.validate().is_err());

        config.base_url = "/site/".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_docs_url_rejects_slashes() {
        let mut config = SiteConfig::default();
        config.docs_url = "docs/".to_string();
        assert!(config.validate().is_err());

        config.docs_url = "/docs".to_string();
        assert!(config.validate().is_err());

        config.docs_url = "api/docs".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_languages() {
        let mut config = SiteConfig::default();
        config.languages = vec!["fr".to_string(), String::new()];
        assert!(config.validate().is_err());

        config.languages = vec!["fr/ca".to_string()];
        assert!(config.validate().is_err());

        config.languages = vec!["fr".to_string(), "fr".to_string()];
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("twice"));

        config.languages = vec!["fr".to_string(), "pt-BR".to_string(), "zh_Hans".to_string()];
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_languages_rejects_path_components() {
        for bad in ["..", ".", "fr\\ca", "fr ca", "fr/"] {
            let config = SiteConfig {
                languages: vec![bad.to_string()],
                ..SiteConfig::default()
            };
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{bad:?} accepted"
            );
        }
    }

    #[test]
    fn validate_language_flag_value() {
        assert!(validate_language("fr").is_ok());
        assert!(validate_language("fr/").is_err());
        assert!(validate_language("..").is_err());
        assert!(validate_language("").is_err());
    }

    #[test]
    fn validate_rejects_empty_url_segments() {
        let mut config = SiteConfig::default();
        config.base_url = "//".to_string();
        assert!(config.validate().is_err());

        config.base_url = "/site//x/".to_string();
        assert!(config.validate().is_err());

        config.base_url = "/".to_string();
        config.docs_url = "api//docs".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_duplicate_info_link() {
        let mut config = SiteConfig::default();
        config.users = vec![user("https://a", true), user("https://a", false)];
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("https://a"));
    }

    #[test]
    fn validate_rejects_empty_splash_doc() {
        let mut config = SiteConfig::default();
        config.splash_links = vec![SplashLink {
            label: "Go".to_string(),
            doc: String::new(),
            new_tab: false,
        }];
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // load_config
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.title, "Granary");
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            r#"
title = "Granary"
tagline = "Track your models"
docs_url = "docs"
"#,
        )
        .unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.tagline, "Track your models");
        assert_eq!(config.docs_url, "docs");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "this is not valid toml [[[").unwrap();
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_validates_values() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), r#"base_url = "granary""#).unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    // =========================================================================
    // stock_config_toml / CSS
    // =========================================================================

    #[test]
    fn stock_config_toml_roundtrips_to_defaults() {
        let config: SiteConfig = toml::from_str(stock_config_toml()).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.title, defaults.title);
        assert_eq!(config.base_url, defaults.base_url);
        assert_eq!(config.static_dir, defaults.static_dir);
        assert_eq!(config.colors.primary, defaults.colors.primary);
        assert!(config.users.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn stock_config_toml_documents_repeatable_sections() {
        let content = stock_config_toml();
        assert!(content.contains("[[splash_links]]"));
        assert!(content.contains("[[users]]"));
        assert!(content.contains("[colors]"));
    }

    #[test]
    fn generate_css_uses_config_colors() {
        let colors = ColorConfig {
            primary: "#111111".to_string(),
            secondary: "#222222".to_string(),
        };
        let css = generate_color_css(&colors);
        assert!(css.contains("--color-primary: #111111"));
        assert!(css.contains("--color-secondary: #222222"));
    }
}
