//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root.
//! Configuration is constructed once at startup and passed by reference to
//! every stage that needs it — there is no ambient global site object.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the content root:
//!
//! ```text
//! content/
//! ├── config.toml          # Site config (optional, stock defaults apply)
//! ├── post/
//! │   └── welcome.mdx
//! └── snippets/
//!     └── use-debounce.mdx
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! name = "My Site"
//! base_url = "https://example.com"   # absolute, no trailing slash
//! author = ""
//! description = ""
//!
//! [[navigation]]
//! route = "/"
//! label = "Home"
//!
//! [[navigation]]
//! route = "/post"
//! label = "Post"
//!
//! [[navigation]]
//! route = "/snippets"
//! label = "Snippets"
//!
//! [[category]]
//! name = "posts"
//! dir = "post"                       # content/post/**/*.mdx
//! route = "post"                     # /post/<slug>
//! required = ["title", "summary", "publishedAt", "readTime"]
//! page_size = 4
//!
//! [[category]]
//! name = "snippets"
//! dir = "snippets"
//! route = "snippets"
//! required = ["title", "snippetCount", "subtitle", "image"]
//! page_size = 10
//!
//! [robots]
//! user_agent = "*"
//! allow = ["/"]
//! disallow = []
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Note that
//! `[[navigation]]` and `[[category]]` are arrays: specifying any entry
//! replaces the whole default list.
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
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
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site identity: name, base URL, author.
    pub site: SiteInfo,
    /// Top-level routes, in display order. These become the sitemap's
    /// fixed entries.
    pub navigation: Vec<NavEntry>,
    /// Content categories, in display order.
    #[serde(rename = "category")]
    pub categories: Vec<CategoryConfig>,
    /// Crawler rules for robots.txt.
    pub robots: RobotsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteInfo::default(),
            navigation: default_navigation(),
            categories: default_categories(),
            robots: RobotsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.site.base_url;
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::Validation(
                "site.base_url must be an absolute http(s) URL".into(),
            ));
        }
        if url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with a slash".into(),
            ));
        }
        if self.categories.is_empty() {
            return Err(ConfigError::Validation(
                "at least one [[category]] is required".into(),
            ));
        }
        for category in &self.categories {
            if category.name.is_empty() || category.dir.is_empty() || category.route.is_empty() {
                return Err(ConfigError::Validation(
                    "category name, dir and route must be non-empty".into(),
                ));
            }
            if category.page_size == 0 {
                return Err(ConfigError::Validation(format!(
                    "category '{}': page_size must be at least 1",
                    category.name
                )));
            }
        }
        let mut names: Vec<&str> = self.categories.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        if names.len() != self.categories.len() {
            return Err(ConfigError::Validation(
                "category names must be unique".into(),
            ));
        }
        Ok(())
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.name == name)
    }
}

/// Site identity, used for manifest URLs and robots.txt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfo {
    /// Site display name.
    pub name: String,
    /// Absolute base URL, no trailing slash. Every manifest URL is
    /// `base_url` + route.
    pub base_url: String,
    /// Author name.
    pub author: String,
    /// One-line site description.
    pub description: String,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            name: "My Site".to_string(),
            base_url: "https://example.com".to_string(),
            author: String::new(),
            description: String::new(),
        }
    }
}

/// One top-level navigation route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NavEntry {
    /// Route path starting with `/` (`"/"` for home).
    pub route: String,
    /// Display label.
    pub label: String,
}

fn default_navigation() -> Vec<NavEntry> {
    [("/", "Home"), ("/post", "Post"), ("/snippets", "Snippets")]
        .into_iter()
        .map(|(route, label)| NavEntry {
            route: route.to_string(),
            label: label.to_string(),
        })
        .collect()
}

/// One content category: where its files live, how its routes are built,
/// and which metadata fields an item must carry to be listable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CategoryConfig {
    /// Category name, used for the routes manifest filename and CLI lookup.
    pub name: String,
    /// Directory under the content root holding this category's `.mdx` files.
    pub dir: String,
    /// URL route prefix: items publish at `/<route>/<slug>`.
    pub route: String,
    /// Metadata fields that must be present for an item to be listable.
    pub required: Vec<String>,
    /// Default listing page size.
    pub page_size: usize,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            dir: String::new(),
            route: String::new(),
            required: Vec::new(),
            page_size: 10,
        }
    }
}

fn required_fields(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig {
            name: "posts".to_string(),
            dir: "post".to_string(),
            route: "post".to_string(),
            required: required_fields(&["title", "summary", "publishedAt", "readTime"]),
            page_size: 4,
        },
        CategoryConfig {
            name: "snippets".to_string(),
            dir: "snippets".to_string(),
            route: "snippets".to_string(),
            required: required_fields(&["title", "snippetCount", "subtitle", "image"]),
            page_size: 10,
        },
    ]
}

/// Crawler rules for robots.txt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RobotsConfig {
    /// User-agent the rules apply to.
    pub user_agent: String,
    /// Allowed path prefixes.
    pub allow: Vec<String>,
    /// Disallowed path prefixes.
    pub disallow: Vec<String>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: Vec::new(),
        }
    }
}

/// Load config from `config.toml` in the content root.
///
/// Returns defaults if the file doesn't exist. A config file that is
/// present but broken is a real error and stops the build.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A documented stock `config.toml`, printed by `inkpress gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# inkpress site configuration
# All options are optional - the values below are the stock defaults.

[site]
# Site display name, shown in generated manifests.
name = "My Site"
# Absolute base URL of the published site. No trailing slash.
base_url = "https://example.com"
# Author name.
author = ""
# One-line site description.
description = ""

# Top-level routes, in order. These become the sitemap's fixed entries,
# stamped with the build date. Specifying any [[navigation]] entry
# replaces the whole default list.

[[navigation]]
route = "/"
label = "Home"

[[navigation]]
route = "/post"
label = "Post"

[[navigation]]
route = "/snippets"
label = "Snippets"

# Content categories. Each category's .mdx files live under
# <content-root>/<dir> and publish at /<route>/<slug>. The `required`
# list is the metadata contract: items missing any of these fields are
# excluded from listings (presence is the test, not truthiness).
# Specifying any [[category]] entry replaces the whole default list.

[[category]]
name = "posts"
dir = "post"
route = "post"
required = ["title", "summary", "publishedAt", "readTime"]
page_size = 4

[[category]]
name = "snippets"
dir = "snippets"
route = "snippets"
required = ["title", "snippetCount", "subtitle", "image"]
page_size = 10

[robots]
# Crawler rules written to robots.txt.
user_agent = "*"
allow = ["/"]
disallow = []
"##
}
