//! Configuration types for mermaid-lint runs.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining check and manual settings.
//! - [`CheckConfig`] - Failure policy and the file extensions to scan.
//! - [`ManualConfig`] - A sections directory and its navigation structure.
//!
//! # Example
//!
//! ```
//! # use mermaid_lint::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(!config.check().deny_errors());
//! assert_eq!(config.check().extensions(), ["md", "markdown"]);
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

fn default_extensions() -> Vec<String> {
    vec!["md".to_string(), "markdown".to_string()]
}

fn default_sections_dir() -> PathBuf {
    PathBuf::from("sections")
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Check policy section.
    #[serde(default)]
    check: CheckConfig,

    /// Manual structure section.
    #[serde(default)]
    manual: ManualConfig,
}

impl AppConfig {
    /// Returns the check configuration.
    pub fn check(&self) -> &CheckConfig {
        &self.check
    }

    /// Returns the manual configuration.
    pub fn manual(&self) -> &ManualConfig {
        &self.manual
    }
}

/// Failure policy and document discovery settings.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckConfig {
    /// Fail the run when any block has errors.
    #[serde(default)]
    deny_errors: bool,

    /// Fail the run when any block has warnings.
    #[serde(default)]
    deny_warnings: bool,

    /// Extensions of files picked up when walking directories.
    #[serde(default = "default_extensions")]
    extensions: Vec<String>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            deny_errors: false,
            deny_warnings: false,
            extensions: default_extensions(),
        }
    }
}

impl CheckConfig {
    /// Creates a new [`CheckConfig`] with the default extensions.
    pub fn new(deny_errors: bool, deny_warnings: bool) -> Self {
        Self {
            deny_errors,
            deny_warnings,
            ..Self::default()
        }
    }

    /// Replace the scanned file extensions.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn deny_errors(&self) -> bool {
        self.deny_errors
    }

    pub fn deny_warnings(&self) -> bool {
        self.deny_warnings
    }

    /// Extensions without the leading dot.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether `path` has one of the configured extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|wanted| wanted == ext))
    }
}

/// A documentation manual made of section files.
///
/// Sections are validated in navigation order: groups in order, items in
/// order within each group.
#[derive(Debug, Clone, Deserialize)]
pub struct ManualConfig {
    /// Directory holding the section files.
    #[serde(default = "default_sections_dir")]
    sections_dir: PathBuf,

    /// Navigation groups.
    #[serde(default)]
    nav: Vec<NavGroup>,
}

impl Default for ManualConfig {
    fn default() -> Self {
        Self {
            sections_dir: default_sections_dir(),
            nav: Vec::new(),
        }
    }
}

impl ManualConfig {
    /// Creates a new [`ManualConfig`].
    ///
    /// # Arguments
    ///
    /// * `sections_dir` - Directory that item files are resolved against.
    /// * `nav` - Navigation groups in display order.
    pub fn new(sections_dir: impl Into<PathBuf>, nav: Vec<NavGroup>) -> Self {
        Self {
            sections_dir: sections_dir.into(),
            nav,
        }
    }

    pub fn sections_dir(&self) -> &Path {
        &self.sections_dir
    }

    pub fn nav(&self) -> &[NavGroup] {
        &self.nav
    }

    /// `true` when no navigation item names a section file.
    pub fn is_empty(&self) -> bool {
        self.section_files().next().is_none()
    }

    /// Section file names in navigation order.
    pub fn section_files(&self) -> impl Iterator<Item = &str> {
        self.nav
            .iter()
            .flat_map(|group| group.items.iter())
            .filter_map(NavItem::file)
    }
}

/// A titled group of navigation items.
#[derive(Debug, Clone, Deserialize)]
pub struct NavGroup {
    title: String,

    #[serde(default)]
    icon: Option<String>,

    /// Whether the group starts expanded in the rendered navigation.
    #[serde(default)]
    expanded: bool,

    #[serde(default)]
    items: Vec<NavItem>,
}

impl NavGroup {
    pub fn new(title: impl Into<String>, items: Vec<NavItem>) -> Self {
        Self {
            title: title.into(),
            icon: None,
            expanded: false,
            items,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn expanded(&self) -> bool {
        self.expanded
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }
}

/// One navigation entry. Items without a file are headings only.
#[derive(Debug, Clone, Deserialize)]
pub struct NavItem {
    id: String,
    title: String,
    #[serde(default)]
    file: Option<String>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>, file: Option<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            file,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Section file name, relative to the sections directory.
    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}
