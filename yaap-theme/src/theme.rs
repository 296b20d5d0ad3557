//! Theme value objects

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Version written into every freshly generated `theme.json`.
pub const INITIAL_VERSION: &str = "1.0.0";

/// Thumbnail path written into every freshly generated `theme.json`.
pub const THUMBNAIL_PATH: &str = "assets/images/thumbnail.png";

/// A named theme and its root directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    name: String,
    root: PathBuf,
}

impl Theme {
    /// Theme whose root is `<themes_dir>/<name>`.
    pub fn new(name: impl Into<String>, themes_dir: &Path) -> Self {
        let name = name.into();
        let root = themes_dir.join(&name);
        Self { name, root }
    }

    /// Theme with an explicit root directory.
    pub fn with_root(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
        }
    }

    /// Theme name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Theme root directory.
    #[must_use]
    pub fn root_directory_path(&self) -> &Path {
        &self.root
    }

    /// Absolute path of an item relative to the theme root.
    #[must_use]
    pub fn path_for_item(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }
}

/// Everything one generation run knows about the theme being created.
///
/// Built once after the prompts and passed by reference to every step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeContext {
    theme: Theme,
    description: String,
    author: String,
}

impl ThemeContext {
    /// Create a context for `theme`.
    pub fn new(theme: Theme, description: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            theme,
            description: description.into(),
            author: author.into(),
        }
    }

    /// The theme being generated.
    #[must_use]
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Theme description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Theme author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Metadata for `theme.json`.
    #[must_use]
    pub fn metadata(&self) -> ThemeMetadata {
        ThemeMetadata {
            name: self.theme.name().to_string(),
            description: self.description().to_string(),
            author: self.author().to_string(),
            version: INITIAL_VERSION.to_string(),
            thumbnail: THUMBNAIL_PATH.to_string(),
        }
    }
}

/// Contents of `theme.json`. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeMetadata {
    /// Theme name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Author name
    pub author: String,
    /// Theme version
    pub version: String,
    /// Thumbnail path relative to the theme root
    pub thumbnail: String,
}

impl ThemeMetadata {
    /// Pretty-printed JSON (four-space indent, slashes unescaped), no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(crate::json::to_pretty_string(self)?)
    }
}
