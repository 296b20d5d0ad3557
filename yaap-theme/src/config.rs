//! Theme generator configuration
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `YAAP_THEME_` prefix, nested keys split on `__`)
//! 2. `<project>/config/theme.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config/theme.toml
//! themes_dir = "themes"
//! app_dir = "app"
//! manifest = "package.json"
//!
//! [container_dir]
//! assets = "assets"
//! layout = "views/layouts"
//! ```
//!
//! Any container role left out keeps its default sub-path.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::template::TemplateSource;

/// Project-relative location of the configuration file.
pub const CONFIG_FILE: &str = "config/theme.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "YAAP_THEME_";

/// Relative sub-paths of each logical role inside a theme root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerFolders {
    /// Frontend sources (images, fonts, styles, scripts)
    pub assets: String,
    /// Translation files
    pub lang: String,
    /// Layout views
    pub layout: String,
    /// Partial views
    pub partial: String,
    /// Regular views
    pub view: String,
}

impl Default for ContainerFolders {
    fn default() -> Self {
        Self {
            assets: "assets".to_string(),
            lang: "lang".to_string(),
            layout: "views/layouts".to_string(),
            partial: "views/partials".to_string(),
            view: "views".to_string(),
        }
    }
}

/// Generator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Directory holding all themes, relative to the project root
    pub themes_dir: PathBuf,

    /// Host application source directory, relative to the project root
    pub app_dir: PathBuf,

    /// Frontend package manifest, relative to the project root
    pub manifest: PathBuf,

    /// Override for the shipped templates root
    pub templates_dir: Option<PathBuf>,

    /// Role to sub-path mapping
    pub container_dir: ContainerFolders,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            themes_dir: PathBuf::from("themes"),
            app_dir: PathBuf::from("app"),
            manifest: PathBuf::from("package.json"),
            templates_dir: None,
            container_dir: ContainerFolders::default(),
        }
    }
}

impl ThemeConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// A missing `config/theme.toml` is not an error; defaults apply.
    pub fn load(project_root: &Path) -> Result<Self> {
        Self::figment(project_root)
            .extract()
            .map_err(|e| Box::new(e).into())
    }

    /// The layered provider used by [`ThemeConfig::load`].
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(project_root.join(CONFIG_FILE)))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Absolute themes directory.
    #[must_use]
    pub fn themes_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.themes_dir)
    }

    /// Absolute host application directory.
    #[must_use]
    pub fn app_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.app_dir)
    }

    /// Absolute manifest path.
    #[must_use]
    pub fn manifest_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.manifest)
    }

    /// Template source: the configured directory, else the embedded templates.
    #[must_use]
    pub fn template_source(&self, project_root: &Path) -> TemplateSource {
        self.templates_dir.as_ref().map_or(TemplateSource::Bundled, |dir| {
            TemplateSource::directory(project_root.join(dir))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ThemeConfig::default();
        assert_eq!(config.themes_dir, PathBuf::from("themes"));
        assert_eq!(config.app_dir, PathBuf::from("app"));
        assert_eq!(config.manifest, PathBuf::from("package.json"));
        assert!(config.templates_dir.is_none());
    }

    #[test]
    fn test_container_defaults() {
        let folders = ContainerFolders::default();
        assert_eq!(folders.assets, "assets");
        assert_eq!(folders.lang, "lang");
        assert_eq!(folders.layout, "views/layouts");
        assert_eq!(folders.partial, "views/partials");
        assert_eq!(folders.view, "views");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ThemeConfig::load(dir.path()).unwrap();
        assert_eq!(config, ThemeConfig::default());
    }

    #[test]
    fn test_partial_container_mapping_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "themes_dir = \"resources/themes\"\n\n[container_dir]\nlayout = \"layouts\"\n",
        )
        .unwrap();

        let config = ThemeConfig::load(dir.path()).unwrap();
        assert_eq!(config.themes_dir, PathBuf::from("resources/themes"));
        assert_eq!(config.container_dir.layout, "layouts");
        assert_eq!(config.container_dir.partial, "views/partials");
        assert_eq!(config.container_dir.assets, "assets");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("config")).unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "themes_dir = [1, 2]\n").unwrap();

        let err = ThemeConfig::load(dir.path()).unwrap_err();
        assert!(matches!(err, crate::ThemeError::Config(_)));
    }

    #[test]
    fn test_paths_resolve_against_project_root() {
        let config = ThemeConfig::default();
        let root = Path::new("/srv/app");
        assert_eq!(config.themes_path(root), PathBuf::from("/srv/app/themes"));
        assert_eq!(config.app_path(root), PathBuf::from("/srv/app/app"));
        assert_eq!(config.manifest_path(root), PathBuf::from("/srv/app/package.json"));
        assert_eq!(config.template_source(root), TemplateSource::Bundled);
    }

    #[test]
    fn test_templates_dir_override() {
        let config = ThemeConfig {
            templates_dir: Some(PathBuf::from("stubs/theme")),
            ..ThemeConfig::default()
        };
        assert_eq!(
            config.template_source(Path::new("/srv/app")),
            TemplateSource::directory("/srv/app/stubs/theme")
        );
    }
}
