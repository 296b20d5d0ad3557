//! # yaap-theme
//!
//! Scaffolding core for YAAP themes: a theme is a directory of Blade views,
//! translations, frontend assets and Vite/Tailwind build configuration.
//!
//! A run has three steps:
//!
//! 1. [`validate::validate_name`] and [`validate::can_generate`] decide
//!    whether the theme may be (re)created.
//! 2. [`scaffold::Scaffolder`] renders every entry of
//!    [`plan::generation_plan`] through [`template::TemplateRenderer`] and
//!    writes it, skipping files that already exist unless forced.
//! 3. [`dependencies::merge_dependencies`] adds the build tooling to the
//!    project's `package.json`.
//!
//! ```rust,no_run
//! use std::path::Path;
//! use yaap_theme::prelude::*;
//!
//! # fn main() -> yaap_theme::Result<()> {
//! let project = Path::new(".");
//! let config = ThemeConfig::load(project)?;
//! let fs = LocalFs::new();
//!
//! let themes = config.themes_path(project);
//! validate_name("aurora", &themes, &fs, false)?;
//!
//! let ctx = ThemeContext::new(Theme::new("aurora", &themes), "A new theme", "Jo");
//! let layout = Layout::new(ctx.theme().root_directory_path(), config.app_path(project));
//! let scaffolder = Scaffolder::new(&fs, config.template_source(project), layout, false);
//! scaffolder.generate(&generation_plan(&config.container_dir), &ctx)?;
//!
//! merge_dependencies(&fs, &config.manifest_path(project), FRONTEND_DEV_DEPENDENCIES)?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod dependencies;
pub mod error;
pub mod fs;
mod json;
pub mod plan;
pub mod scaffold;
pub mod template;
pub mod theme;
pub mod validate;

pub use error::{Result, ThemeError};

/// Commonly used types
pub mod prelude {
    pub use crate::config::{ContainerFolders, ThemeConfig};
    pub use crate::dependencies::{merge_dependencies, FRONTEND_DEV_DEPENDENCIES};
    pub use crate::error::{Result, ThemeError};
    pub use crate::fs::{FileSystem, LocalFs};
    pub use crate::plan::{generation_plan, HostIntegration, Layout, PlanEntry, Source, Target};
    pub use crate::scaffold::{GeneratedFile, ScaffoldWriter, Scaffolder, WriteOutcome};
    pub use crate::template::{substitute, TemplateRenderer, TemplateSource, THEME_NAME_TOKEN};
    pub use crate::theme::{Theme, ThemeContext, ThemeMetadata};
    pub use crate::validate::{can_generate, validate_name, Reporter};
}
