//! The fixed generation plan
//!
//! Lists every file a new theme consists of and where its content comes
//! from. The plan is plain data so it can be inspected and diffed without
//! touching the disk.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::ContainerFolders;

/// Files placed outside the theme root, inside the host application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostIntegration {
    /// The `AppLayout` Blade view component class
    ViewComponent,
}

impl HostIntegration {
    /// Path relative to the host application directory.
    #[must_use]
    pub const fn relative_path(self) -> &'static str {
        match self {
            Self::ViewComponent => "View/Components/AppLayout.php",
        }
    }
}

/// Where a plan entry is written
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// Path relative to the theme root
    Theme(String),
    /// A named integration point in the host application
    Host(HostIntegration),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Theme(path) => f.write_str(path),
            Self::Host(host) => write!(f, "<app>/{}", host.relative_path()),
        }
    }
}

/// Where a plan entry's content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// Text template rendered with placeholder substitution
    Template(&'static str),
    /// File copied byte for byte
    Binary(&'static str),
    /// Empty file (directory keep marker)
    Empty,
    /// Generated `theme.json`
    Metadata,
}

/// One file of the plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanEntry {
    /// Output location
    pub target: Target,
    /// Content source
    pub source: Source,
}

impl PlanEntry {
    fn theme(path: String, source: Source) -> Self {
        Self {
            target: Target::Theme(path),
            source,
        }
    }
}

/// Resolved output roots for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Theme root directory
    pub theme_root: PathBuf,
    /// Host application source directory
    pub app_dir: PathBuf,
}

impl Layout {
    /// Create a layout.
    pub fn new(theme_root: impl Into<PathBuf>, app_dir: impl Into<PathBuf>) -> Self {
        Self {
            theme_root: theme_root.into(),
            app_dir: app_dir.into(),
        }
    }

    /// Absolute path of a host integration file.
    #[must_use]
    pub fn host_path(&self, host: HostIntegration) -> PathBuf {
        self.app_dir.join(host.relative_path())
    }

    /// Absolute path of `target`.
    #[must_use]
    pub fn resolve(&self, target: &Target) -> PathBuf {
        match target {
            Target::Theme(path) => self.theme_root.join(Path::new(path)),
            Target::Host(host) => self.host_path(*host),
        }
    }
}

fn under(prefix: &str, rest: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        rest.to_string()
    } else {
        format!("{prefix}/{rest}")
    }
}

/// The ordered list of files making up a new theme.
#[must_use]
pub fn generation_plan(folders: &ContainerFolders) -> Vec<PlanEntry> {
    use Source::{Binary, Empty, Metadata, Template};

    let assets = folders.assets.as_str();

    vec![
        PlanEntry::theme("config.php".into(), Template("common/config/config.php")),
        PlanEntry::theme("theme.json".into(), Metadata),
        PlanEntry::theme(
            under(&folders.lang, "en/labels.php"),
            Template("common/lang/labels.php"),
        ),
        PlanEntry::theme(
            under(&folders.partial, "header.blade.php"),
            Template("common/views/partials/header.blade.php"),
        ),
        PlanEntry::theme(
            under(&folders.partial, "footer.blade.php"),
            Template("common/views/partials/footer.blade.php"),
        ),
        PlanEntry::theme(
            under(&folders.layout, "master.blade.php"),
            Template("tailwind/views/layouts/master.blade.php"),
        ),
        PlanEntry {
            target: Target::Host(HostIntegration::ViewComponent),
            source: Template("tailwind/app/AppLayout.stub"),
        },
        PlanEntry::theme(
            under(&folders.view, "hello.blade.php"),
            Template("tailwind/views/hello.blade.php"),
        ),
        PlanEntry::theme(under(assets, "images/.gitkeep"), Empty),
        PlanEntry::theme(under(assets, "images/favicon.png"), Binary("common/favicon.png")),
        PlanEntry::theme(
            under(assets, "styles/_variables.scss"),
            Template("tailwind/styles/_variables.scss"),
        ),
        PlanEntry::theme(under(assets, "styles/app.scss"), Template("tailwind/styles/app.scss")),
        PlanEntry::theme(under(assets, "fonts/.gitkeep"), Empty),
        PlanEntry::theme(under(assets, "scripts/app.ts"), Template("tailwind/scripts/app.ts")),
        PlanEntry::theme(
            under(assets, "scripts/bootstrap.ts"),
            Template("tailwind/scripts/bootstrap.ts"),
        ),
        PlanEntry::theme("vite.config.ts".into(), Template("tailwind/vite.config.ts")),
        PlanEntry::theme("tailwind.config.js".into(), Template("tailwind/tailwind.config.js")),
    ]
}
