//! Template loading and placeholder substitution
//!
//! Templates ship inside the binary; a project may point `templates_dir` at
//! a directory of its own instead. Placeholders look like `%theme_name%` and
//! are replaced literally; there is no template language.

use std::path::PathBuf;

use crate::error::{Result, ThemeError};
use crate::fs::FileSystem;
use crate::theme::ThemeContext;

/// Placeholder always bound to the current theme name.
pub const THEME_NAME_TOKEN: &str = "%theme_name%";

/// Ordered placeholder → value pairs
pub type Substitutions = Vec<(String, String)>;

// Embedded templates (always available)
static BUNDLED_TEMPLATES: &[(&str, &[u8])] = &[
    // Common
    ("common/config/config.php", include_bytes!("../templates/theme/common/config/config.php")),
    ("common/lang/labels.php", include_bytes!("../templates/theme/common/lang/labels.php")),
    (
        "common/views/partials/header.blade.php",
        include_bytes!("../templates/theme/common/views/partials/header.blade.php"),
    ),
    (
        "common/views/partials/footer.blade.php",
        include_bytes!("../templates/theme/common/views/partials/footer.blade.php"),
    ),
    ("common/favicon.png", include_bytes!("../templates/theme/common/favicon.png")),
    // Tailwind
    (
        "tailwind/views/layouts/master.blade.php",
        include_bytes!("../templates/theme/tailwind/views/layouts/master.blade.php"),
    ),
    (
        "tailwind/views/hello.blade.php",
        include_bytes!("../templates/theme/tailwind/views/hello.blade.php"),
    ),
    (
        "tailwind/app/AppLayout.stub",
        include_bytes!("../templates/theme/tailwind/app/AppLayout.stub"),
    ),
    (
        "tailwind/styles/_variables.scss",
        include_bytes!("../templates/theme/tailwind/styles/_variables.scss"),
    ),
    ("tailwind/styles/app.scss", include_bytes!("../templates/theme/tailwind/styles/app.scss")),
    ("tailwind/scripts/app.ts", include_bytes!("../templates/theme/tailwind/scripts/app.ts")),
    (
        "tailwind/scripts/bootstrap.ts",
        include_bytes!("../templates/theme/tailwind/scripts/bootstrap.ts"),
    ),
    ("tailwind/vite.config.ts", include_bytes!("../templates/theme/tailwind/vite.config.ts")),
    (
        "tailwind/tailwind.config.js",
        include_bytes!("../templates/theme/tailwind/tailwind.config.js"),
    ),
];

/// Contents of a template embedded in the binary.
#[must_use]
pub fn bundled_template(name: &str) -> Option<&'static [u8]> {
    BUNDLED_TEMPLATES
        .iter()
        .find(|(bundled, _)| *bundled == name)
        .map(|(_, content)| *content)
}

/// Where templates are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates embedded in the binary
    Bundled,
    /// A templates root on disk
    Directory(PathBuf),
}

impl TemplateSource {
    /// Read templates from `root`.
    pub fn directory(root: impl Into<PathBuf>) -> Self {
        Self::Directory(root.into())
    }
}

/// Loads templates and renders them for a theme
pub struct TemplateRenderer<'a, F: FileSystem> {
    fs: &'a F,
    source: TemplateSource,
}

impl<'a, F: FileSystem> TemplateRenderer<'a, F> {
    /// Create a renderer reading from `source`.
    pub const fn new(fs: &'a F, source: TemplateSource) -> Self {
        Self { fs, source }
    }

    /// Location reported for a named template.
    ///
    /// Embedded templates are reported by name.
    #[must_use]
    pub fn template_path(&self, name: &str) -> PathBuf {
        match &self.source {
            TemplateSource::Bundled => PathBuf::from(name),
            TemplateSource::Directory(root) => root.join(name),
        }
    }

    /// Render `name` with `extra` substitutions plus `%theme_name%`.
    ///
    /// `%theme_name%` always maps to the context's theme name, overriding any
    /// value in `extra`. Other keys in `extra` are used as given.
    pub fn render(&self, name: &str, extra: &[(String, String)], ctx: &ThemeContext) -> Result<String> {
        let content = self.read_template(name)?;
        let content = String::from_utf8(content).map_err(|e| {
            ThemeError::io(
                self.template_path(name),
                std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            )
        })?;

        let mut replacements: Substitutions = extra
            .iter()
            .filter(|(key, _)| key != THEME_NAME_TOKEN)
            .cloned()
            .collect();
        replacements.push((THEME_NAME_TOKEN.to_string(), ctx.theme().name().to_string()));

        Ok(substitute(&content, &replacements))
    }

    /// Raw template bytes, for binary assets copied verbatim.
    pub fn read_binary(&self, name: &str) -> Result<Vec<u8>> {
        self.read_template(name)
    }

    fn read_template(&self, name: &str) -> Result<Vec<u8>> {
        match &self.source {
            TemplateSource::Bundled => bundled_template(name)
                .map(<[u8]>::to_vec)
                .ok_or_else(|| ThemeError::TemplateNotFound(PathBuf::from(name))),
            TemplateSource::Directory(root) => {
                let path = root.join(name);
                if !self.fs.exists(&path) {
                    return Err(ThemeError::TemplateNotFound(path));
                }
                self.fs.read(&path)
            }
        }
    }
}

/// Replace every occurrence of every key in a single left-to-right scan.
///
/// At each position the earliest match wins; on a tie the longest key wins.
/// Replacement text is copied to the output and never scanned again.
#[must_use]
pub fn substitute(content: &str, replacements: &[(String, String)]) -> String {
    let needles: Vec<(&str, &str)> = replacements
        .iter()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, value)| (key.as_str(), value.as_str()))
        .collect();

    if needles.is_empty() {
        return content.to_string();
    }

    let mut out = String::with_capacity(content.len());
    let mut rest = content;

    loop {
        let next = needles
            .iter()
            .filter_map(|&(key, value)| rest.find(key).map(|at| (at, key, value)))
            .min_by(|a, b| a.0.cmp(&b.0).then_with(|| b.1.len().cmp(&a.1.len())));

        let Some((at, key, value)) = next else {
            out.push_str(rest);
            return out;
        };

        out.push_str(&rest[..at]);
        out.push_str(value);
        rest = &rest[at + key.len()..];
    }
}
