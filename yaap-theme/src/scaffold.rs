//! Scaffold writer and plan execution

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::fs::FileSystem;
use crate::plan::{Layout, PlanEntry, Source};
use crate::template::{TemplateRenderer, TemplateSource};
use crate::theme::ThemeContext;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Content was written or overwritten
    Written,
    /// File already existed and force was not set
    Skipped,
}

/// A file produced (or left alone) by a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Absolute path
    pub path: PathBuf,
    /// What happened
    pub outcome: WriteOutcome,
}

/// Writes files, leaving existing ones alone unless forced
pub struct ScaffoldWriter<'a, F: FileSystem> {
    fs: &'a F,
    force: bool,
}

impl<'a, F: FileSystem> ScaffoldWriter<'a, F> {
    /// Create a writer.
    pub const fn new(fs: &'a F, force: bool) -> Self {
        Self { fs, force }
    }

    /// Write `content` to `path`.
    ///
    /// An existing file is skipped unless force is set. Missing parent
    /// directories are created first.
    pub fn write_file(&self, path: &Path, content: &[u8]) -> Result<WriteOutcome> {
        if self.fs.exists(path) && !self.force {
            tracing::debug!(path = %path.display(), "skipping existing file");
            return Ok(WriteOutcome::Skipped);
        }

        if let Some(parent) = path.parent() {
            if !self.fs.is_dir(parent) {
                self.fs.create_dir_all(parent)?;
            }
        }

        self.fs.write(path, content)?;
        tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(WriteOutcome::Written)
    }
}

/// Renders and writes a generation plan
pub struct Scaffolder<'a, F: FileSystem> {
    renderer: TemplateRenderer<'a, F>,
    writer: ScaffoldWriter<'a, F>,
    layout: Layout,
}

impl<'a, F: FileSystem> Scaffolder<'a, F> {
    /// Create a scaffolder.
    pub const fn new(fs: &'a F, templates: TemplateSource, layout: Layout, force: bool) -> Self {
        Self {
            renderer: TemplateRenderer::new(fs, templates),
            writer: ScaffoldWriter::new(fs, force),
            layout,
        }
    }

    /// Content for one plan entry.
    pub fn content_for(&self, entry: &PlanEntry, ctx: &ThemeContext) -> Result<Vec<u8>> {
        match entry.source {
            Source::Template(name) => Ok(self.renderer.render(name, &[], ctx)?.into_bytes()),
            Source::Binary(name) => self.renderer.read_binary(name),
            Source::Empty => Ok(Vec::new()),
            Source::Metadata => Ok(ctx.metadata().to_json()?.into_bytes()),
        }
    }

    /// Write every entry of `plan` in order.
    ///
    /// Stops at the first failure; the error carries the failing path.
    pub fn generate(&self, plan: &[PlanEntry], ctx: &ThemeContext) -> Result<Vec<GeneratedFile>> {
        let mut generated = Vec::with_capacity(plan.len());

        for entry in plan {
            let path = self.layout.resolve(&entry.target);
            let content = self.content_for(entry, ctx)?;
            let outcome = self.writer.write_file(&path, &content)?;
            generated.push(GeneratedFile { path, outcome });
        }

        let written = generated
            .iter()
            .filter(|file| file.outcome == WriteOutcome::Written)
            .count();
        tracing::info!(
            theme = ctx.theme().name(),
            written,
            skipped = generated.len() - written,
            "theme structure generated"
        );

        Ok(generated)
    }
}
