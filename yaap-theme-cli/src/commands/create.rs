//! Theme creation command

use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use yaap_theme::config::ThemeConfig;
use yaap_theme::dependencies::{merge_dependencies, FRONTEND_DEV_DEPENDENCIES};
use yaap_theme::fs::LocalFs;
use yaap_theme::plan::{generation_plan, Layout};
use yaap_theme::scaffold::{GeneratedFile, Scaffolder, WriteOutcome};
use yaap_theme::theme::{Theme, ThemeContext};
use yaap_theme::validate::{can_generate, validate_name, Reporter};

use crate::reporter::TerminalReporter;

/// Description used when none is given.
pub const DEFAULT_DESCRIPTION: &str = "A new FeatherLMS theme";

/// Name suggested by the interactive prompt.
pub const DEFAULT_NAME: &str = "default";

/// How a create run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The theme was generated
    Created(Vec<GeneratedFile>),
    /// Validation failed or the overwrite was declined; nothing was written
    Aborted,
}

/// Create a new theme
pub struct CreateCommand {
    name: Option<String>,
    description: Option<String>,
    author: Option<String>,
    force: bool,
    interactive: bool,
    project_root: PathBuf,
}

impl CreateCommand {
    /// Create a command instance
    ///
    /// # Arguments
    ///
    /// * `name` - Theme name; prompted for when missing and interactive
    /// * `project_root` - Host project root (where `package.json` lives)
    #[must_use]
    pub const fn new(name: Option<String>, project_root: PathBuf) -> Self {
        Self {
            name,
            description: None,
            author: None,
            force: false,
            interactive: false,
            project_root,
        }
    }

    /// Overwrite existing files.
    #[must_use]
    pub const fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// Allow prompts.
    #[must_use]
    pub const fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Theme description; skips the prompt.
    #[must_use]
    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Theme author; skips the prompt.
    #[must_use]
    pub fn author(mut self, author: Option<String>) -> Self {
        self.author = author;
        self
    }

    /// Execute the command
    pub fn execute(&self) -> Result<CreateOutcome> {
        let config = ThemeConfig::load(&self.project_root).with_context(|| {
            format!("Failed to load configuration from {}", self.project_root.display())
        })?;
        let fs = LocalFs::new();
        let reporter = TerminalReporter::new(self.interactive);
        let themes_dir = config.themes_path(&self.project_root);

        // An existing theme is handled by the overwrite policy when the user
        // forced it or can be asked
        let allow_existing = self.force || self.interactive;

        let Some(name) = self.resolve_name(&themes_dir, &fs, allow_existing, &reporter)? else {
            return Ok(CreateOutcome::Aborted);
        };

        let (description, author) = self.collect_metadata()?;
        let ctx = ThemeContext::new(Theme::new(&name, &themes_dir), description, author);

        if !can_generate(ctx.theme(), self.force, &fs, &reporter) {
            return Ok(CreateOutcome::Aborted);
        }

        println!(
            "{} {} {}",
            style("Creating").green().bold(),
            style("theme:").bold(),
            style(&name).cyan().bold()
        );

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let generated = with_spinner(&spinner, |spinner| {
            spinner.set_message("Generating theme structure...");
            let layout = Layout::new(
                ctx.theme().root_directory_path(),
                config.app_path(&self.project_root),
            );
            let templates = config.template_source(&self.project_root);
            let scaffolder = Scaffolder::new(&fs, templates, layout, self.force);
            let generated = scaffolder
                .generate(&generation_plan(&config.container_dir), &ctx)
                .with_context(|| format!("Failed to generate theme \"{name}\""))?;

            spinner.set_message("Updating package.json...");
            let manifest = config.manifest_path(&self.project_root);
            merge_dependencies(&fs, &manifest, FRONTEND_DEV_DEPENDENCIES).with_context(|| {
                format!("Failed to update dependencies in {}", manifest.display())
            })?;

            Ok(generated)
        })?;

        print_success(&name, &config, &generated, &self.project_root);

        Ok(CreateOutcome::Created(generated))
    }

    /// Validate the given name, prompting for a new one when possible.
    fn resolve_name(
        &self,
        themes_dir: &Path,
        fs: &LocalFs,
        allow_existing: bool,
        reporter: &TerminalReporter,
    ) -> Result<Option<String>> {
        match &self.name {
            Some(name) => match validate_name(name, themes_dir, fs, allow_existing) {
                Ok(()) => return Ok(Some(name.clone())),
                Err(err) => {
                    reporter.error(&err.to_string());
                    if !self.interactive {
                        return Ok(None);
                    }
                }
            },
            None if !self.interactive => {
                reporter.error("Theme name is required.");
                return Ok(None);
            }
            None => {}
        }

        let name = Input::<String>::new()
            .with_prompt("What is a name of the new theme?")
            .default(DEFAULT_NAME.to_string())
            .validate_with(|input: &String| -> std::result::Result<(), String> {
                validate_name(input, themes_dir, fs, allow_existing).map_err(|e| e.to_string())
            })
            .interact_text()
            .context("Failed to read theme name")?;

        Ok(Some(name))
    }

    /// Description and author from flags, prompts or defaults.
    fn collect_metadata(&self) -> Result<(String, String)> {
        let description = match &self.description {
            Some(description) => description.clone(),
            None if self.interactive => Input::<String>::new()
                .with_prompt("Theme description")
                .default(DEFAULT_DESCRIPTION.to_string())
                .interact_text()
                .context("Failed to read theme description")?,
            None => DEFAULT_DESCRIPTION.to_string(),
        };

        let author = match &self.author {
            Some(author) => author.clone(),
            None if self.interactive => Input::<String>::new()
                .with_prompt("Theme author name")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read theme author")?,
            None => String::new(),
        };

        Ok((description, author))
    }
}

/// Run `step` with the spinner ticking, clearing it whether or not the step succeeds.
fn with_spinner<T>(spinner: &ProgressBar, step: impl FnOnce(&ProgressBar) -> Result<T>) -> Result<T> {
    let result = step(spinner);
    spinner.finish_and_clear();
    result
}

/// Lines to add to the `scripts` section of `package.json`.
#[must_use]
pub fn scripts_hint(name: &str, config: &ThemeConfig) -> [String; 2] {
    let vite_config = config.themes_dir.join(name).join("vite.config.ts");
    let vite_config = vite_config.display();
    [
        format!("\"dev:{name}\": \"vite --config {vite_config} --mode development\","),
        format!("\"build:{name}\": \"vite --config {vite_config} --mode production\","),
    ]
}

fn print_success(name: &str, config: &ThemeConfig, generated: &[GeneratedFile], project_root: &Path) {
    let (written, skipped): (Vec<_>, Vec<_>) = generated
        .iter()
        .partition(|file| file.outcome == WriteOutcome::Written);

    for file in &written {
        let shown = file.path.strip_prefix(project_root).unwrap_or(&file.path);
        println!("  {} {}", style("create").green(), shown.display());
    }
    for file in &skipped {
        let shown = file.path.strip_prefix(project_root).unwrap_or(&file.path);
        println!("  {} {}", style("skip").yellow(), shown.display());
    }
    println!();

    println!("{}", style("Dependencies updated successfully.").green());
    println!();
    println!("{}", style("Append next lines to your scripts section in package.json:").bold());
    for line in scripts_hint(name, config) {
        println!("    {}", style(line).cyan());
    }
    println!();
    println!(
        "Please also run {} to install the required dependencies.",
        style("`npm install`").cyan()
    );
    println!();
    println!("{}", style("✓ Theme created successfully.").green().bold());
}
