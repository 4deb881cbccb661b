//! # Resume Canvas CLI
//!
//! Offline inspection tool for the résumé canvas engine.
//!
//! ## Commands
//!
//! - `project` - Lay a résumé JSON document out as canvas elements (or a
//!   draw list with `--draw`)
//! - `inverse` - Rebuild a résumé document from an element file
//! - `roundtrip` - Check that projecting and inverting a document is lossless
//! - `templates` - List the template and font catalogs
//!
//! Template and page configuration fall back to the `RESUME_CANVAS_TEMPLATE`
//! and `RESUME_CANVAS_CONFIG` environment variables.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]

use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use resume_canvas_core::{
    inverse_project, CanvasConfig, CanvasElement, FontFamilyId, Guides, LayoutProjector,
    ResolvedTheme, Scene, StructuredResume, Surface, TemplateId, ThemeOverrides,
};
use serde::Serialize;

/// Command-line arguments for resume-canvas.
#[derive(Debug, Clone, Parser)]
#[command(name = "resume-canvas")]
#[command(about = "Project résumé documents onto the canvas and back")]
#[command(version)]
pub struct CliArgs {
    /// Template id (modern, minimal, contrast, elegant, vibrant, technical)
    #[arg(
        long,
        global = true,
        env = "RESUME_CANVAS_TEMPLATE",
        default_value = "modern",
        value_parser = TemplateId::from_str
    )]
    pub template: TemplateId,

    /// Page configuration JSON file
    #[arg(long, global = true, env = "RESUME_CANVAS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Theme overrides JSON file
    #[arg(long, global = true)]
    pub overrides: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Project a résumé JSON file into canvas elements.
    Project {
        /// Résumé JSON file
        input: PathBuf,
        /// Emit paint commands instead of elements
        #[arg(long)]
        draw: bool,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Rebuild a résumé from a canvas element JSON file.
    Inverse {
        /// Element array JSON file
        elements: PathBuf,
        /// Résumé supplying fields without a visual element
        #[arg(long)]
        base: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Verify that projection followed by inversion is lossless.
    Roundtrip {
        /// Résumé JSON file
        input: PathBuf,
    },
    /// List available templates and fonts.
    Templates,
}

/// Runtime configuration resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Template used for projection.
    pub template: TemplateId,
    /// Page configuration file, if any.
    pub config_path: Option<PathBuf>,
    /// Theme overrides file, if any.
    pub overrides_path: Option<PathBuf>,
    /// Subcommand to run.
    pub command: Command,
}

impl From<CliArgs> for RunConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            template: args.template,
            config_path: args.config,
            overrides_path: args.overrides,
            command: args.command,
        }
    }
}

/// Run a command, writing its output to the requested file or stdout.
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, an output cannot
/// be written, or a round trip is lossy.
pub fn run(config: &RunConfig) -> anyhow::Result<()> {
    let rendered = render(config)?;
    let output = match &config.command {
        Command::Project { output, .. } | Command::Inverse { output, .. } => output.as_deref(),
        Command::Roundtrip { .. } | Command::Templates => None,
    };
    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "Wrote output");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// Execute a command and return its textual output.
///
/// # Errors
///
/// Returns an error if an input cannot be read or parsed, or a round trip
/// is lossy.
pub fn render(config: &RunConfig) -> anyhow::Result<String> {
    match &config.command {
        Command::Project { input, draw, .. } => {
            let data = load_resume(input)?;
            let page = load_page_config(config.config_path.as_deref())?;
            let overrides = load_overrides(config.overrides_path.as_deref())?;
            let elements =
                LayoutProjector::new(page).project(&data, config.template, overrides.as_ref());
            tracing::info!(
                template = %config.template,
                elements = elements.len(),
                "Projected résumé"
            );
            if *draw {
                let theme = ResolvedTheme::resolve(config.template, overrides.as_ref());
                let commands = Surface::new(&page, &theme)
                    .with_grid(false)
                    .compose(&Scene::new(elements), Guides::default());
                to_json(&commands)
            } else {
                to_json(&elements)
            }
        }
        Command::Inverse {
            elements: path,
            base,
            ..
        } => {
            let text = read(path)?;
            let elements: Vec<CanvasElement> = serde_json::from_str(&text)
                .with_context(|| format!("Invalid element JSON in {}", path.display()))?;
            let base = match base {
                Some(path) => load_resume(path)?,
                None => StructuredResume::default(),
            };
            to_json(&inverse_project(&elements, &base))
        }
        Command::Roundtrip { input } => {
            let data = load_resume(input)?;
            let page = load_page_config(config.config_path.as_deref())?;
            let elements = LayoutProjector::new(page).project(&data, config.template, None);
            let restored = inverse_project(&elements, &data);
            let expected = StructuredResume {
                html_resume: None,
                ..data
            };
            if restored != expected {
                tracing::warn!(template = %config.template, "Round trip changed the document");
                bail!(
                    "Round trip through template {} is lossy:\n{}",
                    config.template,
                    restored.to_json()?
                );
            }
            Ok(format!(
                "Round trip OK: {} elements, template {}",
                elements.len(),
                config.template
            ))
        }
        Command::Templates => Ok(catalog()),
    }
}

fn catalog() -> String {
    let mut lines = vec!["Templates:".to_string()];
    for template in TemplateId::ALL {
        let style = template.style();
        let marker = if template == TemplateId::default() {
            " (default)"
        } else {
            ""
        };
        lines.push(format!(
            "  {:<10} accent {}  font {}{marker}",
            template.as_str(),
            style.accent_color,
            style.body_font.as_str()
        ));
    }
    lines.push("Fonts:".to_string());
    for font in FontFamilyId::ALL {
        lines.push(format!("  {:<13} {}", font.as_str(), font.css_family()));
    }
    lines.join("\n")
}

fn read(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn load_resume(path: &Path) -> anyhow::Result<StructuredResume> {
    let text = read(path)?;
    StructuredResume::from_json(&text)
        .with_context(|| format!("Invalid résumé JSON in {}", path.display()))
}

fn load_page_config(path: Option<&Path>) -> anyhow::Result<CanvasConfig> {
    let Some(path) = path else {
        return Ok(CanvasConfig::default());
    };
    let text = read(path)?;
    CanvasConfig::from_json(&text)
        .with_context(|| format!("Invalid page configuration in {}", path.display()))
}

fn load_overrides(path: Option<&Path>) -> anyhow::Result<Option<ThemeOverrides>> {
    let Some(path) = path else {
        return Ok(None);
    };
    let text = read(path)?;
    let overrides = serde_json::from_str(&text)
        .with_context(|| format!("Invalid theme overrides in {}", path.display()))?;
    Ok(Some(overrides))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
