//! # Section Properties CLI
//!
//! Command-line front end for `section_core`: loads a section file or builds a
//! parametric shape, runs the property engines, and prints a text report or
//! JSON.

mod cli;
mod report;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn, LevelFilter};
use section_core::shapes::ShapeTemplate;
use section_core::{
    compute_section_properties_with, load_section_file, save_section_file, CrossSection, SectionFile,
    SolverSettings,
};

use crate::cli::{Cli, Command};

fn init_logger(level: LevelFilter) {
    // RUST_LOG, when set, overrides the flag
    env_logger::Builder::new().filter_level(level).parse_default_env().init();
}

/// Start from the file's settings (if any) and apply flag overrides
fn resolve_settings(args: &Cli, from_file: Option<SolverSettings>) -> Result<SolverSettings> {
    let mut settings = from_file.unwrap_or_default();
    if let Some(n) = args.max_iterations {
        settings.max_iterations = n;
    }
    if let Some(t) = args.tolerance {
        settings.relative_tolerance = t;
    }
    settings.validate().context("invalid solver settings")?;
    Ok(settings)
}

fn run(title: &str, section: &CrossSection, settings: &SolverSettings, json: bool) -> Result<()> {
    if let Err(e) = section.validate() {
        warn!("[MAIN] {}: {}; computing anyway", title, e);
    }

    let props = compute_section_properties_with(section, settings);
    info!("[MAIN] Computed properties for {} (A = {:.4})", title, props.elastic.area);

    if json {
        println!("{}", serde_json::to_string_pretty(&props)?);
    } else {
        print!(
            "{}",
            report::Report {
                title,
                section,
                props: &props,
            }
        );
    }
    Ok(())
}

fn compute_file(args: &Cli, path: &Path, json: bool) -> Result<()> {
    let file = load_section_file(path).with_context(|| format!("could not load section file {}", path.display()))?;
    info!("[MAIN] Loaded section file {} (version {})", path.display(), file.version);

    let settings = resolve_settings(args, file.settings)?;
    let title = if file.label.is_empty() {
        path.display().to_string()
    } else {
        file.label.clone()
    };
    run(&title, &file.section, &settings, json)
}

fn compute_shape(args: &Cli, template: ShapeTemplate, json: bool, save: Option<&Path>) -> Result<()> {
    let settings = resolve_settings(args, None)?;
    let section = template
        .to_section()
        .with_context(|| format!("invalid {} dimensions", template.display_name()))?;

    if let Some(path) = save {
        let file = SectionFile::new(template.display_name(), section.clone());
        save_section_file(&file, path).with_context(|| format!("could not save section to {}", path.display()))?;
        info!("[MAIN] Saved section to {}", path.display());
    }

    run(template.display_name(), &section, &settings, json)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.log_level);

    match &args.command {
        Command::Compute { file, json } => compute_file(&args, file, *json),
        Command::Shape { kind, json, save } => compute_shape(&args, (*kind).into(), *json, save.as_deref()),
    }
}
