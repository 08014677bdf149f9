use std::path::Path;

use serde::Serialize;

use crate::constants::SHORTCUTS_FILE;
use crate::emitter::{emit, OutputLayout};
use crate::error::{Error, Result};
use crate::manifest::{self, load_manifest, TwaManifest};
use crate::resources::{register_resources, render_gradle, render_table, render_values_xml};
use crate::shortcuts::{render_shortcuts_xml, write_shortcuts_file};

use super::{ReportFormat, ResourceFormat};

/// Full generation pass into `project_dir`
pub fn generate(manifest_path: &Path, project_dir: &Path, skip_values: bool) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let mut layout = OutputLayout::for_project(project_dir);
    if skip_values {
        layout = layout.without_values();
    }

    let report = emit(&manifest, &layout)?;
    if let Some(values) = &report.values_file {
        println!("Wrote {} resources to {}", report.resource_count, values.display());
    }
    println!(
        "Wrote {} shortcuts to {}",
        report.shortcut_count,
        report.shortcuts_file.display()
    );
    Ok(())
}

pub fn resources(manifest_path: &Path, format: ResourceFormat) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    print!("{}", render_resources(&manifest, format)?);
    Ok(())
}

/// Validate the manifest and render its resources in `format`
pub fn render_resources(manifest: &TwaManifest, format: ResourceFormat) -> Result<String> {
    manifest::validate(manifest)?;
    let set = register_resources(manifest)?;

    let output = match format {
        ResourceFormat::Text => render_table(&set),
        ResourceFormat::Gradle => render_gradle(&set),
        ResourceFormat::Xml => render_values_xml(&set)?,
        ResourceFormat::Json => {
            let mut json = serde_json::to_string_pretty(&set)?;
            json.push('\n');
            json
        }
    };
    Ok(output)
}

pub fn shortcuts(
    manifest_path: &Path,
    project_dir: &Path,
    output: Option<&Path>,
    stdout: bool,
) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    manifest::validate(&manifest)?;

    if stdout {
        print!("{}", render_shortcuts_xml(&manifest)?);
        return Ok(());
    }

    let path = match output {
        Some(path) => path.to_path_buf(),
        None => project_dir.join(SHORTCUTS_FILE),
    };
    let count = write_shortcuts_file(&manifest, &path)?;
    println!("Wrote {} shortcuts to {}", count, path.display());
    Ok(())
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    manifest: String,
    valid: bool,
    issues: Vec<Error>,
}

pub fn validate(manifest_path: &Path, format: ReportFormat) -> Result<()> {
    let manifest = load_manifest(manifest_path)?;
    let issues = manifest::collect_issues(&manifest);
    let report = ValidationReport {
        manifest: manifest_path.display().to_string(),
        valid: issues.is_empty(),
        issues,
    };

    match format {
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        ReportFormat::Text if report.valid => println!("{}: ok", report.manifest),
        ReportFormat::Text => {
            for issue in &report.issues {
                println!("{}: {}", report.manifest, issue);
            }
        }
    }

    if report.valid {
        Ok(())
    } else {
        Err(Error::ConfigError(format!(
            "{} problem(s) found in {}",
            report.issues.len(),
            report.manifest
        )))
    }
}
