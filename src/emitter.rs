//! One-shot generation pass: validate, register, render, write.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::constants::{SHORTCUTS_FILE, VALUES_FILE};
use crate::error::Result;
use crate::manifest::{self, check_shortcuts, TwaManifest};
use crate::resources::{register_entries, render_values_xml};
use crate::shortcuts::render_entries;
use crate::util::StagedFile;

/// Where generated files land inside an Android project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    pub values_file: Option<PathBuf>,
    pub shortcuts_file: PathBuf,
}

impl OutputLayout {
    pub fn for_project(project_dir: &Path) -> Self {
        Self {
            values_file: Some(project_dir.join(VALUES_FILE)),
            shortcuts_file: project_dir.join(SHORTCUTS_FILE),
        }
    }

    /// Skip the values document, e.g. when the build script registers resources itself
    pub fn without_values(mut self) -> Self {
        self.values_file = None;
        self
    }
}

/// Summary of a completed generation pass
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitReport {
    pub resource_count: usize,
    pub shortcut_count: usize,
    pub values_file: Option<PathBuf>,
    pub shortcuts_file: PathBuf,
}

/// Run the full generation pass.
///
/// Both documents are rendered and staged next to their targets before
/// either is renamed into place. A validation, rendering or staging failure
/// leaves existing outputs untouched.
pub fn emit(manifest: &TwaManifest, layout: &OutputLayout) -> Result<EmitReport> {
    let entries = check_shortcuts(&manifest.shortcuts)?;
    manifest::validate_fields(manifest)?;

    let resources = register_entries(manifest, &entries)?;
    let shortcuts_xml = render_entries(&manifest.application_id, &entries)?;
    let values_xml = match &layout.values_file {
        Some(_) => Some(render_values_xml(&resources)?),
        None => None,
    };

    // Uncommitted stages remove their temp files when dropped
    let staged_values = match (&layout.values_file, &values_xml) {
        (Some(path), Some(xml)) => Some((path, StagedFile::write(path, xml.as_bytes())?)),
        _ => None,
    };
    let staged_shortcuts = StagedFile::write(&layout.shortcuts_file, shortcuts_xml.as_bytes())?;

    if let Some((path, staged)) = staged_values {
        staged.commit()?;
        tracing::info!(path = %path.display(), resources = resources.len(), "wrote values file");
    }
    staged_shortcuts.commit()?;
    tracing::info!(
        path = %layout.shortcuts_file.display(),
        shortcuts = entries.len(),
        "wrote shortcuts file"
    );

    Ok(EmitReport {
        resource_count: resources.len(),
        shortcut_count: entries.len(),
        values_file: layout.values_file.clone(),
        shortcuts_file: layout.shortcuts_file.clone(),
    })
}
