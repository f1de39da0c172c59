//! Document enumeration.
//!
//! A [`DocumentSource`] names where documents come from; [`DocumentSource::load`]
//! reads them into labeled [`Document`]s in a deterministic order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::{
    config::{CheckConfig, ManualConfig},
    error::LintError,
};

/// The text of one document and the label findings are reported under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    label: String,
    text: String,
}

impl Document {
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Where a run finds its documents.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// Files and directories. Directories are walked recursively.
    Paths(Vec<PathBuf>),
    /// The section files of a documentation manual, in navigation order.
    Manual(ManualConfig),
}

impl DocumentSource {
    /// Choose the source for a run.
    ///
    /// Explicit inputs win; without them the manual is used.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::NoInput`] when there are no inputs and the
    /// manual names no section files.
    pub fn select(inputs: &[PathBuf], manual: &ManualConfig) -> Result<Self, LintError> {
        if !inputs.is_empty() {
            return Ok(Self::Paths(inputs.to_vec()));
        }
        if manual.is_empty() {
            return Err(LintError::NoInput);
        }
        Ok(Self::Manual(manual.clone()))
    }

    /// Read every document of this source.
    ///
    /// Directory entries are visited sorted by file name and filtered by
    /// the extensions in `check`. Files named explicitly are read whatever
    /// their extension.
    ///
    /// # Errors
    ///
    /// Returns [`LintError::Io`] for unreadable files and
    /// [`LintError::Walk`] when a directory cannot be traversed.
    pub fn load(&self, check: &CheckConfig) -> Result<Vec<Document>, LintError> {
        let documents = match self {
            Self::Paths(paths) => {
                let mut documents = Vec::new();
                for path in paths {
                    if path.is_dir() {
                        load_dir(path, check, &mut documents)?;
                    } else {
                        documents.push(read_document(path, path.display().to_string())?);
                    }
                }
                documents
            }
            Self::Manual(manual) => load_manual(manual)?,
        };

        info!(documents = documents.len(); "Loaded documents");
        Ok(documents)
    }
}

fn read_document(path: &Path, label: String) -> Result<Document, LintError> {
    let text = fs::read_to_string(path).map_err(|err| LintError::io(path, err))?;
    debug!(path = path.display().to_string(), label = label.as_str(); "Read document");
    Ok(Document::new(label, text))
}

fn load_dir(
    root: &Path,
    check: &CheckConfig,
    documents: &mut Vec<Document>,
) -> Result<(), LintError> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() || !check.matches(entry.path()) {
            continue;
        }

        // Keep the walked root in the label so equal names under different
        // inputs stay apart.
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let label = root.join(relative).display().to_string();
        documents.push(read_document(entry.path(), label)?);
    }
    Ok(())
}

fn load_manual(manual: &ManualConfig) -> Result<Vec<Document>, LintError> {
    let mut documents = Vec::new();
    for group in manual.nav() {
        debug!(
            group = group.title(),
            icon:? = group.icon(),
            expanded = group.expanded();
            "Reading navigation group"
        );
        for item in group.items() {
            let Some(file) = item.file() else {
                continue;
            };
            let path = manual.sections_dir().join(file);
            if !path.exists() {
                warn!(
                    id = item.id(),
                    title = item.title(),
                    path = path.display().to_string();
                    "Section file not found, skipping"
                );
                continue;
            }
            documents.push(read_document(&path, file.to_string())?);
        }
    }
    Ok(documents)
}
