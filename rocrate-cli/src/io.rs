//! Boundary file reads and atomic writes

use crate::error::CliError;
use rocrate_graph::CrateDocument;
use std::fs;
use std::path::{Path, PathBuf};

pub fn read_document(path: &Path) -> Result<CrateDocument, CliError> {
    let text = fs::read_to_string(path)
        .map_err(|e| CliError::Input(format!("cannot read {}: {e}", path.display())))?;
    Ok(CrateDocument::parse_str(&text)?)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write the document via a temp file in the same directory plus rename, so
/// a failed run never corrupts an existing output file.
pub fn write_document(path: &Path, doc: &CrateDocument) -> Result<(), CliError> {
    let tmp = temp_path(path);
    let mut text = doc.to_string_pretty();
    text.push('\n');

    fs::write(&tmp, text)
        .map_err(|e| CliError::Output(format!("cannot write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        CliError::Output(format!("cannot replace {}: {e}", path.display()))
    })
}
