use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{ReportError, Result};

/// Zips every regular file directly inside `dir` into `archive_path`.
///
/// Entries are named by base name only and written in name order. Returns the
/// entry names.
#[tracing::instrument(skip_all, fields(dir = %dir.display(), archive = %archive_path.display()))]
pub fn archive_directory(dir: &Path, archive_path: &Path) -> Result<Vec<String>> {
    let own_name = name_within(dir, archive_path);
    let mut files: Vec<(String, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir).map_err(|e| ReportError::io(dir, e))? {
        let entry = entry.map_err(|e| ReportError::io(dir, e))?;
        let path = entry.path();

        let is_file = entry
            .file_type()
            .map_err(|e| ReportError::io(&path, e))?
            .is_file();
        if !is_file || own_name.as_ref() == Some(&entry.file_name()) {
            continue;
        }

        files.push((entry.file_name().to_string_lossy().into_owned(), path));
    }
    files.sort();

    if let Some(parent) = archive_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
        }
    }

    let file = File::create(archive_path).map_err(|e| ReportError::io(archive_path, e))?;
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (name, path) in &files {
        debug!(entry = %name, "Adding archive entry");
        zip.start_file(name.as_str(), options)?;
        let mut src = File::open(path).map_err(|e| ReportError::io(path, e))?;
        io::copy(&mut src, &mut zip).map_err(|e| ReportError::io(path, e))?;
    }
    zip.finish()?;

    info!(entries = files.len(), "Archive written");
    Ok(files.into_iter().map(|(name, _)| name).collect())
}

/// Base name of `archive_path` when it lands directly inside `dir`, however
/// either path is spelled.
fn name_within(dir: &Path, archive_path: &Path) -> Option<OsString> {
    let parent = archive_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let same_dir = match (fs::canonicalize(dir), fs::canonicalize(parent)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    };
    if same_dir {
        archive_path.file_name().map(|n| n.to_os_string())
    } else {
        None
    }
}
