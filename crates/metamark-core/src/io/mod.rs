use crate::ast::Document;
use crate::error::{Error, Result};
use crate::models::MetamarkFile;
use crate::parsing::parse_bytes;
use log::debug;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Read a MetaMark file from disk and parse it.
pub fn read_metamark_file(path: &Path) -> Result<Document> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    debug!("read {} ({} bytes)", path.display(), bytes.len());
    parse_bytes(&bytes)
}

/// Read a document's raw text by its path relative to the documents root
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(Error::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(Error::Io)
}

/// Scan for files with the given extension under `root`, recursively, sorted
pub fn scan_metamark_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        return Err(Error::InvalidDirectory(
            "documents directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(root, extension, &mut files)?;
    files.sort();
    Ok(files)
}

/// Documents under `root` as display-ready entries, sorted by path
pub fn list_documents(root: &Path, extension: &str) -> Result<Vec<MetamarkFile>> {
    scan_metamark_files(root, extension)?
        .iter()
        .map(|path| {
            let relative = path
                .strip_prefix(root)
                .map_err(|e| Error::InvalidArgument(e.to_string()))?;
            let relative = RelativePathBuf::from_path(relative)
                .map_err(|e| Error::InvalidArgument(e.to_string()))?;
            Ok(MetamarkFile::new(relative))
        })
        .collect()
}

fn scan_directory_recursive(dir: &Path, extension: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(Error::Io)?;

    for entry in entries {
        let entry = entry.map_err(Error::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, extension, files)?;
        } else if let Some(ext) = path.extension()
            && ext == extension
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_documents_dir(path: &Path) -> Result<()> {
    if !path.exists() || !path.is_dir() {
        return Err(Error::InvalidDirectory(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}
