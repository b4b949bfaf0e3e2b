use crate::ast::Document;
use crate::error::Result;
use crate::io::read_metamark_file;
use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// A MetaMark file with a relative path and display-friendly name
#[derive(Debug, Clone, PartialEq)]
pub struct MetamarkFile {
    relative_path: RelativePathBuf,
    display_name: String,
    display_path: String,
}

impl MetamarkFile {
    /// Create a new MetamarkFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path.file_stem().unwrap_or("Untitled").to_string();
        let display_path = {
            let path_str = relative_path.as_str();
            // Strip the extension from the full relative path
            relative_path
                .extension()
                .and_then(|ext| path_str.strip_suffix(ext))
                .and_then(|s| s.strip_suffix('.'))
                .unwrap_or(path_str)
                .to_string()
        };

        Self {
            relative_path,
            display_name,
            display_path,
        }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Relative path without extension, for use in titles
    pub fn display_path(&self) -> &str {
        &self.display_path
    }

    pub fn absolute_path(&self, root: &Path) -> PathBuf {
        self.relative_path.to_path(root)
    }

    /// Read and parse the file under `root`.
    pub fn load(&self, root: &Path) -> Result<Document> {
        read_metamark_file(&self.absolute_path(root))
    }
}

impl From<RelativePathBuf> for MetamarkFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MetamarkFile {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}
