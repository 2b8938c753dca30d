//! Recursive vault directory walker.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum VaultWalkerError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),
}

/// Kind of embeddable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
}

/// How a file takes part in the vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileClass {
    Note,
    Asset(AssetKind),
    Ignored,
}

impl FileClass {
    /// Classify by extension, case-insensitively.
    pub fn classify(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return Self::Ignored;
        };

        match ext.to_ascii_lowercase().as_str() {
            "md" => Self::Note,
            "png" | "jpg" | "jpeg" | "gif" => Self::Asset(AssetKind::Image),
            _ => Self::Ignored,
        }
    }
}

/// A regular file discovered under the vault root.
#[derive(Debug, Clone)]
pub struct WalkedFile {
    /// Absolute path to the file.
    pub absolute_path: PathBuf,
    /// Path relative to vault root.
    pub relative_path: PathBuf,
    pub class: FileClass,
}

/// Lists the files of a vault in a stable order.
#[derive(Debug)]
pub struct VaultWalker {
    root: PathBuf,
    /// Relative to `root`.
    excluded_folders: Vec<PathBuf>,
}

impl VaultWalker {
    pub fn new(root: &Path) -> Result<Self, VaultWalkerError> {
        Self::with_exclusions(root, Vec::new())
    }

    /// Folders may be given relative to the vault root or as absolute paths
    /// inside it.
    pub fn with_exclusions(
        root: &Path,
        excluded_folders: Vec<PathBuf>,
    ) -> Result<Self, VaultWalkerError> {
        let missing = || VaultWalkerError::MissingRoot(root.display().to_string());
        let root = root.canonicalize().map_err(|_| missing())?;
        if !root.is_dir() {
            return Err(missing());
        }

        let excluded_folders = excluded_folders
            .into_iter()
            .map(|folder| {
                if folder.is_relative() {
                    return folder;
                }
                let absolute = folder.canonicalize().unwrap_or(folder);
                match absolute.strip_prefix(&root) {
                    Ok(inside) => inside.to_path_buf(),
                    Err(_) => absolute,
                }
            })
            .collect();

        Ok(Self { root, excluded_folders })
    }

    /// Every regular file under the root, sorted by relative path.
    ///
    /// Excluded folders are pruned; dot-prefixed entries are walked like any
    /// other. The first I/O error aborts the walk.
    pub fn walk(&self) -> Result<Vec<WalkedFile>, VaultWalkerError> {
        let entries = WalkDir::new(&self.root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_pruned(entry));

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                VaultWalkerError::WalkError(self.root.display().to_string(), e)
            })?;
            if entry.file_type().is_file() {
                files.push(self.walked(entry.into_path()));
            }
        }

        files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
        tracing::trace!(root = %self.root.display(), files = files.len(), "walked vault");
        Ok(files)
    }

    fn walked(&self, absolute_path: PathBuf) -> WalkedFile {
        let relative_path = absolute_path
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| absolute_path.clone());
        WalkedFile { class: FileClass::classify(&absolute_path), absolute_path, relative_path }
    }

    fn is_pruned(&self, entry: &walkdir::DirEntry) -> bool {
        entry.path().strip_prefix(&self.root).is_ok_and(|relative| {
            self.excluded_folders.iter().any(|folder| relative.starts_with(folder))
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
