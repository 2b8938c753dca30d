//! Hierarchical identities for vault entries.
//!
//! An [`ItemPath`] is the key every indexed entity is stored under. It is
//! built from a path relative to the vault root and renders as its
//! components joined with `/`, which is also what output files are named
//! after.

use std::convert::Infallible;
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Canonical hierarchical key derived from a relative file path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemPath {
    components: Vec<String>,
}

impl ItemPath {
    /// Build an identity from raw components.
    pub fn new<I, S>(components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { components: components.into_iter().map(Into::into).collect() }
    }

    /// Identity keeping every component, extension included.
    pub fn from_path(path: &Path) -> Self {
        Self { components: normal_components(path) }
    }

    /// Identity with the extension of the final component stripped.
    ///
    /// Only the last extension goes: `notes/archive.tar.gz` becomes
    /// `notes/archive.tar`.
    pub fn from_path_without_ext(path: &Path) -> Self {
        let mut components = path.parent().map(normal_components).unwrap_or_default();
        if let Some(stem) = path.file_stem() {
            components.push(stem.to_string_lossy().into_owned());
        }
        Self { components }
    }

    pub fn components(&self) -> &[String] {
        &self.components
    }

    /// Final component, if any.
    pub fn name(&self) -> Option<&str> {
        self.components.last().map(String::as_str)
    }

    /// Identity of the containing directory. The parent of a single
    /// component identity is the empty identity.
    pub fn parent(&self) -> Option<ItemPath> {
        let (_, init) = self.components.split_last()?;
        Some(Self { components: init.to_vec() })
    }

    pub fn join(&self, name: impl Into<String>) -> ItemPath {
        let mut components = self.components.clone();
        components.push(name.into());
        Self { components }
    }

    /// Append every component of `other`.
    pub fn extend(&self, other: &ItemPath) -> ItemPath {
        let mut components = self.components.clone();
        components.extend(other.components.iter().cloned());
        Self { components }
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }
}

fn normal_components(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            Component::RootDir | Component::Prefix(_) | Component::CurDir => None,
        })
        .collect()
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.components.join("/"))
    }
}

impl FromStr for ItemPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s.split('/').filter(|part| !part.is_empty())))
    }
}

impl Serialize for ItemPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
