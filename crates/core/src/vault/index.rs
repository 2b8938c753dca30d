//! The vault index: notes and assets keyed by identity, plus the navigation
//! tree and reference graph derived from them.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use super::graph::ReferenceGraph;
use super::item_path::ItemPath;
use super::navigation::NavTree;
use super::walker::{AssetKind, FileClass, VaultWalker, VaultWalkerError, WalkedFile};
use crate::note::{Note, NoteError, NoteOutcome};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("vault walker error: {0}")]
    Walker(#[from] VaultWalkerError),

    #[error("failed to parse note {path}: {source}")]
    Note {
        path: PathBuf,
        #[source]
        source: NoteError,
    },

    #[error("note not found: {0}")]
    NoteNotFound(String),
}

/// An embeddable file found in the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmbeddedFile {
    /// Absolute path to the file.
    pub path: PathBuf,
    /// Path relative to the vault root, extension included.
    pub relative_path: PathBuf,
    pub kind: AssetKind,
}

/// Options for [`Vault::build_with`].
#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Folders to leave out, relative to the vault root.
    pub excluded_folders: Vec<PathBuf>,
}

/// Statistics from a vault build.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VaultStats {
    pub files_found: usize,
    pub notes_indexed: usize,
    /// Notes that opted out of publishing.
    pub notes_skipped: usize,
    pub assets_indexed: usize,
    pub files_ignored: usize,
    pub references_found: usize,
    /// References whose target is not a note in the vault.
    pub unresolved_references: usize,
    pub duration_ms: u64,
}

/// Indexed snapshot of a vault directory.
///
/// Built once from a full walk; identities are unique per mapping, and the
/// later file in walk order wins if two files share one.
#[derive(Debug, Clone)]
pub struct Vault {
    root: PathBuf,
    notes: BTreeMap<ItemPath, Note>,
    /// Relative file path each note was read from.
    sources: BTreeMap<ItemPath, PathBuf>,
    assets: BTreeMap<ItemPath, EmbeddedFile>,
    navigation: NavTree,
    graph: ReferenceGraph,
    stats: VaultStats,
}

impl Vault {
    /// Walk `root` and index every note and asset under it.
    pub fn build(root: &Path) -> Result<Self, VaultError> {
        Self::build_with(root, &BuildOptions::default())
    }

    pub fn build_with(root: &Path, options: &BuildOptions) -> Result<Self, VaultError> {
        let start = Instant::now();

        let walker = VaultWalker::with_exclusions(root, options.excluded_folders.clone())?;
        let files = walker.walk()?;

        let mut vault = Self::from_notes(walker.root().to_path_buf(), BTreeMap::new());
        vault.stats.files_found = files.len();

        for file in &files {
            vault.add_file(file)?;
        }

        vault.rebuild_derived();
        vault.stats.duration_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            root = %vault.root.display(),
            notes = vault.stats.notes_indexed,
            assets = vault.stats.assets_indexed,
            links = vault.graph.edge_count(),
            "vault indexed"
        );
        Ok(vault)
    }

    /// Assemble a vault from already parsed notes.
    pub fn from_notes(root: PathBuf, notes: BTreeMap<ItemPath, Note>) -> Self {
        let mut vault = Self {
            root,
            notes,
            sources: BTreeMap::new(),
            assets: BTreeMap::new(),
            navigation: NavTree::new(),
            graph: ReferenceGraph::new(),
            stats: VaultStats::default(),
        };
        vault.stats.notes_indexed = vault.notes.len();
        vault.rebuild_derived();
        vault
    }

    fn add_file(&mut self, file: &WalkedFile) -> Result<(), VaultError> {
        let id = ItemPath::from_path_without_ext(&file.relative_path);

        match file.class {
            FileClass::Note => {
                tracing::debug!(path = %file.relative_path.display(), "parsing note");
                let outcome = Note::from_file(&file.absolute_path).map_err(|source| {
                    VaultError::Note { path: file.relative_path.clone(), source }
                })?;

                match outcome {
                    NoteOutcome::Parsed(note) => {
                        let references = note.references.len();
                        if let Some(replaced) = self.notes.insert(id.clone(), note) {
                            self.stats.references_found -= replaced.references.len();
                        }
                        self.stats.references_found += references;
                        match self.sources.insert(id.clone(), file.relative_path.clone()) {
                            Some(previous) => tracing::warn!(
                                id = %id,
                                kept = %file.relative_path.display(),
                                replaced = %previous.display(),
                                "duplicate note identity, keeping last"
                            ),
                            None => self.stats.notes_indexed += 1,
                        }
                    }
                    NoteOutcome::Skipped(reason) => {
                        tracing::debug!(
                            path = %file.relative_path.display(),
                            ?reason,
                            "skipping note"
                        );
                        self.stats.notes_skipped += 1;
                    }
                }
            }
            FileClass::Asset(kind) => {
                let asset = EmbeddedFile {
                    path: file.absolute_path.clone(),
                    relative_path: file.relative_path.clone(),
                    kind,
                };
                if let Some(previous) = self.assets.insert(id.clone(), asset) {
                    tracing::warn!(
                        id = %id,
                        replaced = %previous.relative_path.display(),
                        "duplicate asset identity, keeping last"
                    );
                } else {
                    self.stats.assets_indexed += 1;
                }
            }
            FileClass::Ignored => self.stats.files_ignored += 1,
        }

        Ok(())
    }

    /// Recompute the navigation tree and reference graph from `notes`.
    fn rebuild_derived(&mut self) {
        self.navigation = NavTree::from_paths(self.notes.keys());

        let resolver = Resolver::new(&self.notes);
        let mut graph = ReferenceGraph::new();
        let mut unresolved = 0;

        for (source, note) in &self.notes {
            for reference in &note.references {
                match resolver.resolve(&reference.target, source) {
                    Some(target) => {
                        graph.add_edge(source.clone(), target.clone());
                    }
                    None if reference.embedded => {}
                    None => {
                        tracing::debug!(
                            source = %source,
                            target = %reference.target,
                            "unresolved reference"
                        );
                        unresolved += 1;
                    }
                }
            }
        }

        self.graph = graph;
        self.stats.unresolved_references = unresolved;
    }

    /// Keep only notes tagged with `tag`. The navigation tree and graph are
    /// rebuilt over the remaining notes.
    pub fn filter_by_tag(&mut self, tag: &str) {
        self.notes.retain(|_, note| note.has_tag(tag));
        let notes = &self.notes;
        self.sources.retain(|id, _| notes.contains_key(id));
        self.stats.notes_indexed = self.notes.len();
        self.rebuild_derived();
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn notes(&self) -> &BTreeMap<ItemPath, Note> {
        &self.notes
    }

    pub fn assets(&self) -> &BTreeMap<ItemPath, EmbeddedFile> {
        &self.assets
    }

    pub fn navigation(&self) -> &NavTree {
        &self.navigation
    }

    pub fn graph(&self) -> &ReferenceGraph {
        &self.graph
    }

    pub fn stats(&self) -> &VaultStats {
        &self.stats
    }

    /// Vault-relative path of the file a note was read from.
    pub fn source_path(&self, id: &ItemPath) -> Option<&Path> {
        self.sources.get(id).map(PathBuf::as_path)
    }

    pub fn note(&self, id: &ItemPath) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Like [`Vault::note`] but missing notes are an error.
    pub fn require_note(&self, id: &ItemPath) -> Result<&Note, VaultError> {
        self.notes.get(id).ok_or_else(|| VaultError::NoteNotFound(id.to_string()))
    }

    /// Resolve a wikilink target written in note `from`.
    pub fn resolve(&self, target: &str, from: &ItemPath) -> Option<ItemPath> {
        Resolver::new(&self.notes).resolve(target, from).cloned()
    }

    /// Resolve an embed target such as `diagram.png` or `img/diagram.png`.
    pub fn resolve_asset(&self, target: &str) -> Option<(&ItemPath, &EmbeddedFile)> {
        let wanted = Path::new(target.trim_start_matches('/'));
        let by_path = self.assets.iter().find(|(_, a)| a.relative_path == wanted);

        by_path.or_else(|| {
            let name = wanted.file_name()?;
            let mut matches =
                self.assets.iter().filter(|(_, a)| a.relative_path.file_name() == Some(name));
            let first = matches.next()?;
            matches.next().is_none().then_some(first)
        })
    }

    /// Number of notes carrying each tag.
    pub fn tag_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.notes.values().flat_map(|n| &n.tags) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }
}

/// Maps wikilink targets to note identities.
///
/// Tried in order: the target as a vault-relative path, the target relative
/// to the linking note's folder, then a note name that is unique in the vault.
struct Resolver<'a> {
    notes: &'a BTreeMap<ItemPath, Note>,
    by_name: HashMap<&'a str, Vec<&'a ItemPath>>,
}

impl<'a> Resolver<'a> {
    fn new(notes: &'a BTreeMap<ItemPath, Note>) -> Self {
        let mut by_name: HashMap<&str, Vec<&ItemPath>> = HashMap::new();
        for id in notes.keys() {
            if let Some(name) = id.name() {
                by_name.entry(name).or_default().push(id);
            }
        }
        Self { notes, by_name }
    }

    fn resolve(&self, target: &str, from: &ItemPath) -> Option<&'a ItemPath> {
        let target = normalize_target(target)?;

        if let Some((id, _)) = self.notes.get_key_value(&target) {
            return Some(id);
        }

        if let Some(dir) = from.parent() {
            let relative = dir.extend(&target);
            if let Some((id, _)) = self.notes.get_key_value(&relative) {
                return Some(id);
            }
        }

        match self.by_name.get(target.name()?)?.as_slice() {
            [only] if target.len() == 1 => Some(*only),
            _ => None,
        }
    }
}

fn normalize_target(target: &str) -> Option<ItemPath> {
    let name = target.split_once('#').map_or(target, |(name, _)| name).trim();
    let name = name.strip_suffix(".md").unwrap_or(name);
    let id: ItemPath = name.parse().ok()?;
    (!id.is_empty()).then_some(id)
}
