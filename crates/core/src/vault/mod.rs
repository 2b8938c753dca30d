//! Vault discovery and indexing.
//!
//! This module provides utilities for walking vault directories, assigning
//! every file a hierarchical [`ItemPath`], and indexing notes and assets
//! into a [`Vault`] with its navigation tree and reference graph.

pub mod graph;
pub mod index;
pub mod item_path;
pub mod navigation;
pub mod walker;

pub use graph::ReferenceGraph;
pub use index::{BuildOptions, EmbeddedFile, Vault, VaultError, VaultStats};
pub use item_path::ItemPath;
pub use navigation::{NavNode, NavTree};
pub use walker::{AssetKind, FileClass, VaultWalker, VaultWalkerError, WalkedFile};
