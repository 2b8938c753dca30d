//! Subcommand implementations.

pub mod doctor;
pub mod index;
pub mod links;
pub mod output;
pub mod tags;
pub mod tree;

use std::path::Path;

use mdgarden_core::config::{ConfigError, ConfigLoader, ResolvedConfig};
use mdgarden_core::vault::{BuildOptions, Vault};

use crate::logging;

/// Resolve configuration. An explicit `--vault` makes the config file
/// optional; its profile still applies when one exists.
pub fn resolve_config(
    config: Option<&Path>,
    profile: Option<&str>,
    vault: Option<&Path>,
) -> Result<ResolvedConfig, ConfigError> {
    match (ConfigLoader::load(config, profile), vault) {
        (Ok(mut rc), Some(v)) => {
            rc.vault_root = v.to_path_buf();
            Ok(rc)
        }
        (Err(ConfigError::NotFound(_)), Some(v)) if config.is_none() => {
            Ok(ResolvedConfig::for_vault(v.to_path_buf()))
        }
        (result, _) => result,
    }
}

/// Load configuration and start logging, exiting on failure.
pub fn load_config(
    config: Option<&Path>,
    profile: Option<&str>,
    vault: Option<&Path>,
) -> ResolvedConfig {
    match resolve_config(config, profile, vault) {
        Ok(rc) => {
            logging::init(&rc);
            rc
        }
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    }
}

/// Build the vault for `rc`, optionally narrowed to one tag.
///
/// The templates and output folders are left out along with the configured
/// exclusions when they live inside the vault.
pub fn build_vault(rc: &ResolvedConfig, tag: Option<&str>) -> Vault {
    let mut excluded_folders = rc.excluded_folders.clone();
    excluded_folders.extend([rc.templates_dir.clone(), rc.output_dir.clone()]);
    let options = BuildOptions { excluded_folders };

    let mut vault = match Vault::build_with(&rc.vault_root, &options) {
        Ok(vault) => vault,
        Err(e) => {
            eprintln!("Error building vault {}: {}", rc.vault_root.display(), e);
            std::process::exit(1);
        }
    };

    if let Some(tag) = tag {
        vault.filter_by_tag(tag);
    }
    vault
}
