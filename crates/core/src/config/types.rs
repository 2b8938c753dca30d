use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    pub profile: Option<String>,
    pub profiles: HashMap<String, Profile>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct Profile {
    pub vault_root: String,
    /// Where rendered pages are written.
    pub output_dir: Option<String>,
    /// Page templates used by the renderer.
    pub templates_dir: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Folders to exclude from indexing (relative to vault_root).
    #[serde(default)]
    pub excluded_folders: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    "/".to_string()
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub active_profile: String,
    pub vault_root: PathBuf,
    pub output_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub base_url: String,
    /// Folders to exclude from indexing, relative to the vault root.
    pub excluded_folders: Vec<PathBuf>,
    pub logging: LoggingConfig,
}

impl ResolvedConfig {
    /// Configuration for a vault given directly on the command line.
    pub fn for_vault(vault_root: PathBuf) -> Self {
        Self {
            active_profile: "cli".to_string(),
            output_dir: vault_root.join("_site"),
            templates_dir: vault_root.join(".garden").join("templates"),
            vault_root,
            base_url: default_base_url(),
            excluded_folders: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}
