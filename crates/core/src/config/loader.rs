use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::types::{ConfigFile, LoggingConfig, Profile, ResolvedConfig};

/// Supported `version` of the configuration file format.
pub const CONFIG_VERSION: u32 = 1;

const VAULT_ROOT_PLACEHOLDER: &str = "{{vault_root}}";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found at {0}")]
    NotFound(String),

    #[error("failed to read config file {0}: {1}")]
    ReadError(String, #[source] std::io::Error),

    #[error("failed to parse TOML in {0}: {1}")]
    ParseError(String, #[source] toml::de::Error),

    #[error("profile '{0}' not found")]
    ProfileNotFound(String),

    #[error("no profiles defined in config")]
    NoProfiles,

    #[error("version {0} is unsupported (expected 1)")]
    BadVersion(u32),

    #[error("home directory not available to expand '~'")]
    NoHome,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads the config file (or the default location) and resolves one
    /// profile into absolute paths.
    ///
    /// The profile is picked from `profile_override`, then the file's
    /// `profile` key, then `"default"`.
    pub fn load(
        config_path: Option<&Path>,
        profile_override: Option<&str>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let path = config_path.map_or_else(default_config_path, Path::to_path_buf);
        let file = read_config_file(&path)?;

        let name = profile_override
            .or(file.profile.as_deref())
            .unwrap_or("default")
            .to_string();
        let Some(profile) = file.profiles.get(&name) else {
            return Err(ConfigError::ProfileNotFound(name));
        };

        tracing::debug!(path = %path.display(), profile = %name, "loaded config");
        resolve(name, profile, &file.logging)
    }
}

fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let shown = || path.display().to_string();
    if !path.is_file() {
        return Err(ConfigError::NotFound(shown()));
    }

    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError(shown(), e))?;
    let file: ConfigFile =
        toml::from_str(&text).map_err(|e| ConfigError::ParseError(shown(), e))?;

    if file.version != CONFIG_VERSION {
        return Err(ConfigError::BadVersion(file.version));
    }
    if file.profiles.is_empty() {
        return Err(ConfigError::NoProfiles);
    }
    Ok(file)
}

fn resolve(
    name: String,
    profile: &Profile,
    logging: &LoggingConfig,
) -> Result<ResolvedConfig, ConfigError> {
    let vault_root = expand_path(&profile.vault_root)?;
    let root_text = vault_root.to_string_lossy().into_owned();
    let expand_in_vault =
        |raw: &str| expand_path(&raw.replace(VAULT_ROOT_PLACEHOLDER, &root_text));

    let output_dir = match profile.output_dir.as_deref() {
        Some(raw) => expand_in_vault(raw)?,
        None => vault_root.join("_site"),
    };
    let templates_dir = match profile.templates_dir.as_deref() {
        Some(raw) => expand_in_vault(raw)?,
        None => vault_root.join(".garden").join("templates"),
    };
    let excluded_folders = profile
        .excluded_folders
        .iter()
        .map(|raw| expand_in_vault(raw.as_str()))
        .collect::<Result<Vec<_>, _>>()?;

    let log_file = logging
        .file
        .as_deref()
        .map(|file| expand_in_vault(file.to_string_lossy().as_ref()))
        .transpose()?;

    Ok(ResolvedConfig {
        active_profile: name,
        vault_root,
        output_dir,
        templates_dir,
        base_url: profile.base_url.clone(),
        excluded_folders,
        logging: LoggingConfig { file: log_file, ..logging.clone() },
    })
}

/// `$XDG_CONFIG_HOME/mdgarden/config.toml`, falling back to
/// `~/.config/mdgarden/config.toml`.
pub fn default_config_path() -> PathBuf {
    let config_home = env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("~/.config"));
    config_home.join("mdgarden").join("config.toml")
}

fn expand_path(input: &str) -> Result<PathBuf, ConfigError> {
    shellexpand::full(input)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .map_err(|_| ConfigError::NoHome)
}
