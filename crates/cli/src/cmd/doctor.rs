use std::path::Path;

use mdgarden_core::config::default_config_path;

use super::resolve_config;
use crate::logging;

pub fn run(config: Option<&Path>, profile: Option<&str>, vault: Option<&Path>) {
    let config_path = config.map_or_else(default_config_path, Path::to_path_buf);

    match resolve_config(config, profile, vault) {
        Ok(rc) => {
            logging::init(&rc);
            tracing::debug!(profile = %rc.active_profile, "config resolved");

            println!("OK   mdgarden doctor");
            println!("path: {}", config_path.display());
            println!("profile: {}", rc.active_profile);
            println!("vault_root: {}", rc.vault_root.display());
            println!("output_dir: {}", rc.output_dir.display());
            println!("templates_dir: {}", rc.templates_dir.display());
            println!("base_url: {}", rc.base_url);
            for folder in &rc.excluded_folders {
                println!("excluded: {}", folder.display());
            }
            if !rc.vault_root.is_dir() {
                println!("WARN vault_root is not a directory");
            }
        }
        Err(e) => {
            println!("FAIL mdgarden doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
