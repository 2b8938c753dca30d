use std::path::Path;

use super::{build_vault, load_config, output::print_json};
use crate::TreeArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    vault: Option<&Path>,
    args: &TreeArgs,
) {
    let rc = load_config(config, profile, vault);
    let vault = build_vault(&rc, args.tag.as_deref());
    let tree = vault.navigation();

    if args.json {
        print_json(tree);
    } else if tree.is_empty() {
        println!("(no notes found)");
    } else {
        print!("{}", tree.outline());
    }
}
