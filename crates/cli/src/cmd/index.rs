//! Index command implementation.

use std::path::Path;

use super::{build_vault, load_config, output::print_json};
use crate::IndexArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    vault: Option<&Path>,
    args: &IndexArgs,
) {
    let rc = load_config(config, profile, vault);
    let vault = build_vault(&rc, args.tag.as_deref());
    let stats = vault.stats();

    if args.json {
        print_json(&serde_json::json!({
            "vault_root": vault.root(),
            "stats": stats,
            "links": vault.graph().edge_count(),
            "notes": vault.notes().keys().collect::<Vec<_>>(),
        }));
        return;
    }

    println!("Indexed vault: {}", vault.root().display());
    if let Some(tag) = &args.tag {
        println!("  Tag filter:       {}", tag);
    }
    println!("  Files found:      {}", stats.files_found);
    println!("  Notes indexed:    {}", vault.notes().len());
    if stats.notes_skipped > 0 {
        println!("  Notes skipped:    {}", stats.notes_skipped);
    }
    println!("  Assets indexed:   {}", stats.assets_indexed);
    println!("  Files ignored:    {}", stats.files_ignored);
    println!("  Links:            {}", vault.graph().edge_count());
    println!("  Unresolved links: {}", stats.unresolved_references);
    println!("  Duration:         {}ms", stats.duration_ms);
}
