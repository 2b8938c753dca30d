//! Links command implementation.

use std::path::Path;

use mdgarden_core::vault::ItemPath;

use super::output::{LinkOutput, print_json, print_links};
use super::{build_vault, load_config};
use crate::LinksArgs;

pub fn run(
    config: Option<&Path>,
    profile: Option<&str>,
    vault: Option<&Path>,
    args: &LinksArgs,
) {
    let rc = load_config(config, profile, vault);
    let vault = build_vault(&rc, None);

    let id = normalize_note(&args.note);
    let note = match vault.require_note(&id) {
        Ok(note) => note,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("Hint: use the path relative to the vault root, e.g. 'posts/hello'.");
            std::process::exit(1);
        }
    };

    let outgoing: Vec<LinkOutput> = note
        .links()
        .map(|link| LinkOutput::from_reference(link, vault.resolve(&link.target, &id)))
        .collect();

    let backlinks: Vec<String> =
        vault.graph().backlinks(&id).map(ToString::to_string).collect();

    if args.json {
        print_json(&serde_json::json!({
            "note": id,
            "outgoing": outgoing,
            "backlinks": backlinks,
        }));
        return;
    }

    println!("=== Outgoing links ({}) ===", id);
    print_links(&outgoing);
    println!();
    println!("=== Backlinks ({}) ===", id);
    if backlinks.is_empty() {
        println!("(none)");
    }
    for source in &backlinks {
        println!("  {}", source);
    }
}

/// Accept `./posts/hello.md` as well as `posts/hello`. Only a trailing
/// `.md` is removed, so `posts/v1.2` names the note `posts/v1.2`.
fn normalize_note(input: &str) -> ItemPath {
    let trimmed = input.trim();
    let trimmed = trimmed.strip_prefix("./").unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(".md").unwrap_or(trimmed);
    ItemPath::new(trimmed.split('/').filter(|part| !part.is_empty()))
}
