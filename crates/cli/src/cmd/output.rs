//! Shared output formatting for query commands.

use mdgarden_core::vault::ItemPath;
use mdgarden_core::wikilink::Wikilink;
use serde::Serialize;

/// Formatted link for JSON output.
#[derive(Debug, Serialize)]
pub struct LinkOutput {
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Identity the target resolved to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<String>,
}

impl LinkOutput {
    pub fn from_reference(link: &Wikilink, resolved: Option<ItemPath>) -> Self {
        Self {
            target: link.target.clone(),
            label: link.label.clone(),
            resolved: resolved.map(|id| id.to_string()),
        }
    }
}

pub fn print_links(links: &[LinkOutput]) {
    if links.is_empty() {
        println!("(none)");
        return;
    }

    for link in links {
        match &link.resolved {
            Some(id) => println!("  {} -> {}", link.target, id),
            None => println!("  {} (unresolved)", link.target),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing output: {}", e);
            std::process::exit(1);
        }
    }
}
