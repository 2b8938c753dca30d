use std::path::Path;

use tabled::{Table, Tabled, settings::Style};

use super::{build_vault, load_config};

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Notes")]
    notes: usize,
}

pub fn run(config: Option<&Path>, profile: Option<&str>, vault: Option<&Path>) {
    let rc = load_config(config, profile, vault);
    let vault = build_vault(&rc, None);

    let rows: Vec<TagRow> = vault
        .tag_counts()
        .into_iter()
        .map(|(tag, notes)| TagRow { tag, notes })
        .collect();

    if rows.is_empty() {
        println!("(no tags found)");
        return;
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}
