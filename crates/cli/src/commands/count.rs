//! Commande de comptage des variantes

use crate::fasta::{read_entries, Entry};
use anyhow::{Context, Result};
use pepsyn_core::{count_disambiguated, Alphabet};
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Debug, Tabled)]
struct CountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Length")]
    length: usize,
    #[tabled(rename = "Variants")]
    variants: String,
}

pub fn run(input: PathBuf, dna: bool) -> Result<()> {
    let alphabet = if dna { Alphabet::Dna } else { Alphabet::Protein };
    let entries = read_entries(&input, alphabet)?;

    let mut table = Table::new(count_rows(&entries)?);
    table.with(Style::modern());
    println!("{}", table);
    Ok(())
}

fn count_rows(entries: &[Entry]) -> Result<Vec<CountRow>> {
    entries
        .iter()
        .map(|entry| {
            let variants = count_disambiguated(&entry.sequence)
                .with_context(|| format!("comptage de {}", entry.id))?;
            Ok(CountRow {
                id: entry.id.clone(),
                length: entry.sequence.len(),
                variants: variants.to_string(),
            })
        })
        .collect()
}
