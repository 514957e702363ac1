//! Commande de désambiguïsation

use crate::create_spinner;
use crate::fasta::{read_entries, write_entry, writer};
use anyhow::Result;
use pepsyn_core::{count_disambiguated, disambiguate, Alphabet};
use std::path::PathBuf;

pub fn run(input: PathBuf, output: Option<PathBuf>, dna: bool) -> Result<()> {
    let alphabet = if dna { Alphabet::Dna } else { Alphabet::Protein };
    eprintln!("🧬 Désambiguïsation ({}) de: {}", alphabet, input.display());

    let entries = read_entries(&input, alphabet)?;
    let mut out = writer(output.as_deref())?;

    for entry in &entries {
        let total = count_disambiguated(&entry.sequence)?;
        let spinner = create_spinner(&format!("{}: {} variantes", entry.id, total));
        for (i, variant) in disambiguate(&entry.sequence).enumerate() {
            write_entry(&mut out, &format!("{}|{}", entry.id, i), &variant)?;
            if i % 4096 == 0 {
                spinner.tick();
            }
        }
        spinner.finish_with_message(format!("{}: {} variantes écrites", entry.id, total));
    }
    out.flush()?;

    eprintln!("✅ Désambiguïsation terminée!");
    Ok(())
}
