//! Commandes de manipulation des peptides

use crate::fasta::{read_entries, write_entry, writer};
use anyhow::Result;
use pepsyn_core::{ctermpep as cterm_peptide, pad_ggsg, tile as tile_protein, x_to_ggsg, Alphabet, Terminus};
use std::path::PathBuf;

pub fn tile(input: PathBuf, output: Option<PathBuf>, length: usize, overlap: usize) -> Result<()> {
    let entries = read_entries(&input, Alphabet::Protein)?;
    let mut out = writer(output.as_deref())?;

    let mut count = 0;
    for entry in &entries {
        for t in tile_protein(&entry.sequence, length, overlap)? {
            write_entry(&mut out, &format!("{}|{}-{}", entry.id, t.start, t.end), &t.peptide)?;
            count += 1;
        }
    }
    out.flush()?;

    eprintln!("✅ {} fragments de {} résidus", count, length);
    Ok(())
}

pub fn ctermpep(input: PathBuf, output: Option<PathBuf>, length: usize, add_stop: bool) -> Result<()> {
    let entries = read_entries(&input, Alphabet::Protein)?;
    let mut out = writer(output.as_deref())?;

    for entry in &entries {
        let peptide = cterm_peptide(&entry.sequence, length, add_stop)?;
        write_entry(&mut out, &entry.id, &peptide)?;
    }
    out.flush()?;
    Ok(())
}

pub fn pad(input: PathBuf, output: Option<PathBuf>, length: usize, terminus: &str) -> Result<()> {
    let terminus: Terminus = terminus.parse()?;
    let entries = read_entries(&input, Alphabet::Protein)?;
    let mut out = writer(output.as_deref())?;

    for entry in &entries {
        let padded = pad_ggsg(&entry.sequence, length, terminus)?;
        write_entry(&mut out, &entry.id, &padded)?;
    }
    out.flush()?;
    Ok(())
}

pub fn linker(input: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let entries = read_entries(&input, Alphabet::Protein)?;
    let mut out = writer(output.as_deref())?;

    for entry in &entries {
        write_entry(&mut out, &entry.id, &x_to_ggsg(&entry.sequence)?)?;
    }
    out.flush()?;
    Ok(())
}
