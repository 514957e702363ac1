//! Lecture et écriture FASTA

use anyhow::{Context, Result};
use bio::io::fasta;
use pepsyn_core::{Alphabet, Sequence};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Enregistrement validé
pub struct Entry {
    pub id: String,
    pub sequence: Sequence,
}

/// Lit et valide tous les enregistrements d'un fichier FASTA
pub fn read_entries(path: &Path, alphabet: Alphabet) -> Result<Vec<Entry>> {
    let reader = fasta::Reader::from_file(path)
        .with_context(|| format!("ouverture de {}", path.display()))?;

    let mut entries = Vec::new();
    for record in reader.records() {
        let record = record.with_context(|| format!("FASTA invalide: {}", path.display()))?;
        let sequence = Sequence::from_bytes(alphabet, record.seq())
            .with_context(|| format!("enregistrement {}", record.id()))?;
        entries.push(Entry {
            id: record.id().to_string(),
            sequence,
        });
    }

    tracing::info!("{} séquences lues depuis {}", entries.len(), path.display());
    Ok(entries)
}

/// Écrivain FASTA vers un fichier, ou stdout
pub fn writer(output: Option<&Path>) -> Result<fasta::Writer<Box<dyn Write>>> {
    let sink: Box<dyn Write> = match output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("création de {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };
    Ok(fasta::Writer::new(sink))
}

/// Écrit un enregistrement
pub fn write_entry(
    writer: &mut fasta::Writer<Box<dyn Write>>,
    id: &str,
    sequence: &Sequence,
) -> Result<()> {
    writer.write(id, None, sequence.as_bytes())?;
    Ok(())
}
