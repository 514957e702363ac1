//! Commande de recodage des sites interdits

use crate::fasta::{read_entries, write_entry, writer};
use crate::create_progress_bar;
use anyhow::{Context, Result};
use pepsyn_core::{Alphabet, CdsWindow, DesignConfig, Recoder, Sequence};
use std::path::PathBuf;

pub fn run(
    config: &DesignConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    sites: Vec<String>,
    cds_start: Option<usize>,
    cds_end: Option<usize>,
) -> Result<()> {
    eprintln!("🧬 Recodage de: {}", input.display());

    let sites = if sites.is_empty() {
        config.forbidden_sites()?
    } else {
        sites
            .iter()
            .map(|s| Sequence::dna(s))
            .collect::<pepsyn_core::Result<Vec<_>>>()?
    };
    let site_list: Vec<String> = sites.iter().map(ToString::to_string).collect();
    eprintln!("   Sites interdits: {}", site_list.join(", "));

    let sampler = config.build_sampler()?;
    let recoder = Recoder::new(&sampler).with_max_attempts(config.recode.max_attempts);
    let mut rng = config.build_rng();

    let entries = read_entries(&input, Alphabet::Dna)?;
    let mut out = writer(output.as_deref())?;
    let pb = create_progress_bar(entries.len() as u64, "Recodage...");

    for entry in &entries {
        let window = CdsWindow::new(
            cds_start.unwrap_or(0),
            cds_end.unwrap_or(entry.sequence.len()),
        );
        let recoded = recoder
            .recode_sites(&entry.sequence, &sites, window, &mut rng)
            .with_context(|| format!("recodage de {}", entry.id))?;
        if recoded != entry.sequence {
            tracing::info!("{} recodé", entry.id);
        }
        write_entry(&mut out, &entry.id, &recoded)?;
        pb.inc(1);
    }
    out.flush()?;
    pb.finish_with_message("Terminé");

    eprintln!("✅ Recodage terminé!");
    Ok(())
}
