//! Commande de rétro-traduction

use crate::fasta::{read_entries, write_entry, writer};
use crate::{create_progress_bar, create_spinner, SamplerArg};
use anyhow::Result;
use pepsyn_core::{reverse_translate, Alphabet, DesignConfig, SamplerKind};
use std::path::PathBuf;

pub fn run(
    config: &DesignConfig,
    input: PathBuf,
    output: Option<PathBuf>,
    sampler: Option<SamplerArg>,
) -> Result<()> {
    eprintln!("🧬 Rétro-traduction de: {}", input.display());

    let spinner = create_spinner("Lecture des protéines...");
    let proteins = read_entries(&input, Alphabet::Protein)?;
    spinner.finish_with_message(format!("{} protéines lues", proteins.len()));

    let mut config = config.clone();
    if let Some(sampler) = sampler {
        config.sampler = match sampler {
            SamplerArg::Uniform => SamplerKind::Uniform,
            SamplerArg::Weighted => SamplerKind::FrequencyWeighted,
        };
    }
    let sampler = config.build_sampler()?;
    let mut rng = config.build_rng();

    let mut out = writer(output.as_deref())?;
    let pb = create_progress_bar(proteins.len() as u64, "Rétro-traduction...");
    for entry in &proteins {
        let dna = reverse_translate(&entry.sequence, &sampler, &mut rng)?;
        write_entry(&mut out, &entry.id, &dna)?;
        pb.inc(1);
    }
    out.flush()?;
    pb.finish_with_message("Terminé");

    eprintln!("✅ Rétro-traduction terminée!");
    Ok(())
}
