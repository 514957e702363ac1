//! Rétro-traduction protéine → ADN

use crate::codons::CodonSampler;
use crate::error::Result;
use crate::sequence::{Alphabet, Sequence};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::log_operation;

/// Rétro-traduit une protéine: un codon tiré par position
///
/// La traduction du résultat redonne exactement `protein`. Un symbole
/// ambigu (`X`, `B`...) n'a pas de codon et produit une erreur.
pub fn reverse_translate<R: Rng + ?Sized>(
    protein: &Sequence,
    sampler: &CodonSampler,
    rng: &mut R,
) -> Result<Sequence> {
    protein.expect_alphabet(Alphabet::Protein)?;

    let mut dna = Vec::with_capacity(protein.len() * 3);
    for &aa in protein.as_bytes() {
        dna.extend_from_slice(&sampler.sample(aa, rng)?);
    }

    tracing::debug!(aa = protein.len(), nt = dna.len(), "rétro-traduction");
    Ok(Sequence::from_raw(Alphabet::Dna, dna))
}

/// Rétro-traduit un lot de protéines en parallèle
///
/// La protéine `i` utilise son propre flux ChaCha8 dérivé de `seed` et de
/// `i`: le résultat ne dépend pas de l'ordonnancement des threads.
pub fn reverse_translate_batch(
    proteins: &[Sequence],
    sampler: &CodonSampler,
    seed: u64,
) -> Result<Vec<Sequence>> {
    log_operation!("reverse_translate_batch", {
        proteins
            .par_iter()
            .enumerate()
            .map(|(i, protein)| {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                rng.set_stream(i as u64);
                reverse_translate(protein, sampler, &mut rng)
            })
            .collect::<Result<Vec<Sequence>>>()
    })
}
