//! Élimination de sites interdits dans une région codante
//!
//! Le recodage ne fait que des substitutions synonymes, codon par codon,
//! à l'intérieur de la fenêtre CDS: la protéine codée, la longueur et
//! tout ce qui est hors de la fenêtre restent identiques.

use crate::codons::CodonSampler;
use crate::error::{PepsynError, Result};
use crate::genetic_code::translate_codon;
use crate::scan::{find_all, overlaps};
use crate::sequence::{Alphabet, Sequence};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Nombre maximal de réparations par défaut
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Fenêtre codante `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CdsWindow {
    pub start: usize,
    pub end: usize,
}

impl CdsWindow {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Toute la séquence est codante
    pub fn full(len: usize) -> Self {
        Self { start: 0, end: len }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_codon_aligned(&self) -> bool {
        self.len() % 3 == 0
    }

    fn validate(&self, seq_len: usize) -> Result<()> {
        if self.start > self.end || self.end > seq_len {
            return Err(PepsynError::InvalidParameter(format!(
                "CDS [{}, {}) invalide pour une séquence de longueur {}",
                self.start, self.end, seq_len
            )));
        }
        Ok(())
    }
}

/// Recodeur à budget borné
#[derive(Debug, Clone)]
pub struct Recoder<'a> {
    sampler: &'a CodonSampler,
    max_attempts: usize,
}

impl<'a> Recoder<'a> {
    pub fn new(sampler: &'a CodonSampler) -> Self {
        Self {
            sampler,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Définit le nombre maximal de réparations
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Élimine un site de la fenêtre
    pub fn recode_site<R: Rng + ?Sized>(
        &self,
        dna: &Sequence,
        site: &Sequence,
        window: CdsWindow,
        rng: &mut R,
    ) -> Result<Sequence> {
        self.recode_sites(dna, std::slice::from_ref(site), window, rng)
    }

    /// Élimine plusieurs sites, dans l'ordre
    ///
    /// Chaque site est éliminé complètement avant le suivant. La liste est
    /// reparcourue tant qu'une réparation tardive a réintroduit un site
    /// déjà traité; tous les passages partagent le même budget.
    pub fn recode_sites<R: Rng + ?Sized>(
        &self,
        dna: &Sequence,
        sites: &[Sequence],
        window: CdsWindow,
        rng: &mut R,
    ) -> Result<Sequence> {
        dna.expect_alphabet(Alphabet::Dna)?;
        window.validate(dna.len())?;
        for site in sites {
            validate_site(site)?;
        }

        let mut symbols = dna.as_bytes().to_vec();
        let mut attempts = 0;

        loop {
            for site in sites {
                self.clear_site(&mut symbols, site.as_bytes(), window, &mut attempts, rng)?;
            }
            let clean = sites
                .iter()
                .all(|site| first_overlapping(&symbols, site.as_bytes(), window).is_none());
            if clean {
                break;
            }
        }

        Ok(Sequence::from_raw(Alphabet::Dna, symbols))
    }

    fn clear_site<R: Rng + ?Sized>(
        &self,
        symbols: &mut [u8],
        site: &[u8],
        window: CdsWindow,
        attempts: &mut usize,
        rng: &mut R,
    ) -> Result<()> {
        while let Some(pos) = first_overlapping(symbols, site, window) {
            if !window.is_codon_aligned() {
                return Err(PepsynError::MisalignedCds {
                    start: window.start,
                    end: window.end,
                });
            }
            if *attempts >= self.max_attempts {
                return Err(self.exhausted(site, *attempts));
            }
            *attempts += 1;

            // codons entiers de la fenêtre touchés par l'occurrence
            let lo = pos.max(window.start);
            let hi = (pos + site.len()).min(window.end);
            let first = window.start + (lo - window.start) / 3 * 3;
            let codon_starts: Vec<usize> = (first..hi).step_by(3).collect();

            let mut mutable = false;
            for &start in &codon_starts {
                let codon = &mut symbols[start..start + 3];
                let aa = translate_codon(codon)?;
                mutable |= self.sampler.choices(aa) > 1;
                codon.copy_from_slice(&self.sampler.sample(aa, rng)?);
            }

            tracing::debug!(
                site = %String::from_utf8_lossy(site),
                pos,
                codons = codon_starts.len(),
                attempt = *attempts,
                "réparation d'un site dans la CDS"
            );

            // aucun codon n'a de synonyme: inutile d'insister
            if !mutable {
                return Err(self.exhausted(site, *attempts));
            }
        }
        Ok(())
    }

    fn exhausted(&self, site: &[u8], attempts: usize) -> PepsynError {
        let site = String::from_utf8_lossy(site).into_owned();
        tracing::warn!(%site, attempts, "recodage impossible");
        PepsynError::RecodingExhausted { site, attempts }
    }
}

fn validate_site(site: &Sequence) -> Result<()> {
    site.expect_alphabet(Alphabet::Dna)?;
    if site.is_empty() || !site.is_unambiguous() {
        return Err(PepsynError::InvalidParameter(format!(
            "site interdit invalide: {:?}",
            site.to_string()
        )));
    }
    Ok(())
}

fn first_overlapping(symbols: &[u8], site: &[u8], window: CdsWindow) -> Option<usize> {
    find_all(symbols, site)
        .into_iter()
        .find(|&pos| overlaps(pos, site.len(), window.start, window.end))
}

/// Élimine `site` de la CDS `[cds_start, cds_end)` par substitutions synonymes
pub fn recode_site_from_cds<R: Rng + ?Sized>(
    dna: &Sequence,
    site: &Sequence,
    sampler: &CodonSampler,
    rng: &mut R,
    cds_start: usize,
    cds_end: usize,
) -> Result<Sequence> {
    Recoder::new(sampler).recode_site(dna, site, CdsWindow::new(cds_start, cds_end), rng)
}

/// Élimine tous les `sites` de la CDS `[cds_start, cds_end)`
pub fn recode_sites_from_cds<R: Rng + ?Sized>(
    dna: &Sequence,
    sites: &[Sequence],
    sampler: &CodonSampler,
    rng: &mut R,
    cds_start: usize,
    cds_end: usize,
) -> Result<Sequence> {
    Recoder::new(sampler).recode_sites(dna, sites, CdsWindow::new(cds_start, cds_end), rng)
}
