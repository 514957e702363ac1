//! Tables d'usage des codons et échantillonneurs de codons

use crate::error::{PepsynError, Result};
use crate::genetic_code::{codons_for, translate_codon, Codon};
use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::OnceLock;

/// Usage des codons chez E. coli K-12 (fréquences pour mille, Kazusa)
const ECOLI_K12_USAGE: &[(&[u8; 3], u8, f64)] = &[
    (b"TTT", b'F', 22.1), (b"TTC", b'F', 16.0), (b"TTA", b'L', 14.3), (b"TTG", b'L', 13.0),
    (b"CTT", b'L', 11.9), (b"CTC", b'L', 10.2), (b"CTA", b'L', 4.2), (b"CTG", b'L', 48.4),
    (b"ATT", b'I', 29.8), (b"ATC", b'I', 23.7), (b"ATA", b'I', 6.8), (b"ATG", b'M', 26.4),
    (b"GTT", b'V', 19.8), (b"GTC", b'V', 14.3), (b"GTA", b'V', 11.6), (b"GTG", b'V', 24.4),
    (b"TCT", b'S', 10.4), (b"TCC", b'S', 9.1), (b"TCA", b'S', 8.9), (b"TCG", b'S', 8.5),
    (b"CCT", b'P', 7.5), (b"CCC", b'P', 5.4), (b"CCA", b'P', 8.6), (b"CCG", b'P', 20.9),
    (b"ACT", b'T', 10.3), (b"ACC", b'T', 22.0), (b"ACA", b'T', 9.3), (b"ACG", b'T', 13.7),
    (b"GCT", b'A', 17.1), (b"GCC", b'A', 24.2), (b"GCA", b'A', 21.2), (b"GCG", b'A', 30.1),
    (b"TAT", b'Y', 17.5), (b"TAC", b'Y', 12.2), (b"TAA", b'*', 2.0), (b"TAG", b'*', 0.3),
    (b"CAT", b'H', 12.5), (b"CAC", b'H', 9.3), (b"CAA", b'Q', 14.6), (b"CAG", b'Q', 28.4),
    (b"AAT", b'N', 20.6), (b"AAC", b'N', 21.4), (b"AAA", b'K', 35.3), (b"AAG", b'K', 12.4),
    (b"GAT", b'D', 32.7), (b"GAC", b'D', 19.2), (b"GAA", b'E', 39.1), (b"GAG", b'E', 18.7),
    (b"TGT", b'C', 5.2), (b"TGC", b'C', 6.1), (b"TGA", b'*', 1.0), (b"TGG", b'W', 13.9),
    (b"CGT", b'R', 20.0), (b"CGC", b'R', 19.7), (b"CGA", b'R', 3.8), (b"CGG", b'R', 5.9),
    (b"AGT", b'S', 9.9), (b"AGC", b'S', 15.2), (b"AGA", b'R', 3.6), (b"AGG", b'R', 2.1),
    (b"GGT", b'G', 25.5), (b"GGC", b'G', 27.1), (b"GGA", b'G', 9.5), (b"GGG", b'G', 11.3),
];

/// Forme sérialisée: `{"A": {"GCT": 17.1, ...}, ...}`
type UsageMap = BTreeMap<char, BTreeMap<String, f64>>;

/// Poids relatifs des codons de chaque acide aminé
///
/// Les poids d'un acide aminé ne sont pas forcément normalisés. Chaque
/// codon listé code l'acide aminé sous lequel il apparaît, donc un codon
/// stop ne peut apparaître que sous `*`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UsageMap", into = "UsageMap")]
pub struct CodonUsage {
    weights: BTreeMap<u8, Vec<(Codon, f64)>>,
}

impl CodonUsage {
    /// Table E. coli K-12 partagée par tout le processus
    pub fn ecoli() -> &'static CodonUsage {
        static ECOLI: OnceLock<CodonUsage> = OnceLock::new();
        ECOLI.get_or_init(|| {
            let mut weights: BTreeMap<u8, Vec<(Codon, f64)>> = BTreeMap::new();
            for &(codon, aa, freq) in ECOLI_K12_USAGE {
                weights.entry(aa).or_default().push((*codon, freq));
            }
            CodonUsage { weights }
        })
    }

    /// Construit une table en vérifiant ses invariants
    pub fn from_weights<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (u8, Codon, f64)>,
    {
        let mut weights: BTreeMap<u8, Vec<(Codon, f64)>> = BTreeMap::new();

        for (aa, codon, weight) in entries {
            let aa = aa.to_ascii_uppercase();
            let codon = codon.map(|b| b.to_ascii_uppercase());
            let encoded = translate_codon(&codon)?;
            if encoded != aa {
                return Err(PepsynError::InvalidUsage(format!(
                    "{} code {} et non {}",
                    String::from_utf8_lossy(&codon),
                    encoded as char,
                    aa as char
                )));
            }
            if !weight.is_finite() || weight < 0.0 {
                return Err(PepsynError::InvalidUsage(format!(
                    "poids invalide pour {}: {}",
                    String::from_utf8_lossy(&codon),
                    weight
                )));
            }

            let codons = weights.entry(aa).or_default();
            if codons.iter().any(|(c, _)| *c == codon) {
                return Err(PepsynError::InvalidUsage(format!(
                    "codon {} dupliqué",
                    String::from_utf8_lossy(&codon)
                )));
            }
            codons.push((codon, weight));
        }

        for (aa, codons) in &weights {
            if codons.iter().all(|(_, w)| *w == 0.0) {
                return Err(PepsynError::InvalidUsage(format!(
                    "aucun codon de poids positif pour {}",
                    *aa as char
                )));
            }
        }

        Ok(Self { weights })
    }

    /// Charge une table depuis un fichier JSON
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Parse une table JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Codons et poids d'un acide aminé
    pub fn codon_weights(&self, aa: u8) -> Option<&[(Codon, f64)]> {
        self.weights.get(&aa).map(Vec::as_slice)
    }

    /// Acides aminés couverts par la table
    pub fn amino_acids(&self) -> impl Iterator<Item = u8> + '_ {
        self.weights.keys().copied()
    }
}

impl TryFrom<UsageMap> for CodonUsage {
    type Error = PepsynError;

    fn try_from(map: UsageMap) -> Result<Self> {
        let mut entries = Vec::new();
        for (aa, codons) in map {
            if !aa.is_ascii() {
                return Err(PepsynError::UnknownAminoAcid(aa));
            }
            for (codon, weight) in codons {
                let codon: Codon = codon.as_bytes().try_into().map_err(|_| {
                    PepsynError::InvalidUsage(format!("codon invalide: {}", codon))
                })?;
                entries.push((aa as u8, codon, weight));
            }
        }
        Self::from_weights(entries)
    }
}

impl From<CodonUsage> for UsageMap {
    fn from(usage: CodonUsage) -> Self {
        usage
            .weights
            .into_iter()
            .map(|(aa, codons)| {
                let codons = codons
                    .into_iter()
                    .map(|(codon, w)| (String::from_utf8_lossy(&codon).into_owned(), w))
                    .collect();
                (aa as char, codons)
            })
            .collect()
    }
}

/// Stratégie d'échantillonnage des codons synonymes
///
/// L'échantillonneur ne garde aucun état entre deux appels: l'aléa est
/// fourni par l'appelant, ce qui le rend partageable entre threads et
/// reproductible avec un générateur initialisé par graine.
#[derive(Debug, Clone)]
pub enum CodonSampler {
    /// Tirage uniforme parmi les codons du code génétique standard
    Uniform,
    /// Tirage proportionnel aux poids d'une table d'usage
    FrequencyWeighted(WeightedCodons),
}

/// Distributions précalculées par acide aminé
#[derive(Debug, Clone)]
pub struct WeightedCodons {
    distributions: BTreeMap<u8, (Vec<Codon>, WeightedIndex<f64>)>,
}

impl CodonSampler {
    /// Échantillonneur uniforme
    pub fn uniform() -> Self {
        CodonSampler::Uniform
    }

    /// Échantillonneur pondéré par une table d'usage
    pub fn frequency_weighted(usage: &CodonUsage) -> Result<Self> {
        let mut distributions = BTreeMap::new();
        for (&aa, codons) in &usage.weights {
            let dist = WeightedIndex::new(codons.iter().map(|(_, w)| *w))
                .map_err(|e| PepsynError::InvalidUsage(format!("{}: {}", aa as char, e)))?;
            let codons = codons.iter().map(|(c, _)| *c).collect();
            distributions.insert(aa, (codons, dist));
        }
        Ok(CodonSampler::FrequencyWeighted(WeightedCodons { distributions }))
    }

    /// Échantillonneur pondéré par la table E. coli
    pub fn ecoli() -> Result<Self> {
        Self::frequency_weighted(CodonUsage::ecoli())
    }

    /// Tire un codon codant `aa`
    pub fn sample<R: Rng + ?Sized>(&self, aa: u8, rng: &mut R) -> Result<Codon> {
        match self {
            CodonSampler::Uniform => codons_for(aa)
                .and_then(|codons| codons.choose(rng))
                .copied()
                .ok_or(PepsynError::UnknownAminoAcid(aa as char)),
            CodonSampler::FrequencyWeighted(table) => {
                let (codons, dist) = table
                    .distributions
                    .get(&aa)
                    .ok_or(PepsynError::UnknownAminoAcid(aa as char))?;
                Ok(codons[dist.sample(rng)])
            }
        }
    }

    /// Nombre de codons que l'échantillonneur peut produire pour `aa`
    pub fn choices(&self, aa: u8) -> usize {
        match self {
            CodonSampler::Uniform => codons_for(aa).map_or(0, <[Codon]>::len),
            CodonSampler::FrequencyWeighted(table) => table
                .distributions
                .get(&aa)
                .map_or(0, |(codons, _)| codons.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ambiguity::UNAMBIGUOUS_PROTEIN;
    use crate::genetic_code::is_stop_codon;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    #[test]
    fn test_ecoli_table_is_valid() {
        let usage = CodonUsage::ecoli();
        let entries = usage
            .weights
            .iter()
            .flat_map(|(&aa, codons)| codons.iter().map(move |&(c, w)| (aa, c, w)));
        let rebuilt = CodonUsage::from_weights(entries).unwrap();
        assert_eq!(&rebuilt, usage);
        assert_eq!(usage.amino_acids().count(), 21);
        assert_eq!(usage.codon_weights(b'L').unwrap().len(), 6);
    }

    #[test]
    fn test_from_weights_rejects_wrong_amino_acid() {
        let result = CodonUsage::from_weights([(b'A', *b"GAA", 1.0)]);
        assert!(matches!(result, Err(PepsynError::InvalidUsage(_))));
    }

    #[test]
    fn test_from_weights_rejects_all_zero() {
        let result = CodonUsage::from_weights([(b'K', *b"AAA", 0.0), (b'K', *b"AAG", 0.0)]);
        assert!(result.is_err());
        let result = CodonUsage::from_weights([(b'K', *b"AAA", -1.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let json = r#"{"K": {"AAA": 3.0, "AAG": 1.0}, "M": {"ATG": 1.0}}"#;
        let usage = CodonUsage::from_json(json).unwrap();
        assert_eq!(usage.codon_weights(b'K').unwrap().len(), 2);
        let back = serde_json::to_string(&usage).unwrap();
        assert_eq!(CodonUsage::from_json(&back).unwrap(), usage);
        assert!(CodonUsage::from_json(r#"{"K": {"AAAA": 1.0}}"#).is_err());
    }

    #[test]
    fn test_uniform_sampler_covers_synonyms() {
        let sampler = CodonSampler::uniform();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = HashMap::new();
        for _ in 0..600 {
            let codon = sampler.sample(b'L', &mut rng).unwrap();
            assert_eq!(translate_codon(&codon).unwrap(), b'L');
            *seen.entry(codon).or_insert(0) += 1;
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_weighted_sampler_follows_weights() {
        let usage = CodonUsage::from_weights([(b'K', *b"AAA", 9.0), (b'K', *b"AAG", 1.0)]).unwrap();
        let sampler = CodonSampler::frequency_weighted(&usage).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let aaa = (0..2000)
            .filter(|_| sampler.sample(b'K', &mut rng).unwrap() == *b"AAA")
            .count();
        assert!(aaa > 1600 && aaa < 1990, "{}", aaa);
    }

    #[test]
    fn test_zero_weight_codon_never_drawn() {
        let usage = CodonUsage::from_weights([(b'K', *b"AAA", 1.0), (b'K', *b"AAG", 0.0)]).unwrap();
        let sampler = CodonSampler::frequency_weighted(&usage).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!((0..200).all(|_| sampler.sample(b'K', &mut rng).unwrap() == *b"AAA"));
    }

    #[test]
    fn test_unknown_amino_acid() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        for sampler in [CodonSampler::uniform(), CodonSampler::ecoli().unwrap()] {
            assert!(matches!(
                sampler.sample(b'X', &mut rng),
                Err(PepsynError::UnknownAminoAcid('X'))
            ));
            assert!(sampler.sample(b'B', &mut rng).is_err());
        }
    }

    #[test]
    fn test_amino_acids_never_get_stop_codons() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let sampler = CodonSampler::ecoli().unwrap();
        for &aa in UNAMBIGUOUS_PROTEIN {
            for _ in 0..20 {
                assert!(!is_stop_codon(&sampler.sample(aa, &mut rng).unwrap()));
            }
        }
        assert!(is_stop_codon(&sampler.sample(b'*', &mut rng).unwrap()));
    }

    #[test]
    fn test_choices() {
        let sampler = CodonSampler::uniform();
        assert_eq!(sampler.choices(b'W'), 1);
        assert_eq!(sampler.choices(b'R'), 6);
        assert_eq!(sampler.choices(b'J'), 0);
    }
}
