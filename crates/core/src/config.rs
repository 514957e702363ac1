//! Configuration de la conception de séquences

use crate::codons::{CodonSampler, CodonUsage};
use crate::error::Result;
use crate::recode::DEFAULT_MAX_ATTEMPTS;
use crate::sequence::Sequence;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stratégie d'échantillonnage des codons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplerKind {
    Uniform,
    #[default]
    FrequencyWeighted,
}

/// Paramètres du recodage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecodeConfig {
    /// Nombre maximal de réparations avant abandon
    pub max_attempts: usize,
}

impl Default for RecodeConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Configuration du logging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Configuration complète
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignConfig {
    pub sampler: SamplerKind,
    /// Table d'usage JSON; E. coli si absente
    pub usage_table: Option<PathBuf>,
    /// Graine du générateur; aléatoire si absente
    pub seed: Option<u64>,
    pub recode: RecodeConfig,
    pub forbidden_sites: Vec<String>,
    pub logging: LoggingConfig,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            sampler: SamplerKind::default(),
            usage_table: None,
            seed: None,
            recode: RecodeConfig::default(),
            // EcoRI, HindIII
            forbidden_sites: vec!["GAATTC".to_string(), "AAGCTT".to_string()],
            logging: LoggingConfig::default(),
        }
    }
}

impl DesignConfig {
    /// Construit l'échantillonneur configuré
    pub fn build_sampler(&self) -> Result<CodonSampler> {
        match self.sampler {
            SamplerKind::Uniform => Ok(CodonSampler::uniform()),
            SamplerKind::FrequencyWeighted => match &self.usage_table {
                Some(path) => CodonSampler::frequency_weighted(&CodonUsage::from_json_file(path)?),
                None => CodonSampler::ecoli(),
            },
        }
    }

    /// Générateur initialisé par la graine, ou par l'entropie du système
    pub fn build_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    /// Sites interdits validés
    pub fn forbidden_sites(&self) -> Result<Vec<Sequence>> {
        self.forbidden_sites.iter().map(|s| Sequence::dna(s)).collect()
    }
}
