//! pepsyn core
//!
//! Conception de séquences d'ADN synthétisables pour des banques de
//! peptides: rétro-traduction, élimination de sites interdits dans une
//! région codante et désambiguïsation IUPAC.

pub mod ambiguity;
pub mod codons;
pub mod config;
pub mod disambiguate;
pub mod error;
pub mod genetic_code;
pub mod logging;
pub mod peptide;
pub mod recode;
pub mod scan;
pub mod sequence;
pub mod translate;

// Réexportations principales
pub use error::{PepsynError, Result};
pub use sequence::{Alphabet, Sequence};
pub use codons::{CodonSampler, CodonUsage};
pub use config::{DesignConfig, LoggingConfig, RecodeConfig, SamplerKind};
pub use genetic_code::{translate, translate_codon, Codon};
pub use translate::{reverse_translate, reverse_translate_batch};
pub use recode::{recode_site_from_cds, recode_sites_from_cds, CdsWindow, Recoder};
pub use disambiguate::{
    count_disambiguated, disambiguate, disambiguate_dna, disambiguate_protein,
    num_disambiguated_dna, num_disambiguated_protein, Disambiguations,
};
pub use peptide::{ctermpep, pad_ggsg, tile, x_to_ggsg, Terminus, Tile};
pub use logging::init_logging;
// La macro log_operation est automatiquement exportée à la racine du crate
