//! Types d'erreurs pour la bibliothèque pepsyn

use crate::sequence::Alphabet;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PepsynError {
    #[error("Paramètre invalide: {0}")]
    InvalidParameter(String),

    #[error("Acide aminé inconnu: {0}")]
    UnknownAminoAcid(char),

    #[error("Symbole {symbol:?} invalide pour l'alphabet {alphabet}")]
    InvalidSymbol { symbol: char, alphabet: Alphabet },

    #[error("Alphabet inattendu: attendu {expected}, obtenu {actual}")]
    AlphabetMismatch { expected: Alphabet, actual: Alphabet },

    #[error("Table d'usage des codons invalide: {0}")]
    InvalidUsage(String),

    #[error("Nombre de séquences désambiguïsées supérieur à u128::MAX")]
    CountOverflow,

    #[error("CDS [{start}, {end}) non alignée sur les codons (longueur {})", .end - .start)]
    MisalignedCds { start: usize, end: usize },

    #[error("Impossible d'éliminer le site {site} après {attempts} tentatives")]
    RecodingExhausted { site: String, attempts: usize },

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl PepsynError {
    /// Vrai si la contrainte de recodage n'a pas pu être satisfaite
    /// (par opposition à une entrée mal formée)
    pub fn is_infeasible_recoding(&self) -> bool {
        matches!(
            self,
            PepsynError::MisalignedCds { .. } | PepsynError::RecodingExhausted { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, PepsynError>;
