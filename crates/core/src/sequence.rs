//! Séquences protéiques et nucléotidiques

use crate::ambiguity::{dna_expansion, protein_expansion};
use crate::error::{PepsynError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Alphabet d'une séquence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    Protein,
    Dna,
}

impl Alphabet {
    /// Ensemble concret représenté par un symbole de cet alphabet
    pub fn expansion(self, symbol: u8) -> Option<&'static [u8]> {
        match self {
            Alphabet::Protein => protein_expansion(symbol),
            Alphabet::Dna => dna_expansion(symbol),
        }
    }

    /// Vérifie qu'un symbole appartient à l'alphabet
    pub fn contains(self, symbol: u8) -> bool {
        self.expansion(symbol).is_some()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Protein => write!(f, "protein"),
            Alphabet::Dna => write!(f, "dna"),
        }
    }
}

impl FromStr for Alphabet {
    type Err = PepsynError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "protein" | "aa" => Ok(Alphabet::Protein),
            "dna" | "nt" => Ok(Alphabet::Dna),
            other => Err(PepsynError::InvalidParameter(format!(
                "alphabet inconnu: {}",
                other
            ))),
        }
    }
}

/// Séquence immuable avec son alphabet
///
/// Les symboles sont stockés en majuscules ASCII. Les codes d'ambiguïté
/// IUPAC sont acceptés; `*` (stop) l'est dans les protéines.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Sequence {
    alphabet: Alphabet,
    symbols: Vec<u8>,
}

impl Sequence {
    /// Crée une séquence en validant chaque symbole
    pub fn new(alphabet: Alphabet, s: &str) -> Result<Self> {
        Self::from_bytes(alphabet, s.as_bytes())
    }

    /// Crée une séquence protéique
    pub fn protein(s: &str) -> Result<Self> {
        Self::new(Alphabet::Protein, s)
    }

    /// Crée une séquence d'ADN
    pub fn dna(s: &str) -> Result<Self> {
        Self::new(Alphabet::Dna, s)
    }

    /// Crée une séquence depuis des octets ASCII
    pub fn from_bytes(alphabet: Alphabet, bytes: &[u8]) -> Result<Self> {
        let symbols = bytes
            .iter()
            .map(|b| {
                let symbol = b.to_ascii_uppercase();
                if alphabet.contains(symbol) {
                    Ok(symbol)
                } else {
                    Err(PepsynError::InvalidSymbol {
                        symbol: *b as char,
                        alphabet,
                    })
                }
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { alphabet, symbols })
    }

    /// Construit sans validation; réservé aux symboles déjà vérifiés
    pub(crate) fn from_raw(alphabet: Alphabet, symbols: Vec<u8>) -> Self {
        Self { alphabet, symbols }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.symbols
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.symbols
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Sous-séquence `[range.start, range.end)`
    pub fn subsequence(&self, range: Range<usize>) -> Result<Self> {
        if range.start > range.end || range.end > self.len() {
            return Err(PepsynError::InvalidParameter(format!(
                "intervalle [{}, {}) hors de la séquence de longueur {}",
                range.start,
                range.end,
                self.len()
            )));
        }
        Ok(Self::from_raw(self.alphabet, self.symbols[range].to_vec()))
    }

    /// Vrai si aucun symbole n'est un code d'ambiguïté
    pub fn is_unambiguous(&self) -> bool {
        self.symbols
            .iter()
            .all(|&s| self.alphabet.expansion(s).map_or(false, |set| set.len() == 1))
    }

    /// Vérifie l'alphabet attendu
    pub fn expect_alphabet(&self, expected: Alphabet) -> Result<()> {
        if self.alphabet != expected {
            return Err(PepsynError::AlphabetMismatch {
                expected,
                actual: self.alphabet,
            });
        }
        Ok(())
    }

    /// Convertit au format FASTA
    pub fn to_fasta(&self, id: &str) -> String {
        format!(">{}\n{}\n", id, self)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // les symboles sont validés en ASCII
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}

impl AsRef<[u8]> for Sequence {
    fn as_ref(&self) -> &[u8] {
        &self.symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_protein_creation() {
        let seq = Sequence::protein("metmsd").unwrap();
        assert_eq!(seq.to_string(), "METMSD");
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.alphabet(), Alphabet::Protein);
        assert!(seq.is_unambiguous());
    }

    #[test]
    fn test_invalid_symbols() {
        assert!(matches!(
            Sequence::dna("ACGU"),
            Err(PepsynError::InvalidSymbol { symbol: 'U', alphabet: Alphabet::Dna })
        ));
        assert!(Sequence::protein("AC1").is_err());
        assert!(Sequence::dna("ACG*").is_err());
    }

    #[test]
    fn test_ambiguity_detection() {
        assert!(!Sequence::protein("AAXAA").unwrap().is_unambiguous());
        assert!(!Sequence::dna("NGCTT").unwrap().is_unambiguous());
        assert!(Sequence::dna("AGCTT").unwrap().is_unambiguous());
        assert!(Sequence::protein("").unwrap().is_empty());
    }

    #[test]
    fn test_equality_includes_alphabet() {
        // "ACGT" est valide dans les deux alphabets
        let p = Sequence::protein("ACGT").unwrap();
        let d = Sequence::dna("ACGT").unwrap();
        assert_ne!(p, d);
        assert_eq!(p.as_bytes(), d.as_bytes());
    }

    #[test]
    fn test_subsequence() {
        let seq = Sequence::dna("GAGATCCGGT").unwrap();
        assert_eq!(seq.subsequence(2..5).unwrap().to_string(), "GAT");
        assert!(seq.subsequence(5..11).is_err());
        assert!(seq.subsequence(0..0).unwrap().is_empty());
    }

    #[test]
    fn test_alphabet_mismatch() {
        let seq = Sequence::dna("ACGT").unwrap();
        assert!(seq.expect_alphabet(Alphabet::Dna).is_ok());
        assert!(matches!(
            seq.expect_alphabet(Alphabet::Protein),
            Err(PepsynError::AlphabetMismatch { .. })
        ));
    }

    #[test]
    fn test_fasta_format() {
        let seq = Sequence::protein("METMSD").unwrap();
        assert_eq!(seq.to_fasta("pep1"), ">pep1\nMETMSD\n");
    }
}
