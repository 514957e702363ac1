//! Désambiguïsation IUPAC: énumération paresseuse et dénombrement

use crate::error::{PepsynError, Result};
use crate::sequence::{Alphabet, Sequence};
use std::iter::FusedIterator;

/// Produit cartésien paresseux des ensembles concrets de chaque position
///
/// L'ordre est lexicographique: la dernière position varie le plus vite et
/// chaque ensemble est parcouru dans l'ordre alphabétique. Chaque appel à
/// [`disambiguate`] possède son propre curseur.
#[derive(Debug, Clone)]
pub struct Disambiguations {
    alphabet: Alphabet,
    sets: Vec<&'static [u8]>,
    cursor: Option<Vec<usize>>,
}

impl Disambiguations {
    fn remaining(&self) -> Option<usize> {
        let cursor = match &self.cursor {
            Some(cursor) => cursor,
            None => return Some(0),
        };
        // rang du curseur compté depuis la fin, plus l'élément courant
        let mut remaining: usize = 1;
        let mut weight: usize = 1;
        for (set, &i) in self.sets.iter().zip(cursor).rev() {
            remaining = remaining.checked_add((set.len() - 1 - i).checked_mul(weight)?)?;
            weight = weight.checked_mul(set.len())?;
        }
        Some(remaining)
    }
}

impl Iterator for Disambiguations {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        let cursor = self.cursor.as_mut()?;
        let symbols = cursor
            .iter()
            .zip(&self.sets)
            .map(|(&i, set)| set[i])
            .collect();

        let mut advanced = false;
        for pos in (0..cursor.len()).rev() {
            cursor[pos] += 1;
            if cursor[pos] < self.sets[pos].len() {
                advanced = true;
                break;
            }
            cursor[pos] = 0;
        }
        if !advanced {
            self.cursor = None;
        }

        Some(Sequence::from_raw(self.alphabet, symbols))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (0, None),
        }
    }
}

impl FusedIterator for Disambiguations {}

/// Énumère toutes les séquences concrètes représentées par `seq`
pub fn disambiguate(seq: &Sequence) -> Disambiguations {
    let alphabet = seq.alphabet();
    let sets: Vec<&'static [u8]> = seq
        .as_bytes()
        .iter()
        .map(|&s| alphabet.expansion(s).unwrap_or_default())
        .collect();
    let cursor = if sets.iter().all(|set| !set.is_empty()) {
        Some(vec![0; sets.len()])
    } else {
        None
    };

    Disambiguations {
        alphabet,
        sets,
        cursor,
    }
}

/// Nombre de séquences concrètes, sans les énumérer
pub fn count_disambiguated(seq: &Sequence) -> Result<u128> {
    let alphabet = seq.alphabet();
    seq.as_bytes().iter().try_fold(1u128, |count, &s| {
        let size = alphabet.expansion(s).map_or(0, <[u8]>::len) as u128;
        count.checked_mul(size).ok_or(PepsynError::CountOverflow)
    })
}

/// Désambiguïse une protéine
pub fn disambiguate_protein(seq: &str) -> Result<Disambiguations> {
    Ok(disambiguate(&Sequence::protein(seq)?))
}

/// Désambiguïse une séquence d'ADN
pub fn disambiguate_dna(seq: &str) -> Result<Disambiguations> {
    Ok(disambiguate(&Sequence::dna(seq)?))
}

/// Nombre de protéines concrètes représentées par `seq`
pub fn num_disambiguated_protein(seq: &str) -> Result<u128> {
    count_disambiguated(&Sequence::protein(seq)?)
}

/// Nombre de séquences d'ADN concrètes représentées par `seq`
pub fn num_disambiguated_dna(seq: &str) -> Result<u128> {
    count_disambiguated(&Sequence::dna(seq)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn expand(iter: Disambiguations) -> HashSet<String> {
        iter.map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unambiguous_protein() {
        let seq = Sequence::protein("ACDEFGHIKLMNPQRSTVWY").unwrap();
        let all: Vec<Sequence> = disambiguate(&seq).collect();
        assert_eq!(all, vec![seq]);
    }

    #[test]
    fn test_protein_codes() {
        let cases: [(&str, &[&str]); 6] = [
            ("AABAA", &["AADAA", "AANAA"]),
            ("AAZAA", &["AAEAA", "AAQAA"]),
            ("AAJAA", &["AALAA", "AAIAA"]),
            ("AAUAA", &["AACAA"]),
            ("AAOAA", &["AAKAA"]),
            ("AAJJAA", &["AALLAA", "AALIAA", "AAILAA", "AAIIAA"]),
        ];
        for (ambiguous, expected) in cases {
            let expected: HashSet<String> = expected.iter().map(|s| s.to_string()).collect();
            assert_eq!(expand(disambiguate_protein(ambiguous).unwrap()), expected);
        }
    }

    #[test]
    fn test_protein_x() {
        let expected: HashSet<String> = "ACDEFGHIKLMNPQRSTVWY"
            .chars()
            .map(|aa| format!("AA{}AA", aa))
            .collect();
        assert_eq!(expand(disambiguate_protein("AAXAA").unwrap()), expected);
    }

    #[test]
    fn test_dna() {
        let all: Vec<String> = disambiguate_dna("NGCTT").unwrap().map(|s| s.to_string()).collect();
        assert_eq!(all, vec!["AGCTT", "CGCTT", "GGCTT", "TGCTT"]);

        let unambiguous: Vec<Sequence> = disambiguate_dna("AGCTTCGAAATGCT").unwrap().collect();
        assert_eq!(unambiguous.len(), 1);
        assert_eq!(unambiguous[0].to_string(), "AGCTTCGAAATGCT");
    }

    #[test]
    fn test_lexicographic_order() {
        let all: Vec<String> = disambiguate_dna("RY").unwrap().map(|s| s.to_string()).collect();
        assert_eq!(all, vec!["AC", "AT", "GC", "GT"]);
    }

    #[test]
    fn test_restartable() {
        let seq = Sequence::dna("NCYGT").unwrap();
        let first: Vec<Sequence> = disambiguate(&seq).collect();
        let mut iter = disambiguate(&seq);
        iter.next();
        let second: Vec<Sequence> = disambiguate(&seq).collect();
        assert_eq!(first, second);
        assert_eq!(iter.count(), first.len() - 1);
    }

    #[test]
    fn test_size_hint() {
        let mut iter = disambiguate_dna("NCYGT").unwrap();
        assert_eq!(iter.size_hint(), (8, Some(8)));
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (6, Some(6)));
        let huge = disambiguate(&Sequence::protein(&"X".repeat(40)).unwrap());
        assert_eq!(huge.size_hint(), (0, None));
        // la borne basse ne doit pas provoquer de réservation impossible
        let first: Vec<Sequence> = huge.take(3).collect();
        assert_eq!(first.len(), 3);
    }

    #[test]
    fn test_empty_sequence() {
        let all: Vec<Sequence> = disambiguate_dna("").unwrap().collect();
        assert_eq!(all.len(), 1);
        assert!(all[0].is_empty());
        assert_eq!(num_disambiguated_dna("").unwrap(), 1);
    }

    #[test]
    fn test_count_protein() {
        let cases = [
            ("AAAAA", 1),
            ("AABAA", 2),
            ("AAXAA", 20),
            ("AAZAA", 2),
            ("AAJAA", 2),
            ("AAUAA", 1),
            ("AAOAA", 1),
            ("AAZAB", 4),
            ("XAZAA", 40),
        ];
        for (seq, count) in cases {
            assert_eq!(num_disambiguated_protein(seq).unwrap(), count, "{}", seq);
        }
    }

    #[test]
    fn test_count_dna() {
        let cases = [
            ("ACGT", 1),
            ("A", 1),
            ("B", 3),
            ("C", 1),
            ("D", 3),
            ("G", 1),
            ("H", 3),
            ("K", 2),
            ("M", 2),
            ("N", 4),
            ("R", 2),
            ("S", 2),
            ("T", 1),
            ("V", 3),
            ("W", 2),
            ("X", 4),
            ("Y", 2),
            ("ACYGT", 2),
            ("NCYGT", 8),
        ];
        for (seq, count) in cases {
            assert_eq!(num_disambiguated_dna(seq).unwrap(), count, "{}", seq);
        }
    }

    #[test]
    fn test_count_matches_enumeration() {
        for seq in ["AAXAA", "AAJJAA", "BZJ"] {
            let count = num_disambiguated_protein(seq).unwrap();
            assert_eq!(disambiguate_protein(seq).unwrap().count() as u128, count);
        }
        assert_eq!(disambiguate_dna("NCYGT").unwrap().count(), 8);
    }

    #[test]
    fn test_count_is_not_enumerated() {
        // 20^29 tient dans un u128, 20^30 non
        let count = num_disambiguated_protein(&"X".repeat(29)).unwrap();
        assert_eq!(count, 20u128.pow(29));
        assert!(matches!(
            num_disambiguated_protein(&"X".repeat(30)),
            Err(PepsynError::CountOverflow)
        ));
    }

    #[test]
    fn test_invalid_symbols() {
        assert!(disambiguate_dna("ACGU").is_err());
        assert!(num_disambiguated_protein("AA1").is_err());
    }
}
