//! Tables d'ambiguïté IUPAC (protéines et ADN)
//!
//! Chaque symbole est associé à l'ensemble, trié, des symboles concrets
//! qu'il représente. Un symbole non ambigu est associé à lui-même.

/// Les 20 acides aminés standards
pub const UNAMBIGUOUS_PROTEIN: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";

/// Les 4 nucléotides
pub const UNAMBIGUOUS_DNA: &[u8] = b"ACGT";

/// Codon stop, traité comme un symbole protéique concret
pub const STOP: u8 = b'*';

/// Ensemble concret d'un symbole protéique
pub fn protein_expansion(symbol: u8) -> Option<&'static [u8]> {
    let set: &'static [u8] = match symbol {
        b'A' => b"A",
        b'C' => b"C",
        b'D' => b"D",
        b'E' => b"E",
        b'F' => b"F",
        b'G' => b"G",
        b'H' => b"H",
        b'I' => b"I",
        b'K' => b"K",
        b'L' => b"L",
        b'M' => b"M",
        b'N' => b"N",
        b'P' => b"P",
        b'Q' => b"Q",
        b'R' => b"R",
        b'S' => b"S",
        b'T' => b"T",
        b'V' => b"V",
        b'W' => b"W",
        b'Y' => b"Y",
        b'*' => b"*",
        b'B' => b"DN",
        b'Z' => b"EQ",
        b'J' => b"IL",
        // sélénocystéine et pyrrolysine
        b'U' => b"C",
        b'O' => b"K",
        b'X' => UNAMBIGUOUS_PROTEIN,
        _ => return None,
    };
    Some(set)
}

/// Ensemble concret d'un symbole nucléotidique
pub fn dna_expansion(symbol: u8) -> Option<&'static [u8]> {
    let set: &'static [u8] = match symbol {
        b'A' => b"A",
        b'C' => b"C",
        b'G' => b"G",
        b'T' => b"T",
        b'R' => b"AG",
        b'Y' => b"CT",
        b'S' => b"CG",
        b'W' => b"AT",
        b'K' => b"GT",
        b'M' => b"AC",
        b'B' => b"CGT",
        b'D' => b"AGT",
        b'H' => b"ACT",
        b'V' => b"ACG",
        b'N' | b'X' => UNAMBIGUOUS_DNA,
        _ => return None,
    };
    Some(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unambiguous_map_to_themselves() {
        for &aa in UNAMBIGUOUS_PROTEIN {
            assert_eq!(protein_expansion(aa), Some(&[aa][..]));
        }
        for &base in UNAMBIGUOUS_DNA {
            assert_eq!(dna_expansion(base), Some(&[base][..]));
        }
    }

    #[test]
    fn test_sets_are_sorted() {
        for symbol in b'A'..=b'Z' {
            for set in [protein_expansion(symbol), dna_expansion(symbol)].into_iter().flatten() {
                assert!(!set.is_empty());
                assert!(set.windows(2).all(|w| w[0] < w[1]), "{}", symbol as char);
            }
        }
    }

    #[test]
    fn test_dna_set_sizes() {
        let sizes: Vec<usize> = b"BDHKMNRSVWXY"
            .iter()
            .map(|&s| dna_expansion(s).unwrap().len())
            .collect();
        assert_eq!(sizes, vec![3, 3, 3, 2, 2, 4, 2, 2, 3, 2, 4, 2]);
    }

    #[test]
    fn test_unknown_symbols() {
        assert!(protein_expansion(b'1').is_none());
        assert!(dna_expansion(b'U').is_none());
        assert!(dna_expansion(b'*').is_none());
    }
}
