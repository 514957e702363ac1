//! Code génétique standard (table NCBI 1)

use crate::ambiguity::STOP;
use crate::error::{PepsynError, Result};
use crate::sequence::{Alphabet, Sequence};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Un codon: trois nucléotides non ambigus
pub type Codon = [u8; 3];

/// Acides aminés dans l'ordre NCBI (TCAG x TCAG x TCAG)
const STANDARD_NCBIEAA: &[u8; 64] =
    b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

const NCBI_BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

fn base_index(base: u8) -> Option<usize> {
    match base {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Traduit un codon en acide aminé (`*` pour un stop)
pub fn translate_codon(codon: &[u8]) -> Result<u8> {
    if codon.len() != 3 {
        return Err(PepsynError::InvalidParameter(format!(
            "un codon fait 3 nucléotides, pas {}",
            codon.len()
        )));
    }

    let mut index = 0;
    for &base in codon {
        let i = base_index(base).ok_or(PepsynError::InvalidSymbol {
            symbol: base as char,
            alphabet: Alphabet::Dna,
        })?;
        index = index * 4 + i;
    }

    Ok(STANDARD_NCBIEAA[index])
}

/// Traduit une séquence codante complète
pub fn translate(dna: &Sequence) -> Result<Sequence> {
    dna.expect_alphabet(Alphabet::Dna)?;
    if dna.len() % 3 != 0 {
        return Err(PepsynError::InvalidParameter(format!(
            "longueur {} non multiple de 3",
            dna.len()
        )));
    }

    let protein = dna
        .as_bytes()
        .chunks_exact(3)
        .map(translate_codon)
        .collect::<Result<Vec<u8>>>()?;

    Ok(Sequence::from_raw(Alphabet::Protein, protein))
}

fn back_table() -> &'static BTreeMap<u8, Vec<Codon>> {
    static BACK_TABLE: OnceLock<BTreeMap<u8, Vec<Codon>>> = OnceLock::new();
    BACK_TABLE.get_or_init(|| {
        let mut table: BTreeMap<u8, Vec<Codon>> = BTreeMap::new();
        for (index, &aa) in STANDARD_NCBIEAA.iter().enumerate() {
            let codon = [
                NCBI_BASES[index / 16],
                NCBI_BASES[(index / 4) % 4],
                NCBI_BASES[index % 4],
            ];
            table.entry(aa).or_default().push(codon);
        }
        table
    })
}

/// Codons synonymes d'un acide aminé (ou de `*`)
pub fn codons_for(aa: u8) -> Option<&'static [Codon]> {
    back_table().get(&aa).map(Vec::as_slice)
}

/// Vrai pour TAA, TAG et TGA
pub fn is_stop_codon(codon: &[u8]) -> bool {
    translate_codon(codon).map_or(false, |aa| aa == STOP)
}
