//! Outils de conception de banques de peptides: pavage, linkers, padding

use crate::ambiguity::STOP;
use crate::error::{PepsynError, Result};
use crate::sequence::{Alphabet, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Motif de linker flexible
pub const LINKER_MOTIF: &[u8] = b"GGSG";

/// Extrémité d'une protéine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terminus {
    N,
    C,
}

impl FromStr for Terminus {
    type Err = PepsynError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "N" => Ok(Terminus::N),
            "C" => Ok(Terminus::C),
            other => Err(PepsynError::InvalidParameter(format!(
                "extrémité invalide: {:?} (attendu \"N\" ou \"C\")",
                other
            ))),
        }
    }
}

impl fmt::Display for Terminus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Terminus::N => write!(f, "N"),
            Terminus::C => write!(f, "C"),
        }
    }
}

/// Un fragment `[start, end)` d'une protéine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub start: usize,
    pub end: usize,
    pub peptide: Sequence,
}

/// Découpe `seq` en fragments de `length` résidus se chevauchant de `overlap`
///
/// Seuls les fragments complets sont produits.
pub fn tile(seq: &Sequence, length: usize, overlap: usize) -> Result<Vec<Tile>> {
    if length == 0 {
        return Err(PepsynError::InvalidParameter(
            "la longueur des fragments doit être positive".to_string(),
        ));
    }
    if overlap >= length {
        return Err(PepsynError::InvalidParameter(format!(
            "chevauchement {} >= longueur {}",
            overlap, length
        )));
    }

    let step = length - overlap;
    let tiles = (0..)
        .step_by(step)
        .take_while(|&start| start + length <= seq.len())
        .map(|start| {
            let end = start + length;
            Ok(Tile {
                start,
                end,
                peptide: seq.subsequence(start..end)?,
            })
        })
        .collect::<Result<Vec<Tile>>>()?;

    Ok(tiles)
}

/// `n` premiers résidus du motif `GGSG` répété
fn linker(n: usize) -> impl Iterator<Item = u8> {
    LINKER_MOTIF.iter().copied().cycle().take(n)
}

/// Remplace chaque suite de `X` par un linker de même longueur
pub fn x_to_ggsg(seq: &Sequence) -> Result<Sequence> {
    seq.expect_alphabet(Alphabet::Protein)?;

    let mut out = Vec::with_capacity(seq.len());
    let mut run = 0;
    for &aa in seq.as_bytes() {
        if aa == b'X' {
            run += 1;
            continue;
        }
        out.extend(linker(run));
        run = 0;
        out.push(aa);
    }
    out.extend(linker(run));

    Ok(Sequence::from_raw(Alphabet::Protein, out))
}

/// Complète `seq` jusqu'à `length` avec un linker du côté `terminus`
pub fn pad_ggsg(seq: &Sequence, length: usize, terminus: Terminus) -> Result<Sequence> {
    seq.expect_alphabet(Alphabet::Protein)?;

    let missing = length.saturating_sub(seq.len());
    let padded: Vec<u8> = match terminus {
        Terminus::N => linker(missing).chain(seq.as_bytes().iter().copied()).collect(),
        Terminus::C => seq.as_bytes().iter().copied().chain(linker(missing)).collect(),
    };

    Ok(Sequence::from_raw(Alphabet::Protein, padded))
}

/// Peptide C-terminal de `length` résidus, éventuellement terminé par un stop
///
/// Avec `add_stop`, le stop compte dans `length`. Une séquence plus courte
/// est renvoyée entière.
pub fn ctermpep(seq: &Sequence, length: usize, add_stop: bool) -> Result<Sequence> {
    seq.expect_alphabet(Alphabet::Protein)?;

    let keep = if add_stop { length.saturating_sub(1) } else { length };
    let start = seq.len().saturating_sub(keep);
    let mut peptide = seq.as_bytes()[start..].to_vec();
    if add_stop {
        peptide.push(STOP);
    }

    Ok(Sequence::from_raw(Alphabet::Protein, peptide))
}
