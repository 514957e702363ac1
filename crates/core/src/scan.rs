//! Recherche de sites littéraux

use bio::pattern_matching::kmp::KMP;

/// Positions de départ de toutes les occurrences de `site`, chevauchantes
/// comprises, par ordre croissant
pub fn find_all(sequence: &[u8], site: &[u8]) -> Vec<usize> {
    if site.is_empty() || site.len() > sequence.len() {
        return Vec::new();
    }
    KMP::new(site).find_all(sequence.iter()).collect()
}

/// Vrai si `[pos, pos + site_len)` chevauche `[start, end)`, même partiellement
pub fn overlaps(pos: usize, site_len: usize, start: usize, end: usize) -> bool {
    start < end && pos < end && pos + site_len > start
}
