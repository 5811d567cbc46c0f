use super::residue::BackboneResidue;
use nalgebra::distance;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("Chain-break indices must be strictly ascending, found {previous} followed by {next}")]
    UnsortedChainBreaks { previous: usize, next: usize },
    #[error("Chain-break index {index} is out of range for {residue_count} residues")]
    ChainBreakOutOfRange { index: usize, residue_count: usize },
}

/// Sorted set of residue indices at which a new chain segment begins.
///
/// A break at index `b` means residue `b` is not covalently bonded to residue
/// `b - 1`, so no backbone pattern may rely on continuity across it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainBreaks {
    indices: Vec<usize>,
    residue_count: usize,
}

impl ChainBreaks {
    pub fn new(indices: Vec<usize>, residue_count: usize) -> Result<Self, ModelError> {
        if let Some(pair) = indices.windows(2).find(|pair| pair[0] >= pair[1]) {
            return Err(ModelError::UnsortedChainBreaks {
                previous: pair[0],
                next: pair[1],
            });
        }
        if let Some(&index) = indices.last().filter(|&&index| index >= residue_count) {
            return Err(ModelError::ChainBreakOutOfRange {
                index,
                residue_count,
            });
        }
        Ok(Self {
            indices,
            residue_count,
        })
    }

    pub fn empty(residue_count: usize) -> Self {
        Self {
            indices: Vec::new(),
            residue_count,
        }
    }

    /// Derives breaks from the backbone itself.
    ///
    /// Residue `i > 0` starts a new segment when its chain label differs from
    /// residue `i - 1`, when either the preceding C or its own N is missing,
    /// or when the C(i-1)..N(i) distance exceeds `max_c_n_distance`.
    pub fn infer(residues: &[BackboneResidue], max_c_n_distance: f64) -> Self {
        let indices = residues
            .windows(2)
            .enumerate()
            .filter_map(|(offset, pair)| {
                let (prev, this) = (&pair[0], &pair[1]);
                let continuous = prev.chain_id == this.chain_id
                    && matches!(
                        (prev.c, this.n),
                        (Some(c), Some(n)) if distance(&c, &n) <= max_c_n_distance
                    );
                (!continuous).then_some(offset + 1)
            })
            .collect();
        Self {
            indices,
            residue_count: residues.len(),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn residue_count(&self) -> usize {
        self.residue_count
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// True when some break lies in the half-open interval between `a` and `b`,
    /// i.e. the two residues belong to different chain segments.
    #[inline]
    pub fn straddle(&self, a: usize, b: usize) -> bool {
        self.upper_bound(a) != self.upper_bound(b)
    }

    #[inline]
    pub fn has_predecessor_in_chain(&self, index: usize) -> bool {
        index > 0 && !self.contains(index)
    }

    fn upper_bound(&self, index: usize) -> usize {
        self.indices.partition_point(|&b| b <= index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::AminoAcidType;
    use nalgebra::Point3;

    fn residue_at(chain_id: char, x: f64) -> BackboneResidue {
        BackboneResidue::new(chain_id, Some(AminoAcidType::Alanine)).with_backbone(
            Point3::new(x, 0.0, 0.0),
            Point3::new(x + 1.0, 0.5, 0.0),
            Point3::new(x + 2.4, 0.0, 0.0),
            Point3::new(x + 2.6, -1.2, 0.0),
        )
    }

    #[test]
    fn new_rejects_unsorted_indices() {
        assert_eq!(
            ChainBreaks::new(vec![3, 3], 10),
            Err(ModelError::UnsortedChainBreaks {
                previous: 3,
                next: 3
            })
        );
        assert_eq!(
            ChainBreaks::new(vec![5, 2], 10),
            Err(ModelError::UnsortedChainBreaks {
                previous: 5,
                next: 2
            })
        );
    }

    #[test]
    fn new_rejects_index_past_last_residue() {
        assert_eq!(
            ChainBreaks::new(vec![2, 10], 10),
            Err(ModelError::ChainBreakOutOfRange {
                index: 10,
                residue_count: 10
            })
        );
    }

    #[test]
    fn straddle_is_true_only_across_a_break() {
        let breaks = ChainBreaks::new(vec![5], 10).unwrap();
        assert!(breaks.straddle(4, 5));
        assert!(breaks.straddle(5, 4));
        assert!(breaks.straddle(0, 9));
        assert!(!breaks.straddle(5, 9));
        assert!(!breaks.straddle(1, 4));
        assert!(!breaks.straddle(7, 7));
    }

    #[test]
    fn has_predecessor_in_chain_respects_start_and_breaks() {
        let breaks = ChainBreaks::new(vec![3], 6).unwrap();
        assert!(!breaks.has_predecessor_in_chain(0));
        assert!(breaks.has_predecessor_in_chain(2));
        assert!(!breaks.has_predecessor_in_chain(3));
        assert!(breaks.has_predecessor_in_chain(4));
    }

    #[test]
    fn infer_finds_no_breaks_in_a_continuous_chain() {
        let residues: Vec<_> = (0..4).map(|i| residue_at('A', 3.8 * i as f64)).collect();
        let breaks = ChainBreaks::infer(&residues, 2.5);
        assert!(breaks.is_empty());
        assert_eq!(breaks.residue_count(), 4);
    }

    #[test]
    fn infer_detects_chain_label_change_and_long_peptide_bond() {
        let residues = vec![
            residue_at('A', 0.0),
            residue_at('A', 3.8),
            residue_at('B', 7.6),
            residue_at('B', 11.4),
            residue_at('B', 25.0),
        ];
        let breaks = ChainBreaks::infer(&residues, 2.5);
        assert_eq!(breaks.indices(), &[2, 4]);
    }

    #[test]
    fn infer_treats_missing_peptide_atoms_as_a_break() {
        let mut residues: Vec<_> = (0..3).map(|i| residue_at('A', 3.8 * i as f64)).collect();
        residues[1].n = None;
        let breaks = ChainBreaks::infer(&residues, 2.5);
        assert_eq!(breaks.indices(), &[1]);
    }
}
