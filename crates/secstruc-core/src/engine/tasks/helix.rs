//! Helical-turn classification.
//!
//! An n-turn at residue `i` is the bond NH(i+n) -> CO(i) with no chain break
//! between the two residues. Two consecutive n-turns at `i-1` and `i` start an
//! n-helix at `i`, which then covers residues `i..i+n`. Where 3-, 4- and 5-helix
//! starts overlap, 4 beats 3, 3 beats 5, and 5 beats 4.

use crate::core::hbond::BifurHbondList;
use crate::core::models::chain_breaks::ChainBreaks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelixCategory {
    BondedToLaterOnly,
    BondedToEarlierOnly,
    BondedToBoth,
}

impl HelixCategory {
    pub fn is_bonded_to_later(self) -> bool {
        matches!(self, Self::BondedToLaterOnly | Self::BondedToBoth)
    }

    pub fn is_bonded_to_earlier(self) -> bool {
        matches!(self, Self::BondedToEarlierOnly | Self::BondedToBoth)
    }
}

/// NH(`nh_index`) has CO(`co_index`) among its retained bondy-enough partners.
#[inline]
pub fn are_strictly_nh_to_co_bonded(network: &BifurHbondList, nh_index: usize, co_index: usize) -> bool {
    network[nh_index].nh_pair().is_bonded_to(co_index)
}

/// Whether residue `index` carries an n-turn, i.e. NH(index+n) -> CO(index).
pub fn is_n_helix_bonded_to_later(
    network: &BifurHbondList,
    breaks: &ChainBreaks,
    index: usize,
    helix_num: usize,
) -> bool {
    let later = index + helix_num;
    later < network.len()
        && are_strictly_nh_to_co_bonded(network, later, index)
        && !breaks.straddle(later, index)
}

pub fn is_n_helix_bonded_to_earlier(
    network: &BifurHbondList,
    breaks: &ChainBreaks,
    index: usize,
    helix_num: usize,
) -> bool {
    index >= helix_num
        && are_strictly_nh_to_co_bonded(network, index, index - helix_num)
        && !breaks.straddle(index, index - helix_num)
}

pub fn n_helix_category(
    network: &BifurHbondList,
    breaks: &ChainBreaks,
    index: usize,
    helix_num: usize,
) -> Option<HelixCategory> {
    match (
        is_n_helix_bonded_to_later(network, breaks, index, helix_num),
        is_n_helix_bonded_to_earlier(network, breaks, index, helix_num),
    ) {
        (true, true) => Some(HelixCategory::BondedToBoth),
        (true, false) => Some(HelixCategory::BondedToLaterOnly),
        (false, true) => Some(HelixCategory::BondedToEarlierOnly),
        (false, false) => None,
    }
}

pub fn could_start_n_helix(
    network: &BifurHbondList,
    breaks: &ChainBreaks,
    index: usize,
    helix_num: usize,
) -> bool {
    index > 0
        && is_n_helix_bonded_to_later(network, breaks, index - 1, helix_num)
        && is_n_helix_bonded_to_later(network, breaks, index, helix_num)
}

/// A 3-helix start that no 4-helix start within `[index-3, index+2]` overrides.
pub fn starts_3_helix(network: &BifurHbondList, breaks: &ChainBreaks, index: usize) -> bool {
    !network.is_empty()
        && could_start_n_helix(network, breaks, index, 3)
        && !(index.saturating_sub(3)..(index + 3).min(network.len()))
            .any(|other| could_start_n_helix(network, breaks, other, 4))
}

/// A 5-helix start that no 3-helix start within `[index-2, index+4]` overrides.
pub fn starts_5_helix(network: &BifurHbondList, breaks: &ChainBreaks, index: usize) -> bool {
    could_start_n_helix(network, breaks, index, 5)
        && !(index.saturating_sub(2)..(index + 5).min(network.len()))
            .any(|other| starts_3_helix(network, breaks, other))
}

pub fn in_5_helix(network: &BifurHbondList, breaks: &ChainBreaks, index: usize) -> bool {
    (index.saturating_sub(4)..=index).any(|start| starts_5_helix(network, breaks, start))
}

pub fn is_in_n_helix(network: &BifurHbondList, breaks: &ChainBreaks, index: usize, helix_num: usize) -> bool {
    (index.saturating_sub(helix_num.saturating_sub(1))..=index)
        .any(|start| could_start_n_helix(network, breaks, start, helix_num))
}

pub fn is_in_4_helix_not_conflicting_with_5_helix(
    network: &BifurHbondList,
    breaks: &ChainBreaks,
    index: usize,
) -> bool {
    is_in_n_helix(network, breaks, index, 4) && !in_5_helix(network, breaks, index)
}
