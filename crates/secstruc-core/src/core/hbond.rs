//! Bifurcated hydrogen-bond bookkeeping.
//!
//! Each residue keeps, for its NH side and for its CO side, the two best
//! partners seen so far. "Best" means lowest energy, with ties going to the
//! lower partner index, so the retained pair does not depend on the order in
//! which candidates are offered.

use super::energy::is_bondy_enough;
use std::fmt;
use std::ops::Index;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HbondHalf {
    pub index: usize,
    pub energy: f64,
}

impl HbondHalf {
    pub fn new(index: usize, energy: f64) -> Self {
        Self { index, energy }
    }

    #[inline]
    pub fn is_bondier_than(&self, other: &HbondHalf) -> bool {
        self.energy < other.energy || (self.energy == other.energy && self.index < other.index)
    }

    #[inline]
    pub fn is_bondy_enough(&self) -> bool {
        is_bondy_enough(self.energy)
    }
}

impl fmt::Display for HbondHalf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hbond_half[index:{:>5}, energy:{:>8.3}]", self.index, self.energy)
    }
}

/// The best and second-best partner on one side of a residue.
///
/// A second slot is only ever occupied when the first one is.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HbondPair {
    slots: [Option<HbondHalf>; 2],
}

impl HbondPair {
    pub fn first(&self) -> Option<&HbondHalf> {
        self.slots[0].as_ref()
    }

    pub fn second(&self) -> Option<&HbondHalf> {
        self.slots[1].as_ref()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HbondHalf> {
        self.slots.iter().flatten()
    }

    pub fn update(&mut self, candidate: HbondHalf) {
        if Self::beats(&candidate, self.slots[0]) {
            self.slots[1] = self.slots[0].replace(candidate);
        } else if Self::beats(&candidate, self.slots[1]) {
            self.slots[1] = Some(candidate);
        }
    }

    pub fn remove_not_bondy_enough(&mut self) {
        for slot in &mut self.slots {
            if matches!(slot, Some(half) if !half.is_bondy_enough()) {
                *slot = None;
            }
        }
        if self.slots[0].is_none() {
            self.slots[0] = self.slots[1].take();
        }
    }

    /// True when one of the retained, bondy-enough partners is `dest`.
    ///
    /// The first slot must be bondy enough for either slot to count.
    pub fn is_bonded_to(&self, dest: usize) -> bool {
        match self.slots {
            [Some(first), second] if first.is_bondy_enough() => {
                first.index == dest
                    || second.is_some_and(|second| second.is_bondy_enough() && second.index == dest)
            }
            _ => false,
        }
    }

    fn beats(candidate: &HbondHalf, slot: Option<HbondHalf>) -> bool {
        slot.is_none_or(|existing| candidate.is_bondier_than(&existing))
    }
}

impl fmt::Display for HbondPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (position, half) in self.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{half}")?;
        }
        write!(f, "]")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BifurHbond {
    nh: HbondPair,
    co: HbondPair,
}

impl BifurHbond {
    pub fn nh_pair(&self) -> &HbondPair {
        &self.nh
    }

    pub fn co_pair(&self) -> &HbondPair {
        &self.co
    }

    pub fn update_for_nh(&mut self, co_index: usize, energy: f64) {
        self.nh.update(HbondHalf::new(co_index, energy));
    }

    pub fn update_for_co(&mut self, nh_index: usize, energy: f64) {
        self.co.update(HbondHalf::new(nh_index, energy));
    }

    pub fn remove_not_bondy_enough(&mut self) {
        self.nh.remove_not_bondy_enough();
        self.co.remove_not_bondy_enough();
    }
}

impl fmt::Display for BifurHbond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NH:{}, CO:{}", self.nh, self.co)
    }
}

/// One [`BifurHbond`] per residue, in residue order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BifurHbondList {
    bonds: Vec<BifurHbond>,
}

impl BifurHbondList {
    pub fn new(residue_count: usize) -> Self {
        Self {
            bonds: vec![BifurHbond::default(); residue_count],
        }
    }

    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&BifurHbond> {
        self.bonds.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BifurHbond> {
        self.bonds.iter()
    }

    /// Offers the bond NH(`nh_index`) -> CO(`co_index`) to both residues.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn update_with_nh_co(&mut self, nh_index: usize, co_index: usize, energy: f64) -> &mut Self {
        self.bonds[nh_index].update_for_nh(co_index, energy);
        self.bonds[co_index].update_for_co(nh_index, energy);
        self
    }

    pub fn remove_not_bondy_enough(&mut self) -> &mut Self {
        self.bonds.iter_mut().for_each(BifurHbond::remove_not_bondy_enough);
        self
    }
}

impl Index<usize> for BifurHbondList {
    type Output = BifurHbond;

    fn index(&self, index: usize) -> &Self::Output {
        &self.bonds[index]
    }
}

impl<'a> IntoIterator for &'a BifurHbondList {
    type Item = &'a BifurHbond;
    type IntoIter = std::slice::Iter<'a, BifurHbond>;

    fn into_iter(self) -> Self::IntoIter {
        self.bonds.iter()
    }
}

impl fmt::Display for BifurHbondList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bond) in self.bonds.iter().enumerate() {
            writeln!(f, "{index:>5} {bond}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(pair: &HbondPair) -> Vec<usize> {
        pair.iter().map(|half| half.index).collect()
    }

    #[test]
    fn empty_pair_accepts_first_candidate() {
        let mut pair = HbondPair::default();
        pair.update(HbondHalf::new(7, -1.0));
        assert_eq!(pair.first(), Some(&HbondHalf::new(7, -1.0)));
        assert!(pair.second().is_none());
    }

    #[test]
    fn better_candidate_demotes_previous_first() {
        let mut pair = HbondPair::default();
        pair.update(HbondHalf::new(7, -1.0));
        pair.update(HbondHalf::new(3, -2.0));
        assert_eq!(indices(&pair), vec![3, 7]);
    }

    #[test]
    fn only_two_best_candidates_are_kept() {
        let mut pair = HbondPair::default();
        for (index, energy) in [(1, -0.6), (2, -3.0), (3, -1.5), (4, -0.9), (5, -2.0)] {
            pair.update(HbondHalf::new(index, energy));
        }
        assert_eq!(indices(&pair), vec![2, 5]);
    }

    #[test]
    fn equal_energies_prefer_lower_index_regardless_of_order() {
        let mut forward = HbondPair::default();
        let mut backward = HbondPair::default();
        for index in [4, 9, 2] {
            forward.update(HbondHalf::new(index, -1.2));
        }
        for index in [2, 9, 4] {
            backward.update(HbondHalf::new(index, -1.2));
        }
        assert_eq!(indices(&forward), vec![2, 4]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn remove_not_bondy_enough_clears_weak_slots() {
        let mut pair = HbondPair::default();
        pair.update(HbondHalf::new(1, -1.0));
        pair.update(HbondHalf::new(2, -0.3));
        pair.remove_not_bondy_enough();
        assert_eq!(indices(&pair), vec![1]);

        let mut weak = HbondPair::default();
        weak.update(HbondHalf::new(1, -0.5));
        weak.remove_not_bondy_enough();
        assert!(weak.first().is_none());
    }

    #[test]
    fn is_bonded_to_checks_both_slots() {
        let mut pair = HbondPair::default();
        pair.update(HbondHalf::new(10, -2.0));
        pair.update(HbondHalf::new(11, -0.8));
        assert!(pair.is_bonded_to(10));
        assert!(pair.is_bonded_to(11));
        assert!(!pair.is_bonded_to(12));
    }

    #[test]
    fn is_bonded_to_ignores_second_slot_when_first_is_weak() {
        let mut pair = HbondPair::default();
        pair.update(HbondHalf::new(10, -0.2));
        pair.update(HbondHalf::new(11, -0.1));
        assert!(!pair.is_bonded_to(10));
        assert!(!pair.is_bonded_to(11));
    }

    #[test]
    fn update_with_nh_co_records_bond_on_both_residues() {
        let mut list = BifurHbondList::new(6);
        list.update_with_nh_co(4, 0, -2.5);
        assert!(list[4].nh_pair().is_bonded_to(0));
        assert!(list[0].co_pair().is_bonded_to(4));
        assert!(list[4].co_pair().first().is_none());
        assert!(list[0].nh_pair().first().is_none());
    }

    #[test]
    fn list_remove_not_bondy_enough_applies_to_every_residue() {
        let mut list = BifurHbondList::new(4);
        list.update_with_nh_co(3, 0, -0.4)
            .update_with_nh_co(2, 0, -1.1)
            .remove_not_bondy_enough();
        assert!(list[3].nh_pair().first().is_none());
        assert_eq!(indices(list[0].co_pair()), vec![2]);
        assert_eq!(list.get(4), None);
        assert_eq!(list.iter().count(), 4);
    }

    #[test]
    fn display_lists_residues_with_both_sides() {
        let mut list = BifurHbondList::new(2);
        list.update_with_nh_co(1, 0, -1.25);
        let rendered = list.to_string();
        assert!(rendered.contains("NH:[hbond_half[index:    0, energy:  -1.250]]"));
        assert_eq!(rendered.lines().count(), 2);
    }
}
