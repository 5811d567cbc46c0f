//! Beta-bridge detection.
//!
//! A bridge between residues `src` and `dest` is recognised from one of four
//! two-bond patterns (parallel or antiparallel, with the bonds either landing
//! on `src` itself or on its two neighbours). Candidate partners are seeded
//! from the bonds already retained around `src`, so only O(1) pairs are tested
//! per residue.

use super::helix::are_strictly_nh_to_co_bonded;
use crate::core::hbond::{BifurHbondList, HbondPair};
use crate::core::models::bridge::{BetaBridge, BetaBridgeContext, BetaBridgeType};
use crate::core::models::chain_breaks::ChainBreaks;
use crate::engine::config::CalcConfig;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

#[inline]
fn beta_index_in_range(network: &BifurHbondList, index: usize) -> bool {
    index > 0 && index + 1 < network.len()
}

#[inline]
fn is_eligible_pair(network: &BifurHbondList, config: &CalcConfig, src: usize, dest: usize) -> bool {
    src.abs_diff(dest) >= config.min_bridge_separation
        && beta_index_in_range(network, src)
        && beta_index_in_range(network, dest)
}

/// NH(src) -> CO(dest-1) and NH(dest+1) -> CO(src).
pub fn has_parallel_bridge_bonds_to_src(
    network: &BifurHbondList,
    config: &CalcConfig,
    src: usize,
    dest: usize,
) -> bool {
    is_eligible_pair(network, config, src, dest)
        && are_strictly_nh_to_co_bonded(network, src, dest - 1)
        && are_strictly_nh_to_co_bonded(network, dest + 1, src)
}

/// NH(dest) -> CO(src-1) and NH(src+1) -> CO(dest).
pub fn has_parallel_bridge_bonds_straddling_src(
    network: &BifurHbondList,
    config: &CalcConfig,
    src: usize,
    dest: usize,
) -> bool {
    is_eligible_pair(network, config, src, dest)
        && are_strictly_nh_to_co_bonded(network, dest, src - 1)
        && are_strictly_nh_to_co_bonded(network, src + 1, dest)
}

/// NH(src) -> CO(dest) and NH(dest) -> CO(src).
pub fn has_antiparallel_bridge_bonds_to_src(
    network: &BifurHbondList,
    config: &CalcConfig,
    src: usize,
    dest: usize,
) -> bool {
    is_eligible_pair(network, config, src, dest)
        && are_strictly_nh_to_co_bonded(network, src, dest)
        && are_strictly_nh_to_co_bonded(network, dest, src)
}

/// NH(dest+1) -> CO(src-1) and NH(src+1) -> CO(dest-1).
pub fn has_antiparallel_bridge_bonds_straddling_src(
    network: &BifurHbondList,
    config: &CalcConfig,
    src: usize,
    dest: usize,
) -> bool {
    is_eligible_pair(network, config, src, dest)
        && are_strictly_nh_to_co_bonded(network, dest + 1, src - 1)
        && are_strictly_nh_to_co_bonded(network, src + 1, dest - 1)
}

fn bondy_partners(pair: &HbondPair) -> impl Iterator<Item = usize> + '_ {
    pair.iter()
        .filter(|half| half.is_bondy_enough())
        .map(|half| half.index)
}

fn push_unique(bridges: &mut Vec<BetaBridge>, bridge: BetaBridge) {
    if !bridges.contains(&bridge) {
        bridges.push(bridge);
    }
}

/// Parallel bridges of residue `index`, seeded from the partners of
/// CO(index-1), CO(index) and NH(index+1).
pub fn parallel_bridges(network: &BifurHbondList, config: &CalcConfig, index: usize) -> Vec<BetaBridge> {
    let mut bridges = Vec::new();
    if !beta_index_in_range(network, index) {
        return bridges;
    }
    let mut consider = |dest: usize, found: bool| {
        if found {
            push_unique(&mut bridges, BetaBridge::new(dest, BetaBridgeType::Parallel));
        }
    };

    for dest in bondy_partners(network[index - 1].co_pair()) {
        consider(dest, has_parallel_bridge_bonds_straddling_src(network, config, index, dest));
    }
    for partner in bondy_partners(network[index].co_pair()).filter(|&partner| partner > 1) {
        let dest = partner - 1;
        consider(dest, has_parallel_bridge_bonds_to_src(network, config, index, dest));
    }
    for dest in bondy_partners(network[index + 1].nh_pair()) {
        consider(dest, has_parallel_bridge_bonds_straddling_src(network, config, index, dest));
    }
    bridges
}

/// Antiparallel bridges of residue `index`, seeded from the partners of
/// CO(index-1), NH(index), CO(index) and NH(index+1).
pub fn antiparallel_bridges(network: &BifurHbondList, config: &CalcConfig, index: usize) -> Vec<BetaBridge> {
    let mut bridges = Vec::new();
    if !beta_index_in_range(network, index) {
        return bridges;
    }
    let mut consider = |dest: usize, found: bool| {
        if found {
            push_unique(&mut bridges, BetaBridge::new(dest, BetaBridgeType::AntiParallel));
        }
    };

    for partner in bondy_partners(network[index - 1].co_pair()).filter(|&partner| partner > 1) {
        let dest = partner - 1;
        consider(dest, has_antiparallel_bridge_bonds_straddling_src(network, config, index, dest));
    }
    let this = &network[index];
    for dest in bondy_partners(this.nh_pair()).chain(bondy_partners(this.co_pair())) {
        consider(dest, has_antiparallel_bridge_bonds_to_src(network, config, index, dest));
    }
    for partner in bondy_partners(network[index + 1].nh_pair()) {
        let dest = partner + 1;
        if dest < network.len() {
            consider(dest, has_antiparallel_bridge_bonds_straddling_src(network, config, index, dest));
        }
    }
    bridges
}

/// All bridges of residue `index`: parallel ones first, then antiparallel.
pub fn bridges_at(network: &BifurHbondList, config: &CalcConfig, index: usize) -> Vec<BetaBridge> {
    let mut bridges = parallel_bridges(network, config, index);
    bridges.extend(antiparallel_bridges(network, config, index));
    bridges
}

/// Drops every bridge whose pattern would need backbone continuity across a
/// chain break.
///
/// For each break `b`, residues `b` and `b-1` lose all their bridges, and any
/// bridge whose partner is `b` or `b-1` is removed.
pub fn remove_bridges_to_chain_break_residues(bridges: &mut [Vec<BetaBridge>], breaks: &ChainBreaks) {
    if bridges.is_empty() {
        return;
    }
    for &index in breaks.indices() {
        bridges[index].clear();
        bridges[index.saturating_sub(1)].clear();
    }
    let residue_count = bridges.len();
    for residue_bridges in bridges.iter_mut() {
        residue_bridges.retain(|bridge| {
            let partner = bridge.partner_index;
            !(breaks.contains(partner) || (partner + 1 < residue_count && breaks.contains(partner + 1)))
        });
    }
}

/// Whether `first` (on residue `i`) and `second` (on residue `i+1`) continue
/// the same ladder.
pub fn are_consecutive_bridges_in_sheet(first: &BetaBridge, second: &BetaBridge) -> bool {
    first.bridge_type == second.bridge_type
        && match first.bridge_type {
            BetaBridgeType::Parallel => first.partner_index < second.partner_index,
            BetaBridgeType::AntiParallel => first.partner_index > second.partner_index,
        }
        && first.partner_index.abs_diff(second.partner_index) == 1
}

/// Marks a bridge `InSheet` when a bridge on a neighbouring residue continues
/// its ladder, and `LoneBridge` otherwise.
pub fn set_bridges_contexts(bridges: &mut [Vec<BetaBridge>]) {
    for index in 1..bridges.len().saturating_sub(1) {
        let (before, rest) = bridges.split_at_mut(index);
        let Some((current, after)) = rest.split_first_mut() else {
            continue;
        };
        let prev = &before[index - 1];
        let next = after.first().map(Vec::as_slice).unwrap_or_default();
        for bridge in current.iter_mut() {
            let in_sheet = prev.iter().any(|p| are_consecutive_bridges_in_sheet(p, bridge))
                || next.iter().any(|n| are_consecutive_bridges_in_sheet(bridge, n));
            bridge.context = if in_sheet {
                BetaBridgeContext::InSheet
            } else {
                BetaBridgeContext::LoneBridge
            };
        }
    }
}

/// Whether two bridges of the same orientation, owned by residues `first_index`
/// and `second_index`, are joined by a beta bulge.
///
/// The gap may be at most `bulge_max_source_gap` residues on the owning side
/// and `bulge_max_dest_gap` on the partner side, must exceed one on at least
/// one side, and both sides must advance in the direction the bridge type
/// implies.
pub fn is_beta_bulge(
    first: &BetaBridge,
    first_index: usize,
    second: &BetaBridge,
    second_index: usize,
    config: &CalcConfig,
) -> bool {
    let src_diff = first_index.abs_diff(second_index);
    let dest_diff = first.partner_index.abs_diff(second.partner_index);
    let smaller_diff = first_index
        .min(first.partner_index)
        .abs_diff(second_index.min(second.partner_index));
    let directions_match = (second_index > first_index) == (second.partner_index > first.partner_index);

    first.bridge_type == second.bridge_type
        && src_diff <= config.bulge_max_source_gap
        && dest_diff <= config.bulge_max_dest_gap
        && smaller_diff > 0
        && src_diff.max(dest_diff) > 1
        && match first.bridge_type {
            BetaBridgeType::Parallel => directions_match,
            BetaBridgeType::AntiParallel => !directions_match,
        }
}

/// Finds every residue's bridges, filters them against chain breaks, and
/// classifies each as lone or in-sheet.
#[instrument(skip_all, name = "beta_bridge_task")]
pub fn run(network: &BifurHbondList, breaks: &ChainBreaks, config: &CalcConfig) -> Vec<Vec<BetaBridge>> {
    #[cfg(not(feature = "parallel"))]
    let iterator = 0..network.len();
    #[cfg(feature = "parallel")]
    let iterator = (0..network.len()).into_par_iter();

    let mut bridges: Vec<Vec<BetaBridge>> = iterator.map(|index| bridges_at(network, config, index)).collect();
    let found: usize = bridges.iter().map(Vec::len).sum();

    remove_bridges_to_chain_break_residues(&mut bridges, breaks);
    set_bridges_contexts(&mut bridges);

    let kept: usize = bridges.iter().map(Vec::len).sum();
    let in_sheet = bridges.iter().flatten().filter(|bridge| bridge.is_in_sheet()).count();
    debug!(found, removed = found - kept, "Filtered bridges against chain breaks.");
    info!(bridges = kept, in_sheet, "Beta-bridge detection complete.");
    bridges
}
