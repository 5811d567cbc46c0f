use super::beta_bridge::is_beta_bulge;
use super::helix::is_in_4_helix_not_conflicting_with_5_helix;
use crate::core::hbond::BifurHbondList;
use crate::core::models::bridge::BetaBridge;
use crate::core::models::chain_breaks::ChainBreaks;
use crate::core::models::sec_struc::SecStrucType;
use crate::engine::config::CalcConfig;
use itertools::iproduct;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

/// Labels every residue of the inclusive span between `from` and `to` as strand.
pub fn add_beta_bulge(labels: &mut [SecStrucType], from: usize, to: usize) {
    for label in &mut labels[from.min(to)..=from.max(to)] {
        *label = SecStrucType::BetaStrand;
    }
}

fn mark_beta_bulges(
    labels: &mut [SecStrucType],
    bridges: &[Vec<BetaBridge>],
    breaks: &ChainBreaks,
    config: &CalcConfig,
) -> usize {
    let mut bulge_count = 0;
    for first_index in 0..bridges.len() {
        let window_end = first_index
            .saturating_add(config.bulge_max_source_gap)
            .saturating_add(1)
            .min(bridges.len());
        for second_index in first_index..window_end {
            for (first, second) in iproduct!(&bridges[first_index], &bridges[second_index]) {
                if first_index == second_index && first == second {
                    continue;
                }
                if !breaks.straddle(first_index, second_index)
                    && !breaks.straddle(first.partner_index, second.partner_index)
                    && is_beta_bulge(first, first_index, second, second_index, config)
                {
                    add_beta_bulge(labels, first_index, second_index);
                    add_beta_bulge(labels, first.partner_index, second.partner_index);
                    bulge_count += 1;
                }
            }
        }
    }
    bulge_count
}

/// Produces the final label for each residue.
///
/// Bulge spans are marked as strand first. Each residue is then labelled helix
/// if it lies in a 4-helix that no 5-helix overrides, and otherwise strand if
/// any of its bridges is in a sheet; a helix label therefore replaces a bulge
/// strand label.
#[instrument(skip_all, name = "labeling_task")]
pub fn run(
    network: &BifurHbondList,
    breaks: &ChainBreaks,
    bridges: &[Vec<BetaBridge>],
    config: &CalcConfig,
) -> Vec<SecStrucType> {
    let mut labels = vec![SecStrucType::Coil; network.len()];
    let bulge_count = mark_beta_bulges(&mut labels, bridges, breaks, config);
    debug!(bulges = bulge_count, "Marked beta bulges.");

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..network.len();
    #[cfg(feature = "parallel")]
    let iterator = (0..network.len()).into_par_iter();

    let in_helix: Vec<bool> = iterator
        .map(|index| is_in_4_helix_not_conflicting_with_5_helix(network, breaks, index))
        .collect();

    for (index, label) in labels.iter_mut().enumerate() {
        if in_helix[index] {
            *label = SecStrucType::AlphaHelix;
        } else if bridges[index].iter().any(BetaBridge::is_in_sheet) {
            *label = SecStrucType::BetaStrand;
        }
        trace!(index, label = %label, "Labelled residue.");
    }
    labels
}
