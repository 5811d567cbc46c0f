use crate::core::energy::{hbond_energy, is_bondy_enough};
use crate::core::hbond::BifurHbondList;
use crate::core::models::chain_breaks::ChainBreaks;
use crate::core::models::residue::BackboneResidue;
use crate::core::utils::geometry::pseudo_hydrogen;
use crate::engine::config::CalcConfig;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::{Point3, distance};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

struct DonorAcceptorAtoms {
    n: Point3<f64>,
    h: Point3<f64>,
    c: Point3<f64>,
    o: Point3<f64>,
}

/// Collects the four atoms of a candidate NH(`donor`) -> CO(`acceptor`) bond,
/// or `None` when the pair is excluded.
///
/// Exclusions, in order: the acceptor is the residue immediately before the
/// donor (or the donor itself); either Cα is missing or the two lie at least
/// `ca_prefilter_distance` apart; the donor is a standard proline; any atom
/// needed for the energy is missing.
fn donor_acceptor_atoms(
    residues: &[BackboneResidue],
    breaks: &ChainBreaks,
    config: &CalcConfig,
    donor: usize,
    acceptor: usize,
) -> Option<DonorAcceptorAtoms> {
    if !(donor < acceptor || donor > acceptor + 1) {
        return None;
    }
    let donor_res = &residues[donor];
    let acceptor_res = &residues[acceptor];

    let (donor_ca, acceptor_ca) = (donor_res.ca?, acceptor_res.ca?);
    if distance(&donor_ca, &acceptor_ca) >= config.ca_prefilter_distance {
        return None;
    }
    if donor_res.is_standard_proline() {
        return None;
    }

    let n = donor_res.n?;
    let c = acceptor_res.c?;
    let o = acceptor_res.o?;
    let h = if breaks.has_predecessor_in_chain(donor) {
        let prev = &residues[donor - 1];
        pseudo_hydrogen(&n, &prev.c?, &prev.o?)
    } else {
        n
    };
    Some(DonorAcceptorAtoms { n, h, c, o })
}

/// Whether NH(`donor`) -> CO(`acceptor`) is a pair the energy is evaluated for.
pub fn has_hbond_energy(
    residues: &[BackboneResidue],
    breaks: &ChainBreaks,
    config: &CalcConfig,
    donor: usize,
    acceptor: usize,
) -> bool {
    donor_acceptor_atoms(residues, breaks, config, donor, acceptor).is_some()
}

pub fn hbond_energy_between(
    residues: &[BackboneResidue],
    breaks: &ChainBreaks,
    config: &CalcConfig,
    donor: usize,
    acceptor: usize,
) -> Option<f64> {
    donor_acceptor_atoms(residues, breaks, config, donor, acceptor)
        .map(|atoms| hbond_energy(&atoms.n, &atoms.h, &atoms.c, &atoms.o))
}

/// Builds the bifurcated hydrogen-bond network over all donor/acceptor pairs.
///
/// Donors are evaluated independently (in parallel with the `parallel`
/// feature); their candidate bonds are then merged in ascending donor order,
/// which together with the index tie-break makes the result deterministic.
#[instrument(skip_all, name = "hbond_network_task")]
pub fn run(
    residues: &[BackboneResidue],
    breaks: &ChainBreaks,
    config: &CalcConfig,
    reporter: &ProgressReporter,
) -> BifurHbondList {
    let residue_count = residues.len();
    let incomplete = residues.iter().filter(|residue| !residue.has_complete_backbone()).count();
    info!(residues = residue_count, "Building backbone hydrogen-bond network.");
    if incomplete > 0 {
        debug!(incomplete, "Some residues lack backbone atoms.");
    }
    reporter.report(Progress::TaskStart {
        total_steps: residue_count as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = 0..residue_count;
    #[cfg(feature = "parallel")]
    let iterator = (0..residue_count).into_par_iter();

    let candidates_per_donor: Vec<Vec<(usize, f64)>> = iterator
        .map(|donor| {
            let candidates: Vec<(usize, f64)> = (0..residue_count)
                .filter_map(|acceptor| {
                    hbond_energy_between(residues, breaks, config, donor, acceptor)
                        .filter(|&energy| is_bondy_enough(energy))
                        .map(|energy| (acceptor, energy))
                })
                .collect();
            reporter.report(Progress::TaskIncrement);
            candidates
        })
        .collect();

    let mut network = BifurHbondList::new(residue_count);
    let mut candidate_count = 0usize;
    for (donor, candidates) in candidates_per_donor.into_iter().enumerate() {
        candidate_count += candidates.len();
        for (acceptor, energy) in candidates {
            network.update_with_nh_co(donor, acceptor, energy);
        }
    }
    network.remove_not_bondy_enough();
    reporter.report(Progress::TaskFinish);

    debug!(candidates = candidate_count, "Merged candidate bonds.");
    info!("Hydrogen-bond network complete.");
    network
}
