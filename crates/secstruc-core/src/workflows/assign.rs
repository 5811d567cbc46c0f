use crate::core::hbond::BifurHbondList;
use crate::core::models::bridge::BetaBridge;
use crate::core::models::chain_breaks::ChainBreaks;
use crate::core::models::residue::BackboneResidue;
use crate::core::models::sec_struc::{SecStrucType, sec_strucs_to_string};
use crate::engine::config::CalcConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Phase, ProgressReporter};
use crate::engine::tasks;
use std::fmt;
use tracing::{info, instrument};

/// Result of one assignment run.
///
/// Besides the labels, the intermediate hydrogen-bond network and per-residue
/// bridges are kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    labels: Vec<SecStrucType>,
    network: BifurHbondList,
    bridges: Vec<Vec<BetaBridge>>,
}

impl Assignment {
    pub fn labels(&self) -> &[SecStrucType] {
        &self.labels
    }

    pub fn network(&self) -> &BifurHbondList {
        &self.network
    }

    pub fn bridges(&self) -> &[Vec<BetaBridge>] {
        &self.bridges
    }

    pub fn into_labels(self) -> Vec<SecStrucType> {
        self.labels
    }

    pub fn count(&self, label: SecStrucType) -> usize {
        self.labels.iter().filter(|&&l| l == label).count()
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", sec_strucs_to_string(&self.labels))?;
        for (index, (bond, bridges)) in self.network.iter().zip(&self.bridges).enumerate() {
            write!(f, "{index:>5} {} {bond}", self.labels[index].to_dssp_code())?;
            for bridge in bridges {
                write!(f, " {bridge}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[instrument(skip_all, name = "assignment_workflow")]
pub fn run(
    residues: &[BackboneResidue],
    breaks: &ChainBreaks,
    config: &CalcConfig,
    reporter: &ProgressReporter,
) -> Result<Assignment, EngineError> {
    if breaks.residue_count() != residues.len() {
        return Err(EngineError::ResidueCountMismatch {
            expected: residues.len(),
            found: breaks.residue_count(),
        });
    }
    info!(
        residues = residues.len(),
        chain_breaks = breaks.len(),
        "Starting secondary structure assignment."
    );

    // === Phase 1: Hydrogen-Bond Network ===
    let network = reporter.phase(Phase::HbondNetwork, || {
        tasks::hbond_network::run(residues, breaks, config, reporter)
    });

    // === Phase 2: Beta Bridges ===
    let bridges = reporter.phase(Phase::BetaBridges, || {
        tasks::beta_bridge::run(&network, breaks, config)
    });

    // === Phase 3: Labeling ===
    let labels = reporter.phase(Phase::Labeling, || {
        tasks::labeling::run(&network, breaks, &bridges, config)
    });

    let assignment = Assignment {
        labels,
        network,
        bridges,
    };
    info!(
        helix = assignment.count(SecStrucType::AlphaHelix),
        strand = assignment.count(SecStrucType::BetaStrand),
        coil = assignment.count(SecStrucType::Coil),
        "Secondary structure assignment complete."
    );
    Ok(assignment)
}

/// Same as [`run`], with chain breaks inferred from the backbone using
/// `config.chain_break_distance`.
pub fn run_with_inferred_breaks(
    residues: &[BackboneResidue],
    config: &CalcConfig,
    reporter: &ProgressReporter,
) -> Result<Assignment, EngineError> {
    let breaks = ChainBreaks::infer(residues, config.chain_break_distance);
    run(residues, &breaks, config, reporter)
}

/// Labels with the default configuration and no progress reporting.
pub fn calc_sec_strucs(
    residues: &[BackboneResidue],
    breaks: &ChainBreaks,
) -> Result<Vec<SecStrucType>, EngineError> {
    run(residues, breaks, &CalcConfig::default(), &ProgressReporter::new()).map(Assignment::into_labels)
}
