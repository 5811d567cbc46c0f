//! # secstruc
//!
//! DSSP-style secondary structure assignment. Every residue of a protein
//! backbone is labelled alpha-helix, beta-strand or coil from its N, Cα, C and
//! O coordinates.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BackboneResidue`,
//!   `ChainBreaks`, `SecStrucType`), the electrostatic hydrogen-bond energy, and
//!   the bifurcated bond records.
//!
//! - **[`engine`]: The Logic Core.** Configuration, errors, progress reporting,
//!   and the stages that build the bond network, find helical turns and beta
//!   bridges, and resolve them into labels.
//!
//! - **[`workflows`]: The Public API.** [`workflows::assign`] runs the stages in
//!   order and returns the labels together with the intermediate network and
//!   bridges.

pub mod core;
pub mod engine;
pub mod workflows;

#[cfg(test)]
mod testing;
