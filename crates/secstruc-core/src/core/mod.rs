//! # Core Module
//!
//! Stateless building blocks for backbone secondary-structure assignment.
//!
//! ## Overview
//!
//! Everything here is a pure function of its inputs: the residue and chain-break
//! models, the electrostatic hydrogen-bond energy, the amide pseudo-hydrogen
//! placement, and the fixed-capacity bifurcated bond records that the engine
//! fills in.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Backbone residues, chain breaks, bridges and labels
//! - **Energy Calculations** ([`energy`]) - The DSSP electrostatic bond energy and its cutoff
//! - **Geometry** ([`utils`]) - Amide hydrogen placement from the preceding carbonyl
//! - **Bond Records** ([`hbond`]) - Best-two NH/CO partners per residue

pub mod energy;
pub mod hbond;
pub mod models;
pub mod utils;
