//! # Core Models Module
//!
//! Plain data types describing the input backbone and the labels produced from it.
//!
//! ## Key Components
//!
//! - [`residue`] - Amino acid classification and per-residue backbone coordinates
//! - [`chain_breaks`] - Sorted chain-segment boundaries and straddle queries
//! - [`bridge`] - Beta-bridge records attached to residues
//! - [`sec_struc`] - The three-state helix/strand/coil label and its DSSP codes

pub mod bridge;
pub mod chain_breaks;
pub mod residue;
pub mod sec_struc;
