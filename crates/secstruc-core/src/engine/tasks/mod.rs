//! The computational stages of an assignment run.
//!
//! Each stage is a pure function over the outputs of the previous one:
//! [`hbond_network`] evaluates backbone bonds, [`helix`] and [`beta_bridge`]
//! interpret that network, and [`labeling`] combines both into one label per
//! residue.

pub mod beta_bridge;
pub mod hbond_network;
pub mod helix;
pub mod labeling;
