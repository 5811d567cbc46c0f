//! Fixtures shared by the unit tests: ideal backbones built from internal
//! coordinates, and hydrogen-bond networks written out bond by bond.

use crate::core::hbond::BifurHbondList;
use crate::core::models::residue::{AminoAcidType, BackboneResidue};
use nalgebra::{Point3, Rotation3, Unit, Vector3};
use std::f64::consts::PI;

const N_CA_LENGTH: f64 = 1.458;
const CA_C_LENGTH: f64 = 1.525;
const C_N_LENGTH: f64 = 1.329;
const C_O_LENGTH: f64 = 1.231;
const N_CA_C_ANGLE: f64 = 111.2;
const CA_C_N_ANGLE: f64 = 116.2;
const C_N_CA_ANGLE: f64 = 121.7;
const CA_C_O_ANGLE: f64 = 120.5;
const OMEGA: f64 = 180.0;

pub const ALPHA_PHI_PSI: (f64, f64) = (-57.0, -47.0);
pub const ANTIPARALLEL_PHI_PSI: (f64, f64) = (-139.0, 135.0);

pub const FIXTURE_BOND_ENERGY: f64 = -2.0;

/// Places atom D so that |CD| = `bond_length`, angle BCD = `angle_deg` and
/// dihedral ABCD = `torsion_deg`.
pub fn place_atom(
    a: &Point3<f64>,
    b: &Point3<f64>,
    c: &Point3<f64>,
    bond_length: f64,
    angle_deg: f64,
    torsion_deg: f64,
) -> Point3<f64> {
    let bc = (c - b).normalize();
    let normal = (b - a).cross(&bc).normalize();
    let in_plane = normal.cross(&bc);
    let (angle, torsion) = (angle_deg.to_radians(), torsion_deg.to_radians());
    let local = Vector3::new(
        -bond_length * angle.cos(),
        bond_length * angle.sin() * torsion.cos(),
        bond_length * angle.sin() * torsion.sin(),
    );
    c + bc * local.x + in_plane * local.y + normal * local.z
}

/// Builds a single chain segment from per-residue (phi, psi) pairs.
pub fn ideal_backbone(chain_id: char, phi_psi: &[(f64, f64)]) -> Vec<BackboneResidue> {
    let mut n = Point3::origin();
    let mut ca = Point3::new(N_CA_LENGTH, 0.0, 0.0);
    let angle = N_CA_C_ANGLE.to_radians();
    let mut c = ca + Vector3::new(-angle.cos(), angle.sin(), 0.0) * CA_C_LENGTH;

    let mut residues = Vec::with_capacity(phi_psi.len());
    for (i, &(_, psi)) in phi_psi.iter().enumerate() {
        let o = place_atom(&n, &ca, &c, C_O_LENGTH, CA_C_O_ANGLE, psi + 180.0);
        residues.push(
            BackboneResidue::new(chain_id, Some(AminoAcidType::Alanine)).with_backbone(n, ca, c, o),
        );
        if let Some(&(next_phi, _)) = phi_psi.get(i + 1) {
            let next_n = place_atom(&n, &ca, &c, C_N_LENGTH, CA_C_N_ANGLE, psi);
            let next_ca = place_atom(&ca, &c, &next_n, N_CA_LENGTH, C_N_CA_ANGLE, OMEGA);
            let next_c = place_atom(&c, &next_n, &next_ca, CA_C_LENGTH, N_CA_C_ANGLE, next_phi);
            (n, ca, c) = (next_n, next_ca, next_c);
        }
    }
    residues
}

pub fn ideal_helix(length: usize) -> Vec<BackboneResidue> {
    ideal_backbone('A', &vec![ALPHA_PHI_PSI; length])
}

/// Two antiparallel strands on chains `A` and `B`, the second generated from
/// the first by a two-fold rotation.
///
/// The rotation axis is perpendicular to the sheet and passes `offset` Å from
/// the Cα of residue `pivot`, along that residue's carbonyl direction.
pub fn antiparallel_sheet(strand_length: usize, pivot: usize, offset: f64) -> Vec<BackboneResidue> {
    let strand = ideal_backbone('A', &vec![ANTIPARALLEL_PHI_PSI; strand_length]);
    let (Some(first), Some(last)) = (strand.first(), strand.last()) else {
        return strand;
    };
    let along = (last.ca.unwrap() - first.ca.unwrap()).normalize();
    let pivot_res = &strand[pivot];
    let carbonyl = pivot_res.o.unwrap() - pivot_res.c.unwrap();
    let sideways = (carbonyl - along * carbonyl.dot(&along)).normalize();
    let axis = Unit::new_normalize(along.cross(&sideways));
    let center = pivot_res.ca.unwrap() + sideways * offset;
    let rotation = Rotation3::from_axis_angle(&axis, PI);
    let rotate = |p: Option<Point3<f64>>| p.map(|p| center + rotation * (p - center));

    let partner: Vec<_> = strand
        .iter()
        .map(|res| BackboneResidue {
            chain_id: 'B',
            amino_acid: res.amino_acid,
            n: rotate(res.n),
            ca: rotate(res.ca),
            c: rotate(res.c),
            o: rotate(res.o),
        })
        .collect();
    strand.into_iter().chain(partner).collect()
}

/// A network in which every listed NH(donor) -> CO(acceptor) bond has
/// [`FIXTURE_BOND_ENERGY`].
pub fn network_from_bonds(residue_count: usize, bonds: &[(usize, usize)]) -> BifurHbondList {
    let mut network = BifurHbondList::new(residue_count);
    for &(nh, co) in bonds {
        network.update_with_nh_co(nh, co, FIXTURE_BOND_ENERGY);
    }
    network.remove_not_bondy_enough();
    network
}

/// Bonds of an antiparallel ladder pairing `i` with `sum - i`, H-bonded at
/// every listed `i` in both directions.
pub fn antiparallel_ladder(sum: usize, bonded: &[usize]) -> Vec<(usize, usize)> {
    bonded
        .iter()
        .flat_map(|&i| [(i, sum - i), (sum - i, i)])
        .collect()
}

/// Bonds of a parallel ladder pairing `i` with `i + shift`:
/// NH(i) -> CO(i + shift - 1) and NH(i + shift + 1) -> CO(i).
pub fn parallel_ladder(shift: usize, bonded: &[usize]) -> Vec<(usize, usize)> {
    bonded
        .iter()
        .flat_map(|&i| [(i, i + shift - 1), (i + shift + 1, i)])
        .collect()
}
