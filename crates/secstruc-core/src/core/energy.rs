use nalgebra::{Point3, distance};

/// Any inter-atomic distance below this (Å) is treated as a maximal bond.
pub const MIN_ATOM_DISTANCE: f64 = 0.5;
/// q1·q2·f for the backbone C=O / N-H partial charges, in kcal/mol·Å.
pub const ENERGY_MULTIPLIER: f64 = 0.42 * 0.2 * 332.0;
pub const MIN_HBOND_ENERGY: f64 = -9.9;
pub const MAX_HBOND_ENERGY: f64 = 0.0;
/// Energies strictly below this (kcal/mol) count as hydrogen bonds.
pub const HBOND_ENERGY_CUTOFF: f64 = -0.5;
const ROUNDING_FACTOR: f64 = 1000.0;

/// Electrostatic DSSP energy from the four donor/acceptor distances.
///
/// The result is clamped to `[MIN_HBOND_ENERGY, MAX_HBOND_ENERGY]` and
/// rounded to the nearest thousandth, halves away from zero.
#[inline]
pub fn hbond_energy_from_distances(dist_no: f64, dist_hc: f64, dist_ho: f64, dist_nc: f64) -> f64 {
    if dist_no < MIN_ATOM_DISTANCE
        || dist_hc < MIN_ATOM_DISTANCE
        || dist_ho < MIN_ATOM_DISTANCE
        || dist_nc < MIN_ATOM_DISTANCE
    {
        return MIN_HBOND_ENERGY;
    }
    let raw = ENERGY_MULTIPLIER
        * ((1.0 / dist_no) + (1.0 / dist_hc) - (1.0 / dist_ho) - (1.0 / dist_nc));
    (ROUNDING_FACTOR * raw.clamp(MIN_HBOND_ENERGY, MAX_HBOND_ENERGY)).round() / ROUNDING_FACTOR
}

/// Energy of the bond from donor `n`/`h` to acceptor `c`/`o`.
#[inline]
pub fn hbond_energy(n: &Point3<f64>, h: &Point3<f64>, c: &Point3<f64>, o: &Point3<f64>) -> f64 {
    hbond_energy_from_distances(
        distance(n, o),
        distance(h, c),
        distance(h, o),
        distance(n, c),
    )
}

#[inline]
pub fn is_bondy_enough(energy: f64) -> bool {
    energy < HBOND_ENERGY_CUTOFF
}
