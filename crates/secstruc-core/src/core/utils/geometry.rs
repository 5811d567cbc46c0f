use nalgebra::Point3;

/// Places the backbone amide hydrogen one ångström from `n_pos`, pointing
/// away from the preceding residue's carbonyl (`prev_o_pos - prev_c_pos`).
#[inline]
pub fn pseudo_hydrogen(
    n_pos: &Point3<f64>,
    prev_c_pos: &Point3<f64>,
    prev_o_pos: &Point3<f64>,
) -> Point3<f64> {
    let c_to_o = prev_o_pos - prev_c_pos;
    n_pos - c_to_o / c_to_o.norm()
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::distance;

    const TOLERANCE: f64 = 1e-9;

    fn f64_approx_equal(a: f64, b: f64) -> bool {
        (a - b).abs() < TOLERANCE
    }

    #[test]
    fn pseudo_hydrogen_is_one_angstrom_opposite_the_previous_carbonyl() {
        let n = Point3::new(1.0, 2.0, 3.0);
        let prev_c = Point3::new(0.0, 0.0, 0.0);
        let prev_o = Point3::new(0.0, 1.231, 0.0);

        let h = pseudo_hydrogen(&n, &prev_c, &prev_o);

        assert!(f64_approx_equal(distance(&n, &h), 1.0));
        assert!(f64_approx_equal(h.x, 1.0));
        assert!(f64_approx_equal(h.y, 1.0));
        assert!(f64_approx_equal(h.z, 3.0));
    }

    #[test]
    fn pseudo_hydrogen_does_not_depend_on_carbonyl_length() {
        let n = Point3::new(0.0, 0.0, 0.0);
        let short = pseudo_hydrogen(&n, &Point3::new(5.0, 5.0, 5.0), &Point3::new(6.0, 5.0, 5.0));
        let long = pseudo_hydrogen(&n, &Point3::new(5.0, 5.0, 5.0), &Point3::new(9.0, 5.0, 5.0));
        assert!(f64_approx_equal(distance(&short, &long), 0.0));
        assert!(f64_approx_equal(short.x, -1.0));
    }
}
