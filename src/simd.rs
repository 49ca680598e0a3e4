//! Four-wide `f32` lane helpers shared by every entity and kernel.
//!
//! All entities are views over one or two `wide::f32x4` registers. The helpers
//! here cover the three things the entity layer keeps reaching for: horizontal
//! dot products (full and excluding lane 0, since most entities keep their
//! homogeneous/scalar component in lane 0), sign flips as bitwise XOR against
//! a ±0.0 mask, and reciprocal / reciprocal-square-root built from the
//! hardware estimate plus exactly one Newton-Raphson step.
//!
//! The single refinement step is part of the crate's numeric contract: it
//! trades the last couple of ULPs for throughput, so callers (and tests) must
//! tolerate ~1e-6 relative error instead of expecting IEEE-exact division.

use wide::f32x4;

/// Reciprocal estimate refined by one Newton-Raphson step: `y' = y(2 - xy)`.
#[inline]
pub(crate) fn rcp_nr1(x: f32x4) -> f32x4 {
    let y = x.recip();
    y * (f32x4::splat(2.0) - x * y)
}

/// Reciprocal square root refined by one Newton-Raphson step:
/// `y' = y * 0.5 * (3 - x * y^2)`.
#[inline]
pub(crate) fn rsqrt_nr1(x: f32x4) -> f32x4 {
    let y = x.recip_sqrt();
    y * f32x4::splat(0.5) * (f32x4::splat(3.0) - x * y * y)
}

/// Lane 0 of `x`.
#[inline]
pub(crate) fn first(x: f32x4) -> f32 {
    x.to_array()[0]
}

/// Full four-lane dot product, broadcast to all lanes.
#[inline]
pub(crate) fn dp_bc(a: f32x4, b: f32x4) -> f32x4 {
    f32x4::splat(dp_ss(a, b))
}

/// Full four-lane dot product as a scalar.
#[inline]
pub(crate) fn dp_ss(a: f32x4, b: f32x4) -> f32 {
    let p = (a * b).to_array();
    p[0] + p[1] + p[2] + p[3]
}

/// Dot product of lanes 1..3 (the "high" lanes), broadcast to all lanes.
#[inline]
pub(crate) fn hi_dp_bc(a: f32x4, b: f32x4) -> f32x4 {
    f32x4::splat(hi_dp_ss(a, b))
}

/// Dot product of lanes 1..3 as a scalar.
#[inline]
pub(crate) fn hi_dp_ss(a: f32x4, b: f32x4) -> f32 {
    let p = (a * b).to_array();
    p[1] + p[2] + p[3]
}

/// Flip the sign of lanes 1..3, leaving lane 0 untouched.
///
/// This is reversion for every entity that keeps grade-2/3 components in the
/// high lanes (rotor bivector, motor parts, branch, ideal line), done as a
/// bitwise XOR against a ±0.0 mask instead of per-field negation.
#[inline]
pub(crate) fn flip_xyz(x: f32x4) -> f32x4 {
    x ^ f32x4::from([0.0, -0.0, -0.0, -0.0])
}

/// Flip the sign of every lane via XOR (branch-free negation).
#[inline]
pub(crate) fn flip_all(x: f32x4) -> f32x4 {
    x ^ f32x4::splat(-0.0)
}

/// Lane-wise |a - b| <= eps comparison.
#[inline]
pub(crate) fn approx_eq4(a: f32x4, b: f32x4, eps: f32) -> bool {
    let d = (a - b).abs().to_array();
    d[0] <= eps && d[1] <= eps && d[2] <= eps && d[3] <= eps
}

#[cfg(test)]
mod tests {
    use super::*;

    // the NR contract: one refinement step, so ~1e-6 relative, not exact
    const EPS: f32 = 1e-5;

    #[test]
    fn rcp_within_contract() {
        for &x in &[0.5f32, 1.0, 3.0, 1024.0, 1.0e-3] {
            let got = first(rcp_nr1(f32x4::splat(x)));
            let rel = ((got - 1.0 / x) / (1.0 / x)).abs();
            assert!(rel < EPS, "rcp({x}) rel err {rel}");
        }
    }

    #[test]
    fn rsqrt_within_contract() {
        for &x in &[0.25f32, 1.0, 2.0, 9.0, 4096.0] {
            let got = first(rsqrt_nr1(f32x4::splat(x)));
            let rel = ((got - 1.0 / x.sqrt()) / (1.0 / x.sqrt())).abs();
            assert!(rel < EPS, "rsqrt({x}) rel err {rel}");
        }
    }

    #[test]
    fn dots_split_lane0() {
        let a = f32x4::from([1.0, 2.0, 3.0, 4.0]);
        let b = f32x4::from([10.0, 20.0, 30.0, 40.0]);
        assert_eq!(dp_ss(a, b), 300.0);
        assert_eq!(hi_dp_ss(a, b), 290.0);
        assert_eq!(dp_bc(a, b).to_array(), [300.0; 4]);
        assert_eq!(hi_dp_bc(a, b).to_array(), [290.0; 4]);
    }

    #[test]
    fn xor_masks_flip_expected_lanes() {
        let a = f32x4::from([1.0, 2.0, -3.0, 4.0]);
        assert_eq!(flip_xyz(a).to_array(), [1.0, -2.0, 3.0, -4.0]);
        assert_eq!(flip_all(a).to_array(), [-1.0, -2.0, 3.0, -4.0]);
    }
}
