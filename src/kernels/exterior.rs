//! Wedge (meet) kernels.
//!
//! Lane layouts: plane `(e0,e1,e2,e3)`, line real part `(-,e23,e31,e12)`,
//! line ideal part `(-,e01,e02,e03)`, point `(e123,e032,e013,e021)`.

use wide::f32x4;

/// plane ∧ plane -> line. Real part is the cross product of the normals,
/// ideal part mixes in the plane offsets.
#[inline]
pub(crate) fn meet_planes(a: f32x4, b: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    let real = f32x4::from([
        0.0,
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ]);
    let ideal = f32x4::from([
        0.0,
        a0 * b1 - a1 * b0,
        a0 * b2 - a2 * b0,
        a0 * b3 - a3 * b0,
    ]);
    (real, ideal)
}

/// plane ∧ branch -> point (w = ⟨n, b⟩).
#[inline]
pub(crate) fn meet_plane_branch(a: f32x4, b: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = a.to_array();
    let [_, b1, b2, b3] = b.to_array();
    f32x4::from([
        a1 * b1 + a2 * b2 + a3 * b3,
        -a0 * b1,
        -a0 * b2,
        -a0 * b3,
    ])
}

/// plane ∧ ideal line -> point at infinity (w = 0).
#[inline]
pub(crate) fn meet_plane_ideal(a: f32x4, c: f32x4) -> f32x4 {
    let [_, a1, a2, a3] = a.to_array();
    let [_, c1, c2, c3] = c.to_array();
    f32x4::from([
        0.0,
        a2 * c3 - a3 * c2,
        a3 * c1 - a1 * c3,
        a1 * c2 - a2 * c1,
    ])
}

/// plane ∧ line -> point where the line pierces the plane.
/// Vector-wedge-bivector commutes, so this also serves line ∧ plane.
#[inline]
pub(crate) fn meet_plane_line(a: f32x4, real: f32x4, ideal: f32x4) -> f32x4 {
    meet_plane_branch(a, real) + meet_plane_ideal(a, ideal)
}

/// plane ∧ point -> pseudoscalar (the signed incidence of the pair).
/// Antisymmetric: point ∧ plane is the negation.
#[inline]
pub(crate) fn meet_plane_point(a: f32x4, b: f32x4) -> f32 {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3
}

/// line ∧ line -> pseudoscalar (vanishes iff the lines are coplanar).
#[inline]
pub(crate) fn meet_lines(ar: f32x4, ai: f32x4, br: f32x4, bi: f32x4) -> f32 {
    crate::simd::hi_dp_ss(ar, bi) + crate::simd::hi_dp_ss(ai, br)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_planes_meet_in_z_axis() {
        // x = 0 plane wedge y = 0 plane: the z axis, e12
        let px = f32x4::from([0.0, 1.0, 0.0, 0.0]);
        let py = f32x4::from([0.0, 0.0, 1.0, 0.0]);
        let (real, ideal) = meet_planes(px, py);
        assert_eq!(real.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(ideal.to_array(), [0.0; 4]);
    }

    #[test]
    fn point_on_plane_has_zero_meet() {
        // plane x = 1, point (1, 5, -2)
        let p = f32x4::from([-1.0, 1.0, 0.0, 0.0]);
        let x = f32x4::from([1.0, 1.0, 5.0, -2.0]);
        assert_eq!(meet_plane_point(p, x), 0.0);
    }
}
