//! Symmetric inner (dot) product kernels, grade |r - s| of the geometric
//! product.

use crate::simd::hi_dp_ss;
use wide::f32x4;

/// plane | plane -> scalar: ⟨n_a, n_b⟩ (offsets drop out).
#[inline]
pub(crate) fn dot_planes(a: f32x4, b: f32x4) -> f32 {
    hi_dp_ss(a, b)
}

/// point | point -> scalar: -w_a w_b (e123 squares to -1, the rest carry e0).
#[inline]
pub(crate) fn dot_points(a: f32x4, b: f32x4) -> f32 {
    let [a0, ..] = a.to_array();
    let [b0, ..] = b.to_array();
    -a0 * b0
}

/// line | line -> scalar: -⟨real_a, real_b⟩.
#[inline]
pub(crate) fn dot_lines(ar: f32x4, br: f32x4) -> f32 {
    -hi_dp_ss(ar, br)
}

/// plane | line -> plane.
#[inline]
pub(crate) fn dot_plane_line(a: f32x4, br: f32x4, bi: f32x4) -> f32x4 {
    let [_, a1, a2, a3] = a.to_array();
    let [_, b1, b2, b3] = br.to_array();
    let [_, d1, d2, d3] = bi.to_array();
    f32x4::from([
        -(a1 * d1 + a2 * d2 + a3 * d3),
        a3 * b2 - a2 * b3,
        a1 * b3 - a3 * b1,
        a2 * b1 - a1 * b2,
    ])
}

/// line | plane -> plane (offset term flips sign relative to plane | line).
#[inline]
pub(crate) fn dot_line_plane(ar: f32x4, ai: f32x4, b: f32x4) -> f32x4 {
    let [_, a1, a2, a3] = ar.to_array();
    let [_, c1, c2, c3] = ai.to_array();
    let [_, b1, b2, b3] = b.to_array();
    f32x4::from([
        b1 * c1 + b2 * c2 + b3 * c3,
        a3 * b2 - a2 * b3,
        a1 * b3 - a3 * b1,
        a2 * b1 - a1 * b2,
    ])
}

/// plane | point -> line.
#[inline]
pub(crate) fn dot_plane_point(a: f32x4, b: f32x4) -> (f32x4, f32x4) {
    let [_, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    let real = f32x4::from([0.0, a1 * b0, a2 * b0, a3 * b0]);
    let ideal = f32x4::from([
        0.0,
        a3 * b2 - a2 * b3,
        a1 * b3 - a3 * b1,
        a2 * b1 - a1 * b2,
    ]);
    (real, ideal)
}

/// point | plane -> line (ideal part flips sign relative to plane | point).
#[inline]
pub(crate) fn dot_point_plane(a: f32x4, b: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = a.to_array();
    let [_, b1, b2, b3] = b.to_array();
    let real = f32x4::from([0.0, a0 * b1, a0 * b2, a0 * b3]);
    let ideal = f32x4::from([
        0.0,
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ]);
    (real, ideal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_unit_planes_dot_to_one() {
        let a = f32x4::from([0.0, 1.0, 0.0, 0.0]);
        let b = f32x4::from([5.0, 1.0, 0.0, 0.0]);
        assert_eq!(dot_planes(a, b), 1.0);
    }

    #[test]
    fn normalized_points_dot_to_minus_one() {
        let a = f32x4::from([1.0, 3.0, -2.0, 0.5]);
        let b = f32x4::from([1.0, -8.0, 0.0, 9.0]);
        assert_eq!(dot_points(a, b), -1.0);
    }
}
