//! Geometric product kernels.
//!
//! Every function here is the closed form of one (grade, grade) pairing, not
//! a slice of a generic 16x16 table. Motor-valued results come back as the
//! `(real, ideal)` register pair with the motor layout
//! `(1,e23,e31,e12)` / `(e0123,e01,e02,e03)`.

use crate::simd::rcp_nr1;
use wide::f32x4;

/// plane * plane -> motor (the composition of two reflections).
#[inline]
pub(crate) fn gp_planes(a: f32x4, b: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    let real = f32x4::from([
        a1 * b1 + a2 * b2 + a3 * b3,
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

/// plane * point -> motor.
#[inline]
pub(crate) fn gp_plane_point(a: f32x4, b: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    let real = f32x4::from([0.0, a1 * b0, a2 * b0, a3 * b0]);
    let ideal = f32x4::from([
        a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3,
        a3 * b2 - a2 * b3,
        a1 * b3 - a3 * b1,
        a2 * b1 - a1 * b2,
    ]);
    (real, ideal)
}

/// point * plane -> motor.
#[inline]
pub(crate) fn gp_point_plane(a: f32x4, b: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    let real = f32x4::from([0.0, a0 * b1, a0 * b2, a0 * b3]);
    let ideal = f32x4::from([
        -(a0 * b0 + a1 * b1 + a2 * b2 + a3 * b3),
        a2 * b3 - a3 * b2,
        a3 * b1 - a1 * b3,
        a1 * b2 - a2 * b1,
    ]);
    (real, ideal)
}

/// rotor * rotor (quaternion product on the `(1,e23,e31,e12)` lanes).
/// Also the real-part product of every motor composition.
#[inline]
pub(crate) fn gp_rotors(a: f32x4, b: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    f32x4::from([
        a0 * b0 - a1 * b1 - a2 * b2 - a3 * b3,
        a0 * b1 + a1 * b0 - a2 * b3 + a3 * b2,
        a0 * b2 + a1 * b3 + a2 * b0 - a3 * b1,
        a0 * b3 - a1 * b2 + a2 * b1 + a3 * b0,
    ])
}

/// line * line -> motor.
#[inline]
pub(crate) fn gp_lines(ar: f32x4, ai: f32x4, br: f32x4, bi: f32x4) -> (f32x4, f32x4) {
    let [_, a1, a2, a3] = ar.to_array();
    let [_, c1, c2, c3] = ai.to_array();
    let [_, b1, b2, b3] = br.to_array();
    let [_, d1, d2, d3] = bi.to_array();
    let real = f32x4::from([
        -(a1 * b1 + a2 * b2 + a3 * b3),
        a3 * b2 - a2 * b3,
        a1 * b3 - a3 * b1,
        a2 * b1 - a1 * b2,
    ]);
    let ideal = f32x4::from([
        a1 * d1 + a2 * d2 + a3 * d3 + b1 * c1 + b2 * c2 + b3 * c3,
        a3 * d2 - a2 * d3 + b2 * c3 - b3 * c2,
        a1 * d3 - a3 * d1 - b1 * c3 + b3 * c1,
        a2 * d1 - a1 * d2 + b1 * c2 - b2 * c1,
    ]);
    (real, ideal)
}

/// point * point -> translator taking the right operand to the left one.
///
/// The raw product is `-w_a w_b` plus ideal terms; the kernel folds the
/// scalar into the implicit-one translator convention so the result is exact
/// for unnormalized points too.
#[inline]
pub(crate) fn gp_points(a: f32x4, b: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    let s = 0.5 * crate::simd::first(rcp_nr1(f32x4::splat(a0 * b0)));
    f32x4::from([
        0.0,
        s * (a0 * b1 - a1 * b0),
        s * (a0 * b2 - a2 * b0),
        s * (a0 * b3 - a3 * b0),
    ])
}

/// rotor * translator -> the ideal half of the resulting motor
/// (the real half is the rotor itself).
#[inline]
pub(crate) fn gp_rotor_translator(r: f32x4, t: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = r.to_array();
    let [_, b1, b2, b3] = t.to_array();
    f32x4::from([
        a1 * b1 + a2 * b2 + a3 * b3,
        a0 * b1 - a2 * b3 + a3 * b2,
        a0 * b2 + a1 * b3 - a3 * b1,
        a0 * b3 - a1 * b2 + a2 * b1,
    ])
}

/// translator * rotor -> the ideal half of the resulting motor.
#[inline]
pub(crate) fn gp_translator_rotor(t: f32x4, r: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = r.to_array();
    let [_, b1, b2, b3] = t.to_array();
    f32x4::from([
        a1 * b1 + a2 * b2 + a3 * b3,
        a0 * b1 + a2 * b3 - a3 * b2,
        a0 * b2 - a1 * b3 + a3 * b1,
        a0 * b3 + a1 * b2 - a2 * b1,
    ])
}

/// motor * motor -> motor. `b` is applied first, then `a`.
#[inline]
pub(crate) fn gp_motors(
    ar: f32x4,
    ai: f32x4,
    br: f32x4,
    bi: f32x4,
) -> (f32x4, f32x4) {
    let real = gp_rotors(ar, br);
    let [a0, a1, a2, a3] = ar.to_array();
    let [b0, b1, b2, b3] = ai.to_array();
    let [c0, c1, c2, c3] = br.to_array();
    let [d0, d1, d2, d3] = bi.to_array();
    let ideal = f32x4::from([
        a0 * d0 + a1 * d1 + a2 * d2 + a3 * d3 + b0 * c0 + b1 * c1 + b2 * c2 + b3 * c3,
        a0 * d1 - a1 * d0 - a2 * d3 + a3 * d2 - b0 * c1 + b1 * c0 - b2 * c3 + b3 * c2,
        a0 * d2 + a1 * d3 - a2 * d0 - a3 * d1 - b0 * c2 + b1 * c3 + b2 * c0 - b3 * c1,
        a0 * d3 - a1 * d2 + a2 * d1 - a3 * d0 - b0 * c3 - b1 * c2 + b2 * c1 + b3 * c0,
    ]);
    (real, ideal)
}
