//! Exponential and logarithmic maps between bivectors and the motion group:
//! Branch <-> Rotor, IdealLine <-> Translator, Line <-> Motor.
//!
//! A line `l = b + c` (real + ideal part) factors as a dual-number multiple
//! of a unitized line, `l = (theta + v eps)(B + C eps)`; exponentiating takes
//! cos/sin of the dual angle, which expands to the closed forms below. The
//! logarithm inverts the factorization and expects a normalized motor.

use wide::f32x4;

const TINY: f32 = 1e-12;

/// exp of a line bivector -> motor `(real, ideal)`.
#[inline]
pub(crate) fn exp_line(real: f32x4, ideal: f32x4) -> (f32x4, f32x4) {
    let [_, b1, b2, b3] = real.to_array();
    let [_, c1, c2, c3] = ideal.to_array();
    let th2 = b1 * b1 + b2 * b2 + b3 * b3;
    if th2 < TINY {
        // pure translation: exp(c) = 1 + c
        return (f32x4::from([1.0, 0.0, 0.0, 0.0]), f32x4::from([0.0, c1, c2, c3]));
    }
    let th = th2.sqrt();
    let inv_th = 1.0 / th;
    let v = (b1 * c1 + b2 * c2 + b3 * c3) * inv_th;
    let nb = [b1 * inv_th, b2 * inv_th, b3 * inv_th];
    let nc = [
        (c1 - v * nb[0]) * inv_th,
        (c2 - v * nb[1]) * inv_th,
        (c3 - v * nb[2]) * inv_th,
    ];
    let (st, ct) = th.sin_cos();
    let out_real = f32x4::from([ct, st * nb[0], st * nb[1], st * nb[2]]);
    let out_ideal = f32x4::from([
        v * st,
        v * ct * nb[0] + st * nc[0],
        v * ct * nb[1] + st * nc[1],
        v * ct * nb[2] + st * nc[2],
    ]);
    (out_real, out_ideal)
}

/// log of a normalized motor -> line bivector `(real, ideal)`.
#[inline]
pub(crate) fn log_motor(real: f32x4, ideal: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = real.to_array();
    let [b0, b1, b2, b3] = ideal.to_array();
    let st2 = a1 * a1 + a2 * a2 + a3 * a3;
    if st2 < TINY {
        // pure translator: log(1 + c) = c
        return (f32x4::ZERO, f32x4::from([0.0, b1, b2, b3]));
    }
    let st = st2.sqrt();
    let inv_st = 1.0 / st;
    let th = st.atan2(a0);
    let ct = a0; // cos(th) for a normalized motor
    let v = b0 * inv_st;
    let nb = [a1 * inv_st, a2 * inv_st, a3 * inv_st];
    let nc = [
        (b1 - v * ct * nb[0]) * inv_st,
        (b2 - v * ct * nb[1]) * inv_st,
        (b3 - v * ct * nb[2]) * inv_st,
    ];
    let out_real = f32x4::from([0.0, th * nb[0], th * nb[1], th * nb[2]]);
    let out_ideal = f32x4::from([
        0.0,
        v * nb[0] + th * nc[0],
        v * nb[1] + th * nc[1],
        v * nb[2] + th * nc[2],
    ]);
    (out_real, out_ideal)
}

/// exp of a branch -> rotor (the ideal-free specialization).
#[inline]
pub(crate) fn exp_branch(real: f32x4) -> f32x4 {
    let [_, b1, b2, b3] = real.to_array();
    let th2 = b1 * b1 + b2 * b2 + b3 * b3;
    if th2 < TINY {
        return f32x4::from([1.0, 0.0, 0.0, 0.0]);
    }
    let th = th2.sqrt();
    let (st, ct) = th.sin_cos();
    let s = st / th;
    f32x4::from([ct, s * b1, s * b2, s * b3])
}

/// log of a normalized rotor -> branch.
#[inline]
pub(crate) fn log_rotor(r: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = r.to_array();
    let st2 = a1 * a1 + a2 * a2 + a3 * a3;
    if st2 < TINY {
        return f32x4::ZERO;
    }
    let st = st2.sqrt();
    let s = st.atan2(a0) / st;
    f32x4::from([0.0, s * a1, s * a2, s * a3])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::approx_eq4;

    const EPS: f32 = 1e-5;

    #[test]
    fn branch_rotor_round_trip() {
        let b = f32x4::from([0.0, 0.3, -0.9, 0.4]);
        let r = exp_branch(b);
        assert!(approx_eq4(log_rotor(r), b, EPS));
    }

    #[test]
    fn line_motor_round_trip() {
        let real = f32x4::from([0.0, 0.5, -0.25, 0.75]);
        let ideal = f32x4::from([0.0, -0.4, 0.1, 0.8]);
        let (mr, mi) = exp_line(real, ideal);
        let (lr, li) = log_motor(mr, mi);
        assert!(approx_eq4(lr, real, EPS));
        assert!(approx_eq4(li, ideal, EPS));
    }

    #[test]
    fn pure_ideal_line_exponentiates_to_translator() {
        let ideal = f32x4::from([0.0, 1.0, 2.0, 3.0]);
        let (mr, mi) = exp_line(f32x4::ZERO, ideal);
        assert_eq!(mr.to_array(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(mi.to_array(), [0.0, 1.0, 2.0, 3.0]);
    }
}
