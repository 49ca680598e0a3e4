//! Interpolation between motions: rotor slerp and motor blending.

use crate::motor::Motor;
use crate::rotor::Rotor;

/// Spherical linear interpolation of two normalized rotors `r1` -> `r2` by
/// fraction `t` in [0, 1], along the shortest path.
pub fn slerp(r1: Rotor, r2: Rotor, t: f32) -> Rotor {
    let [s1, x1, y1, z1] = r1.to_array();
    let [s2, x2, y2, z2] = r2.to_array();
    let mut dot = (s1 * s2 + x1 * x2 + y1 * y2 + z1 * z2).clamp(-1.0, 1.0);

    // take the shorter of the two arcs
    let mut sign = 1.0;
    if dot < 0.0 {
        dot = -dot;
        sign = -1.0;
    }

    let theta = dot.acos();
    if theta.abs() < 1e-6 {
        return r1;
    }

    let sin_theta = theta.sin();
    let a = ((1.0 - t) * theta).sin() / sin_theta;
    let b = sign * (t * theta).sin() / sin_theta;

    Rotor::from_array([
        a * s1 + b * s2,
        a * x1 + b * x2,
        a * y1 + b * y2,
        a * z1 + b * z2,
    ])
}

/// Interpolates two normalized motors along the screw path connecting them:
/// `exp(t log(m2 m1^-1)) m1`. `t = 0` gives `m1`, `t = 1` gives `m2`.
pub fn blend(m1: Motor, m2: Motor, t: f32) -> Motor {
    let step = (m2 * m1.inverse()).constrained().log();
    (step * t).exp() * m1
}
