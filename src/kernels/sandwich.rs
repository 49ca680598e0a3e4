//! Conjugation (sandwich product) kernels: `m x ~m` specialized per grade.
//!
//! The motor kernels factor the conjugation into coefficient tables that
//! depend only on the motor, computed once, then applied to each operand as a
//! short linear combination. Batched application over a slice therefore pays
//! the quadratic motor terms a single time.

use wide::f32x4;

/// plane a reflect plane b: `a b a` (a need not be unit; the result scales
/// by the squared norm of the normal).
#[inline]
pub(crate) fn reflect_plane(a: f32x4, b: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    f32x4::from([
        2.0 * (a0 * a1 * b1 + a0 * a2 * b2 + a0 * a3 * b3)
            - (a1 * a1 + a2 * a2 + a3 * a3) * b0,
        (a1 * a1 - a2 * a2 - a3 * a3) * b1 + 2.0 * (a1 * a2 * b2 + a1 * a3 * b3),
        (a2 * a2 - a1 * a1 - a3 * a3) * b2 + 2.0 * (a1 * a2 * b1 + a2 * a3 * b3),
        (a3 * a3 - a1 * a1 - a2 * a2) * b3 + 2.0 * (a1 * a3 * b1 + a2 * a3 * b2),
    ])
}

/// plane a reflect point b: `a b a`.
#[inline]
pub(crate) fn reflect_point(a: f32x4, b: f32x4) -> f32x4 {
    let [a0, a1, a2, a3] = a.to_array();
    let [b0, b1, b2, b3] = b.to_array();
    f32x4::from([
        (a1 * a1 + a2 * a2 + a3 * a3) * b0,
        (a2 * a2 + a3 * a3 - a1 * a1) * b1
            - 2.0 * (a0 * a1 * b0 + a1 * a2 * b2 + a1 * a3 * b3),
        (a1 * a1 + a3 * a3 - a2 * a2) * b2
            - 2.0 * (a0 * a2 * b0 + a1 * a2 * b1 + a2 * a3 * b3),
        (a1 * a1 + a2 * a2 - a3 * a3) * b3
            - 2.0 * (a0 * a3 * b0 + a1 * a3 * b1 + a2 * a3 * b2),
    ])
}

/// plane a reflect line (real, ideal): `a l a`.
#[inline]
pub(crate) fn reflect_line(a: f32x4, br: f32x4, bi: f32x4) -> (f32x4, f32x4) {
    let [a0, a1, a2, a3] = a.to_array();
    let [_, b1, b2, b3] = br.to_array();
    let [_, c1, c2, c3] = bi.to_array();
    let real = f32x4::from([
        0.0,
        (a1 * a1 - a2 * a2 - a3 * a3) * b1 + 2.0 * (a1 * a2 * b2 + a1 * a3 * b3),
        (a2 * a2 - a1 * a1 - a3 * a3) * b2 + 2.0 * (a1 * a2 * b1 + a2 * a3 * b3),
        (a3 * a3 - a1 * a1 - a2 * a2) * b3 + 2.0 * (a1 * a3 * b1 + a2 * a3 * b2),
    ]);
    let ideal = f32x4::from([
        0.0,
        2.0 * (a0 * a2 * b3 - a0 * a3 * b2 - a1 * a2 * c2 - a1 * a3 * c3)
            + (a2 * a2 + a3 * a3 - a1 * a1) * c1,
        2.0 * (a0 * a3 * b1 - a0 * a1 * b3 - a1 * a2 * c1 - a2 * a3 * c3)
            + (a1 * a1 + a3 * a3 - a2 * a2) * c2,
        2.0 * (a0 * a1 * b2 - a0 * a2 * b1 - a1 * a3 * c1 - a2 * a3 * c2)
            + (a1 * a1 + a2 * a2 - a3 * a3) * c3,
    ]);
    (real, ideal)
}

/// Coefficient tables for conjugation by a motor `(ar, ai)`, computed once
/// and applied to any number of operands.
///
/// For a normalized motor `scale` is 1 and `rot` is the rotation matrix; the
/// tables stay exact (uniformly scaled) for unnormalized motors.
pub(crate) struct Conjugator {
    /// Squared norm of the real part (the scalar weight of lane 0).
    scale: f32,
    /// Shared 3x3 rotation block over lanes 1..3.
    rot: [[f32; 3]; 3],
    /// Translation column applied to a point's homogeneous lane.
    point_t: [f32; 3],
    /// Offset row applied to a plane's normal lanes.
    plane_t: [f32; 3],
    /// 3x3 block taking a line's real part into its ideal part.
    line_t: [[f32; 3]; 3],
}

impl Conjugator {
    pub(crate) fn new(ar: f32x4, ai: f32x4) -> Self {
        let [a0, a1, a2, a3] = ar.to_array();
        let [b0, b1, b2, b3] = ai.to_array();
        let scale = a0 * a0 + a1 * a1 + a2 * a2 + a3 * a3;
        let rot = [
            [
                a0 * a0 + a1 * a1 - a2 * a2 - a3 * a3,
                2.0 * (a0 * a3 + a1 * a2),
                2.0 * (a1 * a3 - a0 * a2),
            ],
            [
                2.0 * (a1 * a2 - a0 * a3),
                a0 * a0 - a1 * a1 + a2 * a2 - a3 * a3,
                2.0 * (a0 * a1 + a2 * a3),
            ],
            [
                2.0 * (a0 * a2 + a1 * a3),
                2.0 * (a2 * a3 - a0 * a1),
                a0 * a0 - a1 * a1 - a2 * a2 + a3 * a3,
            ],
        ];
        let point_t = [
            -2.0 * (a0 * b1 + a1 * b0 - a2 * b3 + a3 * b2),
            -2.0 * (a0 * b2 + a1 * b3 + a2 * b0 - a3 * b1),
            -2.0 * (a0 * b3 - a1 * b2 + a2 * b1 + a3 * b0),
        ];
        let plane_t = [
            2.0 * (a0 * b1 + a1 * b0 + a2 * b3 - a3 * b2),
            2.0 * (a0 * b2 - a1 * b3 + a2 * b0 + a3 * b1),
            2.0 * (a0 * b3 + a1 * b2 - a2 * b1 + a3 * b0),
        ];
        let line_t = [
            [
                2.0 * (a1 * b1 - a0 * b0 - a2 * b2 - a3 * b3),
                2.0 * (a0 * b3 + a1 * b2 + a2 * b1 - a3 * b0),
                2.0 * (a1 * b3 + a2 * b0 + a3 * b1 - a0 * b2),
            ],
            [
                2.0 * (a1 * b2 + a2 * b1 + a3 * b0 - a0 * b3),
                2.0 * (a2 * b2 - a0 * b0 - a1 * b1 - a3 * b3),
                2.0 * (a0 * b1 - a1 * b0 + a2 * b3 + a3 * b2),
            ],
            [
                2.0 * (a0 * b2 + a1 * b3 - a2 * b0 + a3 * b1),
                2.0 * (a1 * b0 - a0 * b1 + a2 * b3 + a3 * b2),
                2.0 * (a3 * b3 - a0 * b0 - a1 * b1 - a2 * b2),
            ],
        ];
        Self { scale, rot, point_t, plane_t, line_t }
    }

    #[inline]
    fn rotate(&self, x: f32, y: f32, z: f32) -> [f32; 3] {
        [
            self.rot[0][0] * x + self.rot[0][1] * y + self.rot[0][2] * z,
            self.rot[1][0] * x + self.rot[1][1] * y + self.rot[1][2] * z,
            self.rot[2][0] * x + self.rot[2][1] * y + self.rot[2][2] * z,
        ]
    }

    #[inline]
    pub(crate) fn plane(&self, p: f32x4) -> f32x4 {
        let [p0, p1, p2, p3] = p.to_array();
        let r = self.rotate(p1, p2, p3);
        f32x4::from([
            self.scale * p0
                + self.plane_t[0] * p1
                + self.plane_t[1] * p2
                + self.plane_t[2] * p3,
            r[0],
            r[1],
            r[2],
        ])
    }

    #[inline]
    pub(crate) fn point(&self, p: f32x4) -> f32x4 {
        let [p0, p1, p2, p3] = p.to_array();
        let r = self.rotate(p1, p2, p3);
        f32x4::from([
            self.scale * p0,
            self.point_t[0] * p0 + r[0],
            self.point_t[1] * p0 + r[1],
            self.point_t[2] * p0 + r[2],
        ])
    }

    /// Directions only rotate; the translation column multiplies w = 0.
    #[inline]
    pub(crate) fn direction(&self, d: f32x4) -> f32x4 {
        let [_, d1, d2, d3] = d.to_array();
        let r = self.rotate(d1, d2, d3);
        f32x4::from([0.0, r[0], r[1], r[2]])
    }

    #[inline]
    pub(crate) fn line(&self, real: f32x4, ideal: f32x4) -> (f32x4, f32x4) {
        let [_, b1, b2, b3] = real.to_array();
        let [_, c1, c2, c3] = ideal.to_array();
        let rb = self.rotate(b1, b2, b3);
        let rc = self.rotate(c1, c2, c3);
        let t = &self.line_t;
        let ideal_out = f32x4::from([
            0.0,
            t[0][0] * b1 + t[0][1] * b2 + t[0][2] * b3 + rc[0],
            t[1][0] * b1 + t[1][1] * b2 + t[1][2] * b3 + rc[1],
            t[2][0] * b1 + t[2][1] * b2 + t[2][2] * b3 + rc[2],
        ]);
        (f32x4::from([0.0, rb[0], rb[1], rb[2]]), ideal_out)
    }
}

/// translator on point: the closed form shrinks to an offset on the xyz
/// lanes weighted by the homogeneous coordinate.
#[inline]
pub(crate) fn translate_point(t: f32x4, p: f32x4) -> f32x4 {
    let [_, a1, a2, a3] = t.to_array();
    let [b0, b1, b2, b3] = p.to_array();
    f32x4::from([
        b0,
        b1 - 2.0 * a1 * b0,
        b2 - 2.0 * a2 * b0,
        b3 - 2.0 * a3 * b0,
    ])
}

/// translator on plane: only the offset lane moves.
#[inline]
pub(crate) fn translate_plane(t: f32x4, p: f32x4) -> f32x4 {
    let [_, a1, a2, a3] = t.to_array();
    let [b0, b1, b2, b3] = p.to_array();
    f32x4::from([
        b0 + 2.0 * (a1 * b1 + a2 * b2 + a3 * b3),
        b1,
        b2,
        b3,
    ])
}

/// translator on line: the real part is untouched, the ideal part picks up
/// the cross of the direction with the translation.
#[inline]
pub(crate) fn translate_line(t: f32x4, real: f32x4, ideal: f32x4) -> (f32x4, f32x4) {
    let [_, a1, a2, a3] = t.to_array();
    let [_, b1, b2, b3] = real.to_array();
    let [_, c1, c2, c3] = ideal.to_array();
    let ideal_out = f32x4::from([
        0.0,
        c1 + 2.0 * (a3 * b2 - a2 * b3),
        c2 + 2.0 * (a1 * b3 - a3 * b1),
        c3 + 2.0 * (a2 * b1 - a1 * b2),
    ]);
    (real, ideal_out)
}
