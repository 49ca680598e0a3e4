//! Motors, the full even group `(1, e23, e31, e12)` plus
//! `(e0123, e01, e02, e03)`: every rigid motion of 3-space is conjugation by
//! one motor, the composition of a rotation and a translation about a common
//! axis (a screw motion).

use std::ops::{Add, Div, Mul, Neg, Sub};

use wide::f32x4;

use crate::error::{check_len, LayoutError};
use crate::kernels::exp_log::{exp_line, log_motor};
use crate::kernels::geometric::gp_motors;
use crate::kernels::sandwich::Conjugator;
use crate::line::Line;
use crate::plane::Plane;
use crate::point::{Direction, Origin, Point};
use crate::rotor::Rotor;
use crate::simd::{
    approx_eq4, dp_bc, dp_ss, flip_all, flip_xyz, hi_dp_bc, hi_dp_ss, rsqrt_nr1,
};
use crate::translator::Translator;

#[derive(Debug, Clone, Copy)]
pub struct Motor {
    pub(crate) real: f32x4,
    pub(crate) ideal: f32x4,
}

impl Motor {
    /// The screw motion rotating by `ang_rad` about `axis` while translating
    /// `delta` along it: `exp(-ang_rad/2 * l - delta/2 * l_inf)` for the
    /// normalized axis `l`.
    #[inline]
    pub fn new(ang_rad: f32, delta: f32, axis: Line) -> Self {
        let inv_norm = rsqrt_nr1(hi_dp_bc(axis.real, axis.real));
        let nb = axis.real * inv_norm;
        let ni = axis.ideal * inv_norm;
        let half_ang = f32x4::splat(-0.5 * ang_rad);
        let g_real = nb * half_ang;
        let g_ideal = ni * half_ang + nb * f32x4::splat(-0.5 * delta);
        let (real, ideal) = exp_line(g_real, g_ideal);
        Self { real, ideal }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { real: f32x4::from([1.0, 0.0, 0.0, 0.0]), ideal: f32x4::ZERO }
    }

    /// Builds the motor
    /// `a + b e23 + c e31 + d e12 + e e01 + f e02 + g e03 + h e0123`.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn from_components(
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
        g: f32,
        h: f32,
    ) -> Self {
        Self {
            real: f32x4::from([a, b, c, d]),
            ideal: f32x4::from([h, e, f, g]),
        }
    }

    /// Loads the eight raw lanes, `(1, e23, e31, e12)` then
    /// `(e0123, e01, e02, e03)`.
    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 8)?;
        Ok(Self {
            real: f32x4::from([data[0], data[1], data[2], data[3]]),
            ideal: f32x4::from([data[4], data[5], data[6], data[7]]),
        })
    }

    #[inline]
    pub fn to_array(self) -> [f32; 8] {
        let [a, b, c, d] = self.real.to_array();
        let [h, e, f, g] = self.ideal.to_array();
        [a, b, c, d, h, e, f, g]
    }

    #[inline]
    pub fn store(self, out: &mut [f32; 8]) {
        *out = self.to_array();
    }

    #[inline]
    pub fn scalar(self) -> f32 {
        self.real.to_array()[0]
    }

    #[inline]
    pub fn e23(self) -> f32 {
        self.real.to_array()[1]
    }

    #[inline]
    pub fn e31(self) -> f32 {
        self.real.to_array()[2]
    }

    #[inline]
    pub fn e12(self) -> f32 {
        self.real.to_array()[3]
    }

    #[inline]
    pub fn e01(self) -> f32 {
        self.ideal.to_array()[1]
    }

    #[inline]
    pub fn e02(self) -> f32 {
        self.ideal.to_array()[2]
    }

    #[inline]
    pub fn e03(self) -> f32 {
        self.ideal.to_array()[3]
    }

    #[inline]
    pub fn e0123(self) -> f32 {
        self.ideal.to_array()[0]
    }

    #[inline]
    pub fn rotor(self) -> Rotor {
        Rotor { lanes: self.real }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self { real: flip_xyz(self.real), ideal: flip_xyz(self.ideal) }
    }

    /// Divides by the dual-number norm `sqrt(m ~m)` so that `m ~m = 1`
    /// afterwards: `1/sqrt(s + t e0123) = s^-1/2 - (t/2) s^-3/2 e0123`.
    #[inline]
    pub fn normalized(self) -> Self {
        let s = rsqrt_nr1(dp_bc(self.real, self.real));
        let bc = dp_ss(self.real, flip_xyz(self.ideal));
        let v = f32x4::splat(-bc) * s * s * s;
        Self {
            real: self.real * s,
            ideal: self.ideal * s + flip_xyz(self.real) * v,
        }
    }

    /// `~m / (m ~m)`, exact for unnormalized motors.
    #[inline]
    pub fn inverse(self) -> Self {
        let s = dp_ss(self.real, self.real);
        let bc = dp_ss(self.real, flip_xyz(self.ideal));
        let inv_s = f32x4::splat(1.0 / s);
        Self {
            real: flip_xyz(self.real) * inv_s,
            ideal: flip_xyz(self.ideal) * inv_s
                - self.real * f32x4::splat(2.0 * bc / (s * s)),
        }
    }

    /// Flips to the representative with non-negative scalar part.
    #[inline]
    pub fn constrained(self) -> Self {
        if self.scalar() < 0.0 {
            Self { real: flip_all(self.real), ideal: flip_all(self.ideal) }
        } else {
            self
        }
    }

    /// Logarithm of a normalized motor: the line `l` with `exp(l) = m`.
    #[inline]
    pub fn log(self) -> Line {
        let (real, ideal) = log_motor(self.real, self.ideal);
        Line { real, ideal }
    }

    /// Recovers `(ang_rad, delta, axis)` so that
    /// `Motor::new(ang_rad, delta, axis)` rebuilds this (normalized) motor.
    /// The angle comes back non-negative with the axis oriented to match; a
    /// pure translation reports a zero angle and the identity reports zeros
    /// with the z axis.
    pub fn screw(self) -> (f32, f32, Line) {
        let l = self.log();
        let s2 = hi_dp_ss(l.real, l.real);
        if s2 < 1e-12 {
            let d2 = hi_dp_ss(l.ideal, l.ideal);
            if d2 < 1e-12 {
                return (0.0, 0.0, Line::new(0.0, 0.0, 1.0, 0.0, 0.0, 0.0));
            }
            let inv = rsqrt_nr1(f32x4::splat(d2));
            let axis = Line { real: flip_all(l.ideal) * inv, ideal: f32x4::ZERO };
            return (0.0, 2.0 * d2.sqrt(), axis);
        }
        let s = s2.sqrt();
        let ang = 2.0 * s;
        let delta = 2.0 * hi_dp_ss(l.ideal, l.real) / s;
        let inv_s = f32x4::splat(1.0 / s);
        let nb = flip_all(l.real) * inv_s;
        let ni = flip_all(l.ideal + nb * f32x4::splat(0.5 * delta)) * inv_s;
        (ang, delta, Line { real: nb, ideal: ni })
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.real, other.real, eps) && approx_eq4(self.ideal, other.ideal, eps)
    }

    #[inline]
    fn conjugator(self) -> Conjugator {
        Conjugator::new(self.real, self.ideal)
    }

    #[inline]
    pub fn transform_plane(self, p: Plane) -> Plane {
        Plane { lanes: self.conjugator().plane(p.lanes) }
    }

    #[inline]
    pub fn transform_point(self, p: Point) -> Point {
        Point { lanes: self.conjugator().point(p.lanes) }
    }

    #[inline]
    pub fn transform_direction(self, d: Direction) -> Direction {
        Direction { lanes: self.conjugator().direction(d.lanes) }
    }

    #[inline]
    pub fn transform_line(self, l: Line) -> Line {
        let (real, ideal) = self.conjugator().line(l.real, l.ideal);
        Line { real, ideal }
    }

    /// Where the motor sends the origin.
    #[inline]
    pub fn transform_origin(self, _: Origin) -> Point {
        self.transform_point(Point::origin())
    }

    /// Batched conjugation; the motor-dependent tables are built once.
    /// Panics if the slices differ in length.
    pub fn transform_points(self, src: &[Point], dst: &mut [Point]) {
        assert_eq!(src.len(), dst.len(), "source and destination lengths differ");
        let c = self.conjugator();
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            *d = Point { lanes: c.point(s.lanes) };
        }
    }

    pub fn transform_points_in_place(self, pts: &mut [Point]) {
        let c = self.conjugator();
        for p in pts.iter_mut() {
            *p = Point { lanes: c.point(p.lanes) };
        }
    }

    pub fn transform_planes(self, src: &[Plane], dst: &mut [Plane]) {
        assert_eq!(src.len(), dst.len(), "source and destination lengths differ");
        let c = self.conjugator();
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            *d = Plane { lanes: c.plane(s.lanes) };
        }
    }

    pub fn transform_planes_in_place(self, planes: &mut [Plane]) {
        let c = self.conjugator();
        for p in planes.iter_mut() {
            *p = Plane { lanes: c.plane(p.lanes) };
        }
    }

    pub fn transform_directions(self, src: &[Direction], dst: &mut [Direction]) {
        assert_eq!(src.len(), dst.len(), "source and destination lengths differ");
        let c = self.conjugator();
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            *d = Direction { lanes: c.direction(s.lanes) };
        }
    }

    pub fn transform_directions_in_place(self, dirs: &mut [Direction]) {
        let c = self.conjugator();
        for d in dirs.iter_mut() {
            *d = Direction { lanes: c.direction(d.lanes) };
        }
    }

    pub fn transform_lines(self, src: &[Line], dst: &mut [Line]) {
        assert_eq!(src.len(), dst.len(), "source and destination lengths differ");
        let c = self.conjugator();
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            let (real, ideal) = c.line(s.real, s.ideal);
            *d = Line { real, ideal };
        }
    }

    pub fn transform_lines_in_place(self, lines: &mut [Line]) {
        let c = self.conjugator();
        for l in lines.iter_mut() {
            let (real, ideal) = c.line(l.real, l.ideal);
            *l = Line { real, ideal };
        }
    }
}

impl From<Rotor> for Motor {
    #[inline]
    fn from(r: Rotor) -> Motor {
        Motor { real: r.lanes, ideal: f32x4::ZERO }
    }
}

impl From<Translator> for Motor {
    #[inline]
    fn from(t: Translator) -> Motor {
        Motor { real: f32x4::from([1.0, 0.0, 0.0, 0.0]), ideal: t.lanes }
    }
}

impl PartialEq for Motor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

/// Composition; `rhs` is applied first.
impl Mul<Motor> for Motor {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Motor) -> Motor {
        let (real, ideal) = gp_motors(self.real, self.ideal, rhs.real, rhs.ideal);
        Motor { real, ideal }
    }
}

impl Mul<Rotor> for Motor {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Rotor) -> Motor {
        self * Motor::from(rhs)
    }
}

impl Mul<Translator> for Motor {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Translator) -> Motor {
        self * Motor::from(rhs)
    }
}

impl Div<Motor> for Motor {
    type Output = Motor;
    #[inline]
    fn div(self, rhs: Motor) -> Motor {
        self * rhs.inverse()
    }
}

impl Add for Motor {
    type Output = Motor;
    #[inline]
    fn add(self, rhs: Motor) -> Motor {
        Motor { real: self.real + rhs.real, ideal: self.ideal + rhs.ideal }
    }
}

impl Sub for Motor {
    type Output = Motor;
    #[inline]
    fn sub(self, rhs: Motor) -> Motor {
        Motor { real: self.real - rhs.real, ideal: self.ideal - rhs.ideal }
    }
}

impl Neg for Motor {
    type Output = Motor;
    #[inline]
    fn neg(self) -> Motor {
        Motor { real: flip_all(self.real), ideal: flip_all(self.ideal) }
    }
}

impl Mul<f32> for Motor {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: f32) -> Motor {
        let s = f32x4::splat(rhs);
        Motor { real: self.real * s, ideal: self.ideal * s }
    }
}

impl Div<f32> for Motor {
    type Output = Motor;
    #[inline]
    fn div(self, rhs: f32) -> Motor {
        self * (1.0 / rhs)
    }
}
