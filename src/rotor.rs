//! Rotors, the even elements `(1, e23, e31, e12)` encoding rotations about
//! lines through the origin.

use std::ops::{Add, Div, Mul, Neg, Sub};

use wide::f32x4;

use crate::error::{check_len, LayoutError};
use crate::kernels::exp_log::log_rotor;
use crate::kernels::geometric::{gp_rotor_translator, gp_rotors};
use crate::kernels::sandwich::Conjugator;
use crate::line::{Branch, Line};
use crate::motor::Motor;
use crate::plane::Plane;
use crate::point::{Direction, Point};
use crate::simd::{approx_eq4, dp_bc, dp_ss, flip_all, flip_xyz, rcp_nr1, rsqrt_nr1};
use crate::translator::Translator;

#[derive(Debug, Clone, Copy)]
pub struct Rotor {
    pub(crate) lanes: f32x4,
}

impl Rotor {
    /// The rotor for a right-handed rotation of `ang_rad` about the axis
    /// `(x, y, z)` (normalized internally).
    #[inline]
    pub fn new(ang_rad: f32, x: f32, y: f32, z: f32) -> Self {
        let inv_norm = 1.0 / (x * x + y * y + z * z).sqrt();
        let half = 0.5 * ang_rad;
        let s = -half.sin() * inv_norm;
        Self { lanes: f32x4::from([half.cos(), s * x, s * y, s * z]) }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { lanes: f32x4::from([1.0, 0.0, 0.0, 0.0]) }
    }

    /// Loads lanes `(1, e23, e31, e12)` from the first four floats.
    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 4)?;
        Ok(Self::from_array([data[0], data[1], data[2], data[3]]))
    }

    #[inline]
    pub fn from_array(lanes: [f32; 4]) -> Self {
        Self { lanes: f32x4::from(lanes) }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        self.lanes.to_array()
    }

    #[inline]
    pub fn store(self, out: &mut [f32; 4]) {
        *out = self.to_array();
    }

    #[inline]
    pub fn scalar(self) -> f32 {
        self.lanes.to_array()[0]
    }

    #[inline]
    pub fn e23(self) -> f32 {
        self.lanes.to_array()[1]
    }

    #[inline]
    pub fn e31(self) -> f32 {
        self.lanes.to_array()[2]
    }

    #[inline]
    pub fn e12(self) -> f32 {
        self.lanes.to_array()[3]
    }

    #[inline]
    pub fn squared_norm(self) -> f32 {
        dp_ss(self.lanes, self.lanes)
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.squared_norm().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        Self { lanes: self.lanes * rsqrt_nr1(dp_bc(self.lanes, self.lanes)) }
    }

    /// `~r / (r ~r)`.
    #[inline]
    pub fn inverse(self) -> Self {
        Self { lanes: flip_xyz(self.lanes) * rcp_nr1(dp_bc(self.lanes, self.lanes)) }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self { lanes: flip_xyz(self.lanes) }
    }

    /// Flips to the representative with non-negative scalar part, so that
    /// interpolation takes the shortest arc.
    #[inline]
    pub fn constrained(self) -> Self {
        if self.scalar() < 0.0 {
            Self { lanes: flip_all(self.lanes) }
        } else {
            self
        }
    }

    /// Logarithm of a normalized rotor: the branch `b` with `exp(b) = r`.
    #[inline]
    pub fn log(self) -> Branch {
        Branch { lanes: log_rotor(self.lanes) }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }

    #[inline]
    fn conjugator(self) -> Conjugator {
        Conjugator::new(self.lanes, f32x4::ZERO)
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
    pub fn transform_branch(self, b: Branch) -> Branch {
        let (real, _) = self.conjugator().line(b.lanes, f32x4::ZERO);
        Branch { lanes: real }
    }

    #[inline]
    pub fn transform_line(self, l: Line) -> Line {
        let (real, ideal) = self.conjugator().line(l.real, l.ideal);
        Line { real, ideal }
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
}

impl PartialEq for Rotor {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

impl Mul<Rotor> for Rotor {
    type Output = Rotor;
    #[inline]
    fn mul(self, rhs: Rotor) -> Rotor {
        Rotor { lanes: gp_rotors(self.lanes, rhs.lanes) }
    }
}

impl Mul<Translator> for Rotor {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Translator) -> Motor {
        Motor { real: self.lanes, ideal: gp_rotor_translator(self.lanes, rhs.lanes) }
    }
}

impl Mul<Motor> for Rotor {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Motor) -> Motor {
        Motor::from(self) * rhs
    }
}

impl Div<Rotor> for Rotor {
    type Output = Rotor;
    #[inline]
    fn div(self, rhs: Rotor) -> Rotor {
        self * rhs.inverse()
    }
}

impl Add for Rotor {
    type Output = Rotor;
    #[inline]
    fn add(self, rhs: Rotor) -> Rotor {
        Rotor { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for Rotor {
    type Output = Rotor;
    #[inline]
    fn sub(self, rhs: Rotor) -> Rotor {
        Rotor { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for Rotor {
    type Output = Rotor;
    #[inline]
    fn neg(self) -> Rotor {
        Rotor { lanes: flip_all(self.lanes) }
    }
}

impl Mul<f32> for Rotor {
    type Output = Rotor;
    #[inline]
    fn mul(self, rhs: f32) -> Rotor {
        Rotor { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for Rotor {
    type Output = Rotor;
    #[inline]
    fn div(self, rhs: f32) -> Rotor {
        Rotor { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    #[test]
    fn quarter_turn_about_z_takes_x_to_y() {
        let r = Rotor::new(FRAC_PI_2, 0.0, 0.0, 1.0);
        let p = r.transform_point(Point::new(1.0, 0.0, 0.0));
        assert!(p.approx_eq(Point::new(0.0, 1.0, 0.0), EPS));
    }

    #[test]
    fn rotor_times_reverse_is_identity() {
        let r = Rotor::new(1.2, 0.3, -0.4, 0.5);
        let id = r * r.reversed();
        assert!(id.approx_eq(Rotor::identity(), EPS));
    }

    #[test]
    fn exp_log_round_trip() {
        let r = Rotor::new(0.77, 1.0, 2.0, -1.0);
        let back = r.log().exp();
        assert!(back.approx_eq(r, EPS));
    }

    #[test]
    fn constrained_flips_negative_scalar() {
        let r = Rotor::from_array([-0.5, 0.1, 0.2, 0.3]).constrained();
        assert!(r.scalar() > 0.0);
        let s = Rotor::from_array([0.5, 0.1, 0.2, 0.3]).constrained();
        assert_eq!(s.scalar(), 0.5);
    }

    #[test]
    fn batch_matches_single_application() {
        let r = Rotor::new(0.9, 0.2, 1.0, -0.5);
        let pts = [
            Point::new(1.0, 0.0, 0.0),
            Point::new(-2.0, 3.0, 0.5),
            Point::new(0.0, 0.0, 0.0),
        ];
        let mut out = [Point::origin(); 3];
        r.transform_points(&pts, &mut out);
        let mut inplace = pts;
        r.transform_points_in_place(&mut inplace);
        for i in 0..3 {
            let single = r.transform_point(pts[i]);
            assert!(out[i].approx_eq(single, EPS));
            assert!(inplace[i].approx_eq(single, EPS));
        }
    }
}
