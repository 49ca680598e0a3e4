//! Planes, the grade-1 entities `d e0 + a e1 + b e2 + c e3` encoding
//! `ax + by + cz + d = 0`.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use wide::f32x4;

use crate::dual::Dual;
use crate::error::{check_len, LayoutError};
use crate::kernels::exterior::{
    meet_plane_branch, meet_plane_ideal, meet_plane_line, meet_plane_point, meet_planes,
};
use crate::kernels::geometric::{gp_plane_point, gp_planes};
use crate::kernels::inner::{dot_plane_line, dot_plane_point, dot_planes};
use crate::kernels::sandwich;
use crate::line::{Branch, IdealLine, Line};
use crate::motor::Motor;
use crate::point::Point;
use crate::simd::{approx_eq4, hi_dp_bc, hi_dp_ss, rcp_nr1, rsqrt_nr1};

/// Lane layout `(e0, e1, e2, e3)`; this ordering is the load/store contract.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub(crate) lanes: f32x4,
}

impl Plane {
    /// The plane `ax + by + cz + d = 0`.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32) -> Self {
        Self { lanes: f32x4::from([d, a, b, c]) }
    }

    /// Loads lanes `(e0, e1, e2, e3)` from the first four floats.
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
    pub fn x(self) -> f32 {
        self.lanes.to_array()[1]
    }

    #[inline]
    pub fn y(self) -> f32 {
        self.lanes.to_array()[2]
    }

    #[inline]
    pub fn z(self) -> f32 {
        self.lanes.to_array()[3]
    }

    #[inline]
    pub fn d(self) -> f32 {
        self.lanes.to_array()[0]
    }

    /// Squared length of the normal (the offset does not contribute).
    #[inline]
    pub fn squared_norm(self) -> f32 {
        hi_dp_ss(self.lanes, self.lanes)
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.squared_norm().sqrt()
    }

    /// Scales the plane so its normal is unit length.
    #[inline]
    pub fn normalized(self) -> Self {
        Self { lanes: self.lanes * rsqrt_nr1(hi_dp_bc(self.lanes, self.lanes)) }
    }

    /// `p` squares to `|n|^2`, so the inverse is `p / |n|^2`.
    #[inline]
    pub fn inverse(self) -> Self {
        Self { lanes: self.lanes * rcp_nr1(hi_dp_bc(self.lanes, self.lanes)) }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }

    /// Reflects `p` through this plane (`a p a`). For a non-unit plane the
    /// result is uniformly scaled by the squared normal length.
    #[inline]
    pub fn reflect_plane(self, p: Plane) -> Plane {
        Plane { lanes: sandwich::reflect_plane(self.lanes, p.lanes) }
    }

    #[inline]
    pub fn reflect_point(self, p: Point) -> Point {
        Point { lanes: sandwich::reflect_point(self.lanes, p.lanes) }
    }

    #[inline]
    pub fn reflect_line(self, l: Line) -> Line {
        let (real, ideal) = sandwich::reflect_line(self.lanes, l.real, l.ideal);
        Line { real, ideal }
    }
}

impl PartialEq for Plane {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

/// Poincaré dual: the register is reinterpreted as a point, bit for bit.
impl Not for Plane {
    type Output = Point;
    #[inline]
    fn not(self) -> Point {
        Point { lanes: self.lanes }
    }
}

impl Add for Plane {
    type Output = Plane;
    #[inline]
    fn add(self, rhs: Plane) -> Plane {
        Plane { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for Plane {
    type Output = Plane;
    #[inline]
    fn sub(self, rhs: Plane) -> Plane {
        Plane { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for Plane {
    type Output = Plane;
    #[inline]
    fn neg(self) -> Plane {
        Plane { lanes: crate::simd::flip_all(self.lanes) }
    }
}

impl Mul<f32> for Plane {
    type Output = Plane;
    #[inline]
    fn mul(self, rhs: f32) -> Plane {
        Plane { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for Plane {
    type Output = Plane;
    #[inline]
    fn div(self, rhs: f32) -> Plane {
        Plane { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

impl BitXor<Plane> for Plane {
    type Output = Line;
    #[inline]
    fn bitxor(self, rhs: Plane) -> Line {
        let (real, ideal) = meet_planes(self.lanes, rhs.lanes);
        Line { real, ideal }
    }
}

impl BitXor<Branch> for Plane {
    type Output = Point;
    #[inline]
    fn bitxor(self, rhs: Branch) -> Point {
        Point { lanes: meet_plane_branch(self.lanes, rhs.lanes) }
    }
}

impl BitXor<IdealLine> for Plane {
    type Output = Point;
    #[inline]
    fn bitxor(self, rhs: IdealLine) -> Point {
        Point { lanes: meet_plane_ideal(self.lanes, rhs.lanes) }
    }
}

impl BitXor<Line> for Plane {
    type Output = Point;
    #[inline]
    fn bitxor(self, rhs: Line) -> Point {
        Point { lanes: meet_plane_line(self.lanes, rhs.real, rhs.ideal) }
    }
}

impl BitXor<Point> for Plane {
    type Output = Dual;
    #[inline]
    fn bitxor(self, rhs: Point) -> Dual {
        Dual::new(0.0, meet_plane_point(self.lanes, rhs.lanes))
    }
}

impl BitOr<Plane> for Plane {
    type Output = f32;
    #[inline]
    fn bitor(self, rhs: Plane) -> f32 {
        dot_planes(self.lanes, rhs.lanes)
    }
}

impl BitOr<Line> for Plane {
    type Output = Plane;
    #[inline]
    fn bitor(self, rhs: Line) -> Plane {
        Plane { lanes: dot_plane_line(self.lanes, rhs.real, rhs.ideal) }
    }
}

impl BitOr<Point> for Plane {
    type Output = Line;
    #[inline]
    fn bitor(self, rhs: Point) -> Line {
        let (real, ideal) = dot_plane_point(self.lanes, rhs.lanes);
        Line { real, ideal }
    }
}

/// Join with a point, `!(!a ^ !b)`.
impl BitAnd<Point> for Plane {
    type Output = Dual;
    #[inline]
    fn bitand(self, rhs: Point) -> Dual {
        !(!self ^ !rhs)
    }
}

impl Mul<Plane> for Plane {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Plane) -> Motor {
        let (real, ideal) = gp_planes(self.lanes, rhs.lanes);
        Motor { real, ideal }
    }
}

impl Mul<Point> for Plane {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Point) -> Motor {
        let (real, ideal) = gp_plane_point(self.lanes, rhs.lanes);
        Motor { real, ideal }
    }
}

impl Div<Plane> for Plane {
    type Output = Motor;
    #[inline]
    fn div(self, rhs: Plane) -> Motor {
        self * rhs.inverse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn constructor_reorders_into_lanes() {
        let p = Plane::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(p.to_array(), [4.0, 1.0, 2.0, 3.0]);
        assert_eq!((p.x(), p.y(), p.z(), p.d()), (1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn slice_round_trip_is_bit_exact() {
        let data = [0.25, -1.5, 3.0, 8.0];
        let p = Plane::from_slice(&data).unwrap();
        let mut out = [0.0; 4];
        p.store(&mut out);
        assert_eq!(out, data);
        assert!(Plane::from_slice(&data[..3]).is_err());
    }

    #[test]
    fn normalized_has_unit_normal() {
        let p = Plane::new(3.0, 0.0, 4.0, 10.0).normalized();
        assert!((p.squared_norm() - 1.0).abs() < EPS);
        // offset scales with the normal
        assert!((p.d() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn inverse_undoes_the_plane() {
        let p = Plane::new(2.0, -1.0, 0.5, 3.0);
        let q = p.inverse();
        // p * p^-1 has unit scalar part: <n, n / |n|^2> = 1
        assert!(((p | q) - 1.0).abs() < EPS);
    }

    #[test]
    fn reflection_is_an_involution() {
        let mirror = Plane::new(1.0, 0.0, 0.0, -1.0);
        let x = Point::new(0.3, -2.0, 5.0);
        let twice = mirror.reflect_point(mirror.reflect_point(x));
        assert!(twice.approx_eq(x, EPS));
    }
}
