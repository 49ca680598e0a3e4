//! Points and directions, the grade-3 entities on lanes
//! `(e123, e032, e013, e021) = (w, x, y, z)`.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use wide::f32x4;

use crate::dual::Dual;
use crate::error::{check_len, LayoutError};
use crate::kernels::exterior::meet_plane_point;
use crate::kernels::geometric::{gp_point_plane, gp_points};
use crate::kernels::inner::{dot_point_plane, dot_points};
use crate::line::Line;
use crate::motor::Motor;
use crate::plane::Plane;
use crate::simd::{approx_eq4, flip_all, hi_dp_bc, rcp_nr1, rsqrt_nr1};
use crate::translator::Translator;

#[derive(Debug, Clone, Copy)]
pub struct Point {
    pub(crate) lanes: f32x4,
}

impl Point {
    /// A normalized point (homogeneous weight 1) at `(x, y, z)`.
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { lanes: f32x4::from([1.0, x, y, z]) }
    }

    #[inline]
    pub fn origin() -> Self {
        Self { lanes: f32x4::from([1.0, 0.0, 0.0, 0.0]) }
    }

    /// Loads lanes `(e123, e032, e013, e021)` from the first four floats.
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
    pub fn w(self) -> f32 {
        self.lanes.to_array()[0]
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

    /// Divides through by the homogeneous weight.
    #[inline]
    pub fn normalized(self) -> Self {
        let w = f32x4::splat(self.w());
        Self { lanes: self.lanes * rcp_nr1(w) }
    }

    /// Scales by `1/w` twice; a normalized point is its own inverse under
    /// the sandwich product.
    #[inline]
    pub fn inverse(self) -> Self {
        let inv_w = rcp_nr1(f32x4::splat(self.w()));
        Self { lanes: self.lanes * inv_w * inv_w }
    }

    /// Grade-3 reversion is negation.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { lanes: flip_all(self.lanes) }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }
}

impl PartialEq for Point {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.to_array() == other.to_array()
    }
}

/// Poincaré dual: the register is reinterpreted as a plane, bit for bit.
impl Not for Point {
    type Output = Plane;
    #[inline]
    fn not(self) -> Plane {
        Plane { lanes: self.lanes }
    }
}

impl BitXor<Plane> for Point {
    type Output = Dual;
    #[inline]
    fn bitxor(self, rhs: Plane) -> Dual {
        // trivector wedge vector anticommutes
        Dual::new(0.0, -meet_plane_point(rhs.lanes, self.lanes))
    }
}

impl BitOr<Point> for Point {
    type Output = f32;
    #[inline]
    fn bitor(self, rhs: Point) -> f32 {
        dot_points(self.lanes, rhs.lanes)
    }
}

impl BitOr<Plane> for Point {
    type Output = Line;
    #[inline]
    fn bitor(self, rhs: Plane) -> Line {
        let (real, ideal) = dot_point_plane(self.lanes, rhs.lanes);
        Line { real, ideal }
    }
}

/// Join: the line through two points, `!(!a ^ !b)`.
impl BitAnd<Point> for Point {
    type Output = Line;
    #[inline]
    fn bitand(self, rhs: Point) -> Line {
        !(!self ^ !rhs)
    }
}

/// Join: the plane spanned by a point and a line, `!(!a ^ !b)`.
impl BitAnd<Line> for Point {
    type Output = Plane;
    #[inline]
    fn bitand(self, rhs: Line) -> Plane {
        !(!self ^ !rhs)
    }
}

impl BitAnd<Plane> for Point {
    type Output = Dual;
    #[inline]
    fn bitand(self, rhs: Plane) -> Dual {
        !(!self ^ !rhs)
    }
}

/// The translator taking `rhs` to `self` over two applications.
impl Mul<Point> for Point {
    type Output = Translator;
    #[inline]
    fn mul(self, rhs: Point) -> Translator {
        Translator { lanes: gp_points(self.lanes, rhs.lanes) }
    }
}

impl Mul<Plane> for Point {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Plane) -> Motor {
        let (real, ideal) = gp_point_plane(self.lanes, rhs.lanes);
        Motor { real, ideal }
    }
}

impl Div<Point> for Point {
    type Output = Translator;
    #[inline]
    fn div(self, rhs: Point) -> Translator {
        self * rhs.inverse()
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for Point {
    type Output = Point;
    #[inline]
    fn neg(self) -> Point {
        Point { lanes: flip_all(self.lanes) }
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f32) -> Point {
        Point { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

/// A point at infinity: point lanes with zero homogeneous weight. Motors and
/// rotors rotate directions but never translate them.
#[derive(Debug, Clone, Copy)]
pub struct Direction {
    pub(crate) lanes: f32x4,
}

impl Direction {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { lanes: f32x4::from([0.0, x, y, z]) }
    }

    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 3)?;
        Ok(Self::new(data[0], data[1], data[2]))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        let [_, x, y, z] = self.lanes.to_array();
        [x, y, z]
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
    pub fn normalized(self) -> Self {
        Self { lanes: self.lanes * rsqrt_nr1(hi_dp_bc(self.lanes, self.lanes)) }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }
}

impl PartialEq for Direction {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes.to_array() == other.lanes.to_array()
    }
}

impl Add for Direction {
    type Output = Direction;
    #[inline]
    fn add(self, rhs: Direction) -> Direction {
        Direction { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for Direction {
    type Output = Direction;
    #[inline]
    fn sub(self, rhs: Direction) -> Direction {
        Direction { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for Direction {
    type Output = Direction;
    #[inline]
    fn neg(self) -> Direction {
        Direction { lanes: flip_all(self.lanes) }
    }
}

impl Mul<f32> for Direction {
    type Output = Direction;
    #[inline]
    fn mul(self, rhs: f32) -> Direction {
        Direction { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for Direction {
    type Output = Direction;
    #[inline]
    fn div(self, rhs: f32) -> Direction {
        Direction { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

/// The origin, `e123`. Mostly a marker; convert to a `Point` to operate
/// on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Origin;

impl From<Origin> for Point {
    #[inline]
    fn from(_: Origin) -> Point {
        Point::origin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn constructor_sets_unit_weight() {
        let p = Point::new(1.0, 2.0, 3.0);
        assert_eq!(p.to_array(), [1.0, 1.0, 2.0, 3.0]);
        assert_eq!((p.x(), p.y(), p.z(), p.w()), (1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn normalized_divides_by_weight() {
        let p = Point::from_array([2.0, 2.0, 4.0, 6.0]).normalized();
        assert!(p.approx_eq(Point::new(1.0, 2.0, 3.0), EPS));
    }

    #[test]
    fn join_of_two_points_is_their_line() {
        // origin and (0,0,1) join in the z axis
        let l = Point::origin() & Point::new(0.0, 0.0, 1.0);
        let n = l.normalized();
        assert!((n.branch().e12().abs() - 1.0).abs() < EPS);
        assert_eq!(n.ideal_line().to_array(), [0.0; 3]);
    }

    #[test]
    fn join_with_plane_measures_signed_distance() {
        // point one unit off the x = 0 plane
        let d = Point::new(1.0, 0.0, 0.0) & Plane::new(1.0, 0.0, 0.0, 0.0);
        assert!(d.e0123().abs() < EPS);
        assert!((d.scalar().abs() - 1.0).abs() < EPS);
    }

    #[test]
    fn dual_reinterprets_bits() {
        let p = Point::from_array([0.5, 1.0, -2.0, 4.0]);
        let pl = !p;
        assert_eq!(pl.to_array(), p.to_array());
        assert_eq!(!pl, p);
    }
}
