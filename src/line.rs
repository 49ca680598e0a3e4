//! The grade-2 entities: `Branch` (a line through the origin), `IdealLine`
//! (a line at infinity), and the general `Line` holding both parts.
//!
//! Lane layouts: branch `(-, e23, e31, e12)` with `(e23, e31, e12)` the
//! direction `(x, y, z)`, ideal line `(-, e01, e02, e03)` the moment. Lane 0
//! of each register is kept at zero.

use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Sub};

use wide::f32x4;

use crate::dual::Dual;
use crate::error::{check_len, LayoutError};
use crate::kernels::exp_log::{exp_branch, exp_line};
use crate::kernels::exterior::{meet_lines, meet_plane_line};
use crate::kernels::geometric::gp_lines;
use crate::kernels::inner::{dot_line_plane, dot_lines};
use crate::motor::Motor;
use crate::plane::Plane;
use crate::point::Point;
use crate::rotor::Rotor;
use crate::simd::{
    approx_eq4, flip_all, flip_xyz, hi_dp_bc, hi_dp_ss, rcp_nr1, rsqrt_nr1,
};
use crate::translator::Translator;

#[derive(Debug, Clone, Copy)]
pub struct Branch {
    pub(crate) lanes: f32x4,
}

impl Branch {
    /// The origin line with direction `(a, b, c)` on `(e23, e31, e12)`.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self { lanes: f32x4::from([0.0, a, b, c]) }
    }

    /// Loads `(e23, e31, e12)` from the first three floats.
    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 3)?;
        Ok(Self::new(data[0], data[1], data[2]))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        let [_, a, b, c] = self.lanes.to_array();
        [a, b, c]
    }

    #[inline]
    pub fn store(self, out: &mut [f32; 3]) {
        *out = self.to_array();
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
        hi_dp_ss(self.lanes, self.lanes)
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.squared_norm().sqrt()
    }

    #[inline]
    pub fn normalized(self) -> Self {
        Self { lanes: self.lanes * rsqrt_nr1(hi_dp_bc(self.lanes, self.lanes)) }
    }

    /// A branch squares to `-|b|^2`, so the inverse is `-b / |b|^2`.
    #[inline]
    pub fn inverse(self) -> Self {
        Self { lanes: flip_all(self.lanes) * rcp_nr1(hi_dp_bc(self.lanes, self.lanes)) }
    }

    /// Grade-2 reversion, a plain sign flip.
    #[inline]
    pub fn reversed(self) -> Self {
        Self { lanes: flip_xyz(self.lanes) }
    }

    /// Exponentiates the branch into the rotor `exp(b)`.
    #[inline]
    pub fn exp(self) -> Rotor {
        Rotor { lanes: exp_branch(self.lanes) }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }
}

impl PartialEq for Branch {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes.to_array() == other.lanes.to_array()
    }
}

/// Poincaré dual: the direction register reinterpreted as a moment.
impl Not for Branch {
    type Output = IdealLine;
    #[inline]
    fn not(self) -> IdealLine {
        IdealLine { lanes: self.lanes }
    }
}

impl BitXor<Plane> for Branch {
    type Output = Point;
    #[inline]
    fn bitxor(self, rhs: Plane) -> Point {
        // vector wedge bivector commutes
        rhs ^ self
    }
}

impl BitXor<IdealLine> for Branch {
    type Output = Dual;
    #[inline]
    fn bitxor(self, rhs: IdealLine) -> Dual {
        Dual::new(0.0, hi_dp_ss(self.lanes, rhs.lanes))
    }
}

impl Add for Branch {
    type Output = Branch;
    #[inline]
    fn add(self, rhs: Branch) -> Branch {
        Branch { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for Branch {
    type Output = Branch;
    #[inline]
    fn sub(self, rhs: Branch) -> Branch {
        Branch { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for Branch {
    type Output = Branch;
    #[inline]
    fn neg(self) -> Branch {
        Branch { lanes: flip_all(self.lanes) }
    }
}

impl Mul<f32> for Branch {
    type Output = Branch;
    #[inline]
    fn mul(self, rhs: f32) -> Branch {
        Branch { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for Branch {
    type Output = Branch;
    #[inline]
    fn div(self, rhs: f32) -> Branch {
        Branch { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct IdealLine {
    pub(crate) lanes: f32x4,
}

impl IdealLine {
    /// The ideal line `a e01 + b e02 + c e03`.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32) -> Self {
        Self { lanes: f32x4::from([0.0, a, b, c]) }
    }

    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 3)?;
        Ok(Self::new(data[0], data[1], data[2]))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        let [_, a, b, c] = self.lanes.to_array();
        [a, b, c]
    }

    #[inline]
    pub fn store(self, out: &mut [f32; 3]) {
        *out = self.to_array();
    }

    #[inline]
    pub fn e01(self) -> f32 {
        self.lanes.to_array()[1]
    }

    #[inline]
    pub fn e02(self) -> f32 {
        self.lanes.to_array()[2]
    }

    #[inline]
    pub fn e03(self) -> f32 {
        self.lanes.to_array()[3]
    }

    /// Ideal elements have zero norm under the metric; this is the norm of
    /// the lane weights themselves.
    #[inline]
    pub fn squared_ideal_norm(self) -> f32 {
        hi_dp_ss(self.lanes, self.lanes)
    }

    #[inline]
    pub fn ideal_norm(self) -> f32 {
        self.squared_ideal_norm().sqrt()
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self { lanes: flip_xyz(self.lanes) }
    }

    /// Exponentiates the ideal line into the translator `exp(c) = 1 + c`.
    #[inline]
    pub fn exp(self) -> Translator {
        Translator { lanes: self.lanes }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }
}

impl PartialEq for IdealLine {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes.to_array() == other.lanes.to_array()
    }
}

impl Not for IdealLine {
    type Output = Branch;
    #[inline]
    fn not(self) -> Branch {
        Branch { lanes: self.lanes }
    }
}

impl BitXor<Branch> for IdealLine {
    type Output = Dual;
    #[inline]
    fn bitxor(self, rhs: Branch) -> Dual {
        rhs ^ self
    }
}

impl Add for IdealLine {
    type Output = IdealLine;
    #[inline]
    fn add(self, rhs: IdealLine) -> IdealLine {
        IdealLine { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for IdealLine {
    type Output = IdealLine;
    #[inline]
    fn sub(self, rhs: IdealLine) -> IdealLine {
        IdealLine { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for IdealLine {
    type Output = IdealLine;
    #[inline]
    fn neg(self) -> IdealLine {
        IdealLine { lanes: flip_all(self.lanes) }
    }
}

impl Mul<f32> for IdealLine {
    type Output = IdealLine;
    #[inline]
    fn mul(self, rhs: f32) -> IdealLine {
        IdealLine { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for IdealLine {
    type Output = IdealLine;
    #[inline]
    fn div(self, rhs: f32) -> IdealLine {
        IdealLine { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

/// A general line, the sum of a branch (direction) and an ideal line
/// (moment). A geometric line satisfies the Plücker condition
/// `<direction, moment> = 0`; the type does not enforce it.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub(crate) real: f32x4,
    pub(crate) ideal: f32x4,
}

impl Line {
    /// Direction `(a, b, c)` on `(e23, e31, e12)`, moment `(d, e, f)` on
    /// `(e01, e02, e03)`.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self {
            real: f32x4::from([0.0, a, b, c]),
            ideal: f32x4::from([0.0, d, e, f]),
        }
    }

    /// Loads `(e23, e31, e12, e01, e02, e03)` from the first six floats.
    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 6)?;
        Ok(Self::new(data[0], data[1], data[2], data[3], data[4], data[5]))
    }

    #[inline]
    pub fn to_array(self) -> [f32; 6] {
        let [_, a, b, c] = self.real.to_array();
        let [_, d, e, f] = self.ideal.to_array();
        [a, b, c, d, e, f]
    }

    #[inline]
    pub fn store(self, out: &mut [f32; 6]) {
        *out = self.to_array();
    }

    #[inline]
    pub fn branch(self) -> Branch {
        Branch { lanes: self.real }
    }

    #[inline]
    pub fn ideal_line(self) -> IdealLine {
        IdealLine { lanes: self.ideal }
    }

    /// Norm of the direction part (ideal weights carry no metric norm).
    #[inline]
    pub fn squared_norm(self) -> f32 {
        hi_dp_ss(self.real, self.real)
    }

    #[inline]
    pub fn norm(self) -> f32 {
        self.squared_norm().sqrt()
    }

    /// Scales both parts so the direction is unit length.
    #[inline]
    pub fn normalized(self) -> Self {
        let s = rsqrt_nr1(hi_dp_bc(self.real, self.real));
        Self { real: self.real * s, ideal: self.ideal * s }
    }

    /// `l * l.inverse() == 1` exactly (up to the reciprocal contract):
    /// `l~l` is the dual number `|b|^2 - 2<b,c> e0123`, inverted as
    /// `1/(s + t eps) = 1/s - t/s^2 eps`.
    #[inline]
    pub fn inverse(self) -> Self {
        let s = rcp_nr1(hi_dp_bc(self.real, self.real));
        let bc = hi_dp_ss(self.real, self.ideal);
        let real = flip_all(self.real) * s;
        let ideal = flip_all(self.ideal) * s
            - real * s * f32x4::splat(2.0 * bc);
        Self { real, ideal }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        Self { real: flip_xyz(self.real), ideal: flip_xyz(self.ideal) }
    }

    /// Exponentiates the line into a motor encoding the screw motion about
    /// this line.
    #[inline]
    pub fn exp(self) -> Motor {
        let (real, ideal) = exp_line(self.real, self.ideal);
        Motor { real, ideal }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.real, other.real, eps) && approx_eq4(self.ideal, other.ideal, eps)
    }
}

impl From<Branch> for Line {
    #[inline]
    fn from(b: Branch) -> Line {
        Line { real: b.lanes, ideal: f32x4::ZERO }
    }
}

impl From<IdealLine> for Line {
    #[inline]
    fn from(i: IdealLine) -> Line {
        Line { real: f32x4::ZERO, ideal: i.lanes }
    }
}

impl PartialEq for Line {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.real.to_array() == other.real.to_array()
            && self.ideal.to_array() == other.ideal.to_array()
    }
}

/// Poincaré dual: direction and moment trade registers.
impl Not for Line {
    type Output = Line;
    #[inline]
    fn not(self) -> Line {
        Line { real: self.ideal, ideal: self.real }
    }
}

impl BitXor<Plane> for Line {
    type Output = Point;
    #[inline]
    fn bitxor(self, rhs: Plane) -> Point {
        Point { lanes: meet_plane_line(rhs.lanes, self.real, self.ideal) }
    }
}

impl BitXor<Line> for Line {
    type Output = Dual;
    #[inline]
    fn bitxor(self, rhs: Line) -> Dual {
        Dual::new(0.0, meet_lines(self.real, self.ideal, rhs.real, rhs.ideal))
    }
}

impl BitOr<Plane> for Line {
    type Output = Plane;
    #[inline]
    fn bitor(self, rhs: Plane) -> Plane {
        Plane { lanes: dot_line_plane(self.real, self.ideal, rhs.lanes) }
    }
}

impl BitOr<Line> for Line {
    type Output = f32;
    #[inline]
    fn bitor(self, rhs: Line) -> f32 {
        dot_lines(self.real, rhs.real)
    }
}

/// Join with a point, `!(!a ^ !b)`.
impl BitAnd<Point> for Line {
    type Output = Plane;
    #[inline]
    fn bitand(self, rhs: Point) -> Plane {
        !(!self ^ !rhs)
    }
}

impl Mul<Line> for Line {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Line) -> Motor {
        let (real, ideal) = gp_lines(self.real, self.ideal, rhs.real, rhs.ideal);
        Motor { real, ideal }
    }
}

impl Div<Line> for Line {
    type Output = Motor;
    #[inline]
    fn div(self, rhs: Line) -> Motor {
        self * rhs.inverse()
    }
}

impl Add for Line {
    type Output = Line;
    #[inline]
    fn add(self, rhs: Line) -> Line {
        Line { real: self.real + rhs.real, ideal: self.ideal + rhs.ideal }
    }
}

impl Sub for Line {
    type Output = Line;
    #[inline]
    fn sub(self, rhs: Line) -> Line {
        Line { real: self.real - rhs.real, ideal: self.ideal - rhs.ideal }
    }
}

impl Neg for Line {
    type Output = Line;
    #[inline]
    fn neg(self) -> Line {
        Line { real: flip_all(self.real), ideal: flip_all(self.ideal) }
    }
}

impl Mul<f32> for Line {
    type Output = Line;
    #[inline]
    fn mul(self, rhs: f32) -> Line {
        let s = f32x4::splat(rhs);
        Line { real: self.real * s, ideal: self.ideal * s }
    }
}

impl Div<f32> for Line {
    type Output = Line;
    #[inline]
    fn div(self, rhs: f32) -> Line {
        self * (1.0 / rhs)
    }
}
