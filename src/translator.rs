//! Translators, the exponentials of ideal lines. The represented element is
//! `1 + a e01 + b e02 + c e03`; the unit scalar stays implicit and lane 0 of
//! the register is kept at zero.

use std::ops::{Add, Div, Mul, Neg, Sub};

use wide::f32x4;

use crate::error::{check_len, LayoutError};
use crate::kernels::geometric::gp_translator_rotor;
use crate::kernels::sandwich::{translate_line, translate_plane, translate_point};
use crate::line::{IdealLine, Line};
use crate::motor::Motor;
use crate::plane::Plane;
use crate::point::Point;
use crate::rotor::Rotor;
use crate::simd::{approx_eq4, flip_all, hi_dp_ss};

#[derive(Debug, Clone, Copy)]
pub struct Translator {
    pub(crate) lanes: f32x4,
}

impl Translator {
    /// A translation of `delta` along the direction `(x, y, z)` (normalized
    /// internally). The stored lanes are `-delta/2` times the unit direction;
    /// the sandwich doubles and negates them back.
    #[inline]
    pub fn new(delta: f32, x: f32, y: f32, z: f32) -> Self {
        let scale = -0.5 * delta / (x * x + y * y + z * z).sqrt();
        Self { lanes: f32x4::from([0.0, scale * x, scale * y, scale * z]) }
    }

    #[inline]
    pub fn identity() -> Self {
        Self { lanes: f32x4::ZERO }
    }

    /// Loads `(e01, e02, e03)` from the first three floats.
    #[inline]
    pub fn from_slice(data: &[f32]) -> Result<Self, LayoutError> {
        check_len(data, 3)?;
        Ok(Self { lanes: f32x4::from([0.0, data[0], data[1], data[2]]) })
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

    /// The translation distance (unsigned).
    #[inline]
    pub fn delta(self) -> f32 {
        2.0 * hi_dp_ss(self.lanes, self.lanes).sqrt()
    }

    /// `(1 + c)^-1 = 1 - c`.
    #[inline]
    pub fn inverse(self) -> Self {
        Self { lanes: flip_all(self.lanes) }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        // reversion negates the bivector part, same as the inverse here
        self.inverse()
    }

    /// Logarithm: the ideal line `c` with `exp(c) = 1 + c`.
    #[inline]
    pub fn log(self) -> IdealLine {
        IdealLine { lanes: self.lanes }
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        approx_eq4(self.lanes, other.lanes, eps)
    }

    #[inline]
    pub fn transform_plane(self, p: Plane) -> Plane {
        Plane { lanes: translate_plane(self.lanes, p.lanes) }
    }

    #[inline]
    pub fn transform_point(self, p: Point) -> Point {
        Point { lanes: translate_point(self.lanes, p.lanes) }
    }

    #[inline]
    pub fn transform_line(self, l: Line) -> Line {
        let (real, ideal) = translate_line(self.lanes, l.real, l.ideal);
        Line { real, ideal }
    }

    /// Batched translation. Panics if the slices differ in length.
    pub fn transform_points(self, src: &[Point], dst: &mut [Point]) {
        assert_eq!(src.len(), dst.len(), "source and destination lengths differ");
        for (s, d) in src.iter().zip(dst.iter_mut()) {
            *d = self.transform_point(*s);
        }
    }

    pub fn transform_points_in_place(self, pts: &mut [Point]) {
        for p in pts.iter_mut() {
            *p = self.transform_point(*p);
        }
    }
}

impl PartialEq for Translator {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lanes.to_array() == other.lanes.to_array()
    }
}

/// Translations compose by adding their ideal parts.
impl Mul<Translator> for Translator {
    type Output = Translator;
    #[inline]
    fn mul(self, rhs: Translator) -> Translator {
        Translator { lanes: self.lanes + rhs.lanes }
    }
}

impl Mul<Rotor> for Translator {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Rotor) -> Motor {
        Motor { real: rhs.lanes, ideal: gp_translator_rotor(self.lanes, rhs.lanes) }
    }
}

impl Mul<Motor> for Translator {
    type Output = Motor;
    #[inline]
    fn mul(self, rhs: Motor) -> Motor {
        Motor::from(self) * rhs
    }
}

impl Div<Translator> for Translator {
    type Output = Translator;
    #[inline]
    fn div(self, rhs: Translator) -> Translator {
        self * rhs.inverse()
    }
}

impl Add for Translator {
    type Output = Translator;
    #[inline]
    fn add(self, rhs: Translator) -> Translator {
        Translator { lanes: self.lanes + rhs.lanes }
    }
}

impl Sub for Translator {
    type Output = Translator;
    #[inline]
    fn sub(self, rhs: Translator) -> Translator {
        Translator { lanes: self.lanes - rhs.lanes }
    }
}

impl Neg for Translator {
    type Output = Translator;
    #[inline]
    fn neg(self) -> Translator {
        Translator { lanes: flip_all(self.lanes) }
    }
}

impl Mul<f32> for Translator {
    type Output = Translator;
    #[inline]
    fn mul(self, rhs: f32) -> Translator {
        Translator { lanes: self.lanes * f32x4::splat(rhs) }
    }
}

impl Div<f32> for Translator {
    type Output = Translator;
    #[inline]
    fn div(self, rhs: f32) -> Translator {
        Translator { lanes: self.lanes * f32x4::splat(1.0 / rhs) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn translates_a_point_by_delta_along_the_axis() {
        let t = Translator::new(5.0, 0.0, 3.0, 4.0);
        let p = t.transform_point(Point::origin());
        assert!(p.approx_eq(Point::new(0.0, 3.0, 4.0), EPS));
        assert!((t.delta() - 5.0).abs() < EPS);
    }

    #[test]
    fn inverse_undoes_the_translation() {
        let t = Translator::new(2.5, 1.0, -1.0, 0.5);
        let p = Point::new(0.3, 0.7, -0.9);
        let back = t.inverse().transform_point(t.transform_point(p));
        assert!(back.approx_eq(p, EPS));
    }

    #[test]
    fn composition_adds_ideal_parts() {
        let a = Translator::new(1.0, 1.0, 0.0, 0.0);
        let b = Translator::new(2.0, 0.0, 1.0, 0.0);
        let p = (a * b).transform_point(Point::origin());
        assert!(p.approx_eq(Point::new(1.0, 2.0, 0.0), EPS));
    }

    #[test]
    fn log_exp_round_trip() {
        let t = Translator::new(3.0, -1.0, 2.0, 2.0);
        assert_eq!(t.log().exp(), t);
    }

    #[test]
    fn planes_only_shift_their_offset() {
        // moving the plane x = 0 by +2 along x gives x = 2, offset -2
        let t = Translator::new(2.0, 1.0, 0.0, 0.0);
        let p = t.transform_plane(Plane::new(1.0, 0.0, 0.0, 0.0));
        assert!((p.d() + 2.0).abs() < EPS);
        assert_eq!((p.x(), p.y(), p.z()), (1.0, 0.0, 0.0));
    }
}
