//! Dual numbers `s + p e0123`, the scalar-plus-pseudoscalar subalgebra.
//!
//! These show up as the result of full incidence pairings (plane wedge point,
//! line wedge line) where the magnitude carries the signed volume / mutual
//! moment of the pair.

use std::ops::{Add, Div, Mul, Neg, Not, Sub};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dual {
    s: f32,
    p: f32,
}

impl Dual {
    #[inline]
    pub fn new(scalar: f32, e0123: f32) -> Self {
        Self { s: scalar, p: e0123 }
    }

    #[inline]
    pub fn scalar(self) -> f32 {
        self.s
    }

    #[inline]
    pub fn e0123(self) -> f32 {
        self.p
    }

    #[inline]
    pub fn approx_eq(self, other: Self, eps: f32) -> bool {
        (self.s - other.s).abs() <= eps && (self.p - other.p).abs() <= eps
    }
}

/// Poincaré dual: scalar and pseudoscalar weights trade places.
impl Not for Dual {
    type Output = Dual;
    #[inline]
    fn not(self) -> Dual {
        Dual { s: self.p, p: self.s }
    }
}

impl Add for Dual {
    type Output = Dual;
    #[inline]
    fn add(self, rhs: Dual) -> Dual {
        Dual { s: self.s + rhs.s, p: self.p + rhs.p }
    }
}

impl Sub for Dual {
    type Output = Dual;
    #[inline]
    fn sub(self, rhs: Dual) -> Dual {
        Dual { s: self.s - rhs.s, p: self.p - rhs.p }
    }
}

impl Neg for Dual {
    type Output = Dual;
    #[inline]
    fn neg(self) -> Dual {
        Dual { s: -self.s, p: -self.p }
    }
}

impl Mul<f32> for Dual {
    type Output = Dual;
    #[inline]
    fn mul(self, rhs: f32) -> Dual {
        Dual { s: self.s * rhs, p: self.p * rhs }
    }
}

impl Div<f32> for Dual {
    type Output = Dual;
    #[inline]
    fn div(self, rhs: f32) -> Dual {
        Dual { s: self.s / rhs, p: self.p / rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dual_of_dual_is_identity() {
        let d = Dual::new(3.0, -0.5);
        assert_eq!(!!d, d);
        assert_eq!((!d).scalar(), -0.5);
        assert_eq!((!d).e0123(), 3.0);
    }

    #[test]
    fn arithmetic() {
        let a = Dual::new(1.0, 2.0);
        let b = Dual::new(0.5, -1.0);
        assert_eq!(a + b, Dual::new(1.5, 1.0));
        assert_eq!(a - b, Dual::new(0.5, 3.0));
        assert_eq!(-a, Dual::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Dual::new(2.0, 4.0));
        assert_eq!(a / 2.0, Dual::new(0.5, 1.0));
    }
}
