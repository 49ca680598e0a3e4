//! `Display` rendering: each entity prints as a sum of its nonzero
//! basis-blade terms, with unit coefficients elided and `0` for the zero
//! element.

use std::fmt;

use crate::dual::Dual;
use crate::line::{Branch, IdealLine, Line};
use crate::motor::Motor;
use crate::plane::Plane;
use crate::point::{Direction, Point};
use crate::rotor::Rotor;
use crate::translator::Translator;

fn write_terms(f: &mut fmt::Formatter<'_>, terms: &[(f32, &str)]) -> fmt::Result {
    let mut wrote = false;
    for &(coeff, blade) in terms {
        if coeff == 0.0 {
            continue;
        }
        if wrote {
            f.write_str(if coeff < 0.0 { " - " } else { " + " })?;
        } else if coeff < 0.0 {
            f.write_str("-")?;
        }
        let mag = coeff.abs();
        if blade.is_empty() {
            write!(f, "{mag}")?;
        } else if mag == 1.0 {
            f.write_str(blade)?;
        } else {
            write!(f, "{mag}{blade}")?;
        }
        wrote = true;
    }
    if !wrote {
        f.write_str("0")?;
    }
    Ok(())
}

impl fmt::Display for Plane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(
            f,
            &[(self.d(), "e0"), (self.x(), "e1"), (self.y(), "e2"), (self.z(), "e3")],
        )
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &[(self.e23(), "e23"), (self.e31(), "e31"), (self.e12(), "e12")])
    }
}

impl fmt::Display for IdealLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &[(self.e01(), "e01"), (self.e02(), "e02"), (self.e03(), "e03")])
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = self.branch();
        let i = self.ideal_line();
        write_terms(
            f,
            &[
                (b.e23(), "e23"),
                (b.e31(), "e31"),
                (b.e12(), "e12"),
                (i.e01(), "e01"),
                (i.e02(), "e02"),
                (i.e03(), "e03"),
            ],
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(
            f,
            &[
                (self.w(), "e123"),
                (self.x(), "e032"),
                (self.y(), "e013"),
                (self.z(), "e021"),
            ],
        )
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(
            f,
            &[(self.x(), "e032"), (self.y(), "e013"), (self.z(), "e021")],
        )
    }
}

impl fmt::Display for Dual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(f, &[(self.scalar(), ""), (self.e0123(), "e0123")])
    }
}

impl fmt::Display for Rotor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(
            f,
            &[
                (self.scalar(), ""),
                (self.e23(), "e23"),
                (self.e31(), "e31"),
                (self.e12(), "e12"),
            ],
        )
    }
}

impl fmt::Display for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the implicit unit scalar is printed
        write_terms(
            f,
            &[(1.0, ""), (self.e01(), "e01"), (self.e02(), "e02"), (self.e03(), "e03")],
        )
    }
}

impl fmt::Display for Motor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_terms(
            f,
            &[
                (self.scalar(), ""),
                (self.e23(), "e23"),
                (self.e31(), "e31"),
                (self.e12(), "e12"),
                (self.e01(), "e01"),
                (self.e02(), "e02"),
                (self.e03(), "e03"),
                (self.e0123(), "e0123"),
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elides_unit_coefficients() {
        assert_eq!(Plane::new(1.0, 0.0, -1.0, 2.5).to_string(), "2.5e0 + e1 - e3");
    }

    #[test]
    fn zero_prints_as_zero() {
        assert_eq!(Branch::new(0.0, 0.0, 0.0).to_string(), "0");
    }

    #[test]
    fn scalar_blade_always_shows_its_number() {
        assert_eq!(Rotor::from_array([1.0, 0.0, 0.0, -2.0]).to_string(), "1 - 2e12");
        assert_eq!(Dual::new(-1.0, 0.0).to_string(), "-1");
    }

    #[test]
    fn point_prints_all_lanes() {
        assert_eq!(
            Point::new(1.0, -2.0, 0.0).to_string(),
            "e123 + e032 - 2e013"
        );
    }
}
