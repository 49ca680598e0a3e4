#![doc = include_str!("../README.md")]

mod simd;

mod kernels;

pub mod dual;
pub mod error;
pub mod line;
pub mod motor;
pub mod plane;
pub mod point;
pub mod rotor;
pub mod translator;

pub mod ops;

mod fmt;

pub use dual::Dual;
pub use error::LayoutError;
pub use line::{Branch, IdealLine, Line};
pub use motor::Motor;
pub use plane::Plane;
pub use point::{Direction, Origin, Point};
pub use rotor::Rotor;
pub use translator::Translator;

pub use ops::interpolation::{blend, slerp};
