//! Higher-level operations built on the entity API.

pub mod interpolation;
