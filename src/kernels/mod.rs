//! Closed-form product kernels for every (grade, grade) pairing the algebra
//! defines.
//!
//! Each kernel writes every output component as an explicit linear combination
//! of input products instead of looping over a multiplication table; the
//! explicit sums let LLVM see the whole dataflow and vectorize it. The
//! formulas are the correctness-critical artifact of the crate: each one was
//! derived from the PGA(3,0,1) multiplication rule and is pinned by the
//! property tests against known basis products and round trips.

pub(crate) mod exp_log;
pub(crate) mod exterior;
pub(crate) mod geometric;
pub(crate) mod inner;
pub(crate) mod sandwich;
