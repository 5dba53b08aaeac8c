//! Calculus routines.

pub mod differentiate;

pub use differentiate::{deriv, differentiate};
