//! Standard widget kit.

mod label;

pub use label::*;
