//! Retained-mode widgets for `reclutch`.

#[macro_use]
extern crate derivative;

pub mod canvas;
pub mod core;
pub mod kit;
pub mod text;
pub mod theme;
