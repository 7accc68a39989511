//! Modifications and the selection of modifications for a search

mod modification;
mod parameters;

pub use modification::*;
pub use parameters::*;
