//! Amino acids and the patterns of amino acids that modifications target

mod amino_acid;
mod pattern;

pub use amino_acid::*;
pub use pattern::*;
