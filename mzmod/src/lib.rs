#![doc = include_str!("../README.md")]

/// Elements, molecular formulas, and the neutral losses and reporter ions of modifications.
pub mod chemistry;
mod error;
pub mod modification;
pub mod ontology;
pub mod registry;
pub mod sequence;

pub use error::RegistryError;

/// The types that are envisioned to be used the most, importing this is a good starting point
/// for working with the crate
pub mod prelude {
    pub use crate::RegistryError;
    pub use crate::chemistry::{IonRegistries, MolecularFormula, NeutralLoss, ReporterIon};
    pub use crate::modification::{
        Modification, ModificationCategory, ModificationParameters, ModificationType,
    };
    pub use crate::molecular_formula;
    pub use crate::registry::{Color, ModificationRegistry, RegistryStore, StorageLocation};
    pub use crate::sequence::{AminoAcid, AminoAcidPattern};
}
