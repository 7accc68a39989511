//! The ontologies that modifications are cross-referenced to

mod ontology;

pub use ontology::*;
