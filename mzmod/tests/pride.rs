//! Translating PRIDE modification names into search parameters

use mzmod::prelude::*;

#[test]
fn carbamidomethyl() {
    let registry = ModificationRegistry::default();
    let mut parameters = ModificationParameters::new();
    let mut unknown = Vec::new();
    let report =
        registry.convert_pride_modification("Carbamidomethyl", &mut parameters, &mut unknown, true);
    assert!(report.contains("Carbamidomethylation of C"));
    assert_eq!(
        parameters.fixed_modifications(),
        ["Carbamidomethylation of C"]
    );
    let report =
        registry.convert_pride_modification("Carbamidomethyl", &mut parameters, &mut unknown, true);
    assert!(!report.contains("Carbamidomethylation of C"));
    assert_eq!(parameters.fixed_modifications().len(), 1);
}

#[test]
fn itraq_sets() {
    let registry = ModificationRegistry::default();
    let mut parameters = ModificationParameters::new();
    let mut unknown = Vec::new();
    registry.convert_pride_modification("itraq4plex", &mut parameters, &mut unknown, false);
    assert_eq!(
        parameters.fixed_modifications(),
        ["iTRAQ 4-plex of K", "iTRAQ 4-plex of peptide N-term"]
    );
    assert_eq!(parameters.variable_modifications(), ["iTRAQ 4-plex of Y"]);
    assert!(unknown.is_empty());
    // The definitions are backed up with the parameters
    assert!(parameters.modification("iTRAQ 4-plex of Y").is_some());
}

#[test]
fn unknown_names() {
    let registry = ModificationRegistry::default();
    let mut parameters = ModificationParameters::new();
    let mut unknown = Vec::new();
    for _ in 0..2 {
        registry.convert_pride_modification(
            "totally-unrecognized-xyz",
            &mut parameters,
            &mut unknown,
            false,
        );
    }
    assert_eq!(unknown, ["totally-unrecognized-xyz"]);
    assert_eq!(parameters, ModificationParameters::new());
}

#[test]
fn set_mappings_win() {
    // "Phospho" maps to the full set of phosphorylations regardless of `is_fixed`
    let registry = ModificationRegistry::default();
    let mut parameters = ModificationParameters::new();
    let mut unknown = Vec::new();
    registry.convert_pride_modification("PHOSPHO", &mut parameters, &mut unknown, true);
    assert!(parameters.fixed_modifications().is_empty());
    assert_eq!(
        parameters.variable_modifications(),
        [
            "Phosphorylation of S",
            "Phosphorylation of T",
            "Phosphorylation of Y"
        ]
    );
}
