//! End to end behaviour of the modification registry

use context_error::*;
use mzmod::prelude::*;

fn user_modification(name: &str) -> Modification {
    Modification::new(
        ModificationType::AminoAcid,
        name,
        "usr",
        molecular_formula!(C 2 H 4),
        MolecularFormula::default(),
        AminoAcidPattern::single(AminoAcid::Cysteine),
        ModificationCategory::Other,
    )
}

#[test]
fn default_catalog_is_complete() {
    let registry = ModificationRegistry::default();
    assert!(!registry.default_modifications().is_empty());
    assert!(registry.user_modifications().is_empty());
    assert_eq!(registry.len(), registry.default_modifications().len());
    for name in registry.default_modifications() {
        assert!(registry.contains(name), "{name}");
        assert!(!registry.is_user_defined(name), "{name}");
    }
    assert!(registry.contains("K->R"));
    assert!(!registry.contains("I->L"));
}

#[test]
fn add_and_remove() {
    let mut registry = ModificationRegistry::default();
    let mut ions = IonRegistries::default();
    let modification = user_modification("Ethylation of C");
    registry.add_user_modification(modification.clone(), &mut ions);
    assert_eq!(registry.get("Ethylation of C"), Some(&modification));
    assert_eq!(registry.user_modifications(), ["Ethylation of C"]);

    let removed = registry.remove_user_modification("Ethylation of C").unwrap();
    assert_eq!(removed, Some(modification));
    assert!(!registry.contains("Ethylation of C"));
    assert!(registry.user_modifications().is_empty());
    // Removing again is fine
    assert_eq!(
        registry.remove_user_modification("Ethylation of C").unwrap(),
        None
    );
}

#[test]
fn defaults_cannot_be_removed() {
    let mut registry = ModificationRegistry::default();
    let before = registry.clone();
    for name in ["Oxidation of M", "Phosphorylation of S", "K->R"] {
        let error = registry.remove_user_modification(name).unwrap_err();
        assert!(matches!(
            error.get_kind(),
            RegistryError::DefaultModificationRemoval
        ));
    }
    assert_eq!(registry, before);
}

#[test]
fn ordering_is_stable() {
    let mut registry = ModificationRegistry::default();
    let first = registry.default_modifications_ordered().to_vec();
    let second = registry.default_modifications_ordered().to_vec();
    assert_eq!(first, second);
    assert!(
        first
            .windows(2)
            .all(|pair| pair[0].to_lowercase() <= pair[1].to_lowercase())
    );
}

#[test]
fn psi_mod_reverse_lookup() {
    let mut registry = ModificationRegistry::default();
    let mut ions = IonRegistries::default();
    let names = registry
        .modifications_for_psi_mod_accession("MOD:01458")
        .unwrap()
        .to_vec();
    assert_eq!(
        names,
        ["Acetylation of peptide N-term", "Acetylation of protein N-term"]
    );
    assert_eq!(
        registry.modifications_for_psi_mod_accession("01458"),
        Some(names.as_slice())
    );
    assert_eq!(registry.modifications_for_psi_mod_accession("99999"), None);
    assert!(registry.is_psi_mod_index_built());

    // Any change drops the index, and the rebuilt index sees the change
    registry.add_user_modification(
        user_modification("Acetylation of C").with_psi_mod(1458),
        &mut ions,
    );
    assert!(!registry.is_psi_mod_index_built());
    assert_eq!(
        registry
            .modifications_for_psi_mod_accession("01458")
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn reconcile_backed_up_parameters() {
    let mut source = ModificationRegistry::default();
    let mut ions = IonRegistries::default();
    source.add_user_modification(user_modification("Ethylation of C"), &mut ions);

    let mut parameters = ModificationParameters::new();
    parameters.add_variable_modification(source.get("Ethylation of C").unwrap().clone());
    parameters.add_fixed_modification(source.get("Carbamidomethylation of C").unwrap().clone());

    let mut target = ModificationRegistry::default();
    let conflicts = target.load_backed_up_modifications(&parameters, false, &mut ions);
    assert!(conflicts.is_empty());
    assert!(target.contains("Ethylation of C"));
    assert!(target.is_user_defined("Ethylation of C"));
}

#[test]
fn colours() {
    let mut registry = ModificationRegistry::default();
    assert_eq!(registry.color("Phosphorylation of S"), Color::RED);
    let random = registry.color("Ethylation of C");
    assert_eq!(registry.color("Ethylation of C"), random);
    registry.set_color("Ethylation of C", Color::BLUE);
    assert_eq!(registry.color("Ethylation of C"), Color::BLUE);

    let mut parameters = ModificationParameters::new();
    assert_eq!(parameters.color("Oxidation of M", &mut registry), Color::BLUE);
    assert_eq!(parameters.colors().len(), 1);
}

#[test]
fn unknown_names_get_suggestions() {
    let registry = ModificationRegistry::default();
    let error = registry.get_or_suggest("Oxidaton of M").unwrap_err();
    assert!(matches!(
        error.get_kind(),
        RegistryError::UnknownModification
    ));
    assert!(
        error
            .get_suggestions()
            .iter()
            .any(|s| s.to_string() == "Oxidation of M")
    );
}
