//! Storing and loading registries

use context_error::*;
use mzmod::prelude::*;

fn customised() -> (ModificationRegistry, IonRegistries) {
    let mut registry = ModificationRegistry::default();
    let mut ions = IonRegistries::default();
    registry.add_user_modification(
        Modification::new(
            ModificationType::PeptideNTerm,
            "Ethylation of peptide N-term",
            "eth",
            molecular_formula!(C 2 H 4),
            MolecularFormula::default(),
            AminoAcidPattern::empty(),
            ModificationCategory::Other,
        )
        .with_reporter_ions([ReporterIon::new("eth80", molecular_formula!(C 5 H 5 N 1))]),
        &mut ions,
    );
    registry.set_color("Ethylation of peptide N-term", Color::rgb(1, 2, 3));
    (registry, ions)
}

#[test]
fn round_trip() {
    let folder = tempfile::tempdir().unwrap();
    let (registry, _) = customised();
    for file in ["registry.json", "registry.json.gz"] {
        let path = folder.path().join("nested").join(file);
        registry.save_to_file(&path).unwrap();
        let loaded = ModificationRegistry::load_from_file(&path).unwrap();
        assert_eq!(loaded, registry);
        for modification in registry.iter() {
            assert_eq!(loaded.get(&modification.name), Some(modification));
        }
        assert!(loaded.is_user_defined("Ethylation of peptide N-term"));
    }
}

#[test]
fn missing_file_gives_defaults() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("absent.json");
    let registry = ModificationRegistry::load_or_default(&path).unwrap();
    assert_eq!(registry, ModificationRegistry::default());
    let error = ModificationRegistry::load_from_file(&path).unwrap_err();
    assert!(matches!(
        error.get_kind(),
        RegistryError::FileCouldNotBeOpened
    ));
}

#[test]
fn malformed_files_are_errors() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let error = ModificationRegistry::load_or_default(&path).unwrap_err();
    assert!(matches!(
        error.get_kind(),
        RegistryError::FileCouldNotBeParsed
    ));

    std::fs::write(&path, r#"{"version": 9999, "registry": {}}"#).unwrap();
    let error = ModificationRegistry::load_from_file(&path).unwrap_err();
    assert!(matches!(
        error.get_kind(),
        RegistryError::IncompatibleVersion
    ));
}

#[test]
fn init_falls_back_and_registers_ions() {
    let folder = tempfile::tempdir().unwrap();
    let path = folder.path().join("registry.json");

    std::fs::write(&path, "garbage").unwrap();
    let mut ions = IonRegistries::default();
    let (registry, errors) = ModificationRegistry::init(&path, &mut ions);
    assert_eq!(errors.len(), 1);
    assert_eq!(registry, ModificationRegistry::default());

    let (stored, _) = customised();
    stored.save_to_file(&path).unwrap();
    let mut ions = IonRegistries::default();
    assert!(!ions.reporter_ions.contains("eth80"));
    let (registry, errors) = ModificationRegistry::init(&path, &mut ions);
    assert!(errors.is_empty());
    assert_eq!(registry, stored);
    assert!(ions.reporter_ions.contains("eth80"));
}

#[test]
fn store_lifecycle() {
    let folder = tempfile::tempdir().unwrap();
    let location = StorageLocation::with_folder(folder.path().join("data"));
    let mut store = RegistryStore::new(location.clone());

    let (registry, ions) = store.registry_and_ions();
    registry.add_user_modification(
        Modification::new(
            ModificationType::AminoAcid,
            "Ethylation of C",
            "eth",
            molecular_formula!(C 2 H 4),
            MolecularFormula::default(),
            AminoAcidPattern::single(AminoAcid::Cysteine),
            ModificationCategory::Other,
        ),
        ions,
    );
    store.save().unwrap();
    assert!(location.path().unwrap().exists());

    // Reloading reads the stored registry again
    store.reload();
    assert!(store.get().contains("Ethylation of C"));

    // Clearing only keeps the defaults, until the next reload
    store.clear();
    assert!(!store.get().contains("Ethylation of C"));
    store.reload();
    assert!(store.get().contains("Ethylation of C"));

    // A fresh store for the same location sees the saved registry
    let mut other = RegistryStore::new(location);
    assert!(other.get().contains("Ethylation of C"));
}
