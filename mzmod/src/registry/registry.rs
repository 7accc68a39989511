//! The [`ModificationRegistry`] itself with the core functionality.

use std::{
    collections::{HashMap, hash_map::Entry},
    sync::OnceLock,
};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{
    RegistryError,
    chemistry::IonRegistries,
    modification::{Modification, ModificationCategory},
    ontology::{Ontology, strip_prefix},
    registry::{Color, catalog, substitutions},
};

/// A catalog of modifications, looked up by their unique (case sensitive) name.
///
/// The registry separates the built in (default) modifications, which cannot be removed, from the
/// modifications added by the user. It can be used as follows:
/// * Lookup by name ([`Self::get`]), by PSI-MOD accession
///   ([`Self::modifications_for_psi_mod_accession`]), or by category
///   ([`Self::modifications_in_categories`]).
/// * Add and remove user modifications ([`Self::add_user_modification`],
///   [`Self::remove_user_modification`]).
/// * Restore the modifications stored in search parameters
///   ([`Self::load_backed_up_modifications`]).
/// * Translate PRIDE modification names ([`Self::convert_pride_modification`]).
/// * Store and load the full registry ([`Self::save_to_file`], [`Self::load_from_file`],
///   [`Self::init`]).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ModificationRegistry {
    /// All modifications by name
    modifications: HashMap<String, Modification>,
    /// The names of the built in modifications
    default_modifications: Vec<String>,
    /// The names of the user modifications
    user_modifications: Vec<String>,
    /// The colours that were assigned so far
    colors: HashMap<String, Color>,
    /// If the default names are sorted
    default_sorted: bool,
    /// If the user names are sorted
    user_sorted: bool,
    /// Bare PSI-MOD accession to all modifications with that accession, built on first use
    #[serde(skip)]
    psi_mod_index: OnceLock<HashMap<String, Vec<String>>>,
}

impl Default for ModificationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ModificationRegistry {
    /// Two registries are equal if they contain the same modifications with the same split
    /// between default and user modifications, and the same colours
    fn eq(&self, other: &Self) -> bool {
        let sorted = |list: &[String]| {
            let mut list = list.to_vec();
            list.sort_unstable();
            list
        };
        self.modifications == other.modifications
            && sorted(&self.default_modifications) == sorted(&other.default_modifications)
            && sorted(&self.user_modifications) == sorted(&other.user_modifications)
            && self.colors == other.colors
    }
}

impl ModificationRegistry {
    /// Create a registry with all built in modifications
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for modification in catalog::default_modifications()
            .into_iter()
            .chain(substitutions::substitutions())
        {
            registry.add_default_modification(modification);
        }
        registry
    }

    /// Create a registry without any modifications
    pub fn empty() -> Self {
        Self {
            modifications: HashMap::new(),
            default_modifications: Vec::new(),
            user_modifications: Vec::new(),
            colors: HashMap::new(),
            default_sorted: false,
            user_sorted: false,
            psi_mod_index: OnceLock::new(),
        }
    }

    /// Add a built in modification
    fn add_default_modification(&mut self, modification: Modification) {
        if self
            .modifications
            .insert(modification.name.clone(), modification.clone())
            .is_none()
        {
            self.default_modifications.push(modification.name);
        }
        self.default_sorted = false;
        self.invalidate_indices();
    }

    /// The number of modifications
    pub fn len(&self) -> usize {
        self.modifications.len()
    }

    /// Check if the registry does not contain any modifications
    pub fn is_empty(&self) -> bool {
        self.modifications.is_empty()
    }

    /// Iterate over all modifications in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &Modification> {
        self.modifications.values()
    }

    /// Get a modification by its exact name
    pub fn get(&self, name: &str) -> Option<&Modification> {
        self.modifications.get(name)
    }

    /// Check if a modification with this exact name is known
    pub fn contains(&self, name: &str) -> bool {
        self.modifications.contains_key(name)
    }

    /// Get a modification by name, or an error with the closest matching names as suggestions
    /// # Errors
    /// If no modification with this name is known.
    pub fn get_or_suggest(
        &self,
        name: &str,
    ) -> Result<&Modification, BoxedError<'static, RegistryError>> {
        self.get(name).ok_or_else(|| self.find_closest(name))
    }

    /// Create the error for an unknown modification name with up to three similar names known to
    /// this registry as suggestions
    pub fn find_closest(&self, name: &str) -> BoxedError<'static, RegistryError> {
        let options: Vec<&str> = self.modifications.keys().map(String::as_str).collect();
        BoxedError::new(
            RegistryError::UnknownModification,
            "Unknown modification",
            "The provided name is not a known modification",
            Context::show(name.to_string()),
        )
        .suggestions(
            similar::get_close_matches(name, &options, 3, 0.7)
                .into_iter()
                .map(ToString::to_string),
        )
    }

    /// Get the single amino acid variant of a modification (see
    /// [`Modification::single_aa_variant`])
    pub fn single_aa_modification(&self, name: &str) -> Option<Modification> {
        self.get(name).map(Modification::single_aa_variant)
    }

    /// Add or update a user modification. A new name is added to the end of the user
    /// modifications, an existing name keeps its place. A built in name is updated in place and
    /// stays built in. Any neutral losses and reporter ions of this modification that are not yet
    /// known are registered.
    pub fn add_user_modification(&mut self, modification: Modification, ions: &mut IonRegistries) {
        ions.register_from(&modification);
        let name = modification.name.clone();
        self.modifications.insert(name.clone(), modification);
        if !self.user_modifications.contains(&name)
            && !self.default_modifications.contains(&name)
        {
            self.user_modifications.push(name);
        }
        self.user_sorted = false;
        self.invalidate_indices();
    }

    /// Remove a user modification, returns the removed modification if it was present.
    /// # Errors
    /// If the name is a built in modification, these cannot be removed.
    pub fn remove_user_modification(
        &mut self,
        name: &str,
    ) -> Result<Option<Modification>, BoxedError<'static, RegistryError>> {
        if self.default_modifications.iter().any(|n| n == name) {
            return Err(BoxedError::new(
                RegistryError::DefaultModificationRemoval,
                "Cannot remove modification",
                "Built in modifications cannot be removed",
                Context::show(name.to_string()),
            ));
        }
        let removed = self.modifications.remove(name);
        self.user_modifications.retain(|n| n != name);
        self.invalidate_indices();
        Ok(removed)
    }

    /// The names of the built in modifications in insertion order
    pub fn default_modifications(&self) -> &[String] {
        &self.default_modifications
    }

    /// The names of the user modifications in insertion order, or in sorted order if one of the
    /// ordered variants has been called since the last change
    pub fn user_modifications(&self) -> &[String] {
        &self.user_modifications
    }

    /// The names of the built in modifications sorted case insensitively
    pub fn default_modifications_ordered(&mut self) -> &[String] {
        if !self.default_sorted {
            sort_case_insensitive(&mut self.default_modifications);
            self.default_sorted = true;
        }
        &self.default_modifications
    }

    /// The names of the user modifications sorted case insensitively
    pub fn user_modifications_ordered(&mut self) -> &[String] {
        if !self.user_sorted {
            sort_case_insensitive(&mut self.user_modifications);
            self.user_sorted = true;
        }
        &self.user_modifications
    }

    /// The names of all modifications in arbitrary order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.modifications.keys().map(String::as_str)
    }

    /// Check if this name is not a built in modification. Note that this is also true for names
    /// that are not known at all.
    pub fn is_user_defined(&self, name: &str) -> bool {
        !self.default_modifications.iter().any(|n| n == name)
    }

    /// Get the colour for a modification, a default colour is assigned and stored on first use
    /// (see [`Color::default_for`])
    pub fn color(&mut self, name: &str) -> Color {
        match self.colors.entry(name.to_string()) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => *entry.insert(Color::default_for(name)),
        }
    }

    /// Set the colour for a modification
    pub fn set_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    /// The names of all modifications in any of the given categories, in arbitrary order
    pub fn modifications_in_categories(&self, categories: &[ModificationCategory]) -> Vec<&str> {
        self.modifications
            .values()
            .filter(|m| categories.contains(&m.category))
            .map(|m| m.name.as_str())
            .collect()
    }

    /// The bare PSI-MOD accession (eg `00723`) of a modification, the name is matched exactly
    /// before trying a case insensitive match
    pub fn psi_mod_accession(&self, name: &str) -> Option<&str> {
        self.get(name)
            .or_else(|| {
                self.modifications
                    .values()
                    .find(|m| m.name.eq_ignore_ascii_case(name))
            })
            .and_then(|m| m.psi_mod.as_ref())
            .map(|term| term.bare_accession())
    }

    /// All modifications cross-referenced to this PSI-MOD accession, which can be given with or
    /// without the `MOD:` prefix. The reverse index is built on first use.
    pub fn modifications_for_psi_mod_accession(&self, accession: &str) -> Option<&[String]> {
        let accession = strip_prefix(Ontology::Psimod, accession.trim());
        self.psi_mod_index
            .get_or_init(|| {
                tracing::debug!("Building the PSI-MOD reverse index");
                let mut index: HashMap<String, Vec<String>> = HashMap::new();
                for modification in self.modifications.values() {
                    if let Some(term) = &modification.psi_mod {
                        index
                            .entry(term.bare_accession().to_string())
                            .or_default()
                            .push(modification.name.clone());
                    }
                }
                for names in index.values_mut() {
                    names.sort_unstable();
                }
                index
            })
            .get(accession)
            .map(Vec::as_slice)
    }

    /// Check if the PSI-MOD reverse index is currently built
    pub fn is_psi_mod_index_built(&self) -> bool {
        self.psi_mod_index.get().is_some()
    }

    /// Drop all derived indices, they are rebuilt on first use. This is done automatically on
    /// every change to the modifications.
    pub fn invalidate_indices(&mut self) {
        self.psi_mod_index.take();
    }

    /// Register the neutral losses and reporter ions of all user modifications that are not yet
    /// known. Returns the number of newly registered items.
    pub fn register_user_ions(&self, ions: &mut IonRegistries) -> usize {
        self.user_modifications
            .iter()
            .filter_map(|name| self.modifications.get(name))
            .map(|m| ions.register_from(m))
            .sum()
    }

    /// Replace the definition of a known modification without changing its default or user status
    pub(crate) fn overwrite(&mut self, modification: Modification) {
        self.modifications.insert(modification.name.clone(), modification);
        self.invalidate_indices();
    }
}

/// Sort case insensitively, using the case sensitive order to break ties so the order is total
fn sort_case_insensitive(list: &mut [String]) {
    list.sort_by_cached_key(|name| (name.to_lowercase(), name.clone()));
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::{
        chemistry::{MolecularFormula, NeutralLoss, ReporterIon},
        modification::{ModificationParameters, ModificationType},
        molecular_formula,
        sequence::{AminoAcid, AminoAcidPattern},
    };

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
    fn ordering() {
        let mut registry = ModificationRegistry::empty();
        let mut ions = IonRegistries::default();
        for name in ["beta", "Alpha", "alpha", "Gamma"] {
            registry.add_user_modification(user_modification(name), &mut ions);
        }
        assert_eq!(registry.user_modifications(), ["beta", "Alpha", "alpha", "Gamma"]);
        let first = registry.user_modifications_ordered().to_vec();
        assert_eq!(first, ["Alpha", "alpha", "beta", "Gamma"]);
        assert_eq!(registry.user_modifications_ordered(), first);
        registry.add_user_modification(user_modification("aardvark"), &mut ions);
        assert_eq!(registry.user_modifications().last().unwrap(), "aardvark");
        assert_eq!(registry.user_modifications_ordered()[0], "aardvark");
    }

    #[test]
    fn upsert_keeps_position() {
        let mut registry = ModificationRegistry::empty();
        let mut ions = IonRegistries::default();
        registry.add_user_modification(user_modification("a"), &mut ions);
        registry.add_user_modification(user_modification("b"), &mut ions);
        let mut changed = user_modification("a");
        changed.short_name = "changed".to_string();
        registry.add_user_modification(changed.clone(), &mut ions);
        assert_eq!(registry.user_modifications(), ["a", "b"]);
        assert_eq!(registry.get("a"), Some(&changed));
    }

    #[test]
    fn registers_ions() {
        let mut registry = ModificationRegistry::empty();
        let mut ions = IonRegistries::empty();
        let modification = user_modification("labelled")
            .with_neutral_losses([NeutralLoss::new("C2H4", molecular_formula!(C 2 H 4), false)])
            .with_reporter_ions([ReporterIon::new("lab126", molecular_formula!(C 8 H 15 N 1))]);
        registry.add_user_modification(modification, &mut ions);
        assert!(ions.neutral_losses.contains("C2H4"));
        assert!(ions.reporter_ions.contains("lab126"));
        let mut fresh = IonRegistries::empty();
        assert_eq!(registry.register_user_ions(&mut fresh), 2);
        assert_eq!(registry.register_user_ions(&mut fresh), 0);
    }

    #[test]
    fn remove() {
        let mut registry = ModificationRegistry::default();
        let mut ions = IonRegistries::default();
        let error = registry
            .remove_user_modification("Oxidation of M")
            .unwrap_err();
        assert!(matches!(
            error.get_kind(),
            RegistryError::DefaultModificationRemoval
        ));
        assert!(registry.contains("Oxidation of M"));
        registry.add_user_modification(user_modification("mine"), &mut ions);
        assert!(registry.remove_user_modification("mine").unwrap().is_some());
        assert!(!registry.contains("mine"));
        assert!(registry.user_modifications().is_empty());
        assert!(registry.remove_user_modification("mine").unwrap().is_none());
    }

    #[test]
    fn built_in_names_stay_built_in() {
        let mut registry = ModificationRegistry::default();
        let mut ions = IonRegistries::default();
        let mut oxidation = registry.get("Oxidation of M").unwrap().clone();
        oxidation.short_name = "oxi".to_string();
        registry.add_user_modification(oxidation, &mut ions);
        assert_eq!(registry.get("Oxidation of M").unwrap().short_name, "oxi");
        assert!(registry.user_modifications().is_empty());
        assert!(!registry.is_user_defined("Oxidation of M"));
        assert!(registry.remove_user_modification("Oxidation of M").is_err());
    }

    #[test]
    fn user_defined_includes_unknown() {
        let registry = ModificationRegistry::default();
        assert!(!registry.is_user_defined("Oxidation of M"));
        assert!(registry.is_user_defined("Not a modification at all"));
    }

    #[test]
    fn colours_are_cached() {
        let mut registry = ModificationRegistry::empty();
        let random = registry.color("Zzz");
        assert_eq!(registry.color("Zzz"), random);
        assert_eq!(registry.color("Phosphorylation of S"), Color::RED);
        registry.set_color("Phosphorylation of S", Color::BLUE);
        assert_eq!(registry.color("Phosphorylation of S"), Color::BLUE);
    }

    #[test]
    fn psi_mod_index() {
        let mut registry = ModificationRegistry::default();
        assert!(!registry.is_psi_mod_index_built());
        let names = registry
            .modifications_for_psi_mod_accession("MOD:01458")
            .unwrap();
        assert_eq!(
            names,
            ["Acetylation of peptide N-term", "Acetylation of protein N-term"]
        );
        assert_eq!(
            registry.modifications_for_psi_mod_accession("01458").unwrap(),
            names
        );
        assert!(registry.is_psi_mod_index_built());
        assert!(registry.modifications_for_psi_mod_accession("99999").is_none());

        let mut ions = IonRegistries::default();
        registry.add_user_modification(user_modification("mine").with_psi_mod(1458), &mut ions);
        assert!(!registry.is_psi_mod_index_built());
        assert_eq!(
            registry
                .modifications_for_psi_mod_accession("01458")
                .unwrap()
                .len(),
            3
        );
        registry.remove_user_modification("mine").unwrap();
        assert!(!registry.is_psi_mod_index_built());
        assert_eq!(
            registry.modifications_for_psi_mod_accession("01458").unwrap(),
            ["Acetylation of peptide N-term", "Acetylation of protein N-term"]
        );
        registry.invalidate_indices();
        assert!(!registry.is_psi_mod_index_built());
        assert_eq!(registry.psi_mod_accession("acetylation of k"), Some("00723"));
    }

    #[test]
    fn psi_mod_index_after_overwrite() {
        let mut registry = ModificationRegistry::default();
        let mut ions = IonRegistries::default();
        assert!(
            registry
                .modifications_for_psi_mod_accession("00723")
                .unwrap()
                .contains(&"Acetylation of K".to_string())
        );
        let mut changed = registry.get("Acetylation of K").unwrap().clone().with_psi_mod(1458);
        changed.added = molecular_formula!(C 2 H 3 O 1);
        let mut parameters = ModificationParameters::new();
        parameters.add_variable_modification(changed);
        assert_eq!(
            registry.load_backed_up_modifications(&parameters, true, &mut ions),
            ["Acetylation of K"]
        );
        assert!(!registry.is_psi_mod_index_built());
        assert!(
            !registry
                .modifications_for_psi_mod_accession("00723")
                .is_some_and(|names| names.contains(&"Acetylation of K".to_string()))
        );
        assert_eq!(
            registry.modifications_for_psi_mod_accession("01458").unwrap(),
            [
                "Acetylation of K",
                "Acetylation of peptide N-term",
                "Acetylation of protein N-term"
            ]
        );
    }

    #[test]
    fn categories() {
        let registry = ModificationRegistry::default();
        let common = registry.modifications_in_categories(&[ModificationCategory::Common]);
        assert!(common.contains(&"Oxidation of M"));
        assert!(common.contains(&"Carbamidomethylation of C"));
        assert!(!common.contains(&"Dimethylation of K"));
        let both = registry.modifications_in_categories(&[
            ModificationCategory::Common,
            ModificationCategory::Labeling,
        ]);
        assert!(both.contains(&"Oxidation of M"));
        assert!(both.contains(&"iTRAQ 4-plex of K"));
        assert!(registry.modifications_in_categories(&[]).is_empty());
    }

    #[test]
    fn closest() {
        let registry = ModificationRegistry::default();
        let error = registry.get_or_suggest("Oxidaton of M").unwrap_err();
        assert!(matches!(error.get_kind(), RegistryError::UnknownModification));
        assert!(error.get_suggestions().iter().any(|s| s.to_string() == "Oxidation of M"));
        assert!(registry.get_or_suggest("Oxidation of M").is_ok());
    }
}
