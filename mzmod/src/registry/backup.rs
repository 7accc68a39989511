use itertools::Itertools;

use crate::{
    chemistry::IonRegistries,
    modification::ModificationParameters,
    registry::ModificationRegistry,
};

impl ModificationRegistry {
    /// Bring the modifications backed up in search parameters into this registry.
    ///
    /// Unknown modifications are added as user modifications. Known modifications that differ
    /// from the backed up definition (see [`crate::modification::Modification::is_same_as`]) are
    /// conflicts, these are replaced by the backed up definition if `overwrite` is set. The names
    /// of all conflicts are returned, regardless of `overwrite`, sorted by name.
    pub fn load_backed_up_modifications(
        &mut self,
        parameters: &ModificationParameters,
        overwrite: bool,
        ions: &mut IonRegistries,
    ) -> Vec<String> {
        let mut conflicts = Vec::new();
        for (name, backed_up) in parameters
            .backed_up_modifications()
            .iter()
            .sorted_by(|a, b| a.0.cmp(b.0))
        {
            match self.get(name).map(|known| known.is_same_as(backed_up)) {
                Some(true) => (),
                Some(false) => {
                    conflicts.push(name.clone());
                    if overwrite {
                        ions.register_neutral_losses_from(backed_up);
                        self.overwrite(backed_up.clone());
                    }
                }
                None => self.add_user_modification(backed_up.clone(), ions),
            }
        }
        if !conflicts.is_empty() {
            tracing::debug!(
                "{} backed up modification(s) differ from the registry: {}",
                conflicts.len(),
                conflicts.join(", ")
            );
        }
        conflicts
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::{
        chemistry::{MolecularFormula, NeutralLoss},
        modification::{Modification, ModificationCategory, ModificationType},
        molecular_formula,
        sequence::{AminoAcid, AminoAcidPattern},
    };

    fn parameters() -> ModificationParameters {
        let registry = ModificationRegistry::default();
        let mut parameters = ModificationParameters::new();
        // Same as the built in definition
        parameters
            .add_fixed_modification(registry.get("Carbamidomethylation of C").unwrap().clone());
        // Conflicting definition of a built in modification
        let mut oxidation = registry.get("Oxidation of M").unwrap().clone();
        oxidation.added = molecular_formula!(O 2);
        oxidation.neutral_losses = [NeutralLoss::new("H2O2", molecular_formula!(H 2 O 2), false)]
            .into_iter()
            .collect();
        parameters.add_variable_modification(oxidation);
        // Unknown to the registry
        parameters.add_variable_modification(Modification::new(
            ModificationType::AminoAcid,
            "Custom of W",
            "cst",
            molecular_formula!(C 1 H 2),
            MolecularFormula::default(),
            AminoAcidPattern::single(AminoAcid::Tryptophan),
            ModificationCategory::Other,
        ));
        parameters
    }

    #[test]
    fn without_overwrite() {
        let mut registry = ModificationRegistry::default();
        let mut ions = IonRegistries::default();
        let conflicts = registry.load_backed_up_modifications(&parameters(), false, &mut ions);
        assert_eq!(conflicts, ["Oxidation of M"]);
        assert_eq!(registry.get("Oxidation of M").unwrap().added, molecular_formula!(O 1));
        assert!(registry.user_modifications().contains(&"Custom of W".to_string()));
        assert!(!ions.neutral_losses.contains("H2O2"));
    }

    #[test]
    fn with_overwrite() {
        let mut registry = ModificationRegistry::default();
        let mut ions = IonRegistries::default();
        let conflicts = registry.load_backed_up_modifications(&parameters(), true, &mut ions);
        assert_eq!(conflicts, ["Oxidation of M"]);
        assert_eq!(registry.get("Oxidation of M").unwrap().added, molecular_formula!(O 2));
        assert!(!registry.is_user_defined("Oxidation of M"));
        assert!(ions.neutral_losses.contains("H2O2"));
        // Once overwritten the definitions agree
        assert!(
            registry
                .load_backed_up_modifications(&parameters(), true, &mut ions)
                .is_empty()
        );
    }
}
