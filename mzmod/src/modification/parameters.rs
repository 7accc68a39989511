use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    modification::Modification,
    registry::{Color, ModificationRegistry},
};

/// The modifications selected for a search: the fixed and variable modifications, the
/// modifications for the refinement step, and a back up of the definition of every modification
/// that was ever added so the profile can be restored on a system that does not know them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct ModificationParameters {
    fixed: Vec<String>,
    variable: Vec<String>,
    refinement_fixed: Vec<String>,
    refinement_variable: Vec<String>,
    colors: HashMap<String, Color>,
    back_up: HashMap<String, Modification>,
}

/// Add a name to a list of names while keeping it sorted and without duplicates
fn insert_sorted(list: &mut Vec<String>, name: &str) {
    if let Err(index) = list.binary_search_by(|probe| probe.as_str().cmp(name)) {
        list.insert(index, name.to_string());
    }
}

impl ModificationParameters {
    /// Create empty modification parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed modifications, sorted
    pub fn fixed_modifications(&self) -> &[String] {
        &self.fixed
    }

    /// The variable modifications, sorted
    pub fn variable_modifications(&self) -> &[String] {
        &self.variable
    }

    /// The fixed modifications for the refinement step, sorted
    pub fn refinement_fixed_modifications(&self) -> &[String] {
        &self.refinement_fixed
    }

    /// The variable modifications for the refinement step, sorted
    pub fn refinement_variable_modifications(&self) -> &[String] {
        &self.refinement_variable
    }

    /// Add a fixed modification
    pub fn add_fixed_modification(&mut self, modification: Modification) {
        insert_sorted(&mut self.fixed, &modification.name);
        self.back_up.insert(modification.name.clone(), modification);
    }

    /// Add a variable modification
    pub fn add_variable_modification(&mut self, modification: Modification) {
        insert_sorted(&mut self.variable, &modification.name);
        self.back_up.insert(modification.name.clone(), modification);
    }

    /// Add a fixed modification for the refinement step
    pub fn add_refinement_fixed_modification(&mut self, modification: Modification) {
        insert_sorted(&mut self.refinement_fixed, &modification.name);
        self.back_up.insert(modification.name.clone(), modification);
    }

    /// Add a variable modification for the refinement step
    pub fn add_refinement_variable_modification(&mut self, modification: Modification) {
        insert_sorted(&mut self.refinement_variable, &modification.name);
        self.back_up.insert(modification.name.clone(), modification);
    }

    /// Remove a fixed modification, the back up is kept
    pub fn remove_fixed_modification(&mut self, name: &str) {
        self.fixed.retain(|n| n != name);
    }

    /// Remove a variable modification, the back up is kept
    pub fn remove_variable_modification(&mut self, name: &str) {
        self.variable.retain(|n| n != name);
    }

    /// Remove a fixed modification for the refinement step, the back up is kept
    pub fn remove_refinement_fixed_modification(&mut self, name: &str) {
        self.refinement_fixed.retain(|n| n != name);
    }

    /// Remove a variable modification for the refinement step, the back up is kept
    pub fn remove_refinement_variable_modification(&mut self, name: &str) {
        self.refinement_variable.retain(|n| n != name);
    }

    /// Remove all fixed modifications
    pub fn clear_fixed_modifications(&mut self) {
        self.fixed.clear();
    }

    /// Remove all variable modifications
    pub fn clear_variable_modifications(&mut self) {
        self.variable.clear();
    }

    /// Remove all refinement modifications
    pub fn clear_refinement_modifications(&mut self) {
        self.refinement_fixed.clear();
        self.refinement_variable.clear();
    }

    /// Check if the modification is in any of the lists
    pub fn contains(&self, name: &str) -> bool {
        [
            &self.fixed,
            &self.variable,
            &self.refinement_fixed,
            &self.refinement_variable,
        ]
        .iter()
        .any(|list| list.iter().any(|n| n == name))
    }

    /// All fixed and variable modifications, without duplicates
    pub fn all_modifications(&self) -> Vec<&str> {
        self.fixed
            .iter()
            .chain(&self.variable)
            .map(String::as_str)
            .unique()
            .collect()
    }

    /// All modifications that are not fixed: the variable and refinement variable modifications
    /// followed by the refinement fixed modifications that are not fixed in the first pass
    pub fn all_not_fixed_modifications(&self) -> Vec<&str> {
        let fixed = self.fixed.iter().map(String::as_str).collect::<HashSet<_>>();
        self.variable
            .iter()
            .chain(&self.refinement_variable)
            .map(String::as_str)
            .chain(
                self.refinement_fixed
                    .iter()
                    .map(String::as_str)
                    .filter(|name| !fixed.contains(name)),
            )
            .unique()
            .collect()
    }

    /// All not fixed modifications that have this mass (rounded to the given decimals)
    pub fn same_mass_not_fixed_modifications(
        &self,
        mass: f64,
        decimals: u8,
        registry: &ModificationRegistry,
    ) -> Vec<&str> {
        let factor = 10_f64.powi(i32::from(decimals));
        let mass = (mass * factor).round() / factor;
        self.all_not_fixed_modifications()
            .into_iter()
            .filter(|name| {
                registry
                    .get(name)
                    .or_else(|| self.back_up.get(*name))
                    .is_some_and(|m| (m.rounded_mass(decimals) - mass).abs() < f64::EPSILON)
            })
            .collect()
    }

    /// Set the colour for a modification
    pub fn set_color(&mut self, name: impl Into<String>, color: Color) {
        self.colors.insert(name.into(), color);
    }

    /// Get the colour for a modification, if no colour is set the colour from the registry is
    /// used and stored
    pub fn color(&mut self, name: &str, registry: &mut ModificationRegistry) -> Color {
        if let Some(color) = self.colors.get(name) {
            *color
        } else {
            let color = registry.color(name);
            self.colors.insert(name.to_string(), color);
            color
        }
    }

    /// All colours that are set
    pub fn colors(&self) -> &HashMap<String, Color> {
        &self.colors
    }

    /// Get the backed up definition of a modification
    pub fn modification(&self, name: &str) -> Option<&Modification> {
        self.back_up.get(name)
    }

    /// The backed up definitions of all modifications that were ever added
    pub fn backed_up_modifications(&self) -> &HashMap<String, Modification> {
        &self.back_up
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::{
        chemistry::MolecularFormula,
        modification::{ModificationCategory, ModificationType},
        molecular_formula,
        sequence::{AminoAcid, AminoAcidPattern},
    };

    fn modification(name: &str) -> Modification {
        Modification::new(
            ModificationType::AminoAcid,
            name,
            "",
            molecular_formula!(O 1),
            MolecularFormula::default(),
            AminoAcidPattern::single(AminoAcid::Methionine),
            ModificationCategory::Other,
        )
    }

    #[test]
    fn sorted_and_unique() {
        let mut parameters = ModificationParameters::new();
        parameters.add_variable_modification(modification("b"));
        parameters.add_variable_modification(modification("a"));
        parameters.add_variable_modification(modification("b"));
        assert_eq!(parameters.variable_modifications(), ["a", "b"]);
        assert_eq!(parameters.backed_up_modifications().len(), 2);
    }

    #[test]
    fn contains_and_remove() {
        let mut parameters = ModificationParameters::new();
        parameters.add_refinement_fixed_modification(modification("r"));
        assert!(parameters.contains("r"));
        assert!(!parameters.contains("x"));
        parameters.remove_refinement_fixed_modification("r");
        assert!(!parameters.contains("r"));
        assert!(parameters.modification("r").is_some());
    }

    #[test]
    fn combined_lists() {
        let mut parameters = ModificationParameters::new();
        parameters.add_fixed_modification(modification("f"));
        parameters.add_variable_modification(modification("f"));
        parameters.add_variable_modification(modification("v"));
        parameters.add_refinement_fixed_modification(modification("f"));
        parameters.add_refinement_fixed_modification(modification("rf"));
        parameters.add_refinement_variable_modification(modification("v"));
        assert_eq!(parameters.all_modifications(), ["f", "v"]);
        assert_eq!(parameters.all_not_fixed_modifications(), ["f", "v", "rf"]);
    }

    #[test]
    fn same_mass() {
        let registry = ModificationRegistry::empty();
        let mut parameters = ModificationParameters::new();
        parameters.add_variable_modification(modification("ox"));
        assert_eq!(
            parameters.same_mass_not_fixed_modifications(15.994_915, 4, &registry),
            ["ox"]
        );
        assert!(
            parameters
                .same_mass_not_fixed_modifications(16.5, 4, &registry)
                .is_empty()
        );
    }
}
