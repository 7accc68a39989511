use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::chemistry::{Mass, MolecularFormula};

/// A named neutral loss, a fragment of a modification lost in the mass spectrometer
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct NeutralLoss {
    /// The name, unique within a [`NeutralLossRegistry`]
    pub name: String,
    /// The composition of the lost fragment
    pub formula: MolecularFormula,
    /// If true the loss is always observed, if false it is optional
    pub fixed: bool,
}

impl NeutralLoss {
    /// Create a new neutral loss
    pub fn new(name: impl Into<String>, formula: MolecularFormula, fixed: bool) -> Self {
        Self {
            name: name.into(),
            formula,
            fixed,
        }
    }

    /// The mass of the lost fragment
    pub fn monoisotopic_mass(&self) -> Mass {
        self.formula.monoisotopic_mass()
    }

    /// Get one of the built in neutral losses by name
    pub fn built_in(name: &str) -> Option<Self> {
        BUILT_IN_NEUTRAL_LOSSES
            .iter()
            .find(|loss| loss.name == name)
            .cloned()
    }

    /// All built in neutral losses
    pub fn built_ins() -> &'static [Self] {
        &BUILT_IN_NEUTRAL_LOSSES
    }
}

impl Display for NeutralLoss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "-{}", self.name)
    }
}

static BUILT_IN_NEUTRAL_LOSSES: LazyLock<Vec<NeutralLoss>> = LazyLock::new(|| {
    vec![
        NeutralLoss::new("H3PO4", molecular_formula!(H 3 P 1 O 4), false),
        NeutralLoss::new("HPO3", molecular_formula!(H 1 P 1 O 3), false),
        NeutralLoss::new("CH4OS", molecular_formula!(C 1 H 4 O 1 S 1), false),
        NeutralLoss::new("C3H9N", molecular_formula!(C 3 H 9 N 1), false),
        NeutralLoss::new("H2O", molecular_formula!(H 2 O 1), false),
        NeutralLoss::new("NH3", molecular_formula!(N 1 H 3), false),
    ]
});

/// The neutral losses known to a process, looked up by name.
///
/// Modifications carry their own copies of their neutral losses, adding a modification to a
/// [`crate::registry::ModificationRegistry`] registers any unknown losses here.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct NeutralLossRegistry {
    losses: HashMap<String, NeutralLoss>,
}

impl Default for NeutralLossRegistry {
    /// A registry with all built in neutral losses
    fn default() -> Self {
        let mut registry = Self::empty();
        for loss in NeutralLoss::built_ins() {
            registry.register(loss.clone());
        }
        registry
    }
}

impl NeutralLossRegistry {
    /// A registry without any neutral losses
    pub fn empty() -> Self {
        Self {
            losses: HashMap::new(),
        }
    }

    /// Get a neutral loss by name
    pub fn get(&self, name: &str) -> Option<&NeutralLoss> {
        self.losses.get(name)
    }

    /// Check if a neutral loss with this name is known
    pub fn contains(&self, name: &str) -> bool {
        self.losses.contains_key(name)
    }

    /// Register a neutral loss if no neutral loss with the same name is known yet. Returns true
    /// if the loss was added.
    pub fn register(&mut self, loss: NeutralLoss) -> bool {
        if self.losses.contains_key(&loss.name) {
            false
        } else {
            self.losses.insert(loss.name.clone(), loss);
            true
        }
    }

    /// Register a neutral loss, replacing any neutral loss with the same name
    pub fn insert(&mut self, loss: NeutralLoss) {
        self.losses.insert(loss.name.clone(), loss);
    }

    /// The number of known neutral losses
    pub fn len(&self) -> usize {
        self.losses.len()
    }

    /// Check if no neutral losses are known
    pub fn is_empty(&self) -> bool {
        self.losses.is_empty()
    }

    /// Iterate over all known neutral losses in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &NeutralLoss> {
        self.losses.values()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use uom::si::mass::dalton;

    use super::*;

    #[test]
    fn built_ins() {
        let loss = NeutralLoss::built_in("H3PO4").unwrap();
        assert!((loss.monoisotopic_mass().get::<dalton>() - 97.976_896).abs() < 1e-5);
        assert!(NeutralLoss::built_in("H4PO4").is_none());
    }

    #[test]
    fn register_keeps_first() {
        let mut registry = NeutralLossRegistry::default();
        let len = registry.len();
        assert!(!registry.register(NeutralLoss::new("H2O", molecular_formula!(H 2), true)));
        assert_eq!(registry.get("H2O").unwrap().formula, molecular_formula!(H 2 O 1));
        assert!(registry.register(NeutralLoss::new("C2H4", molecular_formula!(C 2 H 4), false)));
        assert_eq!(registry.len(), len + 1);
        assert!(NeutralLossRegistry::empty().is_empty());
    }
}
