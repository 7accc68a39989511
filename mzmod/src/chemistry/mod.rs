mod element;
#[macro_use]
mod formula;
mod neutral_loss;
mod reporter_ion;

pub use element::*;
pub use formula::*;
pub use neutral_loss::*;
pub use reporter_ion::*;

use crate::modification::Modification;

/// The unit of mass used throughout, stored in dalton
pub type Mass = uom::si::f64::Mass;

/// Create a mass in dalton
pub fn da(value: f64) -> Mass {
    Mass::new::<uom::si::mass::dalton>(value)
}

/// The side registries that modifications register their neutral losses and reporter ions into.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IonRegistries {
    /// The known neutral losses
    pub neutral_losses: NeutralLossRegistry,
    /// The known reporter ions
    pub reporter_ions: ReporterIonRegistry,
}

impl IonRegistries {
    /// Registries without any neutral losses or reporter ions
    pub fn empty() -> Self {
        Self {
            neutral_losses: NeutralLossRegistry::empty(),
            reporter_ions: ReporterIonRegistry::empty(),
        }
    }

    /// Register all neutral losses and reporter ions of this modification that are not yet known
    /// by name. Returns the number of newly registered items.
    pub fn register_from(&mut self, modification: &Modification) -> usize {
        let losses = modification
            .neutral_losses
            .iter()
            .filter(|loss| self.neutral_losses.register((*loss).clone()))
            .count();
        let ions = modification
            .reporter_ions
            .iter()
            .filter(|ion| self.reporter_ions.register((*ion).clone()))
            .count();
        losses + ions
    }

    /// Register only the neutral losses of this modification that are not yet known by name.
    pub fn register_neutral_losses_from(&mut self, modification: &Modification) -> usize {
        modification
            .neutral_losses
            .iter()
            .filter(|loss| self.neutral_losses.register((*loss).clone()))
            .count()
    }
}
