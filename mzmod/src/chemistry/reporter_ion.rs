use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use serde::{Deserialize, Serialize};

use crate::chemistry::{Mass, MolecularFormula, da};

/// The mass of a proton
const PROTON_MASS: f64 = 1.007_276_466_812;

/// A named reporter ion, a diagnostic fragment released by a modification (mostly isobaric labels)
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct ReporterIon {
    /// The name, unique within a [`ReporterIonRegistry`]
    pub name: String,
    /// The neutral composition of the ion
    pub formula: MolecularFormula,
}

impl ReporterIon {
    /// Create a new reporter ion
    pub fn new(name: impl Into<String>, formula: MolecularFormula) -> Self {
        Self {
            name: name.into(),
            formula,
        }
    }

    /// The neutral mass of the ion
    pub fn monoisotopic_mass(&self) -> Mass {
        self.formula.monoisotopic_mass()
    }

    /// The mass of the singly protonated ion, the m/z it is observed at
    pub fn protonated_mass(&self) -> Mass {
        self.monoisotopic_mass() + da(PROTON_MASS)
    }

    /// Get one of the built in reporter ions by name
    pub fn built_in(name: &str) -> Option<Self> {
        BUILT_IN_REPORTER_IONS
            .iter()
            .find(|ion| ion.name == name)
            .cloned()
    }

    /// All built in reporter ions
    pub fn built_ins() -> &'static [Self] {
        &BUILT_IN_REPORTER_IONS
    }
}

impl Display for ReporterIon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

static BUILT_IN_REPORTER_IONS: LazyLock<Vec<ReporterIon>> = LazyLock::new(|| {
    vec![
        ReporterIon::new("iTRAQ4Plex_114", molecular_formula!(C 5 [13 C 1] H 12 N 2)),
        ReporterIon::new("iTRAQ4Plex_115", molecular_formula!(C 5 [13 C 1] H 12 N 1 [15 N 1])),
        ReporterIon::new("iTRAQ4Plex_116", molecular_formula!(C 4 [13 C 2] H 12 N 1 [15 N 1])),
        ReporterIon::new("iTRAQ4Plex_117", molecular_formula!(C 3 [13 C 3] H 12 N 1 [15 N 1])),
        ReporterIon::new("iTRAQ8Plex_113", molecular_formula!(C 6 H 12 N 2)),
        ReporterIon::new("iTRAQ8Plex_114", molecular_formula!(C 5 [13 C 1] H 12 N 2)),
        ReporterIon::new("iTRAQ8Plex_115", molecular_formula!(C 5 [13 C 1] H 12 N 1 [15 N 1])),
        ReporterIon::new("iTRAQ8Plex_116", molecular_formula!(C 4 [13 C 2] H 12 N 1 [15 N 1])),
        ReporterIon::new("iTRAQ8Plex_117", molecular_formula!(C 3 [13 C 3] H 12 N 1 [15 N 1])),
        ReporterIon::new("iTRAQ8Plex_118", molecular_formula!(C 3 [13 C 3] H 12 [15 N 2])),
        ReporterIon::new("iTRAQ8Plex_119", molecular_formula!(C 2 [13 C 4] H 12 [15 N 2])),
        ReporterIon::new("iTRAQ8Plex_121", molecular_formula!([13 C 6] H 12 [15 N 2])),
        ReporterIon::new("TMT_126", molecular_formula!(C 8 H 15 N 1)),
        ReporterIon::new("TMT_127N", molecular_formula!(C 8 H 15 [15 N 1])),
        ReporterIon::new("TMT_127C", molecular_formula!(C 7 [13 C 1] H 15 N 1)),
        ReporterIon::new("TMT_128N", molecular_formula!(C 7 [13 C 1] H 15 [15 N 1])),
        ReporterIon::new("TMT_128C", molecular_formula!(C 6 [13 C 2] H 15 N 1)),
        ReporterIon::new("TMT_129N", molecular_formula!(C 6 [13 C 2] H 15 [15 N 1])),
        ReporterIon::new("TMT_129C", molecular_formula!(C 5 [13 C 3] H 15 N 1)),
        ReporterIon::new("TMT_130N", molecular_formula!(C 5 [13 C 3] H 15 [15 N 1])),
        ReporterIon::new("TMT_130C", molecular_formula!(C 4 [13 C 4] H 15 N 1)),
        ReporterIon::new("TMT_131", molecular_formula!(C 4 [13 C 4] H 15 [15 N 1])),
        ReporterIon::new("TMT_131C", molecular_formula!(C 3 [13 C 5] H 15 N 1)),
        ReporterIon::new("TMT_126_ETD", molecular_formula!(C 7 H 15 N 1)),
        ReporterIon::new("TMT_127N_ETD", molecular_formula!(C 7 H 15 [15 N 1])),
        ReporterIon::new("TMT_127C_ETD", molecular_formula!(C 7 H 15 N 1)),
        ReporterIon::new("TMT_128N_ETD", molecular_formula!(C 7 H 15 [15 N 1])),
        ReporterIon::new("TMT_128C_ETD", molecular_formula!(C 5 [13 C 2] H 15 N 1)),
        ReporterIon::new("TMT_129N_ETD", molecular_formula!(C 5 [13 C 2] H 15 [15 N 1])),
        ReporterIon::new("TMT_129C_ETD", molecular_formula!(C 5 [13 C 2] H 15 N 1)),
        ReporterIon::new("TMT_130N_ETD", molecular_formula!(C 5 [13 C 2] H 15 [15 N 1])),
        ReporterIon::new("TMT_130C_ETD", molecular_formula!(C 3 [13 C 4] H 15 N 1)),
        ReporterIon::new("TMT_131_ETD", molecular_formula!(C 3 [13 C 4] H 15 [15 N 1])),
        ReporterIon::new("TMT_131C_ETD", molecular_formula!(C 2 [13 C 5] H 15 N 1)),
        ReporterIon::new("aceK126", molecular_formula!(C 7 H 11 O 1 N 1)),
        ReporterIon::new("aceK143", molecular_formula!(C 7 H 14 O 1 N 2)),
        ReporterIon::new("pY", molecular_formula!(C 8 H 10 N 1 P 1 O 4)),
        ReporterIon::new("fK112", molecular_formula!(C 6 H 9 N 1 O 1)),
        ReporterIon::new("metR87", molecular_formula!(C 4 H 10 N 2)),
        ReporterIon::new("metR112", molecular_formula!(C 5 H 9 N 3)),
        ReporterIon::new("metR115", molecular_formula!(C 5 H 10 N 2 O 1)),
        ReporterIon::new("metR143", molecular_formula!(C 6 H 14 N 4)),
        ReporterIon::new("metR70", molecular_formula!(C 4 H 7 N 1)),
        ReporterIon::new("dimetR112", molecular_formula!(C 5 H 9 N 3)),
        ReporterIon::new("dimetR115", molecular_formula!(C 5 H 10 N 2 O 1)),
        ReporterIon::new("dimetR157", molecular_formula!(C 7 H 16 N 4)),
        ReporterIon::new("QQ", molecular_formula!(C 10 H 16 N 4 O 4)),
        ReporterIon::new("QQ-H2O", molecular_formula!(C 10 H 14 N 4 O 3)),
        ReporterIon::new("QQT", molecular_formula!(C 14 H 24 N 5 O 6)),
        ReporterIon::new("QQT-H2O", molecular_formula!(C 14 H 22 N 5 O 5)),
        ReporterIon::new("QQTG", molecular_formula!(C 16 H 26 N 6 O 7)),
        ReporterIon::new("QQTG-H2O", molecular_formula!(C 16 H 24 N 6 O 6)),
        ReporterIon::new("QQTGG", molecular_formula!(C 18 H 29 N 7 O 8)),
        ReporterIon::new("QQTGG-H2O", molecular_formula!(C 18 H 27 N 7 O 7)),
        ReporterIon::new("iodoTMT_zero", molecular_formula!(C 8 H 15 N 1)),
        ReporterIon::new("iodoTMT_zero_ETD", molecular_formula!(C 7 H 15 N 1)),
        ReporterIon::new("iodoTMT_126", molecular_formula!(C 8 H 15 N 1)),
        ReporterIon::new("iodoTMT_126_ETD", molecular_formula!(C 7 H 15 N 1)),
        ReporterIon::new("iodoTMT_127", molecular_formula!(C 8 H 15 [15 N 1])),
        ReporterIon::new("iodoTMT_127_ETD", molecular_formula!(C 7 H 15 [15 N 1])),
        ReporterIon::new("iodoTMT_128", molecular_formula!(C 6 [13 C 2] H 15 N 1)),
        ReporterIon::new("iodoTMT_128_ETD", molecular_formula!(C 5 [13 C 2] H 15 N 1)),
        ReporterIon::new("iodoTMT_129", molecular_formula!(C 6 [13 C 2] H 15 [15 N 1])),
        ReporterIon::new("iodoTMT_129_ETD", molecular_formula!(C 5 [13 C 2] H 15 [15 N 1])),
        ReporterIon::new("iodoTMT_130", molecular_formula!(C 4 [13 C 4] H 15 N 1)),
        ReporterIon::new("iodoTMT_130_ETD", molecular_formula!(C 3 [13 C 4] H 15 N 1)),
        ReporterIon::new("iodoTMT_131", molecular_formula!(C 4 [13 C 4] H 15 [15 N 1])),
        ReporterIon::new("iodoTMT_131_ETD", molecular_formula!(C 3 [13 C 4] H 15 [15 N 1])),
    ]
});

/// The reporter ions known to a process, looked up by name.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct ReporterIonRegistry {
    ions: HashMap<String, ReporterIon>,
}

impl Default for ReporterIonRegistry {
    /// A registry with all built in reporter ions
    fn default() -> Self {
        Self {
            ions: ReporterIon::built_ins()
                .iter()
                .map(|ion| (ion.name.clone(), ion.clone()))
                .collect(),
        }
    }
}

impl ReporterIonRegistry {
    /// A registry without any reporter ions
    pub fn empty() -> Self {
        Self {
            ions: HashMap::new(),
        }
    }

    /// Get a reporter ion by name
    pub fn get(&self, name: &str) -> Option<&ReporterIon> {
        self.ions.get(name)
    }

    /// Check if a reporter ion with this name is known
    pub fn contains(&self, name: &str) -> bool {
        self.ions.contains_key(name)
    }

    /// Register a reporter ion if no ion with the same name is known yet. Returns true if the
    /// ion was added.
    pub fn register(&mut self, ion: ReporterIon) -> bool {
        if self.ions.contains_key(&ion.name) {
            false
        } else {
            self.ions.insert(ion.name.clone(), ion);
            true
        }
    }

    /// The number of known reporter ions
    pub fn len(&self) -> usize {
        self.ions.len()
    }

    /// Check if no reporter ions are known
    pub fn is_empty(&self) -> bool {
        self.ions.is_empty()
    }

    /// Iterate over all known reporter ions in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &ReporterIon> {
        self.ions.values()
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use uom::si::mass::dalton;

    use super::*;

    #[test]
    fn tmt_reporter_masses() {
        // Observed reporter m/z values from the TMT 10-plex product sheet
        for (name, mz) in [
            ("TMT_126", 126.127_726),
            ("TMT_127N", 127.124_761),
            ("TMT_127C", 127.131_081),
            ("TMT_131", 131.138_180),
        ] {
            let ion = ReporterIon::built_in(name).unwrap();
            assert!(
                (ion.protonated_mass().get::<dalton>() - mz).abs() < 1e-3,
                "{name}: {}",
                ion.protonated_mass().get::<dalton>()
            );
        }
    }

    #[test]
    fn unique_names() {
        let registry = ReporterIonRegistry::default();
        assert_eq!(registry.len(), ReporterIon::built_ins().len());
        assert!(registry.contains("aceK126"));
        assert!(!registry.contains("TMT230"));
    }

    #[test]
    fn register_keeps_first() {
        let mut registry = ReporterIonRegistry::empty();
        assert!(registry.register(ReporterIon::new("custom", molecular_formula!(C 6 H 12 N 2))));
        assert!(!registry.register(ReporterIon::new("custom", molecular_formula!(C 5 H 12 N 2))));
        assert_eq!(
            registry.get("custom").unwrap().formula,
            molecular_formula!(C 6 H 12 N 2)
        );
    }
}
