//! Translation of the free text modification names used in PRIDE submissions
use std::{collections::HashMap, fmt::Display, sync::LazyLock};

use crate::{modification::ModificationParameters, registry::ModificationRegistry};

/// How a modification inferred from a PRIDE name is added to the parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Assumed {
    /// Added as a fixed modification
    Fixed,
    /// Added as a variable modification
    Variable,
}

impl Display for Assumed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Fixed => "fixed",
                Self::Variable => "variable",
            }
        )
    }
}

/// The modifications a PRIDE name translates to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrideMapping {
    /// A name that implies a set of modifications, each with its own assumed status. The set
    /// can be empty for names that explicitly state that nothing is modified.
    Multiple(&'static [(Assumed, &'static str)]),
    /// A name that maps onto exactly one modification, its status is given by the caller
    Single(&'static str),
}

struct MultiMapping {
    spellings: &'static [&'static str],
    modifications: &'static [(Assumed, &'static str)],
}

struct SingleMapping {
    spellings: &'static [&'static str],
    modification: &'static str,
}

/// Lowercase spelling to mapping, the set mappings take precedence over the single ones
static LOOKUP: LazyLock<HashMap<String, PrideMapping>> = LazyLock::new(|| {
    let mut lookup = HashMap::new();
    let multi = MULTI_MAPPINGS.iter().flat_map(|mapping| {
        mapping
            .spellings
            .iter()
            .map(|spelling| (spelling, PrideMapping::Multiple(mapping.modifications)))
    });
    let single = SINGLE_MAPPINGS.iter().flat_map(|mapping| {
        mapping
            .spellings
            .iter()
            .map(|spelling| (spelling, PrideMapping::Single(mapping.modification)))
    });
    for (spelling, mapping) in multi.chain(single) {
        lookup.entry(spelling.to_lowercase()).or_insert(mapping);
    }
    lookup
});

/// Find the mapping for a PRIDE modification name, the name is matched case insensitively
pub fn pride_mapping(pride_name: &str) -> Option<PrideMapping> {
    LOOKUP.get(&pride_name.to_lowercase()).copied()
}

impl ModificationRegistry {
    /// Translate a PRIDE modification name and add the resulting modifications to the
    /// parameters. Modifications already in the parameters are left alone. Names with a set
    /// mapping use the status stored with each modification, names with a single mapping are
    /// added as fixed if `is_fixed` is set and as variable otherwise. Names without any mapping
    /// are appended to `unknown` (once).
    ///
    /// Returns a report with one `<br>{name} (assumed fixed|variable)` line per added
    /// modification.
    pub fn convert_pride_modification(
        &self,
        pride_name: &str,
        parameters: &mut ModificationParameters,
        unknown: &mut Vec<String>,
        is_fixed: bool,
    ) -> String {
        let mut report = String::new();
        match pride_mapping(pride_name) {
            Some(PrideMapping::Multiple(modifications)) => {
                for (assumed, name) in modifications {
                    self.add_assumed(name, *assumed, parameters, &mut report);
                }
            }
            Some(PrideMapping::Single(name)) => {
                let assumed = if is_fixed {
                    Assumed::Fixed
                } else {
                    Assumed::Variable
                };
                self.add_assumed(name, assumed, parameters, &mut report);
            }
            None => {
                if !unknown.iter().any(|n| n == pride_name) {
                    unknown.push(pride_name.to_string());
                }
            }
        }
        report
    }

    fn add_assumed(
        &self,
        name: &str,
        assumed: Assumed,
        parameters: &mut ModificationParameters,
        report: &mut String,
    ) {
        if parameters.contains(name) {
            return;
        }
        let Some(modification) = self.get(name) else {
            tracing::warn!("PRIDE mapping points to unknown modification '{name}'");
            return;
        };
        match assumed {
            Assumed::Fixed => parameters.add_fixed_modification(modification.clone()),
            Assumed::Variable => parameters.add_variable_modification(modification.clone()),
        }
        report.push_str(&format!("<br>{name} (assumed {assumed})"));
    }
}

static MULTI_MAPPINGS: &[MultiMapping] = &[
    MultiMapping {
        spellings: &["iTRAQ4plex", "iTRAQ4plex reporter+balance reagent N-acylated residue", "iTRAQ4plex reporter+balance reagent acylated residue", "iTRAQ4plex-114 reporter+balance reagent N6-acylated lysine", "iTRAQ4plex-114 reporter+balance reagent O4&apos;-acylated tyrosine", "iTRAQ4plex-114 reporter+balance reagent O4'-acylated tyrosine", "iTRAQ4plex-114 reporter+balance reagent acylated N-terminal", "iTRAQ4plex-114 reporter+balance reagent acylated residue", "iTRAQ4plex-116 reporter+balance reagent acylated residue", "iTRAQ4plex-117 reporter+balance reagent N6-acylated lysine"],
        modifications: &[(Assumed::Fixed, "iTRAQ 4-plex of K"), (Assumed::Fixed, "iTRAQ 4-plex of peptide N-term"), (Assumed::Variable, "iTRAQ 4-plex of Y")],
    },
    MultiMapping {
        spellings: &["iTRAQ8plex", "iTRAQ8plex reporter+balance reagent acylated residue", "iTRAQ8plex-113 reporter+balance reagent acylated residue", "iTRAQ8plex-114 reporter+balance reagent N6-acylated lysine", "iTRAQ8plex-114 reporter+balance reagent O4&apos;-acylated tyrosine", "iTRAQ8plex-114 reporter+balance reagent O4'-acylated tyrosine", "iTRAQ8plex-114 reporter+balance reagent acylated N-terminal", "iTRAQ8plex-115 reporter+balance reagent acylated residue", "iTRAQ8plex-116 reporter+balance reagent acylated residue", "iTRAQ8plex:13C(6)15N(2)"],
        modifications: &[(Assumed::Fixed, "iTRAQ 8-plex of K"), (Assumed::Fixed, "iTRAQ 8-plex of peptide N-term"), (Assumed::Variable, "iTRAQ 8-plex of Y")],
    },
    MultiMapping {
        spellings: &["TMT2plex", "TMTduplex"],
        modifications: &[(Assumed::Fixed, "TMT 2-plex of K"), (Assumed::Fixed, "TMT 2-plex of peptide N-term")],
    },
    MultiMapping {
        spellings: &["TMT6plex", "TMT6plex-126 reporter+balance reagent acylated residue", "TMT6plex-131 reporter+balance reagent N6-acylated lysine"],
        modifications: &[(Assumed::Fixed, "TMT 6-plex of K"), (Assumed::Fixed, "TMT 6-plex of peptide N-term")],
    },
    MultiMapping {
        spellings: &["TMT10plex", "TMT10plex-126 reporter+balance reagent acylated residue", "TMT10plex-131 reporter+balance reagent N6-acylated lysine"],
        modifications: &[(Assumed::Fixed, "TMT 10-plex of K"), (Assumed::Fixed, "TMT 10-plex of peptide N-term")],
    },
    MultiMapping {
        spellings: &["Phosphorylation", "L-aspartic 4-phosphoric anhydride", "O-phosphorylated residue", "Phospho", "phosphorylated residue"],
        modifications: &[(Assumed::Variable, "Phosphorylation of S"), (Assumed::Variable, "Phosphorylation of T"), (Assumed::Variable, "Phosphorylation of Y")],
    },
    MultiMapping {
        spellings: &["Palmitoylation"],
        modifications: &[(Assumed::Variable, "Palmitoylation of C"), (Assumed::Variable, "Palmitoylation of K"), (Assumed::Variable, "Palmitoylation of S"), (Assumed::Variable, "Palmitoylation of T"), (Assumed::Variable, "Palmitoylation of protein N-term")],
    },
    MultiMapping {
        spellings: &["Formylation"],
        modifications: &[(Assumed::Variable, "Formylation of K"), (Assumed::Variable, "Formylation of S"), (Assumed::Variable, "Formylation of T"), (Assumed::Variable, "Formylation of peptide N-term")],
    },
    MultiMapping {
        spellings: &["Carbamylation", "carbamoylated residue"],
        modifications: &[(Assumed::Variable, "Carbamilation of K"), (Assumed::Variable, "Carbamilation of protein N-term")],
    },
    MultiMapping {
        spellings: &["3x(12)C labeled N6-propanoyl-L-lysine"],
        modifications: &[(Assumed::Variable, "Propionyl of K light"), (Assumed::Variable, "Propionyl of peptide N-term light")],
    },
    MultiMapping {
        spellings: &["3x(13)C labeled N6-propanoyl-L-lysine"],
        modifications: &[(Assumed::Variable, "Propionyl of K heavy"), (Assumed::Variable, "Propionyl of peptide N-term heavy")],
    },
    MultiMapping {
        spellings: &["3x(2)H residue methyl ester"],
        modifications: &[(Assumed::Variable, "Trideuterated Methyl Ester of D"), (Assumed::Variable, "Trideuterated Methyl Ester of E"), (Assumed::Variable, "Trideuterated Methyl Ester of K"), (Assumed::Variable, "Trideuterated Methyl Ester of R"), (Assumed::Variable, "Trideuterated Methyl Ester of peptide C-term")],
    },
    MultiMapping {
        spellings: &["6x(13)C labeled residue"],
        modifications: &[(Assumed::Variable, "Arginine 13C(6)"), (Assumed::Variable, "Lysine 13C(6)")],
    },
    MultiMapping {
        spellings: &["Acetyl", "N-acetylated residue", "N-acylated residue", "acetylated residue"],
        modifications: &[(Assumed::Variable, "Acetylation of K"), (Assumed::Variable, "Acetylation of peptide N-term")],
    },
    MultiMapping {
        spellings: &["dimethylated residue"],
        modifications: &[(Assumed::Variable, "Dimethylation of K"), (Assumed::Variable, "Dimethylation of R"), (Assumed::Variable, "Dimethylation of peptide N-term")],
    },
    MultiMapping {
        spellings: &["trimethylated residue"],
        modifications: &[(Assumed::Variable, "Trimethylation of K"), (Assumed::Variable, "Trimethylation of R"), (Assumed::Variable, "Trimethylation of protein N-term A")],
    },
    MultiMapping {
        spellings: &["Acetylation"],
        modifications: &[(Assumed::Variable, "Acetylation of K"), (Assumed::Variable, "Acetylation of peptide N-term")],
    },
    MultiMapping {
        spellings: &["Guanidination"],
        modifications: &[(Assumed::Variable, "Guanidination of K"), (Assumed::Variable, "Guanidination of peptide N-term")],
    },
    MultiMapping {
        spellings: &["Methylthio"],
        modifications: &[(Assumed::Variable, "Methylthio of N"), (Assumed::Variable, "Methylthio of D")],
    },
    MultiMapping {
        spellings: &["Sulfo", "sulfated residue"],
        modifications: &[(Assumed::Variable, "Sulfation of Y"), (Assumed::Variable, "Sulfation of S"), (Assumed::Variable, "Sulfation of T")],
    },
    MultiMapping {
        spellings: &["Deamination", "Deamidated", "deamidated L-glutamine", "deamidated residue", "deaminated residue"],
        modifications: &[(Assumed::Variable, "Deamidation of N"), (Assumed::Variable, "Deamidation of Q")],
    },
    MultiMapping {
        spellings: &["Dioxidation"],
        modifications: &[(Assumed::Variable, "Dioxidation of M"), (Assumed::Variable, "Dioxidation of W")],
    },
    MultiMapping {
        spellings: &["dehydrated residue", "Dehydratation"],
        modifications: &[(Assumed::Variable, "Dehydration of S"), (Assumed::Variable, "Dehydration of T")],
    },
    MultiMapping {
        spellings: &["No Modifications are included in the dataset"],
        modifications: &[],
    },
];

static SINGLE_MAPPINGS: &[SingleMapping] = &[
    SingleMapping {
        spellings: &["Carbamidomethyl", "S-carboxamidomethyl-L-cysteine", "iodoacetamide - site C", "iodoacetamide -site C", "iodoacetamide derivatized residue", "Iodoacetamide derivative"],
        modification: "Carbamidomethylation of C",
    },
    SingleMapping {
        spellings: &["Oxidation", "monohydroxylated residue", "oxidized residue"],
        modification: "Oxidation of M",
    },
    SingleMapping {
        spellings: &["Amidation"],
        modification: "Amidation of the peptide C-term",
    },
    SingleMapping {
        spellings: &["Carboxymethyl", "S-carboxymethyl-L-cysteine", "iodoacetic acid derivatized residue"],
        modification: "Carboxymethylation of C",
    },
    SingleMapping {
        spellings: &["Farnesylation"],
        modification: "Farnesylation of C",
    },
    SingleMapping {
        spellings: &["Geranyl-geranyl"],
        modification: "Geranyl-geranyl of C",
    },
    SingleMapping {
        spellings: &["Homoserine"],
        modification: "Homoserine of peptide C-term M",
    },
    SingleMapping {
        spellings: &["Homoserine lactone"],
        modification: "Homoserine lactone of peptide C-term M",
    },
    SingleMapping {
        spellings: &["ICAT-C", "Applied Biosystems cleavable ICAT(TM) light"],
        modification: "ICAT-O",
    },
    SingleMapping {
        spellings: &["ICAT-C:13C(9)", "Applied Biosystems cleavable ICAT(TM) heavy"],
        modification: "ICAT-9",
    },
    SingleMapping {
        spellings: &["Lipoyl"],
        modification: "Lipoyl of K",
    },
    SingleMapping {
        spellings: &["NIPCAM(C)"],
        modification: "NIPCAM of C",
    },
    SingleMapping {
        spellings: &["Propionamide(C)", "Acrylamide adduct"],
        modification: "Propionamide of C",
    },
    SingleMapping {
        spellings: &["Pyridylethyl"],
        modification: "Pyridylethyl of C",
    },
    SingleMapping {
        spellings: &["(18)O label at both C-terminal oxygens"],
        modification: "18O(2) of peptide C-term",
    },
    SingleMapping {
        spellings: &["(18)O monosubstituted residue"],
        modification: "18O(1) of peptide C-term",
    },
    SingleMapping {
        spellings: &["(4,4,5,5-(2)H4)-L-lysine"],
        modification: "Lysine 2H(4)",
    },
    SingleMapping {
        spellings: &["2-pyrrolidone-5-carboxylic acid (Gln)", "Ammonia-loss"],
        modification: "Pyrolidone from Q",
    },
    SingleMapping {
        spellings: &["2-pyrrolidone-5-carboxylic acid (Glu)", "Glu->pyro-Glu"],
        modification: "Pyrolidone from E",
    },
    SingleMapping {
        spellings: &["3-hydroxy-L-proline"],
        modification: "Oxidation of P",
    },
    SingleMapping {
        spellings: &["3x(2)H labeled L-aspartic acid 4-methyl ester"],
        modification: "Trideuterated Methyl Ester of D",
    },
    SingleMapping {
        spellings: &["4x(2)H labeled alpha-dimethylamino N-terminal residue"],
        modification: "Dimethylation of peptide N-term 2H(4)",
    },
    SingleMapping {
        spellings: &["4x(2)H labeled dimethylated L-lysine"],
        modification: "Dimethylation of K 2H(4)",
    },
    SingleMapping {
        spellings: &["5-methyl-L-arginine"],
        modification: "Methylation of R",
    },
    SingleMapping {
        spellings: &["6x(13)C labeled L-arginine"],
        modification: "Arginine 13C(6)",
    },
    SingleMapping {
        spellings: &["6x(13)C,4x(15)N labeled L-arginine"],
        modification: "Arginine 13C(6) 15N(4)",
    },
    SingleMapping {
        spellings: &["6x(13)C labeled L-lysine"],
        modification: "Lysine 13C(6)",
    },
    SingleMapping {
        spellings: &["6x(13)C,2x(15)N labeled L-lysine"],
        modification: "Lysine 13C(6) 15N(2)",
    },
    SingleMapping {
        spellings: &["L-aspartic acid 4-methyl ester"],
        modification: "Methylation of D",
    },
    SingleMapping {
        spellings: &["L-cysteic acid (L-cysteine sulfonic acid)"],
        modification: "Oxidation of C",
    },
    SingleMapping {
        spellings: &["L-cysteine glutathione disulfide"],
        modification: "Glutathione of C",
    },
    SingleMapping {
        spellings: &["L-cysteine methyl disulfide", "methyl methanethiosulfonate"],
        modification: "Methylthio of C",
    },
    SingleMapping {
        spellings: &["L-cystine (cross-link)"],
        modification: "Didehydro of T",
    },
    SingleMapping {
        spellings: &["L-glutamic acid 5-methyl ester (Glu)", "methylated glutamic acid"],
        modification: "Methylation of E",
    },
    SingleMapping {
        spellings: &["L-homoarginine"],
        modification: "Guanidination of K",
    },
    SingleMapping {
        spellings: &["L-methionine (R)-sulfoxide", "L-methionine (S)-sulfoxide", "L-methionine sulfoxide"],
        modification: "Oxidation of M",
    },
    SingleMapping {
        spellings: &["L-methionine sulfone"],
        modification: "Dioxidation of M",
    },
    SingleMapping {
        spellings: &["N-acetyl-L-asparagine", "N-acetyl-L-cysteine", "N-acetyl-L-glutamic acid", "N-acetyl-L-isoleucine", "N-acetyl-L-serine", "N-acetyl-L-tyrosine", "N2-acetyl-L-tryptophan", "alpha-amino acetylated residue"],
        modification: "Acetylation of protein N-term",
    },
    SingleMapping {
        spellings: &["N-acetylated L-lysine", "N6-acetyl-L-lysine"],
        modification: "Acetylation of K",
    },
    SingleMapping {
        spellings: &["N-ethylmaleimide derivatized cysteine"],
        modification: "Nethylmaleimide of C",
    },
    SingleMapping {
        spellings: &["N-formyl-L-methionine"],
        modification: "FormylMet of protein N-term",
    },
    SingleMapping {
        spellings: &["N-formylated residue"],
        modification: "Formylation of peptide N-term",
    },
    SingleMapping {
        spellings: &["N-methyl-L-serine"],
        modification: "Methylation of S",
    },
    SingleMapping {
        spellings: &["N6,N6-dimethyl-L-lysine"],
        modification: "Dimethylation of K",
    },
    SingleMapping {
        spellings: &["N6-formyl-L-lysine"],
        modification: "Formylation of K",
    },
    SingleMapping {
        spellings: &["N6-methyl-L-lysine", "methylated lysine", "monomethylated L-lysine"],
        modification: "Methylation of K",
    },
    SingleMapping {
        spellings: &["N6-propanoyl-L-lysine"],
        modification: "Propionyl of K light",
    },
    SingleMapping {
        spellings: &["O-(N-acetylamino)glucosyl-L-serine"],
        modification: "HexNAc of S",
    },
    SingleMapping {
        spellings: &["O-(N-acetylamino)glucosyl-L-threonine"],
        modification: "HexNAc of T",
    },
    SingleMapping {
        spellings: &["O-phospho-L-serine"],
        modification: "Phosphorylation of S",
    },
    SingleMapping {
        spellings: &["O-phospho-L-threonine"],
        modification: "Phosphorylation of T",
    },
    SingleMapping {
        spellings: &["O4&apos;-phospho-L-tyrosine", "O4'-phospho-L-tyrosine"],
        modification: "Phosphorylation of Y",
    },
    SingleMapping {
        spellings: &["S-carboxamidoethyl-L-cysteine"],
        modification: "Propionamide of C",
    },
    SingleMapping {
        spellings: &["S-methyl-L-cysteine"],
        modification: "Methylation of C",
    },
    SingleMapping {
        spellings: &["alpha-amino dimethylated residue"],
        modification: "Dimethylation of peptide N-term",
    },
    SingleMapping {
        spellings: &["amidated residue"],
        modification: "Amidation of the peptide C-term",
    },
    SingleMapping {
        spellings: &["deamidated L-asparagine", "deglycosylated asparagine"],
        modification: "Deamidation of N",
    },
    SingleMapping {
        spellings: &["dihydroxylated residue - site W"],
        modification: "Dioxidation of W",
    },
    SingleMapping {
        spellings: &["diiodinated residue"],
        modification: "Diiodination of Y",
    },
    SingleMapping {
        spellings: &["hydroxylated lysine", "monohydroxylated lysine"],
        modification: "Oxidation of K",
    },
    SingleMapping {
        spellings: &["iodoacetamide -site E", "iodoacetamide - site E"],
        modification: "Carbamidomethylation of E",
    },
    SingleMapping {
        spellings: &["iodoacetamide N6-derivatized lysine"],
        modification: "Carbamidomethylation of K",
    },
    SingleMapping {
        spellings: &["monomethylated L-aspartic acid"],
        modification: "Methylation of D",
    },
    SingleMapping {
        spellings: &["thioacylation of primary amines - site N-term"],
        modification: "Thioacyl of peptide N-term",
    },
    SingleMapping {
        spellings: &["ubiquitination signature dipeptidyl lysine"],
        modification: "Ubiquitination of K",
    },
    SingleMapping {
        spellings: &["Label:13C(6)15N(2)"],
        modification: "Lysine 13C(6) 15N(2)",
    },
];

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn single_mapping() {
        let registry = ModificationRegistry::default();
        let mut parameters = ModificationParameters::new();
        let mut unknown = Vec::new();
        let report =
            registry.convert_pride_modification("Carbamidomethyl", &mut parameters, &mut unknown, true);
        assert_eq!(report, "<br>Carbamidomethylation of C (assumed fixed)");
        assert_eq!(parameters.fixed_modifications(), ["Carbamidomethylation of C"]);
        assert!(unknown.is_empty());
        // Already present, nothing to report
        let report =
            registry.convert_pride_modification("carbamidomethyl", &mut parameters, &mut unknown, false);
        assert!(report.is_empty());
        assert!(parameters.variable_modifications().is_empty());
    }

    #[test]
    fn single_mapping_variable() {
        let registry = ModificationRegistry::default();
        let mut parameters = ModificationParameters::new();
        let mut unknown = Vec::new();
        let report =
            registry.convert_pride_modification("OXIDATION", &mut parameters, &mut unknown, false);
        assert_eq!(report, "<br>Oxidation of M (assumed variable)");
        assert_eq!(parameters.variable_modifications(), ["Oxidation of M"]);
    }

    #[test]
    fn multi_mapping() {
        let registry = ModificationRegistry::default();
        let mut parameters = ModificationParameters::new();
        let mut unknown = Vec::new();
        let report =
            registry.convert_pride_modification("iTRAQ4plex", &mut parameters, &mut unknown, false);
        assert_eq!(
            report,
            "<br>iTRAQ 4-plex of K (assumed fixed)<br>iTRAQ 4-plex of peptide N-term (assumed fixed)<br>iTRAQ 4-plex of Y (assumed variable)"
        );
        assert_eq!(
            parameters.fixed_modifications(),
            ["iTRAQ 4-plex of K", "iTRAQ 4-plex of peptide N-term"]
        );
        assert_eq!(parameters.variable_modifications(), ["iTRAQ 4-plex of Y"]);
        // The unescaped spelling maps the same way
        assert_eq!(
            pride_mapping("iTRAQ4plex-114 reporter+balance reagent O4'-acylated tyrosine"),
            pride_mapping("iTRAQ4plex")
        );
    }

    #[test]
    fn no_modifications() {
        let registry = ModificationRegistry::default();
        let mut parameters = ModificationParameters::new();
        let mut unknown = Vec::new();
        let report = registry.convert_pride_modification(
            "No Modifications are included in the dataset",
            &mut parameters,
            &mut unknown,
            true,
        );
        assert!(report.is_empty());
        assert!(unknown.is_empty());
        assert!(parameters.all_modifications().is_empty());
    }

    #[test]
    fn unknown_is_recorded_once() {
        let registry = ModificationRegistry::default();
        let mut parameters = ModificationParameters::new();
        let mut unknown = Vec::new();
        for _ in 0..2 {
            let report =
                registry.convert_pride_modification("Frobnication", &mut parameters, &mut unknown, true);
            assert!(report.is_empty());
        }
        assert_eq!(unknown, ["Frobnication"]);
    }

    #[test]
    fn all_targets_are_known() {
        let registry = ModificationRegistry::default();
        for name in MULTI_MAPPINGS
            .iter()
            .flat_map(|m| m.modifications.iter().map(|(_, name)| *name))
            .chain(SINGLE_MAPPINGS.iter().map(|m| m.modification))
        {
            assert!(registry.contains(name), "{name}");
        }
    }
}
