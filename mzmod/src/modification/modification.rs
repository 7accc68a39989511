use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thin_vec::ThinVec;
use uom::si::mass::dalton;

use crate::{
    chemistry::{Mass, MolecularFormula, NeutralLoss, ReporterIon},
    ontology::CvTerm,
    sequence::AminoAcidPattern,
};

/// The number of decimals used for the ambiguity key and the textual representation
const ROUNDED_DECIMALS: u8 = 6;

/// The suffix added to the name of the single amino acid variant of a pattern modification
pub const SINGLE_AA_SUFFIX: &str = "|single_aa";

/// The location a modification can be placed on
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum ModificationType {
    /// Placed on a particular amino acid anywhere in the sequence
    #[default]
    AminoAcid,
    /// Placed on the protein N-terminus
    ProteinNTerm,
    /// Placed on the protein N-terminus, only when the pattern matches there
    ProteinNTermAminoAcid,
    /// Placed on the protein C-terminus
    ProteinCTerm,
    /// Placed on the protein C-terminus, only when the pattern matches there
    ProteinCTermAminoAcid,
    /// Placed on the peptide N-terminus
    PeptideNTerm,
    /// Placed on the peptide N-terminus, only when the pattern matches there
    PeptideNTermAminoAcid,
    /// Placed on the peptide C-terminus
    PeptideCTerm,
    /// Placed on the peptide C-terminus, only when the pattern matches there
    PeptideCTermAminoAcid,
}

impl ModificationType {
    /// All modification types
    pub const ALL: &'static [Self] = &[
        Self::AminoAcid,
        Self::ProteinNTerm,
        Self::ProteinNTermAminoAcid,
        Self::ProteinCTerm,
        Self::ProteinCTermAminoAcid,
        Self::PeptideNTerm,
        Self::PeptideNTermAminoAcid,
        Self::PeptideCTerm,
        Self::PeptideCTermAminoAcid,
    ];

    /// The short code, eg `modaa` or `modn_peptide`
    pub const fn code(self) -> &'static str {
        match self {
            Self::AminoAcid => "modaa",
            Self::ProteinNTerm => "modn_protein",
            Self::ProteinNTermAminoAcid => "modnaa_protein",
            Self::ProteinCTerm => "modc_protein",
            Self::ProteinCTermAminoAcid => "modcaa_protein",
            Self::PeptideNTerm => "modn_peptide",
            Self::PeptideNTermAminoAcid => "modnaa_peptide",
            Self::PeptideCTerm => "modc_peptide",
            Self::PeptideCTermAminoAcid => "modcaa_peptide",
        }
    }

    /// Get the type from its short code
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().find(|t| t.code() == code).copied()
    }

    /// A human readable description of the location
    pub const fn description(self) -> &'static str {
        match self {
            Self::AminoAcid => "Particular amino acid(s)",
            Self::ProteinNTerm | Self::ProteinNTermAminoAcid => "Protein N terminus",
            Self::ProteinCTerm | Self::ProteinCTermAminoAcid => "Protein C terminus",
            Self::PeptideNTerm | Self::PeptideNTermAminoAcid => "Peptide N terminus",
            Self::PeptideCTerm | Self::PeptideCTermAminoAcid => "Peptide C terminus",
        }
    }

    /// Check if the modification is placed on a terminus
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AminoAcid)
    }

    /// Check if the location depends on the amino acid pattern
    pub const fn has_pattern(self) -> bool {
        matches!(
            self,
            Self::AminoAcid
                | Self::ProteinNTermAminoAcid
                | Self::ProteinCTermAminoAcid
                | Self::PeptideNTermAminoAcid
                | Self::PeptideCTermAminoAcid
        )
    }
}

impl Display for ModificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// The broad category of a modification, used to group modifications for users
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum ModificationCategory {
    /// Common modifications, the ones most searches consider
    Common,
    /// Common biological modifications
    CommonBiological,
    /// Common artefacts of the sample preparation
    CommonArtifact,
    /// Less common modifications
    LessCommon,
    /// Isotopic and isobaric labels
    Labeling,
    /// Glycosylations
    Glyco,
    /// Metal adducts
    Metal,
    /// Amino acid substitutions caused by a single nucleotide change
    NucleotideSubstitutionOne,
    /// Amino acid substitutions needing two or more nucleotide changes
    NucleotideSubstitutionTwoPlus,
    /// Anything else, used for user defined modifications
    #[default]
    Other,
}

impl ModificationCategory {
    /// All categories
    pub const ALL: &'static [Self] = &[
        Self::Common,
        Self::CommonBiological,
        Self::CommonArtifact,
        Self::LessCommon,
        Self::Labeling,
        Self::Glyco,
        Self::Metal,
        Self::NucleotideSubstitutionOne,
        Self::NucleotideSubstitutionTwoPlus,
        Self::Other,
    ];
}

impl Display for ModificationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Common => "Common",
                Self::CommonBiological => "Common Biological",
                Self::CommonArtifact => "Common Artifact",
                Self::LessCommon => "Less Common",
                Self::Labeling => "Labeling",
                Self::Glyco => "Glyco",
                Self::Metal => "Metal",
                Self::NucleotideSubstitutionOne => "Nucleotide Substitution One",
                Self::NucleotideSubstitutionTwoPlus => "Nucleotide Substitution Two Plus",
                Self::Other => "Other",
            }
        )
    }
}

/// A named modification: a change in composition placed on a site in a peptide.
///
/// The name is the identity of a modification in a [`crate::registry::ModificationRegistry`].
/// The composition change is stored as the formula that is `added` and the formula that is
/// `removed`, both with positive counts.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Hash, Serialize)]
pub struct Modification {
    /// Where the modification is placed
    pub modification_type: ModificationType,
    /// The unique name
    pub name: String,
    /// A short name or tag
    pub short_name: String,
    /// The composition that is added
    pub added: MolecularFormula,
    /// The composition that is removed
    pub removed: MolecularFormula,
    /// The targeted amino acids, empty if the modification can be placed on any amino acid
    pub pattern: AminoAcidPattern,
    /// The category
    pub category: ModificationCategory,
    /// The cross-reference into Unimod
    pub unimod: Option<CvTerm>,
    /// The cross-reference into PSI-MOD
    pub psi_mod: Option<CvTerm>,
    /// The neutral losses that can be observed for this modification
    pub neutral_losses: ThinVec<NeutralLoss>,
    /// The reporter ions that can be observed for this modification
    pub reporter_ions: ThinVec<ReporterIon>,
}

impl Modification {
    /// Create a new modification without cross-references, neutral losses, or reporter ions
    pub fn new(
        modification_type: ModificationType,
        name: impl Into<String>,
        short_name: impl Into<String>,
        added: MolecularFormula,
        removed: MolecularFormula,
        pattern: AminoAcidPattern,
        category: ModificationCategory,
    ) -> Self {
        Self {
            modification_type,
            name: name.into(),
            short_name: short_name.into(),
            added,
            removed,
            pattern,
            category,
            unimod: None,
            psi_mod: None,
            neutral_losses: ThinVec::new(),
            reporter_ions: ThinVec::new(),
        }
    }

    /// Set the Unimod cross-reference
    #[must_use]
    pub fn with_unimod(self, id: usize, name: impl Into<String>) -> Self {
        Self {
            unimod: Some(CvTerm::unimod(id, name)),
            ..self
        }
    }

    /// Set the PSI-MOD cross-reference, the term name is the name of this modification
    #[must_use]
    pub fn with_psi_mod(self, id: usize) -> Self {
        let term = CvTerm::psi_mod(id, self.name.clone());
        Self {
            psi_mod: Some(term),
            ..self
        }
    }

    /// Add neutral losses
    #[must_use]
    pub fn with_neutral_losses(mut self, losses: impl IntoIterator<Item = NeutralLoss>) -> Self {
        self.neutral_losses.extend(losses);
        self
    }

    /// Add reporter ions
    #[must_use]
    pub fn with_reporter_ions(mut self, ions: impl IntoIterator<Item = ReporterIon>) -> Self {
        self.reporter_ions.extend(ions);
        self
    }

    /// The mass difference caused by this modification
    pub fn monoisotopic_mass(&self) -> Mass {
        self.added.monoisotopic_mass() - self.removed.monoisotopic_mass()
    }

    /// The mass difference in dalton rounded to the given number of decimals
    pub fn rounded_mass(&self, decimals: u8) -> f64 {
        let factor = 10_f64.powi(i32::from(decimals));
        (self.monoisotopic_mass().get::<dalton>() * factor).round() / factor
    }

    /// A key that is shared by all modifications with the same mass, use this to find
    /// modifications that cannot be distinguished by mass
    pub fn ambiguity_key(&self) -> String {
        format!(
            "{:.*}",
            usize::from(ROUNDED_DECIMALS),
            self.rounded_mass(ROUNDED_DECIMALS)
        )
    }

    /// Check if both modifications add and remove the same composition
    pub fn is_same_atomic_composition(&self, other: &Self) -> bool {
        self.added == other.added && self.removed == other.removed
    }

    /// Check if both modifications target the same pattern
    pub fn is_same_pattern(&self, other: &Self) -> bool {
        self.pattern.is_same_as(&other.pattern)
    }

    /// Check if both modifications are chemically the same: same type, same pattern, and same
    /// composition. The names and cross-references are not considered.
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.modification_type == other.modification_type
            && self.is_same_pattern(other)
            && self.is_same_atomic_composition(other)
    }

    /// Check if this modification can be searched by standard search engines, meaning that it
    /// targets at most a single amino acid position
    pub fn is_standard_search(&self) -> bool {
        self.pattern.standard_search_pattern()
    }

    /// For a modification with a complex pattern, get a variant that only targets the residues at
    /// the target position named `<name>|single_aa`. Standard modifications are returned as is.
    #[must_use]
    pub fn single_aa_variant(&self) -> Self {
        if self.is_standard_search() {
            self.clone()
        } else {
            Self {
                name: format!("{}{SINGLE_AA_SUFFIX}", self.name),
                pattern: self.pattern.target_only(),
                ..self.clone()
            }
        }
    }

    /// Short description as HTML, intended as a tooltip
    pub fn tooltip(&self) -> String {
        let mut tooltip = format!(
            "<html>Name: {}<br>Mass: {}<br>Type: {}<br>",
            self.name,
            self.rounded_mass(4),
            self.modification_type.description()
        );
        if !self.pattern.residues_at_target().is_empty() {
            tooltip.push_str("Target: ");
            tooltip.push_str(&self.pattern.to_string());
        }
        tooltip.push_str("</html>");
        tooltip
    }

    /// A description of the targeted site
    pub fn target_description(&self) -> String {
        match self.modification_type {
            ModificationType::AminoAcid => self.pattern.to_string(),
            ModificationType::ProteinNTerm => "Protein N-terminus".to_string(),
            ModificationType::ProteinNTermAminoAcid => {
                format!("Protein N-terminus starting with {}", self.pattern)
            }
            ModificationType::ProteinCTerm => "Protein C-terminus".to_string(),
            ModificationType::ProteinCTermAminoAcid => {
                format!("Protein C-terminus ending with {}", self.pattern)
            }
            ModificationType::PeptideNTerm => "Peptide N-terminus".to_string(),
            ModificationType::PeptideNTermAminoAcid => {
                format!("Peptide N-terminus starting with {}", self.pattern)
            }
            ModificationType::PeptideCTerm => "Peptide C-terminus".to_string(),
            ModificationType::PeptideCTermAminoAcid => {
                format!("Peptide C-terminus ending with {}", self.pattern)
            }
        }
    }
}

impl Display for Modification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.short_name.is_empty() {
            write!(f, "({})", self.short_name)?;
        }
        write!(f, "\t")?;
        if !self.added.is_empty() {
            write!(f, "+{{{}}}", self.added)?;
        }
        if !self.removed.is_empty() {
            write!(f, "-{{{}}}", self.removed)?;
        }
        write!(
            f,
            " ({:+.*}) targeting {}",
            usize::from(ROUNDED_DECIMALS),
            self.rounded_mass(ROUNDED_DECIMALS),
            self.target_description()
        )
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use crate::{molecular_formula, sequence::AminoAcid};

    fn phospho() -> Modification {
        Modification::new(
            ModificationType::AminoAcid,
            "Phosphorylation of S",
            "p",
            molecular_formula!(H 1 P 1 O 3),
            MolecularFormula::default(),
            AminoAcidPattern::single(AminoAcid::Serine),
            ModificationCategory::Common,
        )
        .with_unimod(21, "Phospho")
        .with_psi_mod(46)
    }

    #[test]
    fn masses() {
        let modification = phospho();
        assert!((modification.rounded_mass(4) - 79.9663).abs() < 1e-9);
        assert_eq!(modification.ambiguity_key(), "79.966331");
        let dehydration = Modification::new(
            ModificationType::AminoAcid,
            "Dehydration of S",
            "-h2o",
            MolecularFormula::default(),
            molecular_formula!(H 2 O 1),
            AminoAcidPattern::single(AminoAcid::Serine),
            ModificationCategory::CommonArtifact,
        );
        assert!((dehydration.rounded_mass(4) + 18.0106).abs() < 1e-9);
        assert!(dehydration.to_string().contains("(-18.010565)"));
    }

    #[test]
    fn sameness() {
        let a = phospho();
        let mut b = phospho();
        b.name = "Phospho".to_string();
        b.unimod = None;
        assert!(a.is_same_as(&b));
        b.pattern = AminoAcidPattern::single(AminoAcid::Threonine);
        assert!(a.is_same_atomic_composition(&b));
        assert!(!a.is_same_as(&b));
        b.pattern = a.pattern.clone();
        b.modification_type = ModificationType::PeptideNTermAminoAcid;
        assert!(!a.is_same_as(&b));
    }

    #[test]
    fn cross_references() {
        let modification = phospho();
        assert_eq!(modification.psi_mod.as_ref().unwrap().accession, "MOD:00046");
        assert_eq!(
            modification.psi_mod.as_ref().unwrap().name,
            "Phosphorylation of S"
        );
        assert_eq!(modification.unimod.as_ref().unwrap().accession, "UNIMOD:21");
    }

    #[test]
    fn text() {
        let modification = phospho();
        assert_eq!(
            modification.tooltip(),
            "<html>Name: Phosphorylation of S<br>Mass: 79.9663<br>Type: Particular amino acid(s)<br>Target: S</html>"
        );
        assert_eq!(
            modification.to_string(),
            "Phosphorylation of S(p)\t+{H1O3P1} (+79.966331) targeting S"
        );
    }

    #[test]
    fn single_aa() {
        let mut glyco = phospho();
        glyco.name = "N-linked motif".to_string();
        glyco.pattern = "N[ACDEFGHIKLMNQRSTVWY][ST]".parse().unwrap();
        assert!(!glyco.is_standard_search());
        let single = glyco.single_aa_variant();
        assert_eq!(single.name, "N-linked motif|single_aa");
        assert!(single.is_standard_search());
        assert_eq!(single.pattern.to_string(), "N");
        assert_eq!(phospho().single_aa_variant(), phospho());
    }

    #[test]
    fn type_codes() {
        for t in ModificationType::ALL {
            assert_eq!(ModificationType::from_code(t.code()), Some(*t));
        }
        assert_eq!(ModificationType::from_code("modx"), None);
    }
}
