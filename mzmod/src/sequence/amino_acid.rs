use std::{fmt::Display, str::FromStr};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::{chemistry::MolecularFormula, molecular_formula};

/// An amino acid that can be targeted by a modification
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum AminoAcid {
    /// Ala, A
    #[default]
    Alanine = 0,
    /// Arg, R
    Arginine,
    /// Asn, N
    Asparagine,
    /// Asp, D
    AsparticAcid,
    /// Cys, C
    Cysteine,
    /// Gln, Q
    Glutamine,
    /// Glu, E
    GlutamicAcid,
    /// Gly, G
    Glycine,
    /// His, H
    Histidine,
    /// Ile, I
    Isoleucine,
    /// Leu, L
    Leucine,
    /// Lys, K
    Lysine,
    /// Met, M
    Methionine,
    /// Phe, F
    Phenylalanine,
    /// Pro, P
    Proline,
    /// Ser, S
    Serine,
    /// Thr, T
    Threonine,
    /// Trp, W
    Tryptophan,
    /// Tyr, Y
    Tyrosine,
    /// Val, V
    Valine,
    /// Sec, U
    Selenocysteine,
    /// Pyl, O
    Pyrrolysine,
}

impl AminoAcid {
    /// The 20 standard amino acids, in the order of their full names
    pub const STANDARD: &'static [Self] = &[
        Self::Alanine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::Glutamine,
        Self::GlutamicAcid,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Leucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
    ];

    /// All amino acids, the standard ones followed by selenocysteine and pyrrolysine
    pub const ALL: &'static [Self] = &[
        Self::Alanine,
        Self::Arginine,
        Self::Asparagine,
        Self::AsparticAcid,
        Self::Cysteine,
        Self::Glutamine,
        Self::GlutamicAcid,
        Self::Glycine,
        Self::Histidine,
        Self::Isoleucine,
        Self::Leucine,
        Self::Lysine,
        Self::Methionine,
        Self::Phenylalanine,
        Self::Proline,
        Self::Serine,
        Self::Threonine,
        Self::Tryptophan,
        Self::Tyrosine,
        Self::Valine,
        Self::Selenocysteine,
        Self::Pyrrolysine,
    ];

    /// The one letter code
    pub const fn one_letter_code(self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::Glutamine => 'Q',
            Self::GlutamicAcid => 'E',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
            Self::Selenocysteine => 'U',
            Self::Pyrrolysine => 'O',
        }
    }

    /// The three letter code
    pub const fn three_letter_code(self) -> &'static str {
        match self {
            Self::Alanine => "Ala",
            Self::Arginine => "Arg",
            Self::Asparagine => "Asn",
            Self::AsparticAcid => "Asp",
            Self::Cysteine => "Cys",
            Self::Glutamine => "Gln",
            Self::GlutamicAcid => "Glu",
            Self::Glycine => "Gly",
            Self::Histidine => "His",
            Self::Isoleucine => "Ile",
            Self::Leucine => "Leu",
            Self::Lysine => "Lys",
            Self::Methionine => "Met",
            Self::Phenylalanine => "Phe",
            Self::Proline => "Pro",
            Self::Serine => "Ser",
            Self::Threonine => "Thr",
            Self::Tryptophan => "Trp",
            Self::Tyrosine => "Tyr",
            Self::Valine => "Val",
            Self::Selenocysteine => "Sec",
            Self::Pyrrolysine => "Pyl",
        }
    }

    /// The composition of this amino acid as residue in a peptide chain (the free amino acid
    /// minus one water)
    pub fn residue_formula(self) -> MolecularFormula {
        match self {
            Self::Alanine => molecular_formula!(C 3 H 5 N 1 O 1),
            Self::Arginine => molecular_formula!(C 6 H 12 N 4 O 1),
            Self::Asparagine => molecular_formula!(C 4 H 6 N 2 O 2),
            Self::AsparticAcid => molecular_formula!(C 4 H 5 N 1 O 3),
            Self::Cysteine => molecular_formula!(C 3 H 5 N 1 O 1 S 1),
            Self::Glutamine => molecular_formula!(C 5 H 8 N 2 O 2),
            Self::GlutamicAcid => molecular_formula!(C 5 H 7 N 1 O 3),
            Self::Glycine => molecular_formula!(C 2 H 3 N 1 O 1),
            Self::Histidine => molecular_formula!(C 6 H 7 N 3 O 1),
            Self::Isoleucine | Self::Leucine => molecular_formula!(C 6 H 11 N 1 O 1),
            Self::Lysine => molecular_formula!(C 6 H 12 N 2 O 1),
            Self::Methionine => molecular_formula!(C 5 H 9 N 1 O 1 S 1),
            Self::Phenylalanine => molecular_formula!(C 9 H 9 N 1 O 1),
            Self::Proline => molecular_formula!(C 5 H 7 N 1 O 1),
            Self::Serine => molecular_formula!(C 3 H 5 N 1 O 2),
            Self::Threonine => molecular_formula!(C 4 H 7 N 1 O 2),
            Self::Tryptophan => molecular_formula!(C 11 H 10 N 2 O 1),
            Self::Tyrosine => molecular_formula!(C 9 H 9 N 1 O 2),
            Self::Valine => molecular_formula!(C 5 H 9 N 1 O 1),
            Self::Selenocysteine => molecular_formula!(C 3 H 5 N 1 O 1 Se 1),
            Self::Pyrrolysine => molecular_formula!(C 12 H 19 N 3 O 2),
        }
    }

    /// The DNA codons coding for this amino acid according to the standard codon table.
    /// Selenocysteine and pyrrolysine are encoded by recoded stop codons (TGA and TAG).
    /// <https://en.wikipedia.org/wiki/DNA_and_RNA_codon_tables>
    pub const fn codons(self) -> &'static [&'static str] {
        match self {
            Self::Alanine => &["GCT", "GCC", "GCA", "GCG"],
            Self::Arginine => &["CGT", "CGC", "CGA", "CGG", "AGA", "AGG"],
            Self::Asparagine => &["AAT", "AAC"],
            Self::AsparticAcid => &["GAT", "GAC"],
            Self::Cysteine => &["TGT", "TGC"],
            Self::Glutamine => &["CAA", "CAG"],
            Self::GlutamicAcid => &["GAA", "GAG"],
            Self::Glycine => &["GGT", "GGC", "GGA", "GGG"],
            Self::Histidine => &["CAT", "CAC"],
            Self::Isoleucine => &["ATT", "ATC", "ATA"],
            Self::Leucine => &["TTA", "TTG", "CTT", "CTC", "CTA", "CTG"],
            Self::Lysine => &["AAA", "AAG"],
            Self::Methionine => &["ATG"],
            Self::Phenylalanine => &["TTT", "TTC"],
            Self::Proline => &["CCT", "CCC", "CCA", "CCG"],
            Self::Serine => &["TCT", "TCC", "TCA", "TCG", "AGT", "AGC"],
            Self::Threonine => &["ACT", "ACC", "ACA", "ACG"],
            Self::Tryptophan => &["TGG"],
            Self::Tyrosine => &["TAT", "TAC"],
            Self::Valine => &["GTT", "GTC", "GTA", "GTG"],
            Self::Selenocysteine => &["TGA"],
            Self::Pyrrolysine => &["TAG"],
        }
    }

    /// The smallest number of nucleotides that have to change to turn a codon of this amino
    /// acid into a codon of the other amino acid
    pub fn nucleotide_distance(self, other: Self) -> usize {
        self.codons()
            .iter()
            .flat_map(|a| {
                other.codons().iter().map(move |b| {
                    a.bytes()
                        .zip(b.bytes())
                        .filter(|(x, y)| x != y)
                        .count()
                })
            })
            .min()
            .unwrap_or(3)
    }
}

impl Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_letter_code())
    }
}

impl TryFrom<char> for AminoAcid {
    type Error = BoxedError<'static, BasicKind>;
    fn try_from(value: char) -> Result<Self, Self::Error> {
        let upper = value.to_ascii_uppercase();
        Self::ALL
            .iter()
            .find(|aa| aa.one_letter_code() == upper)
            .copied()
            .ok_or_else(|| {
                BoxedError::new(
                    BasicKind::Error,
                    "Invalid amino acid",
                    "This character is not a known amino acid one letter code",
                    Context::show(value.to_string()),
                )
            })
    }
}

impl FromStr for AminoAcid {
    type Err = BoxedError<'static, BasicKind>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Self::ALL
                .iter()
                .find(|aa| aa.three_letter_code().eq_ignore_ascii_case(s))
                .copied()
                .ok_or_else(|| {
                    BoxedError::new(
                        BasicKind::Error,
                        "Invalid amino acid",
                        "Use a one letter or three letter amino acid code",
                        Context::show(s.to_string()),
                    )
                }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use uom::si::mass::dalton;

    use super::*;

    #[test]
    fn residue_masses() {
        for (aa, mass) in [
            (AminoAcid::Glycine, 57.021_464),
            (AminoAcid::Lysine, 128.094_963),
            (AminoAcid::Tryptophan, 186.079_313),
            (AminoAcid::Cysteine, 103.009_185),
        ] {
            assert!(
                (aa.residue_formula().monoisotopic_mass().get::<dalton>() - mass).abs() < 1e-5,
                "{aa}"
            );
        }
    }

    #[test]
    fn codes() {
        assert_eq!("K".parse::<AminoAcid>().unwrap(), AminoAcid::Lysine);
        assert_eq!("s".parse::<AminoAcid>().unwrap(), AminoAcid::Serine);
        assert_eq!("Trp".parse::<AminoAcid>().unwrap(), AminoAcid::Tryptophan);
        assert!("B".parse::<AminoAcid>().is_err());
        assert!("Xyz".parse::<AminoAcid>().is_err());
        assert_eq!(AminoAcid::STANDARD.len(), 20);
    }

    #[test]
    fn codons_are_unique() {
        let mut all = AminoAcid::ALL
            .iter()
            .flat_map(|aa| aa.codons())
            .collect::<Vec<_>>();
        let len = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), len);
        // 61 sense codons plus the two recoded stops
        assert_eq!(len, 63);
    }

    #[test]
    fn nucleotide_distance() {
        assert_eq!(AminoAcid::Lysine.nucleotide_distance(AminoAcid::Arginine), 1);
        assert_eq!(AminoAcid::Tryptophan.nucleotide_distance(AminoAcid::Alanine), 2);
        assert_eq!(AminoAcid::Methionine.nucleotide_distance(AminoAcid::Methionine), 0);
    }
}
