use std::{fmt::Display, str::FromStr};

use context_error::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::sequence::AminoAcid;

/// The site a modification can be placed on: a sequence of positions, each allowing one or more
/// amino acids, with one position marked as the target that carries the modification.
///
/// An empty pattern matches any site, which is used for terminal modifications.
///
/// ```
/// # use mzmod::sequence::{AminoAcid, AminoAcidPattern};
/// let motif: AminoAcidPattern = "[ST]P".parse().unwrap();
/// assert_eq!(motif.len(), 2);
/// assert_eq!(motif.residues_at_target(), &[AminoAcid::Serine, AminoAcid::Threonine]);
/// assert_eq!(motif.to_string(), "[ST]P");
/// ```
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AminoAcidPattern {
    positions: Vec<Vec<AminoAcid>>,
    target: usize,
}

impl AminoAcidPattern {
    /// A pattern without any positions
    pub const fn empty() -> Self {
        Self {
            positions: Vec::new(),
            target: 0,
        }
    }

    /// A pattern of a single position allowing only this amino acid
    pub fn single(amino_acid: AminoAcid) -> Self {
        Self {
            positions: vec![vec![amino_acid]],
            target: 0,
        }
    }

    /// A pattern of a single position allowing any of these amino acids
    pub fn from_residues(amino_acids: impl IntoIterator<Item = AminoAcid>) -> Self {
        let residues = amino_acids.into_iter().sorted().dedup().collect_vec();
        if residues.is_empty() {
            Self::empty()
        } else {
            Self {
                positions: vec![residues],
                target: 0,
            }
        }
    }

    /// Set the index of the position that carries the modification. Returns `None` if the index
    /// is outside of the pattern.
    #[must_use]
    pub fn with_target(self, target: usize) -> Option<Self> {
        (target < self.positions.len() || (self.positions.is_empty() && target == 0))
            .then_some(Self { target, ..self })
    }

    /// The number of positions
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if this pattern has no positions
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The index of the targeted position
    pub const fn target(&self) -> usize {
        self.target
    }

    /// All positions
    pub fn positions(&self) -> &[Vec<AminoAcid>] {
        &self.positions
    }

    /// The amino acids allowed at the targeted position, empty for an empty pattern
    pub fn residues_at_target(&self) -> &[AminoAcid] {
        self.positions.get(self.target).map_or(&[], Vec::as_slice)
    }

    /// A pattern of only the targeted position
    #[must_use]
    pub fn target_only(&self) -> Self {
        Self::from_residues(self.residues_at_target().iter().copied())
    }

    /// Check if this pattern can be used in a standard search, meaning that only the targeted
    /// residue is considered
    pub fn standard_search_pattern(&self) -> bool {
        self.positions.len() <= 1
    }

    /// Check if both patterns describe the same sites, ignoring the order of the amino acids
    /// within a position
    pub fn is_same_as(&self, other: &Self) -> bool {
        self.positions.len() == other.positions.len()
            && (self.is_empty() || self.target == other.target)
            && self.positions.iter().zip(&other.positions).all(|(a, b)| {
                a.iter().sorted().dedup().eq(b.iter().sorted().dedup())
            })
    }

    /// Check if the given sequence matches this pattern when the target is placed on `index`
    pub fn matches_at(&self, sequence: &[AminoAcid], index: usize) -> bool {
        if self.is_empty() {
            return index < sequence.len();
        }
        let Some(start) = index.checked_sub(self.target) else {
            return false;
        };
        start + self.positions.len() <= sequence.len()
            && self
                .positions
                .iter()
                .zip(&sequence[start..])
                .all(|(allowed, aa)| allowed.contains(aa))
    }
}

impl From<AminoAcid> for AminoAcidPattern {
    fn from(value: AminoAcid) -> Self {
        Self::single(value)
    }
}

impl Display for AminoAcidPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for position in &self.positions {
            if position.len() == 1 {
                write!(f, "{}", position[0])?;
            } else {
                write!(f, "[{}]", position.iter().join(""))?;
            }
        }
        Ok(())
    }
}

impl FromStr for AminoAcidPattern {
    type Err = BoxedError<'static, BasicKind>;
    /// Parse a pattern like `K` or `[ST]P`, the target is the first position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut positions = Vec::new();
        let mut chars = s.trim().char_indices();
        while let Some((index, c)) = chars.next() {
            if c == '[' {
                let mut group = Vec::new();
                loop {
                    match chars.next() {
                        Some((_, ']')) => break,
                        Some((_, c)) => group.push(AminoAcid::try_from(c)?),
                        None => {
                            return Err(BoxedError::new(
                                BasicKind::Error,
                                "Invalid amino acid pattern",
                                "This group of amino acids is never closed",
                                Context::line(None, s, index, 1).to_owned(),
                            ));
                        }
                    }
                }
                if group.is_empty() {
                    return Err(BoxedError::new(
                        BasicKind::Error,
                        "Invalid amino acid pattern",
                        "A group of amino acids cannot be empty",
                        Context::line(None, s, index, 2).to_owned(),
                    ));
                }
                positions.push(group.into_iter().sorted().dedup().collect());
            } else {
                positions.push(vec![AminoAcid::try_from(c)?]);
            }
        }
        Ok(Self {
            positions,
            target: 0,
        })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let pattern: AminoAcidPattern = "K".parse().unwrap();
        assert_eq!(pattern, AminoAcidPattern::single(AminoAcid::Lysine));
        assert!(pattern.standard_search_pattern());
        let motif: AminoAcidPattern = "N[ACDEFGHIKLMNQRSTVWY][ST]".parse().unwrap();
        assert_eq!(motif.len(), 3);
        assert!(!motif.standard_search_pattern());
        assert_eq!(motif.residues_at_target(), &[AminoAcid::Asparagine]);
        assert!("[ST".parse::<AminoAcidPattern>().is_err());
        assert!("[]".parse::<AminoAcidPattern>().is_err());
        assert!("KZ".parse::<AminoAcidPattern>().is_err());
        assert!("".parse::<AminoAcidPattern>().unwrap().is_empty());
    }

    #[test]
    fn same_as_ignores_order() {
        let a = AminoAcidPattern::from_residues([AminoAcid::Threonine, AminoAcid::Serine]);
        let b: AminoAcidPattern = "[ST]".parse().unwrap();
        assert!(a.is_same_as(&b));
        assert!(!a.is_same_as(&AminoAcidPattern::single(AminoAcid::Serine)));
        assert!(AminoAcidPattern::empty().is_same_as(&AminoAcidPattern::default()));
    }

    #[test]
    fn target() {
        let motif: AminoAcidPattern = "P[ST]".parse().unwrap();
        assert!(motif.clone().with_target(2).is_none());
        let motif = motif.with_target(1).unwrap();
        assert_eq!(motif.target_only().to_string(), "[ST]");
        let sequence = [AminoAcid::Glycine, AminoAcid::Proline, AminoAcid::Threonine];
        assert!(motif.matches_at(&sequence, 2));
        assert!(!motif.matches_at(&sequence, 1));
        assert!(!motif.matches_at(&sequence, 0));
    }
}
