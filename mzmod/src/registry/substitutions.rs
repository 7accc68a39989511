//! Amino acid substitutions expressed as modifications, eg `K->R`
use crate::{
    modification::{Modification, ModificationCategory, ModificationType},
    sequence::{AminoAcid, AminoAcidPattern},
};

/// A modification turning the `from` residue into the `to` residue, `None` if both residues
/// have the same composition (I and L)
pub(crate) fn substitution(from: AminoAcid, to: AminoAcid) -> Option<Modification> {
    let difference = &to.residue_formula() - &from.residue_formula();
    if difference.is_empty() {
        return None;
    }
    let (added, removed) = difference.split_signs();
    let category = if from.nucleotide_distance(to) == 1 {
        ModificationCategory::NucleotideSubstitutionOne
    } else {
        ModificationCategory::NucleotideSubstitutionTwoPlus
    };
    Some(Modification::new(
        ModificationType::AminoAcid,
        format!("{}->{}", from.one_letter_code(), to.one_letter_code()),
        format!("{}>{}", from.one_letter_code(), to.one_letter_code()),
        added,
        removed,
        AminoAcidPattern::single(from),
        category,
    ))
}

/// All substitutions between two different standard amino acids
pub(crate) fn substitutions() -> Vec<Modification> {
    AminoAcid::STANDARD
        .iter()
        .flat_map(|from| {
            AminoAcid::STANDARD
                .iter()
                .filter(move |to| *to != from)
                .filter_map(move |to| substitution(*from, *to))
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use uom::si::mass::dalton;

    use super::*;
    use crate::{chemistry::MolecularFormula, molecular_formula};

    #[test]
    fn all_pairs() {
        let all = substitutions();
        // 20 * 19 ordered pairs, without I->L and L->I
        assert_eq!(all.len(), 378);
        assert!(all.iter().all(|m| m.pattern.len() == 1));
        assert!(!all.iter().any(|m| m.name == "I->L" || m.name == "L->I"));
    }

    #[test]
    fn composition() {
        let k_to_r = substitution(AminoAcid::Lysine, AminoAcid::Arginine).unwrap();
        assert_eq!(k_to_r.name, "K->R");
        assert_eq!(k_to_r.short_name, "K>R");
        assert_eq!(k_to_r.added, molecular_formula!(N 2));
        assert_eq!(k_to_r.removed, MolecularFormula::default());
        assert!((k_to_r.monoisotopic_mass().get::<dalton>() - 28.006_148).abs() < 1e-5);
        assert_eq!(
            k_to_r.category,
            ModificationCategory::NucleotideSubstitutionOne
        );

        let g_to_a = substitution(AminoAcid::Glycine, AminoAcid::Alanine).unwrap();
        assert_eq!(g_to_a.added, molecular_formula!(C 1 H 2));

        let a_to_g = substitution(AminoAcid::Alanine, AminoAcid::Glycine).unwrap();
        assert_eq!(a_to_g.added, MolecularFormula::default());
        assert_eq!(a_to_g.removed, molecular_formula!(C 1 H 2));

        assert!(substitution(AminoAcid::Isoleucine, AminoAcid::Leucine).is_none());
    }

    #[test]
    fn categories() {
        let w_to_a = substitution(AminoAcid::Tryptophan, AminoAcid::Alanine).unwrap();
        assert_eq!(
            w_to_a.category,
            ModificationCategory::NucleotideSubstitutionTwoPlus
        );
    }
}
