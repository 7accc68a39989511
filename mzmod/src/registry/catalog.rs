//! The modifications every registry starts out with
use crate::{
    chemistry::{MolecularFormula, NeutralLoss, ReporterIon},
    modification::{
        Modification,
        ModificationCategory::{self, *},
        ModificationType,
    },
    molecular_formula,
    sequence::{AminoAcid, AminoAcidPattern},
};

fn modification(
    modification_type: ModificationType,
    name: &str,
    short_name: &str,
    added: MolecularFormula,
    removed: MolecularFormula,
    target: Option<AminoAcid>,
    category: ModificationCategory,
) -> Modification {
    Modification::new(
        modification_type,
        name,
        short_name,
        added,
        removed,
        target.map_or_else(AminoAcidPattern::empty, AminoAcidPattern::single),
        category,
    )
}

fn neutral_losses(names: &[&str]) -> Vec<NeutralLoss> {
    names
        .iter()
        .filter_map(|name| NeutralLoss::built_in(name))
        .collect()
}

fn reporter_ions(names: &[&str]) -> Vec<ReporterIon> {
    names
        .iter()
        .filter_map(|name| ReporterIon::built_in(name))
        .collect()
}

/// The curated default modifications, in the order they are listed in the registry
pub(crate) fn default_modifications() -> Vec<Modification> {
    vec![
        modification(
            ModificationType::AminoAcid,
            "Acetylation of K",
            "ace",
            molecular_formula!(C 2 H 2 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Common,
        )
        .with_unimod(1, "Acetyl")
        .with_psi_mod(723)
        .with_reporter_ions(reporter_ions(&["aceK126", "aceK143"])),
        modification(
            ModificationType::PeptideNTerm,
            "Acetylation of peptide N-term",
            "ace",
            molecular_formula!(C 2 H 2 O 1),
            molecular_formula!(),
            None,
            Common,
        )
        .with_unimod(1, "Acetyl")
        .with_psi_mod(1458),
        modification(
            ModificationType::ProteinNTerm,
            "Acetylation of protein N-term",
            "ace",
            molecular_formula!(C 2 H 2 O 1),
            molecular_formula!(),
            None,
            Common,
        )
        .with_unimod(1, "Acetyl")
        .with_psi_mod(1458),
        modification(
            ModificationType::AminoAcid,
            "Carbamidomethylation of C",
            "cmm",
            molecular_formula!(C 2 H 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            Common,
        )
        .with_unimod(4, "Carbamidomethyl")
        .with_psi_mod(1060),
        modification(
            ModificationType::AminoAcid,
            "Carbamidomethylation of E",
            "cmm",
            molecular_formula!(C 2 H 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::GlutamicAcid),
            CommonArtifact,
        )
        .with_unimod(4, "Carbamidomethyl")
        .with_psi_mod(1216),
        modification(
            ModificationType::AminoAcid,
            "Carbamidomethylation of K",
            "cmm",
            molecular_formula!(C 2 H 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonArtifact,
        )
        .with_unimod(4, "Carbamidomethyl")
        .with_psi_mod(1212),
        modification(
            ModificationType::AminoAcid,
            "Oxidation of M",
            "ox",
            molecular_formula!(O 1),
            molecular_formula!(),
            Some(AminoAcid::Methionine),
            Common,
        )
        .with_unimod(35, "Oxidation")
        .with_neutral_losses(neutral_losses(&["CH4OS"])),
        modification(
            ModificationType::AminoAcid,
            "Oxidation of P",
            "ox",
            molecular_formula!(O 1),
            molecular_formula!(),
            Some(AminoAcid::Proline),
            CommonArtifact,
        )
        .with_unimod(35, "Oxidation")
        .with_psi_mod(39),
        modification(
            ModificationType::AminoAcid,
            "Oxidation of K",
            "ox",
            molecular_formula!(O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonArtifact,
        )
        .with_unimod(35, "Oxidation")
        .with_psi_mod(1047),
        modification(
            ModificationType::AminoAcid,
            "Oxidation of C",
            "ox",
            molecular_formula!(O 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(35, "Oxidation"),
        modification(
            ModificationType::AminoAcid,
            "Dioxidation of M",
            "diox",
            molecular_formula!(O 2),
            molecular_formula!(),
            Some(AminoAcid::Methionine),
            CommonArtifact,
        )
        .with_unimod(425, "Dioxidation")
        .with_psi_mod(428),
        modification(
            ModificationType::AminoAcid,
            "Dioxidation of W",
            "diox",
            molecular_formula!(O 2),
            molecular_formula!(),
            Some(AminoAcid::Tryptophan),
            CommonArtifact,
        )
        .with_unimod(425, "Dioxidation")
        .with_psi_mod(428),
        modification(
            ModificationType::AminoAcid,
            "Trioxidation of C",
            "triox",
            molecular_formula!(O 3),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(345, "Trioxidation")
        .with_psi_mod(460),
        modification(
            ModificationType::AminoAcid,
            "Phosphorylation of S",
            "p",
            molecular_formula!(H 1 P 1 O 3),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            Common,
        )
        .with_unimod(21, "Phospho")
        .with_psi_mod(46)
        .with_neutral_losses(neutral_losses(&["H3PO4"])),
        modification(
            ModificationType::AminoAcid,
            "Phosphorylation of T",
            "p",
            molecular_formula!(H 1 P 1 O 3),
            molecular_formula!(),
            Some(AminoAcid::Threonine),
            Common,
        )
        .with_unimod(21, "Phospho")
        .with_psi_mod(47)
        .with_neutral_losses(neutral_losses(&["H3PO4"])),
        modification(
            ModificationType::AminoAcid,
            "Phosphorylation of Y",
            "p",
            molecular_formula!(H 1 P 1 O 3),
            molecular_formula!(),
            Some(AminoAcid::Tyrosine),
            Common,
        )
        .with_unimod(21, "Phospho")
        .with_psi_mod(48)
        .with_neutral_losses(neutral_losses(&["HPO3"]))
        .with_reporter_ions(reporter_ions(&["pY"])),
        modification(
            ModificationType::AminoAcid,
            "Arginine 13C(6)",
            "*",
            molecular_formula!([13 C 6]),
            molecular_formula!(C 6),
            Some(AminoAcid::Arginine),
            Labeling,
        )
        .with_unimod(188, "Label:13C(6)")
        .with_psi_mod(1331),
        modification(
            ModificationType::AminoAcid,
            "Arginine 13C(6) 15N(4)",
            "*",
            molecular_formula!([13 C 6] [15 N 4]),
            molecular_formula!(C 6 N 4),
            Some(AminoAcid::Arginine),
            Labeling,
        )
        .with_unimod(267, "Label:13C(6)15N(4)")
        .with_psi_mod(587),
        modification(
            ModificationType::AminoAcid,
            "Lysine 2H(4)",
            "*",
            molecular_formula!([2 H 4]),
            molecular_formula!(H 4),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(481, "Label:2H(4)")
        .with_psi_mod(942),
        modification(
            ModificationType::AminoAcid,
            "Lysine 13C(6)",
            "*",
            molecular_formula!([13 C 6]),
            molecular_formula!(C 6),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(188, "Label:13C(6)")
        .with_psi_mod(1334),
        modification(
            ModificationType::AminoAcid,
            "Lysine 13C(6) 15N(2)",
            "*",
            molecular_formula!([13 C 6] [15 N 2]),
            molecular_formula!(C 6 N 2),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(259, "Label:13C(6)15N(2)")
        .with_psi_mod(582),
        modification(
            ModificationType::AminoAcid,
            "Proline 13C(5)",
            "*",
            molecular_formula!([13 C 5]),
            molecular_formula!(C 5),
            Some(AminoAcid::Proline),
            Labeling,
        )
        .with_unimod(772, "Label:13C(5)")
        .with_psi_mod(1297),
        modification(
            ModificationType::AminoAcid,
            "4-Hydroxyproline",
            "hydroxy",
            molecular_formula!(C 5 H 9 N 1),
            molecular_formula!(),
            Some(AminoAcid::Proline),
            CommonBiological,
        ),
        modification(
            ModificationType::AminoAcid,
            "Leucine 13C(6) 15N(1)",
            "*",
            molecular_formula!([13 C 6] [15 N 1]),
            molecular_formula!(C 6 N 1),
            Some(AminoAcid::Leucine),
            Labeling,
        )
        .with_unimod(695, "Label:13C(6)15N(1)")
        .with_psi_mod(1285),
        modification(
            ModificationType::AminoAcid,
            "Isoleucine 13C(6) 15N(1)",
            "*",
            molecular_formula!([13 C 6] [15 N 1]),
            molecular_formula!(C 6 N 1),
            Some(AminoAcid::Isoleucine),
            Labeling,
        )
        .with_unimod(695, "Label:13C(6)15N(1)")
        .with_psi_mod(1286),
        modification(
            ModificationType::AminoAcid,
            "Label of K 2H(4)",
            "2H(4)",
            molecular_formula!([2 H 4]),
            molecular_formula!(H 4),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(481, "Label:2H(4)")
        .with_psi_mod(942),
        modification(
            ModificationType::AminoAcid,
            "Dimethylation of K 2H(4)",
            "dimeth4",
            molecular_formula!(C 2 [2 H 4]),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(199, "Dimethyl:2H(4)")
        .with_psi_mod(1254),
        modification(
            ModificationType::AminoAcid,
            "Dimethylation of K 2H(6)",
            "dimeth6",
            molecular_formula!([2 H 6] C 2),
            molecular_formula!(H 2),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(1291, "Dimethyl:2H(6)"),
        modification(
            ModificationType::AminoAcid,
            "Dimethylation of K 2H(6) 13C(2)",
            "dimeth8",
            molecular_formula!([13 C 2] [2 H 6]),
            molecular_formula!(H 2),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(330, "Dimethyl:2H(6)13C(2)"),
        modification(
            ModificationType::PeptideNTerm,
            "Dimethylation of peptide N-term 2H(4)",
            "dimeth4",
            molecular_formula!(C 2 [2 H 4]),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(199, "Dimethyl:2H(4)"),
        modification(
            ModificationType::PeptideNTerm,
            "Dimethylation of peptide N-term 2H(6)",
            "dimeth6",
            molecular_formula!(C 2 [2 H 6]),
            molecular_formula!(H 2),
            None,
            Labeling,
        )
        .with_unimod(1291, "Dimethyl:2H(6)"),
        modification(
            ModificationType::PeptideNTerm,
            "Dimethylation of peptide N-term 2H(6) 13C(2)",
            "dimeth8",
            molecular_formula!([13 C 2] [2 H 6]),
            molecular_formula!(H 2),
            None,
            Labeling,
        )
        .with_unimod(330, "Dimethyl:2H(6)13C(2)"),
        modification(
            ModificationType::PeptideCTerm,
            "18O(2) of peptide C-term",
            "18O",
            molecular_formula!([18 O 2]),
            molecular_formula!(O 2),
            None,
            Labeling,
        )
        .with_unimod(193, "Label:18O(2)")
        .with_psi_mod(546),
        modification(
            ModificationType::PeptideCTerm,
            "18O(1) of peptide C-term",
            "18O",
            molecular_formula!([18 O 1]),
            molecular_formula!(O 1),
            None,
            Labeling,
        )
        .with_unimod(258, "Label:18O(1)")
        .with_psi_mod(581),
        modification(
            ModificationType::AminoAcid,
            "ICAT-O",
            "*",
            molecular_formula!(C 10 H 17 N 3 O 3),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            Labeling,
        )
        .with_unimod(105, "ICAT-C")
        .with_psi_mod(480),
        modification(
            ModificationType::AminoAcid,
            "ICAT-9",
            "*",
            molecular_formula!([13 C 9] C 1 H 17 N 3 O 3),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            Labeling,
        )
        .with_unimod(106, "ICAT-C:13C(9)")
        .with_psi_mod(481),
        modification(
            ModificationType::AminoAcid,
            "ICPL0 of K",
            "icpl0",
            molecular_formula!(C 6 H 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(365, "ICPL")
        .with_psi_mod(1230),
        modification(
            ModificationType::PeptideNTerm,
            "ICPL0 of peptide N-term",
            "icpl0",
            molecular_formula!(C 6 H 3 N 1 O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(365, "ICPL"),
        modification(
            ModificationType::AminoAcid,
            "ICPL4 of K",
            "icpl4",
            molecular_formula!(C 6 [2 H 4] N 1 O 1),
            molecular_formula!(H 1),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(687, "ICPL:2H(4)")
        .with_psi_mod(1359),
        modification(
            ModificationType::PeptideNTerm,
            "ICPL4 of peptide N-term",
            "icpl4",
            molecular_formula!(C 6 [2 H 4] N 1 O 1),
            molecular_formula!(H 1),
            None,
            Labeling,
        )
        .with_unimod(687, "ICPL:2H(4)")
        .with_psi_mod(1358),
        modification(
            ModificationType::AminoAcid,
            "ICPL6 of K",
            "icpl6",
            molecular_formula!([13 C 6] H 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(364, "ICPL:13C(6)"),
        modification(
            ModificationType::PeptideNTerm,
            "ICPL6 of peptide N-term",
            "icpl6",
            molecular_formula!([13 C 6] H 3 N 1 O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(364, "ICPL:13C(6)"),
        modification(
            ModificationType::AminoAcid,
            "ICPL10 of K",
            "icpl10",
            molecular_formula!([13 C 6] [2 H 4] N 1 O 1),
            molecular_formula!(H 1),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(866, "ICPL:13C(6)2H(4)")
        .with_psi_mod(1287),
        modification(
            ModificationType::PeptideNTerm,
            "ICPL10 of peptide N-term",
            "icpl10",
            molecular_formula!([13 C 6] [2 H 4] N 1 O 1),
            molecular_formula!(H 1),
            None,
            Labeling,
        )
        .with_unimod(866, "ICPL:13C(6)2H(4)"),
        modification(
            ModificationType::AminoAcid,
            "mTRAQ of K light",
            "mTRAQ0",
            molecular_formula!(C 7 H 12 N 2 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(888, "mTRAQ")
        .with_psi_mod(1863),
        modification(
            ModificationType::PeptideNTerm,
            "mTRAQ of peptide N-term light",
            "mTRAQ0",
            molecular_formula!(C 7 H 12 N 2 O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(888, "mTRAQ")
        .with_psi_mod(1863),
        modification(
            ModificationType::AminoAcid,
            "mTRAQ of K 13C(3) 15N",
            "mTRAQ4",
            molecular_formula!(C 4 [13 C 3] H 12 N 1 [15 N 1] O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(889, "mTRAQ:13C(3)15N(1)")
        .with_psi_mod(1863),
        modification(
            ModificationType::PeptideNTerm,
            "mTRAQ of peptide N-term 13C(3) 15N",
            "mTRAQ4",
            molecular_formula!(C 4 [13 C 3] H 12 N 1 [15 N 1] O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(889, "mTRAQ:13C(3)15N(1)")
        .with_psi_mod(1863),
        modification(
            ModificationType::AminoAcid,
            "mTRAQ of 13C(6) 15N(2)",
            "mTRAQ8",
            molecular_formula!(C 1 [13 C 6] H 12 [15 N 2] O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(1302, "mTRAQ:13C(6)15N(2)")
        .with_psi_mod(1863),
        modification(
            ModificationType::PeptideNTerm,
            "mTRAQ of peptide N-term 13C(6) 15N(2)",
            "mTRAQ8",
            molecular_formula!(C 1 [13 C 6] H 12 [15 N 2] O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(1302, "mTRAQ:13C(6)15N(2)")
        .with_psi_mod(1863),
        modification(
            ModificationType::PeptideNTerm,
            "iTRAQ 4-plex of peptide N-term",
            "iTRAQ",
            molecular_formula!(C 4 [13 C 3] H 12 N 1 [15 N 1] O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(214, "iTRAQ4plex")
        .with_psi_mod(1518)
        .with_reporter_ions(reporter_ions(&[
            "iTRAQ4Plex_114",
            "iTRAQ4Plex_115",
            "iTRAQ4Plex_116",
            "iTRAQ4Plex_117",
        ])),
        modification(
            ModificationType::AminoAcid,
            "iTRAQ 4-plex of K",
            "iTRAQ",
            molecular_formula!(C 4 [13 C 3] H 12 N 1 [15 N 1] O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(214, "iTRAQ4plex")
        .with_psi_mod(1518)
        .with_reporter_ions(reporter_ions(&[
            "iTRAQ4Plex_114",
            "iTRAQ4Plex_115",
            "iTRAQ4Plex_116",
            "iTRAQ4Plex_117",
        ])),
        modification(
            ModificationType::AminoAcid,
            "iTRAQ 4-plex of Y",
            "iTRAQ",
            molecular_formula!(C 4 [13 C 3] H 12 N 1 [15 N 1] O 1),
            molecular_formula!(),
            Some(AminoAcid::Tyrosine),
            Labeling,
        )
        .with_unimod(214, "iTRAQ4plex")
        .with_psi_mod(1518)
        .with_reporter_ions(reporter_ions(&[
            "iTRAQ4Plex_114",
            "iTRAQ4Plex_115",
            "iTRAQ4Plex_116",
            "iTRAQ4Plex_117",
        ])),
        modification(
            ModificationType::PeptideNTerm,
            "iTRAQ 8-plex of peptide N-term",
            "iTRAQ",
            molecular_formula!(C 8 [13 C 6] H 24 N 2 [15 N 2] O 3),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(730, "iTRAQ8plex")
        .with_psi_mod(1526)
        .with_reporter_ions(reporter_ions(&[
            "iTRAQ8Plex_113",
            "iTRAQ8Plex_114",
            "iTRAQ8Plex_115",
            "iTRAQ8Plex_116",
            "iTRAQ8Plex_117",
            "iTRAQ8Plex_118",
            "iTRAQ8Plex_119",
            "iTRAQ8Plex_121",
        ])),
        modification(
            ModificationType::AminoAcid,
            "iTRAQ 8-plex of K",
            "iTRAQ",
            molecular_formula!(C 8 [13 C 6] H 24 N 2 [15 N 2] O 3),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(730, "iTRAQ8plex")
        .with_psi_mod(1526)
        .with_reporter_ions(reporter_ions(&[
            "iTRAQ8Plex_113",
            "iTRAQ8Plex_114",
            "iTRAQ8Plex_115",
            "iTRAQ8Plex_116",
            "iTRAQ8Plex_117",
            "iTRAQ8Plex_118",
            "iTRAQ8Plex_119",
            "iTRAQ8Plex_121",
        ])),
        modification(
            ModificationType::AminoAcid,
            "iTRAQ 8-plex of Y",
            "iTRAQ",
            molecular_formula!(C 8 [13 C 6] H 24 N 2 [15 N 2] O 3),
            molecular_formula!(),
            Some(AminoAcid::Tyrosine),
            Labeling,
        )
        .with_unimod(730, "iTRAQ8plex")
        .with_psi_mod(1526)
        .with_reporter_ions(reporter_ions(&[
            "iTRAQ8Plex_113",
            "iTRAQ8Plex_114",
            "iTRAQ8Plex_115",
            "iTRAQ8Plex_116",
            "iTRAQ8Plex_117",
            "iTRAQ8Plex_118",
            "iTRAQ8Plex_119",
            "iTRAQ8Plex_121",
        ])),
        modification(
            ModificationType::PeptideNTerm,
            "TMT 2-plex of peptide N-term",
            "TMT",
            molecular_formula!(C 11 [13 C 1] H 20 N 2 O 2),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(738, "TMT2plex")
        .with_reporter_ions(reporter_ions(&["TMT_126", "TMT_127C", "TMT_126_ETD"])),
        modification(
            ModificationType::AminoAcid,
            "TMT 2-plex of K",
            "TMT",
            molecular_formula!(C 11 [13 C 1] H 20 N 2 O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(738, "TMT2plex")
        .with_reporter_ions(reporter_ions(&["TMT_126", "TMT_127C", "TMT_126_ETD"])),
        modification(
            ModificationType::PeptideNTerm,
            "TMT 6-plex of peptide N-term",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(737, "TMT6plex")
        .with_psi_mod(1715)
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127N",
            "TMT_128C",
            "TMT_129N",
            "TMT_130C",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 6-plex of K",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(737, "TMT6plex")
        .with_psi_mod(1715)
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127N",
            "TMT_128C",
            "TMT_129N",
            "TMT_130C",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 6-plex of K+4",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 16 [2 H 4] N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127N",
            "TMT_128C",
            "TMT_129N",
            "TMT_130C",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 6-plex of K+6",
            "TMT",
            molecular_formula!(C 2 [13 C 10] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127N",
            "TMT_128C",
            "TMT_129N",
            "TMT_130C",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 6-plex of K+8",
            "TMT",
            molecular_formula!(C 2 [13 C 10] H 20 [15 N 3] O 2),
            molecular_formula!(N 1),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127N",
            "TMT_128C",
            "TMT_129N",
            "TMT_130C",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::PeptideNTerm,
            "TMT 10-plex of peptide N-term",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(737, "TMT6plex")
        .with_psi_mod(1715)
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 10-plex of K",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(737, "TMT6plex")
        .with_psi_mod(1715)
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 10-plex of K+4",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 16 [2 H 4] N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 10-plex of K+6",
            "TMT",
            molecular_formula!(C 2 [13 C 10] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 10-plex of K+8",
            "TMT",
            molecular_formula!(C 2 [13 C 10] H 20 [15 N 3] O 2),
            molecular_formula!(N 1),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
        ])),
        modification(
            ModificationType::PeptideNTerm,
            "TMT 11-plex of peptide N-term",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(737, "TMT6plex")
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_131C",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
            "TMT_131C_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 11-plex of K",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(737, "TMT6plex")
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_131C",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
            "TMT_131C_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 11-plex of K+4",
            "TMT",
            molecular_formula!(C 8 [13 C 4] H 16 [2 H 4] N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
            "TMT_131C_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 11-plex of K+6",
            "TMT",
            molecular_formula!(C 2 [13 C 10] H 20 N 1 [15 N 1] O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
            "TMT_131C_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "TMT 11-plex of K+8",
            "TMT",
            molecular_formula!(C 2 [13 C 10] H 20 [15 N 3] O 2),
            molecular_formula!(N 1),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_reporter_ions(reporter_ions(&[
            "TMT_126",
            "TMT_127C",
            "TMT_127N",
            "TMT_128C",
            "TMT_128N",
            "TMT_129C",
            "TMT_129N",
            "TMT_130C",
            "TMT_130N",
            "TMT_131",
            "TMT_126_ETD",
            "TMT_127C_ETD",
            "TMT_127N_ETD",
            "TMT_128C_ETD",
            "TMT_128N_ETD",
            "TMT_129C_ETD",
            "TMT_129N_ETD",
            "TMT_130C_ETD",
            "TMT_130N_ETD",
            "TMT_131_ETD",
            "TMT_131C_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "iodoTMT zero of C",
            "iodoTMT",
            molecular_formula!(H 28 C 16 N 4 O 3),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            Labeling,
        )
        .with_unimod(1341, "iodoTMT")
        .with_reporter_ions(reporter_ions(&["iodoTMT_zero", "iodoTMT_zero_ETD"])),
        modification(
            ModificationType::AminoAcid,
            "iodoTMT 6-plex of C",
            "iodoTMT",
            molecular_formula!(H 28 C 12 [13 C 4] N 3 [15 N 1] O 3),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            Labeling,
        )
        .with_unimod(1342, "iodoTMT")
        .with_reporter_ions(reporter_ions(&[
            "iodoTMT_126",
            "iodoTMT_127",
            "iodoTMT_128",
            "iodoTMT_129",
            "iodoTMT_130",
            "iodoTMT_131",
            "iodoTMT_126_ETD",
            "iodoTMT_127_ETD",
            "iodoTMT_128_ETD",
            "iodoTMT_129_ETD",
            "iodoTMT_130_ETD",
            "iodoTMT_131_ETD",
        ])),
        modification(
            ModificationType::AminoAcid,
            "Ubiquitination of K",
            "ub",
            molecular_formula!(C 4 H 6 N 2 O 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_unimod(121, "GG")
        .with_psi_mod(492),
        modification(
            ModificationType::AminoAcid,
            "Methylation of K",
            "meth",
            molecular_formula!(C 1 H 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_unimod(34, "Methyl")
        .with_psi_mod(85),
        modification(
            ModificationType::AminoAcid,
            "Methylation of R",
            "meth",
            molecular_formula!(C 1 H 2),
            molecular_formula!(),
            Some(AminoAcid::Arginine),
            CommonBiological,
        )
        .with_unimod(34, "Methyl")
        .with_psi_mod(414)
        .with_reporter_ions(reporter_ions(&["metR70", "metR87", "metR112", "metR115", "metR143"])),
        modification(
            ModificationType::AminoAcid,
            "Methylation of E",
            "meth",
            molecular_formula!(C 1 H 2),
            molecular_formula!(),
            Some(AminoAcid::GlutamicAcid),
            CommonBiological,
        )
        .with_unimod(34, "Methyl")
        .with_psi_mod(81),
        modification(
            ModificationType::AminoAcid,
            "Methylation of C",
            "meth",
            molecular_formula!(C 1 H 2),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonBiological,
        )
        .with_unimod(34, "Methyl")
        .with_psi_mod(660),
        modification(
            ModificationType::AminoAcid,
            "Methylation of D",
            "meth",
            molecular_formula!(C 1 H 2),
            molecular_formula!(),
            Some(AminoAcid::AsparticAcid),
            CommonBiological,
        )
        .with_unimod(34, "Methyl")
        .with_psi_mod(79),
        modification(
            ModificationType::AminoAcid,
            "Methylation of S",
            "meth",
            molecular_formula!(C 1 H 2),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            CommonBiological,
        )
        .with_unimod(34, "Methyl")
        .with_psi_mod(1782),
        modification(
            ModificationType::AminoAcid,
            "Dimethylation of K",
            "dimeth",
            molecular_formula!(C 2 H 4),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_unimod(36, "Dimethyl")
        .with_psi_mod(84),
        modification(
            ModificationType::PeptideNTerm,
            "Dimethylation of peptide N-term",
            "dimeth",
            molecular_formula!(C 2 H 4),
            molecular_formula!(),
            None,
            CommonBiological,
        )
        .with_unimod(36, "Dimethyl")
        .with_psi_mod(1686),
        modification(
            ModificationType::AminoAcid,
            "Dimethylation of R",
            "dimeth",
            molecular_formula!(C 2 H 4),
            molecular_formula!(),
            Some(AminoAcid::Arginine),
            CommonBiological,
        )
        .with_unimod(36, "Dimethyl")
        .with_psi_mod(783)
        .with_reporter_ions(reporter_ions(&["dimetR112", "dimetR115", "dimetR157"])),
        modification(
            ModificationType::AminoAcid,
            "Trimethylation of K",
            "trimeth",
            molecular_formula!(C 3 H 6),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_unimod(37, "Trimethyl")
        .with_psi_mod(855)
        .with_neutral_losses(neutral_losses(&["C3H9N"])),
        modification(
            ModificationType::AminoAcid,
            "Trimethylation of R",
            "trimeth",
            molecular_formula!(C 3 H 6),
            molecular_formula!(),
            Some(AminoAcid::Arginine),
            CommonBiological,
        )
        .with_unimod(37, "Trimethyl")
        .with_psi_mod(1669),
        modification(
            ModificationType::ProteinNTermAminoAcid,
            "Trimethylation of protein N-term A",
            "trimeth",
            molecular_formula!(C 3 H 6),
            molecular_formula!(),
            Some(AminoAcid::Alanine),
            CommonBiological,
        )
        .with_unimod(37, "Trimethyl")
        .with_psi_mod(1687),
        modification(
            ModificationType::PeptideNTermAminoAcid,
            "Pyrolidone from E",
            "pyro",
            molecular_formula!(),
            molecular_formula!(O 1 H 2),
            Some(AminoAcid::GlutamicAcid),
            Common,
        )
        .with_unimod(27, "Glu->pyro-Glu")
        .with_psi_mod(420),
        modification(
            ModificationType::PeptideNTermAminoAcid,
            "Pyrolidone from Q",
            "pyro",
            molecular_formula!(),
            molecular_formula!(N 1 H 3),
            Some(AminoAcid::Glutamine),
            Common,
        )
        .with_unimod(28, "Gln->pyro-Glu")
        .with_psi_mod(40),
        modification(
            ModificationType::PeptideNTermAminoAcid,
            "Pyrolidone from carbamidomethylated C",
            "pyro",
            molecular_formula!(),
            molecular_formula!(N 1 H 3),
            Some(AminoAcid::Cysteine),
            Common,
        )
        .with_unimod(385, "Ammonia-loss"),
        modification(
            ModificationType::AminoAcid,
            "HexNAc of S",
            "glyco",
            molecular_formula!(C 8 H 13 N 1 O 5),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            Glyco,
        )
        .with_unimod(43, "HexNAc"),
        modification(
            ModificationType::AminoAcid,
            "HexNAc of T",
            "glyco",
            molecular_formula!(C 8 H 13 N 1 O 5),
            molecular_formula!(),
            Some(AminoAcid::Threonine),
            Glyco,
        )
        .with_unimod(43, "HexNAc"),
        modification(
            ModificationType::AminoAcid,
            "Hex(1)NAc(1) of S",
            "glyco",
            molecular_formula!(C 14 H 23 N 1 O 10),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            Glyco,
        )
        .with_unimod(793, "Hex(1)HexNAc(1)"),
        modification(
            ModificationType::AminoAcid,
            "Hex(1)NAc(1) of T",
            "glyco",
            molecular_formula!(C 14 H 23 N 1 O 10),
            molecular_formula!(),
            Some(AminoAcid::Threonine),
            Glyco,
        )
        .with_unimod(793, "Hex(1)HexNAc(1)"),
        modification(
            ModificationType::AminoAcid,
            "Hexose of K",
            "hex",
            molecular_formula!(C 6 H 10 O 5),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Glyco,
        )
        .with_unimod(41, "Hex")
        .with_psi_mod(1347),
        modification(
            ModificationType::AminoAcid,
            "Hex(5) HexNAc(4) NeuAc(2) of N",
            "glyco",
            molecular_formula!(C 84 H 136 O 61 N 6),
            molecular_formula!(),
            Some(AminoAcid::Asparagine),
            Glyco,
        ),
        modification(
            ModificationType::AminoAcid,
            "Hex(5) HexNAc(4) NeuAc(2) Na of N",
            "glyco",
            molecular_formula!(C 84 H 135 O 61 N 6 Na 1),
            molecular_formula!(),
            Some(AminoAcid::Asparagine),
            Glyco,
        )
        .with_unimod(1408, "Hex(5)HexNAc(4)NeuAc(2)"),
        modification(
            ModificationType::AminoAcid,
            "SUMO-2/3 Q87R",
            "sumo",
            molecular_formula!(C 18 H 29 N 7 O 8),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_psi_mod(1149)
        .with_reporter_ions(reporter_ions(&[
            "QQ",
            "QQ-H2O",
            "QQT",
            "QQT-H2O",
            "QQTG",
            "QQTG-H2O",
            "QQTGG",
            "QQTGG-H2O",
        ])),
        modification(
            ModificationType::AminoAcid,
            "Deamidation of N",
            "deam",
            molecular_formula!(O 1),
            molecular_formula!(N 1 H 1),
            Some(AminoAcid::Asparagine),
            Common,
        )
        .with_unimod(7, "Deamidated")
        .with_psi_mod(684),
        modification(
            ModificationType::AminoAcid,
            "Deamidation of Q",
            "deam",
            molecular_formula!(O 1),
            molecular_formula!(N 1 H 1),
            Some(AminoAcid::Glutamine),
            Common,
        )
        .with_unimod(7, "Deamidated")
        .with_psi_mod(685),
        modification(
            ModificationType::AminoAcid,
            "Deamidation of N 18O",
            "deam",
            molecular_formula!([18 O 1]),
            molecular_formula!(N 1 H 1),
            Some(AminoAcid::Asparagine),
            Labeling,
        )
        .with_unimod(366, "Deamidation in presence of O18")
        .with_psi_mod(791),
        modification(
            ModificationType::ProteinNTerm,
            "Carbamilation of protein N-term",
            "cm",
            molecular_formula!(C 1 H 1 N 1 O 1),
            molecular_formula!(),
            None,
            CommonArtifact,
        )
        .with_unimod(5, "Carbamyl")
        .with_psi_mod(1679),
        modification(
            ModificationType::AminoAcid,
            "Carbamilation of K",
            "cm",
            molecular_formula!(C 1 H 1 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonArtifact,
        )
        .with_unimod(5, "Carbamyl")
        .with_psi_mod(1678),
        modification(
            ModificationType::PeptideNTerm,
            "Acetaldehyde +26",
            "ace",
            molecular_formula!(C 2 H 2),
            molecular_formula!(),
            None,
            CommonArtifact,
        )
        .with_unimod(254, "Delta:H(2)C(2)")
        .with_psi_mod(577),
        modification(
            ModificationType::AminoAcid,
            "Sodium adduct to D",
            "Na",
            molecular_formula!(Na 1),
            molecular_formula!(H 1),
            Some(AminoAcid::AsparticAcid),
            Metal,
        )
        .with_unimod(30, "Cation:Na")
        .with_psi_mod(1295),
        modification(
            ModificationType::AminoAcid,
            "Sodium adduct to E",
            "Na",
            molecular_formula!(Na 1),
            molecular_formula!(H 1),
            Some(AminoAcid::GlutamicAcid),
            Metal,
        )
        .with_unimod(30, "Cation:Na")
        .with_psi_mod(1296),
        modification(
            ModificationType::PeptideCTerm,
            "Amidation of the peptide C-term",
            "am",
            molecular_formula!(H 1 N 1),
            molecular_formula!(O 1),
            None,
            CommonBiological,
        )
        .with_unimod(2, "Amidated")
        .with_psi_mod(883),
        modification(
            ModificationType::ProteinCTerm,
            "Amidation of the protein C-term",
            "am",
            molecular_formula!(H 1 N 1),
            molecular_formula!(O 1),
            None,
            CommonBiological,
        )
        .with_unimod(2, "Amidated")
        .with_psi_mod(883),
        modification(
            ModificationType::AminoAcid,
            "Sulfation of S",
            "s",
            molecular_formula!(O 3 S 1),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            CommonBiological,
        )
        .with_unimod(40, "Sulfo")
        .with_psi_mod(366),
        modification(
            ModificationType::AminoAcid,
            "Sulfation of T",
            "s",
            molecular_formula!(O 3 S 1),
            molecular_formula!(),
            Some(AminoAcid::Threonine),
            CommonBiological,
        )
        .with_unimod(40, "Sulfo")
        .with_psi_mod(367),
        modification(
            ModificationType::AminoAcid,
            "Sulfation of Y",
            "s",
            molecular_formula!(O 3 S 1),
            molecular_formula!(),
            Some(AminoAcid::Tyrosine),
            CommonBiological,
        )
        .with_unimod(40, "Sulfo")
        .with_psi_mod(181),
        modification(
            ModificationType::AminoAcid,
            "Palmitoylation of C",
            "palm",
            molecular_formula!(H 30 C 16 O 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonBiological,
        )
        .with_unimod(47, "Palmitoylation")
        .with_psi_mod(440),
        modification(
            ModificationType::AminoAcid,
            "Palmitoylation of K",
            "palm",
            molecular_formula!(H 30 C 16 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_unimod(47, "Palmitoylation")
        .with_psi_mod(86),
        modification(
            ModificationType::AminoAcid,
            "Palmitoylation of S",
            "palm",
            molecular_formula!(H 30 C 16 O 1),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            CommonBiological,
        )
        .with_unimod(47, "Palmitoylation")
        .with_psi_mod(89),
        modification(
            ModificationType::AminoAcid,
            "Palmitoylation of T",
            "palm",
            molecular_formula!(H 30 C 16 O 1),
            molecular_formula!(),
            Some(AminoAcid::Threonine),
            CommonBiological,
        )
        .with_unimod(47, "Palmitoylation")
        .with_psi_mod(88),
        modification(
            ModificationType::ProteinNTerm,
            "Palmitoylation of protein N-term",
            "palm",
            molecular_formula!(H 30 C 16 O 1),
            molecular_formula!(),
            None,
            CommonBiological,
        )
        .with_unimod(47, "Palmitoylation")
        .with_psi_mod(1685),
        modification(
            ModificationType::AminoAcid,
            "Formylation of K",
            "form",
            molecular_formula!(C 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonArtifact,
        )
        .with_unimod(122, "Formylation")
        .with_psi_mod(216)
        .with_reporter_ions(reporter_ions(&["fK112"])),
        modification(
            ModificationType::AminoAcid,
            "Formylation of S",
            "form",
            molecular_formula!(C 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Serine),
            CommonArtifact,
        )
        .with_unimod(122, "Formylation")
        .with_psi_mod(1222),
        modification(
            ModificationType::AminoAcid,
            "Formylation of T",
            "form",
            molecular_formula!(C 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Threonine),
            CommonArtifact,
        )
        .with_unimod(122, "Formylation")
        .with_psi_mod(1221),
        modification(
            ModificationType::PeptideNTerm,
            "Formylation of peptide N-term",
            "form",
            molecular_formula!(C 1 O 1),
            molecular_formula!(),
            None,
            CommonArtifact,
        )
        .with_unimod(122, "Formylation")
        .with_psi_mod(409),
        modification(
            ModificationType::ProteinNTerm,
            "Formylation of protein N-term",
            "form",
            molecular_formula!(C 1 O 1),
            molecular_formula!(),
            None,
            CommonArtifact,
        )
        .with_unimod(122, "Formylation")
        .with_psi_mod(409),
        modification(
            ModificationType::AminoAcid,
            "Propionyl of K light",
            "prop",
            molecular_formula!(H 4 C 3 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(58, "Propionyl")
        .with_psi_mod(1232),
        modification(
            ModificationType::PeptideNTerm,
            "Propionyl of peptide N-term light",
            "prop",
            molecular_formula!(H 4 C 3 O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(58, "Propionyl")
        .with_psi_mod(1895),
        modification(
            ModificationType::AminoAcid,
            "Propionyl of K heavy",
            "prop",
            molecular_formula!(H 4 [13 C 3] O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(59, "Propionyl:13C(3)")
        .with_psi_mod(1231),
        modification(
            ModificationType::PeptideNTerm,
            "Propionyl of peptide N-term heavy",
            "prop",
            molecular_formula!(H 4 [13 C 3] O 1),
            molecular_formula!(),
            None,
            Labeling,
        )
        .with_unimod(59, "Propionyl:13C(3)")
        .with_psi_mod(452),
        modification(
            ModificationType::AminoAcid,
            "Trideuterated Methyl Ester of D",
            "methyl(d3)",
            molecular_formula!([2 H 3] C 1),
            molecular_formula!(H 1),
            Some(AminoAcid::AsparticAcid),
            Labeling,
        )
        .with_unimod(298, "Methyl:2H(3)")
        .with_psi_mod(1241),
        modification(
            ModificationType::AminoAcid,
            "Trideuterated Methyl Ester of E",
            "methyl(d3)",
            molecular_formula!([2 H 3] C 1),
            molecular_formula!(H 1),
            Some(AminoAcid::GlutamicAcid),
            Labeling,
        )
        .with_unimod(298, "Methyl:2H(3)")
        .with_psi_mod(1242),
        modification(
            ModificationType::AminoAcid,
            "Trideuterated Methyl Ester of K",
            "methyl(d3)",
            molecular_formula!([2 H 3] C 1),
            molecular_formula!(H 1),
            Some(AminoAcid::Lysine),
            Labeling,
        )
        .with_unimod(298, "Methyl:2H(3)"),
        modification(
            ModificationType::AminoAcid,
            "Trideuterated Methyl Ester of R",
            "methyl(d3)",
            molecular_formula!([2 H 3] C 1),
            molecular_formula!(H 1),
            Some(AminoAcid::Arginine),
            Labeling,
        )
        .with_unimod(298, "Methyl:2H(3)"),
        modification(
            ModificationType::PeptideCTerm,
            "Trideuterated Methyl Ester of peptide C-term",
            "methyl(d3)",
            molecular_formula!([2 H 3] C 1),
            molecular_formula!(H 1),
            None,
            Labeling,
        )
        .with_unimod(298, "Methyl:2H(3)")
        .with_psi_mod(617),
        modification(
            ModificationType::AminoAcid,
            "Carboxymethylation of C",
            "carbox",
            molecular_formula!(H 2 C 2 O 2),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(6, "Carboxymethyl")
        .with_psi_mod(1061),
        modification(
            ModificationType::AminoAcid,
            "Farnesylation of C",
            "far",
            molecular_formula!(H 24 C 15),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonBiological,
        )
        .with_unimod(44, "Farnesyl")
        .with_psi_mod(111),
        modification(
            ModificationType::AminoAcid,
            "Geranyl-geranyl of C",
            "geranyl",
            molecular_formula!(H 32 C 20),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonBiological,
        )
        .with_unimod(48, "GeranylGeranyl")
        .with_psi_mod(113),
        modification(
            ModificationType::AminoAcid,
            "Guanidination of K",
            "guan",
            molecular_formula!(H 2 C 1 N 2),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonArtifact,
        )
        .with_unimod(52, "Guanidinyl")
        .with_psi_mod(445),
        modification(
            ModificationType::PeptideNTerm,
            "Guanidination of peptide N-term",
            "guan",
            molecular_formula!(H 2 C 1 N 2),
            molecular_formula!(),
            None,
            CommonArtifact,
        )
        .with_unimod(52, "Guanidinyl"),
        modification(
            ModificationType::PeptideCTermAminoAcid,
            "Homoserine of peptide C-term M",
            "hse",
            molecular_formula!(O 1),
            molecular_formula!(H 2 C 1 S 1),
            Some(AminoAcid::Methionine),
            CommonArtifact,
        )
        .with_unimod(10, "Met->Hse")
        .with_psi_mod(403),
        modification(
            ModificationType::PeptideCTermAminoAcid,
            "Homoserine lactone of peptide C-term M",
            "hsel",
            molecular_formula!(),
            molecular_formula!(H 4 C 1 S 1),
            Some(AminoAcid::Methionine),
            CommonArtifact,
        )
        .with_unimod(11, "Met->Hsl")
        .with_psi_mod(404),
        modification(
            ModificationType::AminoAcid,
            "Lipoyl of K",
            "lip",
            molecular_formula!(H 12 C 8 S 2 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonBiological,
        )
        .with_unimod(42, "Lipoyl")
        .with_psi_mod(127),
        modification(
            ModificationType::AminoAcid,
            "Methylthio of D",
            "mmts",
            molecular_formula!(H 2 C 1 S 1),
            molecular_formula!(),
            Some(AminoAcid::AsparticAcid),
            CommonArtifact,
        )
        .with_unimod(39, "Methylthio")
        .with_psi_mod(237),
        modification(
            ModificationType::AminoAcid,
            "Methylthio of N",
            "mmts",
            molecular_formula!(H 2 C 1 S 1),
            molecular_formula!(),
            Some(AminoAcid::Asparagine),
            CommonArtifact,
        )
        .with_unimod(39, "Methylthio")
        .with_psi_mod(325),
        modification(
            ModificationType::AminoAcid,
            "Methylthio of C",
            "mmts",
            molecular_formula!(H 2 C 1 S 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(39, "Methylthio")
        .with_psi_mod(110),
        modification(
            ModificationType::AminoAcid,
            "NIPCAM of C",
            "nipcam",
            molecular_formula!(H 9 C 5 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(17, "NIPCAM")
        .with_psi_mod(410),
        modification(
            ModificationType::AminoAcid,
            "Propionamide of C",
            "propam",
            molecular_formula!(H 5 C 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(24, "Propionamide")
        .with_psi_mod(417),
        modification(
            ModificationType::AminoAcid,
            "Propionamide of K",
            "propam",
            molecular_formula!(H 5 C 3 N 1 O 1),
            molecular_formula!(),
            Some(AminoAcid::Lysine),
            CommonArtifact,
        )
        .with_unimod(24, "Propionamide"),
        modification(
            ModificationType::PeptideNTerm,
            "Propionamide of peptide N-term",
            "propam",
            molecular_formula!(H 5 C 3 N 1 O 1),
            molecular_formula!(),
            None,
            CommonArtifact,
        )
        .with_unimod(24, "Propionamide"),
        modification(
            ModificationType::AminoAcid,
            "Pyridylethyl of C",
            "pyri",
            molecular_formula!(H 7 C 7 N 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(31, "Pyridylethyl")
        .with_psi_mod(424),
        modification(
            ModificationType::AminoAcid,
            "Dehydration of S",
            "dehyd",
            molecular_formula!(),
            molecular_formula!(H 2 O 1),
            Some(AminoAcid::Serine),
            CommonArtifact,
        )
        .with_unimod(23, "Dehydrated")
        .with_psi_mod(189),
        modification(
            ModificationType::AminoAcid,
            "Dehydration of T",
            "dehyd",
            molecular_formula!(),
            molecular_formula!(H 2 O 1),
            Some(AminoAcid::Threonine),
            CommonArtifact,
        )
        .with_unimod(23, "Dehydrated")
        .with_psi_mod(190),
        modification(
            ModificationType::AminoAcid,
            "Nethylmaleimide of C",
            "nem",
            molecular_formula!(H 7 O 2 C 6 N 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonArtifact,
        )
        .with_unimod(108, "Nethylmaleimide")
        .with_psi_mod(483),
        modification(
            ModificationType::AminoAcid,
            "Glutathione of C",
            "glut",
            molecular_formula!(H 15 O 6 C 10 N 3 S 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            CommonBiological,
        )
        .with_unimod(55, "Glutathione")
        .with_psi_mod(234),
        modification(
            ModificationType::ProteinNTerm,
            "FormylMet of protein N-term",
            "nmet",
            molecular_formula!(H 9 O 2 C 6 N 1 S 1),
            molecular_formula!(),
            None,
            CommonBiological,
        )
        .with_unimod(107, "FormylMet"),
        modification(
            ModificationType::AminoAcid,
            "Didehydro of T",
            "didehyro",
            molecular_formula!(),
            molecular_formula!(H 2),
            Some(AminoAcid::Threonine),
            CommonArtifact,
        )
        .with_unimod(401, "Didehydro")
        .with_psi_mod(1345),
        modification(
            ModificationType::PeptideNTerm,
            "Thioacyl of peptide N-term",
            "thioacyl",
            molecular_formula!(H 4 C 3 O 1 S 1),
            molecular_formula!(),
            None,
            LessCommon,
        )
        .with_unimod(126, "Thioacyl")
        .with_psi_mod(1223),
        modification(
            ModificationType::AminoAcid,
            "Diiodination of Y",
            "diiodo",
            molecular_formula!(I 2),
            molecular_formula!(H 2),
            Some(AminoAcid::Tyrosine),
            LessCommon,
        )
        .with_unimod(130, "Diiodo")
        .with_psi_mod(1140),
        modification(
            ModificationType::AminoAcid,
            "Citrullination of R",
            "cit",
            molecular_formula!(O 1),
            molecular_formula!(N 1 H 1),
            Some(AminoAcid::Arginine),
            CommonBiological,
        )
        .with_unimod(7, "Deamidated")
        .with_psi_mod(400),
        modification(
            ModificationType::AminoAcid,
            "S-nitrosylation",
            "nitrosyl",
            molecular_formula!(N 1 O 1),
            molecular_formula!(H 1),
            Some(AminoAcid::Cysteine),
            CommonBiological,
        )
        .with_unimod(275, "Nitrosyl")
        .with_psi_mod(235),
        modification(
            ModificationType::AminoAcid,
            "Heme B of C",
            "heme",
            molecular_formula!(H 32 C 34 N 4 O 4 Fe 1),
            molecular_formula!(),
            Some(AminoAcid::Cysteine),
            Metal,
        )
        .with_unimod(390, "Heme"),
        modification(
            ModificationType::AminoAcid,
            "Heme B of H",
            "heme",
            molecular_formula!(H 32 C 34 N 4 O 4 Fe 1),
            molecular_formula!(),
            Some(AminoAcid::Histidine),
            Metal,
        )
        .with_unimod(390, "Heme"),
    ]
}
