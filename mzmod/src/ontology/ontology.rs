use std::{fmt::Display, str::FromStr};

use context_error::*;
use serde::{Deserialize, Serialize};

/// The ontologies modifications can be cross-referenced to
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize,
)]
pub enum Ontology {
    #[default]
    /// Unimod
    Unimod,
    /// PSI-MOD
    Psimod,
}

impl Ontology {
    /// All ontologies
    pub const ALL: &'static [Self] = &[Self::Unimod, Self::Psimod];

    /// Get the accession prefix for the ontology
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unimod => "UNIMOD",
            Self::Psimod => "MOD",
        }
    }
}

impl Display for Ontology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Unimod => "Unimod",
                Self::Psimod => "PSI-MOD",
            },
        )
    }
}

impl FromStr for Ontology {
    type Err = BoxedError<'static, BasicKind>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|o| o.name().eq_ignore_ascii_case(s) || o.to_string().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                BoxedError::new(
                    BasicKind::Error,
                    "Unknown ontology",
                    "Only Unimod and PSI-MOD are supported",
                    Context::show(s.to_string()),
                )
            })
    }
}

/// A term in a controlled vocabulary
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct CvTerm {
    /// The ontology this term is defined in
    pub ontology: Ontology,
    /// The full accession, including the ontology prefix, eg `UNIMOD:1`
    pub accession: String,
    /// The name of the term in the ontology
    pub name: String,
    /// An optional value
    pub value: Option<String>,
}

impl CvTerm {
    /// Create a new term, the accession is prefixed with the ontology name if it is not already
    pub fn new(ontology: Ontology, accession: &str, name: impl Into<String>) -> Self {
        let bare = strip_prefix(ontology, accession.trim());
        Self {
            ontology,
            accession: format!("{}:{bare}", ontology.name()),
            name: name.into(),
            value: None,
        }
    }

    /// A Unimod term
    pub fn unimod(id: usize, name: impl Into<String>) -> Self {
        Self::new(Ontology::Unimod, &id.to_string(), name)
    }

    /// A PSI-MOD term, the accession is zero padded to five digits
    pub fn psi_mod(id: usize, name: impl Into<String>) -> Self {
        Self::new(Ontology::Psimod, &format!("{id:05}"), name)
    }

    /// Set the value
    #[must_use]
    pub fn with_value(self, value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..self
        }
    }

    /// The accession without the ontology prefix, eg `00723` for `MOD:00723`
    pub fn bare_accession(&self) -> &str {
        strip_prefix(self.ontology, &self.accession)
    }
}

/// Strip an optional `<ONTOLOGY>:` prefix (with any surrounding whitespace) from an accession
pub(crate) fn strip_prefix(ontology: Ontology, accession: &str) -> &str {
    accession
        .split_once(':')
        .filter(|(prefix, _)| prefix.trim().eq_ignore_ascii_case(ontology.name()))
        .map_or(accession, |(_, rest)| rest.trim())
}

impl Display for CvTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.accession)
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;

    #[test]
    fn accessions() {
        let term = CvTerm::psi_mod(723, "Acetylation of K");
        assert_eq!(term.accession, "MOD:00723");
        assert_eq!(term.bare_accession(), "00723");
        let term = CvTerm::new(Ontology::Unimod, "UNIMOD: 1291", "Label:2H(4)");
        assert_eq!(term.accession, "UNIMOD:1291");
        assert_eq!(term.bare_accession(), "1291");
        assert_eq!(CvTerm::unimod(21, "Phospho").to_string(), "Phospho (UNIMOD:21)");
    }

    #[test]
    fn ontology_names() {
        assert_eq!("mod".parse::<Ontology>().unwrap(), Ontology::Psimod);
        assert_eq!("PSI-MOD".parse::<Ontology>().unwrap(), Ontology::Psimod);
        assert_eq!("Unimod".parse::<Ontology>().unwrap(), Ontology::Unimod);
        assert!("GNO".parse::<Ontology>().is_err());
    }
}
