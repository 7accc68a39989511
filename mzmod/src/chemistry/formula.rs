use std::{
    fmt::Display,
    num::NonZeroU16,
    ops::{Add, Neg, Sub},
};

use serde::{Deserialize, Serialize};

use crate::chemistry::{Element, Mass, da};

/// A molecular formula, a multiset of elements (with optional isotope) with counts. The counts
/// can be negative, which is used for differences between formulas.
///
/// The elements are always kept sorted and merged, so two formulas with the same composition
/// compare equal regardless of how they were constructed.
#[derive(
    Clone, Debug, Default, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(try_from = "Vec<(Element, Option<NonZeroU16>, i32)>")]
#[serde(into = "Vec<(Element, Option<NonZeroU16>, i32)>")]
pub struct MolecularFormula {
    elements: Vec<(Element, Option<NonZeroU16>, i32)>,
}

/// Create a new molecular formula, specific isotopes are written as `[13 C 6]`.
///
/// ```
/// # use mzmod::molecular_formula;
/// let water = molecular_formula!(H 2 O 1);
/// let heavy_label = molecular_formula!([13 C 6] N 2);
/// assert_eq!(water.hill_notation(), "H2O1");
/// assert_eq!(heavy_label.to_string(), "[13C6]N2");
/// ```
#[macro_export]
macro_rules! molecular_formula {
    (@ [$($acc:tt)*]) => {
        $crate::chemistry::MolecularFormula::new_unchecked(&[$($acc)*])
    };
    (@ [$($acc:tt)*] [$isotope:literal $element:ident $count:literal] $($rest:tt)*) => {
        $crate::molecular_formula!(@ [$($acc)* ($crate::chemistry::Element::$element, std::num::NonZeroU16::new($isotope), $count),] $($rest)*)
    };
    (@ [$($acc:tt)*] $element:ident $count:literal $($rest:tt)*) => {
        $crate::molecular_formula!(@ [$($acc)* ($crate::chemistry::Element::$element, None, $count),] $($rest)*)
    };
    () => {
        $crate::chemistry::MolecularFormula::default()
    };
    ($($rest:tt)+) => {
        $crate::molecular_formula!(@ [] $($rest)+)
    };
}

impl MolecularFormula {
    /// Create a new molecular formula, returns `None` if any of the isotopes does not exist.
    pub fn new(elements: &[(Element, Option<NonZeroU16>, i32)]) -> Option<Self> {
        elements
            .iter()
            .all(|(e, i, _)| e.is_valid(*i))
            .then(|| Self::new_unchecked(elements))
    }

    /// Create a new molecular formula without checking the validity of the isotopes. Used by
    /// [`molecular_formula!`], only use this for known good data.
    #[doc(hidden)]
    pub fn new_unchecked(elements: &[(Element, Option<NonZeroU16>, i32)]) -> Self {
        let mut result = Self::default();
        for (element, isotope, count) in elements {
            result.add_element((*element, *isotope, *count));
        }
        result
    }

    /// Add the given element to this formula (while keeping it ordered and simplified)
    pub fn add_element(&mut self, element: (Element, Option<NonZeroU16>, i32)) {
        if element.2 == 0 {
            return;
        }
        match self
            .elements
            .binary_search_by(|probe| (probe.0, probe.1).cmp(&(element.0, element.1)))
        {
            Ok(index) => {
                self.elements[index].2 += element.2;
                if self.elements[index].2 == 0 {
                    self.elements.remove(index);
                }
            }
            Err(index) => self.elements.insert(index, element),
        }
    }

    /// The elements, ordered by element and isotope
    pub fn elements(&self) -> &[(Element, Option<NonZeroU16>, i32)] {
        &self.elements
    }

    /// Check if this formula contains no elements
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The mass of the molecular formula, using the monoisotopic mass for each element without
    /// an explicit isotope
    pub fn monoisotopic_mass(&self) -> Mass {
        self.elements
            .iter()
            .filter_map(|(e, i, n)| e.mass(*i).map(|m| m * f64::from(*n)))
            .fold(da(0.0), |acc, m| acc + m)
    }

    /// Split this formula in the part with positive counts and the part with negative counts
    /// (returned with positive counts).
    pub fn split_signs(&self) -> (Self, Self) {
        let mut positive = Self::default();
        let mut negative = Self::default();
        for (e, i, n) in &self.elements {
            if *n > 0 {
                positive.elements.push((*e, *i, *n));
            } else {
                negative.elements.push((*e, *i, -*n));
            }
        }
        (positive, negative)
    }

    /// Create a [Hill notation](https://en.wikipedia.org/wiki/Chemical_formula#Hill_system) from
    /// this collection of elements. Specific isotopes are written as `[13C6]`.
    pub fn hill_notation(&self) -> String {
        let carbon = self.elements.iter().any(|e| e.0 == Element::C);
        let mut ordered = self.elements.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|e| {
            let rank = match e.0 {
                Element::C if carbon => 0,
                Element::H if carbon => 1,
                _ => 2,
            };
            (rank, e.0.symbol(), e.1)
        });
        ordered.into_iter().map(element_notation).collect()
    }
}

fn element_notation(element: &(Element, Option<NonZeroU16>, i32)) -> String {
    element.1.map_or_else(
        || format!("{}{}", element.0, element.2),
        |isotope| format!("[{}{}{}]", isotope, element.0, element.2),
    )
}

impl Display for MolecularFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hill_notation())
    }
}

impl TryFrom<Vec<(Element, Option<NonZeroU16>, i32)>> for MolecularFormula {
    type Error = String;
    fn try_from(value: Vec<(Element, Option<NonZeroU16>, i32)>) -> Result<Self, Self::Error> {
        Self::new(&value).ok_or_else(|| {
            "A molecular formula contains an isotope that does not exist".to_string()
        })
    }
}

impl From<MolecularFormula> for Vec<(Element, Option<NonZeroU16>, i32)> {
    fn from(value: MolecularFormula) -> Self {
        value.elements
    }
}

impl Add<&MolecularFormula> for &MolecularFormula {
    type Output = MolecularFormula;
    fn add(self, rhs: &MolecularFormula) -> Self::Output {
        let mut result = self.clone();
        for element in &rhs.elements {
            result.add_element(*element);
        }
        result
    }
}

impl Neg for &MolecularFormula {
    type Output = MolecularFormula;
    fn neg(self) -> Self::Output {
        MolecularFormula {
            elements: self.elements.iter().map(|(e, i, n)| (*e, *i, -*n)).collect(),
        }
    }
}

impl Sub<&MolecularFormula> for &MolecularFormula {
    type Output = MolecularFormula;
    fn sub(self, rhs: &MolecularFormula) -> Self::Output {
        self + &-rhs
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::num::NonZeroU16;

    use uom::si::mass::dalton;

    use super::*;

    #[test]
    fn simplifies() {
        let formula = molecular_formula!(H 2 O 1 H 1 O -1);
        assert_eq!(formula, molecular_formula!(H 3));
        assert!((&formula - &molecular_formula!(H 3)).is_empty());
    }

    #[test]
    fn mass() {
        let acetyl = molecular_formula!(C 2 H 2 O 1);
        assert!((acetyl.monoisotopic_mass().get::<dalton>() - 42.010_565).abs() < 1e-5);
        let heavy = molecular_formula!([13 C 6]);
        assert!((heavy.monoisotopic_mass().get::<dalton>() - 78.020_129).abs() < 1e-5);
    }

    #[test]
    fn hill() {
        assert_eq!(molecular_formula!(O 1 C 2 H 2).hill_notation(), "C2H2O1");
        assert_eq!(molecular_formula!(P 1 O 3 H 1).hill_notation(), "H1O3P1");
        assert_eq!(
            molecular_formula!(C 3 [13 C 5] H 15 N 1).hill_notation(),
            "C3[13C5]H15N1"
        );
    }

    #[test]
    fn invalid_isotope() {
        assert!(MolecularFormula::new(&[(Element::N, NonZeroU16::new(13), 1)]).is_none());
        assert!(
            serde_json::from_str::<MolecularFormula>(r#"[["N", 13, 1]]"#).is_err(),
            "invalid isotopes should be rejected when deserialising"
        );
    }

    #[test]
    fn addition() {
        let mut formula = molecular_formula!(C 2 H 4);
        formula.add_element((Element::O, None, 1));
        formula.add_element((Element::H, None, -4));
        assert_eq!(formula, molecular_formula!(C 2 O 1));
        let sum = &formula + &molecular_formula!(H 2 O -1);
        assert_eq!(sum, molecular_formula!(C 2 H 2));
        assert_eq!(
            &sum - &molecular_formula!(C 2 H 2),
            MolecularFormula::default()
        );
    }

    #[test]
    fn split() {
        let difference = &molecular_formula!(C 5 H 9 N 1 O 1) - &molecular_formula!(C 3 H 5 N 1 O 2);
        let (added, removed) = difference.split_signs();
        assert_eq!(added, molecular_formula!(C 2 H 4));
        assert_eq!(removed, molecular_formula!(O 1));
    }
}
