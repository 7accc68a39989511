use std::{fmt::Display, num::NonZeroU16, str::FromStr};

use context_error::*;
use serde::{Deserialize, Serialize};

use crate::chemistry::{Mass, da};

/// The elements that can be used in modification compositions.
#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[expect(missing_docs)]
pub enum Element {
    H,
    Li,
    C,
    N,
    O,
    F,
    Na,
    Mg,
    P,
    S,
    Cl,
    K,
    Ca,
    Fe,
    Cu,
    Zn,
    Se,
    Br,
    I,
}

/// Monoisotopic mass and the known isotopes (mass number, mass) per element, in the order of [`Element`].
static ELEMENTAL_DATA: &[(f64, &[(u16, f64)])] = &[
    (
        1.007_825_032_07,
        &[(1, 1.007_825_032_07), (2, 2.014_101_777_8), (3, 3.016_049_277_7)],
    ),
    (7.016_004_55, &[(6, 6.015_122_795), (7, 7.016_004_55)]),
    (
        12.0,
        &[(12, 12.0), (13, 13.003_354_837_8), (14, 14.003_241_989)],
    ),
    (
        14.003_074_004_8,
        &[(14, 14.003_074_004_8), (15, 15.000_108_898_2)],
    ),
    (
        15.994_914_619_56,
        &[
            (16, 15.994_914_619_56),
            (17, 16.999_131_70),
            (18, 17.999_161_0),
        ],
    ),
    (18.998_403_22, &[(19, 18.998_403_22)]),
    (22.989_769_280_9, &[(23, 22.989_769_280_9)]),
    (
        23.985_041_700,
        &[
            (24, 23.985_041_700),
            (25, 24.985_836_92),
            (26, 25.982_592_929),
        ],
    ),
    (30.973_761_63, &[(31, 30.973_761_63)]),
    (
        31.972_071_00,
        &[
            (32, 31.972_071_00),
            (33, 32.971_458_76),
            (34, 33.967_866_90),
            (36, 35.967_080_76),
        ],
    ),
    (34.968_852_68, &[(35, 34.968_852_68), (37, 36.965_902_59)]),
    (38.963_706_68, &[(39, 38.963_706_68), (41, 40.961_825_76)]),
    (39.962_590_98, &[(40, 39.962_590_98), (44, 43.955_481_8)]),
    (
        55.934_937_5,
        &[
            (54, 53.939_610_5),
            (56, 55.934_937_5),
            (57, 56.935_394_0),
            (58, 57.933_275_6),
        ],
    ),
    (62.929_597_5, &[(63, 62.929_597_5), (65, 64.927_789_5)]),
    (
        63.929_142_2,
        &[(64, 63.929_142_2), (66, 65.926_033_4), (68, 67.924_844_2)],
    ),
    (79.916_521_3, &[(78, 77.917_309_1), (80, 79.916_521_3)]),
    (78.918_337_1, &[(79, 78.918_337_1), (81, 80.916_290_6)]),
    (126.904_473, &[(127, 126.904_473)]),
];

impl Element {
    /// All elements in order
    pub const ALL: &'static [Self] = &[
        Self::H,
        Self::Li,
        Self::C,
        Self::N,
        Self::O,
        Self::F,
        Self::Na,
        Self::Mg,
        Self::P,
        Self::S,
        Self::Cl,
        Self::K,
        Self::Ca,
        Self::Fe,
        Self::Cu,
        Self::Zn,
        Self::Se,
        Self::Br,
        Self::I,
    ];

    /// The element symbol
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::Li => "Li",
            Self::C => "C",
            Self::N => "N",
            Self::O => "O",
            Self::F => "F",
            Self::Na => "Na",
            Self::Mg => "Mg",
            Self::P => "P",
            Self::S => "S",
            Self::Cl => "Cl",
            Self::K => "K",
            Self::Ca => "Ca",
            Self::Fe => "Fe",
            Self::Cu => "Cu",
            Self::Zn => "Zn",
            Self::Se => "Se",
            Self::Br => "Br",
            Self::I => "I",
        }
    }

    /// Validate this isotope to have a defined mass
    pub fn is_valid(self, isotope: Option<NonZeroU16>) -> bool {
        isotope.is_none_or(|isotope| self.isotopes().iter().any(|(n, _)| *n == isotope.get()))
    }

    /// Get all available isotopes (N, mass)
    pub fn isotopes(self) -> &'static [(u16, f64)] {
        ELEMENTAL_DATA[self as usize].1
    }

    /// The mass of the specified isotope of this element (if that isotope exists), the
    /// monoisotopic mass if no isotope is given
    pub fn mass(self, isotope: Option<NonZeroU16>) -> Option<Mass> {
        isotope.map_or_else(
            || Some(da(ELEMENTAL_DATA[self as usize].0)),
            |isotope| {
                self.isotopes()
                    .iter()
                    .find(|(n, _)| *n == isotope.get())
                    .map(|(_, m)| da(*m))
            },
        )
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Element {
    type Err = BoxedError<'static, BasicKind>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|e| e.symbol() == s)
            .copied()
            .ok_or_else(|| {
                BoxedError::new(
                    BasicKind::Error,
                    "Invalid element",
                    "This element is not supported in modification compositions",
                    Context::show(s.to_string()),
                )
            })
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use std::num::NonZeroU16;

    use uom::si::mass::dalton;

    use super::*;

    #[test]
    fn data_lines_up_with_elements() {
        assert_eq!(ELEMENTAL_DATA.len(), Element::ALL.len());
        for element in Element::ALL {
            assert!(
                element.isotopes().iter().any(|(_, m)| {
                    (*m - element.mass(None).unwrap().get::<dalton>()).abs() < 1e-9
                }),
                "{element} monoisotopic mass is not one of its isotopes"
            );
        }
    }

    #[test]
    fn isotopes() {
        assert!(Element::C.is_valid(NonZeroU16::new(13)));
        assert!(!Element::C.is_valid(NonZeroU16::new(15)));
        assert!(Element::mass(Element::O, NonZeroU16::new(18)).is_some());
        assert!(Element::mass(Element::N, NonZeroU16::new(13)).is_none());
    }

    #[test]
    fn parse() {
        assert_eq!("Na".parse::<Element>().unwrap(), Element::Na);
        assert_eq!(Element::Fe.to_string(), "Fe");
        assert!("Xx".parse::<Element>().is_err());
    }
}
