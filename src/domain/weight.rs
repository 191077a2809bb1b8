//! Craft Yarn Council (CYC) standard yarn weight categories.
//!
//! The table is reference data for display and for validating category codes;
//! the cross-weight warning itself only looks at the numeric codes.

use crate::utils::error::{Result, YarnError};
use serde::{Deserialize, Serialize};
use std::fmt;
use strum::IntoEnumIterator;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum YarnWeight {
    Lace,
    Fingering,
    Sport,
    #[default]
    #[strum(serialize = "DK")]
    Dk,
    Worsted,
    Bulky,
    #[strum(serialize = "Super Bulky")]
    SuperBulky,
    Jumbo,
}

/// One row of the CYC reference chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightReference {
    pub weight: YarnWeight,
    pub name: &'static str,
    pub gauge_range: &'static str,
    pub needle_range: &'static str,
    pub description: &'static str,
}

impl YarnWeight {
    pub fn from_code(code: u8) -> Result<Self> {
        Self::iter()
            .find(|weight| weight.code() == code)
            .ok_or_else(|| {
                YarnError::invalid_field("weight", code, "Weight must be a CYC category 0-7")
            })
    }

    pub fn code(self) -> u8 {
        self as u8
    }

    /// Short label used in selectors and reports.
    pub fn label(self) -> &'static str {
        self.into()
    }

    pub fn reference(self) -> WeightReference {
        let (name, gauge_range, needle_range, description) = match self {
            YarnWeight::Lace => (
                "Lace",
                "32–34+ stitches per 4 inches",
                "1.5–2.25 mm / US 000–1",
                "Fingering-weight held double, thread-like yarns",
            ),
            YarnWeight::Fingering => (
                "Fingering / Sock",
                "27–32 stitches per 4 inches",
                "2.25–3.25 mm / US 1–3",
                "Socks, shawls, fine garments",
            ),
            YarnWeight::Sport => (
                "Sport",
                "23–26 stitches per 4 inches",
                "3.25–3.5 mm / US 3–4",
                "Lightweight sweaters, baby items",
            ),
            YarnWeight::Dk => (
                "DK (Double Knitting)",
                "21–24 stitches per 4 inches",
                "3.5–4.5 mm / US 4–7",
                "Versatile weight for sweaters, accessories",
            ),
            YarnWeight::Worsted => (
                "Worsted / Aran",
                "16–20 stitches per 4 inches",
                "4.5–5.5 mm / US 7–9",
                "Most common weight for sweaters, blankets",
            ),
            YarnWeight::Bulky => (
                "Bulky",
                "12–15 stitches per 4 inches",
                "5.5–8 mm / US 9–11",
                "Quick knits, warm outerwear",
            ),
            YarnWeight::SuperBulky => (
                "Super Bulky",
                "7–11 stitches per 4 inches",
                "8–12.75 mm / US 11–17",
                "Very fast knitting, thick blankets",
            ),
            YarnWeight::Jumbo => (
                "Jumbo",
                "6 or fewer stitches per 4 inches",
                "12.75+ mm / US 17+",
                "Arm knitting, extreme bulk",
            ),
        };

        WeightReference {
            weight: self,
            name,
            gauge_range,
            needle_range,
            description,
        }
    }
}

impl fmt::Display for YarnWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code(), self.label())
    }
}

impl TryFrom<u8> for YarnWeight {
    type Error = YarnError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl From<YarnWeight> for u8 {
    fn from(weight: YarnWeight) -> Self {
        weight.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_table() {
        for (code, weight) in YarnWeight::iter().enumerate() {
            assert_eq!(weight.code() as usize, code);
            assert_eq!(YarnWeight::from_code(code as u8).unwrap(), weight);
            assert_eq!(weight.reference().weight, weight);
        }
        assert_eq!(YarnWeight::iter().count(), 8);
    }

    #[test]
    fn test_unknown_code_is_invalid_field() {
        match YarnWeight::from_code(8) {
            Err(YarnError::InvalidFieldValue { field, value, .. }) => {
                assert_eq!(field, "weight");
                assert_eq!(value, "8");
            }
            other => panic!("expected InvalidFieldValue, got {:?}", other),
        }
    }

    #[test]
    fn test_labels_and_display() {
        assert_eq!(YarnWeight::Dk.label(), "DK");
        assert_eq!(YarnWeight::Fingering.label(), "Fingering");
        assert_eq!(YarnWeight::SuperBulky.to_string(), "6: Super Bulky");
        assert_eq!(YarnWeight::default(), YarnWeight::Dk);
        assert_eq!(YarnWeight::Worsted.reference().name, "Worsted / Aran");
    }

    #[test]
    fn test_serde_uses_numeric_codes() {
        let json = serde_json::to_string(&YarnWeight::Bulky).unwrap();
        assert_eq!(json, "5");
        let parsed: YarnWeight = serde_json::from_str("0").unwrap();
        assert_eq!(parsed, YarnWeight::Lace);
        assert!(serde_json::from_str::<YarnWeight>("9").is_err());
    }
}
