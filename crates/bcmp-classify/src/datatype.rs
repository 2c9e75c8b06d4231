use std::fmt;
use std::str::FromStr;

use crate::error::ClassifyError;

/// The kind of data a textual difference was recognised as.
///
/// Variant names are the on-the-wire representation; see
/// [`DifferenceDatatype::as_str`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DifferenceDatatype {
    /// Both sides are 32-bit signed integers.
    Integer,
    /// Both sides are floating-point numbers.
    Decimal,
    /// Both sides are (possibly truncated) GUIDs.
    Guid,
    /// Catchall for anything not otherwise recognised.
    String,
    /// Reserved. No detector produces it, but persisted data may carry it.
    TooLong,
}

impl DifferenceDatatype {
    /// Every datatype, in declaration order.
    pub const ALL: [DifferenceDatatype; 5] = [
        Self::Integer,
        Self::Decimal,
        Self::Guid,
        Self::String,
        Self::TooLong,
    ];

    /// The exact name used in persisted differences.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Guid => "Guid",
            Self::String => "String",
            Self::TooLong => "TooLong",
        }
    }
}

impl fmt::Display for DifferenceDatatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifferenceDatatype {
    type Err = ClassifyError;

    /// Exact, case-sensitive name match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ClassifyError::UnknownClassification(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_name() {
        for kind in DifferenceDatatype::ALL {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }

    #[test]
    fn parse_every_known_name() {
        for kind in DifferenceDatatype::ALL {
            let parsed: DifferenceDatatype = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn too_long_is_still_parseable() {
        assert_eq!(
            "TooLong".parse::<DifferenceDatatype>().unwrap(),
            DifferenceDatatype::TooLong
        );
    }

    #[test]
    fn parse_is_case_sensitive() {
        let err = "integer".parse::<DifferenceDatatype>().unwrap_err();
        assert_eq!(err, ClassifyError::UnknownClassification("integer".into()));
    }

    #[test]
    fn parse_rejects_unknown_and_empty() {
        assert!("Timestamp".parse::<DifferenceDatatype>().is_err());
        assert!("".parse::<DifferenceDatatype>().is_err());
        assert!(" Guid".parse::<DifferenceDatatype>().is_err());
    }
}
