use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

/// Orientations reported by the
/// [`ORIENTATION`](crate::attribute::AXAttribute::ORIENTATION) attribute.
///
/// Unlike the identifier domains this vocabulary is closed: the protocol
/// defines exactly these numeric values.
#[derive(Debug, Copy, Clone, PartialEq, Eq, EnumString, Display, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub enum AXOrientation {
    Unknown,
    Vertical,
    Horizontal,
}

impl AXOrientation {
    /// Maps the protocol's numeric orientation value.
    pub const fn from_raw(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Unknown),
            1 => Some(Self::Vertical),
            2 => Some(Self::Horizontal),
            _ => None,
        }
    }

    /// The numeric value exchanged with the protocol.
    pub const fn as_raw(self) -> i64 {
        match self {
            Self::Unknown => 0,
            Self::Vertical => 1,
            Self::Horizontal => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_raw_value_round_trip() {
        for orientation in [
            AXOrientation::Unknown,
            AXOrientation::Vertical,
            AXOrientation::Horizontal,
        ] {
            assert_eq!(AXOrientation::from_raw(orientation.as_raw()), Some(orientation));
        }

        assert_eq!(AXOrientation::from_raw(3), None);
        assert_eq!(AXOrientation::from_raw(-1), None);
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!(AXOrientation::Vertical.to_string(), "Vertical");
        assert_eq!(
            AXOrientation::from_str("Horizontal").unwrap(),
            AXOrientation::Horizontal
        );
        assert!(AXOrientation::from_str("Diagonal").is_err());
    }
}
