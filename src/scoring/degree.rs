use serde::{Deserialize, Serialize};
use std::fmt;

/// Locomotive function risk degree: 0 = no impairment, 3 = most severe.
///
/// Downstream consumers (report renderer, submission client) match on the
/// bare integer, so this serializes as 0-3 rather than a variant name.
/// `Ord` follows severity, which is what the final combiner relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Degree {
    Zero,
    One,
    Two,
    Three,
}

impl Degree {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl From<Degree> for u8 {
    fn from(degree: Degree) -> u8 {
        degree as u8
    }
}

impl TryFrom<u8> for Degree {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Degree::Zero),
            1 => Ok(Degree::One),
            2 => Ok(Degree::Two),
            3 => Ok(Degree::Three),
            other => Err(format!("degree must be 0-3, got {}", other)),
        }
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_severity() {
        assert!(Degree::Zero < Degree::One);
        assert!(Degree::One < Degree::Two);
        assert!(Degree::Two < Degree::Three);
        assert_eq!(Degree::One.max(Degree::Three), Degree::Three);
    }

    #[test]
    fn test_serializes_as_integer() {
        let json = serde_json::to_string(&Degree::Two).unwrap();
        assert_eq!(json, "2");
    }

    #[test]
    fn test_deserializes_from_integer() {
        let degree: Degree = serde_json::from_str("3").unwrap();
        assert_eq!(degree, Degree::Three);
    }

    #[test]
    fn test_rejects_out_of_range() {
        let result: Result<Degree, _> = serde_json::from_str("4");
        assert!(result.is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Degree::Zero.to_string(), "0");
        assert_eq!(Degree::Three.to_string(), "3");
    }
}
