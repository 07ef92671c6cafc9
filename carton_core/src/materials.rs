//! # Material Table
//!
//! Corrugated board properties keyed by flute grade.
//!
//! The calibration table stores imperial base values only (inches for wall
//! thickness, lb/in for edge crush strength); metric presentation is derived
//! by scaling at the boundary, never stored. The table is an exhaustive
//! `match` over the closed [`FluteGrade`] enum, so adding a grade without a
//! matching entry is a compile-time failure rather than a silent runtime gap.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::materials::FluteGrade;
//!
//! let props = FluteGrade::B.properties();
//! assert_eq!(props.thickness_in, 0.125);
//! assert_eq!(props.ect_lb_per_in, 32.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CartonError, CartonResult};

/// Corrugation flute profiles, in descending wall thickness (A thickest,
/// E thinnest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FluteGrade {
    /// A-Flute, 1/4" wall
    #[serde(rename = "A-Flute")]
    A,
    /// B-Flute, 1/8" wall
    #[serde(rename = "B-Flute")]
    B,
    /// C-Flute, 3/16" wall
    #[serde(rename = "C-Flute")]
    C,
    /// E-Flute, 1/16" wall
    #[serde(rename = "E-Flute")]
    E,
}

impl FluteGrade {
    /// All flute grade variants for UI selection
    pub const ALL: [FluteGrade; 4] = [FluteGrade::A, FluteGrade::B, FluteGrade::C, FluteGrade::E];

    /// Get the single-letter code ("A", "B", "C", "E")
    pub fn code(&self) -> &'static str {
        match self {
            FluteGrade::A => "A",
            FluteGrade::B => "B",
            FluteGrade::C => "C",
            FluteGrade::E => "E",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CartonResult<Self> {
        match s.trim().to_uppercase().replace("-FLUTE", "").as_str() {
            "A" => Ok(FluteGrade::A),
            "B" => Ok(FluteGrade::B),
            "C" => Ok(FluteGrade::C),
            "E" => Ok(FluteGrade::E),
            _ => Err(CartonError::unknown_grade(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            FluteGrade::A => "A-Flute",
            FluteGrade::B => "B-Flute",
            FluteGrade::C => "C-Flute",
            FluteGrade::E => "E-Flute",
        }
    }

    /// Look up the board properties for this grade.
    ///
    /// Calibration values in imperial base units:
    ///
    /// | Grade | Thickness (in) | ECT (lb/in) |
    /// |-------|----------------|-------------|
    /// | E     | 0.0625 (1/16") | 29          |
    /// | B     | 0.125  (1/8")  | 32          |
    /// | C     | 0.1875 (3/16") | 32          |
    /// | A     | 0.25   (1/4")  | 32          |
    pub fn properties(&self) -> MaterialProperties {
        match self {
            FluteGrade::E => MaterialProperties {
                thickness_in: 0.0625,
                ect_lb_per_in: 29.0,
            },
            FluteGrade::B => MaterialProperties {
                thickness_in: 0.125,
                ect_lb_per_in: 32.0,
            },
            FluteGrade::C => MaterialProperties {
                thickness_in: 0.1875,
                ect_lb_per_in: 32.0,
            },
            FluteGrade::A => MaterialProperties {
                thickness_in: 0.25,
                ect_lb_per_in: 32.0,
            },
        }
    }
}

impl std::fmt::Display for FluteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Physical board properties for one flute grade.
///
/// Immutable, imperial base units. One instance per grade, produced by
/// [`FluteGrade::properties`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Wall thickness (inches)
    pub thickness_in: f64,
    /// Edge Crush Test strength (lb per inch of edge)
    pub ect_lb_per_in: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_table() {
        assert_eq!(FluteGrade::E.properties().thickness_in, 0.0625);
        assert_eq!(FluteGrade::E.properties().ect_lb_per_in, 29.0);
        assert_eq!(FluteGrade::B.properties().thickness_in, 0.125);
        assert_eq!(FluteGrade::B.properties().ect_lb_per_in, 32.0);
        assert_eq!(FluteGrade::C.properties().thickness_in, 0.1875);
        assert_eq!(FluteGrade::C.properties().ect_lb_per_in, 32.0);
        assert_eq!(FluteGrade::A.properties().thickness_in, 0.25);
        assert_eq!(FluteGrade::A.properties().ect_lb_per_in, 32.0);
    }

    #[test]
    fn test_all_grades_positive() {
        for grade in FluteGrade::ALL {
            let props = grade.properties();
            assert!(props.thickness_in > 0.0);
            assert!(props.ect_lb_per_in > 0.0);
        }
    }

    #[test]
    fn test_grade_parsing() {
        assert_eq!(FluteGrade::from_str_flexible("B").unwrap(), FluteGrade::B);
        assert_eq!(FluteGrade::from_str_flexible("b").unwrap(), FluteGrade::B);
        assert_eq!(
            FluteGrade::from_str_flexible("E-Flute").unwrap(),
            FluteGrade::E
        );
        assert_eq!(
            FluteGrade::from_str_flexible(" c ").unwrap(),
            FluteGrade::C
        );
        assert!(FluteGrade::from_str_flexible("F").is_err());
    }

    #[test]
    fn test_grade_display() {
        assert_eq!(FluteGrade::A.display_name(), "A-Flute");
        assert_eq!(FluteGrade::E.to_string(), "E-Flute");
    }

    #[test]
    fn test_serialization() {
        let grade = FluteGrade::C;
        let json = serde_json::to_string(&grade).unwrap();
        assert_eq!(json, "\"C-Flute\"");
        let roundtrip: FluteGrade = serde_json::from_str(&json).unwrap();
        assert_eq!(grade, roundtrip);

        let props = grade.properties();
        let json = serde_json::to_string(&props).unwrap();
        let roundtrip: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }
}
