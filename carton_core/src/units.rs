//! # Unit Types
//!
//! Type-safe wrappers for box engineering units. These provide compile-time
//! safety against unit confusion while remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Box design uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Imperial Units (Primary)
//!
//! Carton stores everything in imperial units internally, matching the
//! material calibration table (inches, pounds-force, pounds). Metric values
//! are always derived at the presentation boundary, never stored:
//! - Length: inches (in) ↔ millimeters (mm), factor 25.4
//! - Force: pounds-force (lbf) ↔ newtons (N), factor 4.44822
//! - Mass: pounds (lb) ↔ kilograms (kg), factor 0.453592
//!
//! Toggling a dimension between unit systems is round-trip safe only to
//! display precision (one decimal place); repeated toggling accumulates
//! rounding drift. This is an accepted limitation of presenting a single
//! editable value in two systems, not a defect.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::units::{Inches, Millimeters};
//!
//! let length = Inches(2.0);
//! let metric: Millimeters = length.into();
//! assert_eq!(metric.0, 50.8);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimeters per inch
pub const IN_TO_MM: f64 = 25.4;

/// Newtons per pound-force
pub const LBF_TO_N: f64 = 4.44822;

/// Kilograms per pound
pub const LBS_TO_KG: f64 = 0.453592;

/// Round a value to display precision (one decimal place).
///
/// All user-facing dimension values are held at this precision; converting
/// between unit systems rounds through it.
pub fn round_display(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * IN_TO_MM)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / IN_TO_MM)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in pounds-force
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lbf(pub f64);

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

impl From<Lbf> for Newtons {
    fn from(lbf: Lbf) -> Self {
        Newtons(lbf.0 * LBF_TO_N)
    }
}

impl From<Newtons> for Lbf {
    fn from(n: Newtons) -> Self {
        Lbf(n.0 / LBF_TO_N)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * LBS_TO_KG)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / LBS_TO_KG)
    }
}

// ============================================================================
// Unit System
// ============================================================================

/// Active presentation unit system.
///
/// Imperial is the canonical storage system; selecting Metric scales values
/// at the presentation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Imperial,
    Metric,
}

impl UnitSystem {
    /// Both unit system variants for UI selection
    pub const ALL: [UnitSystem; 2] = [UnitSystem::Imperial, UnitSystem::Metric];

    /// Multiplier applied to an imperial length to express it in this system
    pub fn length_scale(&self) -> f64 {
        match self {
            UnitSystem::Imperial => 1.0,
            UnitSystem::Metric => IN_TO_MM,
        }
    }

    /// Suffix for length values ("in" or "mm")
    pub fn length_suffix(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "in",
            UnitSystem::Metric => "mm",
        }
    }

    /// Label for force values ("LBF" or "N")
    pub fn force_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "LBF",
            UnitSystem::Metric => "N",
        }
    }

    /// Label for load (mass) values ("LBS" or "KG")
    pub fn load_label(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "LBS",
            UnitSystem::Metric => "KG",
        }
    }

    /// The other unit system (toggle target)
    pub fn toggled(&self) -> UnitSystem {
        match self {
            UnitSystem::Imperial => UnitSystem::Metric,
            UnitSystem::Metric => UnitSystem::Imperial,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitSystem::Imperial => "Imperial",
            UnitSystem::Metric => "Metric",
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Convert a raw length value between unit systems, rounded to display
/// precision.
///
/// Same-system conversion is the identity (no rounding applied), so values
/// only pass through `round_display` when they actually change systems.
pub fn convert_length(value: f64, from: UnitSystem, to: UnitSystem) -> f64 {
    if from == to {
        return value;
    }
    round_display(value * to.length_scale() / from.length_scale())
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Inches);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Lbf);
impl_arithmetic!(Newtons);
impl_arithmetic!(Pounds);
impl_arithmetic!(Kilograms);
