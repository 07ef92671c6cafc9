//! # Box Calculations
//!
//! This module contains the box calculation engines. Each engine follows
//! the pattern:
//!
//! - Input parameters (JSON-serializable)
//! - A derived result type (JSON-serializable)
//! - A pure function producing the result from the input
//!
//! Results are always recomputed from the current input snapshot and
//! replaced wholesale; nothing here caches or mutates derived state.
//!
//! ## Available Engines
//!
//! - [`panel_layout`] - Flat-pattern (net) panel dimensions
//! - [`folding`] - Assembly fold-angle choreography
//! - [`structural`] - Box compression and safe stacking load

pub mod folding;
pub mod panel_layout;
pub mod structural;

use serde::{Deserialize, Serialize};

use crate::errors::{CartonError, CartonResult};
use crate::materials::FluteGrade;
use crate::units::{convert_length, UnitSystem};

// Re-export commonly used types
pub use folding::{compute_angles, FoldPlayback, PanelAngles};
pub use panel_layout::{compute_layout, PanelLayout};
pub use structural::{analyze, StructuralAnalysis};

/// Nominal interior box dimensions plus board grade.
///
/// Values are expressed in whichever unit system is currently active; the
/// active system travels alongside this struct (see [`UnitSystem`]), never
/// inside it. The struct is a plain value passed into every engine on each
/// change.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length": 12.0,
///   "width": 10.0,
///   "height": 8.0,
///   "flute": "B-Flute"
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDimensions {
    /// Interior length
    pub length: f64,
    /// Interior width
    pub width: f64,
    /// Interior height
    pub height: f64,
    /// Corrugation flute grade
    pub flute: FluteGrade,
}

impl BoxDimensions {
    pub fn new(length: f64, width: f64, height: f64, flute: FluteGrade) -> Self {
        Self {
            length,
            width,
            height,
            flute,
        }
    }

    /// Validate input parameters.
    ///
    /// This is the input-validation boundary: the engines themselves assume
    /// positive, finite dimensions and do not re-check. Frontends must call
    /// this before invoking any engine.
    pub fn validate(&self) -> CartonResult<()> {
        for (field, value) in [
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(CartonError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be a finite number",
                ));
            }
            if value <= 0.0 {
                return Err(CartonError::invalid_input(
                    field,
                    value.to_string(),
                    "Dimension must be positive",
                ));
            }
        }
        Ok(())
    }

    /// Convert the raw dimensions from one unit system to another, rounding
    /// each to display precision.
    ///
    /// Each dimension converts independently, before any derived quantity
    /// (fold allowance, flap height) is computed from it. Converting a
    /// derived panel width instead would look algebraically equivalent but
    /// diverges once display rounding is involved, so layouts must always be
    /// recomputed from the converted raw dimensions.
    pub fn converted_to(&self, from: UnitSystem, to: UnitSystem) -> Self {
        Self {
            length: convert_length(self.length, from, to),
            width: convert_length(self.width, from, to),
            height: convert_length(self.height, from, to),
            flute: self.flute,
        }
    }

    /// Box perimeter 2(L+W) in the dimensions' own unit system
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

impl Default for BoxDimensions {
    fn default() -> Self {
        Self {
            length: 12.0,
            width: 10.0,
            height: 8.0,
            flute: FluteGrade::B,
        }
    }
}
