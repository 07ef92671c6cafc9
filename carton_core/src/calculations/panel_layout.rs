//! # Panel Layout Engine
//!
//! Derives the manufacturable flat-pattern ("net") of a regular slotted
//! carton from interior dimensions and flute grade.
//!
//! The net wraps four body panels around the box in the alternating
//! pattern long, short, long, short (matching length/width), with a glue
//! tab appended once on the left edge for the manufacturing seam and
//! closing flaps above and below each body panel.
//!
//! ## Example
//!
//! ```rust
//! use carton_core::calculations::{compute_layout, BoxDimensions};
//! use carton_core::units::UnitSystem;
//!
//! let dims = BoxDimensions::default(); // 12 x 10 x 8, B-Flute
//! let layout = compute_layout(&dims, UnitSystem::Imperial);
//! assert_eq!(layout.panel_width_long, 12.5);
//! assert_eq!(layout.flap_height, 5.0625);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::BoxDimensions;
use crate::units::UnitSystem;

/// Glue tab width in inches, scaled by the unit factor for metric nets
pub const GLUE_TAB_WIDTH_IN: f64 = 1.25;

/// Extra panel length compensating for material consumed at each vertical
/// fold line, so the wrapped net closes without interference.
pub fn fold_allowance(thickness: f64) -> f64 {
    4.0 * thickness
}

/// Derived flat-pattern dimensions for one input snapshot.
///
/// Always replaced wholesale on any input change, never mutated in place.
/// Every consumer of a given snapshot (2D net renderer, 3D panel hierarchy
/// builder) must use the same instance so the two presentations agree.
///
/// Invariants for positive inputs:
/// - `total_width = glue_tab_width + 2*panel_width_long + 2*panel_width_short`
/// - `total_height = panel_height + 2*flap_height`
/// - all fields strictly positive
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    /// Body panel width for the length sides (length + fold allowance)
    pub panel_width_long: f64,
    /// Body panel width for the width sides (width + fold allowance)
    pub panel_width_short: f64,
    /// Body panel height (interior height, unmodified)
    pub panel_height: f64,
    /// Closing flap height (width/2 + thickness/2, meeting at the centerline)
    pub flap_height: f64,
    /// Slot clearance cut at each flap (1.5 x thickness)
    pub slot_width: f64,
    /// Manufacturing seam tab width
    pub glue_tab_width: f64,
    /// Overall net width
    pub total_width: f64,
    /// Overall net height
    pub total_height: f64,
    /// Board wall thickness in the active unit system
    pub thickness: f64,
    /// Length suffix for presentation ("in" or "mm")
    pub unit_suffix: String,
}

/// Compute the flat-pattern layout for the given dimensions.
///
/// Pure and infallible. Dimensions are taken as already expressed in the
/// active unit system; only the table thickness and the glue tab constant
/// are scaled here. Behavior on non-positive dimensions is undefined —
/// callers enforce positivity via [`BoxDimensions::validate`].
pub fn compute_layout(dims: &BoxDimensions, units: UnitSystem) -> PanelLayout {
    let scale = units.length_scale();
    let thickness = dims.flute.properties().thickness_in * scale;
    let allowance = fold_allowance(thickness);
    let glue_tab_width = GLUE_TAB_WIDTH_IN * scale;

    let panel_width_long = dims.length + allowance;
    let panel_width_short = dims.width + allowance;
    let panel_height = dims.height;

    // Flaps from opposing long panels reach half the width each, meeting at
    // the centerline, with a half-thickness correction for board bulk.
    let flap_height = dims.width / 2.0 + thickness / 2.0;

    // Clearance so adjacent flaps do not bind when folded past each other.
    let slot_width = thickness * 1.5;

    PanelLayout {
        panel_width_long,
        panel_width_short,
        panel_height,
        flap_height,
        slot_width,
        glue_tab_width,
        total_width: glue_tab_width + 2.0 * panel_width_long + 2.0 * panel_width_short,
        total_height: panel_height + 2.0 * flap_height,
        thickness,
        unit_suffix: units.length_suffix().to_string(),
    }
}
