//! # carton_core - Corrugated Box Calculation Engine
//!
//! `carton_core` is the computational heart of Carton: it derives the
//! manufacturable flat-pattern ("net") of a regular slotted carton, the
//! fold-angle choreography that animates assembly from flat to closed, and
//! a McKee-style compression/stacking-load estimate — all from three
//! interior dimensions and a flute grade.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every engine is a pure function from an input snapshot
//!   to a fresh derived value; nothing is cached or shared
//! - **JSON-First**: all inputs and results implement Serialize/Deserialize
//!   so renderers and exporters consume them as plain data
//! - **Imperial base units**: the material table stores imperial values;
//!   metric is derived at the presentation boundary, never stored
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use carton_core::calculations::{analyze, compute_layout, BoxDimensions};
//! use carton_core::units::UnitSystem;
//!
//! let dims = BoxDimensions::default(); // 12 x 10 x 8, B-Flute
//! dims.validate().unwrap();
//!
//! let layout = compute_layout(&dims, UnitSystem::Imperial);
//! let report = analyze(&dims, UnitSystem::Imperial);
//! println!("net: {} x {} in, safe load {} lbs",
//!     layout.total_width, layout.total_height, report.max_safe_load);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Panel layout, fold kinematics, structural analysis
//! - [`materials`] - Flute grade table (thickness, edge crush strength)
//! - [`units`] - Unit systems, conversion factors, typed unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    analyze, compute_angles, compute_layout, BoxDimensions, FoldPlayback, PanelAngles,
    PanelLayout, StructuralAnalysis,
};
pub use errors::{CartonError, CartonResult};
pub use materials::{FluteGrade, MaterialProperties};
pub use units::UnitSystem;
