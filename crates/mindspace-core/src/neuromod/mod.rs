//! Homeostatic neurochemical affect model.
//!
//! Five modulators (dopamine, serotonin, noradrenaline, oxytocin, cortisol)
//! on a `[0, 1]` scale. Detected emotions push levels away from baseline;
//! every interaction cycle applies homeostatic decay that pulls them back.
//! Downstream consumers read the levels as behavioral modulation
//! parameters and as metadata folded into introspective reflection.
//!
//! ## Module Structure
//!
//! - `levels` - [`ChemicalLevels`] snapshot and the [`Chemical`] selector
//! - `system` - [`NeurochemicalSystem`] with the emotion mapping, decay,
//!   and behavioral read-outs

mod levels;
mod system;

pub use levels::{Chemical, ChemicalLevels};
pub use system::{BehavioralModulation, NeurochemicalSystem};

/// Fraction of the distance back toward baseline covered per decay step.
pub const HOMEOSTATIC_DECAY_RATE: f32 = 0.05;
