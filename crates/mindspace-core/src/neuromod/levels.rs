//! Chemical level snapshots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selector for one of the five modulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Chemical {
    Dopamine,
    Serotonin,
    Noradrenaline,
    Oxytocin,
    Cortisol,
}

/// Levels of the five modulators, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemicalLevels {
    /// Motivation, reward, learning.
    pub dopamine: f32,
    /// Mood stability, well-being.
    pub serotonin: f32,
    /// Alertness, arousal, stress.
    pub noradrenaline: f32,
    /// Social bonding, empathy.
    pub oxytocin: f32,
    /// Stress response, anxiety.
    pub cortisol: f32,
}

impl ChemicalLevels {
    /// Resting state: everything at 0.5 except cortisol at 0.3.
    pub fn baseline() -> Self {
        Self {
            dopamine: 0.5,
            serotonin: 0.5,
            noradrenaline: 0.5,
            oxytocin: 0.5,
            cortisol: 0.3,
        }
    }

    pub fn level(&self, chemical: Chemical) -> f32 {
        match chemical {
            Chemical::Dopamine => self.dopamine,
            Chemical::Serotonin => self.serotonin,
            Chemical::Noradrenaline => self.noradrenaline,
            Chemical::Oxytocin => self.oxytocin,
            Chemical::Cortisol => self.cortisol,
        }
    }

    /// Shift one modulator by `delta`, clamping into `[0, 1]`.
    pub fn adjust(&mut self, chemical: Chemical, delta: f32) {
        let slot = match chemical {
            Chemical::Dopamine => &mut self.dopamine,
            Chemical::Serotonin => &mut self.serotonin,
            Chemical::Noradrenaline => &mut self.noradrenaline,
            Chemical::Oxytocin => &mut self.oxytocin,
            Chemical::Cortisol => &mut self.cortisol,
        };
        *slot = (*slot + delta).clamp(0.0, 1.0);
    }

    /// Mean absolute deviation from the resting state, in `[0, 1]`.
    pub fn arousal(&self) -> f32 {
        let baseline = Self::baseline();
        ((self.dopamine - baseline.dopamine).abs()
            + (self.serotonin - baseline.serotonin).abs()
            + (self.noradrenaline - baseline.noradrenaline).abs()
            + (self.oxytocin - baseline.oxytocin).abs()
            + (self.cortisol - baseline.cortisol).abs())
            / 5.0
    }
}

impl Default for ChemicalLevels {
    fn default() -> Self {
        Self::baseline()
    }
}

impl fmt::Display for ChemicalLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "dopamine {:.2}, serotonin {:.2}, noradrenaline {:.2}, oxytocin {:.2}, cortisol {:.2}",
            self.dopamine, self.serotonin, self.noradrenaline, self.oxytocin, self.cortisol
        )
    }
}
