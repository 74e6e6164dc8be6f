//! The homeostatic system: emotion-driven shifts and decay to baseline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::levels::{Chemical, ChemicalLevels};
use super::HOMEOSTATIC_DECAY_RATE;

use Chemical::{Cortisol, Dopamine, Noradrenaline, Oxytocin, Serotonin};

/// Per-emotion level shifts, applied scaled by intensity.
///
/// Unknown emotions (and `neutral`) shift nothing.
fn emotion_deltas(emotion: &str) -> &'static [(Chemical, f32)] {
    match emotion {
        "joy" | "happiness" => &[(Dopamine, 0.3), (Serotonin, 0.2), (Oxytocin, 0.1)],
        "sadness" => &[(Serotonin, -0.3), (Dopamine, -0.2), (Cortisol, 0.2)],
        "anger" => &[
            (Noradrenaline, 0.4),
            (Cortisol, 0.3),
            (Serotonin, -0.2),
            (Dopamine, -0.15),
        ],
        "fear" => &[(Cortisol, 0.4), (Noradrenaline, 0.3), (Serotonin, -0.1)],
        "anxiety" => &[(Cortisol, 0.35), (Noradrenaline, 0.2), (Serotonin, -0.15)],
        "surprise" => &[(Noradrenaline, 0.2), (Dopamine, 0.15)],
        "love" => &[(Oxytocin, 0.4), (Dopamine, 0.2), (Serotonin, 0.1)],
        "affection" => &[(Oxytocin, 0.3), (Serotonin, 0.1)],
        "trust" => &[(Oxytocin, 0.25), (Serotonin, 0.1)],
        "excitement" => &[(Dopamine, 0.3), (Noradrenaline, 0.2)],
        "disgust" => &[(Serotonin, -0.2), (Cortisol, 0.15)],
        _ => &[],
    }
}

/// How the current chemistry shapes response generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehavioralModulation {
    pub creativity: f32,
    pub positivity: f32,
    pub empathy: f32,
    pub urgency: f32,
    pub caution: f32,
    pub sociability: f32,
}

/// Brain chemistry influencing behavior across a session.
#[derive(Debug, Clone)]
pub struct NeurochemicalSystem {
    levels: ChemicalLevels,
    baseline: ChemicalLevels,
    decay_rate: f32,
}

impl NeurochemicalSystem {
    pub fn new() -> Self {
        Self {
            levels: ChemicalLevels::baseline(),
            baseline: ChemicalLevels::baseline(),
            decay_rate: HOMEOSTATIC_DECAY_RATE,
        }
    }

    /// Current levels snapshot.
    pub fn levels(&self) -> ChemicalLevels {
        self.levels
    }

    /// Shift chemistry in response to a detected emotion.
    ///
    /// The emotion label is matched case-insensitively; intensity is
    /// clamped to `[0, 1]` and scales every delta.
    pub fn apply_emotion(&mut self, emotion: &str, intensity: f32) {
        let intensity = intensity.clamp(0.0, 1.0);
        let label = emotion.to_lowercase();
        for (chemical, delta) in emotion_deltas(&label) {
            self.levels.adjust(*chemical, delta * intensity);
        }
        debug!(emotion = %label, intensity, levels = %self.levels, "applied emotion");
    }

    /// Pull every level a step back toward baseline; called once per
    /// interaction cycle.
    pub fn homeostatic_decay(&mut self) {
        for chemical in [Dopamine, Serotonin, Noradrenaline, Oxytocin, Cortisol] {
            let current = self.levels.level(chemical);
            let target = self.baseline.level(chemical);
            self.levels.adjust(chemical, (target - current) * self.decay_rate);
        }
    }

    /// Behavioral parameters derived from the current chemistry.
    pub fn behavioral_modulation(&self) -> BehavioralModulation {
        let l = &self.levels;
        BehavioralModulation {
            creativity: l.dopamine * 0.7 + (1.0 - l.cortisol) * 0.3,
            positivity: l.serotonin * 0.6 + l.dopamine * 0.4,
            empathy: l.oxytocin * 0.7 + l.serotonin * 0.3,
            urgency: l.noradrenaline * 0.6 + l.cortisol * 0.4,
            caution: l.cortisol * 0.7 + (1.0 - l.dopamine) * 0.3,
            sociability: l.oxytocin * 0.5 + l.serotonin * 0.3 + l.dopamine * 0.2,
        }
    }

    /// Descriptive label for the overall emotional state.
    pub fn emotional_state(&self) -> &'static str {
        let l = &self.levels;
        if l.dopamine > 0.6 && l.serotonin > 0.6 {
            "content and motivated"
        } else if l.oxytocin > 0.6 {
            "warm and connected"
        } else if l.cortisol > 0.6 && l.noradrenaline > 0.6 {
            "stressed and alert"
        } else if l.serotonin < 0.3 {
            "subdued and reflective"
        } else if l.noradrenaline > 0.6 {
            "alert and focused"
        } else {
            "balanced and neutral"
        }
    }
}

impl Default for NeurochemicalSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joy_raises_dopamine_scaled_by_intensity() {
        let mut system = NeurochemicalSystem::new();
        system.apply_emotion("Joy", 0.5);
        let levels = system.levels();
        assert!((levels.dopamine - 0.65).abs() < 1e-6);
        assert!((levels.serotonin - 0.6).abs() < 1e-6);
        assert!((levels.oxytocin - 0.55).abs() < 1e-6);
    }

    #[test]
    fn unknown_emotions_shift_nothing() {
        let mut system = NeurochemicalSystem::new();
        system.apply_emotion("melancholic-nostalgia", 1.0);
        assert_eq!(system.levels(), ChemicalLevels::baseline());
    }

    #[test]
    fn extreme_emotions_stay_within_bounds() {
        let mut system = NeurochemicalSystem::new();
        for _ in 0..20 {
            system.apply_emotion("fear", 1.0);
        }
        let levels = system.levels();
        assert!(levels.cortisol <= 1.0);
        assert!(levels.serotonin >= 0.0);
        assert!(levels.noradrenaline <= 1.0);
    }

    #[test]
    fn homeostatic_decay_converges_to_baseline() {
        let mut system = NeurochemicalSystem::new();
        system.apply_emotion("anger", 1.0);
        assert_ne!(system.levels(), ChemicalLevels::baseline());

        for _ in 0..200 {
            system.homeostatic_decay();
        }
        let levels = system.levels();
        let baseline = ChemicalLevels::baseline();
        assert!((levels.noradrenaline - baseline.noradrenaline).abs() < 1e-3);
        assert!((levels.cortisol - baseline.cortisol).abs() < 1e-3);
        assert!((levels.serotonin - baseline.serotonin).abs() < 1e-3);
    }

    #[test]
    fn emotional_state_ladder() {
        let mut system = NeurochemicalSystem::new();
        assert_eq!(system.emotional_state(), "balanced and neutral");

        system.apply_emotion("joy", 1.0);
        assert_eq!(system.emotional_state(), "content and motivated");

        let mut stressed = NeurochemicalSystem::new();
        stressed.apply_emotion("fear", 1.0);
        assert_eq!(stressed.emotional_state(), "stressed and alert");

        let mut warm = NeurochemicalSystem::new();
        warm.apply_emotion("love", 0.5);
        assert_eq!(warm.emotional_state(), "warm and connected");
    }

    #[test]
    fn modulation_reflects_chemistry() {
        let calm = NeurochemicalSystem::new().behavioral_modulation();
        let mut anxious = NeurochemicalSystem::new();
        anxious.apply_emotion("anxiety", 1.0);
        let tense = anxious.behavioral_modulation();

        assert!(tense.urgency > calm.urgency);
        assert!(tense.caution > calm.caution);
        assert!(tense.positivity < calm.positivity);
    }
}
