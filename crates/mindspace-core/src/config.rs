//! Construction-time configuration for the workspace and meta-cognition
//! engines.
//!
//! All parameters are validated up front; the engines themselves assume a
//! valid configuration and never re-check. Defaults: capacity 3, decay 0.1,
//! admission threshold 0.5, survival floor 0.2, recursion depth 3, working
//! memory 7.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Arbitration parameters for [`crate::workspace::GlobalWorkspace`].
///
/// `competition_threshold` is the *admission* bar a candidate must clear to
/// enter the active set; `activation_floor` is the *survival* bar an active
/// unit must stay above during decay. The two are distinct constants and
/// must not be conflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    /// Maximum simultaneously active (conscious) units.
    pub capacity: usize,
    /// Fraction of activation an active unit loses per cycle, in `[0, 1)`.
    pub decay_rate: f32,
    /// Minimum priority required to enter the active set, in `[0, 1]`.
    pub competition_threshold: f32,
    /// Activation at or below which an active unit is evicted, in `[0, 1)`.
    pub activation_floor: f32,
    /// Pool aging policy: `None` retries losing candidates forever;
    /// `Some(n)` drops a candidate after `n` losing cycles.
    pub max_losing_cycles: Option<u32>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            capacity: 3,
            decay_rate: 0.1,
            competition_threshold: 0.5,
            activation_floor: 0.2,
            max_losing_cycles: None,
        }
    }
}

impl WorkspaceConfig {
    /// Validate every field against its allowed range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity < 1 {
            return Err(ConfigError::InvalidCapacity(self.capacity));
        }
        if !(0.0..1.0).contains(&self.decay_rate) {
            return Err(ConfigError::InvalidDecayRate(self.decay_rate));
        }
        if !(0.0..=1.0).contains(&self.competition_threshold) {
            return Err(ConfigError::InvalidThreshold(self.competition_threshold));
        }
        if !(0.0..1.0).contains(&self.activation_floor) {
            return Err(ConfigError::InvalidActivationFloor(self.activation_floor));
        }
        Ok(())
    }
}

/// Parameters for [`crate::metacognition::RecursiveMetaCognition`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetacognitionConfig {
    /// Recursion ceiling; 0 disables reflection entirely.
    pub max_depth: u32,
    /// Working memory slots (Miller's 7±2 by default).
    pub working_memory_capacity: usize,
    /// Ring size of the consciousness stream.
    pub stream_capacity: usize,
}

impl Default for MetacognitionConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            working_memory_capacity: 7,
            stream_capacity: 256,
        }
    }
}

impl MetacognitionConfig {
    /// Validate every field against its allowed range.
    ///
    /// `max_depth` has no upper bound here; callers are expected to keep it
    /// small since each level costs one reflection-backend call.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.working_memory_capacity < 1 {
            return Err(ConfigError::InvalidMemoryCapacity(
                self.working_memory_capacity,
            ));
        }
        if self.stream_capacity < 1 {
            return Err(ConfigError::InvalidStreamCapacity(self.stream_capacity));
        }
        Ok(())
    }
}

/// Full configuration for a [`crate::session::ConsciousnessSession`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub workspace: WorkspaceConfig,
    pub metacognition: MetacognitionConfig,
}

impl SessionConfig {
    /// Validate both sub-configurations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.workspace.validate()?;
        self.metacognition.validate()
    }
}
