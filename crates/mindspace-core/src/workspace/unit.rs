//! Information units competing for workspace entry, and the records
//! produced when one wins.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{MindspaceError, Result};

use super::{RECENCY_WEIGHT, RELEVANCE_WEIGHT, SALIENCE_WEIGHT};

/// A scored, timestamped, sourced piece of content competing for conscious
/// attention.
///
/// A unit is owned by exactly one container at a time: a processor's
/// outbound queue, then the workspace's competition pool, then (if it wins)
/// the active set. The copy in the active set is the canonical one;
/// broadcast records carry snapshots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InformationUnit {
    pub id: Uuid,
    /// Name of the processor that produced this unit.
    pub source: String,
    pub content: String,
    /// Attention-grabbing strength, `[0, 1]`.
    pub salience: f32,
    /// Contextual importance, `[0, 1]`.
    pub relevance: f32,
    pub timestamp: DateTime<Utc>,
    /// Current standing in arbitration; recomputed from priority on
    /// submission and each competition cycle, then decayed while active.
    pub activation_level: f32,
    /// Competition rounds lost so far; drives the optional pool aging
    /// policy.
    pub(crate) losing_cycles: u32,
}

impl InformationUnit {
    /// Create a new unit, validating score bounds.
    pub fn new(
        source: impl Into<String>,
        content: impl Into<String>,
        salience: f32,
        relevance: f32,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&salience) {
            return Err(MindspaceError::Validation(format!(
                "salience out of [0, 1]: {salience}"
            )));
        }
        if !(0.0..=1.0).contains(&relevance) {
            return Err(MindspaceError::Validation(format!(
                "relevance out of [0, 1]: {relevance}"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            source: source.into(),
            content: content.into(),
            salience,
            relevance,
            timestamp: Utc::now(),
            activation_level: 0.0,
            losing_cycles: 0,
        })
    }

    /// Age of this unit in fractional seconds, never negative.
    pub fn age_seconds(&self, now: DateTime<Utc>) -> f64 {
        ((now - self.timestamp).num_milliseconds() as f64 / 1000.0).max(0.0)
    }

    /// Priority for workspace access.
    ///
    /// Weighted blend of salience, relevance, and a recency term
    /// `1 / (1 + age_seconds)` that decays continuously with wall-clock
    /// age. Fresh units get a boost, but recency never drops to zero in
    /// one step.
    pub fn priority(&self, now: DateTime<Utc>) -> f32 {
        let recency = (1.0 / (1.0 + self.age_seconds(now))) as f32;
        self.salience * SALIENCE_WEIGHT + self.relevance * RELEVANCE_WEIGHT + recency * RECENCY_WEIGHT
    }
}

/// A winning unit as delivered to every registered processor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastRecord {
    pub id: Uuid,
    /// Snapshot of the unit at admission time.
    pub unit: InformationUnit,
    pub broadcast_at: DateTime<Utc>,
    /// Processor names the broadcast reached, in registration order.
    pub reached: Vec<String>,
}

impl BroadcastRecord {
    pub fn new(unit: InformationUnit) -> Self {
        Self {
            id: Uuid::new_v4(),
            unit,
            broadcast_at: Utc::now(),
            reached: Vec::new(),
        }
    }
}
