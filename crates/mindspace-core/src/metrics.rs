//! Consciousness scoring - a consumer of workspace and reflection state.
//!
//! Reads only the public accessors of the engines (conscious content,
//! broadcast history, flattened reflections, chemical levels) and derives
//! scalar scores per turn. The scores feed back into the next turn's
//! behavior through [`BehavioralFeedback`], which makes the feedback loop
//! explicit state rather than a hidden instance attribute.

use std::collections::{BTreeSet, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::metacognition::FlatReflection;
use crate::neuromod::ChemicalLevels;
use crate::workspace::GlobalWorkspace;

/// Score history ring size.
pub const METRICS_HISTORY_LIMIT: usize = 128;

/// Placeholder prefix produced when a reflection call fails; such entries
/// do not count as reportable.
const PLACEHOLDER_PREFIX: &str = "(reflection unavailable";

/// Scalar consciousness indicators for one turn, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsciousnessScore {
    /// Source diversity of the active set: how many distinct processors
    /// contributed to current conscious content.
    pub integration: f32,
    /// How widely conscious content is available: occupancy combined with
    /// broadcast reach.
    pub global_availability: f32,
    /// Achieved reflection depth relative to the configured ceiling.
    pub meta_cognitive_depth: f32,
    /// Overlap of conscious content with the previous turn.
    pub temporal_binding: f32,
    /// Fraction of reflections that produced usable text.
    pub reportability: f32,
    /// Weighted blend of the above.
    pub overall: f32,
    pub timestamp: DateTime<Utc>,
}

impl ConsciousnessScore {
    /// The behavioral parameters the next turn consumes.
    pub fn feedback(&self) -> BehavioralFeedback {
        BehavioralFeedback {
            meta_depth: self.meta_cognitive_depth,
            integration: self.integration,
            reportability: self.reportability,
            stability: self.temporal_binding,
            awareness: self.global_availability,
        }
    }
}

/// Consciousness-derived modulation handed to the *next* turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BehavioralFeedback {
    /// Controls recursion appetite.
    pub meta_depth: f32,
    /// Controls module coordination.
    pub integration: f32,
    /// Controls verbal accessibility.
    pub reportability: f32,
    /// Controls response consistency.
    pub stability: f32,
    /// Controls self-reference.
    pub awareness: f32,
}

/// Computes and accumulates per-turn consciousness scores.
#[derive(Debug, Default)]
pub struct MetricsTracker {
    history: VecDeque<ConsciousnessScore>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score the current turn.
    ///
    /// `previous_conscious` is the workspace content at the end of the
    /// previous turn; `max_depth` is the configured recursion ceiling.
    pub fn compute(
        &mut self,
        workspace: &GlobalWorkspace,
        reflections: &[FlatReflection],
        previous_conscious: &[String],
        chemicals: &ChemicalLevels,
        max_depth: u32,
    ) -> ConsciousnessScore {
        let integration = integration(workspace);
        let global_availability = global_availability(workspace);
        let meta_cognitive_depth = depth_score(reflections, max_depth);
        let temporal_binding = temporal_binding(workspace, previous_conscious);
        let reportability = reportability(reflections);

        // chemistry near baseline reads as a stable, settled system
        let homeostasis = 1.0 - chemicals.arousal();

        let overall = integration * 0.25
            + global_availability * 0.2
            + meta_cognitive_depth * 0.2
            + temporal_binding * 0.15
            + reportability * 0.15
            + homeostasis * 0.05;

        let score = ConsciousnessScore {
            integration,
            global_availability,
            meta_cognitive_depth,
            temporal_binding,
            reportability,
            overall,
            timestamp: Utc::now(),
        };

        self.history.push_back(score);
        if self.history.len() > METRICS_HISTORY_LIMIT {
            self.history.pop_front();
        }
        score
    }

    pub fn latest(&self) -> Option<&ConsciousnessScore> {
        self.history.back()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Trend report over the last `recent_n` measurements.
    pub fn summary(&self, recent_n: usize) -> String {
        if self.history.is_empty() {
            return "No consciousness measurements yet.".to_string();
        }

        let skip = self.history.len().saturating_sub(recent_n);
        let recent: Vec<&ConsciousnessScore> = self.history.iter().skip(skip).collect();
        let n = recent.len() as f32;
        let mean = |f: fn(&ConsciousnessScore) -> f32| recent.iter().map(|s| f(s)).sum::<f32>() / n;

        format!(
            "Consciousness metrics (based on last {} measurements):\n\
             \x20 integration:         {:.3}\n\
             \x20 global availability: {:.3}\n\
             \x20 meta-cognitive depth:{:.3}\n\
             \x20 temporal binding:    {:.3}\n\
             \x20 reportability:       {:.3}\n\
             \x20 overall:             {:.3}\n",
            recent.len(),
            mean(|s| s.integration),
            mean(|s| s.global_availability),
            mean(|s| s.meta_cognitive_depth),
            mean(|s| s.temporal_binding),
            mean(|s| s.reportability),
            mean(|s| s.overall),
        )
    }
}

/// Distinct contributing sources over registered processors.
fn integration(workspace: &GlobalWorkspace) -> f32 {
    let processors = workspace.processor_count();
    if processors == 0 || workspace.occupancy() == 0 {
        return 0.0;
    }
    let sources: BTreeSet<&str> = workspace
        .active_units()
        .iter()
        .map(|unit| unit.source.as_str())
        .collect();
    (sources.len() as f32 / processors as f32).min(1.0)
}

/// Occupancy fraction blended with how many processors recent broadcasts
/// reached.
fn global_availability(workspace: &GlobalWorkspace) -> f32 {
    let capacity = workspace.config().capacity;
    if capacity == 0 {
        return 0.0;
    }
    let occupancy = workspace.occupancy() as f32 / capacity as f32;

    let processors = workspace.processor_count();
    let reach: Vec<f32> = workspace
        .broadcast_history()
        .map(|record| {
            if processors == 0 {
                0.0
            } else {
                record.reached.len() as f32 / processors as f32
            }
        })
        .collect();
    let mean_reach = if reach.is_empty() {
        0.0
    } else {
        reach.iter().sum::<f32>() / reach.len() as f32
    };

    (occupancy * 0.5 + mean_reach * 0.5).min(1.0)
}

/// Levels achieved beyond the base response, relative to the ceiling.
fn depth_score(reflections: &[FlatReflection], max_depth: u32) -> f32 {
    if max_depth == 0 || reflections.is_empty() {
        return 0.0;
    }
    let achieved = reflections.iter().map(|r| r.level).max().unwrap_or(0);
    (achieved as f32 / max_depth as f32).min(1.0)
}

/// Overlap between current and previous conscious content (Jaccard on
/// exact strings; conscious units persist across turns while active).
fn temporal_binding(workspace: &GlobalWorkspace, previous_conscious: &[String]) -> f32 {
    let current: BTreeSet<&str> = workspace
        .active_units()
        .iter()
        .map(|unit| unit.content.as_str())
        .collect();
    let previous: BTreeSet<&str> = previous_conscious.iter().map(String::as_str).collect();
    let union = current.union(&previous).count();
    if union == 0 {
        return 0.0;
    }
    current.intersection(&previous).count() as f32 / union as f32
}

/// Fraction of reflections with usable (non-empty, non-placeholder) text.
fn reportability(reflections: &[FlatReflection]) -> f32 {
    if reflections.is_empty() {
        return 0.0;
    }
    let usable = reflections
        .iter()
        .filter(|r| !r.content.trim().is_empty() && !r.content.starts_with(PLACEHOLDER_PREFIX))
        .count();
    usable as f32 / reflections.len() as f32
}
