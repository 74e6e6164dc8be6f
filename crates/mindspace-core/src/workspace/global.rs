//! GlobalWorkspace - capacity-bounded admission and broadcast.

use std::collections::VecDeque;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::WorkspaceConfig;
use crate::error::Result;
use crate::text::truncate_chars;

use super::processor::SharedProcessor;
use super::unit::{BroadcastRecord, InformationUnit};
use super::{BROADCAST_HISTORY_LIMIT, SUMMARY_CONTENT_CHARS};

/// The global workspace: a limited-capacity broadcast channel.
///
/// Per information unit the lifecycle is Proposed (processor outbound
/// queue) -> Competing (pool) -> Active (admitted and broadcast) ->
/// Decaying -> Evicted. Losing candidates stay in the pool and are retried
/// next cycle; they are never discarded for losing a single round.
#[derive(Debug)]
pub struct GlobalWorkspace {
    config: WorkspaceConfig,
    /// Conscious content, ordered by admission; never larger than
    /// `config.capacity`.
    active: Vec<InformationUnit>,
    /// Candidates awaiting admission.
    pool: Vec<InformationUnit>,
    /// Registered processors in registration order. Broadcast delivery
    /// iterates this order for every winner.
    processors: Vec<(String, SharedProcessor)>,
    /// Recent broadcasts, bounded ring.
    history: VecDeque<BroadcastRecord>,
}

impl GlobalWorkspace {
    /// Workspace with default parameters (capacity 3, decay 0.1,
    /// threshold 0.5, floor 0.2).
    pub fn new() -> Self {
        Self {
            config: WorkspaceConfig::default(),
            active: Vec::new(),
            pool: Vec::new(),
            processors: Vec::new(),
            history: VecDeque::new(),
        }
    }

    /// Workspace with validated custom parameters.
    pub fn with_config(config: WorkspaceConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    pub fn config(&self) -> &WorkspaceConfig {
        &self.config
    }

    /// Register a processor under its own name.
    ///
    /// Registering a second processor under an existing name replaces the
    /// first; recoverable misuse, logged rather than raised.
    pub fn register_processor(&mut self, processor: SharedProcessor) {
        let name = processor.read().name().to_string();
        if let Some(slot) = self.processors.iter_mut().find(|(n, _)| *n == name) {
            warn!(processor = %name, "duplicate processor registration, replacing previous");
            slot.1 = processor;
        } else {
            self.processors.push((name, processor));
        }
    }

    /// Put a unit into the competition pool.
    ///
    /// Stamps the unit's activation with its current priority. No other
    /// side effects; always succeeds.
    pub fn submit_information(&mut self, mut unit: InformationUnit) {
        unit.activation_level = unit.priority(Utc::now());
        self.pool.push(unit);
    }

    /// Run one round of competition for workspace access.
    ///
    /// Recomputes every pooled activation (recency moves with wall-clock
    /// time), sorts descending - the sort is stable, so equal-priority
    /// units keep their pool insertion order - and admits candidates at or
    /// above the competition threshold into the free slots. Each winner is
    /// broadcast to every registered processor in registration order,
    /// winners first by priority. Losers stay pooled; under a
    /// `max_losing_cycles` policy, candidates that have lost too many
    /// rounds are dropped.
    ///
    /// Returns the broadcasts made this round (possibly empty).
    pub fn competition_cycle(&mut self) -> Vec<BroadcastRecord> {
        if self.pool.is_empty() {
            return Vec::new();
        }

        let now = Utc::now();
        for unit in &mut self.pool {
            unit.activation_level = unit.priority(now);
        }
        self.pool
            .sort_by(|a, b| b.activation_level.total_cmp(&a.activation_level));

        let available = self.config.capacity.saturating_sub(self.active.len());
        let threshold = self.config.competition_threshold;

        let mut winners = Vec::new();
        let mut losers = Vec::new();
        for unit in self.pool.drain(..) {
            if winners.len() < available && unit.activation_level >= threshold {
                winners.push(unit);
            } else {
                losers.push(unit);
            }
        }

        for mut unit in losers {
            unit.losing_cycles += 1;
            match self.config.max_losing_cycles {
                Some(limit) if unit.losing_cycles >= limit => {
                    debug!(
                        source = %unit.source,
                        cycles = unit.losing_cycles,
                        "candidate aged out of competition pool"
                    );
                }
                _ => self.pool.push(unit),
            }
        }

        let reached: Vec<String> = self.processors.iter().map(|(n, _)| n.clone()).collect();
        let mut broadcasts = Vec::with_capacity(winners.len());
        for unit in winners {
            let mut record = BroadcastRecord::new(unit.clone());
            record.reached = reached.clone();
            for (_, processor) in &self.processors {
                processor.write().receive_broadcast(&record);
            }
            debug!(
                source = %record.unit.source,
                activation = record.unit.activation_level,
                reached = record.reached.len(),
                "broadcast winner to all processors"
            );
            self.active.push(unit);
            self.history.push_back(record.clone());
            if self.history.len() > BROADCAST_HISTORY_LIMIT {
                self.history.pop_front();
            }
            broadcasts.push(record);
        }

        broadcasts
    }

    /// Fade conscious content.
    ///
    /// Every active unit loses `decay_rate` of its activation; units at or
    /// below the activation floor are then evicted. Eviction is silent -
    /// no broadcast is made.
    pub fn decay_workspace(&mut self) {
        let keep_above = self.config.activation_floor;
        for unit in &mut self.active {
            unit.activation_level *= 1.0 - self.config.decay_rate;
        }
        let before = self.active.len();
        self.active.retain(|unit| unit.activation_level > keep_above);
        let evicted = before - self.active.len();
        if evicted > 0 {
            debug!(evicted, "evicted faded workspace content");
        }
    }

    /// One complete workspace cycle: collect -> compete -> broadcast ->
    /// decay.
    ///
    /// This is the per-turn driver; the other arbitration methods are its
    /// internal phases. Safe to call with zero processors and an empty
    /// pool - the summary simply reports nothing happened.
    pub fn process_cycle(&mut self) -> CycleSummary {
        let pending: Vec<InformationUnit> = self
            .processors
            .iter()
            .flat_map(|(_, processor)| processor.write().drain())
            .collect();
        let submissions = pending.len();
        for unit in pending {
            self.submit_information(unit);
        }

        let broadcasts = self.competition_cycle();
        self.decay_workspace();

        let now = Utc::now();
        CycleSummary {
            submissions,
            broadcasts: broadcasts
                .iter()
                .map(|record| BroadcastSummary {
                    source: record.unit.source.clone(),
                    content: record.unit.content.clone(),
                    priority: record.unit.activation_level,
                })
                .collect(),
            workspace: self
                .active
                .iter()
                .map(|unit| ActiveSummary {
                    source: unit.source.clone(),
                    content: truncate_chars(&unit.content, SUMMARY_CONTENT_CHARS),
                    activation: unit.activation_level,
                    age_seconds: unit.age_seconds(now),
                })
                .collect(),
            competition: CompetitionSummary {
                total_competitors: self.pool.len() + broadcasts.len(),
                winners: broadcasts.len(),
                occupancy: self.active.len(),
                capacity: self.config.capacity,
            },
        }
    }

    /// Current contents of consciousness.
    pub fn conscious_content(&self) -> Vec<String> {
        self.active.iter().map(|unit| unit.content.clone()).collect()
    }

    /// The most activated unit - the attention spotlight. `None` when the
    /// workspace is empty; order undefined on exact activation ties.
    pub fn attention_focus(&self) -> Option<&InformationUnit> {
        self.active
            .iter()
            .max_by(|a, b| a.activation_level.total_cmp(&b.activation_level))
    }

    /// Active units, admission-ordered.
    pub fn active_units(&self) -> &[InformationUnit] {
        &self.active
    }

    pub fn occupancy(&self) -> usize {
        self.active.len()
    }

    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    pub fn processor_count(&self) -> usize {
        self.processors.len()
    }

    pub fn processor_names(&self) -> Vec<String> {
        self.processors.iter().map(|(n, _)| n.clone()).collect()
    }

    /// Recent broadcasts, oldest first.
    pub fn broadcast_history(&self) -> impl Iterator<Item = &BroadcastRecord> {
        self.history.iter()
    }

    /// Human-readable snapshot of the active set.
    pub fn workspace_summary(&self) -> String {
        if self.active.is_empty() {
            return "Workspace: empty (unconscious processing only)".to_string();
        }

        let mut sorted: Vec<&InformationUnit> = self.active.iter().collect();
        sorted.sort_by(|a, b| b.activation_level.total_cmp(&a.activation_level));

        let mut summary = format!(
            "Conscious workspace ({}/{}):\n",
            self.active.len(),
            self.config.capacity
        );
        for (i, unit) in sorted.iter().enumerate() {
            summary.push_str(&format!(
                "  {}. [{}] {:.2} {}\n",
                i + 1,
                unit.source,
                unit.activation_level,
                truncate_chars(&unit.content, 80)
            ));
        }
        summary
    }

    /// Empty the active set and the competition pool; used on session
    /// reset. Registered processors and broadcast history are kept.
    pub fn clear(&mut self) {
        self.active.clear();
        self.pool.clear();
    }
}

impl Default for GlobalWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-cycle report returned by [`GlobalWorkspace::process_cycle`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleSummary {
    /// Units collected from processors this cycle.
    pub submissions: usize,
    /// Broadcasts made this cycle, priority order.
    pub broadcasts: Vec<BroadcastSummary>,
    /// Active set after decay.
    pub workspace: Vec<ActiveSummary>,
    pub competition: CompetitionSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BroadcastSummary {
    pub source: String,
    pub content: String,
    pub priority: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSummary {
    pub source: String,
    /// Truncated for display.
    pub content: String,
    pub activation: f32,
    pub age_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitionSummary {
    pub total_competitors: usize,
    pub winners: usize,
    pub occupancy: usize,
    pub capacity: usize,
}

#[cfg(test)]
#[path = "global_tests.rs"]
mod tests;
