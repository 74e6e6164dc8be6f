//! Tests for GlobalWorkspace arbitration.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;

use super::*;
use crate::config::WorkspaceConfig;
use crate::workspace::processor::{Processor, ProcessorCore};
use crate::workspace::unit::{BroadcastRecord, InformationUnit};
use crate::workspace::{RECENCY_WEIGHT, RELEVANCE_WEIGHT, SALIENCE_WEIGHT};

/// Minimal processor used to observe broadcast delivery and feed units in.
#[derive(Debug)]
struct Probe {
    core: ProcessorCore,
}

impl Probe {
    fn new(name: &str) -> Self {
        Self {
            core: ProcessorCore::new(name),
        }
    }

    fn queue(&mut self, content: &str, salience: f32, relevance: f32) {
        self.core.submit(content, salience, relevance);
    }
}

impl Processor for Probe {
    fn name(&self) -> &str {
        self.core.name()
    }

    fn receive_broadcast(&mut self, record: &BroadcastRecord) {
        self.core.receive(record);
    }

    fn drain(&mut self) -> Vec<InformationUnit> {
        self.core.drain()
    }

    fn mailbox(&self) -> &[BroadcastRecord] {
        self.core.mailbox()
    }
}

/// A fresh unit whose priority is approximately `target` (recency ~ 1.0, so
/// priority = 0.4 * (s + r) + 0.2 with s = r).
fn unit_with_priority(source: &str, content: &str, target: f32) -> InformationUnit {
    let score = (target - RECENCY_WEIGHT) / (SALIENCE_WEIGHT + RELEVANCE_WEIGHT);
    InformationUnit::new(source, content, score, score).unwrap()
}

#[test]
fn capacity_invariant_holds_under_pressure() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 3,
        decay_rate: 0.0,
        ..Default::default()
    })
    .unwrap();

    for round in 0..5 {
        for i in 0..10 {
            workspace.submit_information(unit_with_priority(
                "emotion",
                &format!("round {round} unit {i}"),
                0.9,
            ));
        }
        workspace.process_cycle();
        assert!(workspace.occupancy() <= 3, "round {round} overflowed");
    }
}

#[test]
fn below_threshold_candidates_are_never_admitted() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 3,
        competition_threshold: 0.5,
        ..Default::default()
    })
    .unwrap();

    workspace.submit_information(unit_with_priority("memory", "too faint", 0.3));
    let broadcasts = workspace.competition_cycle();

    assert!(broadcasts.is_empty());
    assert_eq!(workspace.occupancy(), 0);
    // the loser is retried, not discarded
    assert_eq!(workspace.pool_len(), 1);
}

#[test]
fn decay_strictly_decreases_until_eviction_at_floor() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 1,
        decay_rate: 0.3,
        competition_threshold: 0.4,
        activation_floor: 0.2,
        ..Default::default()
    })
    .unwrap();

    workspace.submit_information(unit_with_priority("language", "fading thought", 0.9));
    workspace.competition_cycle();

    let mut previous = workspace.active_units()[0].activation_level;
    let mut decays = 0;
    while workspace.occupancy() > 0 {
        workspace.decay_workspace();
        decays += 1;
        if let Some(unit) = workspace.active_units().first() {
            assert!(unit.activation_level < previous);
            assert!(unit.activation_level > 0.2);
            previous = unit.activation_level;
        }
        assert!(decays < 50, "unit never evicted");
    }
    // the last decay took it to or below the floor
    assert!(previous * 0.7 <= 0.2);
}

#[test]
fn empty_cycle_is_idempotent() {
    let mut workspace = GlobalWorkspace::new();
    let summary = workspace.process_cycle();

    assert_eq!(summary.submissions, 0);
    assert!(summary.broadcasts.is_empty());
    assert!(summary.workspace.is_empty());
    assert_eq!(summary.competition.winners, 0);
    assert_eq!(summary.competition.occupancy, 0);
}

#[test]
fn admission_and_two_stage_decay_scenario() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 2,
        decay_rate: 0.5,
        competition_threshold: 0.4,
        activation_floor: 0.2,
        max_losing_cycles: None,
    })
    .unwrap();

    workspace.submit_information(unit_with_priority("emotion", "strong signal", 0.9));
    workspace.submit_information(unit_with_priority("language", "medium signal", 0.6));
    workspace.submit_information(unit_with_priority("memory", "weak signal", 0.3));

    let broadcasts = workspace.competition_cycle();
    assert_eq!(broadcasts.len(), 2);
    assert_eq!(broadcasts[0].unit.source, "emotion");
    assert_eq!(broadcasts[1].unit.source, "language");
    assert_eq!(workspace.occupancy(), 2);
    assert_eq!(workspace.pool_len(), 1);

    // first decay: ~[0.45, 0.30], both above the floor
    workspace.decay_workspace();
    assert_eq!(workspace.occupancy(), 2);
    let activations: Vec<f32> = workspace
        .active_units()
        .iter()
        .map(|u| u.activation_level)
        .collect();
    assert!((activations[0] - 0.45).abs() < 0.01);
    assert!((activations[1] - 0.30).abs() < 0.01);

    // second decay: ~[0.225, 0.15]; the weaker unit falls through the floor
    workspace.decay_workspace();
    assert_eq!(workspace.occupancy(), 1);
    assert_eq!(workspace.active_units()[0].source, "emotion");
    assert!((workspace.active_units()[0].activation_level - 0.225).abs() < 0.01);
}

#[test]
fn losing_candidate_wins_once_a_slot_frees() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 1,
        decay_rate: 0.6,
        competition_threshold: 0.4,
        activation_floor: 0.2,
        max_losing_cycles: None,
    })
    .unwrap();

    workspace.submit_information(unit_with_priority("emotion", "dominant", 0.9));
    workspace.submit_information(unit_with_priority("memory", "patient", 0.7));

    workspace.competition_cycle();
    assert_eq!(workspace.active_units()[0].source, "emotion");
    assert_eq!(workspace.pool_len(), 1);

    // one decay evicts the dominant unit (0.9 * 0.4 = 0.36... still above
    // 0.2; decay twice)
    workspace.decay_workspace();
    workspace.decay_workspace();
    assert_eq!(workspace.occupancy(), 0);

    let broadcasts = workspace.competition_cycle();
    assert_eq!(broadcasts.len(), 1);
    assert_eq!(broadcasts[0].unit.source, "memory");
}

#[test]
fn pool_aging_drops_candidates_after_the_configured_losses() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 1,
        competition_threshold: 0.5,
        max_losing_cycles: Some(2),
        ..Default::default()
    })
    .unwrap();

    workspace.submit_information(unit_with_priority("memory", "never wins", 0.3));

    workspace.competition_cycle();
    assert_eq!(workspace.pool_len(), 1, "first loss retries");

    workspace.competition_cycle();
    assert_eq!(workspace.pool_len(), 0, "second loss ages the candidate out");
}

#[test]
fn equal_priority_preserves_submission_order() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 1,
        competition_threshold: 0.4,
        ..Default::default()
    })
    .unwrap();

    let now = Utc::now();
    let mut first = unit_with_priority("emotion", "first in", 0.8);
    let mut second = unit_with_priority("language", "second in", 0.8);
    first.timestamp = now;
    second.timestamp = now;

    workspace.submit_information(first);
    workspace.submit_information(second);

    let broadcasts = workspace.competition_cycle();
    assert_eq!(broadcasts.len(), 1);
    assert_eq!(broadcasts[0].unit.content, "first in");
}

#[test]
fn broadcasts_reach_every_processor_in_registration_order() {
    let mut workspace = GlobalWorkspace::new();
    let alpha = Arc::new(RwLock::new(Probe::new("alpha")));
    let beta = Arc::new(RwLock::new(Probe::new("beta")));
    workspace.register_processor(alpha.clone());
    workspace.register_processor(beta.clone());

    alpha.write().queue("alpha says hello", 0.9, 0.9);
    let summary = workspace.process_cycle();

    assert_eq!(summary.submissions, 1);
    assert_eq!(summary.broadcasts.len(), 1);
    // winners reach all processors, the submitter included
    assert_eq!(alpha.read().mailbox().len(), 1);
    assert_eq!(beta.read().mailbox().len(), 1);
    assert_eq!(
        alpha.read().mailbox()[0].reached,
        vec!["alpha".to_string(), "beta".to_string()]
    );
}

#[test]
fn duplicate_registration_replaces_the_previous_processor() {
    let mut workspace = GlobalWorkspace::new();
    let original = Arc::new(RwLock::new(Probe::new("twin")));
    let replacement = Arc::new(RwLock::new(Probe::new("twin")));
    workspace.register_processor(original.clone());
    workspace.register_processor(replacement.clone());

    assert_eq!(workspace.processor_count(), 1);

    workspace.submit_information(unit_with_priority("emotion", "news", 0.9));
    workspace.competition_cycle();

    assert!(original.read().mailbox().is_empty());
    assert_eq!(replacement.read().mailbox().len(), 1);
}

#[test]
fn attention_focus_is_the_most_activated_unit() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 3,
        competition_threshold: 0.4,
        ..Default::default()
    })
    .unwrap();

    assert!(workspace.attention_focus().is_none());

    workspace.submit_information(unit_with_priority("memory", "background", 0.6));
    workspace.submit_information(unit_with_priority("emotion", "spotlight", 0.9));
    workspace.competition_cycle();

    let focus = workspace.attention_focus().unwrap();
    assert_eq!(focus.source, "emotion");
}

#[test]
fn clear_empties_active_set_and_pool_but_keeps_processors() {
    let mut workspace = GlobalWorkspace::new();
    let probe = Arc::new(RwLock::new(Probe::new("alpha")));
    workspace.register_processor(probe);

    workspace.submit_information(unit_with_priority("emotion", "active", 0.9));
    workspace.competition_cycle();
    workspace.submit_information(unit_with_priority("memory", "pooled", 0.3));

    workspace.clear();
    assert_eq!(workspace.occupancy(), 0);
    assert_eq!(workspace.pool_len(), 0);
    assert_eq!(workspace.processor_count(), 1);
}

#[test]
fn cycle_summary_reports_competition_numbers() {
    let mut workspace = GlobalWorkspace::with_config(WorkspaceConfig {
        capacity: 2,
        competition_threshold: 0.4,
        ..Default::default()
    })
    .unwrap();

    workspace.submit_information(unit_with_priority("emotion", "a", 0.9));
    workspace.submit_information(unit_with_priority("language", "b", 0.8));
    workspace.submit_information(unit_with_priority("memory", "c", 0.3));

    let summary = workspace.process_cycle();
    assert_eq!(summary.competition.total_competitors, 3);
    assert_eq!(summary.competition.winners, 2);
    assert_eq!(summary.competition.capacity, 2);
    assert_eq!(summary.competition.occupancy, 2);
    assert_eq!(summary.workspace.len(), 2);
}

#[test]
fn conscious_content_lists_active_texts() {
    let mut workspace = GlobalWorkspace::new();
    workspace.submit_information(unit_with_priority("emotion", "vivid feeling", 0.9));
    workspace.competition_cycle();

    let content = workspace.conscious_content();
    assert_eq!(content, vec!["vivid feeling".to_string()]);
}
