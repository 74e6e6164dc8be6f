//! Global Workspace - attention competition and broadcast
//!
//! A limited-capacity "broadcast channel" for conscious content, after
//! Baars' Global Workspace Theory.
//!
//! ## Algorithm (one cycle)
//!
//! 1. Collect: every registered processor drains its outbound queue into
//!    the competition pool
//! 2. Compete: pooled candidates are re-scored (recency decays with
//!    wall-clock age) and sorted by activation, descending and stable
//! 3. Admit: in priority order, candidates at or above the competition
//!    threshold fill the free capacity slots
//! 4. Broadcast: each winner is delivered synchronously to every processor,
//!    in registration order
//! 5. Decay: active units lose a fraction of their activation; units at or
//!    below the activation floor are evicted silently
//!
//! Losing candidates stay pooled and are retried next cycle; see
//! [`crate::config::WorkspaceConfig::max_losing_cycles`] for the optional
//! aging bound.
//!
//! ## Module Structure
//!
//! - `unit` - [`InformationUnit`] and [`BroadcastRecord`]
//! - `processor` - the [`Processor`] capability trait, its composable core,
//!   and the four domain processors
//! - `global` - the [`GlobalWorkspace`] arbitration engine

mod global;
mod processor;
mod unit;

pub use global::{
    ActiveSummary, BroadcastSummary, CompetitionSummary, CycleSummary, GlobalWorkspace,
};
pub use processor::{
    EmotionProcessor, LanguageProcessor, LinguisticFeatures, MemoryProcessor,
    MetaCognitionProcessor, Processor, ProcessorCore, SharedProcessor,
};
pub use unit::{BroadcastRecord, InformationUnit};

/// Weight of salience in the priority blend.
pub const SALIENCE_WEIGHT: f32 = 0.4;

/// Weight of contextual relevance in the priority blend.
pub const RELEVANCE_WEIGHT: f32 = 0.4;

/// Weight of the recency term `1 / (1 + age_seconds)` in the priority blend.
pub const RECENCY_WEIGHT: f32 = 0.2;

/// Broadcast history ring size.
///
/// The history is observability state, not arbitration state; bounding it
/// keeps long sessions at constant memory.
pub const BROADCAST_HISTORY_LIMIT: usize = 256;

/// Display truncation for workspace content in cycle summaries.
pub const SUMMARY_CONTENT_CHARS: usize = 100;
