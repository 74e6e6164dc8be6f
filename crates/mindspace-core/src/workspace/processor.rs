//! Specialized processors - sources of information units and recipients of
//! broadcasts.
//!
//! Processors differ only in *what* they submit, never in how submission or
//! broadcast delivery works, so the shared mechanics live in
//! [`ProcessorCore`] and each domain processor embeds one and delegates.
//! New processor kinds implement [`Processor`] the same way; there is no
//! inheritance hierarchy.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::unit::{BroadcastRecord, InformationUnit};

/// Capability contract for participating in workspace arbitration.
///
/// A processor (a) accepts broadcasts into its inbound mailbox and
/// (b) yields zero or more pending units when drained. The outbound queue
/// only grows between cycles and is fully drained each time the workspace
/// collects submissions.
pub trait Processor: std::fmt::Debug + Send + Sync {
    /// Unique name; used as the broadcast source tag and registration key.
    fn name(&self) -> &str;

    /// Deliver one broadcast into this processor's mailbox.
    fn receive_broadcast(&mut self, record: &BroadcastRecord);

    /// Hand over all pending units, leaving the outbound queue empty.
    fn drain(&mut self) -> Vec<InformationUnit>;

    /// Broadcasts received so far.
    fn mailbox(&self) -> &[BroadcastRecord];
}

/// Shared handle to a processor.
///
/// Processors are written from two places - the session facade feeds them
/// domain observations, the workspace delivers broadcasts and drains
/// queues - so they sit behind `Arc<RwLock<..>>`. All access is from the
/// single session thread; the lock is never contended.
pub type SharedProcessor = Arc<RwLock<dyn Processor>>;

/// Mailbox/outbound mechanics shared by every processor kind.
#[derive(Debug)]
pub struct ProcessorCore {
    name: String,
    mailbox: Vec<BroadcastRecord>,
    outbound: Vec<InformationUnit>,
}

impl ProcessorCore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mailbox: Vec::new(),
            outbound: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn receive(&mut self, record: &BroadcastRecord) {
        self.mailbox.push(record.clone());
    }

    pub fn drain(&mut self) -> Vec<InformationUnit> {
        std::mem::take(&mut self.outbound)
    }

    pub fn mailbox(&self) -> &[BroadcastRecord] {
        &self.mailbox
    }

    /// Queue a unit for the next competition cycle.
    ///
    /// Scores are clamped to `[0, 1]`; domain processors compute them from
    /// heuristics and are allowed to be sloppy at the edges.
    pub fn submit(&mut self, content: impl Into<String>, salience: f32, relevance: f32) {
        let salience = salience.clamp(0.0, 1.0);
        let relevance = relevance.clamp(0.0, 1.0);
        if let Ok(unit) = InformationUnit::new(self.name.clone(), content, salience, relevance) {
            debug!(
                source = %self.name,
                salience,
                relevance,
                "queued unit for competition"
            );
            self.outbound.push(unit);
        }
    }
}

macro_rules! delegate_processor {
    ($ty:ty) => {
        impl Processor for $ty {
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
    };
}

/// Linguistic signals extracted upstream (the analyzer itself is an
/// external collaborator).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinguisticFeatures {
    pub is_question: bool,
    pub expressing_emotion: bool,
}

/// Submits affective observations.
#[derive(Debug)]
pub struct EmotionProcessor {
    core: ProcessorCore,
}

impl Default for EmotionProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionProcessor {
    pub fn new() -> Self {
        Self {
            core: ProcessorCore::new("emotion"),
        }
    }

    /// Strong emotions are more salient; intensity above 0.6 also raises
    /// relevance.
    pub fn observe_emotion(&mut self, emotion: &str, intensity: f32, context: &str) {
        let salience = intensity;
        let relevance = if intensity > 0.6 { 0.8 } else { 0.5 };
        let content = format!("Feeling {emotion} (intensity {intensity:.2}) - {context}");
        self.core.submit(content, salience, relevance);
    }
}

delegate_processor!(EmotionProcessor);

/// Submits language-understanding observations.
#[derive(Debug)]
pub struct LanguageProcessor {
    core: ProcessorCore,
}

impl Default for LanguageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageProcessor {
    pub fn new() -> Self {
        Self {
            core: ProcessorCore::new("language"),
        }
    }

    /// Questions are highly salient; emotional content raises relevance.
    pub fn observe_input(&mut self, text: &str, features: &LinguisticFeatures) {
        let salience = if features.is_question { 0.9 } else { 0.6 };
        let relevance = if features.expressing_emotion { 0.8 } else { 0.6 };
        let excerpt = crate::text::truncate_chars(text, 100);
        let content = format!("Language input: '{excerpt}'");
        self.core.submit(content, salience, relevance);
    }
}

delegate_processor!(LanguageProcessor);

/// Submits recalled memories.
#[derive(Debug)]
pub struct MemoryProcessor {
    core: ProcessorCore,
}

impl Default for MemoryProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryProcessor {
    pub fn new() -> Self {
        Self {
            core: ProcessorCore::new("memory"),
        }
    }

    /// Proposes the most recent recalled memory; silent when there are
    /// none.
    pub fn recall(&mut self, memories: &[String]) {
        if let Some(latest) = memories.last() {
            let excerpt = crate::text::truncate_chars(latest, 100);
            self.core.submit(format!("Memory recall: {excerpt}"), 0.7, 0.8);
        }
    }
}

delegate_processor!(MemoryProcessor);

/// Submits meta-cognitive reflections.
#[derive(Debug)]
pub struct MetaCognitionProcessor {
    core: ProcessorCore,
}

impl Default for MetaCognitionProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl MetaCognitionProcessor {
    pub fn new() -> Self {
        Self {
            core: ProcessorCore::new("metacognition"),
        }
    }

    /// Higher-level reflections are more abstract and therefore less
    /// salient; salience floors at 0.3.
    pub fn submit_reflection(&mut self, reflection: &str, level: u32) {
        let salience = (0.8 - level as f32 * 0.15).max(0.3);
        let content = format!("Meta-thought (L{level}): {reflection}");
        self.core.submit(content, salience, 0.7);
    }
}

delegate_processor!(MetaCognitionProcessor);
