//! Session facade - one conversational turn through the full pipeline.
//!
//! Owns the workspace, the four processors, the recursion engine, the
//! chemistry, and the metrics tracker, and wires them in the canonical
//! per-turn order: ingest -> reflect -> submit reflections -> one workspace
//! cycle -> homeostatic decay -> score. The previous turn's score is
//! threaded to the next turn as explicit state ([`ConsciousnessSession::last_feedback`]),
//! never as a hidden side channel.
//!
//! Text generation and feature extraction happen outside; a turn receives
//! their outputs as plain data on [`TurnInput`].

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::metacognition::{FlatReflection, RecursiveMetaCognition, ReflectionContext};
use crate::metrics::{BehavioralFeedback, ConsciousnessScore, MetricsTracker};
use crate::neuromod::{BehavioralModulation, ChemicalLevels, NeurochemicalSystem};
use crate::text::truncate_chars;
use crate::traits::ReflectionGenerator;
use crate::workspace::{
    CycleSummary, EmotionProcessor, GlobalWorkspace, LanguageProcessor, LinguisticFeatures,
    MemoryProcessor, MetaCognitionProcessor,
};

/// An emotion label with detection confidence, produced by an external
/// classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionReading {
    pub label: String,
    /// Detection confidence, doubling as intensity, `[0, 1]`.
    pub intensity: f32,
}

impl EmotionReading {
    pub fn new(label: impl Into<String>, intensity: f32) -> Self {
        Self {
            label: label.into(),
            intensity,
        }
    }
}

impl Default for EmotionReading {
    fn default() -> Self {
        Self::new("neutral", 0.0)
    }
}

/// Everything the external collaborators produced for one turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TurnInput {
    /// What the user said.
    pub user_text: String,
    /// The externally generated response being reflected upon.
    pub response_text: String,
    /// Emotion detected in the user's text.
    pub user_emotion: EmotionReading,
    /// Emotion detected in the bot's own response; this one drives
    /// chemistry.
    pub bot_emotion: EmotionReading,
    pub linguistic: LinguisticFeatures,
    /// Memories an external retrieval step considered relevant.
    pub recalled_memories: Vec<String>,
}

/// The state produced by one turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnOutcome {
    pub turn: u64,
    pub cycle: CycleSummary,
    pub reflections: Vec<FlatReflection>,
    pub emotional_state: String,
    pub modulation: BehavioralModulation,
    pub chemicals: ChemicalLevels,
    pub score: ConsciousnessScore,
    /// What the *next* turn will receive as consciousness feedback.
    pub feedback: BehavioralFeedback,
}

/// A full consciousness session: one workspace, four processors, one
/// recursion engine, one chemistry, living for the whole conversation.
pub struct ConsciousnessSession {
    workspace: GlobalWorkspace,
    emotion: Arc<RwLock<EmotionProcessor>>,
    language: Arc<RwLock<LanguageProcessor>>,
    memory: Arc<RwLock<MemoryProcessor>>,
    metacog: Arc<RwLock<MetaCognitionProcessor>>,
    metacognition: RecursiveMetaCognition,
    chemistry: NeurochemicalSystem,
    metrics: MetricsTracker,
    previous_conscious: Vec<String>,
    last_feedback: Option<BehavioralFeedback>,
    turn: u64,
}

impl ConsciousnessSession {
    pub fn new() -> Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Result<Self> {
        config.validate()?;

        let mut workspace = GlobalWorkspace::with_config(config.workspace.clone())?;
        let emotion = Arc::new(RwLock::new(EmotionProcessor::new()));
        let language = Arc::new(RwLock::new(LanguageProcessor::new()));
        let memory = Arc::new(RwLock::new(MemoryProcessor::new()));
        let metacog = Arc::new(RwLock::new(MetaCognitionProcessor::new()));
        workspace.register_processor(emotion.clone());
        workspace.register_processor(language.clone());
        workspace.register_processor(memory.clone());
        workspace.register_processor(metacog.clone());

        Ok(Self {
            workspace,
            emotion,
            language,
            memory,
            metacog,
            metacognition: RecursiveMetaCognition::with_config(&config.metacognition)?,
            chemistry: NeurochemicalSystem::new(),
            metrics: MetricsTracker::new(),
            previous_conscious: Vec::new(),
            last_feedback: None,
            turn: 0,
        })
    }

    /// Run one conversational turn.
    ///
    /// Always completes: the only fallible collaborator call is reflection
    /// generation, and the recursion engine degrades that to placeholders.
    pub fn process_turn(
        &mut self,
        input: &TurnInput,
        generator: &dyn ReflectionGenerator,
    ) -> TurnOutcome {
        self.turn += 1;
        info!(turn = self.turn, "processing conversational turn");

        // ingest the user's side
        self.emotion.write().observe_emotion(
            &input.user_emotion.label,
            input.user_emotion.intensity,
            &format!("User expressed: {}", truncate_chars(&input.user_text, 50)),
        );
        self.language
            .write()
            .observe_input(&input.user_text, &input.linguistic);
        self.memory.write().recall(&input.recalled_memories);

        // the bot's own affect responds to what it just said
        self.chemistry
            .apply_emotion(&input.bot_emotion.label, input.bot_emotion.intensity);
        self.emotion.write().observe_emotion(
            &input.bot_emotion.label,
            input.bot_emotion.intensity,
            &format!("Bot feeling: {}", truncate_chars(&input.response_text, 50)),
        );

        // recursive meta-cognition over the response; every level also
        // competes for workspace access
        let context = ReflectionContext {
            emotional_state: self.chemistry.emotional_state().to_string(),
            neurochemicals: Some(self.chemistry.levels()),
        };
        let tree = self
            .metacognition
            .reflect(&input.response_text, &context, generator);
        let reflections = tree.flatten();
        for entry in &reflections {
            self.metacog
                .write()
                .submit_reflection(&entry.content, entry.level);
        }

        // one arbitration cycle over everything submitted this turn
        let cycle = self.workspace.process_cycle();

        // homeostasis
        self.chemistry.homeostatic_decay();

        // score the turn; the result becomes the next turn's feedback
        let score = self.metrics.compute(
            &self.workspace,
            &reflections,
            &self.previous_conscious,
            &self.chemistry.levels(),
            self.metacognition.max_depth(),
        );
        self.previous_conscious = self.workspace.conscious_content();
        let feedback = score.feedback();
        self.last_feedback = Some(feedback);

        TurnOutcome {
            turn: self.turn,
            cycle,
            reflections,
            emotional_state: self.chemistry.emotional_state().to_string(),
            modulation: self.chemistry.behavioral_modulation(),
            chemicals: self.chemistry.levels(),
            score,
            feedback,
        }
    }

    /// Consciousness feedback from the most recent turn, if any.
    pub fn last_feedback(&self) -> Option<&BehavioralFeedback> {
        self.last_feedback.as_ref()
    }

    pub fn turn_count(&self) -> u64 {
        self.turn
    }

    pub fn workspace(&self) -> &GlobalWorkspace {
        &self.workspace
    }

    pub fn metacognition(&self) -> &RecursiveMetaCognition {
        &self.metacognition
    }

    pub fn chemistry(&self) -> &NeurochemicalSystem {
        &self.chemistry
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }

    /// Forget everything: workspace contents, working memory, stream,
    /// chemistry, score history, feedback, and the turn counter. The
    /// processor roster survives.
    pub fn reset(&mut self) {
        info!("session reset");
        self.workspace.clear();
        self.metacognition.clear();
        self.chemistry = NeurochemicalSystem::new();
        self.metrics.clear();
        self.previous_conscious.clear();
        self.last_feedback = None;
        self.turn = 0;
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
