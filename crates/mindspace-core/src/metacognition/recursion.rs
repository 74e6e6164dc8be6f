//! The recursive reflection engine.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::MetacognitionConfig;
use crate::error::Result;
use crate::neuromod::ChemicalLevels;
use crate::text::truncate_chars;
use crate::traits::ReflectionGenerator;

use super::stream::ConsciousnessStream;
use super::thought::{Thought, ThoughtType};
use super::working_memory::WorkingMemory;
use super::{
    ATTENTION_DECAY_PER_LEVEL, ATTENTION_FLOOR, PROMPT_EXCERPT_CHARS, REFLECTION_TOKEN_BUDGET,
};

/// One node of the nested reflection tree.
///
/// `level` strictly increases by exactly 1 along `meta` links, terminating
/// in a `None` at or before the configured maximum depth.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionNode {
    pub level: u32,
    pub content: String,
    pub thought_type: ThoughtType,
    /// The reflection on this node's content, one level deeper.
    pub meta: Option<Box<ReflectionNode>>,
}

impl ReflectionNode {
    /// Pre-order traversal into a flat, increasing-depth sequence.
    ///
    /// Iterative on purpose: display code must not hit any recursion limit
    /// regardless of how deep a caller configures the engine.
    pub fn flatten(&self) -> Vec<FlatReflection> {
        let mut flat = Vec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            flat.push(FlatReflection {
                level: current.level,
                thought_type: current.thought_type.label(),
                content: current.content.clone(),
            });
            node = current.meta.as_deref();
        }
        flat
    }

    /// Deepest level present in this tree.
    pub fn depth(&self) -> u32 {
        let mut node = self;
        while let Some(meta) = node.meta.as_deref() {
            node = meta;
        }
        node.level
    }
}

/// One entry of the flattened reflection sequence - what downstream
/// display and metrics consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatReflection {
    pub level: u32,
    /// Stable label of the thought type (`response`, `observation`, ...).
    pub thought_type: String,
    pub content: String,
}

/// Caller-supplied context threaded through a reflection pass.
///
/// The introspection level folds the neurochemical snapshot into its
/// prompt; everything else is carried for the caller's own bookkeeping.
#[derive(Debug, Clone, Default)]
pub struct ReflectionContext {
    pub emotional_state: String,
    pub neurochemicals: Option<ChemicalLevels>,
}

/// Bounded self-referential reflection driver.
#[derive(Debug)]
pub struct RecursiveMetaCognition {
    max_depth: u32,
    working_memory: WorkingMemory,
    stream: ConsciousnessStream,
}

impl RecursiveMetaCognition {
    /// Engine with the given recursion ceiling and default memory sizes.
    pub fn new(max_depth: u32) -> Self {
        let config = MetacognitionConfig {
            max_depth,
            ..Default::default()
        };
        Self {
            max_depth,
            working_memory: WorkingMemory::new(config.working_memory_capacity),
            stream: ConsciousnessStream::new(config.stream_capacity),
        }
    }

    /// Engine with validated custom parameters.
    pub fn with_config(config: &MetacognitionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            max_depth: config.max_depth,
            working_memory: WorkingMemory::new(config.working_memory_capacity),
            stream: ConsciousnessStream::new(config.stream_capacity),
        })
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn working_memory(&self) -> &WorkingMemory {
        &self.working_memory
    }

    pub fn stream(&self) -> &ConsciousnessStream {
        &self.stream
    }

    /// Reflect on `thought` through up to `max_depth` recursive levels.
    ///
    /// Each level wraps the incoming thought, records it in working memory
    /// (deeper levels get strictly less attention) and the stream, asks the
    /// generator for a reflection on it, and recurses **on the reflection
    /// just produced** - the next level's input is this level's output,
    /// which is what makes the chain thoughts-about-thoughts rather than
    /// parallel reflections on the original.
    ///
    /// A generator failure is replaced by a placeholder and the recursion
    /// continues; producing the primary response must never be blocked by a
    /// broken reflection backend.
    pub fn reflect(
        &mut self,
        thought: &str,
        context: &ReflectionContext,
        generator: &dyn ReflectionGenerator,
    ) -> ReflectionNode {
        self.reflect_at(
            thought.to_string(),
            context,
            generator,
            0,
            ThoughtType::Response,
        )
    }

    fn reflect_at(
        &mut self,
        thought: String,
        context: &ReflectionContext,
        generator: &dyn ReflectionGenerator,
        depth: u32,
        thought_type: ThoughtType,
    ) -> ReflectionNode {
        // Base case: the ceiling is a leaf, recorded nowhere.
        if depth >= self.max_depth {
            return ReflectionNode {
                level: depth,
                content: thought,
                thought_type,
                meta: None,
            };
        }

        let record = Thought::new(depth, thought.clone(), thought_type);
        let attention = (1.0 - depth as f32 * ATTENTION_DECAY_PER_LEVEL).max(ATTENTION_FLOOR);
        self.working_memory.add(record.clone(), attention);
        self.stream.push(record);

        let (prompt, next_type) = reflection_prompt(depth, &thought, context);
        let meta_thought = match generator.generate(&prompt, REFLECTION_TOKEN_BUDGET) {
            Ok(text) => {
                debug!(depth, next = %next_type, "generated reflection");
                text
            }
            Err(err) => {
                warn!(depth, error = %err, "reflection failed, substituting placeholder");
                format!("(reflection unavailable at level {})", depth + 1)
            }
        };

        let deeper = self.reflect_at(meta_thought, context, generator, depth + 1, next_type);

        ReflectionNode {
            level: depth,
            content: thought,
            thought_type,
            meta: Some(Box::new(deeper)),
        }
    }

    /// Clear working memory and the consciousness stream.
    pub fn clear(&mut self) {
        self.working_memory.clear();
        self.stream.clear();
    }
}

/// The depth-keyed reflection strategy.
///
/// Returns the prompt for reflecting on `thought` at `depth`, and the type
/// the produced reflection will carry at `depth + 1`.
fn reflection_prompt(
    depth: u32,
    thought: &str,
    context: &ReflectionContext,
) -> (String, ThoughtType) {
    let excerpt = truncate_chars(thought, PROMPT_EXCERPT_CHARS);
    match depth {
        0 => (
            format!(
                "Response: \"{excerpt}\"\n\n\
                 Meta-observation (8 words max): What aspect of this response stands out most to you?"
            ),
            ThoughtType::Observation,
        ),
        1 => (
            format!(
                "You noticed: \"{excerpt}\"\n\n\
                 Meta-evaluation (8 words max): Rate confidence in this observation (0-10) and explain briefly:"
            ),
            ThoughtType::Evaluation,
        ),
        2 => {
            let chemicals = match &context.neurochemicals {
                Some(levels) => format!("Your neurochemical state: {levels}\n\n"),
                None => String::new(),
            };
            (
                format!(
                    "You evaluated: \"{excerpt}\"\n\n{chemicals}\
                     Meta-introspection (10 words max): What cognitive pattern or bias might explain this evaluation?"
                ),
                ThoughtType::Introspection,
            )
        }
        deeper => (
            format!(
                "Reflect on: \"{excerpt}\"\n\n\
                 Brief meta-thought (8 words max):"
            ),
            ThoughtType::Meta(deeper + 1),
        ),
    }
}

#[cfg(test)]
#[path = "recursion_tests.rs"]
mod tests;
