//! Recursive meta-cognition - bounded self-referential reflection.
//!
//! Each level reflects on the *previous level's output*, not the original
//! input, producing a nested chain of thoughts about thoughts:
//!
//! - Level 0: the direct response
//! - Level 1: "what stands out?" (observation)
//! - Level 2: "how confident am I?" (evaluation)
//! - Level 3: "what pattern explains this?" (introspection)
//! - Deeper: generic reflection, tagged `meta-{level}`
//!
//! Recursion terminates deterministically at the configured maximum depth;
//! total reflection-backend calls never exceed `max_depth`.
//!
//! ## Module Structure
//!
//! - `thought` - [`Thought`] and [`ThoughtType`]
//! - `working_memory` - fixed-capacity FIFO with attention weights
//! - `stream` - bounded ring of every thought ever recorded this session
//! - `recursion` - the [`RecursiveMetaCognition`] engine

mod recursion;
mod stream;
mod thought;
mod working_memory;

pub use recursion::{
    FlatReflection, RecursiveMetaCognition, ReflectionContext, ReflectionNode,
};
pub use stream::ConsciousnessStream;
pub use thought::{Thought, ThoughtType};
pub use working_memory::WorkingMemory;

/// Attention given to a thought at depth `d` is
/// `max(ATTENTION_FLOOR, 1.0 - d * ATTENTION_DECAY_PER_LEVEL)` - deeper
/// reflections receive strictly less attention, down to the floor.
pub const ATTENTION_FLOOR: f32 = 0.2;

/// Per-level attention falloff.
pub const ATTENTION_DECAY_PER_LEVEL: f32 = 0.2;

/// Output-length budget handed to the reflection backend; deeper
/// reflections are deliberately terse.
pub const REFLECTION_TOKEN_BUDGET: u32 = 30;

/// Reflected-on text is excerpted to this many characters when embedded in
/// a prompt.
pub const PROMPT_EXCERPT_CHARS: usize = 150;
