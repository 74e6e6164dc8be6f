//! A single thought in the consciousness stream.

use std::fmt;

use chrono::{DateTime, Utc};

/// What kind of reflection a thought is.
///
/// The first four correspond to recursion depths 0-3; depths beyond that
/// carry a generic `meta-{level}` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThoughtType {
    /// The direct response being reflected upon (depth 0).
    Response,
    /// Self-observation: what stands out (depth 1).
    Observation,
    /// Meta-evaluation: confidence rating (depth 2).
    Evaluation,
    /// Introspection: the underlying cognitive pattern (depth 3).
    Introspection,
    /// Generic deep reflection, tagged with its level.
    Meta(u32),
}

impl ThoughtType {
    /// Stable string label, used in flattened output and displays.
    pub fn label(&self) -> String {
        match self {
            Self::Response => "response".to_string(),
            Self::Observation => "observation".to_string(),
            Self::Evaluation => "evaluation".to_string(),
            Self::Introspection => "introspection".to_string(),
            Self::Meta(level) => format!("meta-{level}"),
        }
    }
}

impl fmt::Display for ThoughtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// An immutable record of one thought at one recursion level.
#[derive(Debug, Clone)]
pub struct Thought {
    /// Recursion depth; 0 is the direct response.
    pub level: u32,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    pub thought_type: ThoughtType,
}

impl Thought {
    pub fn new(level: u32, content: impl Into<String>, thought_type: ThoughtType) -> Self {
        Self {
            level,
            content: content.into(),
            timestamp: Utc::now(),
            thought_type,
        }
    }
}
