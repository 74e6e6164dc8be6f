//! Bounded stream of every thought recorded this session.

use std::collections::VecDeque;

use crate::text::truncate_chars;

use super::thought::Thought;

/// Session-lifetime log of thoughts, oldest first.
///
/// A bounded ring rather than an append-only list: long sessions would
/// otherwise grow without limit. Working memory handles recency; this
/// stream exists for display and metrics.
#[derive(Debug, Clone)]
pub struct ConsciousnessStream {
    capacity: usize,
    thoughts: VecDeque<Thought>,
}

impl ConsciousnessStream {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            thoughts: VecDeque::new(),
        }
    }

    pub fn push(&mut self, thought: Thought) {
        self.thoughts.push_back(thought);
        if self.thoughts.len() > self.capacity {
            self.thoughts.pop_front();
        }
    }

    /// The `n` most recent thoughts, oldest first.
    pub fn recent(&self, n: usize) -> Vec<&Thought> {
        let skip = self.thoughts.len().saturating_sub(n);
        self.thoughts.iter().skip(skip).collect()
    }

    pub fn len(&self) -> usize {
        self.thoughts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.thoughts.is_empty()
    }

    pub fn clear(&mut self) {
        self.thoughts.clear();
    }

    /// Human-readable recent experience, indented by recursion level.
    pub fn summary(&self) -> String {
        if self.thoughts.is_empty() {
            return "No conscious thoughts yet.".to_string();
        }

        let mut summary = String::from("Stream of consciousness:\n");
        for thought in self.recent(5) {
            let indent = "  ".repeat(thought.level as usize);
            summary.push_str(&format!(
                "{indent}[{}] L{}: {}\n",
                thought.thought_type,
                thought.level,
                truncate_chars(&thought.content, 100)
            ));
        }
        summary
    }
}
