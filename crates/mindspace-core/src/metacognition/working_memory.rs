//! Fixed-capacity FIFO of recent thoughts with per-item attention weights.

use std::collections::VecDeque;

use super::thought::Thought;

/// A small buffer of recent thoughts, Miller's 7±2 by default.
///
/// Eviction is strict FIFO - oldest out first, never priority-based - and
/// the buffer and its attention weights always have equal length, at most
/// `capacity`. Independent of the global workspace's active set.
#[derive(Debug, Clone)]
pub struct WorkingMemory {
    capacity: usize,
    buffer: VecDeque<Thought>,
    attention_weights: VecDeque<f32>,
}

impl WorkingMemory {
    /// `capacity` must be at least 1; validated upstream by
    /// [`crate::config::MetacognitionConfig`].
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity + 1),
            attention_weights: VecDeque::with_capacity(capacity + 1),
        }
    }

    /// Append a thought with its attention weight, evicting the oldest
    /// entry once over capacity.
    pub fn add(&mut self, thought: Thought, attention: f32) {
        self.buffer.push_back(thought);
        self.attention_weights.push_back(attention.clamp(0.0, 1.0));
        if self.buffer.len() > self.capacity {
            self.buffer.pop_front();
            self.attention_weights.pop_front();
        }
    }

    /// The `n` most recent thoughts, oldest first.
    pub fn recent(&self, n: usize) -> Vec<&Thought> {
        let skip = self.buffer.len().saturating_sub(n);
        self.buffer.iter().skip(skip).collect()
    }

    /// The `n` most attended thoughts, highest attention first.
    pub fn attended(&self, n: usize) -> Vec<&Thought> {
        let mut pairs: Vec<(&Thought, f32)> = self
            .buffer
            .iter()
            .zip(self.attention_weights.iter().copied())
            .collect();
        pairs.sort_by(|a, b| b.1.total_cmp(&a.1));
        pairs.into_iter().take(n).map(|(thought, _)| thought).collect()
    }

    pub fn attention_weights(&self) -> impl Iterator<Item = f32> + '_ {
        self.attention_weights.iter().copied()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.attention_weights.clear();
    }
}
