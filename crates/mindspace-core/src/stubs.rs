//! Deterministic stand-ins for the reflection backend.
//!
//! Used by the test suite and the CLI demo. None of these touch the network
//! or produce nondeterministic output, which makes recursion behavior
//! assertable.

use std::collections::VecDeque;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use parking_lot::Mutex;

use crate::error::ReflectionError;
use crate::traits::ReflectionGenerator;

/// Always returns the same fixed string.
#[derive(Debug, Clone)]
pub struct CannedReflection {
    text: String,
}

impl CannedReflection {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl ReflectionGenerator for CannedReflection {
    fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ReflectionError> {
        Ok(self.text.clone())
    }
}

/// Returns a tag derived from a hash of the prompt.
///
/// Because the tag is a pure function of the prompt, a test can verify that
/// the content stored at depth `d + 1` is exactly the reflection produced
/// from depth `d`'s prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoReflection;

impl EchoReflection {
    /// The tag this stub would produce for `prompt`.
    pub fn tag(prompt: &str) -> String {
        let mut hasher = DefaultHasher::new();
        prompt.hash(&mut hasher);
        format!("R({:016x})", hasher.finish())
    }
}

impl ReflectionGenerator for EchoReflection {
    fn generate(&self, prompt: &str, _max_tokens: u32) -> Result<String, ReflectionError> {
        Ok(Self::tag(prompt))
    }
}

/// Always fails; exercises the placeholder-substitution path.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingReflection;

impl ReflectionGenerator for FailingReflection {
    fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ReflectionError> {
        Err(ReflectionError::Backend("stub backend offline".into()))
    }
}

/// Pops pre-scripted lines in order, then repeats a fallback.
///
/// Interior mutability because [`ReflectionGenerator::generate`] takes
/// `&self`; the lock is uncontended in the single-threaded engine.
#[derive(Debug)]
pub struct ScriptedReflection {
    lines: Mutex<VecDeque<String>>,
    fallback: String,
}

impl ScriptedReflection {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: Mutex::new(lines.into_iter().map(Into::into).collect()),
            fallback: "a quiet, unremarkable thought".to_string(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }
}

impl ReflectionGenerator for ScriptedReflection {
    fn generate(&self, _prompt: &str, _max_tokens: u32) -> Result<String, ReflectionError> {
        Ok(self
            .lines
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}
