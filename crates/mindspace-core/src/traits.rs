//! Collaborator contracts.
//!
//! The engine's only external seam is text generation for meta-cognitive
//! reflections. Emotion classification, linguistic analysis, and response
//! generation happen upstream; their outputs arrive as plain data on
//! [`crate::session::TurnInput`].

use crate::error::ReflectionError;

/// A synchronous text-producing backend for meta-cognitive reflection.
///
/// `max_tokens` is an output-length budget; deeper reflections are kept
/// deliberately terse. Implementations should return *some* text whenever
/// possible. The recursion engine treats an `Err` as recoverable and
/// substitutes a placeholder, so a reflection failure never aborts the
/// conversational turn it belongs to.
pub trait ReflectionGenerator {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, ReflectionError>;
}

/// Any `Fn(&str, u32) -> Result<String, ReflectionError>` is a generator.
impl<F> ReflectionGenerator for F
where
    F: Fn(&str, u32) -> Result<String, ReflectionError>,
{
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String, ReflectionError> {
        self(prompt, max_tokens)
    }
}
