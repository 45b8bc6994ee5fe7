/// This module implements generation result types, demonstrating Rust's
/// ownership system compared to .NET's reference types.
///
/// # Rust Ownership vs .NET References
///
/// In .NET a generator typically exposes its internal collection:
/// ```csharp
/// public class DictionaryGenerator {
///     public HashSet<string> Dictionary { get; } // Callers share the live set
///     // Any caller can mutate it while workers are still running
/// }
/// ```
///
/// Here the engine *moves* the finished set into a `Generation` value:
/// ```rust,ignore
/// let generation = generate(&config)?; // Exclusive ownership transferred
/// for s in generation.iter() { /* immutable access only */ }
/// let strings = generation.into_strings(); // Consume to take the set
/// ```
///
/// Once a `Generation` exists, no worker holds a reference to its contents;
/// the type system makes post-run mutation impossible rather than merely
/// discouraged.
use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;

/// The finished output of one generation run: the unique strings plus the
/// timing and shape telemetry the run produced.
#[derive(Debug, Clone)]
pub struct Generation {
    strings: HashSet<String>,
    /// Wall-clock duration of the generation phase
    pub elapsed: Duration,
    /// Exact symbol length of every generated string
    pub string_length: usize,
    /// Number of walker workers the run used
    pub workers: usize,
}

impl Generation {
    pub(crate) fn new(
        strings: HashSet<String>,
        elapsed: Duration,
        string_length: usize,
        workers: usize,
    ) -> Self {
        Self {
            strings,
            elapsed,
            string_length,
            workers,
        }
    }

    /// Number of unique strings generated
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.strings.contains(candidate)
    }

    /// Iterates over the strings in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }

    /// Consumes the generation, returning the owned string set
    pub fn into_strings(self) -> HashSet<String> {
        self.strings
    }

    /// Up to `limit` strings, for display purposes. Order is arbitrary.
    pub fn sample(&self, limit: usize) -> Vec<&str> {
        self.iter().take(limit).collect()
    }

    /// Computes summary statistics over the finished set
    pub fn stats(&self) -> GenerationStats {
        let mut min_length = usize::MAX;
        let mut max_length = 0;
        let mut total_length = 0u64;
        for s in &self.strings {
            let len = s.chars().count();
            min_length = min_length.min(len);
            max_length = max_length.max(len);
            total_length += len as u64;
        }
        if self.strings.is_empty() {
            min_length = 0;
        }

        let elapsed_ms = self.elapsed.as_millis() as u64;
        let strings_per_second = if self.elapsed.is_zero() {
            0.0
        } else {
            self.strings.len() as f64 / self.elapsed.as_secs_f64()
        };

        GenerationStats {
            total: self.strings.len(),
            string_length: self.string_length,
            workers: self.workers,
            elapsed_ms,
            strings_per_second,
            min_length,
            max_length,
            mean_length: if self.strings.is_empty() {
                0.0
            } else {
                total_length as f64 / self.strings.len() as f64
            },
        }
    }
}

/// Summary statistics for a finished generation run
#[derive(Debug, Clone, Serialize)]
pub struct GenerationStats {
    /// Total unique strings generated
    pub total: usize,
    /// Target symbol length of the run
    pub string_length: usize,
    /// Worker count the run used
    pub workers: usize,
    /// Generation wall-clock time in milliseconds
    pub elapsed_ms: u64,
    /// Generation throughput
    pub strings_per_second: f64,
    /// Shortest string observed (0 for an empty run)
    pub min_length: usize,
    /// Longest string observed
    pub max_length: usize,
    /// Mean string length
    pub mean_length: f64,
}
