use std::time::Instant;

use tracing::trace;

use super::state::GenerationState;
use crate::alphabet::Alphabet;
use crate::metrics::GenerationMetrics;
use crate::progress::ProgressSink;

/// One frame of the explicit DFS stack: a partial string and its length in
/// symbols. The symbol count rides along so multi-byte alphabets never need
/// an `O(n)` `chars().count()` per frame.
type Frame = (String, usize);

/// Depth-first enumerator of all strings of a fixed symbol length extending
/// one prefix.
///
/// Runs independently per worker; every field is a shared borrow into
/// coordinator-owned state, dropped when the worker's scope ends. The
/// traversal is recursive in shape but iterative in form: an explicit stack
/// bounds live memory at `O(length * alphabet_size)` frames regardless of
/// target length.
pub(crate) struct Walker<'a> {
    pub state: &'a GenerationState,
    pub alphabet: &'a Alphabet,
    pub metrics: &'a GenerationMetrics,
    pub progress: &'a dyn ProgressSink,
    /// Acceptances between progress events; 0 disables them
    pub progress_interval: u64,
    /// Generation start, for progress elapsed times
    pub started: Instant,
}

impl Walker<'_> {
    /// Walks the subtree of strings of exactly `length` symbols beginning
    /// with `prefix`, submitting each leaf to the shared set.
    ///
    /// Exits when the subtree is exhausted or the stop flag is raised,
    /// checked once per popped frame; both are normal completion, so there
    /// is nothing to return. Children are pushed in reverse symbol order so
    /// the alphabet's first symbol is always explored first, keeping
    /// intermediate progress deterministic for a given worker.
    pub fn walk(&self, worker_id: usize, prefix: String, length: usize, target: usize) {
        if self.state.should_stop() {
            return;
        }

        let prefix_symbols = prefix.chars().count();
        let mut stack: Vec<Frame> = Vec::with_capacity(length * self.alphabet.len());
        stack.push((prefix, prefix_symbols));

        while let Some((current, symbols)) = stack.pop() {
            if self.state.should_stop() {
                trace!("[worker {}] stop flag observed, exiting", worker_id);
                return;
            }
            self.metrics.record_frame();

            if symbols >= length {
                self.submit(worker_id, current, target);
                continue;
            }

            for index in (0..self.alphabet.len()).rev() {
                let mut child = String::with_capacity(current.len() + 4);
                child.push_str(&current);
                child.push(self.alphabet.symbol(index));
                stack.push((child, symbols + 1));
            }
        }
    }

    fn submit(&self, worker_id: usize, candidate: String, target: usize) {
        let acceptance = self.state.try_accept(candidate, target);
        if acceptance.accepted {
            self.metrics.record_accepted();
            if self.progress_interval > 0 && acceptance.total_accepted % self.progress_interval == 0
            {
                self.progress
                    .generated(worker_id, acceptance.total_accepted, self.started.elapsed());
            }
        } else if acceptance.saturated {
            self.metrics.record_saturated();
        } else {
            self.metrics.record_duplicate();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NullProgress;
    use std::collections::HashSet;

    fn run_walker(prefix: &str, length: usize, target: usize) -> HashSet<String> {
        let state = GenerationState::new(target);
        let alphabet = Alphabet::confusable();
        let metrics = GenerationMetrics::new();
        let walker = Walker {
            state: &state,
            alphabet: &alphabet,
            metrics: &metrics,
            progress: &NullProgress,
            progress_interval: 0,
            started: Instant::now(),
        };
        walker.walk(0, prefix.to_string(), length, target);
        state.into_strings()
    }

    #[test]
    fn test_enumerates_full_subtree() {
        // Prefix "I" over length 3: exactly the 4 strings I??.
        let strings = run_walker("I", 3, 100);
        let expected: HashSet<String> = ["III", "IIl", "IlI", "Ill"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(strings, expected);
    }

    #[test]
    fn test_prefix_at_full_length_is_single_leaf() {
        let strings = run_walker("Il", 2, 100);
        assert_eq!(strings.len(), 1);
        assert!(strings.contains("Il"));
    }

    #[test]
    fn test_stops_at_target() {
        let strings = run_walker("", 4, 5);
        assert_eq!(strings.len(), 5);
        for s in &strings {
            assert_eq!(s.chars().count(), 4);
        }
    }

    #[test]
    fn test_respects_preset_stop_flag() {
        let state = GenerationState::new(10);
        state.request_stop();
        let alphabet = Alphabet::confusable();
        let metrics = GenerationMetrics::new();
        let walker = Walker {
            state: &state,
            alphabet: &alphabet,
            metrics: &metrics,
            progress: &NullProgress,
            progress_interval: 0,
            started: Instant::now(),
        };
        walker.walk(0, "I".to_string(), 3, 10);
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn test_first_symbol_explored_first() {
        // With a target of 1 the very first leaf wins; reverse-order pushes
        // mean that leaf is the all-first-symbol string.
        let strings = run_walker("", 3, 1);
        assert_eq!(strings.len(), 1);
        assert!(strings.contains("III"));
    }

    #[test]
    fn test_metrics_observe_duplicates() {
        let state = GenerationState::new(10);
        let alphabet = Alphabet::confusable();
        let metrics = GenerationMetrics::new();
        let walker = Walker {
            state: &state,
            alphabet: &alphabet,
            metrics: &metrics,
            progress: &NullProgress,
            progress_interval: 0,
            started: Instant::now(),
        };
        // Same subtree twice: second pass is all duplicates.
        walker.walk(0, "I".to_string(), 2, 10);
        walker.walk(1, "I".to_string(), 2, 10);

        let stats = metrics.get_stats();
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.duplicates, 2);
        assert_eq!(state.len(), 2);
    }
}
