use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, PoisonError};

/// Outcome of one [`GenerationState::try_accept`] call
#[derive(Debug, Clone, Copy)]
pub(crate) struct Acceptance {
    /// The candidate entered the set
    pub accepted: bool,
    /// The set has reached the target size
    pub saturated: bool,
    /// Run-wide acceptance count after this call
    pub total_accepted: u64,
}

/// Shared mutable state for one generation run: the result set, the
/// acceptance counter, and the stop flag.
///
/// Created fresh by the coordinator for each run and lent to workers by
/// reference, so no state leaks between invocations. The termination
/// protocol lives entirely in `try_accept`: the size check, the insert, and
/// the stop-flag store happen under a single lock acquisition, which is what
/// keeps the set from ever exceeding the target under concurrent insert
/// pressure.
#[derive(Debug)]
pub(crate) struct GenerationState {
    dictionary: Mutex<HashSet<String>>,
    accepted: AtomicU64,
    stop: AtomicBool,
}

impl GenerationState {
    pub fn new(target: usize) -> Self {
        Self {
            dictionary: Mutex::new(HashSet::with_capacity(target)),
            accepted: AtomicU64::new(0),
            stop: AtomicBool::new(false),
        }
    }

    /// Cheap, approximate stop check. A false negative only costs a few
    /// wasted insert attempts; `try_accept`'s own bound check is the
    /// authoritative one.
    pub fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Acquire)
    }

    /// Requests all workers to exit. `try_accept` sets this internally when
    /// the target is reached; external cancellation layers (timeouts) may
    /// set it too.
    pub fn request_stop(&self) {
        self.stop.store(true, Ordering::Release);
    }

    /// Attempts to add `candidate` to the result set, bounded by `target`.
    ///
    /// Under one exclusive critical section: rejects if the set is already
    /// at target size, rejects duplicates, and otherwise inserts. If the
    /// insert reaches the target, the stop flag is raised while the lock is
    /// still held, so the flag is visible no later than the insertion that
    /// saturated the set.
    pub fn try_accept(&self, candidate: String, target: usize) -> Acceptance {
        // A poisoned lock means another walker panicked mid-insert; the set
        // itself is still a valid HashSet, so keep going rather than
        // cascading the panic through every worker.
        let mut dictionary = self
            .dictionary
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if dictionary.len() >= target {
            return Acceptance {
                accepted: false,
                saturated: true,
                total_accepted: self.accepted.load(Ordering::Relaxed),
            };
        }

        if !dictionary.insert(candidate) {
            return Acceptance {
                accepted: false,
                saturated: false,
                total_accepted: self.accepted.load(Ordering::Relaxed),
            };
        }

        let total_accepted = self.accepted.fetch_add(1, Ordering::Relaxed) + 1;
        let saturated = dictionary.len() >= target;
        if saturated {
            self.stop.store(true, Ordering::Release);
        }

        Acceptance {
            accepted: true,
            saturated,
            total_accepted,
        }
    }

    /// Current result set size
    pub fn len(&self) -> usize {
        self.dictionary
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Consumes the state, returning the accepted strings
    pub fn into_strings(self) -> HashSet<String> {
        self.dictionary
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_until_target() {
        let state = GenerationState::new(2);

        let first = state.try_accept("Il".to_string(), 2);
        assert!(first.accepted);
        assert!(!first.saturated);
        assert_eq!(first.total_accepted, 1);
        assert!(!state.should_stop());

        let second = state.try_accept("lI".to_string(), 2);
        assert!(second.accepted);
        assert!(second.saturated);
        assert_eq!(second.total_accepted, 2);
        assert!(state.should_stop());

        // Saturated set rejects without mutating.
        let third = state.try_accept("II".to_string(), 2);
        assert!(!third.accepted);
        assert!(third.saturated);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_rejects_duplicates() {
        let state = GenerationState::new(10);
        assert!(state.try_accept("Il".to_string(), 10).accepted);

        let dup = state.try_accept("Il".to_string(), 10);
        assert!(!dup.accepted);
        assert!(!dup.saturated);
        assert_eq!(dup.total_accepted, 1);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_request_stop() {
        let state = GenerationState::new(10);
        assert!(!state.should_stop());
        state.request_stop();
        assert!(state.should_stop());
    }

    #[test]
    fn test_never_exceeds_target_under_contention() {
        use std::sync::Arc;

        let state = Arc::new(GenerationState::new(100));
        let handles: Vec<_> = (0..8)
            .map(|worker| {
                let state = Arc::clone(&state);
                std::thread::spawn(move || {
                    for i in 0..1_000 {
                        // Overlapping candidate ranges force duplicates too.
                        state.try_accept(format!("s{}", (worker * 500 + i) % 2_000), 100);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(state.len(), 100);
        assert!(state.should_stop());
        let strings = Arc::try_unwrap(state).unwrap().into_strings();
        assert_eq!(strings.len(), 100);
    }

    #[test]
    fn test_into_strings_returns_accepted_set() {
        let state = GenerationState::new(3);
        state.try_accept("a".to_string(), 3);
        state.try_accept("b".to_string(), 3);
        let strings = state.into_strings();
        assert_eq!(strings.len(), 2);
        assert!(strings.contains("a"));
        assert!(strings.contains("b"));
    }
}
