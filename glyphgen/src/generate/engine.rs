use std::time::Instant;

use tracing::{debug, info, warn};

use super::partition::assign_prefixes;
use super::state::GenerationState;
use super::walker::Walker;
use crate::config::GeneratorConfig;
use crate::errors::{GenerateError, GenerateResult};
use crate::length::min_length;
use crate::metrics::GenerationMetrics;
use crate::progress::{LogProgress, ProgressSink};
use crate::results::Generation;

/// Generates `config.count` unique strings, logging progress through tracing
pub fn generate(config: &GeneratorConfig) -> GenerateResult<Generation> {
    generate_with_progress(config, &LogProgress)
}

/// Generates `config.count` unique strings over the configured alphabet,
/// sending progress events to `progress`.
///
/// Orchestration: derive the minimum string length for the requested count,
/// apply the worker-count policy, deal the Gray-code prefixes out to the
/// workers, then run one walker task per worker against a freshly created
/// shared state. All workers finish before this returns, either because the
/// target was reached or because every subtree was exhausted. The latter
/// yields an under-sized but valid result and a warning, never an error.
pub fn generate_with_progress(
    config: &GeneratorConfig,
    progress: &dyn ProgressSink,
) -> GenerateResult<Generation> {
    if config.count == 0 {
        return Err(GenerateError::config_error(
            "count must be greater than 0",
        ));
    }
    let target = usize::try_from(config.count)
        .map_err(|_| GenerateError::config_error("count exceeds this platform's address space"))?;

    let started = Instant::now();
    info!("Generating {} unique strings...", config.count);

    let length = min_length(config.alphabet.len(), config.count);
    info!("Minimum length required: {}", length);

    // Length is derived from count, so capacity always suffices here; the
    // check guards callers that generalize the length calculation.
    if let Some(capacity) = config.alphabet.capacity(length) {
        if capacity < u128::from(config.count) {
            warn!(
                "search space holds only {} strings of length {}, fewer than the {} requested",
                capacity, length, config.count
            );
        }
    }

    let assignments = assign_prefixes(&config.alphabet, config.worker_count(), length);
    // Fewer subtrees than requested workers collapses to fewer workers.
    let workers = assignments.len();
    info!("Starting generation with {} workers...", workers);

    let state = GenerationState::new(target);
    let metrics = GenerationMetrics::new();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("glyphgen-worker-{i}"))
        .build()?;

    pool.scope(|scope| {
        for (worker_id, prefixes) in assignments.into_iter().enumerate() {
            let walker = Walker {
                state: &state,
                alphabet: &config.alphabet,
                metrics: &metrics,
                progress,
                progress_interval: config.progress_interval,
                started,
            };
            scope.spawn(move |_| {
                debug!(
                    "worker {} started with {} prefixes: {:?}...",
                    worker_id,
                    prefixes.len(),
                    prefixes.first()
                );
                for prefix in prefixes {
                    if walker.state.should_stop() {
                        break;
                    }
                    walker.walk(worker_id, prefix, length, target);
                }
                debug!("worker {} finished", worker_id);
            });
        }
    });

    metrics.log_stats();

    let elapsed = started.elapsed();
    let strings = state.into_strings();
    if strings.len() < target {
        warn!(
            "search space exhausted: generated {} of {} requested strings",
            strings.len(),
            target
        );
    }
    info!(
        "Generation completed in {}",
        humantime::format_duration(elapsed)
    );

    Ok(Generation::new(strings, elapsed, length, workers))
}
