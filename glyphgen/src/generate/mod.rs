/// This module implements the concurrent combinatorial generation engine,
/// demonstrating Rust's parallel processing capabilities compared to .NET's
/// Task Parallel Library (TPL).
///
/// # .NET vs Rust Parallel Processing
///
/// In .NET, you might fan generation out over tasks sharing a concurrent set:
/// ```csharp
/// var dictionary = new ConcurrentDictionary<string, byte>();
/// Parallel.For(0, workerCount, i => WalkSubtree(prefixes[i], dictionary));
/// ```
/// but nothing stops a task from overshooting the target: two tasks can both
/// observe `dictionary.Count == target - 1` and both insert.
///
/// In Rust, the shared state is a plain `Mutex<HashSet<String>>` owned by the
/// coordinator and lent to scoped rayon workers:
/// ```rust,ignore
/// pool.scope(|scope| {
///     for (worker_id, prefix) in prefixes.into_iter().enumerate() {
///         scope.spawn(move |_| walker.walk(worker_id, prefix, length, target));
///     }
/// });
/// ```
/// The size check, the insert, and the stop-flag store all happen under one
/// lock acquisition, so the set can never exceed the target, and the borrow
/// checker proves no worker retains access once the scope ends.
///
/// # Search Space Partitioning
///
/// Each worker explores a disjoint subtree selected by a reflected Gray code
/// prefix. The Gray code is cosmetic for correctness (any distinct-prefix
/// assignment works); it spreads the starting points across the enumeration
/// order so workers don't pile onto neighboring branches.
pub mod engine;
pub mod partition;
pub mod state;
pub mod walker;

pub use engine::{generate, generate_with_progress};
pub use partition::assign_prefixes;
