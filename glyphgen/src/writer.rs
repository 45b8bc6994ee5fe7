use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use tracing::info;

use crate::errors::{GenerateError, GenerateResult};
use crate::results::Generation;

const WRITE_BUFFER_CAPACITY: usize = 64 * 1024;

/// What a dictionary write accomplished
#[derive(Debug, Clone, Copy)]
pub struct WriteReport {
    /// Number of strings written
    pub written: usize,
    /// Wall-clock duration of the write
    pub elapsed: Duration,
}

/// Writes every generated string to `path`, one per line, in no particular
/// order.
///
/// A destination that cannot be opened is reported as
/// [`GenerateError::OutputError`]; the generation itself is untouched, so
/// callers can retry with another destination.
pub fn write_dictionary(path: &Path, generation: &Generation) -> GenerateResult<WriteReport> {
    let started = Instant::now();

    let file = File::create(path).map_err(|e| GenerateError::output_error(path, e))?;
    let mut writer = BufWriter::with_capacity(WRITE_BUFFER_CAPACITY, file);

    let mut written = 0;
    for s in generation.iter() {
        writer.write_all(s.as_bytes())?;
        writer.write_all(b"\n")?;
        written += 1;
    }
    writer.flush()?;

    let elapsed = started.elapsed();
    info!(
        "Saved {} strings to {} in {}ms",
        written,
        path.display(),
        elapsed.as_millis()
    );

    Ok(WriteReport { written, elapsed })
}
