use std::num::NonZeroUsize;

/// Number of worker threads to use when none is configured.
#[must_use]
pub fn available_threads() -> NonZeroUsize {
    std::thread::available_parallelism().unwrap_or(NonZeroUsize::MIN)
}

/// Worker threads for a frame of `rows` rows: never more threads than rows.
#[must_use]
pub fn threads_for_rows(max_threads: NonZeroUsize, rows: u32) -> NonZeroUsize {
    let rows = NonZeroUsize::new(rows as usize).unwrap_or(NonZeroUsize::MIN);

    max_threads.min(rows)
}
