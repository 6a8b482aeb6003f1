use std::sync::atomic::{AtomicUsize, Ordering};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a process-wide unique counter value for factory defaults.
///
/// Used to generate distinct names and emails so tests that create several
/// records never collide on default values.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
