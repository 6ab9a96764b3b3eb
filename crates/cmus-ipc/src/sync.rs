use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;

use tracing::warn;

static POISON_RESETS: AtomicU64 = AtomicU64::new(0);

/// Locks a connection slot, dropping its contents if a previous holder
/// panicked while holding it.
///
/// A panic in the middle of an exchange leaves an unknown amount of the
/// response unread, so the stream cannot be framed reliably afterwards.
pub(crate) fn lock_or_reset<T>(lock: &Mutex<Option<T>>) -> MutexGuard<'_, Option<T>> {
    lock.lock().unwrap_or_else(|poisoned| {
        POISON_RESETS.fetch_add(1, Ordering::Relaxed);
        warn!("cmus connection lock poisoned mid-exchange; dropping the stream");
        let mut guard = poisoned.into_inner();
        *guard = None;
        lock.clear_poison();
        guard
    })
}

pub(crate) fn mutex_lock_or_recover<T>(lock: &Mutex<T>) -> MutexGuard<'_, T> {
    lock.lock().unwrap_or_else(|poisoned| {
        warn!("recovering from poisoned mutex");
        poisoned.into_inner()
    })
}

pub fn poison_reset_count() -> u64 {
    POISON_RESETS.load(Ordering::Relaxed)
}
