use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub type Threadable<T> = Arc<Mutex<T>>;

pub fn threadable_new<T>(t: T) -> Threadable<T> {
    Arc::new(Mutex::new(t))
}

// A callback that panicked on another thread leaves the lock poisoned; the
// value itself is still usable for the next dispatch.
pub fn lock_threadable<T: ?Sized>(t: &Mutex<T>) -> MutexGuard<'_, T> {
    t.lock().unwrap_or_else(PoisonError::into_inner)
}
