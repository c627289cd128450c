//! Cooperative shutdown.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use parking_lot::{Condvar, Mutex};

/// A one-way stop flag shared by every worker of a run.
///
/// Workers poll [`is_requested`](Self::is_requested) between steps and
/// cycles, and do all of their sleeping through
/// [`wait_timeout`](Self::wait_timeout) so a request wakes them at once.
#[derive(Clone, Default)]
pub struct ShutdownSignal {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    requested: AtomicBool,
    lock:      Mutex<()>,
    wake:      Condvar,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every worker to stop.  Idempotent.
    pub fn request(&self) {
        self.inner.requested.store(true, Ordering::Release);
        let _guard = self.inner.lock.lock();
        self.inner.wake.notify_all();
    }

    #[inline]
    pub fn is_requested(&self) -> bool {
        self.inner.requested.load(Ordering::Acquire)
    }

    /// Sleep for `timeout`, returning early if shutdown is requested.
    ///
    /// Returns `true` if shutdown has been requested.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        if self.is_requested() || timeout.is_zero() {
            return self.is_requested();
        }
        let deadline = Instant::now() + timeout;
        let mut guard = self.inner.lock.lock();
        while !self.is_requested() {
            if self.inner.wake.wait_until(&mut guard, deadline).timed_out() {
                break;
            }
        }
        self.is_requested()
    }
}

impl std::fmt::Debug for ShutdownSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShutdownSignal")
            .field("requested", &self.is_requested())
            .finish()
    }
}
