//! Cancellable async calls
//!
//! UI components wrap each network call so that tearing the component down
//! aborts whatever is still in flight. An aborted call resolves to
//! [`ClientError::Cancelled`] and its continuation never runs.

use crate::types::{ClientError, Result};
use futures::future::{AbortHandle, Abortable};
use parking_lot::Mutex;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Handle to one cancellable call; aborts it when dropped unless detached
#[derive(Debug)]
pub struct TaskHandle {
    handle: AbortHandle,
    detached: bool,
}

impl TaskHandle {
    /// Abort the call
    pub fn abort(&self) {
        self.handle.abort();
    }

    pub fn is_aborted(&self) -> bool {
        self.handle.is_aborted()
    }

    /// Let the call run to completion regardless of this handle
    pub fn detach(mut self) {
        self.detached = true;
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        if !self.detached {
            self.handle.abort();
        }
    }
}

/// Wrap `fut` so it can be aborted through the returned handle
pub fn cancellable<F, T>(fut: F) -> (impl Future<Output = Result<T>>, TaskHandle)
where
    F: Future<Output = Result<T>>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let task = Abortable::new(fut, registration);
    let wrapped = async move { task.await.map_err(|_| ClientError::Cancelled)? };
    (
        wrapped,
        TaskHandle {
            handle,
            detached: false,
        },
    )
}

/// Tracks every call started by one component so they can all be cancelled
/// at teardown
#[derive(Debug, Clone, Default)]
pub struct TaskScope {
    inner: Arc<ScopeInner>,
}

#[derive(Debug, Default)]
struct ScopeInner {
    next_id: AtomicU64,
    pending: Mutex<Vec<(u64, AbortHandle)>>,
    closed: std::sync::atomic::AtomicBool,
}

/// Removes one call from its scope's pending set when dropped
struct PendingEntry {
    inner: Arc<ScopeInner>,
    id: u64,
}

impl Drop for PendingEntry {
    fn drop(&mut self) {
        self.inner
            .pending
            .lock()
            .retain(|(pending_id, _)| *pending_id != self.id);
    }
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `fut` so that [`TaskScope::cancel_all`] aborts it
    ///
    /// Calls wrapped after the scope was cancelled resolve to
    /// `Err(Cancelled)` without polling `fut`.
    pub fn wrap<F, T>(&self, fut: F) -> impl Future<Output = Result<T>>
    where
        F: Future<Output = Result<T>>,
    {
        let (handle, registration) = AbortHandle::new_pair();
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        if self.is_cancelled() {
            handle.abort();
        } else {
            self.inner.pending.lock().push((id, handle));
        }

        let entry = PendingEntry {
            inner: Arc::clone(&self.inner),
            id,
        };
        let task = Abortable::new(fut, registration);
        async move {
            // Deregisters on completion and when the future is dropped early
            let _entry = entry;
            task.await.map_err(|_| ClientError::Cancelled)?
        }
    }

    /// Abort every call still in flight and refuse new ones
    pub fn cancel_all(&self) {
        self.inner.closed.store(true, Ordering::SeqCst);
        let pending = std::mem::take(&mut *self.inner.pending.lock());
        if !pending.is_empty() {
            tracing::debug!("Cancelling {} in-flight request(s)", pending.len());
        }
        for (_, handle) in pending {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.closed.load(Ordering::SeqCst)
    }

    /// Number of calls started through this scope that have not finished
    pub fn in_flight(&self) -> usize {
        self.inner.pending.lock().len()
    }
}
