// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Condvar, Mutex, MutexGuard, PoisonError,
    },
    time::{Duration, Instant},
};

struct Inner {
    episode: u64,
    fired: AtomicBool,
    lock: Mutex<()>,
    condvar: Condvar,
}

impl Inner {
    fn lock(&self) -> MutexGuard<'_, ()> {
        // NOTE: The mutex guards no data, so a poisoned lock is still usable
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// One-shot broadcast handle of a single stop episode
///
/// A handle starts unfired and is fired at most once. After that it stays
/// fired forever, even if the [`StopSignal`](crate::StopSignal) it came from
/// has been started again in the meantime.
///
/// Cloning a handle is cheap and yields another reference to the same episode.
#[derive(Clone)]
pub struct Handle(Arc<Inner>);

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Handle")
            .field("episode", &self.episode())
            .field("fired", &self.is_fired())
            .finish()
    }
}

impl Handle {
    pub(crate) fn new(episode: u64) -> Self {
        Self(Arc::new(Inner {
            episode,
            fired: AtomicBool::new(false),
            lock: Mutex::new(()),
            condvar: Condvar::new(),
        }))
    }

    /// Fires the handle, waking up every waiter.
    ///
    /// Returns `true` if this call fired the handle,
    /// `false` if it was already fired.
    pub(crate) fn fire(&self) -> bool {
        let _guard = self.0.lock();

        if self.0.fired.swap(true, Ordering::AcqRel) {
            return false;
        }

        self.0.condvar.notify_all();
        true
    }

    /// Returns `true` if the handle has been fired.
    ///
    /// This never blocks.
    #[must_use]
    pub fn is_fired(&self) -> bool {
        self.0.fired.load(Ordering::Acquire)
    }

    /// Blocks the current thread until the handle is fired.
    ///
    /// Returns immediately if the handle is already fired.
    pub fn wait(&self) {
        if self.is_fired() {
            return;
        }

        let mut guard = self.0.lock();

        while !self.is_fired() {
            guard = self
                .0
                .condvar
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    /// Blocks the current thread until the handle is fired, or the timeout elapses.
    ///
    /// Returns `true` if the handle is fired.
    #[must_use]
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        if self.is_fired() {
            return true;
        }

        let Some(deadline) = Instant::now().checked_add(timeout) else {
            self.wait();
            return true;
        };

        let mut guard = self.0.lock();

        while !self.is_fired() {
            let Some(remaining) = deadline.checked_duration_since(Instant::now()) else {
                break;
            };

            guard = self
                .0
                .condvar
                .wait_timeout(guard, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }

        self.is_fired()
    }

    /// Returns the stop episode this handle belongs to.
    #[must_use]
    pub fn episode(&self) -> u64 {
        self.0.episode
    }

    /// Returns `true` if both handles refer to the same stop episode.
    #[must_use]
    pub fn same_episode(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}
