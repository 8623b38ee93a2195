// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Error, Handle};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Restartable stop signal
///
/// A signal is either running or stopped. [`StopSignal::stop`] fires the live
/// [`Handle`], waking everyone waiting on it. [`StopSignal::start`] swaps in a
/// fresh, unfired handle, so the owner can be restarted without losing any
/// state it carries.
///
/// Handles obtained before a restart stay fired: each one represents a single
/// stop episode, not the current state of the signal.
pub struct StopSignal {
    live: RwLock<Handle>,
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StopSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let live = self.read_live();

        f.debug_struct("StopSignal")
            .field("episode", &live.episode())
            .field("stopped", &live.is_fired())
            .finish()
    }
}

impl StopSignal {
    /// Creates a new signal in the running state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            live: RwLock::new(Handle::new(0)),
        }
    }

    /// Creates a new signal in the stopped state.
    #[must_use]
    pub fn new_stopped() -> Self {
        let handle = Handle::new(0);
        handle.fire();

        Self {
            live: RwLock::new(handle),
        }
    }

    // NOTE: The lock only guards which handle is live, and a handle
    // is always valid, so a poisoned lock can be recovered
    fn read_live(&self) -> RwLockReadGuard<'_, Handle> {
        self.live.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_live(&self) -> RwLockWriteGuard<'_, Handle> {
        self.live.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Stops the signal, waking up everyone waiting on the live handle.
    ///
    /// Does nothing if the signal is already stopped.
    pub fn stop(&self) {
        let live = self.write_live();

        if live.fire() {
            log::trace!("Stopped episode {}", live.episode());
        }
    }

    /// Starts the signal again.
    ///
    /// If the signal is stopped, the fired handle is replaced with a fresh one,
    /// which is returned by all subsequent calls to [`StopSignal::stopped`].
    ///
    /// Does nothing if the signal is already running.
    pub fn start(&self) {
        let mut live = self.write_live();

        if !live.is_fired() {
            return;
        }

        let episode = live.episode() + 1;
        *live = Handle::new(episode);

        log::trace!("Started episode {episode}");
    }

    /// Returns the handle of the current stop episode.
    ///
    /// The handle can be waited on until the signal is stopped.
    #[must_use]
    pub fn stopped(&self) -> Handle {
        self.read_live().clone()
    }

    /// Returns `true` if the signal is stopped.
    ///
    /// This never blocks on the handle and is stale as soon as it returns.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.read_live().is_fired()
    }

    /// Returns an error if the signal is stopped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stopped`] if the signal is stopped.
    pub fn check(&self) -> crate::Result<()> {
        let live = self.read_live();

        if live.is_fired() {
            Err(Error::Stopped {
                episode: live.episode(),
            })
        } else {
            Ok(())
        }
    }

    /// Blocks until the signal is stopped.
    ///
    /// Same as `self.stopped().wait()`. The lock is not held while waiting.
    pub fn wait(&self) {
        self.stopped().wait();
    }

    /// Returns the episode number of the live handle.
    #[must_use]
    pub fn episode(&self) -> u64 {
        self.read_live().episode()
    }
}
