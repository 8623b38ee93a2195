// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

use crate::{Handle, StopSignal};
use std::sync::Arc;

/// Something that owns a [`StopSignal`]
///
/// Implementing the accessor gives a worker the signal's operations as its own.
///
/// ```
/// use stop_signal::{StopSignal, Stoppable};
///
/// #[derive(Default)]
/// struct Worker {
///     received: Vec<u32>,
///     signal: StopSignal,
/// }
///
/// impl Stoppable for Worker {
///     fn stop_signal(&self) -> &StopSignal {
///         &self.signal
///     }
/// }
///
/// let worker = Worker::default();
/// worker.stop();
/// assert!(worker.is_stopped());
/// ```
pub trait Stoppable {
    /// Returns the owned stop signal.
    fn stop_signal(&self) -> &StopSignal;

    /// See [`StopSignal::start`].
    fn start(&self) {
        self.stop_signal().start();
    }

    /// See [`StopSignal::stop`].
    fn stop(&self) {
        self.stop_signal().stop();
    }

    /// See [`StopSignal::stopped`].
    fn stopped(&self) -> Handle {
        self.stop_signal().stopped()
    }

    /// See [`StopSignal::is_stopped`].
    fn is_stopped(&self) -> bool {
        self.stop_signal().is_stopped()
    }

    /// See [`StopSignal::check`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Stopped`](crate::Error::Stopped) if the signal is stopped.
    fn check(&self) -> crate::Result<()> {
        self.stop_signal().check()
    }
}

impl Stoppable for StopSignal {
    fn stop_signal(&self) -> &StopSignal {
        self
    }
}

impl<T: Stoppable + ?Sized> Stoppable for &T {
    fn stop_signal(&self) -> &StopSignal {
        (**self).stop_signal()
    }
}

impl<T: Stoppable + ?Sized> Stoppable for Box<T> {
    fn stop_signal(&self) -> &StopSignal {
        (**self).stop_signal()
    }
}

impl<T: Stoppable + ?Sized> Stoppable for Arc<T> {
    fn stop_signal(&self) -> &StopSignal {
        (**self).stop_signal()
    }
}

/// Returns `true` if the owner exists and is stopped.
///
/// An absent owner counts as running.
#[must_use]
pub fn is_stopped<S: Stoppable + ?Sized>(owner: Option<&S>) -> bool {
    owner.is_some_and(|owner| owner.is_stopped())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[derive(Default)]
    struct Counter {
        count: usize,
        signal: StopSignal,
    }

    impl Stoppable for Counter {
        fn stop_signal(&self) -> &StopSignal {
            &self.signal
        }
    }

    #[test]
    fn stoppable_delegates() {
        let counter = Counter::default();
        assert!(!counter.is_stopped());
        assert!(counter.check().is_ok());

        counter.stop();
        assert!(counter.is_stopped());
        assert!(counter.stopped().is_fired());
        assert!(counter.signal.is_stopped());

        counter.start();
        assert!(!counter.is_stopped());
        assert_eq!(0, counter.count);
    }

    #[test]
    fn stoppable_through_pointers() {
        let counter = Arc::new(Counter::default());
        let boxed: Box<dyn Stoppable> = Box::new(StopSignal::new());

        Stoppable::stop(&counter);
        boxed.stop();

        assert!(counter.is_stopped());
        assert!(boxed.is_stopped());
    }

    #[test]
    fn is_stopped_absent_owner() {
        assert!(!is_stopped::<Counter>(None));
        assert!(!is_stopped::<dyn Stoppable>(None));
    }

    #[test]
    fn is_stopped_present_owner() {
        let counter = Counter::default();
        assert!(!is_stopped(Some(&counter)));

        counter.stop();
        assert!(is_stopped(Some(&counter)));
    }
}
