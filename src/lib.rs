// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

//! A thread-safe stop signal that can be started again after it has been stopped.
//!
//! Closing a one-shot signal is the usual way to tell worker threads to exit.
//! That works well when the workers are thrown away afterwards, but not when a
//! long-lived worker carries state it should keep while it is paused.
//!
//! [`StopSignal`] hands out [`Handle`]s, one per stop episode:
//!
//! - [`StopSignal::stop`] fires the live handle, waking every waiter
//! - [`StopSignal::start`] replaces a fired handle with a fresh one
//! - [`StopSignal::stopped`] returns the live handle, which can be waited on
//! - [`StopSignal::is_stopped`] polls the live handle without blocking
//!
//! A handle that was fired stays fired, even after the signal was started again.
//!
//! ```
//! use stop_signal::StopSignal;
//! use std::sync::Arc;
//!
//! let signal = Arc::new(StopSignal::new());
//! let handle = signal.stopped();
//!
//! let waiter = std::thread::spawn(move || {
//!     // Blocks until the signal is stopped
//!     handle.wait();
//! });
//!
//! signal.stop();
//! waiter.join().unwrap();
//! assert!(signal.is_stopped());
//!
//! // Start again, reusing the same signal
//! signal.start();
//! assert!(!signal.is_stopped());
//! assert!(!signal.stopped().is_fired());
//! ```
//!
//! Workers usually own their signal and implement [`Stoppable`] to expose it.

#![forbid(unsafe_code)]
#![deny(clippy::all, missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::indexing_slicing)]
#![warn(clippy::pedantic, clippy::nursery)]
#![warn(clippy::expect_used)]
#![allow(clippy::missing_const_for_fn)]

mod error;
mod handle;
mod stop_signal;
mod stoppable;

pub use {
    error::{Error, Result},
    handle::Handle,
    stop_signal::StopSignal,
    stoppable::{is_stopped, Stoppable},
};
