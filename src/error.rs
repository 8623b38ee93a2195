// Copyright (c) 2024-present, fjall-rs
// This source code is licensed under both the Apache 2.0 and MIT License
// (found in the LICENSE-* files in the repository)

/// Errors returned by the `check` helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The signal was stopped
    Stopped {
        /// Stop episode that was observed
        episode: u64,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stopped { episode } => write!(f, "stop requested (episode {episode})"),
        }
    }
}

impl std::error::Error for Error {}

/// Stop signal result
pub type Result<T> = std::result::Result<T, Error>;
