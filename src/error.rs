// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type for the crate.
//!
//! Only automaton construction can fail on well-formed input, and only when a
//! caller bypasses the error-budget policy. The I/O and parse variants belong
//! to the dictionary file loader.

use thiserror::Error;

/// Errors raised by `toponym`.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested automaton budget exceeds what the builder supports.
    ///
    /// Budgets should always come from [`crate::max_errors_for_length`], so this
    /// indicates a programming error in the caller.
    #[error("invalid error budget {budget}: the automaton builder supports at most {max} errors")]
    InvalidBudget { budget: usize, max: usize },

    /// Dictionary file could not be read.
    #[error("failed to read synonym dictionary: {0}")]
    Io(#[from] std::io::Error),

    /// Dictionary file is not valid JSON for a [`crate::DictionaryFile`].
    #[error("failed to parse synonym dictionary: {0}")]
    Dictionary(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
