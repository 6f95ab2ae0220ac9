// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error-budget policy: how many misprints a token of a given length may carry.
//!
//! Short tokens get no tolerance at all. A single edit turns "ул" into half the
//! dictionary, so fuzziness only starts once a token is long enough that one or
//! two edits still leave it recognizable.

/// Upper bound on [`max_errors_for_length`] for any length.
pub const MAX_ERRORS_FOR_TOKEN: usize = 2;

/// Tokens shorter than this are matched exactly.
const ONE_ERROR_MIN_LEN: usize = 4;

/// Tokens at least this long tolerate [`MAX_ERRORS_FOR_TOKEN`] errors.
const TWO_ERRORS_MIN_LEN: usize = 8;

/// Maximum tolerated edit distance for a token of `length` code points.
///
/// Monotonic non-decreasing in `length` and never above [`MAX_ERRORS_FOR_TOKEN`].
pub fn max_errors_for_length(length: usize) -> usize {
    if length < ONE_ERROR_MIN_LEN {
        0
    } else if length < TWO_ERRORS_MIN_LEN {
        1
    } else {
        MAX_ERRORS_FOR_TOKEN
    }
}

/// [`max_errors_for_length`] applied to a token's code-point count.
pub fn max_errors_for_token(token: &[char]) -> usize {
    max_errors_for_length(token.len())
}
